use std::fmt::Debug;

/// A fixed-length sequence of bits stored least-significant-bit first.
///
/// Present streams and boolean columns decode into this type: bit `i` lives in byte `i / 8`
/// at position `i % 8`.
#[derive(Clone, PartialEq, Eq)]
pub struct BitVector {
	bytes: Vec<u8>,
	len: usize,
}

impl BitVector {
	/// Wraps `bytes` as a vector of `len` bits. Bits beyond the byte buffer read as `false`.
	#[must_use]
	pub fn new(bytes: Vec<u8>, len: usize) -> BitVector {
		BitVector { bytes, len }
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.len
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Returns the bit at `index`, or `false` when `index` is out of range.
	#[must_use]
	pub fn get(&self, index: usize) -> bool {
		if index >= self.len {
			return false;
		}
		self.bytes.get(index / 8).is_some_and(|byte| (byte >> (index % 8)) & 1 == 1)
	}

	/// Counts the set bits.
	#[must_use]
	pub fn count_ones(&self) -> usize {
		self.iter().filter(|bit| *bit).count()
	}

	pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
		(0..self.len).map(|index| self.get(index))
	}

	#[must_use]
	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}
}

impl Debug for BitVector {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let bits: String = self.iter().map(|bit| if bit { '1' } else { '0' }).collect();
		f.debug_tuple("BitVector").field(&bits).finish()
	}
}
