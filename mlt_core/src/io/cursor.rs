//! This module provides the [`Cursor`] struct for reading values from a byte slice.
//!
//! # Overview
//!
//! A `Cursor` wraps a byte slice together with a read position. All reads are bounds-checked
//! and return [`DecodeError::TruncatedInput`] instead of panicking, so a malformed tile can never
//! cause an out-of-bounds access. Sub-cursors restrict decoding to the byte range of one stream.
//!
//! # Examples
//!
//! ```rust
//! use mlt_core::io::Cursor;
//!
//! let mut cursor = Cursor::new(&[0xAC, 0x02, 0x07]);
//! assert_eq!(cursor.read_varint32().unwrap(), 300);
//! assert_eq!(cursor.read_u8().unwrap(), 7);
//! assert!(!cursor.has_remaining());
//! ```

use crate::{DecodeError, DecodeResult};
use byteorder::{ByteOrder, LittleEndian};

/// A bounds-checked read position over a byte slice.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
	data: &'a [u8],
	position: usize,
}

impl<'a> Cursor<'a> {
	/// Creates a new `Cursor` positioned at the start of `data`.
	#[must_use]
	pub fn new(data: &'a [u8]) -> Cursor<'a> {
		Cursor { data, position: 0 }
	}

	/// Returns the total length of the readable data.
	#[must_use]
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Checks if there is no data at all.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Returns the current read position.
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	/// Returns the number of bytes remaining to be read.
	#[must_use]
	pub fn remaining(&self) -> usize {
		self.data.len() - self.position
	}

	/// Checks if there are any bytes remaining to be read.
	#[must_use]
	pub fn has_remaining(&self) -> bool {
		self.remaining() > 0
	}

	fn truncated(&self, needed: usize) -> DecodeError {
		DecodeError::TruncatedInput {
			position: self.position,
			needed,
			length: self.data.len(),
		}
	}

	/// Reads a single byte.
	pub fn read_u8(&mut self) -> DecodeResult<u8> {
		let byte = *self.data.get(self.position).ok_or_else(|| self.truncated(1))?;
		self.position += 1;
		Ok(byte)
	}

	/// Reads `length` bytes and returns them as a borrowed slice.
	pub fn read_slice(&mut self, length: usize) -> DecodeResult<&'a [u8]> {
		if length > self.remaining() {
			return Err(self.truncated(length));
		}
		let slice = &self.data[self.position..self.position + length];
		self.position += length;
		Ok(slice)
	}

	/// Returns a cursor over the next `length` bytes and advances this cursor past them.
	///
	/// Used to confine a stream decoder to the byte range its header declares.
	pub fn get_sub_cursor(&mut self, length: usize) -> DecodeResult<Cursor<'a>> {
		Ok(Cursor::new(self.read_slice(length)?))
	}

	/// Fails with [`DecodeError::CorruptStream`] unless every byte has been consumed.
	pub fn ensure_consumed(&self, what: &str) -> DecodeResult<()> {
		if self.has_remaining() {
			return Err(DecodeError::corrupt(format!(
				"{what}: {} of {} byte(s) left unread",
				self.remaining(),
				self.len()
			)));
		}
		Ok(())
	}

	/// Reads a LEB128 varint capped at 32 bits.
	///
	/// At most 5 bytes are read; the fifth contributes only its low 4 bits and must not have
	/// its continuation bit set.
	pub fn read_varint32(&mut self) -> DecodeResult<u32> {
		let start = self.position;
		let mut value = 0u32;
		let mut shift = 0;
		loop {
			let byte = self.read_u8()?;
			if shift == 28 {
				if byte & 0x80 != 0 {
					return Err(DecodeError::MalformedVarint {
						position: start,
						bits: 32,
					});
				}
				return Ok(value | (u32::from(byte & 0x0F) << 28));
			}
			value |= u32::from(byte & 0x7F) << shift;
			if byte & 0x80 == 0 {
				return Ok(value);
			}
			shift += 7;
		}
	}

	/// Reads a LEB128 varint capped at 64 bits (at most 10 bytes).
	pub fn read_varint64(&mut self) -> DecodeResult<u64> {
		let start = self.position;
		let mut value = 0u64;
		let mut shift = 0;
		loop {
			if shift >= 64 {
				return Err(DecodeError::MalformedVarint {
					position: start,
					bits: 64,
				});
			}
			let byte = self.read_u8()?;
			value |= u64::from(byte & 0x7F) << shift;
			if byte & 0x80 == 0 {
				return Ok(value);
			}
			shift += 7;
		}
	}

	/// Reads `count` consecutive 32-bit varints.
	pub fn read_varints32(&mut self, count: usize) -> DecodeResult<Vec<u32>> {
		(0..count).map(|_| self.read_varint32()).collect()
	}

	/// Reads `count` consecutive 64-bit varints.
	pub fn read_varints64(&mut self, count: usize) -> DecodeResult<Vec<u64>> {
		(0..count).map(|_| self.read_varint64()).collect()
	}

	/// Reads `count` little-endian IEEE-754 single precision values.
	pub fn read_f32s(&mut self, count: usize) -> DecodeResult<Vec<f32>> {
		let length = count.checked_mul(4).ok_or_else(|| self.truncated(usize::MAX))?;
		let bytes = self.read_slice(length)?;
		let mut values = vec![0f32; count];
		LittleEndian::read_f32_into(bytes, &mut values);
		Ok(values)
	}

	/// Reads `count` little-endian IEEE-754 double precision values.
	pub fn read_f64s(&mut self, count: usize) -> DecodeResult<Vec<f64>> {
		let length = count.checked_mul(8).ok_or_else(|| self.truncated(usize::MAX))?;
		let bytes = self.read_slice(length)?;
		let mut values = vec![0f64; count];
		LittleEndian::read_f64_into(bytes, &mut values);
		Ok(values)
	}

	/// Reads `length` bytes as a UTF-8 string.
	pub fn read_string(&mut self, length: usize) -> DecodeResult<String> {
		Ok(String::from_utf8(self.read_slice(length)?.to_vec())?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn len_and_position() {
		let mut cursor = Cursor::new(&[1, 2, 3]);
		assert_eq!(cursor.len(), 3);
		assert!(!cursor.is_empty());
		cursor.read_u8().unwrap();
		assert_eq!(cursor.position(), 1);
		assert_eq!(cursor.remaining(), 2);
		assert!(Cursor::new(&[]).is_empty());
	}

	#[test]
	fn read_u8_past_end() {
		let mut cursor = Cursor::new(&[0xFF]);
		assert_eq!(cursor.read_u8().unwrap(), 255);
		assert_eq!(
			cursor.read_u8().unwrap_err(),
			DecodeError::TruncatedInput {
				position: 1,
				needed: 1,
				length: 1
			}
		);
	}

	#[rstest]
	#[case::zero(&[0x00], 0)]
	#[case::one_byte(&[0x7F], 127)]
	#[case::two_bytes(&[0xAC, 0x02], 300)]
	#[case::max(&[0xFF, 0xFF, 0xFF, 0xFF, 0x0F], u32::MAX)]
	#[case::fifth_byte_high_bits_ignored(&[0xFF, 0xFF, 0xFF, 0xFF, 0x7F], u32::MAX)]
	fn read_varint32(#[case] bytes: &[u8], #[case] expected: u32) {
		let mut cursor = Cursor::new(bytes);
		assert_eq!(cursor.read_varint32().unwrap(), expected);
		assert_eq!(cursor.position(), bytes.len());
	}

	#[test]
	fn read_varint32_too_long() {
		let mut cursor = Cursor::new(&[0x80; 6]);
		assert_eq!(
			cursor.read_varint32().unwrap_err(),
			DecodeError::MalformedVarint { position: 0, bits: 32 }
		);
	}

	#[test]
	fn read_varint32_truncated() {
		let mut cursor = Cursor::new(&[0x80, 0x80]);
		assert!(matches!(
			cursor.read_varint32().unwrap_err(),
			DecodeError::TruncatedInput { position: 2, .. }
		));
	}

	#[test]
	fn read_varint64() {
		let mut cursor = Cursor::new(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]);
		assert_eq!(cursor.read_varint64().unwrap(), u64::MAX);
		assert_eq!(cursor.position(), 10);
	}

	#[test]
	fn read_varint64_too_long() {
		let mut cursor = Cursor::new(&[0x80; 11]);
		assert_eq!(
			cursor.read_varint64().unwrap_err(),
			DecodeError::MalformedVarint { position: 0, bits: 64 }
		);
	}

	#[test]
	fn read_varints() {
		let mut cursor = Cursor::new(&[0x01, 0xAC, 0x02, 0x03, 0x04]);
		assert_eq!(cursor.read_varints32(3).unwrap(), vec![1, 300, 3]);
		assert_eq!(cursor.read_varints64(1).unwrap(), vec![4]);
		assert_eq!(
			cursor.read_varints32(1).unwrap_err(),
			DecodeError::TruncatedInput {
				position: 5,
				needed: 1,
				length: 5
			}
		);
	}

	#[test]
	fn read_floats() {
		let mut cursor = Cursor::new(&[0, 0, 0x80, 0x3F, 0, 0, 0, 0, 0, 0, 0xF0, 0x3F]);
		assert_eq!(cursor.read_f32s(1).unwrap(), vec![1.0]);
		assert_eq!(cursor.read_f64s(1).unwrap(), vec![1.0]);
		assert!(cursor.read_f32s(1).is_err());
	}

	#[test]
	fn read_string() {
		let mut cursor = Cursor::new(b"hello");
		assert_eq!(cursor.read_string(5).unwrap(), "hello");
		assert!(matches!(
			Cursor::new(&[0xC3]).read_string(1).unwrap_err(),
			DecodeError::InvalidUtf8(_)
		));
	}

	#[test]
	fn sub_cursor() {
		let mut cursor = Cursor::new(&[1, 2, 3, 4, 5]);
		cursor.read_u8().unwrap();
		let mut sub = cursor.get_sub_cursor(3).unwrap();
		assert_eq!(cursor.position(), 4);
		assert_eq!(sub.read_slice(3).unwrap(), &[2, 3, 4]);
		assert!(sub.read_u8().is_err());
		assert!(sub.ensure_consumed("sub").is_ok());
		assert!(cursor.get_sub_cursor(2).is_err());
	}

	#[test]
	fn ensure_consumed_reports_leftovers() {
		let cursor = Cursor::new(&[1, 2]);
		assert_eq!(
			cursor.ensure_consumed("test stream").unwrap_err(),
			DecodeError::corrupt("test stream: 2 of 2 byte(s) left unread")
		);
	}
}
