use super::Word;

/// Undoes zigzag encoding on the bit pattern of a word: `(v >>> 1) ^ -(v & 1)`.
#[must_use]
pub fn zigzag<T: Word>(value: T) -> T {
	value.unsigned_shr(1) ^ T::zero().wrapping_sub(&(value & T::one()))
}

/// Undoes zigzag encoding of a 32-bit value.
#[must_use]
pub fn decode_zigzag32(value: u32) -> i32 {
	zigzag(value) as i32
}

/// Undoes zigzag encoding of a 64-bit value.
#[must_use]
pub fn decode_zigzag64(value: u64) -> i64 {
	zigzag(value) as i64
}

/// Undoes zigzag encoding of every element in place.
pub fn decode_zigzag_in_place<T: Word>(values: &mut [T]) {
	for value in values.iter_mut() {
		*value = zigzag(*value);
	}
}
