use crate::{DecodeError, DecodeResult};

/// The largest coordinate width that still fits two interleaved axes into 32 bits.
pub const MAX_MORTON_BITS: u32 = 16;

/// Extracts the coordinate stored in the even bits of `code`, reading `num_bits` bits.
fn decode_morton_axis(code: u32, num_bits: u32) -> u32 {
	let mut coordinate = 0;
	for bit in 0..num_bits {
		coordinate |= ((code >> (2 * bit)) & 1) << bit;
	}
	coordinate
}

/// Turns Morton codes into interleaved `x, y` coordinate pairs.
///
/// `x` sits in the even bits, `y` in the odd bits. `coordinate_shift` is subtracted from both
/// axes to undo the shift the encoder applied to make negative coordinates representable.
pub fn decode_morton_codes(codes: &[u32], num_bits: u32, coordinate_shift: u32) -> DecodeResult<Vec<i32>> {
	if num_bits > MAX_MORTON_BITS {
		return Err(DecodeError::corrupt(format!(
			"Morton code width of {num_bits} bits exceeds {MAX_MORTON_BITS}"
		)));
	}
	let shift = i64::from(coordinate_shift);
	let unshift = |value: u32| {
		i32::try_from(i64::from(value) - shift)
			.map_err(|_| DecodeError::corrupt(format!("Morton coordinate shift {coordinate_shift} is out of range")))
	};

	let mut coordinates = Vec::with_capacity(codes.len() * 2);
	for code in codes {
		coordinates.push(unshift(decode_morton_axis(*code, num_bits))?);
		coordinates.push(unshift(decode_morton_axis(code >> 1, num_bits))?);
	}
	Ok(coordinates)
}
