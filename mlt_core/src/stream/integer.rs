//! Integer stream decoding.
//!
//! Raw values are read as varints, then the logical techniques of the header are undone:
//!
//! - `NONE`: zigzag for signed streams,
//! - `DELTA`: zigzag, then running sum (with `RLE` in the second slot the runs are expanded first),
//! - `RLE`: run expansion, then zigzag for signed streams,
//! - `MORTON` (signed 32-bit only): running sum of codes, then de-interleaving into `x, y` pairs,
//! - `COMPONENTWISE_DELTA` (signed 32-bit only): two interleaved zigzag delta chains.

use super::{LogicalTechnique, PhysicalTechnique, StreamMetadata};
use crate::{
	DecodeError, DecodeResult,
	codecs::{
		Word, decode_componentwise_delta, decode_delta, decode_morton_codes, decode_unsigned_rle,
		decode_zigzag_delta, decode_zigzag_in_place,
	},
	io::Cursor,
};

/// Decodes a signed 32-bit integer stream.
pub fn decode_int_stream(cursor: &mut Cursor, metadata: &StreamMetadata) -> DecodeResult<Vec<i32>> {
	let mut values = read_varint_payload(cursor, metadata, |payload| payload.read_varint32())?;
	match metadata.logical_technique1 {
		LogicalTechnique::Morton => {
			let morton = metadata.morton()?;
			decode_delta(&mut values);
			decode_morton_codes(&values, morton.num_bits, morton.coordinate_shift)
		}
		LogicalTechnique::ComponentwiseDelta => {
			decode_componentwise_delta(&mut values);
			Ok(values.into_iter().map(|value| value as i32).collect())
		}
		_ => Ok(apply_logical_techniques(values, metadata, true)?
			.into_iter()
			.map(|value| value as i32)
			.collect()),
	}
}

/// Decodes an unsigned 32-bit integer stream.
pub fn decode_uint_stream(cursor: &mut Cursor, metadata: &StreamMetadata) -> DecodeResult<Vec<u32>> {
	let values = read_varint_payload(cursor, metadata, |payload| payload.read_varint32())?;
	apply_logical_techniques(values, metadata, false)
}

/// Decodes a signed 64-bit integer stream.
pub fn decode_long_stream(cursor: &mut Cursor, metadata: &StreamMetadata) -> DecodeResult<Vec<i64>> {
	let values = read_varint_payload(cursor, metadata, |payload| payload.read_varint64())?;
	Ok(apply_logical_techniques(values, metadata, true)?
		.into_iter()
		.map(|value| value as i64)
		.collect())
}

/// Decodes an unsigned 64-bit integer stream.
pub fn decode_ulong_stream(cursor: &mut Cursor, metadata: &StreamMetadata) -> DecodeResult<Vec<u64>> {
	let values = read_varint_payload(cursor, metadata, |payload| payload.read_varint64())?;
	apply_logical_techniques(values, metadata, false)
}

/// Reads `num_values` varints from the `byte_length` bytes following the header.
fn read_varint_payload<T: Word>(
	cursor: &mut Cursor,
	metadata: &StreamMetadata,
	read: impl Fn(&mut Cursor<'_>) -> DecodeResult<T>,
) -> DecodeResult<Vec<T>> {
	match metadata.physical_technique {
		PhysicalTechnique::Varint => {}
		technique => return Err(DecodeError::UnsupportedPhysicalTechnique(technique)),
	}
	if metadata.num_values > metadata.byte_length {
		return Err(DecodeError::corrupt(format!(
			"{} varint(s) cannot fit into {} byte(s)",
			metadata.num_values, metadata.byte_length
		)));
	}

	let mut payload = cursor.get_sub_cursor(metadata.byte_length as usize)?;
	let values = (0..metadata.num_values)
		.map(|_| read(&mut payload))
		.collect::<DecodeResult<Vec<T>>>()?;
	payload.ensure_consumed("varint stream")?;
	Ok(values)
}

/// Undoes the NONE, DELTA and RLE logical technique families.
fn apply_logical_techniques<T: Word>(
	mut values: Vec<T>,
	metadata: &StreamMetadata,
	signed: bool,
) -> DecodeResult<Vec<T>> {
	use LogicalTechnique::{Delta, None, Rle};

	match (metadata.logical_technique1, metadata.logical_technique2) {
		(None, None) => {
			if signed {
				decode_zigzag_in_place(&mut values);
			}
		}
		(Delta, None) => decode_zigzag_delta(&mut values),
		(Delta, Rle) => {
			values = expand_runs(&values, metadata)?;
			decode_zigzag_delta(&mut values);
		}
		(Rle, None) => {
			values = expand_runs(&values, metadata)?;
			if signed {
				decode_zigzag_in_place(&mut values);
			}
		}
		(technique, None) | (_, technique) => {
			return Err(DecodeError::UnsupportedLogicalTechnique(technique));
		}
	}
	Ok(values)
}

fn expand_runs<T: Word>(values: &[T], metadata: &StreamMetadata) -> DecodeResult<Vec<T>> {
	let rle = metadata.rle()?;
	decode_unsigned_rle(values, rle.runs as usize, rle.num_rle_values as usize)
}
