use super::{LogicalTechnique, PhysicalTechnique, StreamMetadata};
use crate::{DecodeError, DecodeResult, io::Cursor};

/// Decodes a stream of little-endian `f32` values.
pub fn decode_float_stream(cursor: &mut Cursor, metadata: &StreamMetadata) -> DecodeResult<Vec<f32>> {
	let mut payload = fixed_width_payload(cursor, metadata, 4)?;
	payload.read_f32s(metadata.num_values as usize)
}

/// Decodes a stream of little-endian `f64` values.
pub fn decode_double_stream(cursor: &mut Cursor, metadata: &StreamMetadata) -> DecodeResult<Vec<f64>> {
	let mut payload = fixed_width_payload(cursor, metadata, 8)?;
	payload.read_f64s(metadata.num_values as usize)
}

/// Checks the header of a fixed-width stream and returns a cursor over its payload.
fn fixed_width_payload<'a>(
	cursor: &mut Cursor<'a>,
	metadata: &StreamMetadata,
	element_size: u64,
) -> DecodeResult<Cursor<'a>> {
	match metadata.physical_technique {
		PhysicalTechnique::None => {}
		technique => return Err(DecodeError::UnsupportedPhysicalTechnique(technique)),
	}
	for technique in [metadata.logical_technique1, metadata.logical_technique2] {
		if technique != LogicalTechnique::None {
			return Err(DecodeError::UnsupportedLogicalTechnique(technique));
		}
	}
	if u64::from(metadata.num_values) * element_size != u64::from(metadata.byte_length) {
		return Err(DecodeError::corrupt(format!(
			"{} value(s) of {element_size} byte(s) do not span {} byte(s)",
			metadata.num_values, metadata.byte_length
		)));
	}
	cursor.get_sub_cursor(metadata.byte_length as usize)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::encode::{encode_double_stream, encode_float_stream};

	#[test]
	fn floats() {
		let bytes = encode_float_stream(&[1.5, -2.25, f32::MAX]);
		let mut cursor = Cursor::new(&bytes);
		let metadata = StreamMetadata::read(&mut cursor).unwrap();
		assert_eq!(decode_float_stream(&mut cursor, &metadata).unwrap(), vec![1.5, -2.25, f32::MAX]);
		assert!(!cursor.has_remaining());
	}

	#[test]
	fn doubles() {
		let bytes = encode_double_stream(&[std::f64::consts::PI, 0.0]);
		let mut cursor = Cursor::new(&bytes);
		let metadata = StreamMetadata::read(&mut cursor).unwrap();
		assert_eq!(decode_double_stream(&mut cursor, &metadata).unwrap(), vec![std::f64::consts::PI, 0.0]);
		assert!(!cursor.has_remaining());
	}

	#[test]
	fn length_mismatch() {
		let bytes = encode_float_stream(&[1.0, 2.0]);
		let mut cursor = Cursor::new(&bytes);
		let metadata = StreamMetadata::read(&mut cursor).unwrap();
		assert!(matches!(
			decode_double_stream(&mut cursor, &metadata),
			Err(DecodeError::CorruptStream(_))
		));
	}

	#[test]
	fn rejects_alp_and_pde() {
		let mut bytes = encode_double_stream(&[1.0]);
		bytes[1] = PhysicalTechnique::Alp as u8;
		let mut cursor = Cursor::new(&bytes);
		let metadata = StreamMetadata::read(&mut cursor).unwrap();
		assert_eq!(
			decode_double_stream(&mut cursor, &metadata).unwrap_err(),
			DecodeError::UnsupportedPhysicalTechnique(PhysicalTechnique::Alp)
		);

		let mut bytes = encode_double_stream(&[1.0]);
		bytes[1] = (LogicalTechnique::Pde as u8) << 5;
		let mut cursor = Cursor::new(&bytes);
		let metadata = StreamMetadata::read(&mut cursor).unwrap();
		assert_eq!(
			decode_double_stream(&mut cursor, &metadata).unwrap_err(),
			DecodeError::UnsupportedLogicalTechnique(LogicalTechnique::Pde)
		);
	}
}
