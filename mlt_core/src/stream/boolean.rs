use super::StreamMetadata;
use crate::{DecodeResult, codecs::decode_boolean_rle, io::Cursor, types::BitVector};

/// Decodes a boolean run-length stream of `num_values` bits.
///
/// Used for PRESENT streams and for the DATA stream of boolean columns.
pub fn decode_boolean_stream(cursor: &mut Cursor, metadata: &StreamMetadata) -> DecodeResult<BitVector> {
	let mut payload = cursor.get_sub_cursor(metadata.byte_length as usize)?;
	let bits = decode_boolean_rle(&mut payload, metadata.num_values as usize)?;
	payload.ensure_consumed("boolean stream")?;
	Ok(bits)
}

/// Returns the raw payload bytes of a stream, e.g. UTF-8 string data or a dictionary.
pub fn decode_raw_stream<'a>(cursor: &mut Cursor<'a>, metadata: &StreamMetadata) -> DecodeResult<&'a [u8]> {
	cursor.read_slice(metadata.byte_length as usize)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		DecodeError,
		encode::{encode_boolean_stream, encode_raw_stream},
		stream::{DictionaryType, StreamRole},
	};

	#[test]
	fn boolean_stream() {
		let bits = vec![true; 20].into_iter().chain([false, true]).collect::<Vec<_>>();
		let bytes = encode_boolean_stream(StreamRole::Present, &bits);
		let mut cursor = Cursor::new(&bytes);
		let metadata = StreamMetadata::read(&mut cursor).unwrap();
		let vector = decode_boolean_stream(&mut cursor, &metadata).unwrap();
		assert_eq!(vector.iter().collect::<Vec<_>>(), bits);
		assert!(!cursor.has_remaining());
	}

	#[test]
	fn boolean_stream_with_trailing_bytes() {
		let mut bytes = encode_boolean_stream(StreamRole::Present, &[true]);
		// grow the declared byte length by one and append a stray byte
		bytes[3] += 1;
		bytes.push(0);
		let mut cursor = Cursor::new(&bytes);
		let metadata = StreamMetadata::read(&mut cursor).unwrap();
		assert!(matches!(
			decode_boolean_stream(&mut cursor, &metadata),
			Err(DecodeError::CorruptStream(_))
		));
	}

	#[test]
	fn raw_stream() {
		let bytes = encode_raw_stream(StreamRole::Data(DictionaryType::None), 2, b"abc");
		let mut cursor = Cursor::new(&bytes);
		let metadata = StreamMetadata::read(&mut cursor).unwrap();
		assert_eq!(metadata.num_values, 2);
		assert_eq!(decode_raw_stream(&mut cursor, &metadata).unwrap(), b"abc");
	}
}
