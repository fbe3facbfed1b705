//! String column decoding.
//!
//! Two layouts are supported, both with an optional present stream:
//!
//! - plain: a `LENGTH/VAR_BINARY` stream with one byte length per value and a `DATA/NONE`
//!   stream with the concatenated UTF-8 bytes,
//! - dictionary: a `LENGTH/DICTIONARY` stream and a `DATA/SINGLE` (or `DATA/SHARED`) stream
//!   holding the distinct strings, plus an `OFFSET` stream with one dictionary index per value.
//!
//! FSST compressed dictionaries (`LENGTH/SYMBOL`, `DATA/FSST`) are rejected.

use super::merge_present;
use log::trace;
use mlt_core::{
	DecodeError, DecodeResult,
	io::Cursor,
	stream::{
		DictionaryType, LengthType, StreamMetadata, StreamRole, decode_boolean_stream, decode_raw_stream,
		decode_uint_stream,
	},
	types::BitVector,
};

/// Reads the `num_streams` streams of a string column into one optional string per feature.
pub fn read_string_column(cursor: &mut Cursor, num_streams: u32) -> DecodeResult<Vec<Option<String>>> {
	let mut present: Option<BitVector> = None;
	let mut offsets: Option<Vec<u32>> = None;
	let mut lengths: Option<Vec<u32>> = None;
	let mut data: Option<&[u8]> = None;
	let mut dictionary_lengths: Option<Vec<u32>> = None;
	let mut dictionary_data: Option<&[u8]> = None;

	for _ in 0..num_streams {
		let metadata = StreamMetadata::read(cursor)?;
		match metadata.role {
			StreamRole::Present => present = Some(decode_boolean_stream(cursor, &metadata)?),
			StreamRole::Offset(_) => offsets = Some(decode_uint_stream(cursor, &metadata)?),
			StreamRole::Length(LengthType::VarBinary) => lengths = Some(decode_uint_stream(cursor, &metadata)?),
			StreamRole::Length(LengthType::Dictionary) => {
				dictionary_lengths = Some(decode_uint_stream(cursor, &metadata)?);
			}
			StreamRole::Data(DictionaryType::None) => data = Some(decode_raw_stream(cursor, &metadata)?),
			StreamRole::Data(DictionaryType::Single | DictionaryType::Shared) => {
				dictionary_data = Some(decode_raw_stream(cursor, &metadata)?);
			}
			StreamRole::Length(LengthType::Symbol) | StreamRole::Data(DictionaryType::Fsst) => {
				return Err(DecodeError::UnsupportedStringEncoding(
					"FSST symbol table dictionary".to_string(),
				));
			}
			role => return Err(DecodeError::corrupt(format!("unexpected stream {role:?} in string column"))),
		}
	}

	let values = match (dictionary_lengths, dictionary_data) {
		(Some(dictionary_lengths), Some(dictionary_data)) => {
			let dictionary = split_strings(dictionary_data, &dictionary_lengths)?;
			let offsets = offsets.ok_or_else(|| DecodeError::corrupt("dictionary string column without offsets"))?;
			trace!("string dictionary of {} entries for {} value(s)", dictionary.len(), offsets.len());
			offsets
				.into_iter()
				.map(|offset| {
					dictionary.get(offset as usize).cloned().ok_or_else(|| {
						DecodeError::corrupt(format!(
							"dictionary index {offset} out of range for {} entries",
							dictionary.len()
						))
					})
				})
				.collect::<DecodeResult<Vec<_>>>()?
		}
		(None, None) => match (lengths, data) {
			(Some(lengths), Some(data)) => split_strings(data, &lengths)?,
			_ => return Err(DecodeError::corrupt("string column without lengths and data")),
		},
		_ => return Err(DecodeError::corrupt("incomplete string dictionary")),
	};

	merge_present(present.as_ref(), values)
}

/// Cuts `data` into consecutive strings of the given byte lengths, which must cover it exactly.
fn split_strings(data: &[u8], lengths: &[u32]) -> DecodeResult<Vec<String>> {
	let mut position = 0;
	let strings = lengths
		.iter()
		.map(|length| -> DecodeResult<String> {
			let end = position + *length as usize;
			let bytes = data.get(position..end).ok_or_else(|| {
				DecodeError::corrupt(format!(
					"string of {length} byte(s) at {position} exceeds {} byte(s) of data",
					data.len()
				))
			})?;
			position = end;
			Ok(String::from_utf8(bytes.to_vec())?)
		})
		.collect::<DecodeResult<Vec<_>>>()?;

	if position != data.len() {
		return Err(DecodeError::corrupt(format!(
			"string lengths cover {position} of {} byte(s)",
			data.len()
		)));
	}
	Ok(strings)
}

#[cfg(test)]
mod tests {
	use super::*;
	use mlt_core::{
		encode::{encode_boolean_stream, encode_raw_stream, encode_uint_stream},
		stream::OffsetType,
	};
	use pretty_assertions::assert_eq;

	fn read(streams: &[Vec<u8>]) -> DecodeResult<Vec<Option<String>>> {
		let bytes = streams.concat();
		let mut cursor = Cursor::new(&bytes);
		let values = read_string_column(&mut cursor, streams.len() as u32)?;
		assert_eq!(cursor.position(), bytes.len());
		Ok(values)
	}

	fn strings(values: &[Option<&str>]) -> Vec<Option<String>> {
		values.iter().map(|v| v.map(str::to_string)).collect()
	}

	fn present(bits: &[bool]) -> Vec<u8> {
		encode_boolean_stream(StreamRole::Present, bits)
	}

	fn lengths(role: LengthType, values: &[u32]) -> Vec<u8> {
		encode_uint_stream(StreamRole::Length(role), values)
	}

	fn data(dictionary: DictionaryType, num_values: usize, bytes: &[u8]) -> Vec<u8> {
		encode_raw_stream(StreamRole::Data(dictionary), num_values, bytes)
	}

	#[test]
	fn plain_layout() {
		let values = read(&[
			present(&[true, false, true, true]),
			lengths(LengthType::VarBinary, &[1, 0, 6]),
			data(DictionaryType::None, 3, "ahällo".as_bytes()),
		]);
		assert_eq!(values.unwrap(), strings(&[Some("a"), None, Some(""), Some("hällo")]));
	}

	#[test]
	fn plain_layout_without_present_stream() {
		let values = read(&[
			lengths(LengthType::VarBinary, &[2, 3]),
			data(DictionaryType::None, 2, b"abcde"),
		]);
		assert_eq!(values.unwrap(), strings(&[Some("ab"), Some("cde")]));
	}

	#[test]
	fn dictionary_layout() {
		let values = read(&[
			present(&[true, true, false, true]),
			encode_uint_stream(StreamRole::Offset(OffsetType::String), &[1, 0, 1]),
			lengths(LengthType::Dictionary, &[4, 7]),
			data(DictionaryType::Single, 2, b"roadcycling"),
		]);
		assert_eq!(
			values.unwrap(),
			strings(&[Some("cycling"), Some("road"), None, Some("cycling")])
		);
	}

	#[test]
	fn fsst_is_unsupported() {
		let values = read(&[
			encode_uint_stream(StreamRole::Offset(OffsetType::String), &[0]),
			lengths(LengthType::Symbol, &[1]),
			data(DictionaryType::Fsst, 1, b"x"),
		]);
		assert!(matches!(values, Err(DecodeError::UnsupportedStringEncoding(_))));
	}

	#[test]
	fn invalid_utf8() {
		let values = read(&[lengths(LengthType::VarBinary, &[2]), data(DictionaryType::None, 1, &[0xC3, 0x28])]);
		assert!(matches!(values, Err(DecodeError::InvalidUtf8(_))));
	}

	#[test]
	fn corrupt_layouts() {
		let corrupt = |streams: &[Vec<u8>]| matches!(read(streams), Err(DecodeError::CorruptStream(_)));

		// lengths exceed the data
		assert!(corrupt(&[lengths(LengthType::VarBinary, &[4]), data(DictionaryType::None, 1, b"abc")]));
		// lengths do not cover the data
		assert!(corrupt(&[lengths(LengthType::VarBinary, &[2]), data(DictionaryType::None, 1, b"abc")]));
		// no data at all
		assert!(corrupt(&[lengths(LengthType::VarBinary, &[2])]));
		// dictionary without offsets
		assert!(corrupt(&[lengths(LengthType::Dictionary, &[1]), data(DictionaryType::Single, 1, b"a")]));
		// dictionary index out of range
		assert!(corrupt(&[
			encode_uint_stream(StreamRole::Offset(OffsetType::String), &[1]),
			lengths(LengthType::Dictionary, &[1]),
			data(DictionaryType::Single, 1, b"a"),
		]));
		// half a dictionary
		assert!(corrupt(&[
			encode_uint_stream(StreamRole::Offset(OffsetType::String), &[0]),
			data(DictionaryType::Single, 1, b"a"),
		]));
		// vertex data has no place in a string column
		assert!(corrupt(&[data(DictionaryType::Vertex, 1, b"a")]));
	}
}
