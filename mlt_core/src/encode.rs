//! Encoders for building test fixtures.
//!
//! Only compiled for tests or with the `test` feature. They produce the exact byte layout the
//! decoders expect, which keeps fixtures readable without checked-in binary tiles.

use crate::stream::{LogicalTechnique, PhysicalTechnique, StreamEncoding, StreamMetadata, StreamRole};

pub fn encode_varint32(buffer: &mut Vec<u8>, value: u32) {
	encode_varint64(buffer, u64::from(value));
}

pub fn encode_varint64(buffer: &mut Vec<u8>, mut value: u64) {
	while value >= 0x80 {
		buffer.push((value as u8 & 0x7F) | 0x80);
		value >>= 7;
	}
	buffer.push(value as u8);
}

#[must_use]
pub fn encode_zigzag32(value: i32) -> u32 {
	((value << 1) ^ (value >> 31)) as u32
}

#[must_use]
pub fn encode_zigzag64(value: i64) -> u64 {
	((value << 1) ^ (value >> 63)) as u64
}

/// Interleaves `x` (even bits) and `y` (odd bits) into a Morton code.
#[must_use]
pub fn encode_morton(x: u32, y: u32, num_bits: u32) -> u32 {
	let mut code = 0;
	for bit in 0..num_bits {
		code |= ((x >> bit) & 1) << (2 * bit);
		code |= ((y >> bit) & 1) << (2 * bit + 1);
	}
	code
}

/// Byte run-length encoding: runs of 3 to 130 equal bytes, literal groups of 1 to 128 bytes.
#[must_use]
pub fn encode_byte_rle(data: &[u8]) -> Vec<u8> {
	fn flush(output: &mut Vec<u8>, literals: &mut Vec<u8>) {
		if !literals.is_empty() {
			output.push((256 - literals.len()) as u8);
			output.append(literals);
		}
	}

	let mut output = Vec::new();
	let mut literals = Vec::new();
	let mut index = 0;
	while index < data.len() {
		let mut run = 1;
		while index + run < data.len() && run < 130 && data[index + run] == data[index] {
			run += 1;
		}
		if run >= 3 {
			flush(&mut output, &mut literals);
			output.push((run - 3) as u8);
			output.push(data[index]);
			index += run;
		} else {
			literals.push(data[index]);
			index += 1;
			if literals.len() == 128 {
				flush(&mut output, &mut literals);
			}
		}
	}
	flush(&mut output, &mut literals);
	output
}

/// Packs `bits` least-significant-bit first and byte run-length encodes the result.
#[must_use]
pub fn encode_boolean_rle(bits: &[bool]) -> Vec<u8> {
	let mut bytes = vec![0u8; bits.len().div_ceil(8)];
	for (index, bit) in bits.iter().enumerate() {
		if *bit {
			bytes[index / 8] |= 1 << (index % 8);
		}
	}
	encode_byte_rle(&bytes)
}

pub fn encode_stream_metadata(metadata: &StreamMetadata, buffer: &mut Vec<u8>) {
	buffer.push(u8::from(metadata.role));
	buffer.push(
		((metadata.logical_technique1 as u8) << 5)
			| ((metadata.logical_technique2 as u8) << 2)
			| metadata.physical_technique as u8,
	);
	encode_varint32(buffer, metadata.num_values);
	encode_varint32(buffer, metadata.byte_length);
	match metadata.encoding {
		StreamEncoding::Plain => {}
		StreamEncoding::Morton(morton) => {
			encode_varint32(buffer, morton.num_bits);
			encode_varint32(buffer, morton.coordinate_shift);
		}
		StreamEncoding::Rle(rle) => {
			encode_varint32(buffer, rle.runs);
			encode_varint32(buffer, rle.num_rle_values);
		}
	}
}

fn encode_stream(
	role: StreamRole,
	techniques: (LogicalTechnique, LogicalTechnique),
	physical_technique: PhysicalTechnique,
	encoding: StreamEncoding,
	num_values: usize,
	payload: &[u8],
) -> Vec<u8> {
	let metadata = StreamMetadata {
		role,
		logical_technique1: techniques.0,
		logical_technique2: techniques.1,
		physical_technique,
		num_values: num_values as u32,
		byte_length: payload.len() as u32,
		encoding,
	};
	let mut buffer = Vec::new();
	encode_stream_metadata(&metadata, &mut buffer);
	buffer.extend_from_slice(payload);
	buffer
}

/// Header plus varint payload. `raw` holds the values exactly as they go on the wire, i.e.
/// already zigzagged, delta-encoded or laid out as run lengths followed by run values.
#[must_use]
pub fn encode_varint_stream(
	role: StreamRole,
	logical_technique1: LogicalTechnique,
	logical_technique2: LogicalTechnique,
	encoding: StreamEncoding,
	raw: &[u32],
) -> Vec<u8> {
	let mut payload = Vec::new();
	for value in raw {
		encode_varint32(&mut payload, *value);
	}
	encode_stream(
		role,
		(logical_technique1, logical_technique2),
		PhysicalTechnique::Varint,
		encoding,
		raw.len(),
		&payload,
	)
}

/// 64-bit counterpart of [`encode_varint_stream`].
#[must_use]
pub fn encode_varint64_stream(
	role: StreamRole,
	logical_technique1: LogicalTechnique,
	logical_technique2: LogicalTechnique,
	encoding: StreamEncoding,
	raw: &[u64],
) -> Vec<u8> {
	let mut payload = Vec::new();
	for value in raw {
		encode_varint64(&mut payload, *value);
	}
	encode_stream(
		role,
		(logical_technique1, logical_technique2),
		PhysicalTechnique::Varint,
		encoding,
		raw.len(),
		&payload,
	)
}

/// Plain unsigned varint stream without any logical technique.
#[must_use]
pub fn encode_uint_stream(role: StreamRole, values: &[u32]) -> Vec<u8> {
	encode_varint_stream(role, LogicalTechnique::None, LogicalTechnique::None, StreamEncoding::Plain, values)
}

/// Plain zigzag varint stream without any other logical technique.
#[must_use]
pub fn encode_int_stream(role: StreamRole, values: &[i32]) -> Vec<u8> {
	let raw = values.iter().map(|value| encode_zigzag32(*value)).collect::<Vec<_>>();
	encode_uint_stream(role, &raw)
}

#[must_use]
pub fn encode_boolean_stream(role: StreamRole, bits: &[bool]) -> Vec<u8> {
	encode_stream(
		role,
		(LogicalTechnique::Rle, LogicalTechnique::None),
		PhysicalTechnique::None,
		StreamEncoding::Plain,
		bits.len(),
		&encode_boolean_rle(bits),
	)
}

#[must_use]
pub fn encode_raw_stream(role: StreamRole, num_values: usize, bytes: &[u8]) -> Vec<u8> {
	encode_stream(
		role,
		(LogicalTechnique::None, LogicalTechnique::None),
		PhysicalTechnique::None,
		StreamEncoding::Plain,
		num_values,
		bytes,
	)
}

#[must_use]
pub fn encode_float_stream(values: &[f32]) -> Vec<u8> {
	let payload = values.iter().flat_map(|value| value.to_le_bytes()).collect::<Vec<_>>();
	encode_raw_stream(StreamRole::Data(crate::stream::DictionaryType::None), values.len(), &payload)
}

#[must_use]
pub fn encode_double_stream(values: &[f64]) -> Vec<u8> {
	let payload = values.iter().flat_map(|value| value.to_le_bytes()).collect::<Vec<_>>();
	encode_raw_stream(StreamRole::Data(crate::stream::DictionaryType::None), values.len(), &payload)
}
