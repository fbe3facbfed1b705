//! Stream header parsing.
//!
//! The header layout is:
//!
//! | bytes  | content                                                                        |
//! |--------|--------------------------------------------------------------------------------|
//! | 1      | stream role (high nibble), role subtype (low nibble)                            |
//! | 1      | logical technique 1 (bits 7-5), logical technique 2 (bits 4-2), physical (1-0)  |
//! | varint | number of values                                                               |
//! | varint | byte length of the payload                                                     |
//! | varint | Morton only: number of bits per coordinate                                     |
//! | varint | Morton only: coordinate shift                                                  |
//! | varint | RLE with a physical technique only: number of runs                             |
//! | varint | RLE with a physical technique only: number of values after expansion          |

use crate::{DecodeError, DecodeResult, io::Cursor};
use log::trace;

/// How the values of a DATA stream relate to a dictionary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DictionaryType {
	None = 0,
	Single = 1,
	Shared = 2,
	Vertex = 3,
	Morton = 4,
	Fsst = 5,
}

/// What an OFFSET stream indexes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffsetType {
	Vertex = 0,
	Index = 1,
	String = 2,
	Key = 3,
}

/// What a LENGTH stream counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthType {
	VarBinary = 0,
	Geometries = 1,
	Parts = 2,
	Rings = 3,
	Triangles = 4,
	Symbol = 5,
	Dictionary = 6,
}

/// The role of a stream within its column, together with the role-specific subtype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamRole {
	Present,
	Data(DictionaryType),
	Offset(OffsetType),
	Length(LengthType),
}

/// Value-domain transform applied on top of the physical encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogicalTechnique {
	None = 0,
	Delta = 1,
	ComponentwiseDelta = 2,
	Rle = 3,
	Morton = 4,
	/// Pseudodecimal encoding of floats; recognized but not decodable.
	Pde = 5,
}

/// Bit-packing scheme of the raw values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhysicalTechnique {
	/// Raw bytes: fixed-width little-endian values, byte RLE or string data.
	None = 0,
	FastPfor = 1,
	Varint = 2,
	Alp = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MortonEncoding {
	pub num_bits: u32,
	pub coordinate_shift: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RleEncoding {
	pub runs: u32,
	pub num_rle_values: u32,
}

/// The technique-specific parameter block that may follow the base header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamEncoding {
	Plain,
	Morton(MortonEncoding),
	Rle(RleEncoding),
}

/// A decoded stream header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamMetadata {
	pub role: StreamRole,
	pub logical_technique1: LogicalTechnique,
	pub logical_technique2: LogicalTechnique,
	pub physical_technique: PhysicalTechnique,
	pub num_values: u32,
	pub byte_length: u32,
	pub encoding: StreamEncoding,
}

impl StreamMetadata {
	/// Reads a stream header, including the Morton or RLE parameter block when the techniques
	/// call for one.
	pub fn read(cursor: &mut Cursor) -> DecodeResult<StreamMetadata> {
		let position = cursor.position();
		let role = StreamRole::try_from(cursor.read_u8()?)?;

		let techniques = cursor.read_u8()?;
		let logical_technique1 = LogicalTechnique::try_from(techniques >> 5)?;
		let logical_technique2 = LogicalTechnique::try_from((techniques >> 2) & 0x07)?;
		let physical_technique = PhysicalTechnique::from(techniques & 0x03);

		let num_values = cursor.read_varint32()?;
		let byte_length = cursor.read_varint32()?;

		let mut metadata = StreamMetadata {
			role,
			logical_technique1,
			logical_technique2,
			physical_technique,
			num_values,
			byte_length,
			encoding: StreamEncoding::Plain,
		};

		if metadata.uses(LogicalTechnique::Morton) {
			metadata.encoding = StreamEncoding::Morton(MortonEncoding {
				num_bits: cursor.read_varint32()?,
				coordinate_shift: cursor.read_varint32()?,
			});
		} else if metadata.uses(LogicalTechnique::Rle) && physical_technique != PhysicalTechnique::None {
			metadata.encoding = StreamEncoding::Rle(RleEncoding {
				runs: cursor.read_varint32()?,
				num_rle_values: cursor.read_varint32()?,
			});
		}

		trace!("stream header at {position}: {metadata:?}");
		Ok(metadata)
	}

	/// Checks whether either logical technique slot holds `technique`.
	#[must_use]
	pub fn uses(&self, technique: LogicalTechnique) -> bool {
		self.logical_technique1 == technique || self.logical_technique2 == technique
	}

	/// Returns the Morton parameter block or fails if the header has none.
	pub fn morton(&self) -> DecodeResult<MortonEncoding> {
		match self.encoding {
			StreamEncoding::Morton(morton) => Ok(morton),
			_ => Err(DecodeError::corrupt("Morton stream without Morton parameters")),
		}
	}

	/// Returns the RLE parameter block or fails if the header has none.
	pub fn rle(&self) -> DecodeResult<RleEncoding> {
		match self.encoding {
			StreamEncoding::Rle(rle) => Ok(rle),
			_ => Err(DecodeError::corrupt("run-length stream without run-length parameters")),
		}
	}

	/// Number of values the stream yields once all logical techniques are undone.
	#[must_use]
	pub fn num_decoded_values(&self) -> u32 {
		match self.encoding {
			StreamEncoding::Rle(rle) => rle.num_rle_values,
			StreamEncoding::Morton(_) => self.num_values.saturating_mul(2),
			StreamEncoding::Plain => self.num_values,
		}
	}
}

impl TryFrom<u8> for StreamRole {
	type Error = DecodeError;

	fn try_from(value: u8) -> DecodeResult<Self> {
		let subtype = value & 0x0F;
		Ok(match value >> 4 {
			0 => StreamRole::Present,
			1 => StreamRole::Data(DictionaryType::try_from(subtype)?),
			2 => StreamRole::Offset(OffsetType::try_from(subtype)?),
			3 => StreamRole::Length(LengthType::try_from(subtype)?),
			role => return Err(DecodeError::corrupt(format!("unknown stream role {role}"))),
		})
	}
}

impl From<StreamRole> for u8 {
	fn from(role: StreamRole) -> Self {
		match role {
			StreamRole::Present => 0,
			StreamRole::Data(dictionary) => 0x10 | dictionary as u8,
			StreamRole::Offset(offset) => 0x20 | offset as u8,
			StreamRole::Length(length) => 0x30 | length as u8,
		}
	}
}

impl TryFrom<u8> for DictionaryType {
	type Error = DecodeError;

	fn try_from(value: u8) -> DecodeResult<Self> {
		use DictionaryType::*;
		Ok(match value {
			0 => None,
			1 => Single,
			2 => Shared,
			3 => Vertex,
			4 => Morton,
			5 => Fsst,
			_ => return Err(DecodeError::corrupt(format!("unknown dictionary type {value}"))),
		})
	}
}

impl TryFrom<u8> for OffsetType {
	type Error = DecodeError;

	fn try_from(value: u8) -> DecodeResult<Self> {
		Ok(match value {
			0 => OffsetType::Vertex,
			1 => OffsetType::Index,
			2 => OffsetType::String,
			3 => OffsetType::Key,
			_ => return Err(DecodeError::corrupt(format!("unknown offset type {value}"))),
		})
	}
}

impl TryFrom<u8> for LengthType {
	type Error = DecodeError;

	fn try_from(value: u8) -> DecodeResult<Self> {
		use LengthType::*;
		Ok(match value {
			0 => VarBinary,
			1 => Geometries,
			2 => Parts,
			3 => Rings,
			4 => Triangles,
			5 => Symbol,
			6 => Dictionary,
			_ => return Err(DecodeError::corrupt(format!("unknown length type {value}"))),
		})
	}
}

impl TryFrom<u8> for LogicalTechnique {
	type Error = DecodeError;

	fn try_from(value: u8) -> DecodeResult<Self> {
		use LogicalTechnique::*;
		Ok(match value {
			0 => None,
			1 => Delta,
			2 => ComponentwiseDelta,
			3 => Rle,
			4 => Morton,
			5 => Pde,
			_ => return Err(DecodeError::corrupt(format!("unknown logical technique {value}"))),
		})
	}
}

impl From<u8> for PhysicalTechnique {
	/// Only the low two bits are significant, so every value maps to a technique.
	fn from(value: u8) -> Self {
		match value & 0x03 {
			0 => PhysicalTechnique::None,
			1 => PhysicalTechnique::FastPfor,
			2 => PhysicalTechnique::Varint,
			_ => PhysicalTechnique::Alp,
		}
	}
}
