use crate::stream::{LogicalTechnique, PhysicalTechnique};
use std::string::FromUtf8Error;
use thiserror::Error;

/// Result alias used by every decoding function.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Everything that can go wrong while decoding a tile.
///
/// Any of these aborts the whole tile: once the cursor is out of step with the encoder,
/// every following read is meaningless.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
	/// A read would go past the end of the buffer.
	#[error("unexpected end of input: {needed} byte(s) requested at offset {position}, buffer length is {length}")]
	TruncatedInput {
		position: usize,
		needed: usize,
		length: usize,
	},

	/// A varint does not terminate within the bit budget of its type.
	#[error("malformed varint at offset {position}: exceeds {bits} bits")]
	MalformedVarint { position: usize, bits: u32 },

	/// Declared lengths or counts do not reconcile with the decoded data.
	#[error("corrupt stream: {0}")]
	CorruptStream(String),

	#[error("physical technique {0:?} is not supported")]
	UnsupportedPhysicalTechnique(PhysicalTechnique),

	#[error("logical technique {0:?} is not supported here")]
	UnsupportedLogicalTechnique(LogicalTechnique),

	#[error("string encoding is not supported: {0}")]
	UnsupportedStringEncoding(String),

	#[error("geometry type {0} is not supported")]
	UnsupportedGeometryType(u32),

	#[error("column type is not supported: {0}")]
	UnsupportedColumnType(String),

	/// The schema has no feature table for the id found in the tile.
	#[error("no feature table with id {0} in the tileset metadata")]
	UnknownFeatureTable(u32),

	#[error("string data is not valid UTF-8: {0}")]
	InvalidUtf8(#[from] FromUtf8Error),
}

impl DecodeError {
	/// Shorthand for [`DecodeError::CorruptStream`].
	pub fn corrupt(message: impl Into<String>) -> DecodeError {
		DecodeError::CorruptStream(message.into())
	}
}
