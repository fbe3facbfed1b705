use super::read_string_column;
use crate::{
	geo::PropertyValue,
	metadata::{Column, ColumnScope, ScalarType},
};
use log::{trace, warn};
use mlt_core::{
	DecodeError, DecodeResult,
	io::Cursor,
	stream::{
		StreamMetadata, StreamRole, decode_boolean_stream, decode_double_stream, decode_float_stream, decode_int_stream,
		decode_long_stream, decode_uint_stream, decode_ulong_stream,
	},
	types::BitVector,
};

/// The decoded values of one property column, one entry per feature.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyColumn {
	Boolean(Vec<Option<bool>>),
	Int(Vec<Option<i32>>),
	UInt(Vec<Option<u32>>),
	Long(Vec<Option<i64>>),
	ULong(Vec<Option<u64>>),
	Float(Vec<Option<f32>>),
	Double(Vec<Option<f64>>),
	String(Vec<Option<String>>),
}

impl PropertyColumn {
	/// Reads the `num_streams` streams of a scalar property column.
	///
	/// A column with one stream has no present stream and no nulls. With two streams the first
	/// one is the present stream.
	pub fn read(cursor: &mut Cursor, column: &Column, num_streams: u32) -> DecodeResult<PropertyColumn> {
		if column.column_scope == ColumnScope::Vertex {
			return Err(DecodeError::UnsupportedColumnType(format!(
				"vertex-scoped column '{}'",
				column.name
			)));
		}
		let Some(scalar_type) = column.column_type.scalar_type() else {
			return Err(DecodeError::UnsupportedColumnType(format!(
				"{} column '{}'",
				column.column_type, column.name
			)));
		};

		let result = match scalar_type {
			ScalarType::String => PropertyColumn::String(read_string_column(cursor, num_streams)?),
			ScalarType::Boolean => {
				let (present, metadata) = read_present_and_data(cursor, num_streams)?;
				let bits = decode_boolean_stream(cursor, &metadata)?;
				PropertyColumn::Boolean(merge_present(present.as_ref(), bits.iter().collect())?)
			}
			ScalarType::Int8 | ScalarType::Int32 => {
				let (present, metadata) = read_present_and_data(cursor, num_streams)?;
				PropertyColumn::Int(merge_present(present.as_ref(), decode_int_stream(cursor, &metadata)?)?)
			}
			ScalarType::UInt8 | ScalarType::UInt32 => {
				let (present, metadata) = read_present_and_data(cursor, num_streams)?;
				PropertyColumn::UInt(merge_present(present.as_ref(), decode_uint_stream(cursor, &metadata)?)?)
			}
			ScalarType::Int64 => {
				let (present, metadata) = read_present_and_data(cursor, num_streams)?;
				PropertyColumn::Long(merge_present(present.as_ref(), decode_long_stream(cursor, &metadata)?)?)
			}
			ScalarType::UInt64 => {
				let (present, metadata) = read_present_and_data(cursor, num_streams)?;
				PropertyColumn::ULong(merge_present(present.as_ref(), decode_ulong_stream(cursor, &metadata)?)?)
			}
			ScalarType::Float => {
				let (present, metadata) = read_present_and_data(cursor, num_streams)?;
				PropertyColumn::Float(merge_present(present.as_ref(), decode_float_stream(cursor, &metadata)?)?)
			}
			ScalarType::Double => {
				let (present, metadata) = read_present_and_data(cursor, num_streams)?;
				PropertyColumn::Double(merge_present(present.as_ref(), decode_double_stream(cursor, &metadata)?)?)
			}
		};
		trace!("property column '{}': {} value(s)", column.name, result.len());
		if !column.nullable {
			let nulls = result.null_count();
			if nulls > 0 {
				warn!("column '{}' is not nullable but has {nulls} null value(s)", column.name);
			}
		}
		Ok(result)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		match self {
			PropertyColumn::Boolean(v) => v.len(),
			PropertyColumn::Int(v) => v.len(),
			PropertyColumn::UInt(v) => v.len(),
			PropertyColumn::Long(v) => v.len(),
			PropertyColumn::ULong(v) => v.len(),
			PropertyColumn::Float(v) => v.len(),
			PropertyColumn::Double(v) => v.len(),
			PropertyColumn::String(v) => v.len(),
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	#[must_use]
	pub fn null_count(&self) -> usize {
		match self {
			PropertyColumn::Boolean(v) => v.iter().filter(|value| value.is_none()).count(),
			PropertyColumn::Int(v) => v.iter().filter(|value| value.is_none()).count(),
			PropertyColumn::UInt(v) => v.iter().filter(|value| value.is_none()).count(),
			PropertyColumn::Long(v) => v.iter().filter(|value| value.is_none()).count(),
			PropertyColumn::ULong(v) => v.iter().filter(|value| value.is_none()).count(),
			PropertyColumn::Float(v) => v.iter().filter(|value| value.is_none()).count(),
			PropertyColumn::Double(v) => v.iter().filter(|value| value.is_none()).count(),
			PropertyColumn::String(v) => v.iter().filter(|value| value.is_none()).count(),
		}
	}

	/// The value of feature `index`, [`PropertyValue::Null`] if it has none.
	#[must_use]
	pub fn value(&self, index: usize) -> PropertyValue {
		match self {
			PropertyColumn::Boolean(v) => v.get(index).copied().flatten().into(),
			PropertyColumn::Int(v) => v.get(index).copied().flatten().into(),
			PropertyColumn::UInt(v) => v.get(index).copied().flatten().into(),
			PropertyColumn::Long(v) => v.get(index).copied().flatten().into(),
			PropertyColumn::ULong(v) => v.get(index).copied().flatten().into(),
			PropertyColumn::Float(v) => v.get(index).copied().flatten().into(),
			PropertyColumn::Double(v) => v.get(index).copied().flatten().into(),
			PropertyColumn::String(v) => v.get(index).cloned().flatten().into(),
		}
	}
}

/// Reads the optional present stream and the header of the data stream.
fn read_present_and_data(cursor: &mut Cursor, num_streams: u32) -> DecodeResult<(Option<BitVector>, StreamMetadata)> {
	let present = match num_streams {
		1 => None,
		2 => Some(read_present_stream(cursor)?),
		_ => {
			return Err(DecodeError::corrupt(format!(
				"scalar column with {num_streams} streams, expected 1 or 2"
			)));
		}
	};

	let metadata = StreamMetadata::read(cursor)?;
	if !matches!(metadata.role, StreamRole::Data(_)) {
		return Err(DecodeError::corrupt(format!("expected a data stream, found {:?}", metadata.role)));
	}
	Ok((present, metadata))
}

/// Reads a stream that must be a present stream.
pub fn read_present_stream(cursor: &mut Cursor) -> DecodeResult<BitVector> {
	let metadata = StreamMetadata::read(cursor)?;
	if metadata.role != StreamRole::Present {
		return Err(DecodeError::corrupt(format!(
			"expected a present stream, found {:?}",
			metadata.role
		)));
	}
	decode_boolean_stream(cursor, &metadata)
}

/// Spreads the compacted `values` over the positions whose present bit is set.
///
/// Without a present stream every position has a value. Otherwise the number of set bits must
/// match the number of values.
pub fn merge_present<T>(present: Option<&BitVector>, values: Vec<T>) -> DecodeResult<Vec<Option<T>>> {
	let Some(present) = present else {
		return Ok(values.into_iter().map(Some).collect());
	};

	let num_values = values.len();
	let mut values = values.into_iter();
	let merged = present
		.iter()
		.map(|is_present| {
			if is_present {
				values.next().map(Some).ok_or_else(|| {
					DecodeError::corrupt(format!("present stream marks more than {num_values} value(s)"))
				})
			} else {
				Ok(None)
			}
		})
		.collect::<DecodeResult<Vec<_>>>()?;

	if values.next().is_some() {
		return Err(DecodeError::corrupt(format!(
			"present stream marks {} of {num_values} value(s)",
			present.count_ones()
		)));
	}
	Ok(merged)
}
