//! Layer records.
//!
//! A tile is a sequence of layer records. Each record starts with:
//!
//! | bytes  | content                                                   |
//! |--------|-----------------------------------------------------------|
//! | 1      | layer marker (not interpreted)                            |
//! | varint | feature table id, the index into the tileset's tables     |
//! | varint | extent                                                    |
//! | varint | version                                                   |
//! | varint | number of features                                        |
//!
//! followed by the columns of the feature table in schema order. Each column is a stream count
//! varint and that many streams.

use super::{GeometryColumn, PropertyColumn, decode_geometries, merge_present, read_present_stream};
use crate::{
	geo::{Feature, Geometry, Properties},
	metadata::{Column, ScalarType, TileSetMetadata},
};
use log::{debug, trace};
use mlt_core::{
	DecodeError, DecodeResult,
	io::Cursor,
	stream::{StreamMetadata, decode_uint_stream, decode_ulong_stream},
};

/// A decoded layer: the features of one feature table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layer {
	/// Name of the feature table.
	pub name: String,
	pub version: u32,
	pub extent: u32,
	pub features: Vec<Feature>,
}

impl Layer {
	/// Reads one layer record, looking up its columns in `metadata`.
	pub fn read(cursor: &mut Cursor, metadata: &TileSetMetadata) -> DecodeResult<Layer> {
		let position = cursor.position();
		let marker = cursor.read_u8()?;
		let feature_table_id = cursor.read_varint32()?;
		let extent = cursor.read_varint32()?;
		let version = cursor.read_varint32()?;
		let feature_count = cursor.read_varint32()? as usize;
		trace!("layer marker {marker} at {position}");

		let table = metadata
			.feature_table(feature_table_id)
			.ok_or(DecodeError::UnknownFeatureTable(feature_table_id))?;
		debug!(
			"layer '{}': {feature_count} feature(s), {} column(s), extent {extent}",
			table.name,
			table.columns.len()
		);

		let mut ids: Option<Vec<Option<u64>>> = None;
		let mut geometries: Vec<Geometry> = Vec::new();
		let mut properties: Vec<(&str, PropertyColumn)> = Vec::new();

		for column in &table.columns {
			let num_streams = cursor.read_varint32()?;
			trace!("column '{}' with {num_streams} stream(s) at {}", column.name, cursor.position());
			match column.name.as_str() {
				"id" => ids = Some(read_id_column(cursor, column, num_streams)?),
				"geometry" => geometries = decode_geometries(&GeometryColumn::read(cursor, num_streams)?)?,
				name => properties.push((name, PropertyColumn::read(cursor, column, num_streams)?)),
			}
		}

		check_length("geometry", geometries.len(), feature_count)?;
		if let Some(ids) = &ids {
			check_length("id", ids.len(), feature_count)?;
		}
		for (name, values) in &properties {
			check_length(name, values.len(), feature_count)?;
		}

		let features = geometries
			.into_iter()
			.enumerate()
			.map(|(index, geometry)| {
				let id = ids.as_ref().and_then(|ids| ids.get(index).copied().flatten());
				let properties = properties
					.iter()
					.map(|(name, values)| (name.to_string(), values.value(index)))
					.collect::<Properties>();
				Feature::new(id, extent, geometry, properties)
			})
			.collect();

		Ok(Layer {
			name: table.name.clone(),
			version,
			extent,
			features,
		})
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.features.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}
}

/// Reads the present and data streams of the id column.
fn read_id_column(cursor: &mut Cursor, column: &Column, num_streams: u32) -> DecodeResult<Vec<Option<u64>>> {
	if num_streams != 2 {
		return Err(DecodeError::corrupt(format!(
			"id column with {num_streams} stream(s), expected 2"
		)));
	}
	let present = read_present_stream(cursor)?;
	let metadata = StreamMetadata::read(cursor)?;

	let ids = match column.column_type.scalar_type() {
		Some(ScalarType::UInt32) => decode_uint_stream(cursor, &metadata)?
			.into_iter()
			.map(u64::from)
			.collect(),
		Some(ScalarType::UInt64) => decode_ulong_stream(cursor, &metadata)?,
		_ => {
			return Err(DecodeError::UnsupportedColumnType(format!(
				"id column of type {}",
				column.column_type
			)));
		}
	};
	merge_present(Some(&present), ids)
}

fn check_length(what: &str, length: usize, feature_count: usize) -> DecodeResult<()> {
	if length == feature_count {
		Ok(())
	} else {
		Err(DecodeError::corrupt(format!(
			"column '{what}' has {length} value(s) for {feature_count} feature(s)"
		)))
	}
}
