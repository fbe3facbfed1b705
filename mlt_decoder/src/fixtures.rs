//! Builders for encoded layers and tiles, for tests of this crate and its dependents.

use crate::metadata::{Column, FeatureTableSchema, ScalarType, TileSetMetadata};
use mlt_core::{
	encode::{
		encode_boolean_stream, encode_raw_stream, encode_uint_stream, encode_varint_stream, encode_varint32,
		encode_zigzag32,
	},
	stream::{DictionaryType, LengthType, LogicalTechnique, StreamEncoding, StreamRole},
};

/// Assembles one layer record from its header fields and pre-encoded columns.
#[derive(Clone, Debug)]
pub struct LayerBuilder {
	feature_table_id: u32,
	extent: u32,
	version: u32,
	feature_count: u32,
	columns: Vec<u8>,
}

impl LayerBuilder {
	#[must_use]
	pub fn new(feature_table_id: u32, extent: u32, feature_count: u32) -> Self {
		LayerBuilder {
			feature_table_id,
			extent,
			version: 1,
			feature_count,
			columns: Vec::new(),
		}
	}

	#[must_use]
	pub fn version(mut self, version: u32) -> Self {
		self.version = version;
		self
	}

	/// Appends a column made of `streams`, each a complete header plus payload.
	#[must_use]
	pub fn column(mut self, streams: &[Vec<u8>]) -> Self {
		encode_varint32(&mut self.columns, streams.len() as u32);
		for stream in streams {
			self.columns.extend_from_slice(stream);
		}
		self
	}

	#[must_use]
	pub fn build(&self) -> Vec<u8> {
		let mut bytes = vec![1];
		encode_varint32(&mut bytes, self.feature_table_id);
		encode_varint32(&mut bytes, self.extent);
		encode_varint32(&mut bytes, self.version);
		encode_varint32(&mut bytes, self.feature_count);
		bytes.extend_from_slice(&self.columns);
		bytes
	}
}

/// The present and data streams of an unsigned 32-bit id column.
#[must_use]
pub fn encode_ids(ids: &[Option<u32>]) -> Vec<Vec<u8>> {
	let present = ids.iter().map(Option::is_some).collect::<Vec<_>>();
	let values = ids.iter().flatten().copied().collect::<Vec<_>>();
	vec![
		encode_boolean_stream(StreamRole::Present, &present),
		encode_uint_stream(StreamRole::Data(DictionaryType::None), &values),
	]
}

/// A componentwise delta encoded vertex stream.
#[must_use]
pub fn encode_points(points: &[[i32; 2]]) -> Vec<u8> {
	let values = points.iter().flatten().copied().collect::<Vec<i32>>();
	let deltas = values
		.iter()
		.enumerate()
		.map(|(index, value)| {
			let previous = if index >= 2 { values[index - 2] } else { 0 };
			encode_zigzag32(value.wrapping_sub(previous))
		})
		.collect::<Vec<_>>();
	encode_varint_stream(
		StreamRole::Data(DictionaryType::Vertex),
		LogicalTechnique::ComponentwiseDelta,
		LogicalTechnique::None,
		StreamEncoding::Plain,
		&deltas,
	)
}

/// The present, length and data streams of a plain string column.
#[must_use]
pub fn encode_plain_strings(values: &[Option<&str>]) -> Vec<Vec<u8>> {
	let present = values.iter().map(Option::is_some).collect::<Vec<_>>();
	let strings = values.iter().flatten().collect::<Vec<_>>();
	let lengths = strings.iter().map(|s| s.len() as u32).collect::<Vec<_>>();
	let data = strings.iter().flat_map(|s| s.bytes()).collect::<Vec<_>>();
	vec![
		encode_boolean_stream(StreamRole::Present, &present),
		encode_uint_stream(StreamRole::Length(LengthType::VarBinary), &lengths),
		encode_raw_stream(StreamRole::Data(DictionaryType::None), strings.len(), &data),
	]
}

/// A tileset with one feature table `pois`: a `uint_32` id, a geometry and a nullable
/// string `name`.
#[must_use]
pub fn example_schema() -> TileSetMetadata {
	TileSetMetadata::new(vec![FeatureTableSchema {
		name: "pois".to_string(),
		columns: vec![
			Column::scalar("id", ScalarType::UInt32),
			Column::geometry(),
			Column::scalar("name", ScalarType::String).nullable(),
		],
	}])
}

/// One `pois` layer with a single point feature `id = 7` at `(100, 200)` named `"a"`.
#[must_use]
pub fn example_tile() -> Vec<u8> {
	LayerBuilder::new(0, 4096, 1)
		.column(&encode_ids(&[Some(7)]))
		.column(&[
			encode_uint_stream(StreamRole::Data(DictionaryType::None), &[0]),
			encode_points(&[[100, 200]]),
		])
		.column(&encode_plain_strings(&[Some("a")]))
		.build()
}

/// The schema of [`example_schema`] as YAML.
pub const EXAMPLE_SCHEMA_YAML: &str = "feature_tables:
  - name: pois
    columns:
      - name: id
        type: { scalar: uint_32 }
      - name: geometry
        type: { complex: { type: geometry } }
      - name: name
        nullable: true
        type: { scalar: string }
";
