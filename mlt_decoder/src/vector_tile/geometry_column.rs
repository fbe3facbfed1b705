use super::GeometryType;
use log::{trace, warn};
use mlt_core::{
	DecodeError, DecodeResult,
	io::Cursor,
	stream::{DictionaryType, LengthType, OffsetType, StreamMetadata, StreamRole, decode_int_stream, decode_uint_stream},
};

/// The flat streams of a geometry column, before geometries are rebuilt from them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeometryColumn {
	/// One tag per feature.
	pub geometry_types: Vec<GeometryType>,
	/// Number of parts of each multi-geometry.
	pub num_geometries: Vec<u32>,
	/// Rings per polygon, or vertices per line in columns without polygons.
	pub num_parts: Vec<u32>,
	/// Vertices per ring, or per line in columns with polygons.
	pub num_rings: Vec<u32>,
	/// Indices into `vertex_buffer` (in vertices, not values) when the vertices are dictionary
	/// encoded.
	pub vertex_offsets: Option<Vec<u32>>,
	/// Interleaved `x, y` values.
	pub vertex_buffer: Vec<i32>,
}

impl GeometryColumn {
	/// Reads the geometry type stream followed by the other `num_streams - 1` streams of the
	/// column.
	pub fn read(cursor: &mut Cursor, num_streams: u32) -> DecodeResult<GeometryColumn> {
		if num_streams == 0 {
			return Err(DecodeError::corrupt("geometry column without a geometry type stream"));
		}

		let metadata = StreamMetadata::read(cursor)?;
		let mut column = GeometryColumn {
			geometry_types: decode_uint_stream(cursor, &metadata)?
				.into_iter()
				.map(GeometryType::try_from)
				.collect::<DecodeResult<Vec<_>>>()?,
			..GeometryColumn::default()
		};

		for _ in 1..num_streams {
			let metadata = StreamMetadata::read(cursor)?;
			match metadata.role {
				StreamRole::Length(LengthType::Geometries) => {
					column.num_geometries = decode_uint_stream(cursor, &metadata)?;
				}
				StreamRole::Length(LengthType::Parts) => column.num_parts = decode_uint_stream(cursor, &metadata)?,
				StreamRole::Length(LengthType::Rings) => column.num_rings = decode_uint_stream(cursor, &metadata)?,
				StreamRole::Length(LengthType::Triangles) => {
					let triangles = decode_uint_stream(cursor, &metadata)?;
					warn!("ignoring {} pre-tessellated triangle count(s)", triangles.len());
				}
				StreamRole::Offset(OffsetType::Vertex) => {
					column.vertex_offsets = Some(decode_uint_stream(cursor, &metadata)?);
				}
				StreamRole::Data(DictionaryType::Vertex | DictionaryType::Morton) => {
					column.vertex_buffer = decode_int_stream(cursor, &metadata)?;
				}
				role => {
					return Err(DecodeError::corrupt(format!("unexpected stream {role:?} in geometry column")));
				}
			}
		}

		trace!(
			"geometry column: {} geometries, {} vertex value(s), dictionary: {}",
			column.geometry_types.len(),
			column.vertex_buffer.len(),
			column.vertex_offsets.is_some()
		);
		Ok(column)
	}

	/// Whether any feature of the column is a polygon. Lines then take their vertex counts from
	/// `num_rings` instead of `num_parts`.
	#[must_use]
	pub fn contains_polygon(&self) -> bool {
		self.geometry_types.iter().any(GeometryType::is_polygonal)
	}
}
