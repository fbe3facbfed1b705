use super::Layer;
use crate::metadata::TileSetMetadata;
use log::debug;
use mlt_core::{DecodeResult, io::Cursor};

/// A decoded tile: its layers in the order they appear in the buffer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorTile {
	pub layers: Vec<Layer>,
}

impl VectorTile {
	#[must_use]
	pub fn new(layers: Vec<Layer>) -> VectorTile {
		VectorTile { layers }
	}

	/// Decodes all layers of `data`, whose columns are described by `metadata`.
	///
	/// Any error aborts the whole tile; there are no partial results.
	pub fn decode(data: &[u8], metadata: &TileSetMetadata) -> DecodeResult<VectorTile> {
		let mut cursor = Cursor::new(data);
		let mut tile = VectorTile::default();
		while cursor.has_remaining() {
			tile.layers.push(Layer::read(&mut cursor, metadata)?);
		}
		debug!("decoded {} layer(s) from {} byte(s)", tile.layers.len(), data.len());
		Ok(tile)
	}

	#[must_use]
	pub fn find_layer(&self, name: &str) -> Option<&Layer> {
		self.layers.iter().find(|layer| layer.name == name)
	}

	#[must_use]
	pub fn num_features(&self) -> usize {
		self.layers.iter().map(Layer::len).sum()
	}
}
