use anyhow::{Context, Result};
use clap::Args;
use log::info;
use mlt_decoder::{VectorTile, metadata::TileSetMetadata};
use std::{fs, path::PathBuf};

/// The tile file and the schema needed to decode it.
#[derive(Args, Debug)]
pub struct TileInput {
	/// MLT tile file
	#[arg(required = true)]
	pub filename: PathBuf,

	/// tileset schema describing the columns of every feature table (YAML or JSON)
	#[arg(long, short, required = true)]
	pub schema: PathBuf,
}

impl TileInput {
	/// Reads and decodes the tile. Returns the tile and its size in bytes.
	pub fn load(&self) -> Result<(VectorTile, TileSetMetadata, usize)> {
		let metadata = TileSetMetadata::from_path(&self.schema)?;
		let data = fs::read(&self.filename).with_context(|| format!("reading tile {:?}", self.filename))?;
		info!("decoding {:?} ({} bytes)", self.filename, data.len());
		let tile =
			VectorTile::decode(&data, &metadata).with_context(|| format!("decoding tile {:?}", self.filename))?;
		Ok((tile, metadata, data.len()))
	}
}
