//! Decoder for MapLibre Tiles (MLT).
//!
//! ```no_run
//! use mlt_decoder::{VectorTile, metadata::TileSetMetadata};
//! use std::path::Path;
//!
//! let metadata = TileSetMetadata::from_path(Path::new("tileset.yml")).unwrap();
//! let data = std::fs::read("0-0-0.mlt").unwrap();
//! let tile = VectorTile::decode(&data, &metadata).unwrap();
//! for layer in &tile.layers {
//! 	println!("{}: {} features", layer.name, layer.features.len());
//! }
//! ```
//!
//! The low-level cursor, codecs and stream decoders live in [`mlt_core`].

pub mod geo;
pub mod metadata;
pub mod projection;
pub mod vector_tile;

#[cfg(any(test, feature = "test"))]
pub mod fixtures;

pub use vector_tile::{Layer, VectorTile};
