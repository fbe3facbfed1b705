//! Tile decoding.
//!
//! - [`tile`]: the entry point, [`VectorTile::decode`], which reads layer after layer.
//! - [`layer`]: one layer record; dispatches each column to the id, geometry or property path.
//! - [`geometry_column`] and [`geometry_decoder`]: the geometry streams and the rebuilding of
//!   nested geometries from them.
//! - [`property_column`] and [`string_column`]: nullable scalar and string columns.
//! - [`geometry_type`]: the per-feature geometry tag.

mod geometry_column;
mod geometry_decoder;
mod geometry_type;
mod layer;
mod property_column;
mod string_column;
mod tile;

pub use geometry_column::GeometryColumn;
pub use geometry_decoder::{GeometryCursors, decode_geometries};
pub use geometry_type::GeometryType;
pub use layer::Layer;
pub use property_column::{PropertyColumn, merge_present, read_present_stream};
pub use string_column::read_string_column;
pub use tile::VectorTile;
