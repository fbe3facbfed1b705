//! The tileset schema that describes the columns of every feature table.
//!
//! A tile does not describe its own columns. The decoder needs the [`TileSetMetadata`] the tile
//! was encoded with, which callers load from YAML or JSON:
//!
//! ```yaml
//! name: demo
//! feature_tables:
//!   - name: pois
//!     columns:
//!       - name: id
//!         type: { scalar: uint_32 }
//!       - name: geometry
//!         type: { complex: { type: geometry } }
//!       - name: name
//!         nullable: true
//!         type: { scalar: string }
//! ```

mod column;
mod tileset;

pub use column::*;
pub use tileset::*;
