pub mod decode;
pub mod probe;

mod input;
mod tile_coord;

pub use input::TileInput;
pub use tile_coord::TileCoord;
