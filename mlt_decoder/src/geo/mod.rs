//! Decoded feature values: geometries in tile coordinates and their properties.

mod coordinates;
mod feature;
mod geometry;
mod linestring;
mod macros;
mod point;
mod polygon;
mod properties;
mod traits;
mod value;

pub use coordinates::*;
pub use feature::*;
pub use geometry::*;
pub use linestring::*;
pub use point::*;
pub use polygon::*;
pub use properties::*;
pub use traits::*;
pub use value::*;
