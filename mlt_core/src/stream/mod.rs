//! Stream headers and scalar stream decoders.
//!
//! Every stream starts with a [`StreamMetadata`] header that announces its role, how it was
//! compressed, how many values it holds and how many bytes it spans. The decoders in this
//! module read exactly that many bytes and undo the compression.

mod boolean;
mod float;
mod integer;
mod metadata;

pub use boolean::*;
pub use float::*;
pub use integer::*;
pub use metadata::*;
