//! Low-level building blocks for decoding MapLibre Tiles (MLT).
//!
//! An MLT tile is one long byte buffer of header-prefixed streams. Everything in this crate
//! works on a single [`io::Cursor`] that is advanced by exactly the number of bytes each decoder
//! consumes:
//!
//! - [`io`]: the byte cursor with varint and little-endian readers.
//! - [`codecs`]: the primitive value transforms (zigzag, run-length, delta, Morton).
//! - [`stream`]: stream header parsing and the scalar stream decoders.
//! - [`types`]: small value types shared with higher layers, such as [`types::BitVector`].
//!
//! All fallible functions return [`DecodeResult`]; errors are never swallowed.

mod error;

pub mod codecs;
pub mod io;
pub mod stream;
pub mod types;

#[cfg(any(test, feature = "test"))]
pub mod encode;

pub use error::{DecodeError, DecodeResult};
