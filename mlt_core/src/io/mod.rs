//! Byte-level reading.
//!
//! The [`Cursor`] is the only mutable state of a decode pass. It is passed by `&mut` to every
//! decoder, and every decoder advances it by exactly the bytes it consumed.

mod cursor;

pub use cursor::*;
