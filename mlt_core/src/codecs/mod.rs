//! Primitive value transforms.
//!
//! These functions undo the logical techniques of a stream after its raw integers have been
//! read from the cursor. The integer transforms are generic over [`Word`] so the 32-bit and
//! 64-bit stream decoders share one implementation.

mod delta;
mod morton;
mod rle;
mod zigzag;

pub use delta::*;
pub use morton::*;
pub use rle::*;
pub use zigzag::*;

use num_traits::{PrimInt, Unsigned, WrappingAdd, WrappingSub};
use std::fmt::Debug;

/// An unsigned machine word the integer codecs operate on (`u32` or `u64`).
///
/// Signed values travel through the codecs as their two's-complement bit pattern and are
/// reinterpreted by the caller.
pub trait Word: PrimInt + Unsigned + WrappingAdd + WrappingSub + Debug {}

impl Word for u32 {}
impl Word for u64 {}
