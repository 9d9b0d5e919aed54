//! Low-level utilities shared by both cipher families.
//!
//! Word arithmetic with explicit width masking and little-endian byte
//! conversion. No module above this layer performs its own masking.

pub(crate) mod bits;
pub(crate) mod bytes;
