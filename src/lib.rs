//! Base-2 logarithm of fixed point integers without floating point
//!
//! | function | input | output |
//! |---|---|---|
//! | [`log2_u16`] | `u16` | `u16`, Q4.12 |
//! | [`log2_u32`] | `u32` | `u32`, Q5.27 |
//! | [`log2_i32`] | `i32` | `i16`, Q6.10 |
//!
//! Zero has no logarithm and is reported as [`Error::NonPositive`].

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

#[macro_use]
extern crate log;

mod error;
mod log2;
mod maths;

pub mod qformat;

pub use crate::error::{Error, Result};
pub use crate::log2::{log2_i32, log2_u16, log2_u32, Log2Fixed};
pub use crate::maths::HighBit;
