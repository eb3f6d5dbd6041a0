//! intpow-core - integer powers with explicit overflow behaviour
//!
//! This crate provides:
//! - `square` and `cube` over `i64` with two's-complement wraparound
//! - Checked and saturating variants for callers that need a stronger contract
//! - `PowerOp` / `OverflowPolicy` for selecting an operation and policy at runtime
pub mod error;
pub mod policy;
pub mod power;

pub use error::{Error, Result};
pub use policy::OverflowPolicy;
pub use power::{
    PowerOp, checked_cube, checked_square, cube, saturating_cube, saturating_square, square,
};
