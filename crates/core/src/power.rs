use std::fmt;

use tracing::trace;

use crate::error::{Error, Result};
use crate::policy::OverflowPolicy;

/// Second power of `x`, wrapping on overflow.
pub fn square(x: i64) -> i64 {
    x.wrapping_mul(x)
}

/// Third power of `x`, computed as `x * square(x)` and wrapping on overflow.
pub fn cube(x: i64) -> i64 {
    x.wrapping_mul(square(x))
}

pub fn checked_square(x: i64) -> Result<i64> {
    x.checked_mul(x).ok_or(Error::Overflow {
        op: PowerOp::Square,
        base: x,
    })
}

/// `|x^3| >= |x^2|` for every non-zero `x`, so an overflowing square always
/// means an overflowing cube.
pub fn checked_cube(x: i64) -> Result<i64> {
    checked_square(x)
        .ok()
        .and_then(|sq| x.checked_mul(sq))
        .ok_or(Error::Overflow {
            op: PowerOp::Cube,
            base: x,
        })
}

pub fn saturating_square(x: i64) -> i64 {
    x.saturating_mul(x)
}

pub fn saturating_cube(x: i64) -> i64 {
    // A clamped square keeps its sign, so the outer multiply still clamps
    // toward the sign of the exact cube.
    x.saturating_mul(saturating_square(x))
}

/// A power operation that can be selected at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerOp {
    Square,
    Cube,
}

impl PowerOp {
    pub fn exponent(self) -> u32 {
        match self {
            PowerOp::Square => 2,
            PowerOp::Cube => 3,
        }
    }

    /// Apply the operation to `x` under `policy`.
    ///
    /// Only `OverflowPolicy::Checked` returns an error; the other policies are total.
    pub fn apply(self, x: i64, policy: OverflowPolicy) -> Result<i64> {
        trace!("Applying {} to {} ({})", self, x, policy);

        match (self, policy) {
            (PowerOp::Square, OverflowPolicy::Wrapping) => Ok(square(x)),
            (PowerOp::Square, OverflowPolicy::Checked) => checked_square(x),
            (PowerOp::Square, OverflowPolicy::Saturating) => Ok(saturating_square(x)),
            (PowerOp::Cube, OverflowPolicy::Wrapping) => Ok(cube(x)),
            (PowerOp::Cube, OverflowPolicy::Checked) => checked_cube(x),
            (PowerOp::Cube, OverflowPolicy::Saturating) => Ok(saturating_cube(x)),
        }
    }
}

impl fmt::Display for PowerOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerOp::Square => f.write_str("square"),
            PowerOp::Cube => f.write_str("cube"),
        }
    }
}
