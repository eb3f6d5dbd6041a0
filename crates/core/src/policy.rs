use std::fmt;

/// How a power operation behaves when the exact result leaves the `i64` range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowPolicy {
    /// Two's-complement wraparound
    #[default]
    Wrapping,
    /// Report `Error::Overflow`
    Checked,
    /// Clamp to `i64::MIN` / `i64::MAX`
    Saturating,
}

impl OverflowPolicy {
    pub fn can_fail(self) -> bool {
        matches!(self, OverflowPolicy::Checked)
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OverflowPolicy::Wrapping => "wrapping",
            OverflowPolicy::Checked => "checked",
            OverflowPolicy::Saturating => "saturating",
        };
        f.write_str(name)
    }
}
