use crate::power::PowerOp;

/// Errors that can occur while computing integer powers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Overflow: {op}({base}) does not fit in i64")]
    Overflow { op: PowerOp, base: i64 },
}

/// Result type alias for intpow operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_message() {
        let err = Error::Overflow {
            op: PowerOp::Cube,
            base: 3_000_000,
        };
        assert_eq!(err.to_string(), "Overflow: cube(3000000) does not fit in i64");
    }
}
