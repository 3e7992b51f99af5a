use thiserror::Error;

/// Errors from BigInt arithmetic.
///
/// Both conditions are detected before any work is done, so a failed call
/// never produces a partial value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BigIntError {
    /// The divisor's magnitude is zero.
    #[error("BigInt division by zero")]
    DivisionByZero,
    /// A left shift was requested on a negative value.
    #[error("BigInt left shift of a negative value")]
    InvalidShift,
}

/// Result alias for fallible BigInt operations.
pub type Result<T> = std::result::Result<T, BigIntError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            BigIntError::DivisionByZero.to_string(),
            "BigInt division by zero"
        );
        assert_eq!(
            BigIntError::InvalidShift.to_string(),
            "BigInt left shift of a negative value"
        );
    }
}
