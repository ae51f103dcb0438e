use thiserror::Error;

/// Errors raised by the arithmetic, encoding and batch layers of the crate.
#[derive(Debug, Error)]
pub enum AlgebraError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("point is not on the curve")]
    NotOnCurve,
    #[error("point is not in the prime order subgroup")]
    NotInSubgroup,
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),
    #[error("invalid buffer length: expected {expected} bytes, found {found}")]
    InvalidBufferLength { expected: usize, found: usize },
    #[error("length mismatch: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("invalid evaluation domain size {0}")]
    InvalidDomainSize(usize),
    #[error("curve not supported: {0}")]
    CurveNotSupported(String),
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AlgebraError {
    pub(crate) fn check_buffer_length(expected: usize, found: usize) -> Result<(), Self> {
        if expected != found {
            return Err(AlgebraError::InvalidBufferLength { expected, found });
        }
        Ok(())
    }
}
