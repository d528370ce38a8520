use std::time::Duration;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum OptimusError {
    #[error("Invalid prime {prime}: {reason}")]
    InvalidPrime { prime: u64, reason: String },
    #[error("Value {value} exceeds the largest verifiable magnitude {max}")]
    UnsupportedMagnitude { value: u64, max: u64 },
    #[error("The modular inverse does not invert the prime modulo {modulus}")]
    InvalidModInverse { modulus: u64 },
    #[error("Unsupported domain width of {0} bits")]
    InvalidDomain(u32),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Prime source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("Secure random source failure: {0}")]
    RandomSourceFailure(String),
    #[error("Operation did not complete within {0:?}")]
    Timeout(Duration),
}

impl OptimusError {
    pub(crate) fn invalid_prime<S: ToString>(prime: u64, reason: S) -> Self {
        Self::InvalidPrime {
            prime,
            reason: reason.to_string(),
        }
    }
}
