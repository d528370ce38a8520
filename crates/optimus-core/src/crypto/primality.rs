use super::OptimusError;
use crate::consts::MAX_VERIFIABLE;
use num_bigint_dig::{prime::probably_prime, BigUint};

/// Upper bound of the probability that a composite passes `rounds` Miller-Rabin rounds.
pub fn false_positive_bound(rounds: u32) -> f64 {
    0.25f64.powi(rounds.min(i32::MAX as u32) as i32)
}

/// Miller-Rabin probabilistic primality test.
///
/// A composite is reported as prime with a probability of at most `4^-rounds`, a prime is never rejected.
/// Candidates above [`MAX_VERIFIABLE`] are refused with [`OptimusError::UnsupportedMagnitude`] instead of
/// being reported either way.
pub fn is_probably_prime(n: u64, rounds: u32) -> Result<bool, OptimusError> {
    if n > MAX_VERIFIABLE {
        return Err(OptimusError::UnsupportedMagnitude {
            value: n,
            max: MAX_VERIFIABLE,
        });
    }
    if rounds == 0 {
        return Err(OptimusError::InvalidParameter(
            "at least one Miller-Rabin round is required".to_string(),
        ));
    }

    Ok(probably_prime(&BigUint::from(n), rounds as usize))
}
