use super::{false_positive_bound, is_probably_prime, Domain, OptimusError};
use crate::consts::{DEFAULT_ROUNDS, MAX_VERIFIABLE};

/// Checks that `prime` can parameterize a transform over `domain`.
///
/// The candidate must fit the verifiable magnitude, lie strictly below the domain bound, be odd (2 shares a
/// factor with any power-of-two modulus) and pass the primality oracle. A prime equal to the bound acts as
/// `-1 mod 2^bits`, mapping consecutive values to consecutive outputs.
pub fn verify_prime(prime: u64, domain: Domain, rounds: u32) -> Result<(), OptimusError> {
    if prime > MAX_VERIFIABLE {
        return Err(OptimusError::UnsupportedMagnitude {
            value: prime,
            max: MAX_VERIFIABLE,
        });
    }
    if prime >= domain.bound() {
        return Err(OptimusError::invalid_prime(
            prime,
            format!("not below the domain bound 2^{}-1", domain.bits()),
        ));
    }
    if prime == 2 {
        return Err(OptimusError::invalid_prime(
            prime,
            "an even prime is not coprime with a power-of-two modulus",
        ));
    }
    if !is_probably_prime(prime, rounds)? {
        return Err(OptimusError::invalid_prime(
            prime,
            format!(
                "rejected by {rounds} Miller-Rabin rounds, expected accuracy: false positive probability <= {:e}",
                false_positive_bound(rounds)
            ),
        ));
    }
    Ok(())
}

/// Computes `x` such that `(prime * x) mod 2^bits == 1`, verifying the prime with the default confidence.
pub fn mod_inverse(prime: u64, domain: Domain) -> Result<u64, OptimusError> {
    mod_inverse_with_rounds(prime, domain, DEFAULT_ROUNDS)
}

pub fn mod_inverse_with_rounds(prime: u64, domain: Domain, rounds: u32) -> Result<u64, OptimusError> {
    verify_prime(prime, domain, rounds)?;

    let modulus = domain.modulus();
    let (r, x, _) = extended_gcd(prime as i64, modulus as i64);
    if r != 1 {
        return Err(OptimusError::invalid_prime(
            prime,
            format!("not coprime with the domain modulus 2^{}", domain.bits()),
        ));
    }
    Ok(x.rem_euclid(modulus as i64) as u64)
}

/// Finds the greatest common divisor of `a` and `b` and the Bezout coefficients `x`, `y` with `a*x + b*y = gcd`.
/// For non-negative inputs every intermediate value stays within `max(a, b)` in magnitude.
fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut r, mut new_r) = (a, b);
    let (mut x, mut new_x) = (1, 0);
    let (mut y, mut new_y) = (0, 1);

    while new_r != 0 {
        let quotient = r / new_r;
        (r, new_r) = (new_r, r - quotient * new_r);
        (x, new_x) = (new_x, x - quotient * new_x);
        (y, new_y) = (new_y, y - quotient * new_y);
    }

    (r, x, y)
}
