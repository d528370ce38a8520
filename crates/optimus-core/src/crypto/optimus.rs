use super::{mod_inverse_with_rounds, verify_prime, Domain, OptimusError};
use crate::consts::DEFAULT_ROUNDS;
use std::fmt;

/// Optimus is used to encode and decode integers using Knuth's Hashing Algorithm.
///
/// The transform is a bijection on `[0, domain.bound()]`. It is immutable after construction, `encode` and
/// `decode` only read the parameters and can be called from any number of threads.
///
/// The prime, the modular inverse and the random mask are secret key material. Anyone knowing the prime and
/// the mask can derive the inverse and decode every value.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Optimus {
    domain: Domain,
    prime: u64,
    mod_inverse: u64,
    random: u64,
}

impl Optimus {
    /// Create a transform over the default 31 bit domain from a complete parameter triple.
    pub fn new(prime: u64, mod_inverse: u64, random: u64) -> Result<Self, OptimusError> {
        Self::with_domain(Domain::DEFAULT, prime, mod_inverse, random)
    }

    pub fn with_domain(domain: Domain, prime: u64, mod_inverse: u64, random: u64) -> Result<Self, OptimusError> {
        Self::with_rounds(domain, prime, mod_inverse, random, DEFAULT_ROUNDS)
    }

    /// Create a transform verifying the prime with the given number of Miller-Rabin rounds.
    pub fn with_rounds(
        domain: Domain,
        prime: u64,
        mod_inverse: u64,
        random: u64,
        rounds: u32,
    ) -> Result<Self, OptimusError> {
        verify_prime(prime, domain, rounds)?;
        Self::verify_random(domain, random)?;
        if (prime as u128 * mod_inverse as u128) % domain.modulus() as u128 != 1 {
            return Err(OptimusError::InvalidModInverse {
                modulus: domain.modulus(),
            });
        }

        log::debug!("Optimus created over a {}-bit domain", domain.bits());
        Ok(Self::new_unchecked(domain, prime, mod_inverse, random))
    }

    /// Create a transform over the default 31 bit domain, the modular inverse is calculated.
    pub fn new_calculated(prime: u64, random: u64) -> Result<Self, OptimusError> {
        Self::with_domain_calculated(Domain::DEFAULT, prime, random)
    }

    pub fn with_domain_calculated(domain: Domain, prime: u64, random: u64) -> Result<Self, OptimusError> {
        Self::with_rounds_calculated(domain, prime, random, DEFAULT_ROUNDS)
    }

    pub fn with_rounds_calculated(domain: Domain, prime: u64, random: u64, rounds: u32) -> Result<Self, OptimusError> {
        // the prime is verified while computing its inverse
        let mod_inverse = mod_inverse_with_rounds(prime, domain, rounds)?;
        Self::verify_random(domain, random)?;

        log::debug!("Optimus created over a {}-bit domain", domain.bits());
        Ok(Self::new_unchecked(domain, prime, mod_inverse, random))
    }

    /// Create a transform without any validation.
    ///
    /// The caller is responsible for `prime` being an odd prime below the bound, `mod_inverse` being its
    /// inverse and `random` being inside the domain. Otherwise `decode` silently returns wrong values.
    pub const fn new_unchecked(domain: Domain, prime: u64, mod_inverse: u64, random: u64) -> Self {
        Self {
            domain,
            prime,
            mod_inverse,
            random,
        }
    }

    fn verify_random(domain: Domain, random: u64) -> Result<(), OptimusError> {
        if domain.contains(random) {
            Ok(())
        } else {
            Err(OptimusError::InvalidParameter(format!(
                "random mask exceeds the domain bound 2^{}-1",
                domain.bits()
            )))
        }
    }

    /// Encode `n` using Knuth's hashing algorithm.
    /// Only the low `domain.bits()` bits of `n` take part, larger values wrap around the domain.
    #[inline]
    pub fn encode(&self, n: u64) -> u64 {
        let product = (n as u128 * self.prime as u128) as u64;
        (product & self.domain.bound()) ^ self.random
    }

    /// Decode `n` back to the original.
    /// The result is only meaningful if `n` was encoded with the same parameters and domain.
    #[inline]
    pub fn decode(&self, n: u64) -> u64 {
        let product = ((n ^ self.random) as u128 * self.mod_inverse as u128) as u64;
        product & self.domain.bound()
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// The associated prime. Secret, do not expose it.
    pub fn prime(&self) -> u64 {
        self.prime
    }

    /// The associated modular inverse. Secret, do not expose it.
    pub fn mod_inverse(&self) -> u64 {
        self.mod_inverse
    }

    /// The associated random mask. Secret, do not expose it.
    pub fn random(&self) -> u64 {
        self.random
    }
}

impl fmt::Debug for Optimus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Optimus")
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}
