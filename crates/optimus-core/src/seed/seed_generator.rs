use super::PrimeSource;
use crate::{
    consts::DEFAULT_ROUNDS,
    crypto::{Domain, Optimus, OptimusError},
    utils::random::RandomSource,
};
use std::time::Duration;

/// Generates fresh Optimus parameters.
///
/// This is a one-time setup step, run it offline or at startup and store the result as a configuration
/// secret. No retries are attempted, a failing source is reported to the caller.
pub struct SeedGenerator<P: PrimeSource, R: RandomSource> {
    source: P,
    random: R,
    domain: Domain,
    rounds: u32,
}

impl<P: PrimeSource, R: RandomSource> SeedGenerator<P, R> {
    pub fn new(source: P, random: R) -> Self {
        Self {
            source,
            random,
            domain: Domain::DEFAULT,
            rounds: DEFAULT_ROUNDS,
        }
    }

    pub fn with_domain(self, domain: Domain) -> Self {
        Self { domain, ..self }
    }

    pub fn with_rounds(self, rounds: u32) -> Self {
        Self { rounds, ..self }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub async fn generate(&self) -> Result<Optimus, OptimusError> {
        log::warn!("Generated Optimus parameters are secret key material, keep them out of source control");
        log::info!("Requesting a prime from {}", self.source.describe());

        let prime = self.source.get_prime(self.domain).await?;
        let random = self.random.random_in_range(1, self.domain.bound())?;
        let optimus = Optimus::with_rounds_calculated(self.domain, prime, random, self.rounds)?;

        log::info!("Seed generated for a {}-bit domain", self.domain.bits());
        Ok(optimus)
    }

    /// Generate a seed, giving up with [`OptimusError::Timeout`] when it takes longer than `timeout`.
    pub async fn generate_with_timeout(&self, timeout: Duration) -> Result<Optimus, OptimusError> {
        match tokio::time::timeout(timeout, self.generate()).await {
            Ok(result) => result,
            Err(_) => {
                log::warn!("Seed generation from {} timed out", self.source.describe());
                Err(OptimusError::Timeout(timeout))
            }
        }
    }
}
