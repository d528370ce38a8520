use super::PrimeSource;
use crate::{
    consts::DEFAULT_ROUNDS,
    crypto::{is_probably_prime, Domain, OptimusError},
    utils::random::RandomSource,
};
use async_trait::async_trait;

/// Return the largest odd prime strictly below `limit`, if any.
pub fn largest_prime_below(limit: u64, rounds: u32) -> Result<Option<u64>, OptimusError> {
    let Some(mut candidate) = limit.checked_sub(1) else {
        return Ok(None);
    };
    if candidate % 2 == 0 {
        candidate = candidate.saturating_sub(1);
    }

    while candidate >= 3 {
        if is_probably_prime(candidate, rounds)? {
            return Ok(Some(candidate));
        }
        candidate -= 2;
    }
    Ok(None)
}

/// In-process prime source: picks a random limit from the upper half of the domain, at most the bound, and
/// searches downwards for the closest prime below it.
pub struct PrimeSearch<R: RandomSource> {
    random: R,
    rounds: u32,
}

impl<R: RandomSource> PrimeSearch<R> {
    pub fn new(random: R) -> Self {
        Self {
            random,
            rounds: DEFAULT_ROUNDS,
        }
    }

    pub fn with_rounds(self, rounds: u32) -> Self {
        Self { rounds, ..self }
    }
}

#[async_trait]
impl<R: RandomSource> PrimeSource for PrimeSearch<R> {
    fn describe(&self) -> String {
        "in-process prime search".to_string()
    }

    async fn get_prime(&self, domain: Domain) -> Result<u64, OptimusError> {
        let limit = self
            .random
            .random_in_range((domain.modulus() / 2).max(4), domain.bound())?;
        log::debug!("Searching for a prime below a random limit in a {}-bit domain", domain.bits());

        let rounds = self.rounds;
        let prime = tokio::task::spawn_blocking(move || largest_prime_below(limit, rounds))
            .await
            .map_err(|err| OptimusError::SourceUnavailable(format!("prime search aborted: {err}")))??;

        prime.ok_or_else(|| OptimusError::SourceUnavailable(format!("no odd prime below {limit}")))
    }
}
