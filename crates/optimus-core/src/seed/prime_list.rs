use super::PrimeSource;
use crate::{
    crypto::{Domain, OptimusError},
    utils::random::RandomSource,
};
use async_trait::async_trait;
use std::io::BufRead;

/// Prime source selecting a random entry of a prime list.
///
/// The list is parsed from whitespace separated text, tokens that are not integers (e.g. the title line of a
/// published prime table) are skipped. Entries are not trusted, the seed generator verifies the selection.
pub struct PrimeList<R: RandomSource> {
    origin: String,
    primes: Vec<u64>,
    random: R,
}

impl<R: RandomSource> PrimeList<R> {
    pub fn new<S: ToString>(origin: S, primes: Vec<u64>, random: R) -> Self {
        Self {
            origin: origin.to_string(),
            primes,
            random,
        }
    }

    pub fn from_reader<S: ToString, B: BufRead>(origin: S, reader: B, random: R) -> Result<Self, OptimusError> {
        let origin = origin.to_string();
        let mut primes = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|err| OptimusError::SourceUnavailable(format!("failed to read {origin}: {err}")))?;
            primes.extend(line.split_whitespace().filter_map(|token| token.parse::<u64>().ok()));
        }
        log::debug!("Loaded {} entries from {}", primes.len(), origin);

        Ok(Self { origin, primes, random })
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }
}

#[async_trait]
impl<R: RandomSource> PrimeSource for PrimeList<R> {
    fn describe(&self) -> String {
        format!("prime list {}", self.origin)
    }

    async fn get_prime(&self, domain: Domain) -> Result<u64, OptimusError> {
        let candidates: Vec<u64> = self
            .primes
            .iter()
            .copied()
            .filter(|p| *p > 2 && p % 2 == 1 && *p < domain.bound())
            .collect();
        if candidates.is_empty() {
            return Err(OptimusError::SourceUnavailable(format!(
                "{} has no odd entry inside a {}-bit domain",
                self.origin,
                domain.bits()
            )));
        }

        let index = self.random.random_in_range(0, candidates.len() as u64 - 1)?;
        Ok(candidates[index as usize])
    }
}
