use crate::crypto::{Domain, OptimusError};
use async_trait::async_trait;
use std::sync::Arc;

/// Supplies candidate primes for seed generation.
///
/// Implementations may perform I/O or lengthy computation. A failure to provide a candidate is reported as
/// [`OptimusError::SourceUnavailable`]. The returned value is verified again by the caller.
#[async_trait]
pub trait PrimeSource: Send + Sync {
    /// Human readable origin of the primes, used for logging.
    fn describe(&self) -> String;

    /// Return an odd prime strictly below `domain.bound()`.
    async fn get_prime(&self, domain: Domain) -> Result<u64, OptimusError>;
}

#[async_trait]
impl<P: PrimeSource + ?Sized> PrimeSource for Arc<P> {
    fn describe(&self) -> String {
        self.as_ref().describe()
    }

    async fn get_prime(&self, domain: Domain) -> Result<u64, OptimusError> {
        self.as_ref().get_prime(domain).await
    }
}

#[async_trait]
impl<P: PrimeSource + ?Sized> PrimeSource for Box<P> {
    fn describe(&self) -> String {
        self.as_ref().describe()
    }

    async fn get_prime(&self, domain: Domain) -> Result<u64, OptimusError> {
        self.as_ref().get_prime(domain).await
    }
}
