use crate::crypto::OptimusError;
use ring::rand::{SecureRandom, SystemRandom};
use std::sync::Arc;

/// Source of uniformly distributed, unpredictable integers.
pub trait RandomSource: Send + Sync {
    /// Return a value from the closed interval `[low, high]`.
    fn random_in_range(&self, low: u64, high: u64) -> Result<u64, OptimusError>;
}

impl<R: RandomSource + ?Sized> RandomSource for Arc<R> {
    fn random_in_range(&self, low: u64, high: u64) -> Result<u64, OptimusError> {
        self.as_ref().random_in_range(low, high)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn random_in_range(&self, low: u64, high: u64) -> Result<u64, OptimusError> {
        self.as_ref().random_in_range(low, high)
    }
}

/// Random source backed by the platform CSPRNG.
#[derive(Clone, Debug)]
pub struct SystemRandomSource(SystemRandom);

impl SystemRandomSource {
    pub fn new() -> Self {
        Self(SystemRandom::new())
    }

    fn next_u64(&self) -> Result<u64, OptimusError> {
        let mut raw = [0u8; 8];
        self.0
            .fill(&mut raw)
            .map_err(|_| OptimusError::RandomSourceFailure("the system random generator failed".to_string()))?;
        Ok(u64::from_le_bytes(raw))
    }
}

impl Default for SystemRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandomSource {
    fn random_in_range(&self, low: u64, high: u64) -> Result<u64, OptimusError> {
        if low > high {
            return Err(OptimusError::InvalidParameter(format!(
                "empty random range [{low}, {high}]"
            )));
        }

        let span = (high - low).wrapping_add(1);
        if span == 0 {
            // the whole u64 range
            return self.next_u64();
        }

        // reject the low 2^64 mod span values so that every residue is equally likely
        let threshold = span.wrapping_neg() % span;
        loop {
            let value = self.next_u64()?;
            if value >= threshold {
                return Ok(low + value % span);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use optimus_test::test;

    #[test]
    fn stays_in_range() {
        let random = SystemRandomSource::new();
        for _ in 0..1000 {
            let value = random.random_in_range(10, 20).unwrap();
            assert!((10..=20).contains(&value));
        }
        for _ in 0..100 {
            let value = random.random_in_range(1, i32::MAX as u64).unwrap();
            assert!((1..=i32::MAX as u64).contains(&value));
        }
    }

    #[test]
    fn degenerate_and_full_ranges() {
        let random = SystemRandomSource::new();
        assert_eq!(random.random_in_range(7, 7).unwrap(), 7);
        assert!(random.random_in_range(0, u64::MAX).is_ok());
        assert!(random.random_in_range(u64::MAX - 1, u64::MAX).unwrap() >= u64::MAX - 1);
    }

    #[test]
    fn empty_range_rejected() {
        let random = SystemRandomSource::new();
        assert!(matches!(
            random.random_in_range(5, 4),
            Err(OptimusError::InvalidParameter(_))
        ));
    }

    #[test]
    fn covers_small_range() {
        let random = SystemRandomSource::new();
        let mut hits = [0usize; 4];
        for _ in 0..4000 {
            hits[random.random_in_range(0, 3).unwrap() as usize] += 1;
        }
        log::info!("hits: {hits:?}");
        assert!(hits.iter().all(|&count| count > 700), "{hits:?}");
    }

    #[test]
    fn usable_through_shared_pointer() {
        let random: Arc<dyn RandomSource> = Arc::new(SystemRandomSource::new());
        assert!(random.random_in_range(0, 100).unwrap() <= 100);
    }
}
