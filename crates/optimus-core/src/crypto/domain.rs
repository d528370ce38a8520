use super::OptimusError;
use crate::consts::{DEFAULT_DOMAIN_BITS, MAX_DOMAIN_BITS, MIN_DOMAIN_BITS};
use serde::{Deserialize, Serialize};

/// The integer range `[0, 2^bits - 1]` a transform operates on.
///
/// Encoded values carry no domain tag, the encoding and decoding side must agree on the domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Domain {
    bits: u32,
}

impl Domain {
    pub const DEFAULT: Domain = Domain {
        bits: DEFAULT_DOMAIN_BITS,
    };

    pub fn new(bits: u32) -> Result<Self, OptimusError> {
        if (MIN_DOMAIN_BITS..=MAX_DOMAIN_BITS).contains(&bits) {
            Ok(Self { bits })
        } else {
            Err(OptimusError::InvalidDomain(bits))
        }
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// The largest encodable value, `2^bits - 1`. Also used as the reduction mask.
    pub fn bound(&self) -> u64 {
        self.modulus() - 1
    }

    pub fn modulus(&self) -> u64 {
        1 << self.bits
    }

    pub fn contains(&self, value: u64) -> bool {
        value <= self.bound()
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for Domain {
    type Error = OptimusError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl From<Domain> for u32 {
    fn from(domain: Domain) -> Self {
        domain.bits
    }
}
