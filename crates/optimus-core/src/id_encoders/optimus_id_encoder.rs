use super::{IdEncoder, IdEncoderError};
use crate::{crypto::Optimus, settings::OptimusConfig};

/// Decimal representation of the Optimus encoded id.
pub struct OptimusIdEncoder(Optimus);

impl OptimusIdEncoder {
    pub fn new(optimus: Optimus) -> Self {
        Self(optimus)
    }

    pub fn from_config(config: &OptimusConfig) -> Result<Self, IdEncoderError> {
        let optimus = config
            .build()
            .map_err(|err| IdEncoderError::InvalidConfig(format!("{err}")))?;
        Ok(Self(optimus))
    }
}

impl IdEncoder for OptimusIdEncoder {
    fn obfuscate(&self, id: u64) -> Result<String, IdEncoderError> {
        let domain = self.0.domain();
        if !domain.contains(id) {
            return Err(IdEncoderError::IdOutOfDomain {
                id,
                bound: domain.bound(),
            });
        }
        Ok(self.0.encode(id).to_string())
    }

    fn deobfuscate(&self, id: &str) -> Result<u64, IdEncoderError> {
        let n = id
            .parse::<u64>()
            .map_err(|err| IdEncoderError::InvalidObfuscatedId(format!("{err}")))?;
        if !self.0.domain().contains(n) {
            return Err(IdEncoderError::InvalidObfuscatedId("Id is too big".to_string()));
        }
        Ok(self.0.decode(n))
    }
}
