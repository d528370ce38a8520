use std::sync::Arc;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum IdEncoderError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Invalid obfuscated id: {0}")]
    InvalidObfuscatedId(String),
    #[error("Id {id} is outside of the encodable range [0, {bound}]")]
    IdOutOfDomain { id: u64, bound: u64 },
}

/// Sequence number obfuscation into an external, string representation
pub trait IdEncoder: 'static + Send + Sync {
    fn obfuscate(&self, id: u64) -> Result<String, IdEncoderError>;
    fn deobfuscate(&self, id: &str) -> Result<u64, IdEncoderError>;
}

impl<E: IdEncoder + ?Sized> IdEncoder for Box<E> {
    fn obfuscate(&self, id: u64) -> Result<String, IdEncoderError> {
        self.as_ref().obfuscate(id)
    }

    fn deobfuscate(&self, id: &str) -> Result<u64, IdEncoderError> {
        self.as_ref().deobfuscate(id)
    }
}

impl<E: IdEncoder + ?Sized> IdEncoder for Arc<E> {
    fn obfuscate(&self, id: u64) -> Result<String, IdEncoderError> {
        self.as_ref().obfuscate(id)
    }

    fn deobfuscate(&self, id: &str) -> Result<u64, IdEncoderError> {
        self.as_ref().deobfuscate(id)
    }
}
