use super::{IdEncoder, IdEncoderError};

/// Wraps an encoder, tagging every external id with a fixed prefix (e.g. `user-`).
pub struct PrefixedIdEncoder<E: IdEncoder> {
    prefix: String,
    encoder: E,
}

impl<E: IdEncoder> PrefixedIdEncoder<E> {
    pub fn new<S: ToString>(prefix: S, encoder: E) -> Self {
        Self {
            prefix: prefix.to_string(),
            encoder,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl<E: IdEncoder> IdEncoder for PrefixedIdEncoder<E> {
    fn obfuscate(&self, id: u64) -> Result<String, IdEncoderError> {
        let encoded = self.encoder.obfuscate(id)?;
        Ok(format!("{}{}", self.prefix, encoded))
    }

    fn deobfuscate(&self, id: &str) -> Result<u64, IdEncoderError> {
        match id.strip_prefix(self.prefix.as_str()) {
            Some(encoded) => self.encoder.deobfuscate(encoded),
            None => Err(IdEncoderError::InvalidObfuscatedId(format!(
                "Missing prefix {:?}",
                self.prefix
            ))),
        }
    }
}
