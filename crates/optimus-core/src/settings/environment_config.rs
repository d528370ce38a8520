use ::config::{ConfigError, Map, Source, Value, ValueKind};
use std::env;

pub const DEFAULT_ENV_PREFIX: &str = "optimus--";
const SEPARATOR: &str = "--";

/// Environment variable source for the `config` crate.
///
/// `OPTIMUS--DOMAIN_BITS=16` becomes the key `domainBits`, nested keys are separated by `--`.
#[derive(Debug, Clone)]
pub struct Environment {
    prefix: String,
}

impl Environment {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_ENV_PREFIX)
    }

    /// Use a custom prefix, matching is case insensitive.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_lowercase(),
        }
    }

    fn convert_key_case(key: &str) -> String {
        key.split('_')
            .enumerate()
            .map(|(i, s)| {
                if i == 0 {
                    s.to_string()
                } else {
                    let mut chars = s.chars();
                    chars
                        .next()
                        .map(|c| c.to_uppercase().collect::<String>())
                        .unwrap_or_default()
                        + chars.as_str()
                }
            })
            .collect()
    }

    fn to_config_key(&self, env_key: &str) -> Option<String> {
        let key = env_key.to_lowercase();
        let key = key.strip_prefix(&self.prefix)?;
        let key = key
            .split(SEPARATOR)
            .map(Self::convert_key_case)
            .collect::<Vec<_>>()
            .join(".");
        Some(key)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for Environment {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new((*self).clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, ConfigError> {
        let uri: String = "environment".into();

        let mut m = Map::new();
        for (env_key, value) in env::vars() {
            if let Some(key) = self.to_config_key(&env_key) {
                log::debug!("Reading env {} as {}...", env_key, key);
                m.insert(key, Value::new(Some(&uri), ValueKind::String(value)));
            }
        }

        Ok(m)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use optimus_test::test;

    #[test]
    fn key_conversion() {
        let env = Environment::new();
        assert_eq!(env.to_config_key("OPTIMUS--PRIME").as_deref(), Some("prime"));
        assert_eq!(env.to_config_key("OPTIMUS--MOD_INVERSE").as_deref(), Some("modInverse"));
        assert_eq!(env.to_config_key("optimus--Domain_Bits").as_deref(), Some("domainBits"));
        assert_eq!(
            env.to_config_key("OPTIMUS--USER_IDS--RANDOM").as_deref(),
            Some("userIds.random")
        );
        assert_eq!(env.to_config_key("PATH"), None);

        let env = Environment::with_prefix("APP--");
        assert_eq!(env.to_config_key("APP--PRIME").as_deref(), Some("prime"));
        assert_eq!(env.to_config_key("OPTIMUS--PRIME"), None);
    }
}
