use super::Environment;
use crate::{
    consts::{DEFAULT_DOMAIN_BITS, DEFAULT_ROUNDS},
    crypto::{Domain, Optimus, OptimusError},
};
use ::config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path};

fn default_domain_bits() -> u32 {
    DEFAULT_DOMAIN_BITS
}

fn default_rounds() -> u32 {
    DEFAULT_ROUNDS
}

/// Stored Optimus parameters. The values are secrets, keep them in a secret store or environment, not in
/// source control.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimusConfig {
    pub prime: u64,
    /// Calculated from the prime when missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mod_inverse: Option<u64>,
    pub random: u64,
    #[serde(default = "default_domain_bits")]
    pub domain_bits: u32,
    /// Miller-Rabin rounds used to verify the prime
    #[serde(default = "default_rounds")]
    pub rounds: u32,
}

impl OptimusConfig {
    /// Load the configuration from an optional (json, toml, yaml) file overlaid by `OPTIMUS--*` environment
    /// variables.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(config_file) = config_file {
            log::info!("Loading optimus configuration from {}", config_file.display());
            builder = builder.add_source(File::from(config_file));
        }
        builder = builder.add_source(Environment::new());

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Create the validated transform.
    pub fn build(&self) -> Result<Optimus, OptimusError> {
        let domain = Domain::new(self.domain_bits)?;
        match self.mod_inverse {
            Some(mod_inverse) => Optimus::with_rounds(domain, self.prime, mod_inverse, self.random, self.rounds),
            None => Optimus::with_rounds_calculated(domain, self.prime, self.random, self.rounds),
        }
    }
}

impl From<&Optimus> for OptimusConfig {
    fn from(optimus: &Optimus) -> Self {
        Self {
            prime: optimus.prime(),
            mod_inverse: Some(optimus.mod_inverse()),
            random: optimus.random(),
            domain_bits: optimus.domain().bits(),
            rounds: DEFAULT_ROUNDS,
        }
    }
}

impl fmt::Debug for OptimusConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptimusConfig")
            .field("prime", &"***")
            .field("mod_inverse", &self.mod_inverse.map(|_| "***"))
            .field("random", &"***")
            .field("domain_bits", &self.domain_bits)
            .field("rounds", &self.rounds)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use optimus_test::test;

    #[test]
    fn defaults_applied() {
        let cfg = OptimusConfig::from_json(r#"{"prime": 1580030173, "random": 1163945558}"#).unwrap();
        assert_eq!(cfg.mod_inverse, None);
        assert_eq!(cfg.domain_bits, 31);
        assert_eq!(cfg.rounds, 20);

        let optimus = cfg.build().unwrap();
        assert_eq!(optimus.mod_inverse(), 59260789);
        assert_eq!(optimus.encode(15), 1103647397);
    }

    #[test]
    fn explicit_inverse_is_checked() {
        let cfg = OptimusConfig::from_json(
            r#"{"prime": 1580030173, "modInverse": 59260790, "random": 1163945558}"#,
        )
        .unwrap();
        assert!(matches!(cfg.build(), Err(OptimusError::InvalidModInverse { .. })));
    }

    #[test]
    fn invalid_domain() {
        let cfg = OptimusConfig::from_json(r#"{"prime": 7, "random": 1, "domainBits": 64}"#).unwrap();
        assert!(matches!(cfg.build(), Err(OptimusError::InvalidDomain(64))));
    }

    #[test]
    fn export_round_trip() {
        let domain = Domain::new(16).unwrap();
        let optimus = Optimus::with_domain_calculated(domain, 65521, 0x1234).unwrap();
        let json = OptimusConfig::from(&optimus).to_json().unwrap();
        log::debug!("exported: {json}");

        let restored = OptimusConfig::from_json(&json).unwrap().build().unwrap();
        assert_eq!(restored, optimus);
    }

    #[test]
    fn debug_hides_secrets() {
        let cfg = OptimusConfig::from_json(r#"{"prime": 1580030173, "random": 1163945558}"#).unwrap();
        let text = format!("{cfg:?}");
        assert!(!text.contains("1580030173"));
        assert!(!text.contains("1163945558"));
    }
}
