//! Configuration file structures (with serde-derived parser)

pub mod chain;

pub use self::chain::{ChainConfig, TxTypeConfig};

use crate::{
    error::{Error, ErrorKind::*},
    prelude::*,
};
use serde::Deserialize;
use std::{env, fs, path::Path, str::FromStr};

/// Environment variable containing path to the chain registry file
pub const CONFIG_ENV_VAR: &str = "TXBUILDER_CHAINS_FILE";

/// Name of the chain registry file
pub const CONFIG_FILE_NAME: &str = "chains.toml";

/// Chain registry configuration (i.e. TOML file parsed with serde)
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Chain families transactions can be built for
    #[serde(default)]
    pub chain: Vec<ChainConfig>,
}

impl RegistryConfig {
    /// Load the configuration from a TOML file
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();

        let toml_string = fs::read_to_string(path).map_err(|e| {
            format_err!(
                ConfigError,
                "couldn't read config from {}: {}",
                path.display(),
                e
            )
        })?;

        let config = toml_string.parse::<Self>()?;
        debug!(
            "loaded {} chain(s) from {}",
            config.chain.len(),
            path.display()
        );

        Ok(config)
    }

    /// Load the configuration from the file named by [`CONFIG_ENV_VAR`],
    /// falling back to [`CONFIG_FILE_NAME`] in the current directory
    pub fn load_from_env() -> Result<Self, Error> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load_toml(path),
            None => Self::load_toml(CONFIG_FILE_NAME),
        }
    }
}

impl FromStr for RegistryConfig {
    type Err = Error;

    fn from_str(toml_string: &str) -> Result<Self, Error> {
        Ok(toml::from_str(toml_string)?)
    }
}
