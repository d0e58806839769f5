//! Registry of information about known chain families

use super::Chain;
use crate::{
    config::RegistryConfig,
    error::{Error, ErrorKind::*},
    prelude::*,
    Map,
};

/// Registry of chain families transactions can be built for.
///
/// Populated once at startup and then shared read-only.
#[derive(Clone, Debug, Default)]
pub struct Registry(Map<String, Chain>);

impl Registry {
    /// Build a registry from the given configuration
    pub fn from_config(config: &RegistryConfig) -> Result<Self, Error> {
        let mut registry = Self::default();

        for chain_config in &config.chain {
            registry.register_chain(Chain::from_config(chain_config)?)?;
        }

        Ok(registry)
    }

    /// Register a `Chain` with the registry
    pub fn register_chain(&mut self, chain: Chain) -> Result<(), Error> {
        let name = chain.name.clone();
        let tx_type_count = chain.tx_types().count();

        if self.0.insert(name.clone(), chain).is_none() {
            info!("[{}] registered chain ({} tx types)", name, tx_type_count);
            Ok(())
        } else {
            fail!(ConfigError, "chain already registered: {}", name);
        }
    }

    /// Get information about a particular chain family (if registered)
    pub fn get_chain(&self, name: &str) -> Option<&Chain> {
        self.0.get(name)
    }

    /// Iterate over the registered chain names
    pub fn chain_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
