//! Information about particular Cosmos SDK chain families

mod registry;

pub use self::registry::Registry;

use crate::{
    config::chain::ChainConfig,
    error::{Error, ErrorKind::*},
    prelude::*,
    Map,
};
use stdtx::{msg::Kind, BroadcastMode, Format, SignLayout, TypeName};

/// Information about a particular chain family
#[derive(Clone, Debug)]
pub struct Chain {
    /// Registry key of this chain family
    pub name: String,

    /// Wire conventions for transactions on this chain
    pub format: Format,

    /// Broadcast mode of submission payloads
    pub broadcast_mode: BroadcastMode,

    /// Can requests skip signing?
    pub allow_unsigned: bool,

    /// Supported transaction types, keyed by request `type` tag
    tx_types: Map<String, TxType>,
}

/// Message registered for a transaction type
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxType {
    /// Message kind to construct
    pub kind: Kind,

    /// Registered Amino type name
    pub type_name: TypeName,

    /// Layout of the message in sign bytes
    pub layout: SignLayout,
}

impl Chain {
    /// Create a `Chain` from the given configuration
    pub fn from_config(config: &ChainConfig) -> Result<Chain, Error> {
        let mut tx_types = Map::new();

        for tx in &config.tx {
            let tx_type = TxType {
                kind: tx.kind,
                type_name: tx.type_name.clone(),
                layout: tx.layout,
            };

            if tx_types.insert(tx.tx_type.clone(), tx_type).is_some() {
                fail!(
                    ConfigError,
                    "[{}] duplicate transaction type: {}",
                    config.name,
                    tx.tx_type
                );
            }
        }

        let format = Format {
            acc_prefix: config.acc_prefix.clone(),
            val_prefix: config.val_prefix.clone(),
            dialect: config.dialect,
            pub_key: config.pub_key.clone(),
            pad_empty_fee: config.pad_empty_fee,
            dec_precision: config.dec_precision,
        };

        Ok(Self {
            name: config.name.clone(),
            format,
            broadcast_mode: config.broadcast_mode,
            allow_unsigned: config.allow_unsigned,
            tx_types,
        })
    }

    /// Look up the message registered for a transaction type
    pub fn tx_type(&self, tx_type: &str) -> Option<&TxType> {
        self.tx_types.get(tx_type)
    }

    /// Iterate over the supported transaction type tags
    pub fn tx_types(&self) -> impl Iterator<Item = &str> {
        self.tx_types.keys().map(String::as_str)
    }
}
