//! Chain configuration

use serde::Deserialize;
use stdtx::{
    format::DEFAULT_DEC_PRECISION, msg::Kind, BroadcastMode, Dialect, PubKeyEncoding, SignLayout,
    TypeName,
};

/// Chain family configuration (i.e. `[[chain]]` entries)
#[derive(Clone, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    /// Registry key for this chain family (e.g. `kava`). This is not the
    /// chain ID, which changes with every network upgrade and is supplied
    /// per request.
    pub name: String,

    /// Bech32 prefix for account addresses
    pub acc_prefix: String,

    /// Bech32 prefix for validator operator addresses
    pub val_prefix: String,

    /// Message field naming convention (default: `cosmos`)
    #[serde(default)]
    pub dialect: Dialect,

    /// Public key encoding used in submitted signatures (default: raw)
    #[serde(default)]
    pub pub_key: PubKeyEncoding,

    /// Sign an empty fee as a single zero-amount coin (default: false)
    #[serde(default)]
    pub pad_empty_fee: bool,

    /// Fractional digits share amounts are signed with (default: 18)
    #[serde(default = "default_dec_precision")]
    pub dec_precision: usize,

    /// Permit requests which skip signing (default: false)
    #[serde(default)]
    pub allow_unsigned: bool,

    /// Broadcast mode of the submission payload (default: `sync`)
    #[serde(default)]
    pub broadcast_mode: BroadcastMode,

    /// Supported transaction types
    #[serde(default)]
    pub tx: Vec<TxTypeConfig>,
}

fn default_dec_precision() -> usize {
    DEFAULT_DEC_PRECISION
}

/// Transaction type configuration (i.e. `[[chain.tx]]` entries)
#[derive(Clone, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct TxTypeConfig {
    /// Request `type` tag this entry handles (e.g. `transfer`)
    pub tx_type: String,

    /// Message kind constructed for this transaction type
    pub kind: Kind,

    /// Registered Amino type name of the message
    pub type_name: TypeName,

    /// How the message appears in sign bytes (default: `wrapped`)
    #[serde(default)]
    pub layout: SignLayout,
}
