//! Chain-specific wire conventions

use crate::type_name::TypeName;
use serde::Deserialize;
use serde_json::{json, Value};
use subtle_encoding::base64;

/// Length of the Amino prefix (4-byte type prefix plus 1-byte length) which
/// precedes Amino-encoded public keys
pub const AMINO_PUBKEY_PREFIX_LEN: usize = 5;

/// Length of a compressed secp256k1 public key
pub const COMPRESSED_PUBKEY_LEN: usize = 33;

/// Fractional digits of a Cosmos SDK `sdk.Dec`
pub const DEFAULT_DEC_PRECISION: usize = 18;

/// Options for how transactions for a particular chain are represented
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Format {
    /// Bech32 prefix for account addresses
    pub acc_prefix: String,

    /// Bech32 prefix for validator operator addresses
    pub val_prefix: String,

    /// Message field naming convention
    pub dialect: Dialect,

    /// Public key encoding used in submitted signatures
    pub pub_key: PubKeyEncoding,

    /// Sign an empty fee as a single zero-amount coin with an empty denom
    pub pad_empty_fee: bool,

    /// Fractional digits of share amounts (`sdk.Dec` precision)
    pub dec_precision: usize,
}

impl Format {
    /// Create a new format using the Cosmos SDK naming conventions and raw
    /// public keys
    pub fn new(acc_prefix: impl Into<String>, val_prefix: impl Into<String>) -> Self {
        Self {
            acc_prefix: acc_prefix.into(),
            val_prefix: val_prefix.into(),
            dialect: Dialect::Cosmos,
            pub_key: PubKeyEncoding::Raw,
            pad_empty_fee: false,
            dec_precision: DEFAULT_DEC_PRECISION,
        }
    }
}

/// Message field naming convention.
///
/// Field names are part of the signed bytes, so a message signed with the
/// wrong dialect will fail signature verification.
#[derive(Copy, Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Cosmos SDK naming (`delegator_address`, `validator_address`, ...)
    #[default]
    Cosmos,

    /// IRISnet naming (`delegator_addr`, `validator_addr`, `delegation`, ...)
    Iris,
}

/// How public keys are encoded in a submitted `StdSignature`
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PubKeyEncoding {
    /// Base64 of the raw public key bytes
    #[default]
    Raw,

    /// Type-wrapped Amino JSON: `{"type": <type_name>, "value": <base64>}`
    Amino {
        /// Registered public key type (e.g. `tendermint/PubKeySecp256k1`)
        type_name: TypeName,
    },
}

impl PubKeyEncoding {
    /// Encode the given public key bytes.
    ///
    /// For Amino, keys longer than a compressed secp256k1 key carry the Amino
    /// prefix, which is stripped before re-wrapping.
    pub fn encode(&self, pub_key: &[u8]) -> Value {
        match self {
            PubKeyEncoding::Raw => Value::String(encode_base64(pub_key)),
            PubKeyEncoding::Amino { type_name } => {
                let key_bytes = if pub_key.len() > COMPRESSED_PUBKEY_LEN {
                    &pub_key[AMINO_PUBKEY_PREFIX_LEN..]
                } else {
                    pub_key
                };

                json!({
                    "type": type_name,
                    "value": encode_base64(key_bytes),
                })
            }
        }
    }
}

/// Base64-encode bytes as a `String`
pub(crate) fn encode_base64(bytes: &[u8]) -> String {
    String::from_utf8(base64::encode(bytes)).expect("base64 should always be UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPRESSED_KEY: [u8; 33] = [
        0x02, 0xa1, 0x63, 0x3c, 0xaf, 0xcc, 0x01, 0xeb, 0xfb, 0x6d, 0x78, 0xe3, 0x9f, 0x68, 0x7a,
        0x1f, 0x09, 0x95, 0xc6, 0x2f, 0xc9, 0x5f, 0x51, 0xea, 0xd1, 0x0a, 0x02, 0xee, 0x0b, 0xe5,
        0x51, 0xb5, 0xdc,
    ];

    fn amino() -> PubKeyEncoding {
        PubKeyEncoding::Amino {
            type_name: "tendermint/PubKeySecp256k1".parse().unwrap(),
        }
    }

    #[test]
    fn raw_encoding() {
        assert_eq!(
            PubKeyEncoding::Raw.encode(&COMPRESSED_KEY),
            Value::String(encode_base64(&COMPRESSED_KEY))
        );
    }

    #[test]
    fn amino_encoding_of_bare_key() {
        assert_eq!(
            amino().encode(&COMPRESSED_KEY),
            json!({
                "type": "tendermint/PubKeySecp256k1",
                "value": encode_base64(&COMPRESSED_KEY),
            })
        );
    }

    #[test]
    fn amino_encoding_trims_prefix() {
        let mut prefixed = vec![0xeb, 0x5a, 0xe9, 0x87, 0x21];
        prefixed.extend_from_slice(&COMPRESSED_KEY);
        assert_eq!(amino().encode(&prefixed), amino().encode(&COMPRESSED_KEY));
    }

    #[test]
    fn deserialize_encodings() {
        #[derive(Deserialize)]
        struct Wrapper {
            pub_key: PubKeyEncoding,
            dialect: Dialect,
        }

        let w: Wrapper = toml::from_str(
            "dialect = \"iris\"\npub_key = { type = \"amino\", type_name = \"tendermint/PubKeySecp256k1\" }",
        )
        .unwrap();

        assert_eq!(w.pub_key, amino());
        assert_eq!(w.dialect, Dialect::Iris);
    }
}
