//! Transaction signatures (i.e. `StdSignature`)

use crate::format::{encode_base64, PubKeyEncoding};
use serde_json::{json, Value};

/// Signature over a transaction's sign bytes together with the signing
/// public key. Both are opaque byte strings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StdSignature {
    /// Public key which can verify this signature
    pub pub_key: Vec<u8>,

    /// Serialized signature
    pub signature: Vec<u8>,
}

impl StdSignature {
    /// Create a new signature
    pub fn new(pub_key: impl Into<Vec<u8>>, signature: impl Into<Vec<u8>>) -> Self {
        Self {
            pub_key: pub_key.into(),
            signature: signature.into(),
        }
    }

    /// Submission form: `{"pub_key": <chain encoding>, "signature": <base64>}`
    pub fn to_json_value(&self, encoding: &PubKeyEncoding) -> Value {
        json!({
            "pub_key": encoding.encode(&self.pub_key),
            "signature": encode_base64(&self.signature),
        })
    }
}
