//! Generic transaction requests

use crate::error::Error;
use serde::{de, Deserialize};
use serde_json::Value;
use std::str::FromStr;
use stdtx::{Coin, StdFee};

/// Chain-independent request to build (and sign) a transaction.
///
/// The type-specific `msg` payload is interpreted by the message factory
/// according to the chain's registered transaction types.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TxRequest {
    /// Transaction type tag (e.g. `transfer`, `delegate`)
    #[serde(rename = "type")]
    pub tx_type: String,

    /// Sender account (Bech32)
    #[serde(default)]
    pub from: String,

    /// Type-specific message payload
    #[serde(default)]
    pub msg: Value,

    /// Fee coins
    #[serde(default, alias = "fees")]
    pub fee: Vec<Coin>,

    /// Gas limit
    #[serde(deserialize_with = "deserialize_u64")]
    pub gas: u64,

    /// Memo
    #[serde(default)]
    pub memo: String,

    /// Chain ID
    #[serde(default)]
    pub chain_id: String,

    /// Account number of the sender
    #[serde(deserialize_with = "deserialize_u64")]
    pub account_number: u64,

    /// Sequence number of the sender
    #[serde(deserialize_with = "deserialize_u64")]
    pub sequence: u64,

    /// Signing mode
    #[serde(default)]
    pub mode: SigningMode,
}

impl TxRequest {
    /// Parse a request from a JSON value
    pub fn from_json_value(value: Value) -> Result<Self, Error> {
        Ok(serde_json::from_value(value)?)
    }

    /// Fee of the requested transaction
    pub fn std_fee(&self) -> StdFee {
        StdFee::new(self.fee.clone(), self.gas)
    }
}

impl FromStr for TxRequest {
    type Err = Error;

    fn from_str(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Whether a request must be signed
#[derive(Copy, Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SigningMode {
    /// A private key is required and the transaction is signed
    #[default]
    Normal,

    /// The transaction is built without a signature
    Unsigned,
}

/// Parse an unsigned integer given either as a JSON number or a string
fn deserialize_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: de::Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| de::Error::custom(format!("expected unsigned integer, got {}", n))),
        Value::String(s) => s.parse().map_err(de::Error::custom),
        other => Err(de::Error::custom(format!(
            "expected unsigned integer, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind::MalformedInput;
    use serde_json::json;

    #[test]
    fn parse_request() {
        let req = r#"{
            "type": "transfer",
            "from": "kava1abc",
            "msg": {"to": "kava1def", "coins": [{"denom": "ukava", "amount": 10}]},
            "fee": [{"denom": "ukava", "amount": "1000"}],
            "gas": "100000",
            "chain_id": "kava-3",
            "account_number": 5,
            "sequence": "2"
        }"#
        .parse::<TxRequest>()
        .unwrap();

        assert_eq!(req.tx_type, "transfer");
        assert_eq!(req.gas, 100_000);
        assert_eq!(req.account_number, 5);
        assert_eq!(req.sequence, 2);
        assert_eq!(req.memo, "");
        assert_eq!(req.mode, SigningMode::Normal);
        assert_eq!(req.fee, vec![Coin::new("ukava", 1000u64)]);
        assert_eq!(req.msg["to"], json!("kava1def"));
    }

    #[test]
    fn fees_alias_and_mode() {
        let req = TxRequest::from_json_value(json!({
            "type": "vote",
            "fees": [{"denom": "iris-atto", "amount": "0500"}],
            "gas": 200000,
            "account_number": 1,
            "sequence": 0,
            "mode": "unsigned"
        }))
        .unwrap();

        assert_eq!(req.fee[0].amount.as_str(), "500");
        assert_eq!(req.mode, SigningMode::Unsigned);
        assert_eq!(req.std_fee().gas, 200_000);
    }

    #[test]
    fn malformed_requests() {
        for bad in [
            json!({"type": "transfer", "gas": -1, "account_number": 0, "sequence": 0}),
            json!({"type": "transfer", "gas": 1, "account_number": [], "sequence": 0}),
            json!({"type": "transfer", "gas": 1, "account_number": 0, "sequence": 0, "mode": "x"}),
            json!({"gas": 1, "account_number": 0, "sequence": 0}),
            json!({"type": "transfer", "gas": 1, "account_number": 0, "sequence": 0,
                   "fee": [{"denom": "uatom", "amount": "2.5"}]}),
        ] {
            let err = TxRequest::from_json_value(bad).unwrap_err();
            assert_eq!(*err.kind(), MalformedInput);
        }
    }
}
