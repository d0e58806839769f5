//! Coins (i.e. `sdk.Coin`)

use crate::{
    decimal::Decimal,
    error::{Error, ErrorKind},
};
use anomaly::fail;
use serde::{de, Deserialize};
use serde_json::Value;

/// Amount of a particular denomination.
///
/// Amounts are integers (`sdk.Int`) without leading zeros.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Coin {
    /// Denomination
    pub denom: String,

    /// Amount
    pub amount: Decimal,
}

impl Coin {
    /// Create a new coin
    pub fn new(denom: impl Into<String>, amount: impl Into<Decimal>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }

    /// Parse a `{denom, amount}` JSON object, coercing the amount to a
    /// normalized integer
    pub fn from_json_value(value: &Value) -> Result<Self, Error> {
        let obj = match value.as_object() {
            Some(obj) => obj,
            None => fail!(ErrorKind::MalformedInput, "expected coin, got: {}", value),
        };

        let denom = match obj.get("denom") {
            Some(Value::String(denom)) => denom.clone(),
            None | Some(Value::Null) => String::new(),
            Some(other) => fail!(ErrorKind::MalformedInput, "invalid denom: {}", other),
        };

        let amount = match obj.get("amount") {
            Some(amount) => Decimal::from_json_value(amount)?.with_precision(0)?,
            None => fail!(ErrorKind::MalformedInput, "coin is missing `amount`"),
        };

        Ok(Self { denom, amount })
    }

    /// Parse a (possibly absent) JSON list of coins
    pub fn list_from_json_value(value: Option<&Value>) -> Result<Vec<Self>, Error> {
        match value {
            None | Some(Value::Null) => Ok(vec![]),
            Some(Value::Array(coins)) => coins.iter().map(Coin::from_json_value).collect(),
            Some(other) => fail!(ErrorKind::MalformedInput, "expected coin list, got: {}", other),
        }
    }

    /// Is this coin missing a denomination or amount?
    pub fn is_empty(&self) -> bool {
        self.denom.is_empty() || self.amount.is_zero()
    }

    /// JSON representation used in sign bytes and submissions
    pub fn to_json_value(&self) -> Value {
        serde_json::json!({
            "amount": self.amount,
            "denom": self.denom,
        })
    }
}

impl<'de> Deserialize<'de> for Coin {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Coin::from_json_value(&value).map_err(de::Error::custom)
    }
}

/// Serialize a list of coins as a JSON array
pub(crate) fn coins_to_json_value(coins: &[Coin]) -> Value {
    Value::Array(coins.iter().map(Coin::to_json_value).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerces_numeric_amounts() {
        let coin = Coin::from_json_value(&json!({"denom": "ukava", "amount": 10})).unwrap();
        assert_eq!(coin, Coin::new("ukava", 10u64));
        assert_eq!(coin.to_json_value(), json!({"amount": "10", "denom": "ukava"}));
    }

    #[test]
    fn normalizes_integer_amounts() {
        let coin = Coin::from_json_value(&json!({"denom": "uatom", "amount": "007"})).unwrap();
        assert_eq!(coin.amount.as_str(), "7");

        let value: Value = serde_json::from_str(r#"{"denom": "uatom", "amount": 1000.0}"#).unwrap();
        assert_eq!(Coin::from_json_value(&value).unwrap().amount.as_str(), "1000");

        let coin: Coin = serde_json::from_str(r#"{"denom": "uatom", "amount": "0050"}"#).unwrap();
        assert_eq!(coin, Coin::new("uatom", 50u64));
    }

    #[test]
    fn fractional_amounts_rejected() {
        for amount in [json!("007.50"), json!("0.5")] {
            let err = Coin::from_json_value(&json!({"denom": "uatom", "amount": amount}))
                .unwrap_err();
            assert_eq!(*err.kind(), ErrorKind::MalformedInput);
        }

        assert!(serde_json::from_str::<Coin>(r#"{"denom": "uatom", "amount": "1.5"}"#).is_err());
    }

    #[test]
    fn empty_coin_list() {
        assert!(Coin::list_from_json_value(None).unwrap().is_empty());
        assert!(Coin::list_from_json_value(Some(&json!(null))).unwrap().is_empty());
        assert!(Coin::list_from_json_value(Some(&json!("10uatom"))).is_err());
    }

    #[test]
    fn missing_amount() {
        let err = Coin::from_json_value(&json!({"denom": "uluna"})).unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::MalformedInput);
    }
}
