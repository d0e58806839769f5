//! Transaction fees (i.e. `StdFee`)

use crate::coin::{coins_to_json_value, Coin};
use serde_json::{json, Value};

/// Transaction fee: coins paid plus the gas limit.
///
/// Rendered only through [`StdFee::sign_fields`] and
/// [`StdFee::submission_fields`], which emit `gas` as a decimal string.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StdFee {
    /// Fee to be paid
    pub amount: Vec<Coin>,

    /// Gas requested for transaction
    pub gas: u64,
}

impl StdFee {
    /// Create a new fee
    pub fn new(amount: impl Into<Vec<Coin>>, gas: u64) -> Self {
        Self {
            amount: amount.into(),
            gas,
        }
    }

    /// Fields included in the sign doc.
    ///
    /// With `pad_empty_fee` an empty amount list is signed as a single
    /// zero-valued coin with an empty denomination.
    pub fn sign_fields(&self, pad_empty_fee: bool) -> Value {
        let amount = if self.amount.is_empty() && pad_empty_fee {
            coins_to_json_value(&[Coin::new("", 0u64)])
        } else {
            coins_to_json_value(&self.amount)
        };

        json!({
            "amount": amount,
            "gas": self.gas.to_string(),
        })
    }

    /// Fields included in a transaction submission
    pub fn submission_fields(&self) -> Value {
        json!({
            "amount": coins_to_json_value(&self.amount),
            "gas": self.gas.to_string(),
        })
    }
}
