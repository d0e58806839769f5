//! Sign docs: the canonical document a `StdTx` signature is computed over

use crate::{
    canonical,
    error::{Error, ErrorKind},
    fee::StdFee,
    format::Format,
    msg::Msg,
};
use anomaly::fail;
use serde_json::{json, Value};

/// Inputs to the canonical sign bytes of a transaction.
///
/// The sign bytes are always recomputed from these fields rather than cached.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignDoc {
    /// Chain ID
    pub chain_id: String,

    /// Account number of the signer
    pub account_number: u64,

    /// Sequence number of the signer
    pub sequence: u64,

    /// Fee
    pub fee: StdFee,

    /// Messages
    pub msgs: Vec<Msg>,

    /// Memo
    pub memo: String,
}

impl SignDoc {
    /// Check the transaction metadata, then every message in order,
    /// stopping at the first failure
    pub fn validate(&self) -> Result<(), Error> {
        if self.chain_id.is_empty() {
            fail!(ErrorKind::Validation, "chain_id is empty");
        }

        if self.msgs.is_empty() {
            fail!(ErrorKind::Validation, "msgs is empty");
        }

        for msg in &self.msgs {
            msg.validate()?;
        }

        Ok(())
    }

    /// Unsorted field map of the sign doc. Numeric values are stringified.
    pub fn to_json_value(&self, format: &Format) -> Value {
        let msgs = self
            .msgs
            .iter()
            .map(|msg| msg.sign_fields(format))
            .collect::<Vec<_>>();

        json!({
            "account_number": self.account_number.to_string(),
            "chain_id": self.chain_id,
            "fee": self.fee.sign_fields(format.pad_empty_fee),
            "memo": self.memo,
            "msgs": msgs,
            "sequence": self.sequence.to_string(),
        })
    }

    /// Validate and serialize the sign doc into canonical sign bytes
    pub fn to_bytes(&self, format: &Format) -> Result<Vec<u8>, Error> {
        self.validate()?;
        Ok(canonical::to_bytes(&self.to_json_value(format)))
    }
}

/// Assemble the canonical sign bytes for the given transaction contents
pub fn assemble(
    chain_id: &str,
    account_number: u64,
    sequence: u64,
    fee: &StdFee,
    msgs: &[Msg],
    memo: &str,
    format: &Format,
) -> Result<Vec<u8>, Error> {
    SignDoc {
        chain_id: chain_id.to_owned(),
        account_number,
        sequence,
        fee: fee.clone(),
        msgs: msgs.to_vec(),
        memo: memo.to_owned(),
    }
    .to_bytes(format)
}
