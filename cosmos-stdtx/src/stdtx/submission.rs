//! Submission payloads for signed transactions

use super::StdTx;
use crate::error::{Error, ErrorKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Transaction submission accepted by a node's REST `/txs` endpoint
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Submission {
    /// Transaction contents
    pub tx: SubmissionTx,

    /// Broadcast mode
    pub mode: BroadcastMode,
}

/// Transaction contents inside a [`Submission`]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SubmissionTx {
    /// Type-wrapped messages
    pub msg: Vec<Value>,

    /// Fee with stringified gas
    pub fee: Value,

    /// Zero or one signature
    pub signatures: Vec<Value>,

    /// Memo
    pub memo: String,
}

/// Submission payload together with the transaction hash
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SignedPayload {
    /// Submission payload
    pub submission: Submission,

    /// Upper-case hex transaction hash
    pub hash: String,
}

/// How long the node waits before answering a broadcast
#[derive(Copy, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastMode {
    /// Return after `CheckTx`
    #[default]
    Sync,

    /// Return immediately
    Async,

    /// Return after the transaction is committed
    Block,
}

impl Display for BroadcastMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BroadcastMode::Sync => "sync",
            BroadcastMode::Async => "async",
            BroadcastMode::Block => "block",
        })
    }
}

impl FromStr for BroadcastMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "sync" => Ok(BroadcastMode::Sync),
            "async" => Ok(BroadcastMode::Async),
            "block" => Ok(BroadcastMode::Block),
            other => Err(ErrorKind::MalformedInput
                .context(format!("invalid broadcast mode: {}", other))
                .into()),
        }
    }
}

/// Binary transaction encoder used to compute transaction hashes.
///
/// Nodes hash the binary (Amino) encoding of a transaction, which is
/// supplied by the caller.
pub trait TxEncoder {
    /// Encode a signed transaction
    fn encode(&self, tx: &StdTx) -> Result<Vec<u8>, Error>;
}

impl<F> TxEncoder for F
where
    F: Fn(&StdTx) -> Result<Vec<u8>, Error>,
{
    fn encode(&self, tx: &StdTx) -> Result<Vec<u8>, Error> {
        self(tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcast_modes() {
        for mode in [BroadcastMode::Sync, BroadcastMode::Async, BroadcastMode::Block] {
            assert_eq!(mode.to_string().parse::<BroadcastMode>().unwrap(), mode);
            assert_eq!(
                serde_json::to_value(mode).unwrap(),
                Value::String(mode.to_string())
            );
        }

        assert!("commit".parse::<BroadcastMode>().is_err());
    }
}
