//! Governance module messages

use super::{require, summary, DisplaySummary, SdkMsg};
use crate::{
    address::Address,
    coin::{coins_to_json_value, Coin},
    error::{Error, ErrorKind},
    format::Format,
};
use anomaly::fail;
use serde_json::{json, Value};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Deposit coins on a governance proposal
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MsgDeposit {
    /// Proposal ID, kept as a string so large IDs don't lose precision
    pub proposal_id: String,

    /// Depositing account
    pub depositor: Address,

    /// Coins to deposit
    pub amount: Vec<Coin>,
}

impl SdkMsg for MsgDeposit {
    fn validate(&self) -> Result<(), Error> {
        require(
            self.amount.is_empty() || self.amount.iter().any(Coin::is_empty),
            "amount",
        )?;
        require(self.proposal_id.is_empty(), "proposal_id")?;
        require(self.depositor.is_empty(), "depositor")
    }

    fn fields(&self, format: &Format) -> Value {
        json!({
            "proposal_id": self.proposal_id,
            "depositor": self.depositor.to_bech32(&format.acc_prefix),
            "amount": coins_to_json_value(&self.amount),
        })
    }

    fn display_summary(&self, format: &Format) -> DisplaySummary {
        summary(
            "i18n_deposit",
            [
                ("i18n_proposal_id", json!(self.proposal_id)),
                ("i18n_depositor", json!(self.depositor.to_bech32(&format.acc_prefix))),
                ("i18n_amount", coins_to_json_value(&self.amount)),
            ],
        )
    }
}

/// Vote on a governance proposal
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MsgVote {
    /// Proposal ID, kept as a string so large IDs don't lose precision
    pub proposal_id: String,

    /// Voting account
    pub voter: Address,

    /// Vote option
    pub option: VoteOption,
}

impl SdkMsg for MsgVote {
    fn validate(&self) -> Result<(), Error> {
        require(self.option == VoteOption::Empty, "option")?;
        require(self.proposal_id.is_empty(), "proposal_id")?;
        require(self.voter.is_empty(), "voter")
    }

    fn fields(&self, format: &Format) -> Value {
        json!({
            "proposal_id": self.proposal_id,
            "voter": self.voter.to_bech32(&format.acc_prefix),
            "option": self.option.to_string(),
        })
    }

    fn display_summary(&self, format: &Format) -> DisplaySummary {
        summary(
            "i18n_vote",
            [
                ("i18n_proposal_id", json!(self.proposal_id)),
                ("i18n_voter", json!(self.voter.to_bech32(&format.acc_prefix))),
                ("option", json!(self.option.to_string())),
            ],
        )
    }
}

/// Governance vote options, indexed 0-4 on the wire
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum VoteOption {
    /// No option selected
    #[default]
    Empty,

    /// Yes
    Yes,

    /// Abstain
    Abstain,

    /// No
    No,

    /// No, with veto
    NoWithVeto,
}

impl VoteOption {
    /// Get the vote option for the given index
    pub fn from_index(index: u64) -> Result<Self, Error> {
        Ok(match index {
            0 => VoteOption::Empty,
            1 => VoteOption::Yes,
            2 => VoteOption::Abstain,
            3 => VoteOption::No,
            4 => VoteOption::NoWithVeto,
            other => fail!(ErrorKind::MalformedInput, "invalid vote option: {}", other),
        })
    }

    /// Coerce a JSON index or option name into a [`VoteOption`]
    pub fn from_json_value(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Null => Ok(VoteOption::Empty),
            Value::Number(n) => match n.as_u64() {
                Some(index) => Self::from_index(index),
                None => fail!(ErrorKind::MalformedInput, "invalid vote option: {}", n),
            },
            Value::String(s) => s.parse(),
            other => fail!(ErrorKind::MalformedInput, "invalid vote option: {}", other),
        }
    }
}

impl Display for VoteOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VoteOption::Empty => "Empty",
            VoteOption::Yes => "Yes",
            VoteOption::Abstain => "Abstain",
            VoteOption::No => "No",
            VoteOption::NoWithVeto => "NoWithVeto",
        })
    }
}

impl FromStr for VoteOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Ok(match s {
            "Empty" => VoteOption::Empty,
            "Yes" => VoteOption::Yes,
            "Abstain" => VoteOption::Abstain,
            "No" => VoteOption::No,
            "NoWithVeto" => VoteOption::NoWithVeto,
            other => match other.parse::<u64>() {
                Ok(index) => Self::from_index(index)?,
                Err(_) => fail!(ErrorKind::MalformedInput, "invalid vote option: {}", other),
            },
        })
    }
}
