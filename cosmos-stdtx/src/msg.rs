//! Transaction message types (i.e. `sdk.Msg`)
//!
//! Every message is a [`Msg`]: its registered [`TypeName`], the
//! [`SignLayout`] the chain expects in sign bytes, and a [`Body`] holding the
//! variant-specific fields. Bodies implement [`SdkMsg`], which provides
//! validation, the chain-dialect field map and a display summary.

mod bank;
mod distribution;
mod gov;
mod staking;

pub use self::{
    bank::MsgSend,
    distribution::{
        MsgSetWithdrawAddress, MsgWithdrawDelegatorReward, MsgWithdrawDelegatorRewardsAll,
        MsgWithdrawValidatorCommission, MsgWithdrawValidatorRewardsAll,
    },
    gov::{MsgDeposit, MsgVote, VoteOption},
    staking::{MsgBeginRedelegate, MsgDelegate, MsgUndelegate},
};

use crate::{
    canonical,
    error::{Error, ErrorKind},
    format::{Dialect, Format},
    type_name::TypeName,
};
use anomaly::fail;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Stable display keys mapped to the values shown on confirmation screens
pub type DisplaySummary = BTreeMap<String, Value>;

/// Capabilities shared by every message body
pub trait SdkMsg {
    /// Check that all required fields are present. Never mutates the message.
    fn validate(&self) -> Result<(), Error>;

    /// Message fields with addresses rendered as Bech32, named according to
    /// the chain's [`Dialect`]
    fn fields(&self, format: &Format) -> Value;

    /// Summary of the message for user-facing confirmation
    fn display_summary(&self, format: &Format) -> DisplaySummary;
}

/// How a message appears inside the sign doc
#[derive(Copy, Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SignLayout {
    /// `{"type": <type name>, "value": <fields>}`
    #[default]
    Wrapped,

    /// Sorted fields with no type envelope
    Flat,
}

/// Kinds of transaction messages
#[derive(Copy, Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Token transfer
    Send,

    /// Delegate tokens to a validator
    Delegate,

    /// Begin unbonding delegated shares
    Undelegate,

    /// Move delegated shares between validators
    Redelegate,

    /// Set the address staking rewards are withdrawn to
    SetWithdrawAddress,

    /// Withdraw rewards from a single validator
    WithdrawDelegatorReward,

    /// Withdraw rewards from all validators
    WithdrawDelegatorRewardsAll,

    /// Withdraw a validator's commission
    WithdrawValidatorCommission,

    /// Withdraw a validator's commission and self-delegation rewards
    WithdrawValidatorRewardsAll,

    /// Deposit on a governance proposal
    Deposit,

    /// Vote on a governance proposal
    Vote,
}

/// Variant-specific message contents
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Body {
    /// Token transfer
    Send(MsgSend),

    /// Delegation
    Delegate(MsgDelegate),

    /// Unbonding
    Undelegate(MsgUndelegate),

    /// Redelegation
    Redelegate(MsgBeginRedelegate),

    /// Withdraw address update
    SetWithdrawAddress(MsgSetWithdrawAddress),

    /// Single-validator reward withdrawal
    WithdrawDelegatorReward(MsgWithdrawDelegatorReward),

    /// All-validator reward withdrawal
    WithdrawDelegatorRewardsAll(MsgWithdrawDelegatorRewardsAll),

    /// Validator commission withdrawal
    WithdrawValidatorCommission(MsgWithdrawValidatorCommission),

    /// Validator commission and rewards withdrawal
    WithdrawValidatorRewardsAll(MsgWithdrawValidatorRewardsAll),

    /// Governance deposit
    Deposit(MsgDeposit),

    /// Governance vote
    Vote(MsgVote),
}

impl Body {
    /// Get the [`Kind`] of this message body
    pub fn kind(&self) -> Kind {
        match self {
            Body::Send(_) => Kind::Send,
            Body::Delegate(_) => Kind::Delegate,
            Body::Undelegate(_) => Kind::Undelegate,
            Body::Redelegate(_) => Kind::Redelegate,
            Body::SetWithdrawAddress(_) => Kind::SetWithdrawAddress,
            Body::WithdrawDelegatorReward(_) => Kind::WithdrawDelegatorReward,
            Body::WithdrawDelegatorRewardsAll(_) => Kind::WithdrawDelegatorRewardsAll,
            Body::WithdrawValidatorCommission(_) => Kind::WithdrawValidatorCommission,
            Body::WithdrawValidatorRewardsAll(_) => Kind::WithdrawValidatorRewardsAll,
            Body::Deposit(_) => Kind::Deposit,
            Body::Vote(_) => Kind::Vote,
        }
    }

    fn as_sdk_msg(&self) -> &dyn SdkMsg {
        match self {
            Body::Send(msg) => msg,
            Body::Delegate(msg) => msg,
            Body::Undelegate(msg) => msg,
            Body::Redelegate(msg) => msg,
            Body::SetWithdrawAddress(msg) => msg,
            Body::WithdrawDelegatorReward(msg) => msg,
            Body::WithdrawDelegatorRewardsAll(msg) => msg,
            Body::WithdrawValidatorCommission(msg) => msg,
            Body::WithdrawValidatorRewardsAll(msg) => msg,
            Body::Deposit(msg) => msg,
            Body::Vote(msg) => msg,
        }
    }
}

/// Transaction message (i.e. [`sdk.Msg`]).
/// These serve as the payload for [`StdTx`] transactions.
///
/// [`StdTx`]: https://godoc.org/github.com/cosmos/cosmos-sdk/x/auth/types#StdTx
/// [`sdk.Msg`]: https://godoc.org/github.com/cosmos/cosmos-sdk/types#Msg
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Msg {
    /// Name of the message type
    type_name: TypeName,

    /// Layout of this message within sign bytes
    layout: SignLayout,

    /// Message contents
    body: Body,
}

impl Msg {
    /// Create a new message
    pub fn new(type_name: TypeName, layout: SignLayout, body: impl Into<Body>) -> Self {
        Self {
            type_name,
            layout,
            body: body.into(),
        }
    }

    /// Get the [`TypeName`] for this message
    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    /// Get the [`SignLayout`] for this message
    pub fn layout(&self) -> SignLayout {
        self.layout
    }

    /// Borrow the message body
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Check that all required fields are present
    pub fn validate(&self) -> Result<(), Error> {
        self.body.as_sdk_msg().validate()
    }

    /// Value of this message as it appears in the sign doc
    pub fn sign_fields(&self, format: &Format) -> Value {
        let fields = self.body.as_sdk_msg().fields(format);

        match self.layout {
            SignLayout::Wrapped => canonical::type_wrap(&self.type_name, fields),
            SignLayout::Flat => canonical::sort_value(fields),
        }
    }

    /// Value of this message as it appears in a submitted transaction.
    ///
    /// Submissions always carry the type envelope so the node can decode the
    /// message, regardless of the sign layout.
    pub fn submission_fields(&self, format: &Format) -> Value {
        canonical::type_wrap(&self.type_name, self.body.as_sdk_msg().fields(format))
    }

    /// Summary of this message for confirmation screens
    pub fn display_summary(&self, format: &Format) -> DisplaySummary {
        self.body.as_sdk_msg().display_summary(format)
    }
}

macro_rules! impl_from_body {
    ($($variant:ident($msg:ty)),+) => {
        $(
            impl From<$msg> for Body {
                fn from(msg: $msg) -> Body {
                    Body::$variant(msg)
                }
            }
        )+
    };
}

impl_from_body!(
    Send(MsgSend),
    Delegate(MsgDelegate),
    Undelegate(MsgUndelegate),
    Redelegate(MsgBeginRedelegate),
    SetWithdrawAddress(MsgSetWithdrawAddress),
    WithdrawDelegatorReward(MsgWithdrawDelegatorReward),
    WithdrawDelegatorRewardsAll(MsgWithdrawDelegatorRewardsAll),
    WithdrawValidatorCommission(MsgWithdrawValidatorCommission),
    WithdrawValidatorRewardsAll(MsgWithdrawValidatorRewardsAll),
    Deposit(MsgDeposit),
    Vote(MsgVote)
);

/// Pick the field name for the chain's dialect
pub(crate) fn field_name(format: &Format, cosmos: &'static str, iris: &'static str) -> &'static str {
    match format.dialect {
        Dialect::Cosmos => cosmos,
        Dialect::Iris => iris,
    }
}

/// Fail with a validation error if a required field is empty
pub(crate) fn require(is_empty: bool, field: &str) -> Result<(), Error> {
    if is_empty {
        fail!(ErrorKind::Validation, "{} is empty", field);
    }

    Ok(())
}

/// Build a [`DisplaySummary`] from the transaction type key and entries
pub(crate) fn summary<'a>(
    tx_type: &str,
    entries: impl IntoIterator<Item = (&'a str, Value)>,
) -> DisplaySummary {
    let mut summary = DisplaySummary::new();
    summary.insert("i18n_tx_type".to_owned(), Value::String(tx_type.to_owned()));

    for (key, value) in entries {
        summary.insert(key.to_owned(), value);
    }

    summary
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{address::Address, coin::Coin};
    use serde_json::json;

    pub(crate) fn cosmos() -> Format {
        Format::new("cosmos", "cosmosvaloper")
    }

    pub(crate) fn iris() -> Format {
        Format {
            dialect: Dialect::Iris,
            dec_precision: 10,
            ..Format::new("iaa", "iva")
        }
    }

    pub(crate) fn addr(byte: u8) -> Address {
        Address::new([byte; 20])
    }

    fn example_send() -> Msg {
        Msg::new(
            "cosmos-sdk/MsgSend".parse().unwrap(),
            SignLayout::Wrapped,
            MsgSend {
                from_address: addr(1),
                to_address: addr(2),
                amount: vec![Coin::new("uatom", 10u64)],
            },
        )
    }

    #[test]
    fn wrapped_sign_fields() {
        let msg = example_send();
        let format = cosmos();

        assert_eq!(
            msg.sign_fields(&format),
            json!({
                "type": "cosmos-sdk/MsgSend",
                "value": {
                    "amount": [{"amount": "10", "denom": "uatom"}],
                    "from_address": addr(1).to_bech32("cosmos"),
                    "to_address": addr(2).to_bech32("cosmos"),
                }
            })
        );
        assert_eq!(msg.submission_fields(&format), msg.sign_fields(&format));
        assert_eq!(msg.body().kind(), Kind::Send);
    }

    #[test]
    fn flat_sign_fields() {
        let msg = Msg::new(
            "irishub/stake/BeginUnbonding".parse().unwrap(),
            SignLayout::Flat,
            MsgUndelegate {
                delegator: addr(1),
                validator: addr(2),
                shares: "1.5".parse().unwrap(),
            },
        );
        let format = iris();

        let expected = json!({
            "delegator_addr": addr(1).to_bech32("iaa"),
            "shares_amount": "1.5",
            "validator_addr": addr(2).to_bech32("iva"),
        });

        assert_eq!(msg.sign_fields(&format), expected);
        assert_eq!(msg.submission_fields(&format)["value"], expected);
        assert_eq!(
            msg.submission_fields(&format)["type"],
            "irishub/stake/BeginUnbonding"
        );
    }

    #[test]
    fn validate_does_not_mutate() {
        let msg = example_send();
        let before = msg.clone();
        let format = cosmos();
        let sign_fields = msg.sign_fields(&format);

        assert!(msg.validate().is_ok());
        assert!(msg.validate().is_ok());
        assert_eq!(msg, before);
        assert_eq!(msg.sign_fields(&format), sign_fields);
    }
}
