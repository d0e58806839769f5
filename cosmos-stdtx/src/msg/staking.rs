//! Staking module messages

use super::{field_name, require, summary, DisplaySummary, SdkMsg};
use crate::{
    address::Address,
    coin::Coin,
    decimal::Decimal,
    error::{Error, ErrorKind},
    format::Format,
};
use anomaly::fail;
use serde_json::{json, Map, Value};

/// Delegate tokens to a validator
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MsgDelegate {
    /// Delegator account
    pub delegator: Address,

    /// Validator operator
    pub validator: Address,

    /// Amount to delegate
    pub amount: Coin,
}

impl SdkMsg for MsgDelegate {
    fn validate(&self) -> Result<(), Error> {
        require(self.delegator.is_empty(), "delegator_addr")?;
        require(self.validator.is_empty(), "validator_addr")?;
        require(self.amount.is_empty(), "delegation")
    }

    fn fields(&self, format: &Format) -> Value {
        let mut fields = Map::new();
        fields.insert(
            field_name(format, "delegator_address", "delegator_addr").to_owned(),
            json!(self.delegator.to_bech32(&format.acc_prefix)),
        );
        fields.insert(
            field_name(format, "validator_address", "validator_addr").to_owned(),
            json!(self.validator.to_bech32(&format.val_prefix)),
        );
        fields.insert(
            field_name(format, "amount", "delegation").to_owned(),
            self.amount.to_json_value(),
        );
        Value::Object(fields)
    }

    fn display_summary(&self, format: &Format) -> DisplaySummary {
        summary(
            "i18n_delegate",
            [
                ("i18n_delegator_addr", json!(self.delegator.to_bech32(&format.acc_prefix))),
                ("i18n_validator_addr", json!(self.validator.to_bech32(&format.val_prefix))),
                ("i18n_amount", self.amount.to_json_value()),
            ],
        )
    }
}

/// Begin unbonding shares from a validator.
///
/// Shares may be fractional, so they are held as a [`Decimal`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MsgUndelegate {
    /// Delegator account
    pub delegator: Address,

    /// Validator operator
    pub validator: Address,

    /// Shares to unbond
    pub shares: Decimal,
}

impl SdkMsg for MsgUndelegate {
    fn validate(&self) -> Result<(), Error> {
        require(self.delegator.is_empty(), "delegator_addr")?;
        require(self.validator.is_empty(), "validator_addr")?;
        require(self.shares.is_zero(), "shares_amount")
    }

    fn fields(&self, format: &Format) -> Value {
        let mut fields = Map::new();
        fields.insert(
            field_name(format, "delegator_address", "delegator_addr").to_owned(),
            json!(self.delegator.to_bech32(&format.acc_prefix)),
        );
        fields.insert(
            field_name(format, "validator_address", "validator_addr").to_owned(),
            json!(self.validator.to_bech32(&format.val_prefix)),
        );
        fields.insert("shares_amount".to_owned(), json!(self.shares));
        Value::Object(fields)
    }

    fn display_summary(&self, format: &Format) -> DisplaySummary {
        summary(
            "i18n_begin_unbonding",
            [
                ("i18n_delegator_addr", json!(self.delegator.to_bech32(&format.acc_prefix))),
                ("i18n_validator_addr", json!(self.validator.to_bech32(&format.val_prefix))),
                ("i18n_shares_amount", json!(self.shares)),
            ],
        )
    }
}

/// Move delegated shares from one validator to another
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MsgBeginRedelegate {
    /// Delegator account
    pub delegator: Address,

    /// Validator the shares are moved from
    pub validator_src: Address,

    /// Validator the shares are moved to
    pub validator_dst: Address,

    /// Shares to redelegate
    pub shares: Decimal,
}

impl SdkMsg for MsgBeginRedelegate {
    fn validate(&self) -> Result<(), Error> {
        require(self.delegator.is_empty(), "delegator_addr")?;
        require(self.validator_src.is_empty(), "validator_src_addr")?;
        require(self.validator_dst.is_empty(), "validator_dst_addr")?;
        require(self.shares.is_zero(), "shares_amount")?;

        if self.validator_src == self.validator_dst {
            fail!(
                ErrorKind::Validation,
                "validator_dst_addr must differ from validator_src_addr"
            );
        }

        Ok(())
    }

    fn fields(&self, format: &Format) -> Value {
        let mut fields = Map::new();
        fields.insert(
            field_name(format, "delegator_address", "delegator_addr").to_owned(),
            json!(self.delegator.to_bech32(&format.acc_prefix)),
        );
        fields.insert(
            field_name(format, "validator_src_address", "validator_src_addr").to_owned(),
            json!(self.validator_src.to_bech32(&format.val_prefix)),
        );
        fields.insert(
            field_name(format, "validator_dst_address", "validator_dst_addr").to_owned(),
            json!(self.validator_dst.to_bech32(&format.val_prefix)),
        );
        fields.insert(
            field_name(format, "shares_amount", "shares").to_owned(),
            json!(self.shares),
        );
        Value::Object(fields)
    }

    fn display_summary(&self, format: &Format) -> DisplaySummary {
        summary(
            "i18n_redelegate",
            [
                ("i18n_delegator_addr", json!(self.delegator.to_bech32(&format.acc_prefix))),
                (
                    "i18n_validator_src_addr",
                    json!(self.validator_src.to_bech32(&format.val_prefix)),
                ),
                (
                    "i18n_validator_dst_addr",
                    json!(self.validator_dst.to_bech32(&format.val_prefix)),
                ),
                ("i18n_shares_amount", json!(self.shares)),
            ],
        )
    }
}
