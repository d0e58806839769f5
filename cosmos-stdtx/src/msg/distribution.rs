//! Distribution module messages

use super::{field_name, require, summary, DisplaySummary, SdkMsg};
use crate::{address::Address, error::Error, format::Format};
use serde_json::{json, Map, Value};

/// Change the address staking rewards are paid to
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MsgSetWithdrawAddress {
    /// Delegator account
    pub delegator: Address,

    /// Account rewards are withdrawn to
    pub withdraw: Address,
}

impl SdkMsg for MsgSetWithdrawAddress {
    fn validate(&self) -> Result<(), Error> {
        require(self.delegator.is_empty(), "delegator_addr")?;
        require(self.withdraw.is_empty(), "withdraw_addr")
    }

    fn fields(&self, format: &Format) -> Value {
        let mut fields = Map::new();
        fields.insert(
            field_name(format, "delegator_address", "delegator_addr").to_owned(),
            json!(self.delegator.to_bech32(&format.acc_prefix)),
        );
        fields.insert(
            field_name(format, "withdraw_address", "withdraw_addr").to_owned(),
            json!(self.withdraw.to_bech32(&format.acc_prefix)),
        );
        Value::Object(fields)
    }

    fn display_summary(&self, format: &Format) -> DisplaySummary {
        summary(
            "i18n_set_withdraw_address",
            [
                ("i18n_delegator_addr", json!(self.delegator.to_bech32(&format.acc_prefix))),
                ("i18n_withdraw_addr", json!(self.withdraw.to_bech32(&format.acc_prefix))),
            ],
        )
    }
}

/// Withdraw delegation rewards from a single validator
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MsgWithdrawDelegatorReward {
    /// Delegator account
    pub delegator: Address,

    /// Validator operator
    pub validator: Address,
}

impl SdkMsg for MsgWithdrawDelegatorReward {
    fn validate(&self) -> Result<(), Error> {
        require(self.delegator.is_empty(), "delegator_addr")?;
        require(self.validator.is_empty(), "validator_addr")
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
        Value::Object(fields)
    }

    fn display_summary(&self, format: &Format) -> DisplaySummary {
        summary(
            "i18n_withdraw_delegation_reward",
            [
                ("i18n_delegator_addr", json!(self.delegator.to_bech32(&format.acc_prefix))),
                ("i18n_validator_addr", json!(self.validator.to_bech32(&format.val_prefix))),
            ],
        )
    }
}

/// Withdraw delegation rewards from every validator
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MsgWithdrawDelegatorRewardsAll {
    /// Delegator account
    pub delegator: Address,
}

impl SdkMsg for MsgWithdrawDelegatorRewardsAll {
    fn validate(&self) -> Result<(), Error> {
        require(self.delegator.is_empty(), "delegator_addr")
    }

    fn fields(&self, format: &Format) -> Value {
        let mut fields = Map::new();
        fields.insert(
            field_name(format, "delegator_address", "delegator_addr").to_owned(),
            json!(self.delegator.to_bech32(&format.acc_prefix)),
        );
        Value::Object(fields)
    }

    fn display_summary(&self, format: &Format) -> DisplaySummary {
        summary(
            "i18n_withdraw_delegation_rewards_all",
            [("i18n_delegator_addr", json!(self.delegator.to_bech32(&format.acc_prefix)))],
        )
    }
}

/// Withdraw the commission accrued by a validator
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MsgWithdrawValidatorCommission {
    /// Validator operator (rendered with the validator prefix)
    pub validator: Address,
}

impl SdkMsg for MsgWithdrawValidatorCommission {
    fn validate(&self) -> Result<(), Error> {
        require(self.validator.is_empty(), "validator_addr")
    }

    fn fields(&self, format: &Format) -> Value {
        validator_only_fields(&self.validator, format)
    }

    fn display_summary(&self, format: &Format) -> DisplaySummary {
        summary(
            "i18n_withdraw_validator_commission",
            [("i18n_validator_addr", json!(self.validator.to_bech32(&format.val_prefix)))],
        )
    }
}

/// Withdraw a validator's commission together with its self-delegation rewards
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MsgWithdrawValidatorRewardsAll {
    /// Validator operator (rendered with the validator prefix)
    pub validator: Address,
}

impl SdkMsg for MsgWithdrawValidatorRewardsAll {
    fn validate(&self) -> Result<(), Error> {
        require(self.validator.is_empty(), "validator_addr")
    }

    fn fields(&self, format: &Format) -> Value {
        validator_only_fields(&self.validator, format)
    }

    fn display_summary(&self, format: &Format) -> DisplaySummary {
        summary(
            "i18n_withdraw_validator_rewards_all",
            [("i18n_validator_addr", json!(self.validator.to_bech32(&format.val_prefix)))],
        )
    }
}

fn validator_only_fields(validator: &Address, format: &Format) -> Value {
    let mut fields = Map::new();
    fields.insert(
        field_name(format, "validator_address", "validator_addr").to_owned(),
        json!(validator.to_bech32(&format.val_prefix)),
    );
    Value::Object(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ErrorKind,
        msg::tests::{addr, cosmos, iris},
    };

    #[test]
    fn set_withdraw_address() {
        let msg = MsgSetWithdrawAddress {
            delegator: addr(1),
            withdraw: addr(9),
        };

        assert!(msg.validate().is_ok());
        assert_eq!(
            msg.fields(&cosmos()),
            json!({
                "delegator_address": addr(1).to_bech32("cosmos"),
                "withdraw_address": addr(9).to_bech32("cosmos"),
            })
        );
        assert_eq!(
            msg.fields(&iris())["withdraw_addr"],
            json!(addr(9).to_bech32("iaa"))
        );
    }

    #[test]
    fn validator_commission_uses_validator_prefix() {
        let msg = MsgWithdrawValidatorCommission { validator: addr(4) };
        assert_eq!(
            msg.fields(&cosmos()),
            json!({ "validator_address": addr(4).to_bech32("cosmosvaloper") })
        );
        assert_eq!(
            msg.display_summary(&cosmos())["i18n_tx_type"],
            json!("i18n_withdraw_validator_commission")
        );
    }

    #[test]
    fn empty_delegator() {
        let msg = MsgWithdrawDelegatorReward {
            delegator: Address::default(),
            validator: addr(2),
        };

        let err = msg.validate().unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("delegator_addr is empty"));
    }

    #[test]
    fn rewards_all() {
        let msg = MsgWithdrawDelegatorRewardsAll { delegator: addr(1) };
        assert_eq!(
            msg.fields(&iris()),
            json!({ "delegator_addr": addr(1).to_bech32("iaa") })
        );

        let msg = MsgWithdrawValidatorRewardsAll { validator: addr(5) };
        assert_eq!(
            msg.fields(&iris()),
            json!({ "validator_addr": addr(5).to_bech32("iva") })
        );
    }
}
