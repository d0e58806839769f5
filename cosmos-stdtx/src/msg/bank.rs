//! Bank module messages

use super::{require, summary, DisplaySummary, SdkMsg};
use crate::{
    address::Address,
    coin::{coins_to_json_value, Coin},
    error::Error,
    format::{Dialect, Format},
};
use serde_json::{json, Value};

/// Transfer coins from one account to another
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MsgSend {
    /// Sending account
    pub from_address: Address,

    /// Receiving account
    pub to_address: Address,

    /// Coins to send
    pub amount: Vec<Coin>,
}

impl SdkMsg for MsgSend {
    fn validate(&self) -> Result<(), Error> {
        require(self.from_address.is_empty(), "from_address")?;
        require(self.to_address.is_empty(), "to_address")?;
        require(
            self.amount.is_empty() || self.amount.iter().any(Coin::is_empty),
            "amount",
        )
    }

    fn fields(&self, format: &Format) -> Value {
        let from = self.from_address.to_bech32(&format.acc_prefix);
        let to = self.to_address.to_bech32(&format.acc_prefix);
        let coins = coins_to_json_value(&self.amount);

        match format.dialect {
            Dialect::Cosmos => json!({
                "from_address": from,
                "to_address": to,
                "amount": coins,
            }),
            // IRISnet transfers use the multi-send input/output layout
            Dialect::Iris => json!({
                "inputs": [{ "address": from, "coins": coins }],
                "outputs": [{ "address": to, "coins": coins }],
            }),
        }
    }

    fn display_summary(&self, format: &Format) -> DisplaySummary {
        summary(
            "i18n_transfer",
            [
                ("i18n_from", json!(self.from_address.to_bech32(&format.acc_prefix))),
                ("i18n_to", json!(self.to_address.to_bech32(&format.acc_prefix))),
                ("i18n_amount", coins_to_json_value(&self.amount)),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ErrorKind,
        msg::tests::{addr, cosmos, iris},
    };

    fn example() -> MsgSend {
        MsgSend {
            from_address: addr(1),
            to_address: addr(2),
            amount: vec![Coin::new("ukava", 10u64)],
        }
    }

    #[test]
    fn validation() {
        assert!(example().validate().is_ok());

        let msg = MsgSend {
            to_address: Address::default(),
            ..example()
        };
        let err = msg.validate().unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("to_address is empty"));

        let msg = MsgSend {
            amount: vec![],
            ..example()
        };
        assert!(msg.validate().unwrap_err().to_string().contains("amount is empty"));
    }

    #[test]
    fn iris_layout() {
        let fields = example().fields(&iris());
        assert_eq!(fields["inputs"][0]["address"], json!(addr(1).to_bech32("iaa")));
        assert_eq!(fields["outputs"][0]["coins"][0]["amount"], json!("10"));
    }

    #[test]
    fn display() {
        let summary = example().display_summary(&cosmos());
        assert_eq!(summary["i18n_tx_type"], json!("i18n_transfer"));
        assert_eq!(summary["i18n_to"], json!(addr(2).to_bech32("cosmos")));
    }
}
