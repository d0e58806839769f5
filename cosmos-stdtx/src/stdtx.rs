//! `StdTx` transaction envelope.
//!
//! A [`StdTx`] starts out [`TxState::Built`], may have exactly one signature
//! attached ([`TxState::Signed`]), and is finalized by consuming it into a
//! [`Submission`]. There is no way back to an earlier state.

mod submission;

pub use self::submission::{BroadcastMode, SignedPayload, Submission, SubmissionTx, TxEncoder};

use crate::{
    error::{Error, ErrorKind},
    fee::StdFee,
    format::Format,
    msg::{DisplaySummary, Msg},
    sign_doc::SignDoc,
    signature::StdSignature,
};
use anomaly::fail;
use serde_json::Value;
use sha2::{Digest, Sha256};
use subtle_encoding::hex;

/// Lifecycle state of a [`StdTx`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TxState {
    /// Messages and fee assembled; no signature yet
    Built,

    /// Signature attached
    Signed,
}

/// Transaction envelope carrying messages, fee, memo and at most one
/// signature.
///
/// <https://godoc.org/github.com/cosmos/cosmos-sdk/x/auth/types#StdTx>
#[derive(Clone, Debug)]
pub struct StdTx {
    /// Everything covered by the signature
    sign_doc: SignDoc,

    /// Chain wire conventions
    format: Format,

    /// Signature slot, written at most once
    signature: Option<StdSignature>,
}

impl StdTx {
    /// Create a new unsigned transaction. The sign doc is validated up front,
    /// so no envelope exists for invalid contents.
    pub fn new(sign_doc: SignDoc, format: Format) -> Result<Self, Error> {
        sign_doc.validate()?;

        Ok(Self {
            sign_doc,
            format,
            signature: None,
        })
    }

    /// Borrow the sign doc
    pub fn sign_doc(&self) -> &SignDoc {
        &self.sign_doc
    }

    /// Borrow the messages
    pub fn msgs(&self) -> &[Msg] {
        &self.sign_doc.msgs
    }

    /// Borrow the fee
    pub fn fee(&self) -> &StdFee {
        &self.sign_doc.fee
    }

    /// Borrow the memo
    pub fn memo(&self) -> &str {
        &self.sign_doc.memo
    }

    /// Borrow the chain format
    pub fn format(&self) -> &Format {
        &self.format
    }

    /// Borrow the attached signature, if any
    pub fn signature(&self) -> Option<&StdSignature> {
        self.signature.as_ref()
    }

    /// Current lifecycle state
    pub fn state(&self) -> TxState {
        match self.signature {
            Some(_) => TxState::Signed,
            None => TxState::Built,
        }
    }

    /// Canonical bytes to be signed
    pub fn sign_bytes(&self) -> Result<Vec<u8>, Error> {
        self.sign_doc.to_bytes(&self.format)
    }

    /// Attach the signature. Fails if one is already attached.
    pub fn attach_signature(&mut self, signature: StdSignature) -> Result<(), Error> {
        if self.signature.is_some() {
            fail!(
                ErrorKind::AlreadySigned,
                "transaction already carries a signature"
            );
        }

        self.signature = Some(signature);
        Ok(())
    }

    /// Submission payload for the node's REST `/txs` endpoint
    pub fn to_submission(&self, mode: BroadcastMode) -> Submission {
        let msg = self
            .msgs()
            .iter()
            .map(|msg| msg.submission_fields(&self.format))
            .collect();

        let signatures = self
            .signature
            .iter()
            .map(|sig| sig.to_json_value(&self.format.pub_key))
            .collect();

        Submission {
            tx: SubmissionTx {
                msg,
                fee: self.fee().submission_fields(),
                signatures,
                memo: self.memo().to_owned(),
            },
            mode,
        }
    }

    /// Finalize this transaction into its submission payload
    pub fn finalize(self, mode: BroadcastMode) -> Submission {
        self.to_submission(mode)
    }

    /// Compute the transaction hash (upper-case hex SHA-256 of the encoded
    /// transaction) alongside the submission payload. Requires a signature.
    pub fn compute_hash(
        &self,
        mode: BroadcastMode,
        encoder: &dyn TxEncoder,
    ) -> Result<SignedPayload, Error> {
        if self.signature.is_none() {
            fail!(ErrorKind::Signature, "can't hash an unsigned transaction");
        }

        let encoded = encoder.encode(self)?;
        let hash = String::from_utf8(hex::encode_upper(Sha256::digest(&encoded)))
            .expect("hex should always be UTF-8");

        Ok(SignedPayload {
            submission: self.to_submission(mode),
            hash,
        })
    }

    /// Display summary of the first message, plus the fee
    pub fn display_content(&self) -> DisplaySummary {
        let mut content = self
            .msgs()
            .first()
            .map(|msg| msg.display_summary(&self.format))
            .unwrap_or_default();

        content.insert(
            "i18n_fee".to_owned(),
            Value::Array(self.fee().amount.iter().map(|c| c.to_json_value()).collect()),
        );

        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        coin::Coin,
        format::PubKeyEncoding,
        msg::{
            tests::{addr, cosmos},
            MsgSend, SignLayout,
        },
    };
    use serde_json::json;

    fn example_tx(format: Format) -> StdTx {
        let msg = Msg::new(
            "cosmos-sdk/MsgSend".parse().unwrap(),
            SignLayout::Wrapped,
            MsgSend {
                from_address: addr(1),
                to_address: addr(2),
                amount: vec![Coin::new("uatom", 10u64)],
            },
        );

        let sign_doc = SignDoc {
            chain_id: "cosmoshub-3".to_owned(),
            account_number: 7,
            sequence: 3,
            fee: StdFee::new(vec![Coin::new("uatom", 500u64)], 200_000),
            msgs: vec![msg],
            memo: "memo".to_owned(),
        };

        StdTx::new(sign_doc, format).unwrap()
    }

    fn example_sig() -> StdSignature {
        StdSignature::new(vec![2u8; 33], vec![7u8; 64])
    }

    #[test]
    fn signature_is_write_once() {
        let mut tx = example_tx(cosmos());
        assert_eq!(tx.state(), TxState::Built);

        tx.attach_signature(example_sig()).unwrap();
        assert_eq!(tx.state(), TxState::Signed);

        let err = tx
            .attach_signature(StdSignature::new(vec![3u8; 33], vec![8u8; 64]))
            .unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::AlreadySigned);
        assert_eq!(tx.signature(), Some(&example_sig()));
    }

    #[test]
    fn submission_shape() {
        let format = Format {
            pub_key: PubKeyEncoding::Amino {
                type_name: "tendermint/PubKeySecp256k1".parse().unwrap(),
            },
            ..cosmos()
        };

        let mut tx = example_tx(format);
        tx.attach_signature(example_sig()).unwrap();

        let submission = serde_json::to_value(tx.finalize(BroadcastMode::Sync)).unwrap();
        assert_eq!(submission["mode"], json!("sync"));
        assert_eq!(submission["tx"]["memo"], json!("memo"));
        assert_eq!(
            submission["tx"]["fee"],
            json!({"amount": [{"amount": "500", "denom": "uatom"}], "gas": "200000"})
        );
        assert_eq!(
            submission["tx"]["msg"][0]["type"],
            json!("cosmos-sdk/MsgSend")
        );
        assert_eq!(
            submission["tx"]["signatures"][0]["pub_key"]["type"],
            json!("tendermint/PubKeySecp256k1")
        );
    }

    #[test]
    fn unsigned_submission_has_no_signatures() {
        let submission = example_tx(cosmos()).to_submission(BroadcastMode::Block);
        assert!(submission.tx.signatures.is_empty());
        assert_eq!(submission.mode, BroadcastMode::Block);
    }

    #[test]
    fn hashing() {
        let encoder = |tx: &StdTx| -> Result<Vec<u8>, Error> { tx.sign_bytes() };

        let mut tx = example_tx(cosmos());
        let err = tx.compute_hash(BroadcastMode::Sync, &encoder).unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::Signature);

        tx.attach_signature(example_sig()).unwrap();
        let payload = tx.compute_hash(BroadcastMode::Sync, &encoder).unwrap();
        let expected = Sha256::digest(tx.sign_bytes().unwrap());

        assert_eq!(payload.hash.len(), 64);
        assert_eq!(payload.hash, payload.hash.to_ascii_uppercase());
        assert_eq!(
            hex::decode(payload.hash.to_ascii_lowercase()).unwrap(),
            expected.to_vec()
        );
    }

    #[test]
    fn display_content() {
        let content = example_tx(cosmos()).display_content();
        assert_eq!(content["i18n_tx_type"], json!("i18n_transfer"));
        assert_eq!(content["i18n_fee"], json!([{"amount": "500", "denom": "uatom"}]));
    }
}
