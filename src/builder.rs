//! Transaction builder: request → message → sign doc → signed envelope

use crate::{
    chain::{Chain, Registry},
    error::{Error, ErrorKind::*},
    factory,
    prelude::*,
    request::{SigningMode, TxRequest},
    signer::{self, Signer},
};
use stdtx::{SignDoc, StdSignature, StdTx, Submission};

/// Builds (and signs) transactions for a particular chain family
#[derive(Copy, Clone, Debug)]
pub struct Builder<'a> {
    /// Chain transactions are built for
    chain: &'a Chain,
}

impl<'a> Builder<'a> {
    /// Create a builder for the named chain family
    pub fn new(registry: &'a Registry, chain_name: &str) -> Result<Self, Error> {
        let chain = registry
            .get_chain(chain_name)
            .ok_or_else(|| format_err!(ConfigError, "unknown chain: {}", chain_name))?;

        Ok(Self::for_chain(chain))
    }

    /// Create a builder for the given chain
    pub fn for_chain(chain: &'a Chain) -> Self {
        Self { chain }
    }

    /// Borrow the chain this builder targets
    pub fn chain(&self) -> &'a Chain {
        self.chain
    }

    /// Build an unsigned transaction from the given request
    pub fn build_tx(&self, req: &TxRequest) -> Result<StdTx, Error> {
        let msg = factory::build(self.chain, &req.tx_type, req)?;

        let sign_doc = SignDoc {
            chain_id: req.chain_id.clone(),
            account_number: req.account_number,
            sequence: req.sequence,
            fee: req.std_fee(),
            msgs: vec![msg],
            memo: req.memo.clone(),
        };

        let tx = StdTx::new(sign_doc, self.chain.format.clone())?;

        debug!(
            "[{}:{}] built {} transaction (account={}, sequence={})",
            self.chain.name, req.chain_id, req.tx_type, req.account_number, req.sequence
        );

        Ok(tx)
    }

    /// Sign the given sign bytes with a hex-encoded private key
    pub fn sign(
        &self,
        sign_bytes: &[u8],
        private_key: &str,
        signer: &dyn Signer,
    ) -> Result<StdSignature, Error> {
        let private_key = signer::decode_private_key(private_key)?;
        let signature = signer.sign(&private_key, sign_bytes)?;
        let public_key = signer.public_key(&private_key)?;

        Ok(StdSignature::new(public_key, signature))
    }

    /// Build a transaction and, unless the request opts out of signing,
    /// attach a signature made with the given private key
    pub fn build_and_sign_tx(
        &self,
        req: &TxRequest,
        private_key: &str,
        signer: &dyn Signer,
    ) -> Result<StdTx, Error> {
        if req.mode == SigningMode::Unsigned && !self.chain.allow_unsigned {
            fail!(
                MalformedInput,
                "[{}] unsigned transactions are not supported",
                self.chain.name
            );
        }

        let mut tx = self.build_tx(req)?;

        if req.mode == SigningMode::Unsigned {
            debug!("[{}:{}] skipping signature", self.chain.name, req.chain_id);
            return Ok(tx);
        }

        if private_key.is_empty() {
            fail!(
                MissingPrivateKey,
                "[{}] a private key is required to sign {} transactions",
                self.chain.name,
                req.tx_type
            );
        }

        let signature = self.sign(&tx.sign_bytes()?, private_key, signer)?;
        tx.attach_signature(signature)?;

        info!(
            "[{}:{}] signed {} transaction (account={}, sequence={})",
            self.chain.name, req.chain_id, req.tx_type, req.account_number, req.sequence
        );

        Ok(tx)
    }

    /// Finalize a transaction into a submission payload using the chain's
    /// broadcast mode
    pub fn finalize(&self, tx: StdTx) -> Submission {
        tx.finalize(self.chain.broadcast_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::RegistryConfig, signer::Secp256k1Signer};
    use serde_json::json;
    use stdtx::{Address, TxState};

    const PRIVATE_KEY: &str = "e9ee5d7fe2aa1e6c16dd1fc68cdd0e1d5cf0ae32b1bad2f9a0c5a8fc27e5c0a1";

    const CONFIG: &str = r#"
        [[chain]]
        name = "iris"
        acc_prefix = "iaa"
        val_prefix = "iva"
        dialect = "iris"
        allow_unsigned = true

        [[chain.tx]]
        tx_type = "withdraw_delegation_rewards_all"
        kind = "withdraw_delegator_rewards_all"
        type_name = "irishub/distr/MsgWithdrawDelegationRewardsAll"

        [[chain]]
        name = "terra"
        acc_prefix = "terra"
        val_prefix = "terravaloper"
        broadcast_mode = "block"

        [[chain.tx]]
        tx_type = "withdraw_delegation_rewards_all"
        kind = "withdraw_delegator_rewards_all"
        type_name = "distribution/MsgWithdrawDelegationRewardsAll"
    "#;

    fn registry() -> Registry {
        Registry::from_config(&CONFIG.parse::<RegistryConfig>().unwrap()).unwrap()
    }

    fn request(prefix: &str, mode: &str) -> TxRequest {
        TxRequest::from_json_value(json!({
            "type": "withdraw_delegation_rewards_all",
            "from": Address::new([3u8; 20]).to_bech32(prefix),
            "fee": [{"denom": "uluna", "amount": "100"}],
            "gas": 50000,
            "chain_id": "test-1",
            "account_number": 9,
            "sequence": 4,
            "mode": mode
        }))
        .unwrap()
    }

    #[test]
    fn unknown_chain() {
        let err = Builder::new(&registry(), "kava").unwrap_err();
        assert_eq!(*err.kind(), ConfigError);
    }

    #[test]
    fn unsigned_mode() {
        let registry = registry();

        let iris = Builder::new(&registry, "iris").unwrap();
        let tx = iris
            .build_and_sign_tx(&request("iaa", "unsigned"), "", &Secp256k1Signer)
            .unwrap();
        assert_eq!(tx.state(), TxState::Built);

        let terra = Builder::new(&registry, "terra").unwrap();
        let err = terra
            .build_and_sign_tx(&request("terra", "unsigned"), PRIVATE_KEY, &Secp256k1Signer)
            .unwrap_err();
        assert_eq!(*err.kind(), MalformedInput);
    }

    #[test]
    fn signed_submission() {
        let registry = registry();
        let builder = Builder::new(&registry, "terra").unwrap();

        let tx = builder
            .build_and_sign_tx(&request("terra", "normal"), PRIVATE_KEY, &Secp256k1Signer)
            .unwrap();
        assert_eq!(tx.state(), TxState::Signed);

        let submission = builder.finalize(tx);
        assert_eq!(submission.mode, stdtx::BroadcastMode::Block);
        assert_eq!(submission.tx.signatures.len(), 1);
    }

    #[test]
    fn invalid_private_key() {
        let registry = registry();
        let builder = Builder::new(&registry, "terra").unwrap();

        let err = builder
            .build_and_sign_tx(&request("terra", "normal"), "nothex", &Secp256k1Signer)
            .unwrap_err();
        assert_eq!(*err.kind(), InvalidKey);
    }
}
