//! Transaction signers
//!
//! Signing itself is an external capability: the builder only hands sign
//! bytes and a private key to a [`Signer`]. [`Secp256k1Signer`] is a software
//! implementation backed by `k256`.
//!
//! Account addresses are derived from compressed public keys the way the
//! Cosmos SDK does it: `RIPEMD160(SHA256(public_key))`, Bech32-encoded with
//! the chain's account prefix.

use crate::{
    error::{Error, ErrorKind::*},
    prelude::*,
};
use k256::ecdsa::{self, signature::Signer as _};
use ripemd::{Digest, Ripemd160};
use sha2::Sha256;
use stdtx::{format::COMPRESSED_PUBKEY_LEN, Address};
use subtle_encoding::hex;
use zeroize::Zeroizing;

/// Size of a secp256k1 private key
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Signs canonical sign bytes with a private key
pub trait Signer {
    /// Sign the given message, returning the serialized signature
    fn sign(&self, private_key: &[u8], msg: &[u8]) -> Result<Vec<u8>, Error>;

    /// Public key corresponding to the given private key
    fn public_key(&self, private_key: &[u8]) -> Result<Vec<u8>, Error>;
}

/// Software secp256k1 ECDSA signer.
///
/// Messages are hashed with SHA-256 and signatures are serialized as 64-byte
/// `r || s` with a normalized (low) `s`. Public keys are SEC1-compressed.
#[derive(Copy, Clone, Debug, Default)]
pub struct Secp256k1Signer;

impl Secp256k1Signer {
    fn signing_key(private_key: &[u8]) -> Result<ecdsa::SigningKey, Error> {
        ecdsa::SigningKey::try_from(private_key)
            .map_err(|e| format_err!(InvalidKey, "invalid secp256k1 key: {}", e).into())
    }
}

impl Signer for Secp256k1Signer {
    fn sign(&self, private_key: &[u8], msg: &[u8]) -> Result<Vec<u8>, Error> {
        let signature: ecdsa::Signature = Self::signing_key(private_key)?
            .try_sign(msg)
            .map_err(|e| format_err!(CryptoError, "{}", e))?;

        Ok(signature.to_bytes().to_vec())
    }

    fn public_key(&self, private_key: &[u8]) -> Result<Vec<u8>, Error> {
        let signing_key = Self::signing_key(private_key)?;
        Ok(signing_key
            .verifying_key()
            .to_encoded_point(true)
            .as_bytes()
            .to_vec())
    }
}

/// Decode a hex-encoded private key (optionally `0x`-prefixed)
pub fn decode_private_key(private_key_hex: &str) -> Result<Zeroizing<Vec<u8>>, Error> {
    let encoded = private_key_hex.trim();
    let encoded = encoded
        .strip_prefix("0x")
        .or_else(|| encoded.strip_prefix("0X"))
        .unwrap_or(encoded);

    let key_bytes = Zeroizing::new(
        hex::decode(encoded.to_ascii_lowercase())
            .map_err(|e| format_err!(InvalidKey, "can't decode private key: {}", e))?,
    );

    if key_bytes.len() != PRIVATE_KEY_SIZE {
        fail!(
            InvalidKey,
            "expected {}-byte private key, got {} bytes",
            PRIVATE_KEY_SIZE,
            key_bytes.len()
        );
    }

    Ok(key_bytes)
}

/// Public key and account address of an imported private key
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyPair {
    /// SEC1-compressed public key
    pub public_key: Vec<u8>,

    /// Bech32 account address
    pub address: String,
}

/// Import a hex-encoded private key, deriving its public key and the account
/// address for the given Bech32 prefix
pub fn import(private_key_hex: &str, prefix: &str) -> Result<KeyPair, Error> {
    let private_key = decode_private_key(private_key_hex)?;
    let public_key = Secp256k1Signer.public_key(&private_key)?;
    let address = address_for(&public_key, prefix)?;

    Ok(KeyPair {
        public_key,
        address,
    })
}

/// Account address of a compressed secp256k1 public key
pub fn address_for(public_key: &[u8], prefix: &str) -> Result<String, Error> {
    if public_key.len() != COMPRESSED_PUBKEY_LEN {
        fail!(
            InvalidKey,
            "expected {}-byte compressed public key, got {} bytes",
            COMPRESSED_PUBKEY_LEN,
            public_key.len()
        );
    }

    let account_id = Ripemd160::digest(Sha256::digest(public_key));
    Ok(Address::new(account_id.to_vec()).to_bech32(prefix))
}

/// Is the given string a non-empty Bech32 address with the expected prefix?
pub fn is_valid_address(address: &str, prefix: &str) -> bool {
    Address::from_bech32_with_prefix(address, prefix)
        .map(|addr| !addr.is_empty())
        .unwrap_or(false)
}

/// Is the given string a usable hex-encoded secp256k1 private key?
pub fn is_valid_private_key(private_key_hex: &str) -> bool {
    decode_private_key(private_key_hex)
        .and_then(|key| Secp256k1Signer::signing_key(&key))
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::ecdsa::signature::Verifier;

    const PRIVATE_KEY: &str = "e9ee5d7fe2aa1e6c16dd1fc68cdd0e1d5cf0ae32b1bad2f9a0c5a8fc27e5c0a1";

    #[test]
    fn sign_and_verify() {
        let key = decode_private_key(PRIVATE_KEY).unwrap();
        let signer = Secp256k1Signer;

        let signature = signer.sign(&key, b"sign bytes").unwrap();
        let public_key = signer.public_key(&key).unwrap();
        assert_eq!(signature.len(), 64);
        assert_eq!(public_key.len(), 33);

        let verifying_key = ecdsa::VerifyingKey::from_sec1_bytes(&public_key).unwrap();
        let signature = ecdsa::Signature::from_slice(&signature).unwrap();
        assert!(signature.normalize_s().is_none());
        assert!(verifying_key.verify(b"sign bytes", &signature).is_ok());
        assert!(verifying_key.verify(b"other bytes", &signature).is_err());
    }

    #[test]
    fn import_derives_account_address() {
        let key_pair = import(
            "a96e62ed3955e65be32703f12d87b6b5cf26039ecfa948dc5107a495418e5330",
            "cosmos",
        )
        .unwrap();

        assert_eq!(
            key_pair.public_key,
            hex::decode("02950e1cdfcb133d6024109fd489f734eeb4502418e538c28481f22bce276f248c")
                .unwrap()
        );
        assert_eq!(
            key_pair.address,
            "cosmos10s4mg25tu6termrk8egltfyme4q7sg3her239u"
        );
        assert_eq!(
            Address::from_bech32(&key_pair.address).unwrap().to_hex(),
            "7c2bb42a8be69791ec763e51f5a49bcd41e82237"
        );
        assert_eq!(
            address_for(&key_pair.public_key, "kava").unwrap(),
            Address::from_bech32(&key_pair.address).unwrap().to_bech32("kava")
        );
    }

    #[test]
    fn address_requires_compressed_key() {
        let err = address_for(&[4u8; 65], "cosmos").unwrap_err();
        assert_eq!(*err.kind(), InvalidKey);
        assert!(import("", "cosmos").is_err());
    }

    #[test]
    fn address_validation() {
        let address = "cosmos10s4mg25tu6termrk8egltfyme4q7sg3her239u";
        assert!(is_valid_address(address, "cosmos"));
        assert!(!is_valid_address(address, "terra"));
        assert!(!is_valid_address("cosmos10s4mg25tu6termrk8egltfyme4q7sg3her239v", "cosmos"));
        assert!(!is_valid_address("", "cosmos"));
        assert!(!is_valid_address("not an address", "cosmos"));
    }

    #[test]
    fn private_key_parsing() {
        assert!(is_valid_private_key(PRIVATE_KEY));
        assert!(is_valid_private_key(&format!("0x{}", PRIVATE_KEY.to_uppercase())));
        assert!(!is_valid_private_key(""));
        assert!(!is_valid_private_key("zz"));
        assert!(!is_valid_private_key(&PRIVATE_KEY[2..]));
        assert!(!is_valid_private_key(&"00".repeat(32)));

        let err = decode_private_key("abc").unwrap_err();
        assert_eq!(*err.kind(), InvalidKey);
    }
}
