//! Account and validator addresses

use crate::error::{Error, ErrorKind};
use anomaly::fail;
use std::fmt::{self, Debug};
use subtle_encoding::{bech32, hex};

/// Raw address bytes, decoded from their chain-specific Bech32 form.
///
/// Addresses are only rendered as strings at the serialization boundary, where
/// the chain's account or validator prefix is applied.
#[derive(Clone, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Address(Vec<u8>);

impl Address {
    /// Create an address from raw bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Address(bytes.into())
    }

    /// Decode a Bech32 address, ignoring its human-readable prefix
    pub fn from_bech32(encoded: impl AsRef<str>) -> Result<Self, Error> {
        let (_hrp, bytes) = bech32::decode(encoded.as_ref())?;
        Ok(Address(bytes))
    }

    /// Decode a Bech32 address, requiring the given human-readable prefix
    pub fn from_bech32_with_prefix(
        encoded: impl AsRef<str>,
        prefix: impl AsRef<str>,
    ) -> Result<Self, Error> {
        let (hrp, bytes) = bech32::decode(encoded.as_ref())?;

        if hrp != prefix.as_ref() {
            fail!(
                ErrorKind::Address,
                "expected prefix `{}`, got `{}`",
                prefix.as_ref(),
                hrp
            );
        }

        Ok(Address(bytes))
    }

    /// Decode an address from a hex string
    pub fn from_hex(encoded: impl AsRef<str>) -> Result<Self, Error> {
        let encoded = encoded.as_ref();

        if encoded.len() % 2 != 0 {
            fail!(ErrorKind::Address, "odd-length hex address: {}", encoded);
        }

        Ok(Address(hex::decode(encoded.to_ascii_lowercase())?))
    }

    /// Encode this address as Bech32 with the given human-readable prefix
    pub fn to_bech32(&self, prefix: impl AsRef<str>) -> String {
        bech32::encode(prefix.as_ref(), &self.0)
    }

    /// Encode this address as lower-case hex
    pub fn to_hex(&self) -> String {
        String::from_utf8(hex::encode(&self.0)).expect("hex should always be UTF-8")
    }

    /// Is this address empty?
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the raw address bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

/// Convert between the hex and Bech32 forms of an address
pub fn hex_to_bech32(prefix: &str, hex_addr: &str) -> Result<String, Error> {
    Ok(Address::from_hex(hex_addr)?.to_bech32(prefix))
}

/// Convert a Bech32 address to its hex form
pub fn bech32_to_hex(bech32_addr: &str) -> Result<String, Error> {
    Ok(Address::from_bech32(bech32_addr)?.to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_BYTES: [u8; 20] = [
        0x8f, 0x33, 0x1a, 0x02, 0x7c, 0x41, 0x90, 0x0b, 0x55, 0x6e, 0x11, 0xd4, 0x2a, 0xbc, 0x01,
        0x77, 0xe0, 0x93, 0x4b, 0x05,
    ];

    #[test]
    fn bech32_round_trip() {
        for len in [1usize, 20, 32] {
            let bytes = EXAMPLE_BYTES.iter().cycle().take(len).copied().collect::<Vec<_>>();
            let addr = Address::new(bytes.clone());

            for prefix in ["cosmos", "kava", "terravaloper", "iaa"] {
                let encoded = addr.to_bech32(prefix);
                assert!(encoded.starts_with(prefix));
                assert_eq!(Address::from_bech32(&encoded).unwrap().as_bytes(), &bytes[..]);
            }
        }
    }

    #[test]
    fn prefix_mismatch() {
        let encoded = Address::new(EXAMPLE_BYTES).to_bech32("kava");
        let err = Address::from_bech32_with_prefix(&encoded, "cosmos").unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::Address);
        assert!(Address::from_bech32_with_prefix(&encoded, "kava").is_ok());
    }

    #[test]
    fn invalid_bech32() {
        let err = Address::from_bech32("kava1notanaddress").unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::Address);
    }

    #[test]
    fn hex_conversion() {
        let addr = Address::new(EXAMPLE_BYTES);
        let bech32 = hex_to_bech32("cosmos", &addr.to_hex()).unwrap();
        assert_eq!(bech32, addr.to_bech32("cosmos"));
        assert_eq!(bech32_to_hex(&bech32).unwrap(), addr.to_hex());
        assert_eq!(
            Address::from_hex(addr.to_hex().to_ascii_uppercase()).unwrap(),
            addr
        );
    }
}
