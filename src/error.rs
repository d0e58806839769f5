//! Error types

use anomaly::{BoxError, Context};
use std::{
    error::Error as _,
    fmt::{self, Display},
    io,
    ops::Deref,
};
use thiserror::Error;

/// Kinds of errors
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum ErrorKind {
    /// A signature was attached to an already-signed transaction
    #[error("transaction already signed")]
    AlreadySigned,

    /// Error in configuration file
    #[error("config error")]
    ConfigError,

    /// Cryptographic operation failed
    #[error("cryptographic error")]
    CryptoError,

    /// Malformatted or otherwise invalid cryptographic key
    #[error("invalid key")]
    InvalidKey,

    /// Input/output error
    #[error("I/O error")]
    IoError,

    /// Request payload could not be parsed
    #[error("malformed input")]
    MalformedInput,

    /// Signing is mandatory but no private key was supplied
    #[error("missing private key")]
    MissingPrivateKey,

    /// Missing or unusable signature
    #[error("signature error")]
    SignatureError,

    /// No message constructor registered for the chain and transaction type
    #[error("unsupported transaction type")]
    UnsupportedTxType,

    /// A required field is empty or otherwise invalid
    #[error("validation error")]
    ValidationError,
}

impl ErrorKind {
    /// Create an error context from this error
    pub fn context(self, source: impl Into<BoxError>) -> Context<ErrorKind> {
        Context::new(self, Some(source.into()))
    }
}

/// Error type
#[derive(Debug)]
pub struct Error(Box<Context<ErrorKind>>);

impl Deref for Error {
    type Target = Context<ErrorKind>;

    fn deref(&self) -> &Context<ErrorKind> {
        &self.0
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Context::new(kind, None).into()
    }
}

impl From<Context<ErrorKind>> for Error {
    fn from(context: Context<ErrorKind>) -> Self {
        Error(Box::new(context))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<io::Error> for Error {
    fn from(other: io::Error) -> Self {
        ErrorKind::IoError.context(other).into()
    }
}

impl From<k256::ecdsa::Error> for Error {
    fn from(other: k256::ecdsa::Error) -> Self {
        ErrorKind::CryptoError.context(other).into()
    }
}

impl From<serde_json::error::Error> for Error {
    fn from(other: serde_json::error::Error) -> Self {
        ErrorKind::MalformedInput.context(other).into()
    }
}

impl From<subtle_encoding::Error> for Error {
    fn from(other: subtle_encoding::Error) -> Self {
        ErrorKind::InvalidKey.context(other).into()
    }
}

impl From<toml::de::Error> for Error {
    fn from(other: toml::de::Error) -> Self {
        ErrorKind::ConfigError.context(other).into()
    }
}

impl From<stdtx::Error> for Error {
    fn from(other: stdtx::Error) -> Self {
        let kind = match other.kind() {
            stdtx::ErrorKind::Address | stdtx::ErrorKind::MalformedInput => {
                ErrorKind::MalformedInput
            }
            stdtx::ErrorKind::AlreadySigned => ErrorKind::AlreadySigned,
            stdtx::ErrorKind::Signature => ErrorKind::SignatureError,
            stdtx::ErrorKind::Validation => ErrorKind::ValidationError,
        };

        // Keep the underlying message without repeating the kind
        match other.source() {
            Some(source) => kind.context(source.to_string()).into(),
            None => kind.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdtx_kinds_are_preserved() {
        let err = Error::from(stdtx::Error::from(
            stdtx::ErrorKind::Validation.context("validator_addr is empty"),
        ));
        assert_eq!(*err.kind(), ErrorKind::ValidationError);
        assert_eq!(err.to_string(), "validation error: validator_addr is empty");
    }
}
