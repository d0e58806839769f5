//! Amino JSON transaction model for Cosmos SDK-formatted `StdTx` transactions.
//!
//! This crate holds the chain-independent parts of legacy transaction signing:
//! typed `sdk.Msg` variants, the canonical (sorted, compact) JSON serializer
//! used to produce sign bytes, fees, sign docs, and the `StdTx` envelope which
//! carries the signature and renders the submission payload.
//!
//! Chain-specific conventions (address prefixes, field naming, public key
//! encoding) are supplied through a [`Format`].
//!
//! # Equivalent Go code
//!
//! - [`StdTx` (godoc)](https://godoc.org/github.com/cosmos/cosmos-sdk/x/auth/types#StdTx)
//! - [`StdSignDoc` (godoc)](https://godoc.org/github.com/cosmos/cosmos-sdk/x/auth/types#StdSignDoc)
//! - [`sdk.Msg` (godoc)](https://godoc.org/github.com/cosmos/cosmos-sdk/types#Msg)

#![doc(html_root_url = "https://docs.rs/stdtx/0.1.0")]
#![forbid(unsafe_code)]
#![warn(rust_2018_idioms, missing_docs, unused_qualifications)]

pub mod address;
pub mod canonical;
pub mod coin;
pub mod decimal;
pub mod error;
pub mod fee;
pub mod format;
pub mod msg;
pub mod sign_doc;
pub mod signature;
pub mod stdtx;
pub mod type_name;

pub use self::{
    address::Address,
    coin::Coin,
    decimal::Decimal,
    error::{Error, ErrorKind},
    fee::StdFee,
    format::{Dialect, Format, PubKeyEncoding},
    msg::{Msg, SignLayout},
    sign_doc::SignDoc,
    signature::StdSignature,
    stdtx::{BroadcastMode, SignedPayload, StdTx, Submission, TxEncoder, TxState},
    type_name::TypeName,
};
