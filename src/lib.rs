//! Builder and signer for legacy Amino JSON (`StdTx`) transactions on
//! Cosmos SDK chain families.
//!
//! Chains are described by a TOML registry (see [`config::RegistryConfig`])
//! which maps each chain's transaction types onto message kinds, registered
//! Amino type names and wire conventions. A [`Builder`] turns a generic
//! [`TxRequest`] into a [`stdtx::StdTx`] envelope and optionally signs it.

#![doc(html_root_url = "https://docs.rs/cosmos-txbuilder/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod builder;
pub mod chain;
pub mod config;
pub mod error;
pub mod factory;
pub mod prelude;
pub mod request;
pub mod signer;

pub use crate::{
    builder::Builder,
    chain::{Chain, Registry},
    error::{Error, ErrorKind},
    request::{SigningMode, TxRequest},
    signer::{Secp256k1Signer, Signer},
};
pub use stdtx;

// Map type used within this crate
use std::collections::BTreeMap as Map;
