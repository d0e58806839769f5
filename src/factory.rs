//! Message factory: turns a request's type-specific payload into a typed
//! [`Msg`] according to a chain's registered transaction types.
//!
//! Constructors only extract and normalize fields. Missing values become
//! empty addresses or zero amounts and are rejected later by validation.

use crate::{
    chain::{Chain, Registry},
    error::{Error, ErrorKind::*},
    prelude::*,
    request::TxRequest,
};
use serde_json::{Map, Value};
use stdtx::{
    msg::{
        Body, Kind, MsgBeginRedelegate, MsgDelegate, MsgDeposit, MsgSend, MsgSetWithdrawAddress,
        MsgUndelegate, MsgVote, MsgWithdrawDelegatorReward, MsgWithdrawDelegatorRewardsAll,
        MsgWithdrawValidatorCommission, MsgWithdrawValidatorRewardsAll, VoteOption,
    },
    Address, Coin, Decimal, Format, Msg,
};

/// Constructor for a message body
pub type Constructor = fn(&TxRequest, &Format) -> Result<Body, Error>;

/// Get the constructor for the given message kind
pub fn constructor(kind: Kind) -> Constructor {
    match kind {
        Kind::Send => send,
        Kind::Delegate => delegate,
        Kind::Undelegate => undelegate,
        Kind::Redelegate => redelegate,
        Kind::SetWithdrawAddress => set_withdraw_address,
        Kind::WithdrawDelegatorReward => withdraw_delegator_reward,
        Kind::WithdrawDelegatorRewardsAll => withdraw_delegator_rewards_all,
        Kind::WithdrawValidatorCommission => withdraw_validator_commission,
        Kind::WithdrawValidatorRewardsAll => withdraw_validator_rewards_all,
        Kind::Deposit => deposit,
        Kind::Vote => vote,
    }
}

/// Build the message for `tx_type` on the given chain
pub fn build(chain: &Chain, tx_type: &str, req: &TxRequest) -> Result<Msg, Error> {
    let registered = chain.tx_type(tx_type).ok_or_else(|| {
        format_err!(
            UnsupportedTxType,
            "[{}] no message registered for transaction type: {}",
            chain.name,
            tx_type
        )
    })?;

    let body = constructor(registered.kind)(req, &chain.format)?;
    trace!(
        "[{}] built {} message ({:?})",
        chain.name,
        registered.type_name,
        registered.kind
    );

    Ok(Msg::new(
        registered.type_name.clone(),
        registered.layout,
        body,
    ))
}

/// Build the message for `tx_type` on a chain looked up in the registry
pub fn build_for(
    registry: &Registry,
    chain_name: &str,
    tx_type: &str,
    req: &TxRequest,
) -> Result<Msg, Error> {
    let chain = registry.get_chain(chain_name).ok_or_else(|| {
        format_err!(
            UnsupportedTxType,
            "no chain registered with name: {}",
            chain_name
        )
    })?;

    build(chain, tx_type, req)
}

fn send(req: &TxRequest, format: &Format) -> Result<Body, Error> {
    let msg = payload(req)?;

    Ok(MsgSend {
        from_address: sender(req, format)?,
        to_address: account(msg.get("to"), format)?,
        amount: coins(msg.get("coins"))?,
    }
    .into())
}

fn delegate(req: &TxRequest, format: &Format) -> Result<Body, Error> {
    let msg = payload(req)?;

    Ok(MsgDelegate {
        delegator: sender(req, format)?,
        validator: validator(msg.get("validator_addr"), format)?,
        amount: coin(msg.get("delegation"))?,
    }
    .into())
}

fn undelegate(req: &TxRequest, format: &Format) -> Result<Body, Error> {
    let msg = payload(req)?;

    Ok(MsgUndelegate {
        delegator: sender(req, format)?,
        validator: validator(msg.get("validator_addr"), format)?,
        shares: shares(msg.get("shares_amount"), format)?,
    }
    .into())
}

fn redelegate(req: &TxRequest, format: &Format) -> Result<Body, Error> {
    let msg = payload(req)?;

    Ok(MsgBeginRedelegate {
        delegator: sender(req, format)?,
        validator_src: validator(msg.get("validator_src_addr"), format)?,
        validator_dst: validator(msg.get("validator_dst_addr"), format)?,
        shares: shares(msg.get("shares_amount"), format)?,
    }
    .into())
}

fn set_withdraw_address(req: &TxRequest, format: &Format) -> Result<Body, Error> {
    let msg = payload(req)?;

    Ok(MsgSetWithdrawAddress {
        delegator: sender(req, format)?,
        withdraw: account(msg.get("withdraw_addr"), format)?,
    }
    .into())
}

fn withdraw_delegator_reward(req: &TxRequest, format: &Format) -> Result<Body, Error> {
    let msg = payload(req)?;

    Ok(MsgWithdrawDelegatorReward {
        delegator: sender(req, format)?,
        validator: validator(msg.get("validator_addr"), format)?,
    }
    .into())
}

fn withdraw_delegator_rewards_all(req: &TxRequest, format: &Format) -> Result<Body, Error> {
    Ok(MsgWithdrawDelegatorRewardsAll {
        delegator: sender(req, format)?,
    }
    .into())
}

/// The sender is the validator operator: its account bytes are rendered
/// with the validator prefix on the wire
fn withdraw_validator_commission(req: &TxRequest, format: &Format) -> Result<Body, Error> {
    Ok(MsgWithdrawValidatorCommission {
        validator: sender(req, format)?,
    }
    .into())
}

fn withdraw_validator_rewards_all(req: &TxRequest, format: &Format) -> Result<Body, Error> {
    Ok(MsgWithdrawValidatorRewardsAll {
        validator: sender(req, format)?,
    }
    .into())
}

fn deposit(req: &TxRequest, format: &Format) -> Result<Body, Error> {
    let msg = payload(req)?;

    Ok(MsgDeposit {
        proposal_id: proposal_id(msg.get("proposal_id"))?,
        depositor: sender(req, format)?,
        amount: coins(msg.get("amount"))?,
    }
    .into())
}

fn vote(req: &TxRequest, format: &Format) -> Result<Body, Error> {
    let msg = payload(req)?;

    let option = match msg.get("option") {
        Some(value) => VoteOption::from_json_value(value)?,
        None => VoteOption::Empty,
    };

    Ok(MsgVote {
        proposal_id: proposal_id(msg.get("proposal_id"))?,
        voter: sender(req, format)?,
        option,
    }
    .into())
}

/// Borrow the request's `msg` object. A missing payload is treated as empty.
fn payload(req: &TxRequest) -> Result<Map<String, Value>, Error> {
    match &req.msg {
        Value::Null => Ok(Map::new()),
        Value::Object(obj) => Ok(obj.clone()),
        other => fail!(MalformedInput, "expected `msg` object, got: {}", other),
    }
}

/// Decode the request's sender account
fn sender(req: &TxRequest, format: &Format) -> Result<Address, Error> {
    decode_address(&req.from, &format.acc_prefix)
}

/// Decode an account address field
fn account(value: Option<&Value>, format: &Format) -> Result<Address, Error> {
    address(value, &format.acc_prefix)
}

/// Decode a validator operator address field
fn validator(value: Option<&Value>, format: &Format) -> Result<Address, Error> {
    address(value, &format.val_prefix)
}

fn address(value: Option<&Value>, prefix: &str) -> Result<Address, Error> {
    match value {
        None | Some(Value::Null) => Ok(Address::default()),
        Some(Value::String(encoded)) => decode_address(encoded, prefix),
        Some(other) => fail!(MalformedInput, "expected address, got: {}", other),
    }
}

/// Decode a Bech32 address with the expected prefix. Empty strings decode
/// to an empty address.
fn decode_address(encoded: &str, prefix: &str) -> Result<Address, Error> {
    if encoded.is_empty() {
        return Ok(Address::default());
    }

    Ok(Address::from_bech32_with_prefix(encoded, prefix)?)
}

fn decimal(value: Option<&Value>) -> Result<Decimal, Error> {
    match value {
        None | Some(Value::Null) => Ok(Decimal::from(0u64)),
        Some(value) => Ok(Decimal::from_json_value(value)?),
    }
}

/// Share amounts are signed in the chain's fixed-precision `sdk.Dec` form
fn shares(value: Option<&Value>, format: &Format) -> Result<Decimal, Error> {
    Ok(decimal(value)?.with_precision(format.dec_precision)?)
}

fn coin(value: Option<&Value>) -> Result<Coin, Error> {
    match value {
        None | Some(Value::Null) => Ok(Coin::new("", 0u64)),
        Some(value) => Ok(Coin::from_json_value(value)?),
    }
}

fn coins(value: Option<&Value>) -> Result<Vec<Coin>, Error> {
    Ok(Coin::list_from_json_value(value)?)
}

/// Proposal IDs are kept as digit strings
fn proposal_id(value: Option<&Value>) -> Result<String, Error> {
    let id = match value {
        None | Some(Value::Null) => return Ok(String::new()),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => fail!(MalformedInput, "invalid proposal_id: {}", other),
    };

    if !id.bytes().all(|b| b.is_ascii_digit()) {
        fail!(MalformedInput, "invalid proposal_id: {}", id);
    }

    Ok(id)
}
