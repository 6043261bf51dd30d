//! Oracle confirmation handler.

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response};

use crate::authority::{AuthorityPolicy, SingleOracle};
use crate::error::ContractError;
use crate::events::{emit, BridgeEvent};
use crate::ledger::{self, Transition};
use crate::state::{CONFIG, MAX_TX_HASH_LEN};

/// Confirm a lock with the configured single-oracle policy.
pub fn execute_oracle_confirm(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    lock_id: u64,
    dest_tx_hash: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let policy = SingleOracle::from(&config);
    confirm_with_policy(deps, env, info, &policy, lock_id, dest_tx_hash)
}

/// Confirm a lock after checking `policy`.
///
/// The authority check runs before anything else so an unauthorized caller
/// learns nothing about the lock. Confirming an already finalized lock is a
/// protocol violation and fails with `AlreadyFinalized`; the stored hash is
/// never overwritten.
pub fn confirm_with_policy(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    policy: &dyn AuthorityPolicy,
    lock_id: u64,
    dest_tx_hash: Binary,
) -> Result<Response, ContractError> {
    if !policy.is_oracle(&info.sender) {
        return Err(ContractError::only_oracle());
    }

    if dest_tx_hash.is_empty() || dest_tx_hash.len() > MAX_TX_HASH_LEN {
        return Err(ContractError::InvalidTxHash {
            got: dest_tx_hash.len(),
        });
    }

    let height = env.block.height;
    let record = ledger::transition(
        deps.storage,
        lock_id,
        Transition::Confirm {
            dest_tx_hash: dest_tx_hash.clone(),
        },
        height,
    )?;

    let event = emit(
        deps.storage,
        height,
        BridgeEvent::Confirmed {
            lock_id: record.id,
            dest_tx_hash: dest_tx_hash.clone(),
        },
    )?;

    Ok(Response::new()
        .add_event(event)
        .add_attribute("method", "oracle_confirm")
        .add_attribute("lock_id", record.id.to_string())
        .add_attribute("oracle", info.sender)
        .add_attribute("dest_tx_hash", format!("0x{}", hex::encode(&dest_tx_hash)))
        .add_attribute("success", "true"))
}
