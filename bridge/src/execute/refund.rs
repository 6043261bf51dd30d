//! Timeout refund handler.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::authority::{AuthorityPolicy, SingleOracle};
use crate::error::ContractError;
use crate::events::{emit, BridgeEvent};
use crate::execute::transfer_msg;
use crate::ledger::{self, Transition};
use crate::state::CONFIG;
use crate::timeout::{is_expired, refundable_at};

/// Return an unconfirmed lock to its depositor once the timeout has passed.
///
/// Checks run in a fixed order: existence, ownership, finality, expiry.
/// Finality is checked before expiry so a repeated refund reports
/// `AlreadyFinalized` rather than `NotExpired`.
pub fn execute_refund(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    lock_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let policy = SingleOracle::from(&config);

    let record = ledger::must_get(deps.storage, lock_id)?;

    if !policy.is_owner(&info.sender, &record) {
        return Err(ContractError::only_depositor());
    }

    if record.status.is_terminal() {
        return Err(ContractError::AlreadyFinalized {
            lock_id,
            status: record.status,
        });
    }

    let height = env.block.height;
    if !is_expired(&record, height, config.timeout_window) {
        return Err(ContractError::NotExpired {
            lock_id,
            refundable_at: refundable_at(&record, config.timeout_window),
        });
    }

    let record = ledger::transition(deps.storage, lock_id, Transition::Refund, height)?;

    let payout = transfer_msg(&config.asset, &record.depositor, record.amount)?;

    let event = emit(
        deps.storage,
        height,
        BridgeEvent::Refunded {
            lock_id: record.id,
            depositor: record.depositor.clone(),
            amount: record.amount,
        },
    )?;

    Ok(Response::new()
        .add_message(payout)
        .add_event(event)
        .add_attribute("method", "refund")
        .add_attribute("lock_id", record.id.to_string())
        .add_attribute("depositor", record.depositor)
        .add_attribute("amount", record.amount.to_string())
        .add_attribute("success", "true"))
}
