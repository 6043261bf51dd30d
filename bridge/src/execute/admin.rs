//! Admin operations handlers.
//!
//! This module handles:
//! - Admin transfer (propose/accept/cancel)
//! - Withdrawal of the operational balance

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::execute::transfer_msg;
use crate::ledger;
use crate::state::{PendingAdmin, CONFIG, PENDING_ADMIN};

// ============================================================================
// Admin Transfer
// ============================================================================

/// Propose a new admin. Takes effect when the proposed address accepts.
pub fn execute_propose_admin(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::only_admin());
    }

    let new_admin_addr = deps.api.addr_validate(&new_admin)?;
    let pending = PendingAdmin {
        new_address: new_admin_addr.clone(),
        proposed_at: env.block.height,
    };
    PENDING_ADMIN.save(deps.storage, &pending)?;

    Ok(Response::new()
        .add_attribute("method", "propose_admin")
        .add_attribute("new_admin", new_admin_addr)
        .add_attribute("proposed_at", pending.proposed_at.to_string()))
}

/// Accept pending admin role. The oracle role moves with it.
pub fn execute_accept_admin(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let pending = PENDING_ADMIN
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingAdmin)?;

    if info.sender != pending.new_address {
        return Err(ContractError::UnauthorizedPendingAdmin);
    }

    let mut config = CONFIG.load(deps.storage)?;
    let previous = std::mem::replace(&mut config.admin, pending.new_address.clone());
    CONFIG.save(deps.storage, &config)?;
    PENDING_ADMIN.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("method", "accept_admin")
        .add_attribute("previous_admin", previous)
        .add_attribute("new_admin", pending.new_address))
}

/// Cancel pending admin proposal.
pub fn execute_cancel_admin_proposal(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::only_admin());
    }

    if PENDING_ADMIN.may_load(deps.storage)?.is_none() {
        return Err(ContractError::NoPendingAdmin);
    }
    PENDING_ADMIN.remove(deps.storage);

    Ok(Response::new().add_attribute("method", "cancel_admin_proposal"))
}

// ============================================================================
// Operational Balance
// ============================================================================

/// Pay out funds released by confirmations.
///
/// Only the operational balance can be drawn; escrowed custody stays
/// reserved for pending locks and their refunds.
pub fn execute_withdraw_operational(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
    recipient: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::only_admin());
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;
    ledger::debit_operational(deps.storage, amount)?;

    let msg = transfer_msg(&config.asset, &recipient_addr, amount)?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("method", "withdraw_operational")
        .add_attribute("recipient", recipient_addr)
        .add_attribute("amount", amount.to_string()))
}
