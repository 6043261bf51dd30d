//! Query handlers for the Lock Bridge contract.
//!
//! All queries are read-only and need no authorization.

use cosmwasm_std::{Deps, Env, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use common::chain_info;

use crate::ledger;
use crate::msg::{
    AdminResponse, BalancesResponse, ChainResponse, ChainsResponse, ConfigResponse, EventsResponse,
    LockResponse, LockStatusResponse, LocksResponse, NextLockIdResponse, PendingAdminResponse,
};
use crate::state::{
    CHAINS, CONFIG, DEFAULT_LIMIT, EVENT_LOG, MAX_LIMIT, NEXT_LOCK_ID, PENDING_ADMIN,
};
use crate::timeout::{is_expired, refundable_at};

// ============================================================================
// Core Queries
// ============================================================================

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        asset: config.asset,
        timeout_window: config.timeout_window,
    })
}

/// Query the current admin, which is also the oracle.
pub fn query_admin(deps: Deps) -> StdResult<AdminResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(AdminResponse {
        admin: config.admin,
    })
}

/// Query pending admin proposal.
pub fn query_pending_admin(deps: Deps) -> StdResult<Option<PendingAdminResponse>> {
    let pending = PENDING_ADMIN.may_load(deps.storage)?;
    Ok(pending.map(|p| PendingAdminResponse {
        new_address: p.new_address,
        proposed_at: p.proposed_at,
    }))
}

/// Query the destination chain allow-list.
pub fn query_chains(deps: Deps) -> StdResult<ChainsResponse> {
    let chains = CHAINS
        .range(deps.storage, None, None, Order::Ascending)
        .map(|item| {
            let (_, chain) = item?;
            Ok(ChainResponse {
                chain_id: chain.chain_id,
                name: chain.name,
                explorer_url: chain_info(chain.chain_id).map(|c| c.explorer_url.to_string()),
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ChainsResponse { chains })
}

// ============================================================================
// Lock Queries
// ============================================================================

/// Query a single lock. Unknown ids return `lock: None`.
pub fn query_lock(deps: Deps, lock_id: u64) -> StdResult<LockResponse> {
    Ok(LockResponse {
        lock: ledger::get(deps.storage, lock_id)?,
    })
}

/// Query paginated list of locks.
pub fn query_locks(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<LocksResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    Ok(LocksResponse {
        locks: ledger::range(deps.storage, start_after, limit)?,
    })
}

/// Query whether a lock can be refunded at the current block height.
pub fn query_lock_status(deps: Deps, env: Env, lock_id: u64) -> StdResult<LockStatusResponse> {
    let config = CONFIG.load(deps.storage)?;
    let record = ledger::get(deps.storage, lock_id)?
        .ok_or_else(|| StdError::not_found(format!("lock {lock_id}")))?;

    Ok(LockStatusResponse {
        lock_id,
        status: record.status,
        refundable_at: refundable_at(&record, config.timeout_window),
        is_refundable: is_expired(&record, env.block.height, config.timeout_window),
    })
}

/// Query custody and operational balances.
pub fn query_balances(deps: Deps) -> StdResult<BalancesResponse> {
    Ok(BalancesResponse {
        custody: ledger::custody(deps.storage)?,
        operational: ledger::operational(deps.storage)?,
    })
}

/// Query the id the next lock will receive.
pub fn query_next_lock_id(deps: Deps) -> StdResult<NextLockIdResponse> {
    Ok(NextLockIdResponse {
        next_lock_id: NEXT_LOCK_ID.load(deps.storage)?,
    })
}

// ============================================================================
// Event Queries
// ============================================================================

/// Query committed events in sequence order.
pub fn query_events(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<EventsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let events = EVENT_LOG
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, event)| event))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(EventsResponse { events })
}
