//! Lock Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `ledger` - Lock records and custody accounting

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::{get_contract_version, set_contract_version};

use common::{AssetInfo, KNOWN_CHAINS};

use crate::error::ContractError;
use crate::execute::{
    execute_accept_admin, execute_add_chain, execute_cancel_admin_proposal, execute_lock,
    execute_oracle_confirm, execute_propose_admin, execute_receive, execute_refund,
    execute_remove_chain, execute_set_timeout_window, execute_withdraw_operational, nonpayable,
};
use crate::ledger;
use crate::msg::{ChainEntry, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_admin, query_balances, query_chains, query_config, query_events, query_lock,
    query_lock_status, query_locks, query_next_lock_id, query_pending_admin,
};
use crate::state::{
    ChainConfig, Config, CHAINS, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_TIMEOUT_WINDOW,
    NEXT_EVENT_SEQ,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;

    let asset = match msg.asset {
        AssetInfo::Cw20 { contract_addr } => AssetInfo::Cw20 {
            contract_addr: deps.api.addr_validate(contract_addr.as_str())?,
        },
        native => native,
    };
    if asset.identifier().is_empty() {
        return Err(ContractError::UnsupportedAsset {
            asset: "empty denom".to_string(),
        });
    }

    let timeout_window = msg.timeout_window.unwrap_or(DEFAULT_TIMEOUT_WINDOW);
    if timeout_window == 0 {
        return Err(ContractError::InvalidTimeoutWindow);
    }

    let config = Config {
        admin,
        asset,
        timeout_window,
    };
    CONFIG.save(deps.storage, &config)?;

    // Seed the allow-list
    let chains = msg.chains.unwrap_or_else(|| {
        KNOWN_CHAINS
            .iter()
            .map(|c| ChainEntry {
                chain_id: c.id,
                name: c.name.to_string(),
            })
            .collect()
    });
    for entry in &chains {
        if CHAINS.has(deps.storage, entry.chain_id) {
            return Err(ContractError::ChainAlreadySupported {
                chain_id: entry.chain_id,
            });
        }
        CHAINS.save(
            deps.storage,
            entry.chain_id,
            &ChainConfig {
                chain_id: entry.chain_id,
                name: entry.name.clone(),
            },
        )?;
    }

    ledger::init(deps.storage)?;
    NEXT_EVENT_SEQ.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("asset", config.asset.to_string())
        .add_attribute("timeout_window", timeout_window.to_string())
        .add_attribute("chain_count", chains.len().to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    if !matches!(msg, ExecuteMsg::Lock { .. }) {
        nonpayable(&info)?;
    }

    match msg {
        // Lock lifecycle
        ExecuteMsg::Lock {
            amount,
            recipient,
            target_chain_id,
        } => execute_lock(deps, env, info, amount, recipient, target_chain_id),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, env, info, cw20_msg),
        ExecuteMsg::OracleConfirm {
            lock_id,
            dest_tx_hash,
        } => execute_oracle_confirm(deps, env, info, lock_id, dest_tx_hash),
        ExecuteMsg::Refund { lock_id } => execute_refund(deps, env, info, lock_id),

        // Configuration
        ExecuteMsg::SetTimeoutWindow { timeout_window } => {
            execute_set_timeout_window(deps, info, timeout_window)
        }
        ExecuteMsg::AddChain { chain_id, name } => execute_add_chain(deps, info, chain_id, name),
        ExecuteMsg::RemoveChain { chain_id } => execute_remove_chain(deps, info, chain_id),
        ExecuteMsg::WithdrawOperational { amount, recipient } => {
            execute_withdraw_operational(deps, info, amount, recipient)
        }

        // Admin transfer
        ExecuteMsg::ProposeAdmin { new_admin } => execute_propose_admin(deps, env, info, new_admin),
        ExecuteMsg::AcceptAdmin {} => execute_accept_admin(deps, info),
        ExecuteMsg::CancelAdminProposal {} => execute_cancel_admin_proposal(deps, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Admin {} => to_json_binary(&query_admin(deps)?),
        QueryMsg::PendingAdmin {} => to_json_binary(&query_pending_admin(deps)?),
        QueryMsg::Lock { lock_id } => to_json_binary(&query_lock(deps, lock_id)?),
        QueryMsg::Locks { start_after, limit } => {
            to_json_binary(&query_locks(deps, start_after, limit)?)
        }
        QueryMsg::LockStatus { lock_id } => {
            to_json_binary(&query_lock_status(deps, env, lock_id)?)
        }
        QueryMsg::Chains {} => to_json_binary(&query_chains(deps)?),
        QueryMsg::Balances {} => to_json_binary(&query_balances(deps)?),
        QueryMsg::NextLockId {} => to_json_binary(&query_next_lock_id(deps)?),
        QueryMsg::Events { start_after, limit } => {
            to_json_binary(&query_events(deps, start_after, limit)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    // Refuse another contract's state
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigration {
            contract: stored.contract,
            expected: CONTRACT_NAME.to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("previous_version", stored.version)
        .add_attribute("version", CONTRACT_VERSION))
}
