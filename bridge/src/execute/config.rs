//! Configuration handlers: timeout window and destination chain allow-list.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{ChainConfig, CHAINS, CONFIG};

/// Set the refund timeout. Applies to all still-locked records.
pub fn execute_set_timeout_window(
    deps: DepsMut,
    info: MessageInfo,
    timeout_window: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::only_admin());
    }

    if timeout_window == 0 {
        return Err(ContractError::InvalidTimeoutWindow);
    }

    let previous = config.timeout_window;
    config.timeout_window = timeout_window;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_timeout_window")
        .add_attribute("previous", previous.to_string())
        .add_attribute("timeout_window", timeout_window.to_string()))
}

/// Allow-list a destination chain.
pub fn execute_add_chain(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    name: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::only_admin());
    }

    if CHAINS.has(deps.storage, chain_id) {
        return Err(ContractError::ChainAlreadySupported { chain_id });
    }

    CHAINS.save(
        deps.storage,
        chain_id,
        &ChainConfig {
            chain_id,
            name: name.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "add_chain")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("name", name))
}

/// Remove a destination chain. New locks to it are rejected; existing locks
/// can still be confirmed or refunded.
pub fn execute_remove_chain(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::only_admin());
    }

    if !CHAINS.has(deps.storage, chain_id) {
        return Err(ContractError::UnsupportedChain { chain_id });
    }
    CHAINS.remove(deps.storage, chain_id);

    Ok(Response::new()
        .add_attribute("method", "remove_chain")
        .add_attribute("chain_id", chain_id.to_string()))
}
