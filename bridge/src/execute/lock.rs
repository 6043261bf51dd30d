//! Lock handlers (native funds and CW20 Receive).
//!
//! The runtime moves the tokens into the contract atomically with the call
//! (attached funds or CW20 `Send`), so the amount reaching the ledger is
//! always the amount actually escrowed.

use cosmwasm_std::{from_json, Addr, Binary, DepsMut, Env, MessageInfo, Response, Uint128};
use cw20::Cw20ReceiveMsg;

use common::AssetInfo;

use crate::error::ContractError;
use crate::events::{emit, BridgeEvent};
use crate::ledger::{self, NewLock};
use crate::msg::ReceiveMsg;
use crate::state::CONFIG;

/// Lock native tokens attached to the message.
pub fn execute_lock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    recipient: Binary,
    target_chain_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if !config.asset.is_native() {
        return Err(ContractError::UnsupportedAsset {
            asset: format!("native funds (bridge escrows {})", config.asset),
        });
    }
    let denom = config.asset.identifier();

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }

    match info.funds.as_slice() {
        [] => {
            return Err(ContractError::InvalidAmount {
                reason: "No funds sent".to_string(),
            })
        }
        [coin] if coin.denom != *denom => {
            return Err(ContractError::UnsupportedAsset {
                asset: coin.denom.clone(),
            })
        }
        [coin] if coin.amount != amount => {
            return Err(ContractError::InvalidAmount {
                reason: format!("Attached {} does not match amount {}", coin.amount, amount),
            })
        }
        [_] => {}
        _ => {
            return Err(ContractError::InvalidAmount {
                reason: "Only one token type allowed per transaction".to_string(),
            })
        }
    }

    lock_escrowed(deps, env, info.sender, amount, recipient, target_chain_id)
}

/// Lock CW20 tokens delivered through the receive hook.
pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // Only the configured token contract can report escrowed amounts
    match &config.asset {
        AssetInfo::Cw20 { contract_addr } if *contract_addr == info.sender => {}
        _ => {
            return Err(ContractError::UnsupportedAsset {
                asset: info.sender.to_string(),
            })
        }
    }

    let sender = deps.api.addr_validate(&cw20_msg.sender)?;
    let receive_msg: ReceiveMsg = from_json(&cw20_msg.msg)?;

    match receive_msg {
        ReceiveMsg::Lock {
            recipient,
            target_chain_id,
        } => lock_escrowed(
            deps,
            env,
            sender,
            cw20_msg.amount,
            recipient,
            target_chain_id,
        ),
    }
}

fn lock_escrowed(
    deps: DepsMut,
    env: Env,
    depositor: Addr,
    amount: Uint128,
    recipient: Binary,
    target_chain_id: u64,
) -> Result<Response, ContractError> {
    let height = env.block.height;
    let record = ledger::create(
        deps.storage,
        NewLock {
            depositor,
            amount,
            destination_address: recipient,
            target_chain_id,
        },
        height,
    )?;

    let event = emit(
        deps.storage,
        height,
        BridgeEvent::Locked {
            lock_id: record.id,
            depositor: record.depositor.clone(),
            amount: record.amount,
            target_chain_id: record.target_chain_id,
            destination_address: record.destination_address.clone(),
        },
    )?;

    Ok(Response::new()
        .add_event(event)
        .add_attribute("method", "lock")
        .add_attribute("lock_id", record.id.to_string())
        .add_attribute("depositor", record.depositor)
        .add_attribute("amount", record.amount.to_string())
        .add_attribute("target_chain_id", record.target_chain_id.to_string())
        .add_attribute("created_at", record.created_at.to_string()))
}
