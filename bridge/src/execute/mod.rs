//! Execute handlers for the Lock Bridge contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `lock` - native and CW20 lock entry points
//! - `oracle` - oracle confirmation
//! - `refund` - timeout refunds
//! - `config` - timeout window and chain allow-list management
//! - `admin` - admin transfer and operational withdrawals

mod admin;
mod config;
mod lock;
mod oracle;
mod refund;

pub use admin::*;
pub use config::*;
pub use lock::*;
pub use oracle::*;
pub use refund::*;

use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, MessageInfo, StdResult, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use common::AssetInfo;

use crate::error::ContractError;

/// Reject attached funds. Only `Lock` escrows coins; anything else sent along
/// would sit outside custody and the operational balance.
pub(crate) fn nonpayable(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::InvalidAmount {
            reason: "This message does not accept funds".to_string(),
        });
    }
    Ok(())
}

/// Message paying `amount` of the bridge asset out of the contract.
pub(crate) fn transfer_msg(
    asset: &AssetInfo,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    let msg = match asset {
        AssetInfo::Native { denom } => CosmosMsg::Bank(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: vec![Coin {
                denom: denom.clone(),
                amount,
            }],
        }),
        AssetInfo::Cw20 { contract_addr } => CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: contract_addr.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount,
            })?,
            funds: vec![],
        }),
    };
    Ok(msg)
}
