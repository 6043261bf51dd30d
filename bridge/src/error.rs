//! Error types for the Lock Bridge contract
//!
//! Every rejection names its kind so clients can tell "retry later"
//! (`NotExpired`) apart from permanent failures (`AlreadyFinalized`,
//! `Unauthorized`).

use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

use crate::state::LockStatus;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("Unauthorized: only pending admin can accept")]
    UnauthorizedPendingAdmin,

    #[error("No pending admin change")]
    NoPendingAdmin,

    // ========================================================================
    // Lock Validation Errors
    // ========================================================================

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid destination address: expected 20 bytes, got {got}")]
    InvalidDestination { got: usize },

    #[error("Chain not supported: {chain_id}")]
    UnsupportedChain { chain_id: u64 },

    #[error("Asset not supported: {asset}")]
    UnsupportedAsset { asset: String },

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================

    #[error("Lock not found: {lock_id}")]
    NotFound { lock_id: u64 },

    #[error("Lock {lock_id} already finalized: {status}")]
    AlreadyFinalized { lock_id: u64, status: LockStatus },

    #[error("Lock {lock_id} not expired: refundable at block {refundable_at}")]
    NotExpired { lock_id: u64, refundable_at: u64 },

    #[error("Invalid destination tx hash: expected 1 to 32 bytes, got {got}")]
    InvalidTxHash { got: usize },

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Invalid timeout window: must be greater than zero")]
    InvalidTimeoutWindow,

    #[error("Chain already supported: {chain_id}")]
    ChainAlreadySupported { chain_id: u64 },

    #[error("Cannot migrate from {contract}: expected {expected}")]
    InvalidMigration { contract: String, expected: String },

    #[error("Insufficient operational balance: available {available}, requested {requested}")]
    InsufficientOperationalBalance {
        available: Uint128,
        requested: Uint128,
    },
}

impl ContractError {
    pub fn only_admin() -> Self {
        ContractError::Unauthorized {
            reason: "only admin can perform this action".to_string(),
        }
    }

    pub fn only_oracle() -> Self {
        ContractError::Unauthorized {
            reason: "only the oracle can confirm locks".to_string(),
        }
    }

    pub fn only_depositor() -> Self {
        ContractError::Unauthorized {
            reason: "only the depositor can refund a lock".to_string(),
        }
    }
}
