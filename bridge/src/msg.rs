//! Message types for the Lock Bridge contract
//!
//! This module defines all messages for instantiation, execution, and queries.

use common::AssetInfo;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::events::StoredEvent;
use crate::state::{LockRecord, LockStatus};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Allow-listed destination chain entry
#[cw_serde]
pub struct ChainEntry {
    /// EVM chain ID
    pub chain_id: u64,
    /// Human-readable chain name
    pub name: String,
}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address; also the oracle allowed to confirm locks
    pub admin: String,
    /// Asset held in custody
    pub asset: AssetInfo,
    /// Refund timeout in blocks (defaults to `DEFAULT_TIMEOUT_WINDOW`)
    pub timeout_window: Option<u64>,
    /// Destination chain allow-list (defaults to the well-known Polygon chains)
    pub chains: Option<Vec<ChainEntry>>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Lock Lifecycle
    // ========================================================================
    /// Lock native tokens for bridging.
    ///
    /// Authorization: Anyone (the caller becomes the depositor)
    ///
    /// Exactly `amount` of the bridge denom must be attached as funds.
    Lock {
        /// Amount to lock
        amount: Uint128,
        /// 20-byte EVM recipient on the destination chain
        recipient: Binary,
        /// Destination chain ID (must be allow-listed)
        target_chain_id: u64,
    },

    /// Lock CW20 tokens for bridging (called via CW20 send)
    /// Implements CW20 Receiver interface
    Receive(cw20::Cw20ReceiveMsg),

    /// Report that the destination-chain action for a lock has happened.
    ///
    /// Authorization: Oracle (admin) only
    OracleConfirm {
        /// Lock to confirm
        lock_id: u64,
        /// Destination chain transaction hash (1 to 32 bytes)
        dest_tx_hash: Binary,
    },

    /// Reclaim an unconfirmed lock after the timeout window.
    ///
    /// Authorization: Original depositor only
    Refund {
        /// Lock to refund
        lock_id: u64,
    },

    // ========================================================================
    // Configuration
    // ========================================================================
    /// Set the refund timeout in blocks
    ///
    /// Authorization: Admin only
    SetTimeoutWindow { timeout_window: u64 },

    /// Allow-list a destination chain
    ///
    /// Authorization: Admin only
    AddChain { chain_id: u64, name: String },

    /// Remove a destination chain from the allow-list. Existing locks are
    /// unaffected.
    ///
    /// Authorization: Admin only
    RemoveChain { chain_id: u64 },

    /// Withdraw funds released by confirmations. Never touches custody.
    ///
    /// Authorization: Admin only
    WithdrawOperational { amount: Uint128, recipient: String },

    // ========================================================================
    // Admin Transfer
    // ========================================================================
    /// Propose a new admin
    ///
    /// Authorization: Admin only
    ProposeAdmin { new_admin: String },

    /// Accept a pending admin proposal
    ///
    /// Authorization: Pending admin only
    AcceptAdmin {},

    /// Cancel a pending admin proposal
    ///
    /// Authorization: Admin only
    CancelAdminProposal {},
}

/// CW20 receive hook payload
#[cw_serde]
pub enum ReceiveMsg {
    /// Lock the sent CW20 tokens for bridging
    Lock {
        recipient: Binary,
        target_chain_id: u64,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Returns the current admin (the oracle)
    #[returns(AdminResponse)]
    Admin {},

    /// Returns the pending admin proposal, if any
    #[returns(Option<PendingAdminResponse>)]
    PendingAdmin {},

    /// Returns a lock record, or `None` if the id was never issued
    #[returns(LockResponse)]
    Lock { lock_id: u64 },

    /// Returns lock records in ascending id order
    #[returns(LocksResponse)]
    Locks {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Returns status and refund eligibility of a lock at the current height
    #[returns(LockStatusResponse)]
    LockStatus { lock_id: u64 },

    /// Returns the destination chain allow-list
    #[returns(ChainsResponse)]
    Chains {},

    /// Returns custody and operational balances
    #[returns(BalancesResponse)]
    Balances {},

    /// Returns the id the next lock will receive
    #[returns(NextLockIdResponse)]
    NextLockId {},

    /// Returns committed events in sequence order
    #[returns(EventsResponse)]
    Events {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub asset: AssetInfo,
    pub timeout_window: u64,
}

#[cw_serde]
pub struct AdminResponse {
    pub admin: Addr,
}

#[cw_serde]
pub struct PendingAdminResponse {
    pub new_address: Addr,
    pub proposed_at: u64,
}

#[cw_serde]
pub struct LockResponse {
    pub lock: Option<LockRecord>,
}

#[cw_serde]
pub struct LocksResponse {
    pub locks: Vec<LockRecord>,
}

#[cw_serde]
pub struct LockStatusResponse {
    pub lock_id: u64,
    pub status: LockStatus,
    /// First block height at which a refund is accepted
    pub refundable_at: u64,
    /// Whether a refund would pass the timeout check right now
    pub is_refundable: bool,
}

#[cw_serde]
pub struct ChainResponse {
    pub chain_id: u64,
    pub name: String,
    /// Block explorer for well-known chains
    pub explorer_url: Option<String>,
}

#[cw_serde]
pub struct ChainsResponse {
    pub chains: Vec<ChainResponse>,
}

#[cw_serde]
pub struct BalancesResponse {
    /// Sum of all `Locked` amounts
    pub custody: Uint128,
    /// Released by confirmations, withdrawable by the admin
    pub operational: Uint128,
}

#[cw_serde]
pub struct NextLockIdResponse {
    pub next_lock_id: u64,
}

#[cw_serde]
pub struct EventsResponse {
    pub events: Vec<StoredEvent>,
}
