//! State definitions for the Lock Bridge contract
//!
//! This module defines all storage structures and state maps: the admin
//! config, the destination chain allow-list, lock records, custody balances
//! and the append-only event log.

use std::fmt;

use common::AssetInfo;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

use crate::events::StoredEvent;

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address; acts as the oracle and may transfer adminship
    pub admin: Addr,
    /// Asset held in custody by this bridge instance
    pub asset: AssetInfo,
    /// Blocks after creation at which an unconfirmed lock becomes refundable
    pub timeout_window: u64,
}

/// Pending admin change proposal
#[cw_serde]
pub struct PendingAdmin {
    /// Proposed new admin address
    pub new_address: Addr,
    /// Block height at which the proposal was made
    pub proposed_at: u64,
}

/// Allow-listed destination chain
#[cw_serde]
pub struct ChainConfig {
    /// EVM chain ID
    pub chain_id: u64,
    /// Human-readable chain name
    pub name: String,
}

// ============================================================================
// Lock Records
// ============================================================================

/// Lifecycle status of a lock. `Confirmed` and `Refunded` are terminal.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum LockStatus {
    Locked,
    Confirmed,
    Refunded,
}

impl LockStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LockStatus::Locked)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LockStatus::Locked => "locked",
            LockStatus::Confirmed => "confirmed",
            LockStatus::Refunded => "refunded",
        }
    }
}

impl fmt::Display for LockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One escrowed deposit.
///
/// Everything except `status`, `dest_tx_hash` and `finalized_at` is fixed at
/// creation. `dest_tx_hash` is set if and only if the lock is `Confirmed`.
#[cw_serde]
pub struct LockRecord {
    /// Unique, strictly increasing lock id (first lock is 1)
    pub id: u64,
    /// Address that created the lock
    pub depositor: Addr,
    /// Escrowed amount in the asset's smallest unit
    pub amount: Uint128,
    /// 20-byte EVM recipient on the destination chain
    pub destination_address: Binary,
    /// Destination chain ID
    pub target_chain_id: u64,
    /// Current status
    pub status: LockStatus,
    /// Block height at creation
    pub created_at: u64,
    /// Destination-chain transaction hash reported by the oracle
    pub dest_tx_hash: Option<Binary>,
    /// Block height at which the lock reached a terminal status
    pub finalized_at: Option<u64>,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:lock-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default refund timeout in blocks (~1 day at 6s blocks)
pub const DEFAULT_TIMEOUT_WINDOW: u64 = 14_400;

/// Maximum accepted length of a destination transaction hash
pub const MAX_TX_HASH_LEN: usize = 32;

/// Default and maximum page sizes for enumeration queries
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 50;

// ============================================================================
// Core State Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Pending admin proposal (if any)
pub const PENDING_ADMIN: Item<PendingAdmin> = Item::new("pending_admin");

/// Destination chain allow-list
/// Key: chain_id, Value: ChainConfig
pub const CHAINS: Map<u64, ChainConfig> = Map::new("chains");

// ============================================================================
// Ledger State
// ============================================================================

/// Lock records, never deleted
/// Key: lock id, Value: LockRecord
pub const LOCKS: Map<u64, LockRecord> = Map::new("locks");

/// Id that the next lock will receive
pub const NEXT_LOCK_ID: Item<u64> = Item::new("next_lock_id");

/// Sum of `amount` over all `Locked` records
pub const CUSTODY: Item<Uint128> = Item::new("custody");

/// Funds released from custody by confirmations
pub const OPERATIONAL: Item<Uint128> = Item::new("operational");

// ============================================================================
// Event Log
// ============================================================================

/// Append-only log of committed transitions
/// Key: sequence number, Value: StoredEvent
pub const EVENT_LOG: Map<u64, StoredEvent> = Map::new("event_log");

/// Sequence number of the next event
pub const NEXT_EVENT_SEQ: Item<u64> = Item::new("next_event_seq");
