//! Lock Bridge Contract - Escrowed Cross-Chain Transfers
//!
//! This contract escrows a single fungible asset for bridging to EVM chains,
//! relying on an off-chain oracle to relay each lock.
//!
//! # Lock Lifecycle
//! 1. Depositor locks tokens with a 20-byte EVM recipient and an
//!    allow-listed destination chain; the lock is recorded as `Locked`
//! 2. The oracle observes the `bridge_locked` event and performs the
//!    destination-chain mint
//! 3. The oracle calls `OracleConfirm` with the destination tx hash; the lock
//!    becomes `Confirmed` and its amount moves to the operational balance
//! 4. If no confirmation arrives within the timeout window, the depositor
//!    calls `Refund`; the lock becomes `Refunded` and the funds are returned
//!
//! # Security
//! - `Confirmed` and `Refunded` are terminal; no lock is released twice
//! - Custody always equals the sum of all `Locked` amounts
//! - Oracle authority is a pluggable `AuthorityPolicy`
//! - Destination chains are allow-listed on-chain (fail closed)

pub mod authority;
pub mod contract;
pub mod error;
pub mod events;
mod execute;
pub mod ledger;
pub mod msg;
mod query;
pub mod state;
pub mod timeout;

pub use crate::authority::{AuthorityPolicy, SingleOracle};
pub use crate::error::ContractError;
pub use crate::events::BridgeEvent;
pub use crate::execute::confirm_with_policy;
pub use crate::state::{LockRecord, LockStatus};
