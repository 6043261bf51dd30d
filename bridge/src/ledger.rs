//! Lock ledger: the only code that writes lock records or custody balances.
//!
//! Custody invariant: `CUSTODY` always equals the sum of `amount` over all
//! records whose status is `Locked`. `create` adds to it, each `transition`
//! removes exactly the record's amount, and a record can leave `Locked` only
//! once. A handler that returns `Err` after calling into the ledger has all
//! of its writes reverted by the runtime.

use cosmwasm_std::{Addr, Binary, Order, StdResult, Storage, Uint128};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::state::{LockRecord, LockStatus, CHAINS, CUSTODY, LOCKS, NEXT_LOCK_ID, OPERATIONAL};
use common::EVM_ADDRESS_LEN;

/// Validated-by-runtime inputs for a new lock.
#[derive(Debug, Clone)]
pub struct NewLock {
    pub depositor: Addr,
    pub amount: Uint128,
    pub destination_address: Binary,
    pub target_chain_id: u64,
}

/// Terminal transition requested for a lock.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Oracle reported the destination-chain action; custody moves to the
    /// operational balance.
    Confirm { dest_tx_hash: Binary },
    /// Depositor reclaims the funds after the timeout.
    Refund,
}

impl Transition {
    pub fn target_status(&self) -> LockStatus {
        match self {
            Transition::Confirm { .. } => LockStatus::Confirmed,
            Transition::Refund => LockStatus::Refunded,
        }
    }
}

/// Create a new `Locked` record and add its amount to custody.
pub fn create(
    storage: &mut dyn Storage,
    new_lock: NewLock,
    now: u64,
) -> Result<LockRecord, ContractError> {
    if new_lock.amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }

    if new_lock.destination_address.len() != EVM_ADDRESS_LEN {
        return Err(ContractError::InvalidDestination {
            got: new_lock.destination_address.len(),
        });
    }

    if !CHAINS.has(storage, new_lock.target_chain_id) {
        return Err(ContractError::UnsupportedChain {
            chain_id: new_lock.target_chain_id,
        });
    }

    let id = NEXT_LOCK_ID.load(storage)?;
    NEXT_LOCK_ID.save(storage, &(id + 1))?;

    let custody = CUSTODY.load(storage)?;
    CUSTODY.save(storage, &custody.checked_add(new_lock.amount)?)?;

    let record = LockRecord {
        id,
        depositor: new_lock.depositor,
        amount: new_lock.amount,
        destination_address: new_lock.destination_address,
        target_chain_id: new_lock.target_chain_id,
        status: LockStatus::Locked,
        created_at: now,
        dest_tx_hash: None,
        finalized_at: None,
    };
    LOCKS.save(storage, id, &record)?;

    Ok(record)
}

/// Owned copy of a record; callers cannot mutate storage through it.
pub fn get(storage: &dyn Storage, id: u64) -> StdResult<Option<LockRecord>> {
    LOCKS.may_load(storage, id)
}

/// Like [`get`], but a missing record is a `NotFound` rejection.
pub fn must_get(storage: &dyn Storage, id: u64) -> Result<LockRecord, ContractError> {
    get(storage, id)?.ok_or(ContractError::NotFound { lock_id: id })
}

/// Move a `Locked` record into a terminal status and release its custody.
pub fn transition(
    storage: &mut dyn Storage,
    id: u64,
    transition: Transition,
    now: u64,
) -> Result<LockRecord, ContractError> {
    let mut record = must_get(storage, id)?;

    if record.status.is_terminal() {
        return Err(ContractError::AlreadyFinalized {
            lock_id: id,
            status: record.status,
        });
    }

    let custody = CUSTODY.load(storage)?;
    CUSTODY.save(storage, &custody.checked_sub(record.amount)?)?;

    record.status = transition.target_status();
    record.finalized_at = Some(now);

    if let Transition::Confirm { dest_tx_hash } = transition {
        record.dest_tx_hash = Some(dest_tx_hash);
        let operational = OPERATIONAL.load(storage)?;
        OPERATIONAL.save(storage, &operational.checked_add(record.amount)?)?;
    }

    LOCKS.save(storage, id, &record)?;

    Ok(record)
}

/// Paginated records in ascending id order.
pub fn range(
    storage: &dyn Storage,
    start_after: Option<u64>,
    limit: usize,
) -> StdResult<Vec<LockRecord>> {
    let start = start_after.map(Bound::exclusive);
    LOCKS
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, record)| record))
        .collect()
}

pub fn custody(storage: &dyn Storage) -> StdResult<Uint128> {
    CUSTODY.load(storage)
}

pub fn operational(storage: &dyn Storage) -> StdResult<Uint128> {
    OPERATIONAL.load(storage)
}

/// Remove `amount` from the operational balance. Custody is untouched.
pub fn debit_operational(storage: &mut dyn Storage, amount: Uint128) -> Result<(), ContractError> {
    let available = OPERATIONAL.load(storage)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }
    if amount > available {
        return Err(ContractError::InsufficientOperationalBalance {
            available,
            requested: amount,
        });
    }
    OPERATIONAL.save(storage, &(available - amount))?;
    Ok(())
}

/// Initialise counters and balances for a fresh instance.
pub fn init(storage: &mut dyn Storage) -> StdResult<()> {
    NEXT_LOCK_ID.save(storage, &1u64)?;
    CUSTODY.save(storage, &Uint128::zero())?;
    OPERATIONAL.save(storage, &Uint128::zero())
}
