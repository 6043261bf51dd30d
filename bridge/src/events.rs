//! Append-only record of committed lock transitions.
//!
//! Every transition is written twice: into `EVENT_LOG` under a strictly
//! increasing sequence number (queryable by watchers that poll), and as a
//! typed `wasm-bridge_*` event on the transaction (seen by subscribers).
//! The bridge itself never reads the log back; `LOCKS` is the source of truth.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Event, StdResult, Storage, Uint128};

use crate::state::{EVENT_LOG, NEXT_EVENT_SEQ};

/// A committed state transition.
#[cw_serde]
pub enum BridgeEvent {
    Locked {
        lock_id: u64,
        depositor: Addr,
        amount: Uint128,
        target_chain_id: u64,
        destination_address: Binary,
    },
    Confirmed {
        lock_id: u64,
        dest_tx_hash: Binary,
    },
    Refunded {
        lock_id: u64,
        depositor: Addr,
        amount: Uint128,
    },
}

impl BridgeEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeEvent::Locked { .. } => "locked",
            BridgeEvent::Confirmed { .. } => "confirmed",
            BridgeEvent::Refunded { .. } => "refunded",
        }
    }

    pub fn lock_id(&self) -> u64 {
        match self {
            BridgeEvent::Locked { lock_id, .. }
            | BridgeEvent::Confirmed { lock_id, .. }
            | BridgeEvent::Refunded { lock_id, .. } => *lock_id,
        }
    }

    fn to_wasm_event(&self, seq: u64) -> Event {
        let event = Event::new(format!("bridge_{}", self.kind()))
            .add_attribute("seq", seq.to_string())
            .add_attribute("lock_id", self.lock_id().to_string());

        match self {
            BridgeEvent::Locked {
                depositor,
                amount,
                target_chain_id,
                destination_address,
                ..
            } => event
                .add_attribute("depositor", depositor)
                .add_attribute("amount", amount.to_string())
                .add_attribute("target_chain_id", target_chain_id.to_string())
                .add_attribute(
                    "destination_address",
                    format!("0x{}", hex::encode(destination_address)),
                ),
            BridgeEvent::Confirmed { dest_tx_hash, .. } => event.add_attribute(
                "dest_tx_hash",
                format!("0x{}", hex::encode(dest_tx_hash)),
            ),
            BridgeEvent::Refunded {
                depositor, amount, ..
            } => event
                .add_attribute("depositor", depositor)
                .add_attribute("amount", amount.to_string()),
        }
    }
}

/// Log entry as stored and returned by the `Events` query.
#[cw_serde]
pub struct StoredEvent {
    pub seq: u64,
    pub height: u64,
    pub event: BridgeEvent,
}

/// Append `event` to the log and return the matching wasm event.
pub fn emit(storage: &mut dyn Storage, height: u64, event: BridgeEvent) -> StdResult<Event> {
    let seq = NEXT_EVENT_SEQ.may_load(storage)?.unwrap_or_default();
    NEXT_EVENT_SEQ.save(storage, &(seq + 1))?;

    let wasm_event = event.to_wasm_event(seq);
    EVENT_LOG.save(storage, seq, &StoredEvent { seq, height, event })?;

    Ok(wasm_event)
}
