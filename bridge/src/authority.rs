//! Authorization policy for oracle confirmations and refunds.
//!
//! The state machine only ever asks an [`AuthorityPolicy`] whether a caller
//! may confirm or refund; it never compares addresses itself. The shipped
//! [`SingleOracle`] policy trusts the configured admin. A quorum or
//! threshold-signature policy can replace it without touching the handlers.

use cosmwasm_std::Addr;

use crate::state::{Config, LockRecord};

/// Capability checks consulted by the bridge state machine.
pub trait AuthorityPolicy {
    /// Whether `caller` may report a destination-chain confirmation.
    fn is_oracle(&self, caller: &Addr) -> bool;

    /// Whether `caller` owns `record` and may reclaim it.
    fn is_owner(&self, caller: &Addr, record: &LockRecord) -> bool {
        caller == record.depositor
    }
}

/// Single trusted oracle: the contract admin.
#[derive(Debug, Clone, Copy)]
pub struct SingleOracle<'a> {
    admin: &'a Addr,
}

impl<'a> SingleOracle<'a> {
    pub fn new(admin: &'a Addr) -> Self {
        Self { admin }
    }
}

impl<'a> From<&'a Config> for SingleOracle<'a> {
    fn from(config: &'a Config) -> Self {
        Self::new(&config.admin)
    }
}

impl AuthorityPolicy for SingleOracle<'_> {
    fn is_oracle(&self, caller: &Addr) -> bool {
        caller == self.admin
    }
}
