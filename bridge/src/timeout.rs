//! Refund timeout policy.
//!
//! Heights are unsigned monotonic counters. A height below `created_at`
//! (clock regression) is treated as "not expired" instead of wrapping.

use crate::state::{LockRecord, LockStatus};

/// True iff `record` is still `Locked` and at least `timeout_window` blocks
/// have passed since it was created.
pub fn is_expired(record: &LockRecord, now: u64, timeout_window: u64) -> bool {
    if record.status != LockStatus::Locked {
        return false;
    }
    match now.checked_sub(record.created_at) {
        Some(elapsed) => elapsed >= timeout_window,
        None => false,
    }
}

/// First height at which `record` may be refunded.
pub fn refundable_at(record: &LockRecord, timeout_window: u64) -> u64 {
    record.created_at.saturating_add(timeout_window)
}
