/*!
 * State Transition Table
 * Allowed (current, requested) state pairs, checked by lookup
 */

use super::types::ProcessState;
use crate::core::errors::{SchedResult, SchedulerError};

/// Rows: current state, columns: requested state (Blocked, Ready, Running)
const ALLOWED: [[bool; 3]; 3] = [
    // Blocked -> Ready
    [false, true, false],
    // Ready -> Running
    [false, false, true],
    // Running -> Blocked | Ready
    [true, true, false],
];

/// Look up whether `from -> to` is a legal transition
#[inline(always)]
pub const fn is_allowed(from: ProcessState, to: ProcessState) -> bool {
    ALLOWED[from.index()][to.index()]
}

/// Check a transition, returning the typed error when it is rejected
pub fn check(from: ProcessState, to: ProcessState) -> SchedResult<()> {
    if is_allowed(from, to) {
        Ok(())
    } else {
        Err(SchedulerError::InvalidStateTransition { from, to })
    }
}
