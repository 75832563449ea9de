/*!
 * Scheduling Algorithm Trait
 * Interface every policy implementation plugs into
 */

use super::context::RunContext;
use super::types::{Policy, Quantum};
use crate::process::Process;

/// A scheduling policy implementation
///
/// The scheduler resets the registry and orders it by
/// `policy().sort_key()` before calling [`execute`](Algorithm::execute),
/// so implementations see a fresh, sorted slice and only drive it to
/// completion.
pub trait Algorithm {
    fn policy(&self) -> Policy;

    /// Round-robin quantum, if the policy uses one
    fn quantum(&self) -> Option<Quantum> {
        None
    }

    /// Drive every process to the terminal state
    fn execute(&self, processes: &mut [Process], ctx: &mut RunContext);
}
