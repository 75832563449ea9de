/*!
 * Process Module
 * Process records, registry, ordering and state transitions
 */

pub mod ordering;
pub mod registry;
pub mod seed;
pub mod transitions;
pub mod types;

// Re-export for convenience
pub use ordering::SortKey;
pub use registry::ProcessRegistry;
pub use seed::seed_processes;
pub use types::{Process, ProcessSpec, ProcessState};
