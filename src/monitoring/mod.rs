/*!
 * Monitoring
 * Structured tracing and state-transition events for scheduling runs
 */

mod events;
mod tracer;

pub use events::{Slice, TransitionEvent};
pub use tracer::{generate_run_id, init_tracing, RunSpan};
