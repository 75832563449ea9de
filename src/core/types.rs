/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Priority level (lower value is scheduled first)
pub type Priority = i32;

/// Simulated clock tick
///
/// Signed so that the reference clock model can report the negative
/// waiting times it produces for late arrivals.
pub type SimTime = i64;

/// Largest id accepted for user-entered processes (exclusive)
pub const MAX_PID: i64 = i32::MAX as i64;

/// Largest arrival or burst time accepted for a process (inclusive)
pub const MAX_TIME: SimTime = i32::MAX as SimTime;
