/*!
 * Non-Preemptive Selection
 * Shortest-job-first and priority scheduling
 *
 * Both share one control flow: with the registry sorted by their key,
 * repeatedly pick the first unfinished process that has arrived and run it
 * to completion.
 */

use super::config::ClockModel;
use super::context::{next_arrival, waiting_peers, RunContext};
use super::traits::Algorithm;
use super::types::Policy;
use crate::process::{Process, ProcessState};
use tracing::debug;

/// Shortest job first (registry ordered by burst time)
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestJobFirst;

impl Algorithm for ShortestJobFirst {
    fn policy(&self) -> Policy {
        Policy::Sjf
    }

    fn execute(&self, processes: &mut [Process], ctx: &mut RunContext) {
        run_to_completion(processes, ctx);
    }
}

/// Priority scheduling (registry ordered by priority, lower first)
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityFirst;

impl Algorithm for PriorityFirst {
    fn policy(&self) -> Policy {
        Policy::Priority
    }

    fn execute(&self, processes: &mut [Process], ctx: &mut RunContext) {
        run_to_completion(processes, ctx);
    }
}

fn run_to_completion(processes: &mut [Process], ctx: &mut RunContext) {
    let model = ctx.clock_model();
    let mut current_time = 0;
    let mut prev_finish = 0;
    let mut remaining = processes.len();

    while remaining > 0 {
        let Some(index) = processes.iter().position(|p| p.is_eligible(current_time)) else {
            // CPU idle until the next arrival
            match next_arrival(processes) {
                Some(arrival) => {
                    debug!(from = current_time, to = arrival, "idle");
                    current_time = arrival;
                    continue;
                }
                None => break,
            }
        };

        let arrival = processes[index].arrival_time;
        let start = match model {
            ClockModel::Reference => prev_finish,
            ClockModel::Corrected => current_time,
        };
        let peers = waiting_peers(processes, index, current_time);

        let process = &mut processes[index];
        let burst = process.burst_time;

        ctx.clock = start;
        ctx.transition(process, ProcessState::Running);
        ctx.record_slice(process.id, start, burst, peers);

        process.run_for(burst);
        let finish = start + burst;
        process.complete(finish);
        process.waiting_time = ctx.waiting(start - arrival);

        ctx.clock = finish;
        ctx.transition(process, ProcessState::Blocked);

        prev_finish = finish;
        current_time = match model {
            // Legacy formula adds the absolute finish time, so the
            // eligibility clock runs ahead of the real one.
            ClockModel::Reference => current_time + finish,
            ClockModel::Corrected => finish,
        };
        remaining -= 1;
    }
}
