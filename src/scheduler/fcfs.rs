/*!
 * First-Come-First-Serve
 * Run every process to completion in arrival order
 */

use super::config::ClockModel;
use super::context::{waiting_peers, RunContext};
use super::traits::Algorithm;
use super::types::Policy;
use crate::process::{Process, ProcessState};

#[derive(Debug, Clone, Copy, Default)]
pub struct FirstComeFirstServe;

impl Algorithm for FirstComeFirstServe {
    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    fn execute(&self, processes: &mut [Process], ctx: &mut RunContext) {
        let mut prev_finish = 0;

        for index in 0..processes.len() {
            let arrival = processes[index].arrival_time;

            // Reference: start right after the previous finish even if the
            // process has not arrived yet (waiting may go negative).
            let start = match ctx.clock_model() {
                ClockModel::Reference => prev_finish,
                ClockModel::Corrected => prev_finish.max(arrival),
            };
            let peers = waiting_peers(processes, index, start);

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
        }
    }
}
