/*!
 * Round-Robin
 * Cyclic scan granting each arrived process up to one quantum per turn
 */

use super::config::RoundRobinFinish;
use super::context::{next_arrival, RunContext};
use super::traits::Algorithm;
use super::types::{Policy, Quantum};
use crate::process::{Process, ProcessState};
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: Quantum,
}

impl RoundRobin {
    pub fn new(quantum: Quantum) -> Self {
        Self { quantum }
    }
}

impl Algorithm for RoundRobin {
    fn policy(&self) -> Policy {
        Policy::RoundRobin
    }

    fn quantum(&self) -> Option<Quantum> {
        Some(self.quantum)
    }

    fn execute(&self, processes: &mut [Process], ctx: &mut RunContext) {
        let quantum = self.quantum.get();
        let mut remaining = processes.iter().filter(|p| !p.is_terminal()).count();

        while remaining > 0 {
            let mut progressed = false;

            for index in 0..processes.len() {
                let start = ctx.clock;
                if !processes[index].is_eligible(start) {
                    continue;
                }

                let slice = quantum.min(processes[index].remaining());

                // Everyone else who has arrived and is unfinished waits
                // for the whole slice.
                let mut peers = 0;
                for (j, other) in processes.iter_mut().enumerate() {
                    if j != index && other.is_eligible(start) {
                        other.waiting_time += slice;
                        peers += 1;
                    }
                }

                let process = &mut processes[index];
                ctx.transition(process, ProcessState::Running);
                ctx.record_slice(process.id, start, slice, peers);
                process.run_for(slice);
                ctx.clock = start + slice;

                if process.remaining() == 0 {
                    let finish = match ctx.round_robin_finish() {
                        RoundRobinFinish::WaitingPlusBurst => {
                            process.waiting_time + process.burst_time
                        }
                        RoundRobinFinish::Clock => ctx.clock,
                    };
                    process.complete(finish);
                    ctx.transition(process, ProcessState::Blocked);
                    remaining -= 1;
                } else {
                    ctx.transition(process, ProcessState::Ready);
                }
                progressed = true;
            }

            if !progressed {
                match next_arrival(processes) {
                    Some(arrival) => {
                        debug!(from = ctx.clock, to = arrival, "idle");
                        ctx.clock = arrival;
                    }
                    None => break,
                }
            }
        }
    }
}
