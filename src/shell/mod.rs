/*!
 * Command Shell
 * Line-oriented front end driving the scheduler
 */

pub mod command;

pub use command::{Command, CommandError, HELP};

use crate::core::errors::SchedulerError;
use crate::output::OutputSink;
use crate::scheduler::Scheduler;
use miette::Diagnostic;
use std::io;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Whether the input loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Error, Debug, Diagnostic)]
pub enum ShellError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("Output failed: {0}")]
    #[diagnostic(code(shell::output))]
    Output(#[from] io::Error),
}

/// Owns the scheduler and the sink it reports to
pub struct Shell {
    scheduler: Scheduler,
    sink: Box<dyn OutputSink>,
}

impl Shell {
    pub fn new(scheduler: Scheduler, sink: Box<dyn OutputSink>) -> Self {
        Self { scheduler, sink }
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Parse and run one line. Command failures are reported to the sink;
    /// only a failing sink is returned as an error.
    pub fn execute_line(&mut self, line: &str) -> io::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let result = line
            .parse::<Command>()
            .map_err(ShellError::from)
            .and_then(|command| self.execute(command));

        match result {
            Ok(flow) => Ok(flow),
            Err(ShellError::Output(e)) => {
                error!(error = %e, "Output sink failed");
                Err(e)
            }
            Err(e) => {
                warn!(line, error = %e, "Command failed");
                self.report_error(&e).map_err(|io_err| {
                    error!(error = %io_err, "Output sink failed");
                    io_err
                })?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Flow, ShellError> {
        debug!(?command, "Executing");

        match command {
            Command::Run(policy) => {
                let report = self.scheduler.run(policy)?;
                self.sink.report(&report)?;
            }
            Command::RoundRobin(quantum) => {
                let report = self.scheduler.round_robin(quantum)?;
                self.sink.report(&report)?;
            }
            Command::Show => self.sink.processes(self.scheduler.registry().all())?,
            Command::Summary => self.sink.summary(self.scheduler.last_summary().as_ref())?,
            Command::Create(spec) => {
                let pid = self.scheduler.registry_mut().create(spec)?;
                self.sink.message(&format!("Created process {}", pid))?;
            }
            Command::Move { id, from, to } => {
                self.scheduler.registry_mut().transition(id, from, to)?;
                self.sink
                    .message(&format!("Process {}: {} -> {}", id, from, to))?;
            }
            Command::Terminate(id) => {
                let removed = self.scheduler.registry_mut().terminate(id)?;
                self.sink
                    .message(&format!("Terminated process {}", removed.id))?;
            }
            Command::Reset => {
                self.scheduler.registry_mut().reset();
                self.sink.message("Derived fields cleared")?;
            }
            Command::Seed => {
                self.scheduler.registry_mut().restore_seed();
                self.sink.message("Seed process set restored")?;
            }
            Command::Help => self.sink.message(HELP)?,
            Command::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    fn report_error(&mut self, err: &ShellError) -> io::Result<()> {
        self.sink.message(&format!("error: {}", err))?;
        if let Some(help) = err.help() {
            self.sink.message(&format!("help: {}", help))?;
        }
        Ok(())
    }
}
