/*!
 * Shell Commands
 * Parse one input line into a typed command
 */

use crate::core::types::Pid;
use crate::process::{ProcessSpec, ProcessState};
use crate::scheduler::Policy;
use miette::Diagnostic;
use std::str::FromStr;
use thiserror::Error;

/// Command parse errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum CommandError {
    #[error("Empty command")]
    #[diagnostic(code(shell::empty))]
    Empty,

    #[error("Unknown command: {0}")]
    #[diagnostic(code(shell::unknown), help("Type `help` for the list of commands."))]
    Unknown(String),

    #[error("`{command}` is missing <{argument}>")]
    #[diagnostic(code(shell::missing_argument), help("Type `help` for command usage."))]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("`{command}` takes no more than {max} arguments")]
    #[diagnostic(code(shell::too_many_arguments))]
    TooManyArguments { command: &'static str, max: usize },

    #[error("<{argument}> must be an integer, got '{value}'")]
    #[diagnostic(code(shell::invalid_number))]
    InvalidNumber {
        argument: &'static str,
        value: String,
    },

    #[error("Invalid state code '{0}'")]
    #[diagnostic(
        code(shell::invalid_state),
        help("States are Blocked = -1, Ready = 0, Running = 1.")
    )]
    InvalidState(String),
}

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run a policy (round-robin with the configured quantum)
    Run(Policy),
    /// Round-robin with an explicit quantum, validated by the scheduler
    RoundRobin(i64),
    Show,
    Summary,
    Create(ProcessSpec),
    Move {
        id: Pid,
        from: ProcessState,
        to: ProcessState,
    },
    Terminate(Pid),
    /// Reset the live set from the baseline
    Reset,
    /// Restore the canonical seed set
    Seed,
    Help,
    Exit,
}

pub const HELP: &str = "\
commands:
  fcfs | sjf | priority         run a policy
  rr [quantum]                  run round-robin (default quantum if omitted)
  show                          print the process table
  summary                       print the last run's averages
  create <id> <prio> <arrival> <burst>
  move <id> <from> <to>         manual state change (-1 blocked, 0 ready, 1 running)
  terminate <id>                remove a process
  reset                         zero all derived fields
  seed                          restore the canonical process set
  help | exit";

struct Args<'a> {
    command: &'static str,
    words: std::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn next_raw(&mut self, argument: &'static str) -> Result<&'a str, CommandError> {
        self.words.next().ok_or(CommandError::MissingArgument {
            command: self.command,
            argument,
        })
    }

    fn int(&mut self, argument: &'static str) -> Result<i64, CommandError> {
        let raw = self.next_raw(argument)?;
        raw.parse().map_err(|_| CommandError::InvalidNumber {
            argument,
            value: raw.to_string(),
        })
    }

    fn pid(&mut self, argument: &'static str) -> Result<Pid, CommandError> {
        let raw = self.next_raw(argument)?;
        raw.parse().map_err(|_| CommandError::InvalidNumber {
            argument,
            value: raw.to_string(),
        })
    }

    fn state(&mut self, argument: &'static str) -> Result<ProcessState, CommandError> {
        let raw = self.next_raw(argument)?;
        raw.parse::<i64>()
            .ok()
            .and_then(ProcessState::from_code)
            .ok_or_else(|| CommandError::InvalidState(raw.to_string()))
    }

    fn finish(mut self, max: usize) -> Result<(), CommandError> {
        match self.words.next() {
            Some(_) => Err(CommandError::TooManyArguments {
                command: self.command,
                max,
            }),
            None => Ok(()),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(CommandError::Empty)?.to_lowercase();

        let args = |command: &'static str| Args {
            command,
            words: words.clone(),
        };

        let command = match head.as_str() {
            "rr" | "rrs" | "round_robin" => {
                let mut a = args("rr");
                if a.words.clone().next().is_none() {
                    Command::Run(Policy::RoundRobin)
                } else {
                    let quantum = a.int("quantum")?;
                    a.finish(1)?;
                    Command::RoundRobin(quantum)
                }
            }
            "show" | "ps" | "list" => {
                args("show").finish(0)?;
                Command::Show
            }
            "summary" | "avg" => {
                args("summary").finish(0)?;
                Command::Summary
            }
            "create" | "new" => {
                let mut a = args("create");
                let spec = ProcessSpec::new(
                    a.int("id")?,
                    a.int("priority")?
                        .try_into()
                        .map_err(|_| CommandError::InvalidNumber {
                            argument: "priority",
                            value: "out of range".to_string(),
                        })?,
                    a.int("arrival")?,
                    a.int("burst")?,
                );
                a.finish(4)?;
                Command::Create(spec)
            }
            "move" | "schedule" => {
                let mut a = args("move");
                let id = a.pid("id")?;
                let from = a.state("from")?;
                let to = a.state("to")?;
                a.finish(3)?;
                Command::Move { id, from, to }
            }
            "terminate" | "kill" | "rm" => {
                let mut a = args("terminate");
                let id = a.pid("id")?;
                a.finish(1)?;
                Command::Terminate(id)
            }
            "reset" => {
                args("reset").finish(0)?;
                Command::Reset
            }
            "seed" => {
                args("seed").finish(0)?;
                Command::Seed
            }
            "help" | "?" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            other => match other.parse::<Policy>() {
                Ok(policy) => Command::Run(policy),
                Err(_) => return Err(CommandError::Unknown(other.to_string())),
            },
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_commands() {
        assert_eq!("fcfs".parse(), Ok(Command::Run(Policy::Fcfs)));
        assert_eq!("SJF".parse(), Ok(Command::Run(Policy::Sjf)));
        assert_eq!("pri".parse(), Ok(Command::Run(Policy::Priority)));
        assert_eq!("rr".parse(), Ok(Command::Run(Policy::RoundRobin)));
        assert_eq!("rr 4".parse(), Ok(Command::RoundRobin(4)));
        assert_eq!("rr -1".parse(), Ok(Command::RoundRobin(-1)));
    }

    #[test]
    fn test_create() {
        assert_eq!(
            "create 70 3 1 5".parse(),
            Ok(Command::Create(ProcessSpec::new(70, 3, 1, 5)))
        );
        assert_eq!(
            "create 70 3 1".parse::<Command>(),
            Err(CommandError::MissingArgument {
                command: "create",
                argument: "burst"
            })
        );
        assert_eq!(
            "create 70 3 1 x".parse::<Command>(),
            Err(CommandError::InvalidNumber {
                argument: "burst",
                value: "x".to_string()
            })
        );
    }

    #[test]
    fn test_move() {
        assert_eq!(
            "move 10 0 1".parse(),
            Ok(Command::Move {
                id: 10,
                from: ProcessState::Ready,
                to: ProcessState::Running
            })
        );
        assert_eq!(
            "move 10 0 2".parse::<Command>(),
            Err(CommandError::InvalidState("2".to_string()))
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "launch".parse::<Command>(),
            Err(CommandError::Unknown("launch".to_string()))
        );
        assert_eq!(
            "rr 4 5".parse::<Command>(),
            Err(CommandError::TooManyArguments {
                command: "rr",
                max: 1
            })
        );
        assert_eq!(
            "terminate -3".parse::<Command>(),
            Err(CommandError::InvalidNumber {
                argument: "id",
                value: "-3".to_string()
            })
        );
    }
}
