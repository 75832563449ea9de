/*!
 * Shell Tests
 * Command sequences driven through the rendered output sinks
 */

use cpu_sched_sim::{Flow, JsonSink, Scheduler, Shell, TableSink};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Writer whose buffer outlives the boxed sink
#[derive(Clone, Default)]
struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    fn text(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn run_script(shell: &mut Shell, script: &[&str]) -> Flow {
    for line in script {
        if shell.execute_line(line).unwrap() == Flow::Exit {
            return Flow::Exit;
        }
    }
    Flow::Continue
}

#[test]
fn test_table_session() {
    let buf = SharedBuf::default();
    let mut shell = Shell::new(Scheduler::default(), Box::new(TableSink::new(buf.clone())));

    let flow = run_script(&mut shell, &["summary", "sjf", "summary", "exit", "fcfs"]);
    assert_eq!(flow, Flow::Exit);

    let out = buf.text();
    assert!(out.starts_with("  No data: no run has completed yet\n"));
    assert!(out.contains("  SJF (corrected clock)"));
    assert!(out.contains("Average turnaround: 22.33  Average waiting: 12.17  (6 processes)"));
    // nothing after exit
    assert!(!out.contains("FCFS"));
}

#[test]
fn test_error_lines_keep_session_alive() {
    let buf = SharedBuf::default();
    let mut shell = Shell::new(Scheduler::default(), Box::new(TableSink::new(buf.clone())));

    run_script(&mut shell, &["rr 0", "frobnicate", "move 10 -1 0", "rr 4"]);

    let out = buf.text();
    assert!(out.contains("  error: Invalid time quantum: 0 (must be > 0)"));
    assert!(out.contains("  error: Unknown command: frobnicate"));
    assert!(out.contains("  error: Process 10 is Ready, not Blocked"));
    assert!(out.contains("  ROUND_ROBIN (quantum 4, corrected clock)"));
}

#[test]
fn test_json_session() {
    let buf = SharedBuf::default();
    let mut shell = Shell::new(Scheduler::default(), Box::new(JsonSink::new(buf.clone())));

    run_script(
        &mut shell,
        &["create 70 -1 0 2", "priority", "terminate 70", "show", "summary"],
    );

    let lines: Vec<Value> = buf
        .text()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 5);

    assert_eq!(lines[0]["message"], "Created process 70");
    assert_eq!(lines[1]["policy"], "priority");
    assert_eq!(lines[1]["processes"].as_array().unwrap().len(), 7);
    assert_eq!(lines[1]["processes"][0]["id"], 70);
    assert_eq!(lines[2]["message"], "Terminated process 70");
    assert_eq!(lines[3]["processes"].as_array().unwrap().len(), 6);
    assert_eq!(lines[4]["summary"]["process_count"], 7);
}

/// Writer that behaves like a closed pipe
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::ErrorKind::BrokenPipe.into())
    }
}

#[test]
fn test_closed_output_stops_session() {
    for sink in [
        Box::new(TableSink::new(ClosedPipe)) as Box<dyn cpu_sched_sim::OutputSink>,
        Box::new(JsonSink::new(ClosedPipe)),
    ] {
        let mut shell = Shell::new(Scheduler::default(), sink);
        assert!(shell.execute_line("fcfs").is_err());
        assert!(shell.execute_line("frobnicate").is_err());
        assert_eq!(shell.execute_line("").unwrap(), Flow::Continue);
    }
}
