/*!
 * Table Sink
 * Aligned plain-text tables for terminals and logs
 */

use super::OutputSink;
use crate::process::Process;
use crate::scheduler::{RunReport, RunSummary};
use std::io::{self, Write};

const RULE_WIDTH: usize = 86;

pub struct TableSink<W: Write> {
    writer: W,
}

impl<W: Write> TableSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn rule(&mut self) -> io::Result<()> {
        writeln!(self.writer, "  {}", "=".repeat(RULE_WIDTH))
    }

    fn table(&mut self, processes: &[Process]) -> io::Result<()> {
        self.rule()?;
        writeln!(
            self.writer,
            "  | {:<8} | {:<5} | {:<8} | {:<7} | {:<5} | {:<6} | {:<10} | {:<7} |",
            "ID", "STATE", "PRIORITY", "ARRIVAL", "BURST", "FINISH", "TURNAROUND", "WAITING"
        )?;
        self.rule()?;
        for p in processes {
            writeln!(
                self.writer,
                "  | {:<8} | {:<5} | {:<8} | {:<7} | {:<5} | {:<6} | {:<10} | {:<7} |",
                p.id,
                p.state.code(),
                p.priority,
                p.arrival_time,
                p.burst_time,
                p.finish_time,
                p.turnaround_time,
                p.waiting_time
            )?;
        }
        self.rule()
    }

    fn averages(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(
            self.writer,
            "  Average turnaround: {:.2}  Average waiting: {:.2}  ({} processes)",
            summary.average_turnaround, summary.average_waiting, summary.process_count
        )
    }
}

impl<W: Write> OutputSink for TableSink<W> {
    fn report(&mut self, report: &RunReport) -> io::Result<()> {
        match report.quantum {
            Some(q) => writeln!(
                self.writer,
                "  {} (quantum {}, {} clock)",
                report.policy.as_str().to_uppercase(),
                q.get(),
                report.clock_model.as_str()
            )?,
            None => writeln!(
                self.writer,
                "  {} ({} clock)",
                report.policy.as_str().to_uppercase(),
                report.clock_model.as_str()
            )?,
        }

        for event in &report.events {
            writeln!(self.writer, "    {}", event)?;
        }

        let gantt: Vec<String> = report
            .timeline
            .iter()
            .map(|s| format!("[{}-{} P{}]", s.start, s.end(), s.pid))
            .collect();
        writeln!(self.writer, "  Timeline: {}", gantt.join(" "))?;

        self.table(&report.processes)?;
        self.averages(&report.summary)?;
        self.writer.flush()
    }

    fn processes(&mut self, processes: &[Process]) -> io::Result<()> {
        self.table(processes)?;
        self.writer.flush()
    }

    fn summary(&mut self, summary: Option<&RunSummary>) -> io::Result<()> {
        match summary {
            Some(summary) => self.averages(summary)?,
            None => writeln!(self.writer, "  No data: no run has completed yet")?,
        }
        self.writer.flush()
    }

    fn message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "  {}", message)?;
        self.writer.flush()
    }
}
