/*!
 * JSON Sink
 * One JSON document per line
 */

use super::OutputSink;
use crate::process::Process;
use crate::scheduler::{RunReport, RunSummary};
use serde::Serialize;
use serde_json::json;
use std::io::{self, Write};

pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line<T: Serialize + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, value)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

impl<W: Write> OutputSink for JsonSink<W> {
    fn report(&mut self, report: &RunReport) -> io::Result<()> {
        self.line(report)
    }

    fn processes(&mut self, processes: &[Process]) -> io::Result<()> {
        self.line(&json!({ "processes": processes }))
    }

    fn summary(&mut self, summary: Option<&RunSummary>) -> io::Result<()> {
        self.line(&json!({ "summary": summary }))
    }

    fn message(&mut self, message: &str) -> io::Result<()> {
        self.line(&json!({ "message": message }))
    }
}
