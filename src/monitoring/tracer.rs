/*!
 * Run Tracing
 * Structured tracing for scheduling runs using the tracing crate
 *
 * Features:
 * - Run ID generation for correlating events of one scheduling run
 * - JSON-formatted logs for structured parsing
 * - Elapsed wall time recorded when a run span closes
 */

use std::time::Instant;
use tracing::{debug, info, span, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use uuid::Uuid;

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SCHED_TRACE_JSON: Enable JSON output (default: false)
///
/// Logs go to stderr so they never interleave with rendered reports on stdout.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("SCHED_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}

/// Generate a unique run ID for event correlation
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one scheduling run
pub struct RunSpan {
    span: tracing::Span,
    start: Instant,
    run_id: String,
    policy: &'static str,
}

impl RunSpan {
    pub fn new(policy: &'static str, process_count: usize) -> Self {
        let run_id = generate_run_id();

        let span = span!(
            Level::INFO,
            "schedule_run",
            run_id = %run_id,
            policy = policy,
            processes = process_count,
            result = tracing::field::Empty,
            avg_turnaround = tracing::field::Empty,
            avg_waiting = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            run_id,
            policy,
        }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    /// Record the averages of a finished run
    pub fn record_summary(&self, avg_turnaround: f64, avg_waiting: f64) {
        self.span.record("result", "success");
        self.span.record("avg_turnaround", avg_turnaround);
        self.span.record("avg_waiting", avg_waiting);
    }

    /// Record a failed run
    pub fn record_error(&self, error: &str) {
        self.span.record("error", error);
        self.span.record("result", "error");
    }
}

impl Drop for RunSpan {
    fn drop(&mut self) {
        let _entered = self.span.enter();
        debug!(
            run_id = %self.run_id,
            policy = self.policy,
            elapsed_us = self.start.elapsed().as_micros() as u64,
            "run span closed"
        );
    }
}
