/*!
 * CPU Scheduling Simulator - Main Entry Point
 *
 * Reads commands from the arguments (`;`-separated) or, with none given,
 * line by line from stdin.
 */

use cpu_sched_sim::{
    init_tracing, sink_for, Flow, OutputFormat, ProcessRegistry, Scheduler, SchedulerConfig,
    Shell,
};
use miette::{miette, IntoDiagnostic, WrapErr};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> miette::Result<()> {
    init_tracing();

    let config = SchedulerConfig::from_env();

    let registry = match std::env::var("SCHED_PROCESS_FILE") {
        Ok(path) => ProcessRegistry::load_json(&path)
            .wrap_err_with(|| format!("Failed to load workload from {}", path))?,
        Err(_) => ProcessRegistry::seeded(),
    };

    let format = match std::env::var("SCHED_OUTPUT") {
        Ok(value) => value.parse::<OutputFormat>().map_err(|e| miette!(e))?,
        Err(_) => OutputFormat::default(),
    };

    let scheduler = Scheduler::with_registry(registry, config);
    let mut shell = Shell::new(scheduler, sink_for(format, std::io::stdout()));

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        for line in args.join(" ").split(';') {
            let flow = shell
                .execute_line(line)
                .into_diagnostic()
                .wrap_err("Failed to write output")?;
            if flow == Flow::Exit {
                break;
            }
        }
        return Ok(());
    }

    info!("Reading commands from stdin");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .into_diagnostic()
        .wrap_err("Failed to read stdin")?
    {
        let flow = shell
            .execute_line(&line)
            .into_diagnostic()
            .wrap_err("Failed to write output")?;
        if flow == Flow::Exit {
            break;
        }
    }

    info!("Simulator shutting down");
    Ok(())
}
