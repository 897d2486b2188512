//! Command-line entry point.
//!
//! Loads a CSV process file and runs the selected scheduling policies over
//! it, printing one rendered report per policy (or JSON with `--json`).
//! Load and configuration errors are fatal and reported before any
//! simulation runs.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use sched_sim::error::{Error, Result};
use sched_sim::loader;
use sched_sim::models::Process;
use sched_sim::policy::{
    FcfsScheduler, NonPreemptiveScheduler, Policy, PolicyReport, RoundRobinScheduler,
    DEFAULT_QUANTUM,
};
use sched_sim::render;

#[derive(Parser, Debug)]
#[command(name = "sched-sim")]
#[command(about = "Simulate CPU scheduling policies over a CSV process set")]
struct Args {
    /// CSV file with process rows: id,burst,arrival[,priority]
    input: PathBuf,

    /// Policy to simulate
    #[arg(short, long, value_enum, default_value_t = PolicyArg::All)]
    policy: PolicyArg,

    /// Time quantum for round-robin
    #[arg(short, long, default_value_t = DEFAULT_QUANTUM)]
    quantum: i64,

    /// Emit reports as JSON instead of text tables
    #[arg(long)]
    json: bool,
}

/// Policy selection on the command line.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum PolicyArg {
    Fcfs,
    Sjf,
    Priority,
    Rr,
    /// Run every policy over the same input in sequence
    All,
}

impl PolicyArg {
    fn policies(self) -> Vec<Policy> {
        match self {
            Self::Fcfs => vec![Policy::Fcfs],
            Self::Sjf => vec![Policy::Sjf],
            Self::Priority => vec![Policy::Priority],
            Self::Rr => vec![Policy::RoundRobin],
            Self::All => vec![
                Policy::Fcfs,
                Policy::Sjf,
                Policy::Priority,
                Policy::RoundRobin,
            ],
        }
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        log::error!("{e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let processes = loader::load_processes_from_path(&args.input)?;
    log::info!(
        "loaded {} processes from {}",
        processes.len(),
        args.input.display()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for policy in args.policy.policies() {
        let report = simulate(policy, &processes, args.quantum)?;
        log::info!("{policy} run complete: {} rows", report.rows.len());

        if args.json {
            let value = serde_json::json!({
                "policy": policy,
                "report": report,
            });
            writeln!(out, "{value:#}").map_err(Error::Io)?;
        } else {
            render::write_report(&mut out, policy.title(), &report).map_err(Error::Io)?;
        }
    }

    Ok(())
}

fn simulate(policy: Policy, processes: &[Process], quantum: i64) -> Result<PolicyReport> {
    Ok(match policy {
        Policy::Fcfs => FcfsScheduler::new().run(processes),
        Policy::Sjf => NonPreemptiveScheduler::shortest_job_first().run(processes),
        Policy::Priority => NonPreemptiveScheduler::by_priority().run(processes),
        Policy::RoundRobin => RoundRobinScheduler::new(quantum)?.run(processes),
    })
}
