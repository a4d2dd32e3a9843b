use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use log::{info, warn};
use processor::{format_report, Processor};
use scheduler::{Batch, Policy};

mod config;
mod loader;
mod logger;

use config::Config;

fn main() -> Result<()> {
    if let Err(err) = logger::init() {
        eprintln!("unable to install the logger: {err}");
    }

    let config = Config::from_env()?;
    let workload = loader::load(&config.path)?;
    info!(
        "loaded {} processes from {}",
        workload.processes.len(),
        config.path.display()
    );

    let quantum = config.quantum.or(workload.quantum);
    let choice = match config.policy {
        Some(policy) => policy,
        None => choose()?,
    };
    let policy = Policy::from_name(&choice, quantum)?;
    let batch = Batch::new(workload.processes)?;
    if batch.is_empty() {
        warn!("the batch has no processes");
    }

    let report = Processor::run(policy, &batch);
    println!("{}", format_report(&report));
    Ok(())
}

/// Asks for the policy on stdin.
fn choose() -> Result<String> {
    let mut stdout = io::stdout();
    write!(
        stdout,
        "Choose a scheduling algorithm:\n1. FCFS\n2. SRTF\n3. Round Robin\n> "
    )?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("unable to read the choice")?;
    Ok(line.trim().to_string())
}

// Do not delete this line
#[cfg(test)]
mod tests;
