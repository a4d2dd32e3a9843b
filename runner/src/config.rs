use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_PROCESSES: &str = "processes.txt";

/// Settings of one run, from the command line and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The policy name, [`None`] if the user has to be asked.
    pub policy: Option<String>,

    /// The batch file.
    pub path: PathBuf,

    /// Overrides the quantum found in the batch file.
    pub quantum: Option<i64>,
}

impl Config {
    /// `runner [policy] [file]`, with `PROCESSES` and `QUANTUM` as fallbacks.
    pub fn from_env() -> Result<Config> {
        let mut args = env::args().skip(1);
        let policy = args.next();
        let path = args
            .next()
            .or_else(|| env::var("PROCESSES").ok())
            .unwrap_or(DEFAULT_PROCESSES.to_string());
        let quantum = match env::var("QUANTUM") {
            Ok(quantum) => Some(
                quantum
                    .trim()
                    .parse::<i64>()
                    .with_context(|| format!("QUANTUM is not an integer: {quantum:?}"))?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            policy,
            path: PathBuf::from(path),
            quantum,
        })
    }
}
