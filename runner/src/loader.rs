//! Reads a batch file.
//!
//! The file holds whitespace separated integers: the number of processes,
//! one `pid arrival burst` triple per process and an optional time quantum.
//!
//! ```text
//! 3
//! 1 0 5
//! 2 1 3
//! 3 2 1
//! 2
//! ```

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use scheduler::ProcessDescriptor;

/// The contents of a batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub processes: Vec<ProcessDescriptor>,
    pub quantum: Option<i64>,
}

pub fn load(path: &Path) -> Result<Workload> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("unable to open {}", path.display()))?;
    parse(&text).with_context(|| format!("invalid batch file {}", path.display()))
}

pub fn parse(text: &str) -> Result<Workload> {
    let mut tokens = text.split_whitespace();
    let mut next = |what: &str| -> Result<Option<i64>> {
        match tokens.next() {
            Some(token) => token
                .parse::<i64>()
                .map(Some)
                .with_context(|| format!("expected {what}, found {token:?}")),
            None => Ok(None),
        }
    };

    let count = next("the number of processes")?.context("the file is empty")?;
    let count = usize::try_from(count)
        .with_context(|| format!("negative number of processes: {count}"))?;

    let mut processes = Vec::new();
    for index in 0..count {
        let mut field = |what: &str| -> Result<i64> {
            next(what)?.with_context(|| {
                format!("process {} of {count} is missing its {what}", index + 1)
            })
        };
        let pid = field("id")?;
        let arrival_time = field("arrival time")?;
        let burst_time = field("burst time")?;
        processes.push(ProcessDescriptor::new(pid, arrival_time, burst_time));
    }

    let quantum = next("the time quantum")?;
    if let Some(extra) = tokens.next() {
        bail!("unexpected trailing input {extra:?}");
    }

    Ok(Workload { processes, quantum })
}
