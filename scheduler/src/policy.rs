use std::fmt::{self, Display};
use std::num::NonZeroUsize;

use crate::ConfigError;

/// The scheduling policy a caller picks for one run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,

    /// Preemptive Shortest-Remaining-Time-First.
    Srtf,

    /// Round robin, preempting after `quantum` time units.
    RoundRobin { quantum: NonZeroUsize },
}

impl Policy {
    /// Looks a policy up by name.
    ///
    /// Accepted names are `fcfs`, `srtf`, `rr` / `round-robin` and the menu
    /// numbers `1`, `2` and `3`. The quantum is only needed, and only
    /// checked, for round robin.
    pub fn from_name(name: &str, quantum: Option<i64>) -> Result<Policy, ConfigError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "1" | "fcfs" => Ok(Policy::Fcfs),
            "2" | "srtf" => Ok(Policy::Srtf),
            "3" | "rr" | "round-robin" | "round_robin" => {
                let quantum = quantum.ok_or(ConfigError::MissingQuantum)?;
                Ok(Policy::RoundRobin {
                    quantum: self::quantum(quantum)?,
                })
            }
            _ => Err(ConfigError::UnknownPolicy(name.to_owned())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "fcfs",
            Policy::Srtf => "srtf",
            Policy::RoundRobin { .. } => "round-robin",
        }
    }
}

impl Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::RoundRobin { quantum } => write!(f, "{} (quantum {})", self.name(), quantum),
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// Validates a round robin time quantum.
pub fn quantum(quantum: i64) -> Result<NonZeroUsize, ConfigError> {
    usize::try_from(quantum)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or(ConfigError::InvalidQuantum(quantum))
}
