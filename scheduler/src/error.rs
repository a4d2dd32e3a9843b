use std::error::Error;
use std::fmt::{self, Display};

/// A batch or a policy that cannot be simulated.
///
/// These are reported before any simulation starts, there is never a
/// partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A process arrives before time 0.
    NegativeArrival { pid: i64, arrival_time: i64 },

    /// A process does not need any CPU time.
    NonPositiveBurst { pid: i64, burst_time: i64 },

    /// Two processes of the same batch share a PID.
    DuplicatePid(i64),

    /// The batch would run past the largest representable time.
    HorizonOverflow,

    /// Round robin was selected without a quantum.
    MissingQuantum,

    /// The round robin quantum is zero or negative.
    InvalidQuantum(i64),

    /// The policy name does not match any known policy.
    UnknownPolicy(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NegativeArrival { pid, arrival_time } => {
                write!(f, "process {pid} has a negative arrival time ({arrival_time})")
            }
            ConfigError::NonPositiveBurst { pid, burst_time } => {
                write!(f, "process {pid} has a non-positive burst time ({burst_time})")
            }
            ConfigError::DuplicatePid(pid) => {
                write!(f, "process id {pid} appears more than once")
            }
            ConfigError::HorizonOverflow => {
                write!(f, "the batch does not finish within the representable time")
            }
            ConfigError::MissingQuantum => {
                write!(f, "round robin needs a time quantum")
            }
            ConfigError::InvalidQuantum(quantum) => {
                write!(f, "the time quantum must be positive, got {quantum}")
            }
            ConfigError::UnknownPolicy(name) => {
                write!(f, "unknown scheduling policy `{name}`")
            }
        }
    }
}

impl Error for ConfigError {}
