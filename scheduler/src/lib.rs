//! A CPU scheduling simulation library.
//!
//! This library simulates classic uniprocessor scheduling policies over a
//! batch of processes known in advance. Each run produces a Gantt sequence
//! and the completion metrics of every process.
//!
//! ```rust
//! use scheduler::{Batch, ProcessDescriptor};
//!
//! let batch = Batch::new([
//!     ProcessDescriptor::new(1, 0, 5),
//!     ProcessDescriptor::new(2, 1, 3),
//! ])
//! .unwrap();
//!
//! let result = scheduler::fcfs(&batch);
//! assert_eq!(result.processes[1].completion_time, 8);
//! ```
//!

use std::num::NonZeroUsize;

mod batch;
mod error;
mod policy;
mod process;
mod scheduler;
mod simulation;

pub mod schedulers;

pub use crate::batch::{Batch, ProcessDescriptor};
pub use crate::error::ConfigError;
pub use crate::policy::{quantum, Policy};
pub use crate::process::{ProcessMetrics, ProcessRecord};
pub use crate::scheduler::{
    Dispatch, Pid, ProcessState, Scheduler, SchedulingDecision, Slot, StopReason, Time,
};
pub use crate::simulation::{simulate, GanttStep, ScheduleResult};

use schedulers::{Fcfs, RoundRobin, Srtf};

/// Simulates the batch with a First-Come-First-Served policy.
pub fn fcfs(batch: &Batch) -> ScheduleResult {
    simulate(Fcfs::new(), batch)
}

/// Simulates the batch with a preemptive Shortest-Remaining-Time-First policy.
pub fn srtf(batch: &Batch) -> ScheduleResult {
    simulate(Srtf::new(), batch)
}

/// Simulates the batch with a round robin policy
///
/// * `quantum` - the time quanta that a process can run before it is preempted
pub fn round_robin(batch: &Batch, quantum: NonZeroUsize) -> ScheduleResult {
    simulate(RoundRobin::new(quantum), batch)
}

/// Simulates the batch with the selected policy.
pub fn schedule(policy: Policy, batch: &Batch) -> ScheduleResult {
    match policy {
        Policy::Fcfs => fcfs(batch),
        Policy::Srtf => srtf(batch),
        Policy::RoundRobin { quantum } => round_robin(batch, quantum),
    }
}
