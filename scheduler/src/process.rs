use crate::{Pid, ProcessState, Time};

/// The simulation state of a single process.
///
/// Records are created fresh from a [`crate::Batch`] for every run and are
/// only mutated by the simulation driving that run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRecord {
    pid: Pid,
    index: usize,
    arrival_time: Time,
    burst_time: Time,
    remaining_time: Time,
    state: ProcessState,
}

impl ProcessRecord {
    pub(crate) fn new(pid: Pid, index: usize, arrival_time: Time, burst_time: Time) -> Self {
        ProcessRecord {
            pid,
            index,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            state: ProcessState::Pending,
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    /// Position of the process in the batch as it was supplied.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn arrival_time(&self) -> Time {
        self.arrival_time
    }

    pub fn burst_time(&self) -> Time {
        self.burst_time
    }

    pub fn remaining_time(&self) -> Time {
        self.remaining_time
    }

    pub fn state(&self) -> ProcessState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: ProcessState) {
        self.state = state;
    }

    /// Runs the process for at most `units` and returns the time actually used.
    pub(crate) fn run(&mut self, units: Time) -> Time {
        let used = units.min(self.remaining_time);
        self.remaining_time -= used;
        used
    }

    /// Returns the final metrics, available once the process has finished.
    pub fn metrics(&self) -> Option<ProcessMetrics> {
        match self.state {
            ProcessState::Finished { completion } => {
                let turnaround_time = completion - self.arrival_time;
                Some(ProcessMetrics {
                    pid: self.pid,
                    arrival_time: self.arrival_time,
                    burst_time: self.burst_time,
                    completion_time: completion,
                    turnaround_time,
                    waiting_time: turnaround_time - self.burst_time,
                })
            }
            _ => None,
        }
    }
}

/// Per-process results of a finished simulation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub arrival_time: Time,
    pub burst_time: Time,
    pub completion_time: Time,

    /// `completion_time - arrival_time`
    pub turnaround_time: Time,

    /// `turnaround_time - burst_time`
    pub waiting_time: Time,
}
