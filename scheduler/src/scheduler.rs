use std::fmt::{self, Display};
use std::num::NonZeroUsize;

use crate::ProcessRecord;

/// Simulated time, in time units.
pub type Time = usize;

/// The position of a process in the arrival-ordered process table
/// that the simulation hands to a [`Scheduler`].
pub type Slot = usize;

/// The PID of a process
///
/// PIDs are supplied by the caller and only have to be unique within a batch.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Pid(i64);

impl Pid {
    pub fn new(pid: i64) -> Pid {
        Pid(pid)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the simulation did at one step.
///
/// Every step of [`crate::simulate`] produces one decision; they are
/// emitted through the `log` facade at debug level.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SchedulingDecision {
    /// The process with PID `pid` ran from `start` for `timeslice` time units.
    Run {
        pid: Pid,
        start: Time,
        timeslice: Time,
    },

    /// Nothing was ready, the CPU stayed idle until the next arrival.
    Idle { from: Time, until: Time },

    /// There are no more processes to schedule.
    Done,
}

impl Display for SchedulingDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulingDecision::Run {
                pid,
                start,
                timeslice,
            } => {
                write!(f, "Run {} at {} for {} units", pid, start, timeslice)
            }
            SchedulingDecision::Idle { from, until } => {
                write!(f, "Idle from {} until {}", from, until)
            }
            SchedulingDecision::Done => {
                write!(f, "Done, no more processes")
            }
        }
    }
}

/// The process a scheduler picked and how long it may keep the CPU.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dispatch {
    /// The slot of the process to run.
    pub slot: Slot,

    /// The maximum number of time units the process may run.
    ///
    /// [`None`] means the process runs until it finishes.
    pub timeslice: Option<NonZeroUsize>,
}

impl Dispatch {
    pub fn to_completion(slot: Slot) -> Dispatch {
        Dispatch {
            slot,
            timeslice: None,
        }
    }

    pub fn for_timeslice(slot: Slot, timeslice: NonZeroUsize) -> Dispatch {
        Dispatch {
            slot,
            timeslice: Some(timeslice),
        }
    }
}

/// The reason that a dispatched process has stopped and the simulation
/// has called the scheduler.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum StopReason {
    /// The timeslice allocated for the process has expired and the process
    /// has been preempted. It still has work left.
    Expired,

    /// The process ran its whole burst and will never be scheduled again.
    Exited,
}

impl Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::Expired => write!(f, "Expired"),
            StopReason::Exited => write!(f, "Exited"),
        }
    }
}

/// The trait that any scheduling policy has to implement.
///
/// The simulation owns the clock and the process table; a scheduler only
/// keeps its own ready structure and answers dispatch questions.
pub trait Scheduler: Send {
    /// A short human readable name of the policy.
    fn name(&self) -> &'static str;

    /// The process in `slot` has arrived and is ready to run.
    ///
    /// Arrivals are admitted in arrival order, ties in input order.
    fn admit(&mut self, slot: Slot);

    /// Returns the process that runs next, or [`None`] when nothing is ready.
    fn next(&mut self, processes: &[ProcessRecord]) -> Option<Dispatch>;

    /// The scheduler is informed about the stopping of the process in `slot`
    /// and the reason.
    fn stop(&mut self, slot: Slot, reason: StopReason);
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn admit(&mut self, slot: Slot) {
        (**self).admit(slot)
    }

    fn next(&mut self, processes: &[ProcessRecord]) -> Option<Dispatch> {
        (**self).next(processes)
    }

    fn stop(&mut self, slot: Slot, reason: StopReason) {
        (**self).stop(slot, reason)
    }
}

/// The state of a process.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ProcessState {
    /// The process has not arrived yet.
    Pending,

    /// The process is ready to be scheduled.
    Ready,

    /// The process has run its whole burst.
    Finished {
        /// The time at which the last unit of work completed.
        completion: Time,
    },
}

impl Display for ProcessState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessState::Pending => write!(f, "PENDING"),
            ProcessState::Ready => write!(f, "READY"),
            ProcessState::Finished { completion } => write!(f, "FINISHED {}", completion),
        }
    }
}
