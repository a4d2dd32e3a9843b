use std::num::NonZeroUsize;

use log::{debug, info, trace};

use crate::{
    Batch, Dispatch, Pid, ProcessMetrics, ProcessRecord, ProcessState, Scheduler,
    SchedulingDecision, StopReason, Time,
};

/// One uninterrupted run of a process on the CPU.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GanttStep {
    pub pid: Pid,
    pub start: Time,
    pub duration: Time,
}

impl GanttStep {
    pub fn end(&self) -> Time {
        self.start + self.duration
    }
}

/// The outcome of simulating one policy over one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleResult {
    /// Name of the policy that produced the result.
    pub policy: &'static str,

    /// Chronological record of who owned the CPU.
    pub gantt: Vec<GanttStep>,

    /// Final metrics, in the order the processes were supplied.
    pub processes: Vec<ProcessMetrics>,
}

/// Runs `scheduler` over a private copy of `batch` until every process finished.
pub fn simulate<S: Scheduler>(scheduler: S, batch: &Batch) -> ScheduleResult {
    Simulation::new(scheduler, batch).run()
}

struct Simulation<S: Scheduler> {
    scheduler: S,
    processes: Vec<ProcessRecord>,
    gantt: Vec<GanttStep>,
    now: Time,
    // processes[..admitted] have been handed to the scheduler
    admitted: usize,
}

impl<S: Scheduler> Simulation<S> {
    fn new(scheduler: S, batch: &Batch) -> Self {
        Simulation {
            scheduler,
            processes: batch.process_table(),
            gantt: Vec::new(),
            now: 0,
            admitted: 0,
        }
    }

    fn run(mut self) -> ScheduleResult {
        loop {
            let decision = self.step();
            debug!("[{}] {}", self.scheduler.name(), decision);
            if decision == SchedulingDecision::Done {
                break;
            }
        }

        info!(
            "{} finished {} processes at time {} in {} dispatches",
            self.scheduler.name(),
            self.processes.len(),
            self.now,
            self.gantt.len()
        );

        self.processes.sort_by_key(ProcessRecord::index);
        ScheduleResult {
            policy: self.scheduler.name(),
            gantt: self.gantt,
            processes: self
                .processes
                .iter()
                .filter_map(ProcessRecord::metrics)
                .collect(),
        }
    }

    fn step(&mut self) -> SchedulingDecision {
        self.admit(|arrival, now| arrival <= now);

        match self.scheduler.next(&self.processes) {
            Some(dispatch) => self.dispatch(dispatch),
            None => match self.processes.get(self.admitted) {
                Some(process) => {
                    let from = self.now;
                    self.now = process.arrival_time();
                    SchedulingDecision::Idle {
                        from,
                        until: self.now,
                    }
                }
                None => SchedulingDecision::Done,
            },
        }
    }

    fn dispatch(&mut self, dispatch: Dispatch) -> SchedulingDecision {
        let start = self.now;
        let process = &mut self.processes[dispatch.slot];
        let limit = dispatch
            .timeslice
            .map_or(process.remaining_time(), NonZeroUsize::get);

        let used = process.run(limit);
        let pid = process.pid();
        self.now += used;

        let reason = if process.remaining_time() == 0 {
            process.set_state(ProcessState::Finished {
                completion: self.now,
            });
            StopReason::Exited
        } else {
            process.set_state(ProcessState::Ready);
            StopReason::Expired
        };

        self.gantt.push(GanttStep {
            pid,
            start,
            duration: used,
        });

        // Whatever arrived while the process held the CPU queues up ahead of it,
        // arrivals at the exact preemption instant queue up behind it.
        self.admit(|arrival, now| arrival < now);
        self.scheduler.stop(dispatch.slot, reason);
        debug!(
            "[{}] {} {}, now {}",
            self.scheduler.name(),
            pid,
            reason,
            self.processes[dispatch.slot].state()
        );

        SchedulingDecision::Run {
            pid,
            start,
            timeslice: used,
        }
    }

    fn admit<F>(&mut self, arrived: F)
    where
        F: Fn(Time, Time) -> bool,
    {
        while let Some(process) = self.processes.get_mut(self.admitted) {
            if !arrived(process.arrival_time(), self.now) {
                break;
            }
            process.set_state(ProcessState::Ready);
            trace!("t={} admit {}", self.now, process.pid());
            self.scheduler.admit(self.admitted);
            self.admitted += 1;
        }
    }
}
