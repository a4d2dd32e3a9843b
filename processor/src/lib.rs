//! A schedule report library
//!
//! This runs the policies from the [`scheduler`] crate and turns their
//! results into a timeline and a metrics table that can be printed.

use std::fmt::Display;

use log::info;
use scheduler::{Batch, GanttStep, Pid, Policy, ProcessMetrics, ScheduleResult, Time};

/// A stretch of time during which the CPU was owned by one process,
/// or idle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Slice {
    /// The running process, [`None`] if the CPU was idle.
    pub pid: Option<Pid>,
    pub start: Time,
    pub end: Time,
}

impl Slice {
    pub fn duration(&self) -> Time {
        self.end - self.start
    }

    fn label(&self) -> String {
        match self.pid {
            Some(pid) => format!("P{}", pid),
            None => "--".to_string(),
        }
    }
}

/// Everything that gets printed for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The policy that produced the schedule.
    pub policy: &'static str,

    /// The raw dispatches, as produced by the simulation.
    pub gantt: Vec<GanttStep>,

    /// The dispatches with adjacent runs of the same process merged and
    /// idle gaps made explicit.
    pub timeline: Vec<Slice>,

    /// Per-process metrics, in input order.
    pub processes: Vec<ProcessMetrics>,

    pub average_turnaround_time: f64,
    pub average_waiting_time: f64,

    /// Time at which the last process finished.
    pub makespan: Time,

    /// Time units in `[0, makespan)` during which nothing ran.
    pub idle_time: Time,
}

impl Report {
    /// Fraction of `[0, makespan)` during which the CPU was busy.
    pub fn cpu_utilization(&self) -> f64 {
        if self.makespan == 0 {
            return 0.0;
        }
        (self.makespan - self.idle_time) as f64 / self.makespan as f64
    }
}

impl From<ScheduleResult> for Report {
    fn from(result: ScheduleResult) -> Self {
        let timeline = timeline(&result.gantt);
        let makespan = timeline.last().map_or(0, |slice| slice.end);
        let idle_time = timeline
            .iter()
            .filter(|slice| slice.pid.is_none())
            .map(Slice::duration)
            .sum();

        Report {
            policy: result.policy,
            average_turnaround_time: average(result.processes.iter().map(|p| p.turnaround_time)),
            average_waiting_time: average(result.processes.iter().map(|p| p.waiting_time)),
            gantt: result.gantt,
            timeline,
            processes: result.processes,
            makespan,
            idle_time,
        }
    }
}

fn timeline(gantt: &[GanttStep]) -> Vec<Slice> {
    let mut slices: Vec<Slice> = Vec::new();
    let mut now = 0;

    for step in gantt {
        if step.start > now {
            slices.push(Slice {
                pid: None,
                start: now,
                end: step.start,
            });
        }

        match slices.last_mut() {
            Some(last) if last.pid == Some(step.pid) && last.end == step.start => {
                last.end = step.end();
            }
            _ => slices.push(Slice {
                pid: Some(step.pid),
                start: step.start,
                end: step.end(),
            }),
        }
        now = step.end();
    }

    slices
}

fn average(values: impl ExactSizeIterator<Item = Time>) -> f64 {
    let count = values.len();
    if count == 0 {
        return 0.0;
    }
    values.sum::<Time>() as f64 / count as f64
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "===== {} =====", self.policy)?;
        writeln!(f, "Gantt Chart:")?;
        for slice in &self.timeline {
            write!(f, "| {} ", slice.label())?;
        }
        writeln!(f, "|")?;
        for slice in &self.timeline {
            write!(f, "{:>4}", slice.start)?;
        }
        writeln!(f, "{:>4}", self.makespan)?;
        writeln!(f)?;

        writeln!(f, "P\tAT\tBT\tCT\tTAT\tWT")?;
        for process in &self.processes {
            writeln!(
                f,
                "{}\t{}\t{}\t{}\t{}\t{}",
                process.pid,
                process.arrival_time,
                process.burst_time,
                process.completion_time,
                process.turnaround_time,
                process.waiting_time
            )?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "Average turnaround time: {:.2}",
            self.average_turnaround_time
        )?;
        writeln!(f, "Average waiting time: {:.2}", self.average_waiting_time)?;
        writeln!(
            f,
            "CPU utilization: {:.2}%",
            self.cpu_utilization() * 100.0
        )
    }
}

/// The processor simulator.
pub struct Processor;

impl Processor {
    /// Simulate `batch` with `policy` and build the report.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::Processor;
    /// use scheduler::{Batch, Policy, ProcessDescriptor};
    ///
    /// let batch = Batch::new([
    ///     ProcessDescriptor::new(1, 0, 5),
    ///     ProcessDescriptor::new(2, 1, 3),
    ///     ProcessDescriptor::new(3, 2, 1),
    /// ])
    /// .unwrap();
    ///
    /// let report = Processor::run(Policy::Srtf, &batch);
    /// assert_eq!(report.makespan, 9);
    /// ```
    pub fn run(policy: Policy, batch: &Batch) -> Report {
        let report = Report::from(scheduler::schedule(policy, batch));
        info!(
            "{}: {} processes, makespan {}, average waiting time {:.2}",
            policy,
            report.processes.len(),
            report.makespan,
            report.average_waiting_time
        );
        report
    }
}

/// Format a [`Report`] to a [`String`].
///
/// ## Example
///
/// ```rust
/// use processor::{format_report, Processor};
/// use scheduler::{Batch, Policy};
///
/// let report = Processor::run(Policy::Fcfs, &Batch::default());
///
/// println!("{}", format_report(&report));
/// ```
pub fn format_report(report: &Report) -> String {
    report.to_string()
}
