use std::collections::{HashMap, VecDeque};
use std::num::NonZeroUsize;

use processor::Processor;
use scheduler::{
    Batch, Dispatch, Pid, Policy, ProcessRecord, ProcessState, ScheduleResult, Scheduler, Slot,
    StopReason,
};

use super::{batch, policies};

fn batches() -> Vec<Batch> {
    vec![
        batch(&[(1, 0, 5), (2, 1, 3), (3, 2, 8)]),
        batch(&[(1, 0, 8), (2, 1, 4), (3, 2, 9), (4, 3, 5)]),
        batch(&[(1, 0, 5), (2, 1, 3), (3, 2, 1)]),
        batch(&[(1, 3, 2), (2, 4, 1)]),
        batch(&[(3, 0, 4), (1, 0, 2), (2, 0, 4)]),
        batch(&[(1, 4, 2), (2, 0, 3), (3, 1, 6), (4, 0, 1)]),
        batch(&[(10, 0, 1), (20, 20, 4), (30, 21, 2), (40, 21, 7), (50, 22, 1)]),
        batch(&[(1, 0, 12), (2, 2, 1), (3, 2, 1), (4, 9, 3), (5, 9, 3), (6, 30, 2)]),
    ]
}

fn results(batch: &Batch) -> Vec<ScheduleResult> {
    policies()
        .into_iter()
        .map(|policy| scheduler::schedule(policy, batch))
        .chain((1..=4).map(|quantum| {
            scheduler::round_robin(batch, scheduler::quantum(quantum).unwrap())
        }))
        .collect()
}

#[test]
pub fn metrics_are_consistent() {
    for batch in batches() {
        for result in results(&batch) {
            assert_eq!(result.processes.len(), batch.len());
            for process in &result.processes {
                assert_eq!(
                    process.turnaround_time,
                    process.waiting_time + process.burst_time
                );
                assert_eq!(
                    process.completion_time,
                    process.arrival_time + process.turnaround_time
                );
                assert!(process.completion_time >= process.arrival_time + process.burst_time);
            }
        }
    }
}

#[test]
pub fn gantt_covers_every_burst_once() {
    for batch in batches() {
        for result in results(&batch) {
            let mut ran = HashMap::<Pid, usize>::new();
            let mut now = 0;
            for step in &result.gantt {
                assert!(step.start >= now, "{}: overlapping steps", result.policy);
                assert!(step.duration > 0);
                now = step.end();
                *ran.entry(step.pid).or_default() += step.duration;
            }
            for process in &result.processes {
                assert_eq!(ran[&process.pid], process.burst_time);
            }
            assert_eq!(ran.values().sum::<usize>(), batch.total_burst());
        }
    }
}

#[test]
pub fn runs_are_idempotent() {
    for batch in batches() {
        let copy = batch.clone();
        for policy in policies() {
            let first = scheduler::schedule(policy, &batch);
            let second = scheduler::schedule(policy, &batch);
            assert_eq!(first, second);
        }
        assert_eq!(batch, copy);
    }
}

#[test]
pub fn srtf_runs_the_shortest_remaining_process() {
    for batch in batches() {
        let result = scheduler::srtf(&batch);
        let mut remaining = result
            .processes
            .iter()
            .map(|p| (p.pid, p.burst_time))
            .collect::<HashMap<_, _>>();

        for step in &result.gantt {
            let shortest = result
                .processes
                .iter()
                .filter(|p| p.arrival_time <= step.start && remaining[&p.pid] > 0)
                .map(|p| remaining[&p.pid])
                .min()
                .unwrap();
            assert_eq!(remaining[&step.pid], shortest);
            *remaining.get_mut(&step.pid).unwrap() -= step.duration;
        }
    }
}

#[test]
pub fn srtf_minimises_average_waiting_time() {
    for batch in batches() {
        let srtf = Processor::run(Policy::Srtf, &batch).average_waiting_time;
        for policy in policies() {
            assert!(srtf <= Processor::run(policy, &batch).average_waiting_time);
        }
    }
}

#[test]
pub fn round_robin_respects_the_quantum() {
    for batch in batches() {
        for quantum in 1..=4 {
            let result = scheduler::round_robin(&batch, scheduler::quantum(quantum).unwrap());
            let completion = result
                .processes
                .iter()
                .map(|p| (p.pid, p.completion_time))
                .collect::<HashMap<_, _>>();

            for step in &result.gantt {
                assert!(step.duration <= quantum as usize);
                if step.duration < quantum as usize {
                    assert_eq!(completion[&step.pid], step.end());
                }
            }
        }
    }
}

#[test]
pub fn fcfs_never_preempts() {
    for batch in batches() {
        let result = scheduler::fcfs(&batch);
        assert_eq!(result.gantt.len(), batch.len());
        for step in &result.gantt {
            let process = result.processes.iter().find(|p| p.pid == step.pid).unwrap();
            assert_eq!(step.duration, process.burst_time);
            assert_eq!(step.end(), process.completion_time);
        }
    }
}

/// FIFO policy that records the state of every process it dispatches.
#[derive(Default)]
struct Recording {
    ready_queue: VecDeque<Slot>,
    dispatched: Vec<String>,
    stops: Vec<String>,
}

impl Scheduler for Recording {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn admit(&mut self, slot: Slot) {
        self.ready_queue.push_back(slot);
    }

    fn next(&mut self, processes: &[ProcessRecord]) -> Option<Dispatch> {
        let slot = self.ready_queue.pop_front()?;
        self.dispatched.push(processes[slot].state().to_string());
        Some(Dispatch::for_timeslice(slot, NonZeroUsize::new(2).unwrap()))
    }

    fn stop(&mut self, slot: Slot, reason: StopReason) {
        self.stops.push(reason.to_string());
        if reason == StopReason::Expired {
            self.ready_queue.push_back(slot);
        }
    }
}

#[test]
pub fn custom_schedulers_see_ready_processes() {
    let mut recording = Recording::default();
    let batch = batch(&[(1, 0, 3), (2, 1, 1)]);

    let result = scheduler::simulate(&mut recording, &batch);

    assert_eq!(result.policy, "recording");
    assert_eq!(result.gantt.len(), 3);
    assert_eq!(recording.dispatched, vec!["READY", "READY", "READY"]);
    assert_eq!(recording.stops, vec!["Expired", "Exited", "Exited"]);
    assert_eq!(ProcessState::Finished { completion: 4 }.to_string(), "FINISHED 4");
}
