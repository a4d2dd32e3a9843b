use std::collections::VecDeque;

use crate::{Dispatch, ProcessRecord, Scheduler, Slot, StopReason};

/// First-Come-First-Served: processes run to completion in arrival order.
#[derive(Debug, Default)]
pub struct Fcfs {
    ready_queue: VecDeque<Slot>,
}

impl Fcfs {
    pub fn new() -> Self {
        Fcfs {
            ready_queue: VecDeque::new(),
        }
    }
}

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "fcfs"
    }

    fn admit(&mut self, slot: Slot) {
        self.ready_queue.push_back(slot);
    }

    fn next(&mut self, _processes: &[ProcessRecord]) -> Option<Dispatch> {
        self.ready_queue.pop_front().map(Dispatch::to_completion)
    }

    fn stop(&mut self, _slot: Slot, _reason: StopReason) {}
}
