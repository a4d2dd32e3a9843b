use std::collections::VecDeque;
use std::num::NonZeroUsize;

use crate::{Dispatch, ProcessRecord, Scheduler, Slot, StopReason};

/// Round robin with a fixed time quantum.
#[derive(Debug)]
pub struct RoundRobin {
    ready_queue: VecDeque<Slot>,
    quantum: NonZeroUsize,
}

impl RoundRobin {
    pub fn new(quantum: NonZeroUsize) -> Self {
        RoundRobin {
            ready_queue: VecDeque::new(),
            quantum,
        }
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "round-robin"
    }

    fn admit(&mut self, slot: Slot) {
        self.ready_queue.push_back(slot);
    }

    fn next(&mut self, _processes: &[ProcessRecord]) -> Option<Dispatch> {
        self.ready_queue
            .pop_front()
            .map(|slot| Dispatch::for_timeslice(slot, self.quantum))
    }

    fn stop(&mut self, slot: Slot, reason: StopReason) {
        match reason {
            StopReason::Expired => self.ready_queue.push_back(slot),
            StopReason::Exited => {}
        }
    }
}
