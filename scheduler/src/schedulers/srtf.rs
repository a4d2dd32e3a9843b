use std::num::NonZeroUsize;

use crate::{Dispatch, ProcessRecord, Scheduler, Slot, StopReason};

const TICK: NonZeroUsize = NonZeroUsize::MIN;

/// Preemptive Shortest-Remaining-Time-First.
///
/// The decision is taken again after every time unit. Among the ready
/// processes the one with the least remaining time wins, ties go to the
/// process that arrived first (input order for equal arrivals).
#[derive(Debug, Default)]
pub struct Srtf {
    ready: Vec<Slot>,
}

impl Srtf {
    pub fn new() -> Self {
        Srtf { ready: Vec::new() }
    }

    fn shortest(&self, processes: &[ProcessRecord]) -> Option<Slot> {
        self.ready
            .iter()
            .copied()
            .min_by_key(|&slot| (processes[slot].remaining_time(), slot))
    }
}

impl Scheduler for Srtf {
    fn name(&self) -> &'static str {
        "srtf"
    }

    fn admit(&mut self, slot: Slot) {
        self.ready.push(slot);
    }

    fn next(&mut self, processes: &[ProcessRecord]) -> Option<Dispatch> {
        self.shortest(processes)
            .map(|slot| Dispatch::for_timeslice(slot, TICK))
    }

    fn stop(&mut self, slot: Slot, reason: StopReason) {
        if reason == StopReason::Exited {
            self.ready.retain(|&ready| ready != slot);
        }
    }
}
