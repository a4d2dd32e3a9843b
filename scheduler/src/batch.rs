use std::collections::HashSet;

use crate::{ConfigError, Pid, ProcessRecord, Time};

/// A process as supplied by a loader, before validation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProcessDescriptor {
    pub pid: i64,
    pub arrival_time: i64,
    pub burst_time: i64,
}

impl ProcessDescriptor {
    pub fn new(pid: i64, arrival_time: i64, burst_time: i64) -> Self {
        ProcessDescriptor {
            pid,
            arrival_time,
            burst_time,
        }
    }
}

impl From<(i64, i64, i64)> for ProcessDescriptor {
    fn from((pid, arrival_time, burst_time): (i64, i64, i64)) -> Self {
        ProcessDescriptor::new(pid, arrival_time, burst_time)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Entry {
    pid: Pid,
    arrival_time: Time,
    burst_time: Time,
}

/// A validated, immutable batch of processes.
///
/// Every simulation works on its own copy of the batch, see
/// [`Batch::process_table`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Batch {
    entries: Vec<Entry>,
}

impl Batch {
    /// Validates `descriptors` and builds a batch, keeping the input order.
    pub fn new<I>(descriptors: I) -> Result<Batch, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<ProcessDescriptor>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        let mut last_arrival: Time = 0;
        let mut total_burst: Time = 0;

        for descriptor in descriptors {
            let ProcessDescriptor {
                pid,
                arrival_time,
                burst_time,
            } = descriptor.into();

            let arrival = Time::try_from(arrival_time)
                .map_err(|_| ConfigError::NegativeArrival { pid, arrival_time })?;
            let burst = match Time::try_from(burst_time) {
                Ok(burst) if burst > 0 => burst,
                _ => return Err(ConfigError::NonPositiveBurst { pid, burst_time }),
            };
            if !seen.insert(pid) {
                return Err(ConfigError::DuplicatePid(pid));
            }
            last_arrival = last_arrival.max(arrival);
            total_burst = total_burst
                .checked_add(burst)
                .ok_or(ConfigError::HorizonOverflow)?;

            entries.push(Entry {
                pid: Pid::new(pid),
                arrival_time: arrival,
                burst_time: burst,
            });
        }

        // The clock never passes the last arrival plus all the work.
        last_arrival
            .checked_add(total_burst)
            .ok_or(ConfigError::HorizonOverflow)?;

        Ok(Batch { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total CPU time the batch needs.
    pub fn total_burst(&self) -> Time {
        self.entries.iter().map(|entry| entry.burst_time).sum()
    }

    /// Returns a fresh process table sorted by arrival time.
    ///
    /// The sort is stable, processes arriving together keep their input order.
    pub fn process_table(&self) -> Vec<ProcessRecord> {
        let mut table = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                ProcessRecord::new(entry.pid, index, entry.arrival_time, entry.burst_time)
            })
            .collect::<Vec<_>>();
        table.sort_by_key(|process| process.arrival_time());
        table
    }
}
