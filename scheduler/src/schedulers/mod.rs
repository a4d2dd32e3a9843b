//! The scheduling policies.
//!
//! Every policy implements [`crate::Scheduler`] and is driven by
//! [`crate::simulate`].
//!
mod fcfs;
pub use fcfs::Fcfs;

mod srtf;
pub use srtf::Srtf;

mod round_robin;
pub use round_robin::RoundRobin;
