//! QoS translation: queue attributes, queue lists and queue counters.

pub mod queue;
pub mod stats;

pub use queue::{QueueAttributes, QueueIdList, QueueNdi, QueueType};
pub use stats::{QueueStat, QueueStatCounters};
