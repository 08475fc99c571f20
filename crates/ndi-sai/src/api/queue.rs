//! `sai_queue_api_t`.

use crate::attribute::SaiAttribute;
use crate::stats::SaiQueueStat;
use crate::status::SaiStatus;
use crate::types::QueueOid;

/// Queue API table.
pub trait QueueApi: Send + Sync {
    fn set_queue_attribute(&self, queue: QueueOid, attr: &SaiAttribute) -> SaiStatus;

    fn get_queue_attribute(&self, queue: QueueOid, attrs: &mut [SaiAttribute]) -> SaiStatus;

    /// `get_queue_stats`: `counters[i]` receives the value of `counter_ids[i]`.
    /// Both slices have the same length.
    fn get_queue_stats(
        &self,
        queue: QueueOid,
        counter_ids: &[SaiQueueStat],
        counters: &mut [u64],
    ) -> SaiStatus;

    fn clear_queue_stats(&self, queue: QueueOid, counter_ids: &[SaiQueueStat]) -> SaiStatus;
}
