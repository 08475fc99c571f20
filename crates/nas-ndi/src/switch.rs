//! Switch-level queries.

use crate::db::NdiDb;
use crate::error::{NdiError, NdiResult, SaiStatusExt, Subsystem};
use nas_types::NpuId;
use ndi_sai::{SaiAttribute, SwitchAttr};
use tracing::warn;

/// Queue layout of an NPU (`ndi_switch_get_queue_numbers`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueueNumbers {
    /// Unicast queues per port.
    pub unicast: u32,
    /// Multicast queues per port.
    pub multicast: u32,
    /// All queues on a front-panel port.
    pub total: u32,
    /// Queues on the CPU port.
    pub cpu: u32,
}

/// Switch operations, bound to an [`NdiDb`].
pub struct SwitchNdi<'a> {
    db: &'a NdiDb,
}

impl<'a> SwitchNdi<'a> {
    pub(crate) fn new(db: &'a NdiDb) -> Self {
        Self { db }
    }

    /// Reads the switch's queue layout in one `get_switch_attribute` call.
    pub fn get_queue_numbers(&self, npu_id: NpuId) -> NdiResult<QueueNumbers> {
        let ctx = self
            .db
            .require(npu_id, || NdiError::config(Subsystem::Npu))?;

        let mut attrs = [
            SaiAttribute::request(SwitchAttr::NumberOfUnicastQueues),
            SaiAttribute::request(SwitchAttr::NumberOfMulticastQueues),
            SaiAttribute::request(SwitchAttr::NumberOfQueues),
            SaiAttribute::request(SwitchAttr::NumberOfCpuQueues),
        ];

        let status = ctx
            .apis()
            .switch
            .get_switch_attribute(ctx.switch_id(), &mut attrs);
        if status.is_error() {
            warn!(npu_id = %npu_id, %status, "switch queue number get fails");
        }
        status.or_config_error(Subsystem::Npu)?;

        let mut numbers = QueueNumbers::default();
        for attr in &attrs {
            let value = attr.value.as_u32().unwrap_or(0);
            match SwitchAttr::from_raw(attr.id) {
                Some(SwitchAttr::NumberOfUnicastQueues) => numbers.unicast = value,
                Some(SwitchAttr::NumberOfMulticastQueues) => numbers.multicast = value,
                Some(SwitchAttr::NumberOfQueues) => numbers.total = value,
                Some(SwitchAttr::NumberOfCpuQueues) => numbers.cpu = value,
                None => {}
            }
        }

        Ok(numbers)
    }
}
