//! Queue attribute, queue list and queue counter translation.

use super::stats::{QueueStat, QueueStatCounters};
use crate::convert::{from_raw_sai, to_sai};
use crate::db::{NdiDb, NpuContext};
use crate::error::{NdiError, NdiResult, SaiStatusExt, Subsystem};
use crate::switch::SwitchNdi;
use nas_types::{NdiObjectId, NdiPort};
use ndi_sai::{
    BufferProfileOid, PortAttr, QueueAttr, QueueOid, SaiAttribute, SaiObjectList, SaiQueueType,
    SaiStatus, SchedulerOid, WredOid,
};
use tracing::warn;

/// NAS queue type (`BASE_QOS_QUEUE_TYPE_t`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QueueType {
    #[default]
    None,
    Unicast,
    Multicast,
}

impl QueueType {
    /// Maps a raw `sai_queue_type_t`. Anything but unicast or multicast
    /// (including `SAI_QUEUE_TYPE_ALL`) has no NAS counterpart.
    pub fn from_sai(raw: u32) -> Self {
        match SaiQueueType::from_raw(raw) {
            Some(SaiQueueType::Unicast) => QueueType::Unicast,
            Some(SaiQueueType::Multicast) => QueueType::Multicast,
            Some(SaiQueueType::All) | None => QueueType::None,
        }
    }
}

/// Attributes of one queue (`ndi_qos_queue_attribute_t`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueueAttributes {
    pub queue_type: QueueType,
    pub wred_id: NdiObjectId,
    pub buffer_profile: NdiObjectId,
    pub scheduler_profile: NdiObjectId,
}

/// Queues of one port.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueueIdList {
    /// Number of queues the port owns.
    pub total: u32,
    /// The first `min(total, capacity)` queue handles.
    pub ids: Vec<NdiObjectId>,
}

/// Queue operations, bound to an [`NdiDb`].
pub struct QueueNdi<'a> {
    db: &'a NdiDb,
}

impl<'a> QueueNdi<'a> {
    pub(crate) fn new(db: &'a NdiDb) -> Self {
        Self { db }
    }

    fn context(&self, port: NdiPort) -> NdiResult<&'a NpuContext> {
        self.db
            .require(port.npu_id, || NdiError::config(Subsystem::Qos))
    }

    fn set_queue_attribute(
        &self,
        port: NdiPort,
        queue: NdiObjectId,
        attr: SaiAttribute,
    ) -> NdiResult<()> {
        let ctx = self.context(port)?;
        let sai_queue: QueueOid = to_sai(queue);

        let status = ctx.apis().queue.set_queue_attribute(sai_queue, &attr);
        if status.is_error() {
            warn!(npu_id = %port.npu_id, queue = %queue, attr = attr.id, %status, "queue set fails");
        }
        status.or_config_error(Subsystem::Qos)
    }

    /// Binds a WRED profile to a queue.
    pub fn set_queue_wred_id(
        &self,
        port: NdiPort,
        queue: NdiObjectId,
        wred_id: NdiObjectId,
    ) -> NdiResult<()> {
        let wred: WredOid = to_sai(wred_id);
        self.set_queue_attribute(
            port,
            queue,
            SaiAttribute::oid(QueueAttr::WredProfileId, wred.as_raw()),
        )
    }

    /// Binds a buffer profile to a queue.
    pub fn set_queue_buffer_profile_id(
        &self,
        port: NdiPort,
        queue: NdiObjectId,
        buffer_profile_id: NdiObjectId,
    ) -> NdiResult<()> {
        let profile: BufferProfileOid = to_sai(buffer_profile_id);
        self.set_queue_attribute(
            port,
            queue,
            SaiAttribute::oid(QueueAttr::BufferProfileId, profile.as_raw()),
        )
    }

    /// Binds a scheduler profile to a queue.
    pub fn set_queue_scheduler_profile_id(
        &self,
        port: NdiPort,
        queue: NdiObjectId,
        scheduler_profile_id: NdiObjectId,
    ) -> NdiResult<()> {
        let profile: SchedulerOid = to_sai(scheduler_profile_id);
        self.set_queue_attribute(
            port,
            queue,
            SaiAttribute::oid(QueueAttr::SchedulerProfileId, profile.as_raw()),
        )
    }

    /// Reads type and profile bindings of a queue in one vendor call.
    pub fn get_queue_attribute(
        &self,
        port: NdiPort,
        queue: NdiObjectId,
    ) -> NdiResult<QueueAttributes> {
        let ctx = self.context(port)?;

        let mut attrs = [
            SaiAttribute::request(QueueAttr::Type),
            SaiAttribute::request(QueueAttr::WredProfileId),
            SaiAttribute::request(QueueAttr::BufferProfileId),
            SaiAttribute::request(QueueAttr::SchedulerProfileId),
        ];

        let status = ctx
            .apis()
            .queue
            .get_queue_attribute(to_sai(queue), &mut attrs);
        if status.is_error() {
            warn!(npu_id = %port.npu_id, queue = %queue, %status, "queue get fails");
        }
        status.or_config_error(Subsystem::Qos)?;

        let mut info = QueueAttributes::default();
        for attr in &attrs {
            let oid = || from_raw_sai(attr.value.as_oid().unwrap_or(0));
            match QueueAttr::from_raw(attr.id) {
                Some(QueueAttr::Type) => {
                    info.queue_type = attr
                        .value
                        .as_u32()
                        .map_or(QueueType::None, QueueType::from_sai);
                }
                Some(QueueAttr::WredProfileId) => info.wred_id = oid(),
                Some(QueueAttr::BufferProfileId) => info.buffer_profile = oid(),
                Some(QueueAttr::SchedulerProfileId) => info.scheduler_profile = oid(),
                _ => {}
            }
        }

        Ok(info)
    }

    /// Number of queues a port owns: the CPU queue count for the CPU port,
    /// the per-port queue count for front-panel ports.
    pub fn get_number_of_queues(&self, port: NdiPort) -> NdiResult<u32> {
        self.context(port)?;
        let numbers = SwitchNdi::new(self.db).get_queue_numbers(port.npu_id)?;

        Ok(if port.is_cpu() {
            numbers.cpu
        } else {
            numbers.total
        })
    }

    /// Reads up to `capacity` queue handles of a port.
    ///
    /// The vendor buffer is exactly `capacity` entries. A port with more
    /// queues than that is not an error: `total` reports the real count and
    /// `ids` holds the first `capacity` handles. A capacity of 0 only
    /// queries the count.
    pub fn get_queue_id_list(&self, port: NdiPort, capacity: u32) -> NdiResult<QueueIdList> {
        let ctx = self.context(port)?;
        let sai_port = ctx.sai_port_id(port.npu_port).ok_or_else(|| {
            NdiError::param(Subsystem::Qos, format!("no SAI port for {}", port))
        })?;

        let mut attrs = [SaiAttribute::obj_list(
            PortAttr::QosQueueList,
            SaiObjectList::with_capacity(capacity),
        )];

        let status = ctx.apis().port.get_port_attribute(sai_port, &mut attrs);
        if status.is_error() && status != SaiStatus::BufferOverflow {
            warn!(npu_id = %port.npu_id, port = %port, %status, "queue list get fails");
            return Err(NdiError::config_status(Subsystem::Qos, status));
        }

        let list = attrs[0]
            .value
            .as_obj_list()
            .ok_or_else(|| NdiError::config_status(Subsystem::Qos, SaiStatus::Failure))?;

        Ok(QueueIdList {
            total: list.count,
            ids: list.filled().iter().copied().map(from_raw_sai).collect(),
        })
    }

    fn sai_counter_ids(
        ctx: &NpuContext,
        counters: &[QueueStat],
    ) -> NdiResult<Vec<ndi_sai::SaiQueueStat>> {
        counters
            .iter()
            .map(|stat| {
                stat.to_sai(ctx.variant()).ok_or_else(|| {
                    NdiError::param(
                        Subsystem::Qos,
                        format!("queue counter {:?} not supported by {} SAI", stat, ctx.variant()),
                    )
                })
            })
            .collect()
    }

    /// Reads the requested counters of a queue into `stats`.
    ///
    /// Only the fields for the requested kinds are written.
    pub fn get_queue_stats(
        &self,
        port: NdiPort,
        queue: NdiObjectId,
        counters: &[QueueStat],
        stats: &mut QueueStatCounters,
    ) -> NdiResult<()> {
        let ctx = self.context(port)?;
        let counter_ids = Self::sai_counter_ids(ctx, counters)?;
        let mut values = vec![0u64; counter_ids.len()];

        let status = ctx
            .apis()
            .queue
            .get_queue_stats(to_sai(queue), &counter_ids, &mut values);
        if status.is_error() {
            warn!(npu_id = %port.npu_id, queue = %queue, %status, "queue get stats fails");
        }
        status.or_config_error(Subsystem::Qos)?;

        for (stat, value) in counters.iter().zip(values) {
            stats.set(*stat, value);
        }
        Ok(())
    }

    /// Clears the requested counters of a queue.
    pub fn clear_queue_stats(
        &self,
        port: NdiPort,
        queue: NdiObjectId,
        counters: &[QueueStat],
    ) -> NdiResult<()> {
        let ctx = self.context(port)?;
        let counter_ids = Self::sai_counter_ids(ctx, counters)?;

        let status = ctx
            .apis()
            .queue
            .clear_queue_stats(to_sai(queue), &counter_ids);
        if status.is_error() {
            warn!(npu_id = %port.npu_id, queue = %queue, %status, "queue clear stats fails");
        }
        status.or_config_error(Subsystem::Qos)
    }
}
