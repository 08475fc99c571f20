//! Queue counter translation.
//!
//! [`QueueStat`] is the NAS counter enumeration (`BASE_QOS_QUEUE_STAT_t`).
//! Each kind has exactly one SAI counter. The four buffer occupancy
//! counters only exist in the native SAI generation, so whether a kind is
//! mapped depends on the NPU's [`SaiVariant`].

use crate::db::SaiVariant;
use ndi_sai::SaiQueueStat;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// NAS queue counter kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueueStat {
    Packets,
    Bytes,
    DroppedPackets,
    DroppedBytes,
    GreenPackets,
    GreenBytes,
    GreenDroppedPackets,
    GreenDroppedBytes,
    YellowPackets,
    YellowBytes,
    YellowDroppedPackets,
    YellowDroppedBytes,
    RedPackets,
    RedBytes,
    RedDroppedPackets,
    RedDroppedBytes,
    GreenDiscardDroppedPackets,
    GreenDiscardDroppedBytes,
    YellowDiscardDroppedPackets,
    YellowDiscardDroppedBytes,
    RedDiscardDroppedPackets,
    RedDiscardDroppedBytes,
    DiscardDroppedPackets,
    DiscardDroppedBytes,
    CurrentOccupancyBytes,
    WatermarkBytes,
    SharedCurrentOccupancyBytes,
    SharedWatermarkBytes,
}

const QUEUE_STAT_MAP: &[(QueueStat, SaiQueueStat)] = &[
    (QueueStat::Packets, SaiQueueStat::Packets),
    (QueueStat::Bytes, SaiQueueStat::Bytes),
    (QueueStat::DroppedPackets, SaiQueueStat::DroppedPackets),
    (QueueStat::DroppedBytes, SaiQueueStat::DroppedBytes),
    (QueueStat::GreenPackets, SaiQueueStat::GreenPackets),
    (QueueStat::GreenBytes, SaiQueueStat::GreenBytes),
    (QueueStat::GreenDroppedPackets, SaiQueueStat::GreenDroppedPackets),
    (QueueStat::GreenDroppedBytes, SaiQueueStat::GreenDroppedBytes),
    (QueueStat::YellowPackets, SaiQueueStat::YellowPackets),
    (QueueStat::YellowBytes, SaiQueueStat::YellowBytes),
    (QueueStat::YellowDroppedPackets, SaiQueueStat::YellowDroppedPackets),
    (QueueStat::YellowDroppedBytes, SaiQueueStat::YellowDroppedBytes),
    (QueueStat::RedPackets, SaiQueueStat::RedPackets),
    (QueueStat::RedBytes, SaiQueueStat::RedBytes),
    (QueueStat::RedDroppedPackets, SaiQueueStat::RedDroppedPackets),
    (QueueStat::RedDroppedBytes, SaiQueueStat::RedDroppedBytes),
    (QueueStat::GreenDiscardDroppedPackets, SaiQueueStat::GreenDiscardDroppedPackets),
    (QueueStat::GreenDiscardDroppedBytes, SaiQueueStat::GreenDiscardDroppedBytes),
    (QueueStat::YellowDiscardDroppedPackets, SaiQueueStat::YellowDiscardDroppedPackets),
    (QueueStat::YellowDiscardDroppedBytes, SaiQueueStat::YellowDiscardDroppedBytes),
    (QueueStat::RedDiscardDroppedPackets, SaiQueueStat::RedDiscardDroppedPackets),
    (QueueStat::RedDiscardDroppedBytes, SaiQueueStat::RedDiscardDroppedBytes),
    (QueueStat::DiscardDroppedPackets, SaiQueueStat::DiscardDroppedPackets),
    (QueueStat::DiscardDroppedBytes, SaiQueueStat::DiscardDroppedBytes),
    (QueueStat::CurrentOccupancyBytes, SaiQueueStat::CurrOccupancyBytes),
    (QueueStat::WatermarkBytes, SaiQueueStat::WatermarkBytes),
    (QueueStat::SharedCurrentOccupancyBytes, SaiQueueStat::SharedCurrOccupancyBytes),
    (QueueStat::SharedWatermarkBytes, SaiQueueStat::SharedWatermarkBytes),
];

static NAS_TO_SAI: Lazy<HashMap<QueueStat, SaiQueueStat>> =
    Lazy::new(|| QUEUE_STAT_MAP.iter().copied().collect());

static SAI_TO_NAS: Lazy<HashMap<SaiQueueStat, QueueStat>> =
    Lazy::new(|| QUEUE_STAT_MAP.iter().map(|&(nas, sai)| (sai, nas)).collect());

impl QueueStat {
    /// Every counter kind, in declaration order.
    pub fn all() -> impl Iterator<Item = QueueStat> {
        QUEUE_STAT_MAP.iter().map(|&(nas, _)| nas)
    }

    /// Returns the SAI counter for this kind on the given SAI generation.
    pub fn to_sai(self, variant: SaiVariant) -> Option<SaiQueueStat> {
        let sai = NAS_TO_SAI.get(&self).copied()?;
        if sai.is_buffer_occupancy() && !variant.supports_buffer_occupancy_stats() {
            return None;
        }
        Some(sai)
    }

    pub fn from_sai(sai: SaiQueueStat) -> Option<QueueStat> {
        SAI_TO_NAS.get(&sai).copied()
    }
}

/// Queue counter values (`nas_qos_queue_stat_counter_t`).
///
/// A statistics call only writes the fields for the kinds it requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueueStatCounters {
    pub packets: u64,
    pub bytes: u64,
    pub dropped_packets: u64,
    pub dropped_bytes: u64,
    pub green_packets: u64,
    pub green_bytes: u64,
    pub green_dropped_packets: u64,
    pub green_dropped_bytes: u64,
    pub yellow_packets: u64,
    pub yellow_bytes: u64,
    pub yellow_dropped_packets: u64,
    pub yellow_dropped_bytes: u64,
    pub red_packets: u64,
    pub red_bytes: u64,
    pub red_dropped_packets: u64,
    pub red_dropped_bytes: u64,
    pub green_discard_dropped_packets: u64,
    pub green_discard_dropped_bytes: u64,
    pub yellow_discard_dropped_packets: u64,
    pub yellow_discard_dropped_bytes: u64,
    pub red_discard_dropped_packets: u64,
    pub red_discard_dropped_bytes: u64,
    pub discard_dropped_packets: u64,
    pub discard_dropped_bytes: u64,
    pub current_occupancy_bytes: u64,
    pub watermark_bytes: u64,
    pub shared_current_occupancy_bytes: u64,
    pub shared_watermark_bytes: u64,
}

macro_rules! counter_fields {
    ($($stat:ident => $field:ident),* $(,)?) => {
        impl QueueStatCounters {
            fn field_mut(&mut self, stat: QueueStat) -> &mut u64 {
                match stat {
                    $(QueueStat::$stat => &mut self.$field,)*
                }
            }

            /// Value of one counter.
            pub fn get(&self, stat: QueueStat) -> u64 {
                match stat {
                    $(QueueStat::$stat => self.$field,)*
                }
            }
        }
    };
}

counter_fields! {
    Packets => packets,
    Bytes => bytes,
    DroppedPackets => dropped_packets,
    DroppedBytes => dropped_bytes,
    GreenPackets => green_packets,
    GreenBytes => green_bytes,
    GreenDroppedPackets => green_dropped_packets,
    GreenDroppedBytes => green_dropped_bytes,
    YellowPackets => yellow_packets,
    YellowBytes => yellow_bytes,
    YellowDroppedPackets => yellow_dropped_packets,
    YellowDroppedBytes => yellow_dropped_bytes,
    RedPackets => red_packets,
    RedBytes => red_bytes,
    RedDroppedPackets => red_dropped_packets,
    RedDroppedBytes => red_dropped_bytes,
    GreenDiscardDroppedPackets => green_discard_dropped_packets,
    GreenDiscardDroppedBytes => green_discard_dropped_bytes,
    YellowDiscardDroppedPackets => yellow_discard_dropped_packets,
    YellowDiscardDroppedBytes => yellow_discard_dropped_bytes,
    RedDiscardDroppedPackets => red_discard_dropped_packets,
    RedDiscardDroppedBytes => red_discard_dropped_bytes,
    DiscardDroppedPackets => discard_dropped_packets,
    DiscardDroppedBytes => discard_dropped_bytes,
    CurrentOccupancyBytes => current_occupancy_bytes,
    WatermarkBytes => watermark_bytes,
    SharedCurrentOccupancyBytes => shared_current_occupancy_bytes,
    SharedWatermarkBytes => shared_watermark_bytes,
}

impl QueueStatCounters {
    /// Stores the value of one counter.
    pub fn set(&mut self, stat: QueueStat, value: u64) {
        *self.field_mut(stat) = value;
    }
}
