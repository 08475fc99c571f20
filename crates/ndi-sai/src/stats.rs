//! Queue and VLAN counter IDs.

use crate::attribute::sai_enum;

sai_enum! {
    /// `sai_queue_stat_t`.
    ///
    /// The occupancy and watermark counters exist only in the native SAI
    /// generation.
    pub enum SaiQueueStat {
        Packets = 0,
        Bytes = 1,
        DroppedPackets = 2,
        DroppedBytes = 3,
        GreenPackets = 4,
        GreenBytes = 5,
        GreenDroppedPackets = 6,
        GreenDroppedBytes = 7,
        YellowPackets = 8,
        YellowBytes = 9,
        YellowDroppedPackets = 10,
        YellowDroppedBytes = 11,
        RedPackets = 12,
        RedBytes = 13,
        RedDroppedPackets = 14,
        RedDroppedBytes = 15,
        GreenDiscardDroppedPackets = 16,
        GreenDiscardDroppedBytes = 17,
        YellowDiscardDroppedPackets = 18,
        YellowDiscardDroppedBytes = 19,
        RedDiscardDroppedPackets = 20,
        RedDiscardDroppedBytes = 21,
        DiscardDroppedPackets = 22,
        DiscardDroppedBytes = 23,
        CurrOccupancyBytes = 24,
        WatermarkBytes = 25,
        SharedCurrOccupancyBytes = 26,
        SharedWatermarkBytes = 27,
    }
}

impl SaiQueueStat {
    /// Returns true for counters only the native SAI generation defines.
    pub const fn is_buffer_occupancy(&self) -> bool {
        matches!(
            self,
            SaiQueueStat::CurrOccupancyBytes
                | SaiQueueStat::WatermarkBytes
                | SaiQueueStat::SharedCurrOccupancyBytes
                | SaiQueueStat::SharedWatermarkBytes
        )
    }
}

sai_enum! {
    /// `sai_vlan_stat_t`.
    pub enum SaiVlanStat {
        InOctets = 0,
        InPackets = 1,
        InUcastPkts = 2,
        InNonUcastPkts = 3,
        InDiscards = 4,
        InErrors = 5,
        InUnknownProtos = 6,
        OutOctets = 7,
        OutPackets = 8,
        OutUcastPkts = 9,
        OutNonUcastPkts = 10,
        OutDiscards = 11,
        OutErrors = 12,
        OutQlen = 13,
    }
}
