//! Interface counter translation for VLANs.
//!
//! [`InterfaceStat`] is the interface counter enumeration shared by ports
//! and VLANs. SAI keeps a much smaller counter set for VLANs, so only the
//! IF-MIB style counters map; port-only counters have no VLAN counterpart.

use ndi_sai::SaiVlanStat;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// NDI interface counter IDs (`ndi_stat_id_t`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InterfaceStat {
    InOctets,
    InPkts,
    InUcastPkts,
    InNonUcastPkts,
    InBroadcastPkts,
    InMulticastPkts,
    InDiscards,
    InErrors,
    InUnknownProtos,
    OutOctets,
    OutPkts,
    OutUcastPkts,
    OutNonUcastPkts,
    OutBroadcastPkts,
    OutMulticastPkts,
    OutDiscards,
    OutErrors,
    OutQlen,
    EtherStatsOctets,
    EtherStatsPkts,
    EtherStatsUndersizePkts,
    EtherStatsOversizePkts,
    EtherStatsFragments,
    EtherStatsJabbers,
    EtherStatsCollisions,
    EtherStatsCrcAlignErrors,
}

impl InterfaceStat {
    pub const ALL: &'static [InterfaceStat] = &[
        InterfaceStat::InOctets,
        InterfaceStat::InPkts,
        InterfaceStat::InUcastPkts,
        InterfaceStat::InNonUcastPkts,
        InterfaceStat::InBroadcastPkts,
        InterfaceStat::InMulticastPkts,
        InterfaceStat::InDiscards,
        InterfaceStat::InErrors,
        InterfaceStat::InUnknownProtos,
        InterfaceStat::OutOctets,
        InterfaceStat::OutPkts,
        InterfaceStat::OutUcastPkts,
        InterfaceStat::OutNonUcastPkts,
        InterfaceStat::OutBroadcastPkts,
        InterfaceStat::OutMulticastPkts,
        InterfaceStat::OutDiscards,
        InterfaceStat::OutErrors,
        InterfaceStat::OutQlen,
        InterfaceStat::EtherStatsOctets,
        InterfaceStat::EtherStatsPkts,
        InterfaceStat::EtherStatsUndersizePkts,
        InterfaceStat::EtherStatsOversizePkts,
        InterfaceStat::EtherStatsFragments,
        InterfaceStat::EtherStatsJabbers,
        InterfaceStat::EtherStatsCollisions,
        InterfaceStat::EtherStatsCrcAlignErrors,
    ];
}

const VLAN_STAT_MAP: &[(InterfaceStat, SaiVlanStat)] = &[
    (InterfaceStat::InOctets, SaiVlanStat::InOctets),
    (InterfaceStat::InPkts, SaiVlanStat::InPackets),
    (InterfaceStat::InUcastPkts, SaiVlanStat::InUcastPkts),
    (InterfaceStat::InNonUcastPkts, SaiVlanStat::InNonUcastPkts),
    (InterfaceStat::InDiscards, SaiVlanStat::InDiscards),
    (InterfaceStat::InErrors, SaiVlanStat::InErrors),
    (InterfaceStat::InUnknownProtos, SaiVlanStat::InUnknownProtos),
    (InterfaceStat::OutOctets, SaiVlanStat::OutOctets),
    (InterfaceStat::OutPkts, SaiVlanStat::OutPackets),
    (InterfaceStat::OutUcastPkts, SaiVlanStat::OutUcastPkts),
    (InterfaceStat::OutNonUcastPkts, SaiVlanStat::OutNonUcastPkts),
    (InterfaceStat::OutDiscards, SaiVlanStat::OutDiscards),
    (InterfaceStat::OutErrors, SaiVlanStat::OutErrors),
    (InterfaceStat::OutQlen, SaiVlanStat::OutQlen),
];

static NDI_TO_SAI: Lazy<HashMap<InterfaceStat, SaiVlanStat>> =
    Lazy::new(|| VLAN_STAT_MAP.iter().copied().collect());

static SAI_TO_NDI: Lazy<HashMap<SaiVlanStat, InterfaceStat>> =
    Lazy::new(|| VLAN_STAT_MAP.iter().map(|&(ndi, sai)| (sai, ndi)).collect());

/// Maps an interface counter to its SAI VLAN counter (`ndi_to_sai_vlan_stats`).
pub fn to_sai_vlan_stat(stat: InterfaceStat) -> Option<SaiVlanStat> {
    NDI_TO_SAI.get(&stat).copied()
}

pub fn from_sai_vlan_stat(stat: SaiVlanStat) -> Option<InterfaceStat> {
    SAI_TO_NDI.get(&stat).copied()
}
