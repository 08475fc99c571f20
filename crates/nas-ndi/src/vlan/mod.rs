//! VLAN translation.
//!
//! VLAN create/delete, port membership, VLAN counters and MAC learning.
//! Port membership is delegated to the NPU's [`PortMembership`] strategy,
//! which depends on the SAI generation the NPU runs.

pub mod membership;
pub mod stats;

pub use membership::{EmulatedMembership, NativeMembership, PortMembership};
pub use stats::InterfaceStat;

use crate::db::{NdiDb, NpuContext};
use crate::error::{NdiError, NdiResult, SaiStatusExt, Subsystem};
use nas_types::{NpuId, PortList, VlanId};
use ndi_sai::{SaiAttribute, SaiVlanPort, SaiVlanTaggingMode, SaiVlanStat, VlanAttr};
use std::collections::HashSet;
use tracing::{error, warn};

/// MAC learning mode of a VLAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LearningMode {
    #[default]
    Enabled,
    Disabled,
}

impl LearningMode {
    fn learn_disable(self) -> bool {
        matches!(self, LearningMode::Disabled)
    }
}

impl From<bool> for LearningMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            LearningMode::Enabled
        } else {
            LearningMode::Disabled
        }
    }
}

/// VLAN operations, bound to an [`NdiDb`].
pub struct VlanNdi<'a> {
    db: &'a NdiDb,
}

impl<'a> VlanNdi<'a> {
    pub(crate) fn new(db: &'a NdiDb) -> Self {
        Self { db }
    }

    pub fn create_vlan(&self, npu_id: NpuId, vlan: VlanId) -> NdiResult<()> {
        let ctx = self
            .db
            .require(npu_id, || NdiError::config(Subsystem::Interface))?;

        let status = ctx.apis().vlan.create_vlan(vlan.as_u16());
        if status.is_error() {
            warn!(npu_id = %npu_id, vlan = %vlan, %status, "vlan create fails");
        }
        status.or_config_error(Subsystem::Interface)
    }

    pub fn delete_vlan(&self, npu_id: NpuId, vlan: VlanId) -> NdiResult<()> {
        let ctx = self
            .db
            .require(npu_id, || NdiError::config(Subsystem::Interface))?;

        let status = ctx.apis().vlan.remove_vlan(vlan.as_u16());
        if status.is_error() {
            warn!(npu_id = %npu_id, vlan = %vlan, %status, "vlan delete fails");
        }
        status.or_config_error(Subsystem::Interface)
    }

    /// Builds one membership record per port, tagged ports first.
    ///
    /// Each port is resolved through its own NPU, which need not be the NPU
    /// the VLAN lives on. A port may appear only once across both lists.
    fn vlan_ports(
        &self,
        tagged: Option<&PortList>,
        untagged: Option<&PortList>,
    ) -> NdiResult<Vec<SaiVlanPort>> {
        let count = tagged.map_or(0, PortList::len) + untagged.map_or(0, PortList::len);

        let mut records = Vec::new();
        records
            .try_reserve_exact(count)
            .map_err(|_| NdiError::no_memory(Subsystem::Interface))?;

        let mut seen = HashSet::with_capacity(count);
        let lists = [
            (tagged, SaiVlanTaggingMode::Tagged),
            (untagged, SaiVlanTaggingMode::Untagged),
        ];
        for (list, mode) in lists {
            for port in list.into_iter().flatten() {
                let sai_port = self.db.sai_port_id(*port).ok_or_else(|| {
                    error!(npu_id = %port.npu_id, npu_port = %port.npu_port,
                        "SAI port id get failed");
                    NdiError::param(Subsystem::Interface, format!("no SAI port for {}", port))
                })?;
                if !seen.insert(sai_port.as_raw()) {
                    error!(npu_id = %port.npu_id, npu_port = %port.npu_port,
                        "port listed more than once");
                    return Err(NdiError::param(
                        Subsystem::Interface,
                        format!("port {} listed more than once", port),
                    ));
                }
                records.push(SaiVlanPort::new(sai_port, mode));
            }
        }

        Ok(records)
    }

    fn update_membership(
        &self,
        ctx: &NpuContext,
        vlan: VlanId,
        tagged: Option<&PortList>,
        untagged: Option<&PortList>,
        add: bool,
    ) -> NdiResult<()> {
        let mut records = self.vlan_ports(tagged, untagged)?;
        let membership = ctx.variant().membership();

        if add {
            membership.add_ports(ctx, vlan, &mut records)
        } else {
            membership.remove_ports(ctx, vlan, &mut records)
        }
    }

    /// Adds tagged and untagged ports to a VLAN. An absent list is empty.
    pub fn add_ports_to_vlan(
        &self,
        npu_id: NpuId,
        vlan: VlanId,
        tagged: Option<&PortList>,
        untagged: Option<&PortList>,
    ) -> NdiResult<()> {
        let ctx = self
            .db
            .require(npu_id, || NdiError::config(Subsystem::Interface))?;
        self.update_membership(ctx, vlan, tagged, untagged, true)
    }

    /// Removes tagged and untagged ports from a VLAN. An absent list is empty.
    pub fn del_ports_from_vlan(
        &self,
        npu_id: NpuId,
        vlan: VlanId,
        tagged: Option<&PortList>,
        untagged: Option<&PortList>,
    ) -> NdiResult<()> {
        let ctx = self
            .db
            .require(npu_id, || NdiError::config(Subsystem::Interface))?;
        self.update_membership(ctx, vlan, tagged, untagged, false)
    }

    /// Adds (`add == true`) or removes ports. An unknown NPU is a parameter
    /// error here, unlike the dedicated add and delete calls.
    pub fn add_or_del_ports_to_vlan(
        &self,
        npu_id: NpuId,
        vlan: VlanId,
        tagged: Option<&PortList>,
        untagged: Option<&PortList>,
        add: bool,
    ) -> NdiResult<()> {
        let ctx = self.db.require(npu_id, || {
            NdiError::param(Subsystem::Npu, format!("invalid NPU id {}", npu_id))
        })?;
        self.update_membership(ctx, vlan, tagged, untagged, add)
    }

    /// Reads VLAN counters; `result[i]` is the value of `counters[i]`.
    pub fn vlan_stats_get(
        &self,
        npu_id: NpuId,
        vlan: VlanId,
        counters: &[InterfaceStat],
    ) -> NdiResult<Vec<u64>> {
        let ctx = self.db.require(npu_id, || {
            error!(npu_id = %npu_id, "Invalid NPU Id passed");
            NdiError::param(Subsystem::Npu, format!("invalid NPU id {}", npu_id))
        })?;

        let counter_ids = counters
            .iter()
            .map(|stat| {
                stats::to_sai_vlan_stat(*stat).ok_or_else(|| {
                    NdiError::param(
                        Subsystem::Npu,
                        format!("interface counter {:?} has no VLAN counterpart", stat),
                    )
                })
            })
            .collect::<NdiResult<Vec<SaiVlanStat>>>()?;
        let mut values = vec![0u64; counter_ids.len()];

        let status = ctx
            .apis()
            .vlan
            .get_vlan_stats(vlan.as_u16(), &counter_ids, &mut values);
        if status.is_error() {
            error!(npu_id = %npu_id, vlan = %vlan, %status, "Vlan stats Get failed");
        }
        status.or_failure(Subsystem::Npu)?;

        Ok(values)
    }

    /// Enables or disables MAC learning on a VLAN.
    pub fn set_vlan_learning(
        &self,
        npu_id: NpuId,
        vlan: VlanId,
        mode: LearningMode,
    ) -> NdiResult<()> {
        let ctx = self.db.require(npu_id, || {
            NdiError::param(Subsystem::Npu, format!("invalid NPU id {}", npu_id))
        })?;

        let attr = SaiAttribute::bool(VlanAttr::LearnDisable, mode.learn_disable());
        let status = ctx.apis().vlan.set_vlan_attribute(vlan.as_u16(), &attr);
        if status.is_error() {
            error!(npu_id = %npu_id, vlan = %vlan, %status, "setting learning mode fails");
        }
        status.or_config_error(Subsystem::Interface)
    }
}
