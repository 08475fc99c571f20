//! Per-NPU context registry.
//!
//! Every NDI call names an NPU. Before anything is sent to the vendor the
//! NPU is resolved to its [`NpuContext`], which carries the vendor API
//! tables and port mapping for that chip. An NPU that was never registered
//! fails the call without touching the vendor.
//!
//! The registry is plain data; callers serialise registration against use.

use crate::error::{NdiError, NdiResult};
use crate::qos::QueueNdi;
use crate::switch::SwitchNdi;
use crate::vlan::membership::{EmulatedMembership, NativeMembership, PortMembership};
use crate::vlan::VlanNdi;
use nas_types::{NdiPort, NpuId, NpuPort};
use ndi_sai::{PortOid, SaiApiTable, SwitchOid};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::debug;

/// Vendor SAI generation an NPU runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SaiVariant {
    /// Bulk VLAN membership calls, buffer occupancy counters and a vendor
    /// command shell.
    #[default]
    Native,
    /// VLAN member objects only; no occupancy counters, no command shell.
    MemberBased,
}

impl SaiVariant {
    pub const ALL: &'static [SaiVariant] = &[SaiVariant::Native, SaiVariant::MemberBased];

    /// Returns the VLAN port-membership strategy for this generation.
    pub fn membership(&self) -> &'static dyn PortMembership {
        static NATIVE: NativeMembership = NativeMembership;
        static EMULATED: EmulatedMembership = EmulatedMembership;

        match self {
            SaiVariant::Native => &NATIVE,
            SaiVariant::MemberBased => &EMULATED,
        }
    }

    pub fn supports_buffer_occupancy_stats(&self) -> bool {
        matches!(self, SaiVariant::Native)
    }

    pub fn has_command_shell(&self) -> bool {
        matches!(self, SaiVariant::Native)
    }
}

impl fmt::Display for SaiVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaiVariant::Native => write!(f, "native"),
            SaiVariant::MemberBased => write!(f, "member-based"),
        }
    }
}

/// Context record for one NPU.
#[derive(Debug, Clone)]
pub struct NpuContext {
    npu_id: NpuId,
    switch_id: SwitchOid,
    apis: SaiApiTable,
    variant: SaiVariant,
    max_ports: u32,
    ports: BTreeMap<NpuPort, PortOid>,
}

impl NpuContext {
    /// Port count assumed when none is configured.
    pub const DEFAULT_MAX_PORTS: u32 = 256;

    pub fn new(npu_id: NpuId, switch_id: SwitchOid, apis: SaiApiTable, variant: SaiVariant) -> Self {
        Self {
            npu_id,
            switch_id,
            apis,
            variant,
            max_ports: Self::DEFAULT_MAX_PORTS,
            ports: BTreeMap::new(),
        }
    }

    pub fn with_max_ports(mut self, max_ports: u32) -> Self {
        self.max_ports = max_ports;
        self
    }

    /// Maps a chip-local port to its SAI port object.
    pub fn with_port(mut self, npu_port: NpuPort, port: PortOid) -> Self {
        self.ports.insert(npu_port, port);
        self
    }

    pub fn with_ports(mut self, ports: impl IntoIterator<Item = (NpuPort, PortOid)>) -> Self {
        self.ports.extend(ports);
        self
    }

    pub fn npu_id(&self) -> NpuId {
        self.npu_id
    }

    pub fn switch_id(&self) -> SwitchOid {
        self.switch_id
    }

    pub fn apis(&self) -> &SaiApiTable {
        &self.apis
    }

    pub fn variant(&self) -> SaiVariant {
        self.variant
    }

    /// Maximum number of ports on this NPU (`ndi_max_npu_port_get`).
    pub fn max_ports(&self) -> u32 {
        self.max_ports
    }

    /// Resolves a chip-local port to its SAI port object.
    pub fn sai_port_id(&self, npu_port: NpuPort) -> Option<PortOid> {
        self.ports.get(&npu_port).copied()
    }
}

/// Registry of NPU contexts.
#[derive(Debug, Default)]
pub struct NdiDb {
    npus: HashMap<NpuId, NpuContext>,
}

impl NdiDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a context, returning the one it replaces.
    pub fn register(&mut self, ctx: NpuContext) -> Option<NpuContext> {
        debug!(npu_id = %ctx.npu_id, variant = %ctx.variant, "registering NPU context");
        self.npus.insert(ctx.npu_id, ctx)
    }

    pub fn unregister(&mut self, npu_id: NpuId) -> Option<NpuContext> {
        self.npus.remove(&npu_id)
    }

    /// Resolves an NPU (`ndi_db_ptr_get`).
    pub fn get(&self, npu_id: NpuId) -> Option<&NpuContext> {
        self.npus.get(&npu_id)
    }

    /// Resolves an NPU, producing `missing()` if it is not registered.
    pub(crate) fn require(
        &self,
        npu_id: NpuId,
        missing: impl FnOnce() -> NdiError,
    ) -> NdiResult<&NpuContext> {
        self.get(npu_id).ok_or_else(|| {
            debug!(npu_id = %npu_id, "npu_id does not exist");
            missing()
        })
    }

    /// Resolves an NPU port to its SAI port object (`ndi_sai_port_id_get`).
    pub fn sai_port_id(&self, port: NdiPort) -> Option<PortOid> {
        self.get(port.npu_id)?.sai_port_id(port.npu_port)
    }

    pub fn max_npu_port(&self, npu_id: NpuId) -> Option<u32> {
        self.get(npu_id).map(NpuContext::max_ports)
    }

    /// Registered NPU IDs in ascending order.
    pub fn npu_ids(&self) -> Vec<NpuId> {
        let mut ids: Vec<_> = self.npus.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.npus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.npus.is_empty()
    }

    /// Queue and queue counter operations.
    pub fn qos(&self) -> QueueNdi<'_> {
        QueueNdi::new(self)
    }

    /// VLAN operations.
    pub fn vlan(&self) -> VlanNdi<'_> {
        VlanNdi::new(self)
    }

    pub fn switch(&self) -> SwitchNdi<'_> {
        SwitchNdi::new(self)
    }
}
