//! VLAN port-membership strategies.
//!
//! The native SAI generation adds and removes ports in one bulk call. The
//! member-based generation only knows VLAN member objects, so the bulk
//! calls are emulated with a short sequence of member operations.

use crate::db::NpuContext;
use crate::error::{NdiError, NdiResult, SaiStatusExt, Subsystem};
use nas_types::VlanId;
use ndi_sai::{
    RawSaiObjectId, SaiAttribute, SaiObjectList, SaiStatus, SaiVlanPort, VlanAttr,
    VlanMemberAttr, VlanMemberOid,
};
use tracing::{debug, warn};

/// Adds or removes a set of ports to or from a VLAN on one NPU.
///
/// `ports` is scratch space: implementations may record the VLAN member
/// OID of each port in it.
pub trait PortMembership: Send + Sync {
    fn add_ports(&self, ctx: &NpuContext, vlan: VlanId, ports: &mut [SaiVlanPort])
        -> NdiResult<()>;

    fn remove_ports(
        &self,
        ctx: &NpuContext,
        vlan: VlanId,
        ports: &mut [SaiVlanPort],
    ) -> NdiResult<()>;
}

/// Bulk `add_ports_to_vlan` / `remove_ports_from_vlan`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeMembership;

impl PortMembership for NativeMembership {
    fn add_ports(
        &self,
        ctx: &NpuContext,
        vlan: VlanId,
        ports: &mut [SaiVlanPort],
    ) -> NdiResult<()> {
        let status = ctx.apis().vlan.add_ports_to_vlan(vlan.as_u16(), ports);
        if status.is_error() {
            warn!(npu_id = %ctx.npu_id(), vlan = %vlan, %status, "add ports to vlan fails");
        }
        status.or_config_error(Subsystem::Interface)
    }

    fn remove_ports(
        &self,
        ctx: &NpuContext,
        vlan: VlanId,
        ports: &mut [SaiVlanPort],
    ) -> NdiResult<()> {
        let status = ctx.apis().vlan.remove_ports_from_vlan(vlan.as_u16(), ports);
        if status.is_error() {
            warn!(npu_id = %ctx.npu_id(), vlan = %vlan, %status, "remove ports from vlan fails");
        }
        status.or_config_error(Subsystem::Interface)
    }
}

/// Bulk membership emulated with VLAN member objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmulatedMembership;

impl EmulatedMembership {
    /// Reads the VLAN's member list into a buffer of `max_ports` entries.
    fn member_list(ctx: &NpuContext, vlan: VlanId) -> NdiResult<Vec<VlanMemberOid>> {
        let mut attrs = [SaiAttribute::obj_list(
            VlanAttr::MemberList,
            SaiObjectList::with_capacity(ctx.max_ports()),
        )];

        let status = ctx.apis().vlan.get_vlan_attribute(vlan.as_u16(), &mut attrs);
        if status.is_error() {
            warn!(npu_id = %ctx.npu_id(), vlan = %vlan, %status, "vlan member list get fails");
        }
        status.or_config_error(Subsystem::Interface)?;

        let list = attrs[0]
            .value
            .as_obj_list()
            .ok_or_else(|| NdiError::config_status(Subsystem::Interface, SaiStatus::Failure))?;
        Ok(list
            .filled()
            .iter()
            .map(|&raw| VlanMemberOid::from_raw_unchecked(raw))
            .collect())
    }

    fn member_port(ctx: &NpuContext, member: VlanMemberOid) -> NdiResult<RawSaiObjectId> {
        let mut attrs = [SaiAttribute::request(VlanMemberAttr::PortId)];

        let status = ctx
            .apis()
            .vlan
            .get_vlan_member_attribute(member, &mut attrs);
        if status.is_error() {
            warn!(npu_id = %ctx.npu_id(), member = member.as_raw(), %status,
                "vlan member port get fails");
        }
        status.or_config_error(Subsystem::Interface)?;

        Ok(attrs[0].value.as_oid().unwrap_or(0))
    }
}

impl PortMembership for EmulatedMembership {
    fn add_ports(
        &self,
        ctx: &NpuContext,
        vlan: VlanId,
        ports: &mut [SaiVlanPort],
    ) -> NdiResult<()> {
        for port in ports.iter_mut() {
            let attrs = [
                SaiAttribute::u16(VlanMemberAttr::VlanId, vlan.as_u16()),
                SaiAttribute::oid(VlanMemberAttr::PortId, port.port_id.as_raw()),
                SaiAttribute::s32(VlanMemberAttr::TaggingMode, port.tagging_mode as i32),
            ];

            let mut member = VlanMemberOid::NULL;
            let status = ctx.apis().vlan.create_vlan_member(&mut member, &attrs);
            if status.is_error() {
                warn!(npu_id = %ctx.npu_id(), vlan = %vlan, port = port.port_id.as_raw(), %status,
                    "vlan member create fails");
            }
            status.or_config_error(Subsystem::Interface)?;
            port.vlan_member_id = member;
        }
        Ok(())
    }

    fn remove_ports(
        &self,
        ctx: &NpuContext,
        vlan: VlanId,
        ports: &mut [SaiVlanPort],
    ) -> NdiResult<()> {
        for member in Self::member_list(ctx, vlan)? {
            let member_port = Self::member_port(ctx, member)?;
            if let Some(port) = ports
                .iter_mut()
                .find(|p| p.vlan_member_id.is_null() && p.port_id.as_raw() == member_port)
            {
                port.vlan_member_id = member;
            }
        }

        if let Some(missing) = ports.iter().find(|p| p.vlan_member_id.is_null()) {
            return Err(NdiError::param(
                Subsystem::Interface,
                format!(
                    "port {:#x} is not a member of vlan {}",
                    missing.port_id.as_raw(),
                    vlan
                ),
            ));
        }

        for port in ports.iter() {
            debug!(vlan = %vlan, member = port.vlan_member_id.as_raw(), "removing vlan member");
            let status = ctx.apis().vlan.remove_vlan_member(port.vlan_member_id);
            if status.is_error() {
                warn!(npu_id = %ctx.npu_id(), vlan = %vlan, %status, "vlan member remove fails");
            }
            status.or_config_error(Subsystem::Interface)?;
        }
        Ok(())
    }
}
