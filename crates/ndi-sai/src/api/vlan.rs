//! `sai_vlan_api_t`.
//!
//! VLANs are keyed by `sai_vlan_id_t` in both SAI generations the NDI layer
//! supports. The generations differ in how port membership is managed:
//!
//! - the native generation takes a list of [`SaiVlanPort`] records in one
//!   `add_ports_to_vlan` / `remove_ports_from_vlan` call;
//! - the member-based generation only has VLAN member objects, created and
//!   removed one port at a time.
//!
//! Entries a generation lacks keep their default body, which reports
//! `SAI_STATUS_NOT_IMPLEMENTED`.

use crate::attribute::{SaiAttribute, SaiVlanPort};
use crate::stats::SaiVlanStat;
use crate::status::SaiStatus;
use crate::types::VlanMemberOid;

/// VLAN API table.
pub trait VlanApi: Send + Sync {
    fn create_vlan(&self, vlan_id: u16) -> SaiStatus;

    fn remove_vlan(&self, vlan_id: u16) -> SaiStatus;

    fn set_vlan_attribute(&self, vlan_id: u16, attr: &SaiAttribute) -> SaiStatus;

    fn get_vlan_attribute(&self, vlan_id: u16, attrs: &mut [SaiAttribute]) -> SaiStatus;

    /// `get_vlan_stats`: `counters[i]` receives the value of `counter_ids[i]`.
    fn get_vlan_stats(
        &self,
        vlan_id: u16,
        counter_ids: &[SaiVlanStat],
        counters: &mut [u64],
    ) -> SaiStatus;

    /// Native generation only.
    fn add_ports_to_vlan(&self, vlan_id: u16, ports: &[SaiVlanPort]) -> SaiStatus {
        let _ = (vlan_id, ports);
        SaiStatus::NotImplemented
    }

    /// Native generation only.
    fn remove_ports_from_vlan(&self, vlan_id: u16, ports: &[SaiVlanPort]) -> SaiStatus {
        let _ = (vlan_id, ports);
        SaiStatus::NotImplemented
    }

    /// Member-based generation only. On success `member` holds the new OID.
    fn create_vlan_member(&self, member: &mut VlanMemberOid, attrs: &[SaiAttribute]) -> SaiStatus {
        let _ = (member, attrs);
        SaiStatus::NotImplemented
    }

    /// Member-based generation only.
    fn remove_vlan_member(&self, member: VlanMemberOid) -> SaiStatus {
        let _ = member;
        SaiStatus::NotImplemented
    }

    /// Member-based generation only.
    fn get_vlan_member_attribute(
        &self,
        member: VlanMemberOid,
        attrs: &mut [SaiAttribute],
    ) -> SaiStatus {
        let _ = (member, attrs);
        SaiStatus::NotImplemented
    }
}
