//! Integration tests for the NDI layer against a mock SAI.
//!
//! `MockSai` implements every vendor API table in memory and records each
//! call it receives, so the tests can check both results and exactly what
//! reached the vendor.

use nas_ndi::{
    ErrorKind, InterfaceStat, LearningMode, NdiConfig, NdiDb, NdiError, NpuContext, QueueStat,
    QueueStatCounters, QueueType, SaiVariant, Subsystem,
};
use nas_types::{NdiObjectId, NdiPort, NpuId, NpuPort, PortList, VlanId};
use ndi_sai::{
    PortApi, PortAttr, PortOid, QueueApi, QueueAttr, QueueOid, SaiApiTable, SaiAttribute,
    SaiAttributeValue, SaiQueueStat, SaiQueueType, SaiStatus, SaiVlanPort, SaiVlanStat,
    SaiVlanTaggingMode, SwitchApi, SwitchAttr, SwitchOid, VlanApi, VlanAttr, VlanMemberAttr,
    VlanMemberOid,
};
use pretty_assertions::assert_eq;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

const SWITCH: u64 = 0x21000000000000;
const PORT_1: u64 = 0x1000000000001;
const PORT_2: u64 = 0x1000000000002;
const PORT_3: u64 = 0x1000000000003;
const CPU_PORT: u64 = 0x1000000000000;
const QUEUE: u64 = 0x15000000000001;

#[derive(Default)]
struct MockState {
    member_based: bool,
    calls: Vec<String>,
    fail: HashMap<&'static str, SaiStatus>,
    reject_member_port: Option<u64>,

    queue_numbers: [u32; 4],
    port_queues: HashMap<u64, Vec<u64>>,
    queue_types: HashMap<u64, SaiQueueType>,
    queue_bindings: HashMap<(u64, u32), u64>,
    queue_stats: HashMap<(u64, SaiQueueStat), u64>,

    vlans: BTreeSet<u16>,
    vlan_attrs: HashMap<(u16, u32), SaiAttributeValue>,
    bulk_members: BTreeMap<u16, Vec<(u64, SaiVlanTaggingMode)>>,
    members: BTreeMap<u64, (u16, u64, i32)>,
    next_member: u64,
}

/// Mock SAI implementation for testing
#[derive(Clone)]
struct MockSai {
    state: Arc<Mutex<MockState>>,
}

impl MockSai {
    fn new(member_based: bool) -> Self {
        let mut state = MockState {
            member_based,
            queue_numbers: [8, 4, 12, 48],
            next_member: 0x2d000000000001,
            ..MockState::default()
        };
        let queues: Vec<u64> = (0..12).map(|i| 0x15000000000000 + i).collect();
        state.port_queues.insert(PORT_1, queues);
        state.queue_types.insert(QUEUE, SaiQueueType::Multicast);
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    fn apis(&self) -> SaiApiTable {
        SaiApiTable::from_single(Arc::new(self.clone()))
    }

    /// Records a call; returns the injected failure for it, if any.
    fn enter(&self, op: &'static str) -> Option<SaiStatus> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(op.to_string());
        state.fail.get(op).copied()
    }

    fn fail(&self, op: &'static str, status: SaiStatus) {
        self.state.lock().unwrap().fail.insert(op, status);
    }

    fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }
}

impl SwitchApi for MockSai {
    fn get_switch_attribute(&self, switch: SwitchOid, attrs: &mut [SaiAttribute]) -> SaiStatus {
        if let Some(status) = self.enter("get_switch_attribute") {
            return status;
        }
        assert_eq!(switch.as_raw(), SWITCH);
        let numbers = self.state.lock().unwrap().queue_numbers;
        for attr in attrs.iter_mut() {
            let value = match SwitchAttr::from_raw(attr.id) {
                Some(SwitchAttr::NumberOfUnicastQueues) => numbers[0],
                Some(SwitchAttr::NumberOfMulticastQueues) => numbers[1],
                Some(SwitchAttr::NumberOfQueues) => numbers[2],
                Some(SwitchAttr::NumberOfCpuQueues) => numbers[3],
                None => return SaiStatus::InvalidParameter,
            };
            attr.value = SaiAttributeValue::U32(value);
        }
        SaiStatus::Success
    }
}

impl PortApi for MockSai {
    fn get_port_attribute(&self, port: PortOid, attrs: &mut [SaiAttribute]) -> SaiStatus {
        if let Some(status) = self.enter("get_port_attribute") {
            return status;
        }
        let state = self.state.lock().unwrap();
        let queues = state.port_queues.get(&port.as_raw()).cloned().unwrap_or_default();
        let mut status = SaiStatus::Success;
        for attr in attrs.iter_mut() {
            if attr.is(PortAttr::QosNumberOfQueues) {
                attr.value = SaiAttributeValue::U32(queues.len() as u32);
            } else if attr.is(PortAttr::QosQueueList) {
                let list = attr.value.as_obj_list_mut().expect("object list buffer");
                if !list.fill_from(&queues) {
                    status = SaiStatus::BufferOverflow;
                }
            }
        }
        status
    }
}

impl QueueApi for MockSai {
    fn set_queue_attribute(&self, queue: QueueOid, attr: &SaiAttribute) -> SaiStatus {
        if let Some(status) = self.enter("set_queue_attribute") {
            return status;
        }
        let oid = attr.value.as_oid().expect("queue bindings are object IDs");
        self.state
            .lock()
            .unwrap()
            .queue_bindings
            .insert((queue.as_raw(), attr.id), oid);
        SaiStatus::Success
    }

    fn get_queue_attribute(&self, queue: QueueOid, attrs: &mut [SaiAttribute]) -> SaiStatus {
        if let Some(status) = self.enter("get_queue_attribute") {
            return status;
        }
        let state = self.state.lock().unwrap();
        for attr in attrs.iter_mut() {
            attr.value = if attr.is(QueueAttr::Type) {
                let qtype = state
                    .queue_types
                    .get(&queue.as_raw())
                    .copied()
                    .unwrap_or(SaiQueueType::All);
                SaiAttributeValue::U32(qtype as u32)
            } else {
                let oid = state
                    .queue_bindings
                    .get(&(queue.as_raw(), attr.id))
                    .copied()
                    .unwrap_or(0);
                SaiAttributeValue::Oid(oid)
            };
        }
        SaiStatus::Success
    }

    fn get_queue_stats(
        &self,
        queue: QueueOid,
        counter_ids: &[SaiQueueStat],
        counters: &mut [u64],
    ) -> SaiStatus {
        if let Some(status) = self.enter("get_queue_stats") {
            return status;
        }
        assert_eq!(counter_ids.len(), counters.len());
        let state = self.state.lock().unwrap();
        for (id, value) in counter_ids.iter().zip(counters.iter_mut()) {
            *value = state
                .queue_stats
                .get(&(queue.as_raw(), *id))
                .copied()
                .unwrap_or(0);
        }
        SaiStatus::Success
    }

    fn clear_queue_stats(&self, queue: QueueOid, counter_ids: &[SaiQueueStat]) -> SaiStatus {
        if let Some(status) = self.enter("clear_queue_stats") {
            return status;
        }
        let mut state = self.state.lock().unwrap();
        for id in counter_ids {
            state.queue_stats.remove(&(queue.as_raw(), *id));
        }
        SaiStatus::Success
    }
}

impl VlanApi for MockSai {
    fn create_vlan(&self, vlan_id: u16) -> SaiStatus {
        if let Some(status) = self.enter("create_vlan") {
            return status;
        }
        if self.state.lock().unwrap().vlans.insert(vlan_id) {
            SaiStatus::Success
        } else {
            SaiStatus::ItemAlreadyExists
        }
    }

    fn remove_vlan(&self, vlan_id: u16) -> SaiStatus {
        if let Some(status) = self.enter("remove_vlan") {
            return status;
        }
        if self.state.lock().unwrap().vlans.remove(&vlan_id) {
            SaiStatus::Success
        } else {
            SaiStatus::ItemNotFound
        }
    }

    fn set_vlan_attribute(&self, vlan_id: u16, attr: &SaiAttribute) -> SaiStatus {
        if let Some(status) = self.enter("set_vlan_attribute") {
            return status;
        }
        self.state
            .lock()
            .unwrap()
            .vlan_attrs
            .insert((vlan_id, attr.id), attr.value.clone());
        SaiStatus::Success
    }

    fn get_vlan_attribute(&self, vlan_id: u16, attrs: &mut [SaiAttribute]) -> SaiStatus {
        if let Some(status) = self.enter("get_vlan_attribute") {
            return status;
        }
        let state = self.state.lock().unwrap();
        for attr in attrs.iter_mut() {
            if attr.is(VlanAttr::MemberList) {
                let members: Vec<u64> = state
                    .members
                    .iter()
                    .filter(|(_, (vlan, _, _))| *vlan == vlan_id)
                    .map(|(oid, _)| *oid)
                    .collect();
                let list = attr.value.as_obj_list_mut().expect("object list buffer");
                if !list.fill_from(&members) {
                    return SaiStatus::BufferOverflow;
                }
            }
        }
        SaiStatus::Success
    }

    fn get_vlan_stats(
        &self,
        vlan_id: u16,
        counter_ids: &[SaiVlanStat],
        counters: &mut [u64],
    ) -> SaiStatus {
        if let Some(status) = self.enter("get_vlan_stats") {
            return status;
        }
        for (id, value) in counter_ids.iter().zip(counters.iter_mut()) {
            *value = u64::from(vlan_id) * 100 + *id as u64;
        }
        SaiStatus::Success
    }

    fn add_ports_to_vlan(&self, vlan_id: u16, ports: &[SaiVlanPort]) -> SaiStatus {
        if let Some(status) = self.enter("add_ports_to_vlan") {
            return status;
        }
        let mut state = self.state.lock().unwrap();
        if state.member_based {
            return SaiStatus::NotImplemented;
        }
        let entry = state.bulk_members.entry(vlan_id).or_default();
        entry.extend(ports.iter().map(|p| (p.port_id.as_raw(), p.tagging_mode)));
        SaiStatus::Success
    }

    fn remove_ports_from_vlan(&self, vlan_id: u16, ports: &[SaiVlanPort]) -> SaiStatus {
        if let Some(status) = self.enter("remove_ports_from_vlan") {
            return status;
        }
        let mut state = self.state.lock().unwrap();
        if state.member_based {
            return SaiStatus::NotImplemented;
        }
        let entry = state.bulk_members.entry(vlan_id).or_default();
        entry.retain(|(port, _)| !ports.iter().any(|p| p.port_id.as_raw() == *port));
        SaiStatus::Success
    }

    fn create_vlan_member(&self, member: &mut VlanMemberOid, attrs: &[SaiAttribute]) -> SaiStatus {
        if let Some(status) = self.enter("create_vlan_member") {
            return status;
        }
        let mut state = self.state.lock().unwrap();
        if !state.member_based {
            return SaiStatus::NotImplemented;
        }

        let find = |id: VlanMemberAttr| attrs.iter().find(|a| a.is(id)).map(|a| &a.value);
        let vlan = find(VlanMemberAttr::VlanId).and_then(SaiAttributeValue::as_u16);
        let port = find(VlanMemberAttr::PortId).and_then(SaiAttributeValue::as_oid);
        let mode = find(VlanMemberAttr::TaggingMode).and_then(SaiAttributeValue::as_s32);
        let (Some(vlan), Some(port), Some(mode)) = (vlan, port, mode) else {
            return SaiStatus::MandatoryAttributeMissing;
        };
        if state.reject_member_port == Some(port) {
            return SaiStatus::InvalidPortMember;
        }

        let oid = state.next_member;
        state.next_member += 1;
        state.members.insert(oid, (vlan, port, mode));
        *member = VlanMemberOid::from_raw_unchecked(oid);
        SaiStatus::Success
    }

    fn remove_vlan_member(&self, member: VlanMemberOid) -> SaiStatus {
        if let Some(status) = self.enter("remove_vlan_member") {
            return status;
        }
        match self.state.lock().unwrap().members.remove(&member.as_raw()) {
            Some(_) => SaiStatus::Success,
            None => SaiStatus::ItemNotFound,
        }
    }

    fn get_vlan_member_attribute(
        &self,
        member: VlanMemberOid,
        attrs: &mut [SaiAttribute],
    ) -> SaiStatus {
        if let Some(status) = self.enter("get_vlan_member_attribute") {
            return status;
        }
        let state = self.state.lock().unwrap();
        let Some(&(vlan, port, mode)) = state.members.get(&member.as_raw()) else {
            return SaiStatus::ItemNotFound;
        };
        for attr in attrs.iter_mut() {
            attr.value = match VlanMemberAttr::from_raw(attr.id) {
                Some(VlanMemberAttr::VlanId) => SaiAttributeValue::U16(vlan),
                Some(VlanMemberAttr::PortId) => SaiAttributeValue::Oid(port),
                Some(VlanMemberAttr::TaggingMode) => SaiAttributeValue::S32(mode),
                None => return SaiStatus::InvalidParameter,
            };
        }
        SaiStatus::Success
    }
}

fn setup(variant: SaiVariant) -> (MockSai, NdiDb) {
    setup_with_max_ports(variant, 16)
}

fn setup_with_max_ports(variant: SaiVariant, max_ports: u32) -> (MockSai, NdiDb) {
    let sai = MockSai::new(variant == SaiVariant::MemberBased);
    let mut db = NdiDb::new();
    db.register(
        NpuContext::new(
            NpuId(0),
            SwitchOid::from_raw_unchecked(SWITCH),
            sai.apis(),
            variant,
        )
        .with_max_ports(max_ports)
        .with_ports([
            (NpuPort::CPU, PortOid::from_raw_unchecked(CPU_PORT)),
            (NpuPort(1), PortOid::from_raw_unchecked(PORT_1)),
            (NpuPort(2), PortOid::from_raw_unchecked(PORT_2)),
            (NpuPort(3), PortOid::from_raw_unchecked(PORT_3)),
        ]),
    );
    (sai, db)
}

fn port(n: u32) -> NdiPort {
    NdiPort::new(NpuId(0), NpuPort(n))
}

fn ports(ns: &[u32]) -> PortList {
    ns.iter().map(|n| port(*n)).collect()
}

fn vlan(id: u16) -> VlanId {
    VlanId::new(id).unwrap()
}

// ============================================================================
// NPU resolution
// ============================================================================

#[test]
fn test_unknown_npu_never_reaches_vendor() {
    let (sai, db) = setup(SaiVariant::Native);
    let ghost = NdiPort::new(NpuId(9), NpuPort(1));
    let q = NdiObjectId(QUEUE);

    let qos_errors = [
        db.qos().set_queue_wred_id(ghost, q, NdiObjectId(1)).unwrap_err(),
        db.qos().set_queue_buffer_profile_id(ghost, q, NdiObjectId(1)).unwrap_err(),
        db.qos().set_queue_scheduler_profile_id(ghost, q, NdiObjectId(1)).unwrap_err(),
        db.qos().get_queue_attribute(ghost, q).unwrap_err(),
        db.qos().get_number_of_queues(ghost).unwrap_err(),
        db.qos().get_queue_id_list(ghost, 4).unwrap_err(),
        db.qos()
            .get_queue_stats(ghost, q, &[QueueStat::Packets], &mut QueueStatCounters::default())
            .unwrap_err(),
        db.qos().clear_queue_stats(ghost, q, &[QueueStat::Packets]).unwrap_err(),
    ];
    for err in qos_errors {
        assert_eq!(err, NdiError::config(Subsystem::Qos));
    }

    let vlans = db.vlan();
    let npu = NpuId(9);
    assert_eq!(
        vlans.create_vlan(npu, vlan(10)).unwrap_err(),
        NdiError::config(Subsystem::Interface)
    );
    assert_eq!(
        vlans.delete_vlan(npu, vlan(10)).unwrap_err(),
        NdiError::config(Subsystem::Interface)
    );
    assert_eq!(
        vlans
            .add_ports_to_vlan(npu, vlan(10), Some(&ports(&[1])), None)
            .unwrap_err(),
        NdiError::config(Subsystem::Interface)
    );
    assert_eq!(
        vlans
            .del_ports_from_vlan(npu, vlan(10), None, Some(&ports(&[1])))
            .unwrap_err(),
        NdiError::config(Subsystem::Interface)
    );

    for err in [
        vlans
            .add_or_del_ports_to_vlan(npu, vlan(10), None, None, false)
            .unwrap_err(),
        vlans
            .vlan_stats_get(npu, vlan(10), &[InterfaceStat::InOctets])
            .unwrap_err(),
        vlans
            .set_vlan_learning(npu, vlan(10), LearningMode::Enabled)
            .unwrap_err(),
    ] {
        assert_eq!((err.kind(), err.subsystem()), (ErrorKind::Param, Subsystem::Npu));
    }

    assert!(db.switch().get_queue_numbers(npu).is_err());
    assert_eq!(sai.calls(), Vec::<String>::new());
}

// ============================================================================
// Queues
// ============================================================================

#[test]
fn test_queue_profile_bindings_roundtrip_through_vendor() {
    let (sai, db) = setup(SaiVariant::Native);
    let q = NdiObjectId(QUEUE);

    db.qos().set_queue_wred_id(port(1), q, NdiObjectId(0x13000000000001)).unwrap();
    db.qos()
        .set_queue_buffer_profile_id(port(1), q, NdiObjectId(0x19000000000002))
        .unwrap();
    db.qos()
        .set_queue_scheduler_profile_id(port(1), q, NdiObjectId(0x16000000000003))
        .unwrap();
    assert_eq!(sai.calls(), vec!["set_queue_attribute"; 3]);

    sai.clear_calls();
    let attrs = db.qos().get_queue_attribute(port(1), q).unwrap();
    assert_eq!(sai.calls(), vec!["get_queue_attribute"]);
    assert_eq!(attrs.queue_type, QueueType::Multicast);
    assert_eq!(attrs.wred_id, NdiObjectId(0x13000000000001));
    assert_eq!(attrs.buffer_profile, NdiObjectId(0x19000000000002));
    assert_eq!(attrs.scheduler_profile, NdiObjectId(0x16000000000003));
}

#[test]
fn test_queue_type_all_maps_to_none() {
    let (_sai, db) = setup(SaiVariant::Native);
    let attrs = db
        .qos()
        .get_queue_attribute(port(1), NdiObjectId(0x15000000000009))
        .unwrap();
    assert_eq!(attrs.queue_type, QueueType::None);
    assert!(attrs.wred_id.is_null());
}

#[test]
fn test_queue_vendor_failure_is_wrapped() {
    let (sai, db) = setup(SaiVariant::Native);
    sai.fail("set_queue_attribute", SaiStatus::InvalidObjectId);

    let err = db
        .qos()
        .set_queue_wred_id(port(1), NdiObjectId(QUEUE), NdiObjectId(1))
        .unwrap_err();
    assert_eq!(err, NdiError::config_status(Subsystem::Qos, SaiStatus::InvalidObjectId));
    assert_eq!(err.sai_status(), Some(SaiStatus::InvalidObjectId));
}

#[test]
fn test_number_of_queues_cpu_vs_front_panel() {
    let (sai, db) = setup(SaiVariant::Native);
    assert_eq!(db.qos().get_number_of_queues(port(0)).unwrap(), 48);
    assert_eq!(db.qos().get_number_of_queues(port(2)).unwrap(), 12);

    let numbers = db.switch().get_queue_numbers(NpuId(0)).unwrap();
    assert_eq!((numbers.unicast, numbers.multicast), (8, 4));

    sai.fail("get_switch_attribute", SaiStatus::Failure);
    let err = db.qos().get_number_of_queues(port(2)).unwrap_err();
    assert_eq!(err, NdiError::config_status(Subsystem::Npu, SaiStatus::Failure));
}

#[test]
fn test_queue_id_list_capacity() {
    let (sai, db) = setup(SaiVariant::Native);

    let full = db.qos().get_queue_id_list(port(1), 16).unwrap();
    assert_eq!(full.total, 12);
    assert_eq!(full.ids.len(), 12);
    assert_eq!(full.ids[0], NdiObjectId(0x15000000000000));

    let truncated = db.qos().get_queue_id_list(port(1), 4).unwrap();
    assert_eq!(truncated.total, 12);
    assert_eq!(truncated.ids, full.ids[..4].to_vec());

    let count_only = db.qos().get_queue_id_list(port(1), 0).unwrap();
    assert_eq!(count_only.total, 12);
    assert!(count_only.ids.is_empty());

    let empty = db.qos().get_queue_id_list(port(2), 4).unwrap();
    assert_eq!(empty.total, 0);

    sai.fail("get_port_attribute", SaiStatus::InvalidPortNumber);
    let err = db.qos().get_queue_id_list(port(1), 4).unwrap_err();
    assert_eq!(err.sai_status(), Some(SaiStatus::InvalidPortNumber));
}

#[test]
fn test_queue_stats_write_only_requested_fields() {
    let (sai, db) = setup(SaiVariant::Native);
    {
        let mut state = sai.state.lock().unwrap();
        state.queue_stats.insert((QUEUE, SaiQueueStat::Packets), 1000);
        state.queue_stats.insert((QUEUE, SaiQueueStat::RedDroppedBytes), 64);
        state.queue_stats.insert((QUEUE, SaiQueueStat::WatermarkBytes), 9216);
        state.queue_stats.insert((QUEUE, SaiQueueStat::Bytes), 5);
    }

    let mut counters = QueueStatCounters {
        bytes: 77,
        ..QueueStatCounters::default()
    };
    db.qos()
        .get_queue_stats(
            port(1),
            NdiObjectId(QUEUE),
            &[QueueStat::Packets, QueueStat::RedDroppedBytes, QueueStat::WatermarkBytes],
            &mut counters,
        )
        .unwrap();

    assert_eq!(counters.packets, 1000);
    assert_eq!(counters.red_dropped_bytes, 64);
    assert_eq!(counters.watermark_bytes, 9216);
    assert_eq!(counters.bytes, 77);

    db.qos()
        .clear_queue_stats(port(1), NdiObjectId(QUEUE), &[QueueStat::Packets])
        .unwrap();
    let mut after = QueueStatCounters::default();
    db.qos()
        .get_queue_stats(port(1), NdiObjectId(QUEUE), &[QueueStat::Packets], &mut after)
        .unwrap();
    assert_eq!(after.get(QueueStat::Packets), 0);
}

#[test]
fn test_queue_read_failures_are_wrapped() {
    let (sai, db) = setup(SaiVariant::Native);
    let q = NdiObjectId(QUEUE);
    sai.state
        .lock()
        .unwrap()
        .queue_stats
        .insert((QUEUE, SaiQueueStat::Packets), 1000);

    sai.fail("get_queue_attribute", SaiStatus::InvalidObjectId);
    let err = db.qos().get_queue_attribute(port(1), q).unwrap_err();
    assert_eq!(err, NdiError::config_status(Subsystem::Qos, SaiStatus::InvalidObjectId));

    sai.fail("get_queue_stats", SaiStatus::NotSupported);
    let mut counters = QueueStatCounters::default();
    let err = db
        .qos()
        .get_queue_stats(port(1), q, &[QueueStat::Packets], &mut counters)
        .unwrap_err();
    assert_eq!(err, NdiError::config_status(Subsystem::Qos, SaiStatus::NotSupported));
    assert_eq!(counters, QueueStatCounters::default());

    sai.fail("clear_queue_stats", SaiStatus::Failure);
    let err = db
        .qos()
        .clear_queue_stats(port(1), q, &[QueueStat::Packets])
        .unwrap_err();
    assert_eq!(err, NdiError::config_status(Subsystem::Qos, SaiStatus::Failure));
    assert_eq!(
        sai.state.lock().unwrap().queue_stats[&(QUEUE, SaiQueueStat::Packets)],
        1000
    );
}

#[test]
fn test_occupancy_counters_rejected_on_member_based_sai() {
    let (sai, db) = setup(SaiVariant::MemberBased);

    let mut counters = QueueStatCounters::default();
    let err = db
        .qos()
        .get_queue_stats(
            port(1),
            NdiObjectId(QUEUE),
            &[QueueStat::Packets, QueueStat::SharedWatermarkBytes],
            &mut counters,
        )
        .unwrap_err();
    assert_eq!((err.kind(), err.subsystem()), (ErrorKind::Param, Subsystem::Qos));
    assert_eq!(sai.calls(), Vec::<String>::new());

    db.qos()
        .get_queue_stats(port(1), NdiObjectId(QUEUE), &[QueueStat::Packets], &mut counters)
        .unwrap();
    assert_eq!(sai.calls(), vec!["get_queue_stats"]);
}

// ============================================================================
// VLANs
// ============================================================================

#[test]
fn test_vlan_create_delete() {
    let (sai, db) = setup(SaiVariant::Native);

    db.vlan().create_vlan(NpuId(0), vlan(100)).unwrap();
    let err = db.vlan().create_vlan(NpuId(0), vlan(100)).unwrap_err();
    assert_eq!(
        err,
        NdiError::config_status(Subsystem::Interface, SaiStatus::ItemAlreadyExists)
    );

    db.vlan().delete_vlan(NpuId(0), vlan(100)).unwrap();
    let err = db.vlan().delete_vlan(NpuId(0), vlan(100)).unwrap_err();
    assert_eq!(err.sai_status(), Some(SaiStatus::ItemNotFound));
    assert_eq!(sai.calls().len(), 4);
}

#[test]
fn test_native_membership_is_one_bulk_call() {
    let (sai, db) = setup(SaiVariant::Native);

    db.vlan()
        .add_ports_to_vlan(NpuId(0), vlan(10), Some(&ports(&[2, 3])), Some(&ports(&[1])))
        .unwrap();
    assert_eq!(sai.calls(), vec!["add_ports_to_vlan"]);
    assert_eq!(
        sai.state.lock().unwrap().bulk_members[&10],
        vec![
            (PORT_2, SaiVlanTaggingMode::Tagged),
            (PORT_3, SaiVlanTaggingMode::Tagged),
            (PORT_1, SaiVlanTaggingMode::Untagged),
        ]
    );

    db.vlan()
        .add_or_del_ports_to_vlan(NpuId(0), vlan(10), Some(&ports(&[3])), None, false)
        .unwrap();
    assert_eq!(sai.state.lock().unwrap().bulk_members[&10].len(), 2);

    sai.fail("remove_ports_from_vlan", SaiStatus::InvalidVlanId);
    let err = db
        .vlan()
        .del_ports_from_vlan(NpuId(0), vlan(10), None, Some(&ports(&[1])))
        .unwrap_err();
    assert_eq!(
        err,
        NdiError::config_status(Subsystem::Interface, SaiStatus::InvalidVlanId)
    );
}

#[test]
fn test_unresolvable_port_stops_before_vendor() {
    let (sai, db) = setup(SaiVariant::Native);
    let err = db
        .vlan()
        .add_ports_to_vlan(NpuId(0), vlan(10), Some(&ports(&[1, 42])), None)
        .unwrap_err();
    assert_eq!((err.kind(), err.subsystem()), (ErrorKind::Param, Subsystem::Interface));
    assert_eq!(sai.calls(), Vec::<String>::new());
}

#[test]
fn test_member_based_add_creates_one_member_per_port() {
    let (sai, db) = setup(SaiVariant::MemberBased);

    db.vlan()
        .add_ports_to_vlan(NpuId(0), vlan(20), Some(&ports(&[1])), Some(&ports(&[2])))
        .unwrap();
    assert_eq!(sai.calls(), vec!["create_vlan_member"; 2]);

    let members: Vec<_> = sai.state.lock().unwrap().members.values().copied().collect();
    assert_eq!(
        members,
        vec![
            (20, PORT_1, SaiVlanTaggingMode::Tagged as i32),
            (20, PORT_2, SaiVlanTaggingMode::Untagged as i32),
        ]
    );
}

#[test]
fn test_member_based_add_stops_at_first_failure() {
    let (sai, db) = setup(SaiVariant::MemberBased);
    sai.state.lock().unwrap().reject_member_port = Some(PORT_2);

    let err = db
        .vlan()
        .add_ports_to_vlan(NpuId(0), vlan(20), Some(&ports(&[1, 2, 3])), None)
        .unwrap_err();
    assert_eq!(
        err,
        NdiError::config_status(Subsystem::Interface, SaiStatus::InvalidPortMember)
    );
    assert_eq!(sai.calls(), vec!["create_vlan_member"; 2]);
    assert_eq!(sai.state.lock().unwrap().members.len(), 1);
}

#[test]
fn test_member_based_remove_correlates_members() {
    let (sai, db) = setup(SaiVariant::MemberBased);
    db.vlan()
        .add_ports_to_vlan(NpuId(0), vlan(30), Some(&ports(&[1, 2, 3])), None)
        .unwrap();
    db.vlan()
        .add_ports_to_vlan(NpuId(0), vlan(31), Some(&ports(&[2])), None)
        .unwrap();
    sai.clear_calls();

    db.vlan()
        .del_ports_from_vlan(NpuId(0), vlan(30), Some(&ports(&[3])), Some(&ports(&[1])))
        .unwrap();

    let calls = sai.calls();
    assert_eq!(calls[0], "get_vlan_attribute");
    assert_eq!(
        calls.iter().filter(|c| *c == "get_vlan_member_attribute").count(),
        3
    );
    assert_eq!(calls.iter().filter(|c| *c == "remove_vlan_member").count(), 2);

    let remaining: Vec<_> = sai.state.lock().unwrap().members.values().copied().collect();
    assert_eq!(
        remaining,
        vec![
            (30, PORT_2, SaiVlanTaggingMode::Tagged as i32),
            (31, PORT_2, SaiVlanTaggingMode::Tagged as i32),
        ]
    );
}

#[test]
fn test_member_based_remove_of_non_member_removes_nothing() {
    let (sai, db) = setup(SaiVariant::MemberBased);
    db.vlan()
        .add_ports_to_vlan(NpuId(0), vlan(40), Some(&ports(&[1])), None)
        .unwrap();
    sai.clear_calls();

    let err = db
        .vlan()
        .add_or_del_ports_to_vlan(NpuId(0), vlan(40), Some(&ports(&[1, 2])), None, false)
        .unwrap_err();
    assert_eq!((err.kind(), err.subsystem()), (ErrorKind::Param, Subsystem::Interface));
    assert!(!sai.calls().iter().any(|c| c == "remove_vlan_member"));
    assert_eq!(sai.state.lock().unwrap().members.len(), 1);
}

#[test]
fn test_repeated_port_rejected_by_both_strategies() {
    for variant in [SaiVariant::Native, SaiVariant::MemberBased] {
        let (sai, db) = setup(variant);
        db.vlan()
            .add_ports_to_vlan(NpuId(0), vlan(60), Some(&ports(&[1])), None)
            .unwrap();
        sai.clear_calls();

        let err = db
            .vlan()
            .del_ports_from_vlan(NpuId(0), vlan(60), Some(&ports(&[1])), Some(&ports(&[1])))
            .unwrap_err();
        assert_eq!(
            (err.kind(), err.subsystem()),
            (ErrorKind::Param, Subsystem::Interface),
            "{}",
            variant
        );

        let err = db
            .vlan()
            .add_ports_to_vlan(NpuId(0), vlan(60), Some(&ports(&[2, 2])), None)
            .unwrap_err();
        assert_eq!(
            (err.kind(), err.subsystem()),
            (ErrorKind::Param, Subsystem::Interface),
            "{}",
            variant
        );
        assert_eq!(sai.calls(), Vec::<String>::new(), "{}", variant);
    }
}

#[test]
fn test_member_based_remove_reads_at_most_max_ports_members() {
    let (sai, db) = setup_with_max_ports(SaiVariant::MemberBased, 2);
    db.vlan()
        .add_ports_to_vlan(NpuId(0), vlan(70), Some(&ports(&[1, 2, 3])), None)
        .unwrap();
    sai.clear_calls();

    let err = db
        .vlan()
        .del_ports_from_vlan(NpuId(0), vlan(70), Some(&ports(&[1])), None)
        .unwrap_err();
    assert_eq!(
        err,
        NdiError::config_status(Subsystem::Interface, SaiStatus::BufferOverflow)
    );
    assert_eq!(sai.calls(), vec!["get_vlan_attribute"]);
    assert_eq!(sai.state.lock().unwrap().members.len(), 3);

    // Two members fit the buffer exactly.
    let (sai, db) = setup_with_max_ports(SaiVariant::MemberBased, 2);
    db.vlan()
        .add_ports_to_vlan(NpuId(0), vlan(70), Some(&ports(&[1, 2])), None)
        .unwrap();
    db.vlan()
        .del_ports_from_vlan(NpuId(0), vlan(70), Some(&ports(&[1, 2])), None)
        .unwrap();
    assert!(sai.state.lock().unwrap().members.is_empty());
}

#[test]
fn test_member_based_remove_vendor_failures_are_wrapped() {
    let (sai, db) = setup(SaiVariant::MemberBased);
    db.vlan()
        .add_ports_to_vlan(NpuId(0), vlan(80), Some(&ports(&[1, 2])), None)
        .unwrap();

    sai.fail("get_vlan_attribute", SaiStatus::InvalidVlanId);
    let err = db
        .vlan()
        .del_ports_from_vlan(NpuId(0), vlan(80), Some(&ports(&[1])), None)
        .unwrap_err();
    assert_eq!(
        err,
        NdiError::config_status(Subsystem::Interface, SaiStatus::InvalidVlanId)
    );
    sai.state.lock().unwrap().fail.clear();

    sai.fail("get_vlan_member_attribute", SaiStatus::Failure);
    let err = db
        .vlan()
        .del_ports_from_vlan(NpuId(0), vlan(80), Some(&ports(&[1])), None)
        .unwrap_err();
    assert_eq!(err, NdiError::config_status(Subsystem::Interface, SaiStatus::Failure));
    assert!(!sai.calls().iter().any(|c| c == "remove_vlan_member"));
    assert_eq!(sai.state.lock().unwrap().members.len(), 2);
    sai.state.lock().unwrap().fail.clear();

    sai.fail("remove_vlan_member", SaiStatus::ObjectInUse);
    let err = db
        .vlan()
        .del_ports_from_vlan(NpuId(0), vlan(80), Some(&ports(&[1, 2])), None)
        .unwrap_err();
    assert_eq!(
        err,
        NdiError::config_status(Subsystem::Interface, SaiStatus::ObjectInUse)
    );
    assert_eq!(sai.calls().iter().filter(|c| *c == "remove_vlan_member").count(), 1);
    assert_eq!(sai.state.lock().unwrap().members.len(), 2);
}

#[test]
fn test_vlan_stats() {
    let (sai, db) = setup(SaiVariant::Native);

    let values = db
        .vlan()
        .vlan_stats_get(
            NpuId(0),
            vlan(7),
            &[InterfaceStat::OutQlen, InterfaceStat::InOctets],
        )
        .unwrap();
    assert_eq!(
        values,
        vec![700 + SaiVlanStat::OutQlen as u64, 700 + SaiVlanStat::InOctets as u64]
    );

    sai.fail("get_vlan_stats", SaiStatus::NotSupported);
    let err = db
        .vlan()
        .vlan_stats_get(NpuId(0), vlan(7), &[InterfaceStat::InOctets])
        .unwrap_err();
    assert_eq!(err, NdiError::fail(Subsystem::Npu, SaiStatus::NotSupported));
}

#[test]
fn test_vlan_learning() {
    let (sai, db) = setup(SaiVariant::Native);

    db.vlan()
        .set_vlan_learning(NpuId(0), vlan(5), LearningMode::Disabled)
        .unwrap();
    db.vlan()
        .set_vlan_learning(NpuId(0), vlan(6), LearningMode::Enabled)
        .unwrap();
    {
        let state = sai.state.lock().unwrap();
        let learn_disable = u32::from(VlanAttr::LearnDisable);
        assert_eq!(state.vlan_attrs[&(5, learn_disable)], SaiAttributeValue::Bool(true));
        assert_eq!(state.vlan_attrs[&(6, learn_disable)], SaiAttributeValue::Bool(false));
    }

    sai.fail("set_vlan_attribute", SaiStatus::Failure);
    let err = db
        .vlan()
        .set_vlan_learning(NpuId(0), vlan(5), LearningMode::Enabled)
        .unwrap_err();
    assert_eq!(err, NdiError::config_status(Subsystem::Interface, SaiStatus::Failure));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_drives_membership_strategy() {
    let config = NdiConfig::from_toml_str(
        r#"
[[npu]]
npu_id = 0
switch_id = 0x21000000000000

[[npu.port]]
npu_port = 1
sai_port = 0x1000000000001

[[npu]]
npu_id = 1
switch_id = 0x21000000000000
sai_variant = "member-based"

[[npu.port]]
npu_port = 1
sai_port = 0x1000000000001
"#,
        "inline.toml",
    )
    .unwrap();

    let native = MockSai::new(false);
    let emulated = MockSai::new(true);
    let db = config.build_db(|npu| {
        if npu == NpuId(0) {
            native.apis()
        } else {
            emulated.apis()
        }
    });

    let port_on = |npu| PortList::from(vec![NdiPort::new(NpuId(npu), NpuPort(1))]);

    db.vlan()
        .add_ports_to_vlan(NpuId(0), vlan(10), Some(&port_on(0)), None)
        .unwrap();
    db.vlan()
        .add_ports_to_vlan(NpuId(1), vlan(10), Some(&port_on(1)), None)
        .unwrap();

    assert_eq!(native.calls(), vec!["add_ports_to_vlan"]);
    assert_eq!(emulated.calls(), vec!["create_vlan_member"]);
}
