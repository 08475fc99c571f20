//! SAI attribute records and attribute ID enumerations.
//!
//! A `sai_attribute_t` pairs a numeric attribute ID with a value union. The
//! Rust model keeps the ID numeric (so one record type serves every object
//! type) and replaces the union with [`SaiAttributeValue`].

use crate::types::{PortOid, RawSaiObjectId, VlanMemberOid};

/// Declares a `#[repr(u32)]` SAI enumeration with `ALL`, `from_raw` and
/// `From<_> for u32`.
macro_rules! sai_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr,)+
        }
    ) => {
        $(#[$meta])*
        #[repr(u32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value,)+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Looks up a value by its raw SAI constant.
            pub fn from_raw(raw: u32) -> Option<Self> {
                match raw {
                    $(x if x == $value => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> u32 {
                value as u32
            }
        }
    };
}

pub(crate) use sai_enum;

sai_enum! {
    /// `sai_queue_attr_t` values used by the NDI layer.
    pub enum QueueAttr {
        Type = 0,
        Port = 1,
        Index = 2,
        ParentSchedulerNode = 3,
        WredProfileId = 4,
        BufferProfileId = 5,
        SchedulerProfileId = 6,
    }
}

sai_enum! {
    /// `sai_port_attr_t` values used by the NDI layer.
    pub enum PortAttr {
        QosNumberOfQueues = 0x2a,
        QosQueueList = 0x2b,
    }
}

sai_enum! {
    /// `sai_vlan_attr_t` values used by the NDI layer.
    pub enum VlanAttr {
        MemberList = 0,
        MaxLearnedAddresses = 1,
        StpInstance = 2,
        LearnDisable = 3,
    }
}

sai_enum! {
    /// `sai_vlan_member_attr_t` values.
    pub enum VlanMemberAttr {
        VlanId = 0,
        PortId = 1,
        TaggingMode = 2,
    }
}

sai_enum! {
    /// `sai_switch_attr_t` values describing the queue layout.
    pub enum SwitchAttr {
        NumberOfUnicastQueues = 0x1c,
        NumberOfMulticastQueues = 0x1d,
        NumberOfQueues = 0x1e,
        NumberOfCpuQueues = 0x1f,
    }
}

sai_enum! {
    /// `sai_queue_type_t`.
    pub enum SaiQueueType {
        All = 0,
        Unicast = 1,
        Multicast = 2,
    }
}

sai_enum! {
    /// `sai_vlan_tagging_mode_t`.
    pub enum SaiVlanTaggingMode {
        Untagged = 0,
        Tagged = 1,
        PriorityTagged = 2,
    }
}

/// `sai_object_list_t`: a caller-owned buffer the vendor fills in.
///
/// `list.len()` is the buffer capacity handed to the vendor. After a get
/// call `count` holds the number of objects the vendor has, which may exceed
/// the capacity (the call then returns `BufferOverflow`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaiObjectList {
    pub count: u32,
    pub list: Vec<RawSaiObjectId>,
}

impl SaiObjectList {
    /// Creates a zeroed buffer with room for `capacity` objects.
    pub fn with_capacity(capacity: u32) -> Self {
        Self {
            count: capacity,
            list: vec![0; capacity as usize],
        }
    }

    /// Returns the valid prefix of the buffer: `min(count, capacity)` entries.
    pub fn filled(&self) -> &[RawSaiObjectId] {
        let n = (self.count as usize).min(self.list.len());
        &self.list[..n]
    }

    /// Writes `objects` into the buffer the way a vendor get call does.
    ///
    /// Returns `false` if the buffer was too small; `count` is always set to
    /// `objects.len()`.
    pub fn fill_from(&mut self, objects: &[RawSaiObjectId]) -> bool {
        let n = objects.len().min(self.list.len());
        self.list[..n].copy_from_slice(&objects[..n]);
        self.count = u32::try_from(objects.len()).unwrap_or(u32::MAX);
        objects.len() <= self.list.len()
    }
}

/// `sai_attribute_value_t`, restricted to the members the NDI layer uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SaiAttributeValue {
    /// Not yet filled in (a get request slot).
    #[default]
    None,
    Bool(bool),
    U16(u16),
    U32(u32),
    S32(i32),
    Oid(RawSaiObjectId),
    ObjList(SaiObjectList),
}

impl SaiAttributeValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SaiAttributeValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u16(&self) -> Option<u16> {
        match self {
            SaiAttributeValue::U16(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            SaiAttributeValue::U32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_s32(&self) -> Option<i32> {
        match self {
            SaiAttributeValue::S32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_oid(&self) -> Option<RawSaiObjectId> {
        match self {
            SaiAttributeValue::Oid(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_obj_list(&self) -> Option<&SaiObjectList> {
        match self {
            SaiAttributeValue::ObjList(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_obj_list_mut(&mut self) -> Option<&mut SaiObjectList> {
        match self {
            SaiAttributeValue::ObjList(v) => Some(v),
            _ => None,
        }
    }
}

/// `sai_attribute_t`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaiAttribute {
    pub id: u32,
    pub value: SaiAttributeValue,
}

impl SaiAttribute {
    pub fn new(id: impl Into<u32>, value: SaiAttributeValue) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }

    /// An attribute slot for a get request.
    pub fn request(id: impl Into<u32>) -> Self {
        Self::new(id, SaiAttributeValue::None)
    }

    pub fn oid(id: impl Into<u32>, oid: RawSaiObjectId) -> Self {
        Self::new(id, SaiAttributeValue::Oid(oid))
    }

    pub fn bool(id: impl Into<u32>, value: bool) -> Self {
        Self::new(id, SaiAttributeValue::Bool(value))
    }

    pub fn u16(id: impl Into<u32>, value: u16) -> Self {
        Self::new(id, SaiAttributeValue::U16(value))
    }

    pub fn s32(id: impl Into<u32>, value: i32) -> Self {
        Self::new(id, SaiAttributeValue::S32(value))
    }

    pub fn obj_list(id: impl Into<u32>, list: SaiObjectList) -> Self {
        Self::new(id, SaiAttributeValue::ObjList(list))
    }

    /// Returns true if this record carries the given attribute ID.
    pub fn is(&self, id: impl Into<u32>) -> bool {
        self.id == id.into()
    }
}

/// Port/VLAN membership record (`sai_vlan_port_t`).
///
/// Only the native SAI generation takes this record directly; the member
/// based generation uses it as scratch space while emulating the bulk calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaiVlanPort {
    pub port_id: PortOid,
    pub tagging_mode: SaiVlanTaggingMode,
    pub vlan_member_id: VlanMemberOid,
}

impl SaiVlanPort {
    pub fn new(port_id: PortOid, tagging_mode: SaiVlanTaggingMode) -> Self {
        Self {
            port_id,
            tagging_mode,
            vlan_member_id: VlanMemberOid::NULL,
        }
    }
}
