//! Type-safe SAI object IDs.
//!
//! `sai_object_id_t` is a bare 64-bit value in C. Wrapping it in a
//! kind-tagged type keeps a WRED profile OID from being passed where a
//! queue OID is expected.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Raw SAI object ID type (matches `sai_object_id_t`).
pub type RawSaiObjectId = u64;

/// Marker trait for SAI object kinds.
pub trait SaiObjectKind: Send + Sync + 'static {
    /// Returns the SAI object type name for debugging.
    fn type_name() -> &'static str;
}

/// A SAI object ID tagged with its object kind.
///
/// ```
/// use ndi_sai::{QueueOid, WredOid};
///
/// let queue = QueueOid::from_raw(0x15000000000001).unwrap();
/// let wred = WredOid::from_raw(0x13000000000001).unwrap();
/// assert_ne!(queue.as_raw(), wred.as_raw());
///
/// assert!(QueueOid::from_raw(0).is_none());
/// ```
#[derive(Clone, Copy)]
pub struct SaiObjectId<T: SaiObjectKind> {
    raw: RawSaiObjectId,
    _marker: PhantomData<T>,
}

impl<T: SaiObjectKind> SaiObjectId<T> {
    /// `SAI_NULL_OBJECT_ID`.
    pub const NULL: Self = Self::from_raw_unchecked(0);

    /// Wraps a raw value, returning `None` for the null object ID.
    pub fn from_raw(raw: RawSaiObjectId) -> Option<Self> {
        (raw != 0).then_some(Self::from_raw_unchecked(raw))
    }

    /// Wraps a raw value, null included.
    pub const fn from_raw_unchecked(raw: RawSaiObjectId) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    pub const fn as_raw(&self) -> RawSaiObjectId {
        self.raw
    }

    pub const fn is_null(&self) -> bool {
        self.raw == 0
    }
}

impl<T: SaiObjectKind> fmt::Debug for SaiObjectId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:016x})", T::type_name(), self.raw)
    }
}

impl<T: SaiObjectKind> fmt::Display for SaiObjectId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.raw)
    }
}

impl<T: SaiObjectKind> PartialEq for SaiObjectId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T: SaiObjectKind> Eq for SaiObjectId<T> {}

impl<T: SaiObjectKind> Hash for SaiObjectId<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<T: SaiObjectKind> Default for SaiObjectId<T> {
    fn default() -> Self {
        Self::NULL
    }
}

macro_rules! define_object_kind {
    ($name:ident, $type_name:literal, $oid_alias:ident) => {
        #[doc = concat!("Marker type for SAI ", $type_name, " objects.")]
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl SaiObjectKind for $name {
            fn type_name() -> &'static str {
                $type_name
            }
        }

        #[doc = concat!("SAI ", $type_name, " object ID.")]
        pub type $oid_alias = SaiObjectId<$name>;
    };
}

define_object_kind!(SwitchKind, "Switch", SwitchOid);
define_object_kind!(PortKind, "Port", PortOid);
define_object_kind!(QueueKind, "Queue", QueueOid);
define_object_kind!(VlanMemberKind, "VlanMember", VlanMemberOid);
define_object_kind!(WredKind, "Wred", WredOid);
define_object_kind!(BufferProfileKind, "BufferProfile", BufferProfileOid);
define_object_kind!(SchedulerKind, "Scheduler", SchedulerOid);
