//! Vendor SAI (Switch Abstraction Interface) surface used by the NDI layer.
//!
//! The vendor library exposes its functionality as tables of C function
//! pointers. This crate models that boundary in Rust:
//!
//! - [`types`]: type-safe SAI object IDs
//! - [`status`]: `sai_status_t` codes
//! - [`attribute`]: attribute records and the attribute ID enumerations
//! - [`stats`]: queue and VLAN counter IDs
//! - [`api`]: the switch, port, queue and VLAN API tables as traits
//!
//! A vendor integration implements the traits in [`api`] over the real
//! function-pointer tables; tests implement them with in-memory mocks.
//!
//! # Example
//!
//! ```ignore
//! use ndi_sai::{QueueApi, QueueAttr, QueueOid, SaiAttribute, SaiStatus, WredOid};
//!
//! fn bind_wred(api: &dyn QueueApi, queue: QueueOid, wred: WredOid) -> SaiStatus {
//!     let attr = SaiAttribute::oid(QueueAttr::WredProfileId, wred.as_raw());
//!     api.set_queue_attribute(queue, &attr)
//! }
//! ```

pub mod api;
pub mod attribute;
pub mod stats;
pub mod status;
pub mod types;

pub use api::{PortApi, QueueApi, SaiApiTable, SwitchApi, VlanApi};
pub use attribute::{
    PortAttr, QueueAttr, SaiAttribute, SaiAttributeValue, SaiObjectList, SaiQueueType,
    SaiVlanPort, SaiVlanTaggingMode, SwitchAttr, VlanAttr, VlanMemberAttr,
};
pub use stats::{SaiQueueStat, SaiVlanStat};
pub use status::SaiStatus;
pub use types::{
    BufferProfileKind, BufferProfileOid, PortKind, PortOid, QueueKind, QueueOid, RawSaiObjectId,
    SaiObjectId, SaiObjectKind, SchedulerKind, SchedulerOid, SwitchKind, SwitchOid,
    VlanMemberKind, VlanMemberOid, WredKind, WredOid,
};
