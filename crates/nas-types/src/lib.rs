//! NAS-side value types for the Network Device Interface (NDI) layer.
//!
//! These are the identifiers the NAS control plane hands to the NDI shim
//! before they are translated into SAI object IDs:
//!
//! - [`NpuId`] / [`NpuPort`] / [`NdiPort`]: a port addressed by chip and
//!   chip-local port number
//! - [`PortList`]: an ordered port list used by VLAN membership calls
//! - [`NdiObjectId`]: opaque handle for queues and QoS profiles
//! - [`VlanId`]: IEEE 802.1Q VLAN identifiers

mod object;
mod port;
mod vlan;

pub use object::NdiObjectId;
pub use port::{NdiPort, NpuId, NpuPort, PortList};
pub use vlan::VlanId;

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid VLAN ID: {0} (must be 1-4094)")]
    InvalidVlanId(u16),

    #[error("invalid NPU port: {0}")]
    InvalidNdiPort(String),

    #[error("invalid object handle: {0}")]
    InvalidObjectId(String),
}
