//! Vendor SAI API tables.
//!
//! The vendor library hands out one table of function pointers per object
//! type (`sai_switch_api_t`, `sai_port_api_t`, ...). Each table is modelled
//! as an object-safe trait whose methods mirror the C entries one to one and
//! return the raw [`SaiStatus`](crate::SaiStatus). Translating that status
//! into a caller-facing error is the NDI layer's job, not this crate's.
//!
//! # Available API Tables
//!
//! - [`switch`]: switch attribute queries
//! - [`port`]: port attribute queries
//! - [`queue`]: queue attributes and counters
//! - [`vlan`]: VLANs, VLAN members and VLAN counters

pub mod port;
pub mod queue;
pub mod switch;
pub mod vlan;

pub use port::PortApi;
pub use queue::QueueApi;
pub use switch::SwitchApi;
pub use vlan::VlanApi;

use std::fmt;
use std::sync::Arc;

/// The set of API tables the vendor library exposes for one switch.
///
/// Cloning is cheap; every table is reference counted.
#[derive(Clone)]
pub struct SaiApiTable {
    pub switch: Arc<dyn SwitchApi>,
    pub port: Arc<dyn PortApi>,
    pub queue: Arc<dyn QueueApi>,
    pub vlan: Arc<dyn VlanApi>,
}

impl SaiApiTable {
    pub fn new(
        switch: Arc<dyn SwitchApi>,
        port: Arc<dyn PortApi>,
        queue: Arc<dyn QueueApi>,
        vlan: Arc<dyn VlanApi>,
    ) -> Self {
        Self {
            switch,
            port,
            queue,
            vlan,
        }
    }

    /// Builds a table where one object implements every API.
    pub fn from_single<T>(api: Arc<T>) -> Self
    where
        T: SwitchApi + PortApi + QueueApi + VlanApi + 'static,
    {
        Self {
            switch: api.clone(),
            port: api.clone(),
            queue: api.clone(),
            vlan: api,
        }
    }
}

impl fmt::Debug for SaiApiTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaiApiTable").finish_non_exhaustive()
    }
}
