//! NAS Network Device Interface (NDI).
//!
//! Translates the NAS data model (queues, QoS profiles, VLANs) onto a
//! vendor SAI library. Every call follows the same shape:
//!
//! 1. resolve the NPU's [`NpuContext`] from the [`NdiDb`], failing before
//!    any vendor call if the NPU is unknown
//! 2. build an attribute or counter list sized to the request
//! 3. invoke one vendor API entry
//! 4. wrap a vendor failure status in an [`NdiError`]
//! 5. copy results back through enum-keyed lookups
//!
//! # Modules
//!
//! - [`qos`]: queue profile bindings, queue lists and queue counters
//! - [`vlan`]: VLAN lifecycle, port membership, counters and learning
//! - [`switch`]: switch-wide queue layout
//! - [`shell`]: debug shell command registration
//! - [`config`]: TOML NPU inventory
//!
//! # Example
//!
//! ```ignore
//! use nas_ndi::{NdiConfig, QueueStat, QueueStatCounters};
//!
//! let config = NdiConfig::load_default()?;
//! let db = config.build_db(|npu| vendor::api_table(npu));
//!
//! let mut counters = QueueStatCounters::default();
//! db.qos().get_queue_stats(port, queue, &[QueueStat::Packets], &mut counters)?;
//! ```

pub mod config;
pub mod convert;
pub mod db;
pub mod error;
pub mod qos;
pub mod shell;
pub mod switch;
pub mod vlan;

pub use config::{ConfigError, NdiConfig, NpuConfig, PortMapping, DEFAULT_CONFIG_PATH};
pub use db::{NdiDb, NpuContext, SaiVariant};
pub use error::{ErrorKind, NdiError, NdiResult, SaiStatusExt, Subsystem};
pub use qos::{
    QueueAttributes, QueueIdList, QueueNdi, QueueStat, QueueStatCounters, QueueType,
};
pub use shell::{CheckRunFunction, CommandShell, CommandTable, HalShell, ShellFunction};
pub use switch::{QueueNumbers, SwitchNdi};
pub use vlan::{InterfaceStat, LearningMode, PortMembership, VlanNdi};
