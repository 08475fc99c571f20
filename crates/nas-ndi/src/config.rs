//! Configuration file support for the NDI layer.
//!
//! Loads the NPU inventory from a TOML file: which SAI generation each NPU
//! runs, its switch object, its port count and its port-to-SAI-object table.
//! Default location: /etc/sonic/nas-ndi.toml
//!
//! ```toml
//! sai_variant = "native"
//!
//! [[npu]]
//! npu_id = 0
//! switch_id = 0x21000000000000
//! max_ports = 64
//!
//! [[npu.port]]
//! npu_port = 1
//! sai_port = 0x1000000000001
//! ```

use crate::db::{NdiDb, NpuContext, SaiVariant};
use nas_types::{NpuId, NpuPort};
use ndi_sai::{PortOid, SaiApiTable, SwitchOid};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Default configuration file location.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/sonic/nas-ndi.toml";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid {field}: {message}")]
    Invalid { field: String, message: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// One chip-local port and the SAI port object behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping {
    pub npu_port: u32,
    pub sai_port: u64,
}

/// Per-NPU configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpuConfig {
    pub npu_id: u32,

    /// Raw SAI switch object ID
    pub switch_id: u64,

    /// Maximum number of ports; also sizes VLAN member list reads
    #[serde(default = "default_max_ports")]
    pub max_ports: u32,

    /// Overrides the file-wide SAI generation for this NPU
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sai_variant: Option<SaiVariant>,

    #[serde(default, rename = "port")]
    pub ports: Vec<PortMapping>,
}

fn default_max_ports() -> u32 {
    NpuContext::DEFAULT_MAX_PORTS
}

/// Complete NDI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NdiConfig {
    /// SAI generation of every NPU without its own setting
    #[serde(default)]
    pub sai_variant: SaiVariant,

    #[serde(default, rename = "npu")]
    pub npus: Vec<NpuConfig>,
}

impl NdiConfig {
    /// Parses a configuration document. `path` is only used in errors.
    pub fn from_toml_str(content: &str, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// Loads and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content, path)?;
        config.validate()?;
        info!(path = %path.display(), npus = config.npus.len(), "loaded NDI configuration");
        Ok(config)
    }

    /// Loads from the default location.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(DEFAULT_CONFIG_PATH)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// SAI generation an NPU runs, after per-NPU overrides.
    pub fn variant_of(&self, npu: &NpuConfig) -> SaiVariant {
        npu.sai_variant.unwrap_or(self.sai_variant)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut npu_ids = HashSet::new();
        for npu in &self.npus {
            if !npu_ids.insert(npu.npu_id) {
                return Err(ConfigError::invalid(
                    "npu_id",
                    format!("NPU {} is configured more than once", npu.npu_id),
                ));
            }

            if npu.max_ports == 0 {
                return Err(ConfigError::invalid(
                    "max_ports",
                    format!("NPU {} must have max_ports > 0", npu.npu_id),
                ));
            }

            if npu.switch_id == 0 {
                return Err(ConfigError::invalid(
                    "switch_id",
                    format!("NPU {} has a null switch object", npu.npu_id),
                ));
            }

            let mut ports = HashSet::new();
            for port in &npu.ports {
                if !ports.insert(port.npu_port) {
                    return Err(ConfigError::invalid(
                        "port",
                        format!("NPU {} maps port {} more than once", npu.npu_id, port.npu_port),
                    ));
                }
                if port.sai_port == 0 {
                    return Err(ConfigError::invalid(
                        "sai_port",
                        format!("NPU {} port {} maps to a null object", npu.npu_id, port.npu_port),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Builds the NPU registry. `apis` supplies the vendor API tables for
    /// each configured NPU.
    pub fn build_db(&self, mut apis: impl FnMut(NpuId) -> SaiApiTable) -> NdiDb {
        let mut db = NdiDb::new();
        for npu in &self.npus {
            let npu_id = NpuId(npu.npu_id);
            let ctx = NpuContext::new(
                npu_id,
                SwitchOid::from_raw_unchecked(npu.switch_id),
                apis(npu_id),
                self.variant_of(npu),
            )
            .with_max_ports(npu.max_ports)
            .with_ports(npu.ports.iter().map(|p| {
                (NpuPort(p.npu_port), PortOid::from_raw_unchecked(p.sai_port))
            }));
            db.register(ctx);
        }
        db
    }
}
