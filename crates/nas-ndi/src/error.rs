//! NDI error codes.
//!
//! Every failure the NDI layer reports is one of four kinds, tagged with the
//! subsystem that raised it. Failures that originate in the vendor library
//! carry the vendor status so operators can see what SAI actually said;
//! failures detected locally (unknown NPU, unmapped counter) carry none.

use ndi_sai::SaiStatus;
use std::fmt;
use thiserror::Error;

/// Subsystem that raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subsystem {
    Qos,
    Interface,
    Npu,
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Subsystem::Qos => "QOS",
            Subsystem::Interface => "INTERFACE",
            Subsystem::Npu => "NPU",
        };
        write!(f, "{}", s)
    }
}

/// Error kind, independent of subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Config,
    NoMemory,
    Param,
    Fail,
}

fn describe(status: &Option<SaiStatus>) -> String {
    match status {
        Some(status) => status.to_string(),
        None => "no vendor status".to_string(),
    }
}

/// Error type for NDI operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NdiError {
    /// Missing device context or a vendor configuration call failed.
    #[error("{subsystem} configuration error ({})", describe(.status))]
    Config {
        subsystem: Subsystem,
        status: Option<SaiStatus>,
    },

    /// A request buffer could not be allocated.
    #[error("{subsystem} out of memory")]
    NoMemory { subsystem: Subsystem },

    /// The request could not be translated for the vendor.
    #[error("{subsystem} parameter error: {message}")]
    Param { subsystem: Subsystem, message: String },

    /// A vendor call failed outside the configuration path.
    #[error("{subsystem} failure ({status})")]
    Fail {
        subsystem: Subsystem,
        status: SaiStatus,
    },
}

impl NdiError {
    /// Creates a configuration error with no vendor status.
    pub fn config(subsystem: Subsystem) -> Self {
        NdiError::Config {
            subsystem,
            status: None,
        }
    }

    /// Creates a configuration error wrapping a vendor status.
    pub fn config_status(subsystem: Subsystem, status: SaiStatus) -> Self {
        NdiError::Config {
            subsystem,
            status: Some(status),
        }
    }

    pub fn no_memory(subsystem: Subsystem) -> Self {
        NdiError::NoMemory { subsystem }
    }

    pub fn param(subsystem: Subsystem, message: impl Into<String>) -> Self {
        NdiError::Param {
            subsystem,
            message: message.into(),
        }
    }

    pub fn fail(subsystem: Subsystem, status: SaiStatus) -> Self {
        NdiError::Fail { subsystem, status }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            NdiError::Config { .. } => ErrorKind::Config,
            NdiError::NoMemory { .. } => ErrorKind::NoMemory,
            NdiError::Param { .. } => ErrorKind::Param,
            NdiError::Fail { .. } => ErrorKind::Fail,
        }
    }

    pub fn subsystem(&self) -> Subsystem {
        match self {
            NdiError::Config { subsystem, .. }
            | NdiError::NoMemory { subsystem }
            | NdiError::Param { subsystem, .. }
            | NdiError::Fail { subsystem, .. } => *subsystem,
        }
    }

    /// Returns the wrapped vendor status, if the error came from SAI.
    pub fn sai_status(&self) -> Option<SaiStatus> {
        match self {
            NdiError::Config { status, .. } => *status,
            NdiError::Fail { status, .. } => Some(*status),
            NdiError::NoMemory { .. } | NdiError::Param { .. } => None,
        }
    }
}

/// Result type for NDI operations.
pub type NdiResult<T> = Result<T, NdiError>;

/// Converts a vendor status into an NDI result.
pub trait SaiStatusExt {
    /// Success, or a configuration error wrapping the status.
    fn or_config_error(self, subsystem: Subsystem) -> NdiResult<()>;

    /// Success, or a failure error wrapping the status.
    fn or_failure(self, subsystem: Subsystem) -> NdiResult<()>;
}

impl SaiStatusExt for SaiStatus {
    fn or_config_error(self, subsystem: Subsystem) -> NdiResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(NdiError::config_status(subsystem, self))
        }
    }

    fn or_failure(self, subsystem: Subsystem) -> NdiResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(NdiError::fail(subsystem, self))
        }
    }
}
