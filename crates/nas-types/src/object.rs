//! Opaque NDI object handles.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// NAS-side handle for a queue, WRED profile, buffer profile or scheduler
/// profile (`ndi_obj_id_t`).
///
/// The handle carries the raw SAI object ID; the NDI layer converts it into
/// a typed SAI OID at the vendor boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NdiObjectId(pub u64);

impl NdiObjectId {
    /// The null handle.
    pub const NULL: NdiObjectId = NdiObjectId(0);

    pub const fn as_raw(&self) -> u64 {
        self.0
    }

    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NdiObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.0)
    }
}

impl FromStr for NdiObjectId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => s.parse(),
        };
        parsed
            .map(NdiObjectId)
            .map_err(|_| ParseError::InvalidObjectId(s.to_string()))
    }
}
