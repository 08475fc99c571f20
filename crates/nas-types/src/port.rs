//! NPU and port addressing.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a network processing unit (switch chip).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NpuId(pub u32);

impl fmt::Display for NpuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chip-local port number. Port 0 is the CPU port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NpuPort(pub u32);

impl NpuPort {
    /// The CPU port.
    pub const CPU: NpuPort = NpuPort(0);

    /// Returns true for the CPU port.
    pub const fn is_cpu(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NpuPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A port addressed by NPU and chip-local port number.
///
/// Formats as `npu/port`, e.g. `0/12`.
///
/// ```
/// use nas_types::{NdiPort, NpuId, NpuPort};
///
/// let port: NdiPort = "1/12".parse().unwrap();
/// assert_eq!(port, NdiPort::new(NpuId(1), NpuPort(12)));
/// assert_eq!(port.to_string(), "1/12");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NdiPort {
    pub npu_id: NpuId,
    pub npu_port: NpuPort,
}

impl NdiPort {
    pub const fn new(npu_id: NpuId, npu_port: NpuPort) -> Self {
        Self { npu_id, npu_port }
    }

    /// Returns true if this is the CPU port of its NPU.
    pub const fn is_cpu(&self) -> bool {
        self.npu_port.is_cpu()
    }
}

impl fmt::Display for NdiPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.npu_id, self.npu_port)
    }
}

impl FromStr for NdiPort {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (npu, port) = s
            .split_once('/')
            .ok_or_else(|| ParseError::InvalidNdiPort(s.to_string()))?;
        let npu_id = npu
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidNdiPort(s.to_string()))?;
        let npu_port = port
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidNdiPort(s.to_string()))?;

        Ok(NdiPort::new(NpuId(npu_id), NpuPort(npu_port)))
    }
}

/// Ordered list of ports for VLAN membership requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortList(Vec<NdiPort>);

impl PortList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, port: NdiPort) {
        self.0.push(port);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NdiPort> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[NdiPort] {
        &self.0
    }
}

impl From<Vec<NdiPort>> for PortList {
    fn from(ports: Vec<NdiPort>) -> Self {
        Self(ports)
    }
}

impl FromIterator<NdiPort> for PortList {
    fn from_iter<I: IntoIterator<Item = NdiPort>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PortList {
    type Item = &'a NdiPort;
    type IntoIter = std::slice::Iter<'a, NdiPort>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
