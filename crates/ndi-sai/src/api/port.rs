//! `sai_port_api_t`.

use crate::attribute::SaiAttribute;
use crate::status::SaiStatus;
use crate::types::PortOid;

/// Port API table.
pub trait PortApi: Send + Sync {
    /// `get_port_attribute`: fills in the value of every record in `attrs`.
    ///
    /// Object-list attributes are written into the caller's buffer; if the
    /// port has more objects than the buffer holds the vendor sets the real
    /// count and returns `BufferOverflow`.
    fn get_port_attribute(&self, port: PortOid, attrs: &mut [SaiAttribute]) -> SaiStatus;
}
