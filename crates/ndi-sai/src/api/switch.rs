//! `sai_switch_api_t`.

use crate::attribute::SaiAttribute;
use crate::status::SaiStatus;
use crate::types::SwitchOid;

/// Switch API table.
pub trait SwitchApi: Send + Sync {
    /// `get_switch_attribute`: fills in the value of every record in `attrs`.
    fn get_switch_attribute(&self, switch: SwitchOid, attrs: &mut [SaiAttribute]) -> SaiStatus;
}
