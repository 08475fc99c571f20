//! SAI status codes.

use std::fmt;

/// SAI status codes matching `sai_status_t`.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaiStatus {
    Success = 0,
    Failure = -1,
    NotSupported = -2,
    NoMemory = -3,
    InsufficientResources = -4,
    InvalidParameter = -5,
    ItemAlreadyExists = -6,
    ItemNotFound = -7,
    BufferOverflow = -8,
    InvalidPortNumber = -9,
    InvalidPortMember = -10,
    InvalidVlanId = -11,
    Uninitialized = -12,
    TableFull = -13,
    MandatoryAttributeMissing = -14,
    NotImplemented = -15,
    AddrNotFound = -16,
    ObjectInUse = -17,
    InvalidObjectType = -18,
    InvalidObjectId = -19,
    InvalidNvStorage = -20,
    NvStorageFull = -21,
    SwUpgradeVersionMismatch = -22,
    NotExecuted = -23,
}

/// Every known status with its C name, in `sai_status_t` order.
const STATUS_NAMES: &[(SaiStatus, &str)] = &[
    (SaiStatus::Success, "SAI_STATUS_SUCCESS"),
    (SaiStatus::Failure, "SAI_STATUS_FAILURE"),
    (SaiStatus::NotSupported, "SAI_STATUS_NOT_SUPPORTED"),
    (SaiStatus::NoMemory, "SAI_STATUS_NO_MEMORY"),
    (SaiStatus::InsufficientResources, "SAI_STATUS_INSUFFICIENT_RESOURCES"),
    (SaiStatus::InvalidParameter, "SAI_STATUS_INVALID_PARAMETER"),
    (SaiStatus::ItemAlreadyExists, "SAI_STATUS_ITEM_ALREADY_EXISTS"),
    (SaiStatus::ItemNotFound, "SAI_STATUS_ITEM_NOT_FOUND"),
    (SaiStatus::BufferOverflow, "SAI_STATUS_BUFFER_OVERFLOW"),
    (SaiStatus::InvalidPortNumber, "SAI_STATUS_INVALID_PORT_NUMBER"),
    (SaiStatus::InvalidPortMember, "SAI_STATUS_INVALID_PORT_MEMBER"),
    (SaiStatus::InvalidVlanId, "SAI_STATUS_INVALID_VLAN_ID"),
    (SaiStatus::Uninitialized, "SAI_STATUS_UNINITIALIZED"),
    (SaiStatus::TableFull, "SAI_STATUS_TABLE_FULL"),
    (SaiStatus::MandatoryAttributeMissing, "SAI_STATUS_MANDATORY_ATTRIBUTE_MISSING"),
    (SaiStatus::NotImplemented, "SAI_STATUS_NOT_IMPLEMENTED"),
    (SaiStatus::AddrNotFound, "SAI_STATUS_ADDR_NOT_FOUND"),
    (SaiStatus::ObjectInUse, "SAI_STATUS_OBJECT_IN_USE"),
    (SaiStatus::InvalidObjectType, "SAI_STATUS_INVALID_OBJECT_TYPE"),
    (SaiStatus::InvalidObjectId, "SAI_STATUS_INVALID_OBJECT_ID"),
    (SaiStatus::InvalidNvStorage, "SAI_STATUS_INVALID_NV_STORAGE"),
    (SaiStatus::NvStorageFull, "SAI_STATUS_NV_STORAGE_FULL"),
    (SaiStatus::SwUpgradeVersionMismatch, "SAI_STATUS_SW_UPGRADE_VERSION_MISMATCH"),
    (SaiStatus::NotExecuted, "SAI_STATUS_NOT_EXECUTED"),
];

impl SaiStatus {
    /// Creates a status from a raw `sai_status_t` value.
    ///
    /// Codes outside the known range (including the per-attribute ranges
    /// such as `SAI_STATUS_INVALID_ATTRIBUTE_0`) collapse to `Failure`.
    pub fn from_raw(status: i32) -> Self {
        // The table is indexed by the negated code.
        let known = status
            .checked_neg()
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| STATUS_NAMES.get(index));

        match known {
            Some(&(known, _)) => known,
            None => {
                log::debug!("unrecognised SAI status {}, reporting as failure", status);
                SaiStatus::Failure
            }
        }
    }

    /// Returns the raw `sai_status_t` value.
    pub const fn raw(self) -> i32 {
        self as i32
    }

    /// Returns the C constant name, e.g. `SAI_STATUS_ITEM_NOT_FOUND`.
    pub fn name(self) -> &'static str {
        STATUS_NAMES[(-self.raw()) as usize].1
    }

    pub fn is_success(&self) -> bool {
        *self == SaiStatus::Success
    }

    pub fn is_error(&self) -> bool {
        !self.is_success()
    }
}

impl fmt::Display for SaiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
