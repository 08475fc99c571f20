//! Conversions between NDI object handles and SAI object IDs.
//!
//! NDI handles carry the raw SAI object ID, so both directions are an
//! identity on the value; the conversion only attaches or drops the SAI
//! object kind.

use nas_types::NdiObjectId;
use ndi_sai::{RawSaiObjectId, SaiObjectId, SaiObjectKind};

/// NDI handle to typed SAI object ID (`ndi2sai_*_id`).
pub fn to_sai<K: SaiObjectKind>(id: NdiObjectId) -> SaiObjectId<K> {
    SaiObjectId::from_raw_unchecked(id.as_raw())
}

/// Typed SAI object ID to NDI handle (`sai2ndi_*_id`).
pub fn from_sai<K: SaiObjectKind>(oid: SaiObjectId<K>) -> NdiObjectId {
    NdiObjectId(oid.as_raw())
}

/// Raw SAI object ID, as read from an attribute value, to NDI handle.
pub fn from_raw_sai(raw: RawSaiObjectId) -> NdiObjectId {
    NdiObjectId(raw)
}
