//! Capabilities a host binding layer implements for its native collections.
//!
//! The runtime never sees the host's internals. It only reads through these
//! traits, and never mutates what sits behind them.

use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::value::JsValue;

/// Raw property access on a host object.
///
/// Both methods cover everything script code could reach with plain
/// property syntax, including members inherited through the host's
/// prototype chain (`length`, `item`, ...).
pub trait HostObject {
    /// Read a property. Absent properties read as `JsValue::Undefined`.
    fn get_property(&self, key: &PropertyKey) -> JsValue;

    /// Is the property present?
    fn has_property(&self, key: &PropertyKey) -> bool;

    /// Name used when the object is stringified, as in `[object NodeList]`.
    fn class_name(&self) -> &str {
        "Object"
    }
}

/// An indexed host collection (`NodeList`, `HTMLCollection`, ...).
pub trait ListCapability: HostObject {
    fn length(&self) -> u32;

    /// Item at `index`. What an out-of-range index yields is up to the host.
    fn item(&self, index: u32) -> JsValue;
}

/// An indexed host collection that also resolves items by name
/// (`NamedNodeMap`, ...).
pub trait NodeMapCapability: ListCapability {
    /// Named lookup. `None` means no item carries that name.
    fn get_named_item(&self, name: &str) -> Option<JsValue>;
}
