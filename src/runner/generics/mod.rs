//! Generic helpers the binding layer hands to script code.
//!
//! Two independent facilities live here:
//!
//! - **Collection views** ([`collection`]): wrap host collections so they can
//!   be read both by index (`list[0]`) and by name (`map["id"]`). Script
//!   engines would use a transparent proxy for this; here the interception is
//!   an explicit [`CollectionView`] that the binding layer calls.
//! - **Console formatter** ([`formatter`]): printf-style substitution of
//!   `%s`, `%d`, `%i`, `%f`, `%o` and `%O` for console output.
//!
//! [`Generics`] bundles both behind the three entry points the binding layer
//! needs, and [`crate::runner::std_lib::generics`] registers the same entry
//! points as a built-in object.
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//! use just_generics::runner::ds::host_object::{HostObject, ListCapability};
//! use just_generics::runner::ds::object_property::PropertyKey;
//! use just_generics::runner::ds::value::JsValue;
//! use just_generics::runner::generics::{CollectionView, Generics};
//!
//! struct Fruits(Vec<&'static str>);
//!
//! impl HostObject for Fruits {
//!     fn get_property(&self, key: &PropertyKey) -> JsValue {
//!         match key.as_name() {
//!             Some("length") => JsValue::from(self.0.len() as i64),
//!             _ => JsValue::Undefined,
//!         }
//!     }
//!     fn has_property(&self, key: &PropertyKey) -> bool {
//!         key.as_name() == Some("length")
//!     }
//! }
//!
//! impl ListCapability for Fruits {
//!     fn length(&self) -> u32 {
//!         self.0.len() as u32
//!     }
//!     fn item(&self, index: u32) -> JsValue {
//!         self.0.get(index as usize).map_or(JsValue::Null, |s| JsValue::from(*s))
//!     }
//! }
//!
//! let generics = Generics::new();
//! let fruits = generics.make_list_proxy(Rc::new(Fruits(vec!["apple", "pear"])));
//! assert!(fruits.has_key(&PropertyKey::Int(1)));
//! assert!(!fruits.has_key(&PropertyKey::Int(2)));
//! assert_eq!(fruits.get_value(&PropertyKey::Int(0)), JsValue::from("apple"));
//! assert_eq!(fruits.get_value(&"length".into()), JsValue::from(2));
//!
//! let parts = generics.console_formatter(vec![JsValue::from("%d fruits"), JsValue::from("2")]);
//! assert_eq!(parts, vec![JsValue::from("2 fruits")]);
//! ```

use std::rc::Rc;

use crate::runner::ds::host_object::{ListCapability, NodeMapCapability};
use crate::runner::ds::value::JsValue;

pub mod collection;
pub mod formatter;

pub use collection::{CollectionView, ListProxy, NodeMapProxy};
pub use formatter::{format, ConversionSpecifier};

/// Name under which the namespace is registered as a built-in.
pub const GENERICS_OBJECT_NAME: &str = "Generics";

/// The namespace object: two view factories and the console formatter.
#[derive(Debug, Default, Clone, Copy)]
pub struct Generics;

impl Generics {
    pub fn new() -> Self {
        Generics
    }

    /// Wrap a list so it answers index and property access.
    pub fn make_list_proxy<T: ListCapability + ?Sized>(&self, inner: Rc<T>) -> ListProxy<T> {
        ListProxy::new(inner)
    }

    /// Wrap a node map so named items are reachable as properties.
    pub fn make_node_map_proxy<T: NodeMapCapability + ?Sized>(
        &self,
        inner: Rc<T>,
    ) -> NodeMapProxy<T> {
        NodeMapProxy::new(inner)
    }

    /// See [`formatter::format`].
    pub fn console_formatter(&self, args: Vec<JsValue>) -> Vec<JsValue> {
        format(args)
    }
}
