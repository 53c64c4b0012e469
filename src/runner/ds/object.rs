use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::runner::ds::host_object::{HostObject, ListCapability, NodeMapCapability};
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::symbol::SYMBOL_TO_STRING_TAG;
use crate::runner::ds::value::JsValue;
use crate::runner::generics::collection::{ListProxy, NodeMapProxy};

pub type JsObjectType = Rc<RefCell<ObjectType>>;

pub enum ObjectType {
    Ordinary(OrdinaryObject),
    Array(Vec<JsValue>),
    /// Host list handed over by the binding layer, not yet wrapped.
    List(Rc<dyn ListCapability>),
    /// Host node map handed over by the binding layer, not yet wrapped.
    NodeMap(Rc<dyn NodeMapCapability>),
    ListProxy(ListProxy<dyn ListCapability>),
    NodeMapProxy(NodeMapProxy<dyn NodeMapCapability>),
}

impl ObjectType {
    pub fn class_name(&self) -> &str {
        match self {
            ObjectType::Ordinary(o) => o.to_string_tag().unwrap_or("Object"),
            ObjectType::Array(_) => "Array",
            ObjectType::List(l) => l.class_name(),
            ObjectType::NodeMap(m) => m.class_name(),
            ObjectType::ListProxy(p) => p.target().class_name(),
            ObjectType::NodeMapProxy(p) => p.target().class_name(),
        }
    }

    pub fn into_js_object(self) -> JsObjectType {
        Rc::new(RefCell::new(self))
    }

    pub fn into_js_value(self) -> JsValue {
        JsValue::Object(self.into_js_object())
    }
}

/// A plain property bag.
#[derive(Default)]
pub struct OrdinaryObject {
    properties: HashMap<PropertyKey, JsValue>,
}

impl OrdinaryObject {
    pub fn new() -> Self {
        OrdinaryObject {
            properties: HashMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<PropertyKey>, value: JsValue) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &PropertyKey) -> JsValue {
        self.properties
            .get(key)
            .cloned()
            .unwrap_or(JsValue::Undefined)
    }

    pub fn has(&self, key: &PropertyKey) -> bool {
        self.properties.contains_key(key)
    }

    pub fn set(&mut self, key: impl Into<PropertyKey>, value: JsValue) -> Option<JsValue> {
        self.properties.insert(key.into(), value)
    }

    /// The `Symbol.toStringTag` own property, when it holds a string.
    pub fn to_string_tag(&self) -> Option<&str> {
        self.properties
            .get(&PropertyKey::Sym(SYMBOL_TO_STRING_TAG.clone()))
            .and_then(JsValue::as_str)
    }
}
