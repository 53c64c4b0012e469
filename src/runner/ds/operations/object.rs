use crate::runner::ds::host_object::HostObject;
use crate::runner::ds::object::{JsObjectType, ObjectType};
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::value::{JsNumberType, JsValue};
use crate::runner::generics::collection::CollectionView;

/// `key in o`. Collection views answer through their adapter, raw host
/// objects through their own property table.
pub fn has_property(o: &JsObjectType, key: &PropertyKey) -> bool {
    match &*(**o).borrow() {
        ObjectType::Ordinary(obj) => obj.has(key),
        ObjectType::Array(items) => match key {
            PropertyKey::Int(i) => (*i as usize) < items.len(),
            k => k.as_name() == Some("length"),
        },
        ObjectType::List(list) => list.has_property(key),
        ObjectType::NodeMap(map) => map.has_property(key),
        ObjectType::ListProxy(proxy) => proxy.has_key(key),
        ObjectType::NodeMapProxy(proxy) => proxy.has_key(key),
    }
}

/// `o[key]`. Absent properties read as `undefined`.
pub fn get(o: &JsObjectType, key: &PropertyKey) -> JsValue {
    match &*(**o).borrow() {
        ObjectType::Ordinary(obj) => obj.get(key),
        ObjectType::Array(items) => match key {
            PropertyKey::Int(i) => items
                .get(*i as usize)
                .cloned()
                .unwrap_or(JsValue::Undefined),
            k if k.as_name() == Some("length") => {
                JsValue::Number(JsNumberType::Integer(items.len() as i64))
            }
            _ => JsValue::Undefined,
        },
        ObjectType::List(list) => list.get_property(key),
        ObjectType::NodeMap(map) => map.get_property(key),
        ObjectType::ListProxy(proxy) => proxy.get_value(key),
        ObjectType::NodeMapProxy(proxy) => proxy.get_value(key),
    }
}

/// Property read on any value. Primitives have no own properties here.
pub fn get_v(v: &JsValue, key: &PropertyKey) -> JsValue {
    match v {
        JsValue::Object(o) => get(o, key),
        _ => JsValue::Undefined,
    }
}
