//! Generics built-in.
//!
//! Exposes the collection view factories and the console formatter to the
//! binding layer under the `Generics` name.

use std::rc::Rc;

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::object::ObjectType;
use crate::runner::ds::value::JsValue;
use crate::runner::generics::collection::{ListProxy, NodeMapProxy};
use crate::runner::generics::formatter::format;
use crate::runner::generics::GENERICS_OBJECT_NAME;
use crate::runner::plugin::registry::BuiltInRegistry;
use crate::runner::plugin::types::{BuiltInObject, EvalContext};

/// Register the Generics built-in with the registry.
pub fn register(registry: &mut BuiltInRegistry) {
    let generics = BuiltInObject::new(GENERICS_OBJECT_NAME)
        .add_method("makeListProxy", generics_make_list_proxy)
        .add_method("makeNodeMapProxy", generics_make_node_map_proxy)
        .add_method("consoleFormatter", generics_console_formatter);

    registry.register_object(generics);
}

/// Generics.makeListProxy - wrap a host list in an index view.
fn generics_make_list_proxy(
    _ctx: &mut EvalContext,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    let list = match args.first() {
        Some(JsValue::Object(o)) => match &*(**o).borrow() {
            ObjectType::List(list) => Some(Rc::clone(list)),
            _ => None,
        },
        _ => None,
    };

    match list {
        Some(list) => Ok(ObjectType::ListProxy(ListProxy::new(list)).into_js_value()),
        None => Err(JErrorType::TypeError(
            "Generics.makeListProxy expects a host list".to_string(),
        )),
    }
}

/// Generics.makeNodeMapProxy - wrap a host node map in a named-item view.
fn generics_make_node_map_proxy(
    _ctx: &mut EvalContext,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    let map = match args.first() {
        Some(JsValue::Object(o)) => match &*(**o).borrow() {
            ObjectType::NodeMap(map) => Some(Rc::clone(map)),
            _ => None,
        },
        _ => None,
    };

    match map {
        Some(map) => Ok(ObjectType::NodeMapProxy(NodeMapProxy::new(map)).into_js_value()),
        None => Err(JErrorType::TypeError(
            "Generics.makeNodeMapProxy expects a host node map".to_string(),
        )),
    }
}

/// Generics.consoleFormatter - returns the formatted parts as an array.
fn generics_console_formatter(
    _ctx: &mut EvalContext,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    Ok(ObjectType::Array(format(args)).into_js_value())
}
