//! Index- and name-keyed views over host collections.
//!
//! A view holds a shared reference to one host collection and answers
//! containment and reads on its behalf. Integer keys go to the collection's
//! index space, everything else to the wrapped object (or, for node maps,
//! to the named-item lookup first).

use std::fmt;
use std::rc::Rc;

use log::trace;

use crate::runner::ds::host_object::{HostObject, ListCapability, NodeMapCapability};
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::value::JsValue;

/// Explicit stand-in for property interception on a collection object.
pub trait CollectionView {
    /// `key in view`.
    fn has_key(&self, key: &PropertyKey) -> bool;

    /// `view[key]`. Never raises; absence is whatever the host reports.
    fn get_value(&self, key: &PropertyKey) -> JsValue;
}

/// View over a plain indexed collection.
pub struct ListProxy<T: ?Sized> {
    target: Rc<T>,
}

impl<T: ListCapability + ?Sized> ListProxy<T> {
    pub fn new(target: Rc<T>) -> Self {
        ListProxy { target }
    }
}

impl<T: ?Sized> ListProxy<T> {
    pub fn target(&self) -> &Rc<T> {
        &self.target
    }
}

impl<T: ?Sized> Clone for ListProxy<T> {
    fn clone(&self) -> Self {
        ListProxy {
            target: Rc::clone(&self.target),
        }
    }
}

impl<T: ?Sized> fmt::Debug for ListProxy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListProxy({:p})", Rc::as_ptr(&self.target) as *const ())
    }
}

impl<T: ListCapability + ?Sized> CollectionView for ListProxy<T> {
    fn has_key(&self, key: &PropertyKey) -> bool {
        match key {
            PropertyKey::Int(index) => *index < self.target.length(),
            _ => self.target.has_property(key),
        }
    }

    fn get_value(&self, key: &PropertyKey) -> JsValue {
        trace!("list proxy read: {}", key);
        match key {
            PropertyKey::Int(index) => self.target.item(*index),
            _ => self.target.get_property(key),
        }
    }
}

/// View over an indexed collection that also resolves items by name.
/// Named items shadow raw properties of the same name.
pub struct NodeMapProxy<T: ?Sized> {
    target: Rc<T>,
}

impl<T: NodeMapCapability + ?Sized> NodeMapProxy<T> {
    pub fn new(target: Rc<T>) -> Self {
        NodeMapProxy { target }
    }
}

impl<T: ?Sized> NodeMapProxy<T> {
    pub fn target(&self) -> &Rc<T> {
        &self.target
    }
}

impl<T: ?Sized> Clone for NodeMapProxy<T> {
    fn clone(&self) -> Self {
        NodeMapProxy {
            target: Rc::clone(&self.target),
        }
    }
}

impl<T: ?Sized> fmt::Debug for NodeMapProxy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeMapProxy({:p})", Rc::as_ptr(&self.target) as *const ())
    }
}

impl<T: NodeMapCapability + ?Sized> CollectionView for NodeMapProxy<T> {
    fn has_key(&self, key: &PropertyKey) -> bool {
        match key {
            PropertyKey::Int(index) => *index < self.target.length(),
            PropertyKey::Str(name) => {
                self.target.get_named_item(name).is_some() || self.target.has_property(key)
            }
            PropertyKey::Sym(_) => self.target.has_property(key),
        }
    }

    fn get_value(&self, key: &PropertyKey) -> JsValue {
        trace!("node map proxy read: {}", key);
        match key {
            PropertyKey::Int(index) => self.target.item(*index),
            PropertyKey::Str(name) => match self.target.get_named_item(name) {
                Some(item) => item,
                None => self.target.get_property(key),
            },
            PropertyKey::Sym(_) => self.target.get_property(key),
        }
    }
}
