//! Data structures: script values, objects and the operations on them.

pub mod error;
pub mod host_object;
pub mod object;
pub mod object_property;
pub mod operations;
pub mod symbol;
pub mod value;
