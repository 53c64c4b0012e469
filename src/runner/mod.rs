//! Runtime support for script bindings.
//!
//! - [`ds`] - values, objects and the operations on them
//! - [`generics`] - collection views and the console formatter
//! - [`plugin`] - built-in registry, evaluation context and configuration
//! - [`std_lib`] - the `console` and `Generics` built-ins

pub mod ds;
pub mod generics;
pub mod plugin;
pub mod std_lib;
