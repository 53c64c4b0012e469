//! Core built-ins registration.
//!
//! This module provides the function to register all core built-in objects
//! with the BuiltInRegistry.

use crate::runner::plugin::registry::BuiltInRegistry;

use super::console;
use super::generics;

/// Register all core built-in objects with the registry.
pub fn register_core_builtins(registry: &mut BuiltInRegistry) {
    console::register(registry);
    generics::register(registry);
}
