//! Built-in registry for managing built-in objects.

use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use super::types::{BuiltInFn, BuiltInObject, PluginInfo};
use crate::runner::std_lib::register_core_builtins;

/// Error type for plugin operations.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Configuration error.
    #[error("Plugin config error: {0}")]
    ConfigError(String),
    /// Object not found in registry.
    #[error("Object not found: {0}")]
    ObjectNotFound(String),
    /// Method not found on object.
    #[error("Method not found: {0}.{1}")]
    MethodNotFound(String, String),
}

/// Registry for built-in objects.
/// Holds the objects the binding layer exposes and lets a host override
/// individual methods.
pub struct BuiltInRegistry {
    /// All registered built-in objects.
    objects: HashMap<String, BuiltInObject>,

    /// Loaded plugins.
    plugins: Vec<PluginInfo>,

    /// Override chain (object.method -> number of times replaced).
    overrides: HashMap<String, usize>,
}

impl BuiltInRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        BuiltInRegistry {
            objects: HashMap::new(),
            plugins: Vec::new(),
            overrides: HashMap::new(),
        }
    }

    /// Create a registry with core built-ins (`console` and `Generics`).
    pub fn with_core() -> Self {
        let mut registry = Self::new();

        register_core_builtins(&mut registry);

        let mut provides: Vec<String> = registry.objects.keys().cloned().collect();
        provides.sort();
        registry
            .plugins
            .push(PluginInfo::new("core", env!("CARGO_PKG_VERSION")).with_provides(provides));

        registry
    }

    /// Register a built-in object (programmatic API).
    pub fn register_object(&mut self, obj: BuiltInObject) {
        debug!(
            "registering built-in {} ({} methods)",
            obj.name,
            obj.methods.len()
        );
        self.objects.insert(obj.name.clone(), obj);
    }

    /// Replace an existing built-in method.
    pub fn override_method(
        &mut self,
        object: &str,
        method: &str,
        func: BuiltInFn,
    ) -> Result<(), PluginError> {
        let obj = self
            .objects
            .get_mut(object)
            .ok_or_else(|| PluginError::ObjectNotFound(object.to_string()))?;

        let slot = obj
            .methods
            .get_mut(method)
            .ok_or_else(|| PluginError::MethodNotFound(object.to_string(), method.to_string()))?;
        *slot = func;

        let key = format!("{}.{}", object, method);
        debug!("overriding built-in method {}", key);
        *self.overrides.entry(key).or_insert(0) += 1;

        Ok(())
    }

    /// How many times `object.method` has been overridden.
    pub fn override_count(&self, object: &str, method: &str) -> usize {
        self.overrides
            .get(&format!("{}.{}", object, method))
            .copied()
            .unwrap_or(0)
    }

    /// Get a built-in function for execution.
    pub fn get_method(&self, object: &str, method: &str) -> Option<&BuiltInFn> {
        self.objects
            .get(object)
            .and_then(|obj| obj.methods.get(method))
    }

    /// Check if an object exists in the registry.
    pub fn has_object(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    /// Check if a method exists on an object.
    pub fn has_method(&self, object: &str, method: &str) -> bool {
        self.objects
            .get(object)
            .map(|obj| obj.methods.contains_key(method))
            .unwrap_or(false)
    }

    /// Get list of all loaded plugins.
    pub fn loaded_plugins(&self) -> &[PluginInfo] {
        &self.plugins
    }
}

impl Default for BuiltInRegistry {
    fn default() -> Self {
        Self::with_core()
    }
}
