//! Built-in objects exposed to the host binding layer.
//!
//! The binding layer looks objects up by name in a [`BuiltInRegistry`] and
//! dispatches method calls to their [`BuiltInFn`]s, handing each call an
//! [`EvalContext`](types::EvalContext) that carries per-context state such as
//! the console group depth.
//!
//! ```text
//! binding layer: console.log("%d items", n)
//!      ↓
//! 1. registry.get_method("console", "log")
//! 2. BuiltInFn::call(ctx, this, args)
//! 3. formatter → joined message → ctx.console sink
//! ```
//!
//! ## Example: overriding a built-in
//!
//! ```
//! use just_generics::runner::plugin::registry::BuiltInRegistry;
//! use just_generics::runner::plugin::types::{BuiltInFn, EvalContext};
//! use just_generics::runner::ds::value::JsValue;
//!
//! let mut registry = BuiltInRegistry::with_core();
//! registry
//!     .override_method(
//!         "Generics",
//!         "consoleFormatter",
//!         BuiltInFn::Plugin(Box::new(
//!             |_ctx: &mut EvalContext, _this: JsValue, _args: Vec<JsValue>| Ok(JsValue::Null),
//!         )),
//!     )
//!     .unwrap();
//!
//! let mut ctx = EvalContext::new();
//! let result = registry
//!     .get_method("Generics", "consoleFormatter")
//!     .unwrap()
//!     .call(&mut ctx, JsValue::Undefined, vec![])
//!     .unwrap();
//! assert_eq!(result, JsValue::Null);
//! ```

pub mod config;
pub mod registry;
pub mod types;

pub use config::{ConsoleConfig, RuntimeConfig};
pub use registry::{BuiltInRegistry, PluginError};
pub use types::{BuiltInFn, BuiltInObject, EvalContext, NativeFn, PluginInfo};
