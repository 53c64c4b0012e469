//! # just-generics - runtime helpers for script bindings
//!
//! Support code a host binding layer hands to script code:
//! - Index and named-item views over host collections
//! - printf-style console formatting (`%s`, `%d`, `%i`, `%f`, `%o`, `%O`)
//! - A `console` built-in that forwards formatted output to the `log` facade
//! - A registry of built-in objects with per-method overrides
//!
//! ## Quick Start
//!
//! ### Formatting console arguments
//!
//! ```
//! use just_generics::runner::generics::Generics;
//! use just_generics::runner::ds::value::JsValue;
//!
//! let generics = Generics::new();
//! let parts = generics.console_formatter(vec![
//!     JsValue::from("%s is %d years old"),
//!     JsValue::from("Bob"),
//!     JsValue::from(42),
//! ]);
//! assert_eq!(parts, vec![JsValue::from("Bob is 42 years old")]);
//! ```
//!
//! ### Calling built-ins through the registry
//!
//! ```
//! use just_generics::runner::plugin::registry::BuiltInRegistry;
//! use just_generics::runner::plugin::types::EvalContext;
//! use just_generics::runner::std_lib::console::MemorySink;
//! use just_generics::runner::ds::value::JsValue;
//!
//! let registry = BuiltInRegistry::with_core();
//! let sink = MemorySink::new();
//! let mut ctx = EvalContext::with_sink(Box::new(sink.clone()));
//!
//! registry
//!     .get_method("console", "log")
//!     .unwrap()
//!     .call(
//!         &mut ctx,
//!         JsValue::Undefined,
//!         vec![JsValue::from("%d items"), JsValue::from(50), JsValue::from("done")],
//!     )
//!     .unwrap();
//!
//! assert_eq!(sink.messages(), vec!["50 items done".to_string()]);
//! ```
//!
//! ## Architecture
//!
//! - **[`runner`]** - Runtime support
//!   - **[`runner::ds`]** - Data structures (values, objects, host capabilities)
//!   - **[`runner::generics`]** - Collection views and the console formatter
//!   - **[`runner::plugin`]** - Built-in registry and configuration
//!   - **[`runner::std_lib`]** - `console` and `Generics` built-ins

#[macro_use]
extern crate lazy_static;

pub mod runner;
