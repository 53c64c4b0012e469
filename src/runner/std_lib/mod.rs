//! Standard library built-in objects.
//!
//! This module contains the built-in objects the binding layer exposes:
//! `console` and `Generics`.

pub mod console;
pub mod core;
pub mod generics;

pub use core::register_core_builtins;
