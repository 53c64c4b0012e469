//! Console built-in object.
//!
//! Provides console.log, console.info, console.warn, console.error,
//! console.debug, console.dir and console.group/groupCollapsed/groupEnd.
//!
//! Every logging call runs its arguments through the console formatter and
//! joins the resulting parts with a space. The finished [`ConsoleEntry`] goes
//! to the context's [`ConsoleSink`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::{debug, log, trace};
use serde::Deserialize;

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::operations::type_conversion::to_js_string;
use crate::runner::ds::value::JsValue;
use crate::runner::generics::formatter::format;
use crate::runner::plugin::config::ConsoleConfig;
use crate::runner::plugin::registry::BuiltInRegistry;
use crate::runner::plugin::types::{BuiltInObject, EvalContext};

/// Register the console object with the registry.
pub fn register(registry: &mut BuiltInRegistry) {
    let console = BuiltInObject::new("console")
        .add_method("log", console_log)
        .add_method("info", console_info)
        .add_method("warn", console_warn)
        .add_method("error", console_error)
        .add_method("debug", console_debug)
        .add_method("dir", console_dir)
        .add_method("group", console_group)
        .add_method("groupCollapsed", console_group)
        .add_method("groupEnd", console_group_end);

    registry.register_object(console);
}

/// Severity of a console entry, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleLevel {
    Debug,
    Log,
    Info,
    Warn,
    Error,
}

impl ConsoleLevel {
    pub fn as_log_level(self) -> log::Level {
        match self {
            ConsoleLevel::Debug => log::Level::Debug,
            ConsoleLevel::Log | ConsoleLevel::Info => log::Level::Info,
            ConsoleLevel::Warn => log::Level::Warn,
            ConsoleLevel::Error => log::Level::Error,
        }
    }
}

impl fmt::Display for ConsoleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConsoleLevel::Debug => "debug",
            ConsoleLevel::Log => "log",
            ConsoleLevel::Info => "info",
            ConsoleLevel::Warn => "warn",
            ConsoleLevel::Error => "error",
        };
        write!(f, "{}", name)
    }
}

/// One line of console output.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleEntry {
    pub level: ConsoleLevel,
    /// Number of `console.group` calls open when the entry was written.
    pub group: u32,
    pub message: String,
}

/// Destination for console entries.
pub trait ConsoleSink {
    fn write_entry(&mut self, entry: &ConsoleEntry);
}

/// Forwards entries to the `log` facade, indented by group depth.
pub struct LogSink {
    target: String,
    indent: usize,
}

impl LogSink {
    pub fn new(target: impl Into<String>, indent: usize) -> Self {
        LogSink {
            target: target.into(),
            indent,
        }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        let config = ConsoleConfig::default();
        LogSink::new(config.target, config.indent)
    }
}

impl ConsoleSink for LogSink {
    fn write_entry(&mut self, entry: &ConsoleEntry) {
        log!(
            target: self.target.as_str(),
            entry.level.as_log_level(),
            "{:width$}{}",
            "",
            entry.message,
            width = entry.group as usize * self.indent
        );
    }
}

/// Keeps entries in memory. Clones share the same buffer, so a host can hand
/// one clone to a context and read the output through another.
#[derive(Clone, Default)]
pub struct MemorySink {
    entries: Rc<RefCell<Vec<ConsoleEntry>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<ConsoleEntry> {
        self.entries.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|e| e.message.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl ConsoleSink for MemorySink {
    fn write_entry(&mut self, entry: &ConsoleEntry) {
        self.entries.borrow_mut().push(entry.clone());
    }
}

/// Per-context console state.
pub struct Console {
    group: u32,
    min_level: ConsoleLevel,
    sink: Box<dyn ConsoleSink>,
}

impl Console {
    pub fn new(sink: Box<dyn ConsoleSink>) -> Self {
        Console {
            group: 0,
            min_level: ConsoleLevel::Debug,
            sink,
        }
    }

    pub fn from_config(config: &ConsoleConfig) -> Self {
        Console::new(Box::new(LogSink::new(config.target.clone(), config.indent)))
            .with_min_level(config.level)
    }

    pub fn with_min_level(mut self, level: ConsoleLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn group_depth(&self) -> u32 {
        self.group
    }

    /// Format `args` and emit them as one entry at `level`.
    pub fn write(&mut self, level: ConsoleLevel, args: Vec<JsValue>) {
        if level < self.min_level {
            trace!("console: dropping {} entry below {}", level, self.min_level);
            return;
        }
        let message = format(args)
            .iter()
            .map(to_js_string)
            .collect::<Vec<_>>()
            .join(" ");
        self.sink.write_entry(&ConsoleEntry {
            level,
            group: self.group,
            message,
        });
    }

    /// Open a group. A label, when given, is logged at the outer depth.
    pub fn group(&mut self, label: Vec<JsValue>) {
        if !label.is_empty() {
            self.write(ConsoleLevel::Log, label);
        }
        self.group += 1;
        debug!("console group opened, depth {}", self.group);
    }

    pub fn group_end(&mut self) {
        self.group = self.group.saturating_sub(1);
        debug!("console group closed, depth {}", self.group);
    }
}

impl Default for Console {
    fn default() -> Self {
        Console::new(Box::new(LogSink::default()))
    }
}

/// console.log
fn console_log(
    ctx: &mut EvalContext,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    ctx.console.write(ConsoleLevel::Log, args);
    Ok(JsValue::Undefined)
}

/// console.info
fn console_info(
    ctx: &mut EvalContext,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    ctx.console.write(ConsoleLevel::Info, args);
    Ok(JsValue::Undefined)
}

/// console.warn
fn console_warn(
    ctx: &mut EvalContext,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    ctx.console.write(ConsoleLevel::Warn, args);
    Ok(JsValue::Undefined)
}

/// console.error
fn console_error(
    ctx: &mut EvalContext,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    ctx.console.write(ConsoleLevel::Error, args);
    Ok(JsValue::Undefined)
}

/// console.debug
fn console_debug(
    ctx: &mut EvalContext,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    ctx.console.write(ConsoleLevel::Debug, args);
    Ok(JsValue::Undefined)
}

/// console.dir - no object inspection, logs like console.log.
fn console_dir(
    ctx: &mut EvalContext,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    ctx.console.write(ConsoleLevel::Log, args);
    Ok(JsValue::Undefined)
}

/// console.group / console.groupCollapsed
fn console_group(
    ctx: &mut EvalContext,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    ctx.console.group(args);
    Ok(JsValue::Undefined)
}

/// console.groupEnd
fn console_group_end(
    ctx: &mut EvalContext,
    _this: JsValue,
    _args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    ctx.console.group_end();
    Ok(JsValue::Undefined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_sink_defaults_follow_console_config() {
        let config = ConsoleConfig::default();
        let sink = LogSink::default();
        assert_eq!(sink.target, config.target);
        assert_eq!(sink.indent, config.indent);
    }

    #[test]
    fn test_console_from_config_applies_min_level() {
        let config = ConsoleConfig {
            level: ConsoleLevel::Warn,
            ..ConsoleConfig::default()
        };
        let console = Console::from_config(&config);
        assert_eq!(console.min_level, ConsoleLevel::Warn);
        assert_eq!(console.group_depth(), 0);
    }
}
