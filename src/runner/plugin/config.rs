//! Runtime configuration file parsing.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use super::registry::PluginError;
use crate::runner::std_lib::console::ConsoleLevel;

/// Log target console entries are written to by default.
pub const DEFAULT_CONSOLE_TARGET: &str = "jsconsole";

/// Settings for the `console` built-in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// `log` target used when forwarding entries.
    pub target: String,
    /// Spaces of indentation per open `console.group`.
    pub indent: usize,
    /// Entries below this level are dropped.
    pub level: ConsoleLevel,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            target: DEFAULT_CONSOLE_TARGET.to_string(),
            indent: 2,
            level: ConsoleLevel::Debug,
        }
    }
}

/// Complete runtime configuration. Unknown sections and keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub console: ConsoleConfig,
}

impl RuntimeConfig {
    /// Create a configuration with every setting at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file.
    ///
    /// Expected format:
    /// ```toml
    /// [console]
    /// target = "jsconsole"
    /// indent = 2
    /// level = "log"
    /// ```
    pub fn load(path: &Path) -> Result<Self, PluginError> {
        let content = fs::read_to_string(path)
            .map_err(|e| PluginError::ConfigError(format!("Failed to read config file: {}", e)))?;

        debug!("loading runtime config from {}", path.display());
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, PluginError> {
        toml::from_str(content)
            .map_err(|e| PluginError::ConfigError(format!("Failed to parse config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = RuntimeConfig::parse("").unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.console.target, "jsconsole");
    }

    #[test]
    fn test_parse_console_section() {
        let config = RuntimeConfig::parse(
            r#"
            # console settings
            [console]
            target = "page#1"   # quoted hash survives
            indent = 4
            level = "warn"
            "#,
        )
        .unwrap();
        assert_eq!(config.console.target, "page#1");
        assert_eq!(config.console.indent, 4);
        assert_eq!(config.console.level, ConsoleLevel::Warn);
    }

    #[test]
    fn test_string_forms() {
        let literal = RuntimeConfig::parse("[console]\ntarget = 'page'\n").unwrap();
        assert_eq!(literal.console.target, "page");

        let escaped = RuntimeConfig::parse("[console]\ntarget = \"a\\\"b\"\n").unwrap();
        assert_eq!(escaped.console.target, "a\"b");
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = RuntimeConfig::parse("[console]\nlevel = \"error\"").unwrap();
        assert_eq!(config.console.level, ConsoleLevel::Error);
        assert_eq!(config.console.indent, 2);
        assert_eq!(config.console.target, DEFAULT_CONSOLE_TARGET);
    }

    #[test]
    fn test_unknown_sections_and_keys_are_ignored() {
        let config = RuntimeConfig::parse(
            r#"
            [plugins]
            native = "./libcustom.so"
            [console]
            colour = "red"
            "#,
        )
        .unwrap();
        assert_eq!(config, RuntimeConfig::default());
    }

    #[test]
    fn test_bad_values_are_errors() {
        assert!(RuntimeConfig::parse("[console]\nindent = -1").is_err());
        assert!(RuntimeConfig::parse("[console]\nlevel = \"loud\"").is_err());
        assert!(RuntimeConfig::parse("[console]\njust some words").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        match RuntimeConfig::load(Path::new("/nonexistent/just-generics.toml")) {
            Err(PluginError::ConfigError(msg)) => assert!(msg.starts_with("Failed to read")),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
