//! The closed namespace of session configuration keys.
//!
//! Keys are a fixed enum rather than free-form strings: validator and
//! help dispatch match exhaustively over [`ConfigKey`], so adding a key
//! means the compiler walks you through every dispatch site. No keys can
//! appear or disappear at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A recognized session setting.
///
/// Variant order is the registry's declared iteration order; it is the
/// order keys appear in `e` listings and in [`crate::ConfigSnapshot`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConfigKey {
    /// Block until the Java classloader is ready before hooking.
    #[serde(rename = "java.wait")]
    JavaWait,
    /// Allow patching code in memory.
    #[serde(rename = "patch.code")]
    PatchCode,
    /// Memory-search range scope (`perm:rwx` mask, `current`, `heap`, `path:pattern`).
    #[serde(rename = "search.in")]
    SearchIn,
    /// Suppress progress output while searching.
    #[serde(rename = "search.quiet")]
    SearchQuiet,
    /// Event granularity reported by the stalker.
    #[serde(rename = "stalker.event")]
    StalkerEvent,
    /// Seconds after which the stalker gives up (0 disables).
    #[serde(rename = "stalker.timeout")]
    StalkerTimeout,
    /// Where stalker events are collected from.
    #[serde(rename = "stalker.in")]
    StalkerIn,
    /// Append a backtrace to every hook trace message.
    #[serde(rename = "hook.backtrace")]
    HookBacktrace,
    /// Echo hook trace messages to the console.
    #[serde(rename = "hook.verbose")]
    HookVerbose,
    /// Keep hook trace logs in the agent.
    #[serde(rename = "hook.logs")]
    HookLogs,
    /// Hook trace output format.
    #[serde(rename = "hook.output")]
    HookOutput,
    /// File path receiving tracing logs, empty to disable.
    #[serde(rename = "file.log")]
    FileLog,
    /// Module to resolve symbols against instead of the current offset.
    #[serde(rename = "symbols.module")]
    SymbolsModule,
    /// Attempt to recover redacted symbol names from debug symbols.
    #[serde(rename = "symbols.unredact")]
    SymbolsUnredact,
}

impl ConfigKey {
    /// Every recognized key, in registry iteration order.
    pub const ALL: [ConfigKey; 14] = [
        ConfigKey::JavaWait,
        ConfigKey::PatchCode,
        ConfigKey::SearchIn,
        ConfigKey::SearchQuiet,
        ConfigKey::StalkerEvent,
        ConfigKey::StalkerTimeout,
        ConfigKey::StalkerIn,
        ConfigKey::HookBacktrace,
        ConfigKey::HookVerbose,
        ConfigKey::HookLogs,
        ConfigKey::HookOutput,
        ConfigKey::FileLog,
        ConfigKey::SymbolsModule,
        ConfigKey::SymbolsUnredact,
    ];

    /// Number of recognized keys.
    pub const COUNT: usize = Self::ALL.len();

    /// The dotted name used by the command interpreter.
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::JavaWait => "java.wait",
            ConfigKey::PatchCode => "patch.code",
            ConfigKey::SearchIn => "search.in",
            ConfigKey::SearchQuiet => "search.quiet",
            ConfigKey::StalkerEvent => "stalker.event",
            ConfigKey::StalkerTimeout => "stalker.timeout",
            ConfigKey::StalkerIn => "stalker.in",
            ConfigKey::HookBacktrace => "hook.backtrace",
            ConfigKey::HookVerbose => "hook.verbose",
            ConfigKey::HookLogs => "hook.logs",
            ConfigKey::HookOutput => "hook.output",
            ConfigKey::FileLog => "file.log",
            ConfigKey::SymbolsModule => "symbols.module",
            ConfigKey::SymbolsUnredact => "symbols.unredact",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownKey {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_round_trips() {
        for key in ConfigKey::ALL {
            let parsed: ConfigKey = key.as_str().parse().unwrap();
            assert_eq!(parsed, key);
        }
    }

    #[test]
    fn unknown_name_rejected() {
        let err = "no.such.key".parse::<ConfigKey>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownKey {
                name: "no.such.key".to_string()
            }
        );
    }

    #[test]
    fn all_is_distinct_and_complete() {
        let mut names: Vec<&str> = ConfigKey::ALL.iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ConfigKey::COUNT);
    }

    #[test]
    fn iteration_order_is_declaration_order() {
        assert_eq!(ConfigKey::ALL[0], ConfigKey::JavaWait);
        assert_eq!(ConfigKey::ALL[4], ConfigKey::StalkerEvent);
        assert_eq!(ConfigKey::ALL[13], ConfigKey::SymbolsUnredact);
        // Ord follows declaration order, so sorting must not reorder.
        let mut sorted = ConfigKey::ALL;
        sorted.sort_unstable();
        assert_eq!(sorted, ConfigKey::ALL);
    }

    #[test]
    fn serde_uses_dotted_names() {
        let json = serde_json::to_string(&ConfigKey::StalkerEvent).unwrap();
        assert_eq!(json, "\"stalker.event\"");
        let back: ConfigKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ConfigKey::StalkerEvent);
    }
}
