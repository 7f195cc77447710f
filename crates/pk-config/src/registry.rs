//! The session-owned configuration registry.
//!
//! One [`ConfigRegistry`] is constructed per session, seeded with fixed
//! defaults, and passed by reference to the subsystems that read it. All
//! mutation goes through [`ConfigRegistry::set`], which routes the
//! proposed value through the key's validator first; a rejected write
//! leaves the store untouched. There is no unvalidated write path.
//!
//! The registry is a plain owned value. Callers serialize access the
//! usual way (`&mut` for writes); nothing here blocks or spawns.

use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::help;
use crate::key::ConfigKey;
use crate::validate;
use crate::value::ConfigValue;

/// Current values for every recognized key.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigRegistry {
    // Indexed by ConfigKey discriminant; every slot is always populated.
    values: [ConfigValue; ConfigKey::COUNT],
}

impl ConfigRegistry {
    /// Create a registry seeded with the default value of every key.
    ///
    /// The `symbols.unredact` default derives from the host platform:
    /// redacted debug symbols are a macOS concern.
    pub fn new() -> Self {
        Self {
            values: ConfigKey::ALL.map(default_value),
        }
    }

    // ── Read accessors ──────────────────────────────────────────────────

    /// The raw stored value, with no coercion.
    pub fn get(&self, key: ConfigKey) -> &ConfigValue {
        &self.values[key as usize]
    }

    /// String-keyed lookup for the command interpreter; `None` for
    /// unrecognized names.
    pub fn get_raw(&self, name: &str) -> Option<&ConfigValue> {
        let key: ConfigKey = name.parse().ok()?;
        Some(self.get(key))
    }

    /// The stored value read as a flag: `true` iff it is a true-form
    /// (see [`ConfigValue::is_true_form`]).
    pub fn get_boolean(&self, key: ConfigKey) -> bool {
        self.get(key).is_true_form()
    }

    /// The stored value read as text: its display form when truthy,
    /// otherwise the empty string. A stored `false`, `0`, or `""` all
    /// collapse to `""` here; use [`ConfigRegistry::get`] for the
    /// literal value.
    pub fn get_string(&self, key: ConfigKey) -> String {
        let value = self.get(key);
        if value.is_truthy() {
            value.to_string()
        } else {
            String::new()
        }
    }

    /// Read-only iteration over every key and its current value, in
    /// declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (ConfigKey, &ConfigValue)> {
        ConfigKey::ALL.into_iter().map(|k| (k, self.get(k)))
    }

    /// Every recognized key, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = ConfigKey> {
        ConfigKey::ALL.into_iter()
    }

    // ── Mutation ────────────────────────────────────────────────────────

    /// Replace the value of `key` after validation.
    ///
    /// On rejection the store is untouched, a `warn` diagnostic names
    /// the key and reason, and the error carries both for callers that
    /// want to surface it.
    pub fn set(&mut self, key: ConfigKey, value: impl Into<ConfigValue>) -> Result<(), ConfigError> {
        let value = value.into();
        if let Err(err) = validate::validate(key, &value) {
            warn!(%key, %value, "rejected config value: {err}");
            return Err(err);
        }
        debug!(%key, %value, "config updated");
        self.values[key as usize] = value;
        Ok(())
    }

    /// String-keyed [`ConfigRegistry::set`] for the command interpreter.
    pub fn set_raw(
        &mut self,
        name: &str,
        value: impl Into<ConfigValue>,
    ) -> Result<(), ConfigError> {
        let key: ConfigKey = name.parse()?;
        self.set(key, value)
    }

    // ── Help ────────────────────────────────────────────────────────────

    /// Help text for `key`, or an empty string (with a `warn`
    /// diagnostic) when the key carries no entry.
    pub fn help(&self, key: ConfigKey) -> &'static str {
        match help::help_for(key) {
            Some(text) => text,
            None => {
                warn!(%key, "no help for key");
                ""
            }
        }
    }

    // ── Serialization ───────────────────────────────────────────────────

    /// Render the registry as a batch of r2 `e` directives, one
    /// `e <key>=<value>` line per key in declaration order. Values are
    /// interpolated verbatim; the consuming interpreter owns quoting.
    pub fn as_r2_script(&self) -> String {
        self.entries()
            .map(|(key, value)| format!("e {key}={value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed default installed for `key` at registry construction.
fn default_value(key: ConfigKey) -> ConfigValue {
    match key {
        ConfigKey::JavaWait => ConfigValue::Bool(false),
        ConfigKey::PatchCode => ConfigValue::Bool(true),
        ConfigKey::SearchIn => ConfigValue::from("perm:r--"),
        ConfigKey::SearchQuiet => ConfigValue::Bool(false),
        ConfigKey::StalkerEvent => ConfigValue::from("compile"),
        ConfigKey::StalkerTimeout => ConfigValue::Num(5.0 * 60.0),
        ConfigKey::StalkerIn => ConfigValue::from("raw"),
        ConfigKey::HookBacktrace => ConfigValue::Bool(true),
        ConfigKey::HookVerbose => ConfigValue::Bool(true),
        ConfigKey::HookLogs => ConfigValue::Bool(true),
        ConfigKey::HookOutput => ConfigValue::from("simple"),
        ConfigKey::FileLog => ConfigValue::from(""),
        ConfigKey::SymbolsModule => ConfigValue::from(""),
        ConfigKey::SymbolsUnredact => ConfigValue::Bool(cfg!(target_os = "macos")),
    }
}
