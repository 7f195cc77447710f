//! Per-key validation of proposed setting values.
//!
//! Validators are pure predicates: they look only at the proposed value,
//! never at other keys. A rejection carries a human-readable reason that
//! names what the key expects.

use crate::error::ConfigError;
use crate::key::ConfigKey;
use crate::value::ConfigValue;

/// Events the stalker can report on.
pub const STALKER_EVENTS: [&str; 5] = ["call", "ret", "exec", "block", "compile"];

/// Scopes stalker results can be restricted to.
pub const STALKER_SCOPES: [&str; 3] = ["raw", "app", "modules"];

/// Decide whether `value` may replace the current value of `key`.
///
/// Returns [`ConfigError::InvalidValue`] with the rejection reason on
/// failure; the caller decides whether to log and must leave the store
/// untouched.
pub fn validate(key: ConfigKey, value: &ConfigValue) -> Result<(), ConfigError> {
    let checked = match key {
        ConfigKey::JavaWait
        | ConfigKey::PatchCode
        | ConfigKey::SearchQuiet
        | ConfigKey::HookBacktrace
        | ConfigKey::HookVerbose
        | ConfigKey::HookLogs
        | ConfigKey::SymbolsUnredact => validate_boolean(value),
        ConfigKey::HookOutput | ConfigKey::FileLog | ConfigKey::SymbolsModule => {
            validate_string(value)
        }
        ConfigKey::StalkerEvent => validate_one_of(value, &STALKER_EVENTS),
        ConfigKey::StalkerIn => validate_one_of(value, &STALKER_SCOPES),
        ConfigKey::StalkerTimeout => validate_timeout(value),
        ConfigKey::SearchIn => validate_search_in(value),
    };

    checked.map_err(|reason| ConfigError::InvalidValue { key, reason })
}

fn validate_boolean(value: &ConfigValue) -> Result<(), String> {
    if value.is_true_form() || value.is_false_form() {
        Ok(())
    } else {
        Err(format!(
            "expected a boolean form (true/false, 1/0), got '{value}'"
        ))
    }
}

fn validate_string(value: &ConfigValue) -> Result<(), String> {
    if value.is_str() {
        Ok(())
    } else {
        Err(format!("expected a string, got '{value}'"))
    }
}

fn validate_one_of(value: &ConfigValue, allowed: &[&str]) -> Result<(), String> {
    match value.as_str() {
        Some(s) if allowed.contains(&s) => Ok(()),
        _ => Err(format!("expected one of: {}", allowed.join(", "))),
    }
}

fn validate_timeout(value: &ConfigValue) -> Result<(), String> {
    // NaN fails the comparison, so non-numeric strings fall through to
    // the rejection arm.
    if value.as_f64() >= 0.0 {
        Ok(())
    } else {
        Err(format!("expected a number of seconds >= 0, got '{value}'"))
    }
}

/// `search.in` grammar: `heap`, `current`, `perm:<mask>`, `path:<pattern>`.
///
/// The permission mask is positional: three characters drawn from
/// `{r,-}{w,-}{x,-}`. `path` requires a non-empty pattern.
fn validate_search_in(value: &ConfigValue) -> Result<(), String> {
    let Some(raw) = value.as_str() else {
        return Err(format!("expected a string, got '{value}'"));
    };

    if raw == "heap" {
        return Ok(());
    }

    match raw.split_once(':') {
        None if raw == "current" => Ok(()),
        None => Err(format!("unknown search scope '{raw}'")),
        Some(("perm", mask)) => validate_perm_mask(mask),
        Some(("path", "")) => Err("path scope requires a non-empty pattern".to_string()),
        Some(("path", _)) => Ok(()),
        Some((scope, _)) => Err(format!("unknown search scope '{scope}'")),
    }
}

fn validate_perm_mask(mask: &str) -> Result<(), String> {
    let chars: Vec<char> = mask.chars().collect();
    if chars.len() != 3 {
        return Err(format!(
            "permission mask must be exactly 3 characters (rwx or -), got '{mask}'"
        ));
    }
    let ok = matches!(chars[0], 'r' | '-')
        && matches!(chars[1], 'w' | '-')
        && matches!(chars[2], 'x' | '-');
    if ok {
        Ok(())
    } else {
        Err(format!(
            "permission mask must be positional rwx characters or '-', got '{mask}'"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepts(key: ConfigKey, value: impl Into<ConfigValue>) -> bool {
        validate(key, &value.into()).is_ok()
    }

    #[test]
    fn boolean_keys_accept_both_forms() {
        let keys = [
            ConfigKey::JavaWait,
            ConfigKey::PatchCode,
            ConfigKey::SearchQuiet,
            ConfigKey::HookBacktrace,
            ConfigKey::HookVerbose,
            ConfigKey::HookLogs,
            ConfigKey::SymbolsUnredact,
        ];
        for key in keys {
            assert!(accepts(key, true));
            assert!(accepts(key, false));
            assert!(accepts(key, 1));
            assert!(accepts(key, 0));
            assert!(accepts(key, "TRUE"));
            assert!(accepts(key, "false"));
            assert!(!accepts(key, "banana"));
            assert!(!accepts(key, 2));
        }
    }

    #[test]
    fn string_keys_require_strings() {
        for key in [
            ConfigKey::HookOutput,
            ConfigKey::FileLog,
            ConfigKey::SymbolsModule,
        ] {
            assert!(accepts(key, "anything"));
            assert!(accepts(key, ""));
            assert!(!accepts(key, 7));
            assert!(!accepts(key, true));
        }
    }

    #[test]
    fn stalker_event_enumeration() {
        for event in STALKER_EVENTS {
            assert!(accepts(ConfigKey::StalkerEvent, event));
        }
        assert!(!accepts(ConfigKey::StalkerEvent, "bogus"));
        // Case-sensitive exact match only.
        assert!(!accepts(ConfigKey::StalkerEvent, "Call"));
        assert!(!accepts(ConfigKey::StalkerEvent, 1));
    }

    #[test]
    fn stalker_in_enumeration() {
        for scope in STALKER_SCOPES {
            assert!(accepts(ConfigKey::StalkerIn, scope));
        }
        assert!(!accepts(ConfigKey::StalkerIn, "everywhere"));
    }

    #[test]
    fn timeout_bounds() {
        assert!(accepts(ConfigKey::StalkerTimeout, 0));
        assert!(accepts(ConfigKey::StalkerTimeout, 600));
        assert!(!accepts(ConfigKey::StalkerTimeout, -1));
        // Implicit numeric coercion: numeric strings pass, garbage is NaN.
        assert!(accepts(ConfigKey::StalkerTimeout, "120"));
        assert!(!accepts(ConfigKey::StalkerTimeout, "soon"));
        assert!(!accepts(ConfigKey::StalkerTimeout, f64::NAN));
    }

    #[test]
    fn search_in_acceptance_table() {
        let table = [
            ("heap", true),
            ("current", true),
            ("current:x", false),
            ("perm:r--", true),
            ("perm:rwx", true),
            ("perm:-w-", true),
            ("perm:---", true),
            ("perm:rw", false),  // wrong length
            ("perm:rwz", false), // invalid char
            ("perm:wrx", false), // out of position
            ("perm:r--:x", false),
            ("path:foo", true),
            ("path:lib/libc.so", true),
            ("path:a:b", true), // pattern may itself contain ':'
            ("path:", false),   // empty pattern
            ("xyz:1", false),
            ("perm", false),
            ("", false),
        ];
        for (input, expected) in table {
            assert_eq!(
                accepts(ConfigKey::SearchIn, input),
                expected,
                "search.in = {input:?}"
            );
        }
        assert!(!accepts(ConfigKey::SearchIn, 3));
    }

    #[test]
    fn rejection_reason_names_expectations() {
        let err = validate(ConfigKey::StalkerEvent, &ConfigValue::from("bogus")).unwrap_err();
        let ConfigError::InvalidValue { key, reason } = err else {
            panic!("expected InvalidValue");
        };
        assert_eq!(key, ConfigKey::StalkerEvent);
        assert!(reason.contains("call, ret, exec, block, compile"));
    }
}
