//! Dynamically typed setting values.
//!
//! Values are stored without a type tag; the accessor used at read time
//! decides interpretation. Display and coercion follow the conventions
//! of the scripting layer driving the session, so `e` listings and
//! interpreter round trips see the spellings they expect.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The value bound to a [`crate::ConfigKey`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Num(f64),
    Str(String),
}

impl ConfigValue {
    /// Whether this value spells "enabled".
    ///
    /// The accepted true-forms are a closed contract: the boolean `true`,
    /// the number `1`, the string `"1"`, and any string containing the
    /// case-insensitive substring `true`. The substring match is
    /// deliberately permissive so interpreter spellings like `TRUE` or
    /// `True` pass through.
    pub fn is_true_form(&self) -> bool {
        match self {
            ConfigValue::Bool(b) => *b,
            ConfigValue::Num(n) => *n == 1.0,
            ConfigValue::Str(s) => s == "1" || s.to_ascii_lowercase().contains("true"),
        }
    }

    /// Whether this value spells "disabled": the boolean `false`, the
    /// number `0`, the string `"0"`, or any string containing the
    /// case-insensitive substring `false`.
    pub fn is_false_form(&self) -> bool {
        match self {
            ConfigValue::Bool(b) => !*b,
            ConfigValue::Num(n) => *n == 0.0,
            ConfigValue::Str(s) => s == "0" || s.to_ascii_lowercase().contains("false"),
        }
    }

    /// Numeric coercion in the scripting sense.
    ///
    /// Booleans coerce to 1/0, blank strings to 0, non-numeric strings
    /// to NaN. Range validators compare against the result, and NaN
    /// fails every comparison.
    pub fn as_f64(&self) -> f64 {
        match self {
            ConfigValue::Bool(true) => 1.0,
            ConfigValue::Bool(false) => 0.0,
            ConfigValue::Num(n) => *n,
            ConfigValue::Str(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
        }
    }

    /// Truthiness in the scripting sense: `false`, `0`, NaN, and the
    /// empty string are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            ConfigValue::Bool(b) => *b,
            ConfigValue::Num(n) => *n != 0.0 && !n.is_nan(),
            ConfigValue::Str(s) => !s.is_empty(),
        }
    }

    /// Whether the runtime type is a string.
    pub fn is_str(&self) -> bool {
        matches!(self, ConfigValue::Str(_))
    }

    /// The stored string, when the runtime type is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{}", b),
            // Integral numbers print without a fractional part, matching
            // the interpreter's own number formatting.
            ConfigValue::Num(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            ConfigValue::Num(n) => write!(f, "{}", n),
            ConfigValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<f64> for ConfigValue {
    fn from(n: f64) -> Self {
        ConfigValue::Num(n)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        ConfigValue::Num(n as f64)
    }
}

impl From<i32> for ConfigValue {
    fn from(n: i32) -> Self {
        ConfigValue::Num(f64::from(n))
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Str(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Str(s)
    }
}
