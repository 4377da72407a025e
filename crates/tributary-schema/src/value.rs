// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed configuration values and string coercion.
//!
//! Raw configuration arrives as strings. [`ConfigValue::parse`] coerces a raw
//! string into the declared [`ConfigType`], and [`ConfigValue::render`] turns a
//! typed value back into the canonical string shown in reports.

use secrecy::{ExposeSecret, SecretString};
use tributary_core::ConfigType;

use crate::error::SchemaError;

/// Placeholder shown in place of password values.
pub const HIDDEN_VALUE: &str = "[hidden]";

/// A successfully parsed configuration value.
#[derive(Debug, Clone)]
pub enum ConfigValue {
    Boolean(bool),
    String(String),
    Int(i32),
    Long(i64),
    Double(f64),
    List(Vec<String>),
    Class(String),
    Password(SecretString),
}

impl PartialEq for ConfigValue {
    fn eq(&self, other: &Self) -> bool {
        use ConfigValue::*;
        match (self, other) {
            (Boolean(a), Boolean(b)) => a == b,
            (String(a), String(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Long(a), Long(b)) => a == b,
            (Double(a), Double(b)) => a == b,
            (List(a), List(b)) => a == b,
            (Class(a), Class(b)) => a == b,
            (Password(a), Password(b)) => a.expose_secret() == b.expose_secret(),
            _ => false,
        }
    }
}

impl ConfigValue {
    /// Coerce `raw` into a value of type `config_type` for the key `key`.
    ///
    /// Surrounding whitespace is ignored for every type except passwords.
    pub fn parse(config_type: ConfigType, key: &str, raw: &str) -> Result<Self, SchemaError> {
        let trimmed = raw.trim();
        let mismatch = |detail: &str| SchemaError::TypeMismatch {
            key: key.to_string(),
            value: raw.to_string(),
            expected: config_type,
            detail: detail.to_string(),
        };

        match config_type {
            ConfigType::Boolean => {
                if trimmed.eq_ignore_ascii_case("true") {
                    Ok(ConfigValue::Boolean(true))
                } else if trimmed.eq_ignore_ascii_case("false") {
                    Ok(ConfigValue::Boolean(false))
                } else {
                    Err(mismatch("Expected value to be either true or false"))
                }
            }
            ConfigType::String => Ok(ConfigValue::String(trimmed.to_string())),
            ConfigType::Int => trimmed
                .parse::<i32>()
                .map(ConfigValue::Int)
                .map_err(|_| mismatch("Not a number of type INT")),
            ConfigType::Long => trimmed
                .parse::<i64>()
                .map(ConfigValue::Long)
                .map_err(|_| mismatch("Not a number of type LONG")),
            ConfigType::Double => trimmed
                .parse::<f64>()
                .map(ConfigValue::Double)
                .map_err(|_| mismatch("Not a number of type DOUBLE")),
            ConfigType::List => {
                if trimmed.is_empty() {
                    Ok(ConfigValue::List(Vec::new()))
                } else {
                    Ok(ConfigValue::List(
                        trimmed.split(',').map(|item| item.trim().to_string()).collect(),
                    ))
                }
            }
            ConfigType::Class => {
                if is_class_name(trimmed) {
                    Ok(ConfigValue::Class(trimmed.to_string()))
                } else {
                    Err(mismatch("Not a valid class name"))
                }
            }
            ConfigType::Password => {
                Ok(ConfigValue::Password(SecretString::from(trimmed.to_string())))
            }
        }
    }

    /// The type this value satisfies.
    pub fn config_type(&self) -> ConfigType {
        match self {
            ConfigValue::Boolean(_) => ConfigType::Boolean,
            ConfigValue::String(_) => ConfigType::String,
            ConfigValue::Int(_) => ConfigType::Int,
            ConfigValue::Long(_) => ConfigType::Long,
            ConfigValue::Double(_) => ConfigType::Double,
            ConfigValue::List(_) => ConfigType::List,
            ConfigValue::Class(_) => ConfigType::Class,
            ConfigValue::Password(_) => ConfigType::Password,
        }
    }

    /// Canonical string form used in reports. Passwords never leak.
    pub fn render(&self) -> String {
        match self {
            ConfigValue::Boolean(b) => b.to_string(),
            ConfigValue::String(s) | ConfigValue::Class(s) => s.clone(),
            ConfigValue::Int(i) => i.to_string(),
            ConfigValue::Long(l) => l.to_string(),
            ConfigValue::Double(d) => format!("{d:?}"),
            ConfigValue::List(items) => items.join(","),
            ConfigValue::Password(_) => HIDDEN_VALUE.to_string(),
        }
    }

    /// Numeric view used by range constraints.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Int(i) => Some(f64::from(*i)),
            ConfigValue::Long(l) => Some(*l as f64),
            ConfigValue::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Whether this value is acceptable given a recommender's valid values.
    ///
    /// Lists are accepted when every element is recommended. An empty
    /// recommendation set places no restriction.
    pub fn is_recommended(&self, recommended: &[ConfigValue]) -> bool {
        if recommended.is_empty() {
            return true;
        }
        match self {
            ConfigValue::List(items) => items
                .iter()
                .all(|item| recommended.iter().any(|r| r.render() == *item)),
            _ => recommended.iter().any(|r| r == self),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Boolean(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Long(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Double(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(value: Vec<String>) -> Self {
        ConfigValue::List(value)
    }
}

/// Dotted identifier check: `a.b.C`, `C$Inner`, `_x`. No empty segments.
fn is_class_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
                    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
                }
                _ => false,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(config_type: ConfigType, raw: &str) -> Result<ConfigValue, SchemaError> {
        ConfigValue::parse(config_type, "k", raw)
    }

    #[test]
    fn booleans_are_case_insensitive() {
        assert_eq!(parse(ConfigType::Boolean, "TRUE").unwrap(), ConfigValue::Boolean(true));
        assert_eq!(parse(ConfigType::Boolean, " false ").unwrap(), ConfigValue::Boolean(false));
        let err = parse(ConfigType::Boolean, "yes").unwrap_err();
        assert!(err.to_string().contains("either true or false"));
    }

    #[test]
    fn integers_respect_width() {
        assert_eq!(parse(ConfigType::Int, " 42 ").unwrap(), ConfigValue::Int(42));
        assert!(parse(ConfigType::Int, "3000000000").is_err());
        assert_eq!(
            parse(ConfigType::Long, "3000000000").unwrap(),
            ConfigValue::Long(3_000_000_000)
        );
        let err = parse(ConfigType::Int, "abc").unwrap_err();
        assert!(matches!(err, SchemaError::TypeMismatch { expected: ConfigType::Int, .. }));
        assert!(err.to_string().ends_with("Not a number of type INT"));
    }

    #[test]
    fn doubles_render_with_fraction() {
        let v = parse(ConfigType::Double, "1").unwrap();
        assert_eq!(v.render(), "1.0");
        assert!(parse(ConfigType::Double, "one").is_err());
    }

    #[test]
    fn lists_split_and_trim() {
        assert_eq!(
            parse(ConfigType::List, "a, b ,c").unwrap(),
            ConfigValue::List(vec!["a".into(), "b".into(), "c".into()])
        );
        assert_eq!(parse(ConfigType::List, "  ").unwrap(), ConfigValue::List(vec![]));
        assert_eq!(parse(ConfigType::List, "a,b").unwrap().render(), "a,b");
    }

    #[test]
    fn class_names_are_dotted_identifiers() {
        assert!(parse(ConfigType::Class, "org.example.JsonConverter").is_ok());
        assert!(parse(ConfigType::Class, "Outer$Inner").is_ok());
        assert!(parse(ConfigType::Class, "org..Bad").is_err());
        assert!(parse(ConfigType::Class, "9lives").is_err());
        assert!(parse(ConfigType::Class, "").is_err());
    }

    #[test]
    fn passwords_are_hidden_and_trimmed() {
        let v = parse(ConfigType::Password, " s3cret ").unwrap();
        assert_eq!(v.render(), HIDDEN_VALUE);
        match &v {
            ConfigValue::Password(secret) => assert_eq!(secret.expose_secret(), "s3cret"),
            other => panic!("expected password, got {other:?}"),
        }
    }

    #[test]
    fn recommendation_membership() {
        let valid: Vec<ConfigValue> = vec![1.into(), 2.into(), 3.into()];
        assert!(ConfigValue::Int(1).is_recommended(&valid));
        assert!(!ConfigValue::Int(5).is_recommended(&valid));
        assert!(ConfigValue::Int(5).is_recommended(&[]));

        let letters: Vec<ConfigValue> = vec!["a".into(), "b".into(), "c".into()];
        assert!(ConfigValue::List(vec!["a".into(), "b".into()]).is_recommended(&letters));
        assert!(!ConfigValue::List(vec!["a".into(), "z".into()]).is_recommended(&letters));
    }
}
