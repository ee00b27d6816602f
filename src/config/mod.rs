pub mod loader;
pub mod defaults;

pub use loader::*;
pub use defaults::*;

use chrono::format::{Item, StrftimeItems};
use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Expected JSON kind of an option value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
    Number,
    Boolean,
    Array,
    Table,
}

impl OptionKind {
    pub fn matches(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (OptionKind::String, Value::String(_))
                | (OptionKind::Number, Value::Number(_))
                | (OptionKind::Boolean, Value::Bool(_))
                | (OptionKind::Array, Value::Array(_))
                | (OptionKind::Table, Value::Object(_))
        )
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OptionKind::String => "string",
            OptionKind::Number => "number",
            OptionKind::Boolean => "boolean",
            OptionKind::Array => "array",
            OptionKind::Table => "table",
        })
    }
}

/// Name of the JSON kind of `value`, for error messages
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "table",
    }
}

#[derive(Debug, Clone)]
pub struct OptionSpec {
    pub name: &'static str,
    pub kind: OptionKind,
    pub default: Value,
}

impl OptionSpec {
    pub fn new(name: &'static str, kind: OptionKind, default: impl Into<Value>) -> Self {
        Self {
            name,
            kind,
            default: default.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Issue {
    #[error("option `{key}` expects a {expected}, got {found}")]
    Mismatch {
        key: String,
        expected: OptionKind,
        found: &'static str,
    },
    #[error("option `{key}` is invalid: {reason}")]
    Invalid { key: String, reason: String },
    #[error("unknown option `{key}`")]
    Unknown { key: String },
    #[error("options must be a table, got {found}")]
    NotATable { found: &'static str },
}

impl Issue {
    pub fn key(&self) -> Option<&str> {
        match self {
            Issue::Mismatch { key, .. } | Issue::Invalid { key, .. } | Issue::Unknown { key } => {
                Some(key)
            }
            Issue::NotATable { .. } => None,
        }
    }
}

/// Every problem found while validating one options value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationError {
    pub issues: Vec<Issue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid options: ")?;
        for (index, issue) in self.issues.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl ValidationError {
    pub fn mentions(&self, key: &str) -> bool {
        self.issues.iter().any(|issue| issue.key() == Some(key))
    }
}

/// Result of a validation: always fully populated
#[derive(Debug, Clone)]
pub struct Validated {
    pub values: Map<String, Value>,
    pub error: Option<ValidationError>,
}

#[derive(Debug, Clone)]
pub struct OptsSchema {
    entries: Vec<OptionSpec>,
}

impl OptsSchema {
    pub fn new(entries: Vec<OptionSpec>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[OptionSpec] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Bind every schema entry to the user value when present and of the
    /// right kind, to the default otherwise.
    ///
    /// Problems are collected rather than returned early. Unknown keys are
    /// dropped from the result and reported. A `null` input counts as an
    /// empty table.
    pub fn validate(&self, raw: &Value) -> Validated {
        let mut issues = Vec::new();
        let empty = Map::new();

        let table = match raw {
            Value::Object(table) => table,
            Value::Null => &empty,
            other => {
                issues.push(Issue::NotATable {
                    found: kind_name(other),
                });
                &empty
            }
        };

        let mut values = Map::new();
        for entry in &self.entries {
            let value = match table.get(entry.name) {
                None | Some(Value::Null) => entry.default.clone(),
                Some(value) if entry.kind.matches(value) => value.clone(),
                Some(value) => {
                    issues.push(Issue::Mismatch {
                        key: entry.name.to_string(),
                        expected: entry.kind,
                        found: kind_name(value),
                    });
                    entry.default.clone()
                }
            };
            values.insert(entry.name.to_string(), value);
        }

        for key in table.keys() {
            if self.get(key).is_none() {
                issues.push(Issue::Unknown { key: key.clone() });
            }
        }

        Validated {
            values,
            error: if issues.is_empty() {
                None
            } else {
                Some(ValidationError { issues })
            },
        }
    }
}

/// Typed options of the status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOptions {
    pub date_format: String,
}

/// Options after validation, with whatever problems were found on the way
#[derive(Debug, Clone)]
pub struct Resolved {
    pub options: StatusOptions,
    pub error: Option<ValidationError>,
}

impl StatusOptions {
    /// Validate `raw` against the status schema and convert it.
    ///
    /// Never fails: any offending value is replaced by its default and
    /// reported in `Resolved::error`.
    pub fn resolve(raw: &Value) -> Resolved {
        let Validated { values, error } = status_schema().validate(raw);
        let mut issues = error.map(|error| error.issues).unwrap_or_default();

        let mut options = match serde_json::from_value::<StatusOptions>(Value::Object(values)) {
            Ok(options) => options,
            Err(err) => {
                issues.push(Issue::Invalid {
                    key: "options".to_string(),
                    reason: err.to_string(),
                });
                StatusOptions::default()
            }
        };

        if let Err(reason) = check_strftime(&options.date_format) {
            issues.push(Issue::Invalid {
                key: "date_format".to_string(),
                reason,
            });
            options.date_format = DEFAULT_DATE_FORMAT.to_string();
        }

        Resolved {
            options,
            error: if issues.is_empty() {
                None
            } else {
                Some(ValidationError { issues })
            },
        }
    }
}

/// Reject formats chrono would fail to render
pub fn check_strftime(format: &str) -> Result<(), String> {
    use std::fmt::Write as _;

    let invalid = || format!("`{}` is not a valid strftime format", format);
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }

    // some specifiers parse but only work for parsing, e.g. `%#z`
    if let Some(sample) = Utc.timestamp_opt(0, 0).single() {
        let mut rendered = String::new();
        if write!(rendered, "{}", sample.format(format)).is_err() {
            return Err(invalid());
        }
    }
    Ok(())
}
