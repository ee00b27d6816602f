use crate::config::*;

pub const DEFAULT_DATE_FORMAT: &str = "%a %H:%M:%S";

/// Options recognized by the status line
pub fn status_schema() -> OptsSchema {
    OptsSchema::new(vec![OptionSpec::new(
        "date_format",
        OptionKind::String,
        DEFAULT_DATE_FORMAT,
    )])
}

impl Default for StatusOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}
