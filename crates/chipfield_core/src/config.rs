use std::num::NonZeroUsize;

use regex::{Regex, RegexBuilder};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid regex filter {pattern:?}: {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("maxItems must be a positive integer")]
    ZeroMaxItems,
    #[error("delimiter must not be empty")]
    EmptyDelimiter,
}

/// Immutable behaviour switches captured when a widget is built.
#[derive(Debug, Clone)]
pub struct Config {
    pub add_items: bool,
    pub remove_items: bool,
    pub edit_items: bool,
    pub max_items: Option<NonZeroUsize>,
    pub delimiter: String,
    pub allow_duplicates: bool,
    pub regex_filter: Option<Regex>,
    pub prepend_value: Option<String>,
    pub append_value: Option<String>,
    pub select_all: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            add_items: true,
            remove_items: true,
            edit_items: false,
            max_items: None,
            delimiter: ",".to_string(),
            allow_duplicates: true,
            regex_filter: None,
            prepend_value: None,
            append_value: None,
            select_all: true,
        }
    }
}

impl Config {
    /// `0` is rejected; use `None` to disable the limit.
    pub fn with_max_items(mut self, max_items: Option<usize>) -> Result<Self, ConfigError> {
        self.max_items = match max_items {
            Some(limit) => Some(NonZeroUsize::new(limit).ok_or(ConfigError::ZeroMaxItems)?),
            None => None,
        };
        Ok(self)
    }

    /// Compiles `pattern` as a case-insensitive, unanchored filter.
    pub fn with_regex_filter(mut self, pattern: Option<&str>) -> Result<Self, ConfigError> {
        self.regex_filter = match pattern {
            Some(pattern) => Some(
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| ConfigError::InvalidRegex {
                        pattern: pattern.to_string(),
                        source,
                    })?,
            ),
            None => None,
        };
        Ok(self)
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Result<Self, ConfigError> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        self.delimiter = delimiter;
        Ok(self)
    }

    /// Applies `prepend_value`/`append_value` to a value about to be stored.
    pub fn transform_value(&self, value: &str) -> String {
        let prefix = self.prepend_value.as_deref().unwrap_or_default();
        let suffix = self.append_value.as_deref().unwrap_or_default();
        format!("{prefix}{value}{suffix}")
    }
}
