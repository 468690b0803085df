use chipfield_core::{Config, ConfigError};
use serde::{Deserialize, Serialize};

/// An option that is either switched off with `false` or carries a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Toggle<T> {
    Flag(bool),
    Value(T),
}

impl<T> Default for Toggle<T> {
    fn default() -> Self {
        Toggle::Flag(false)
    }
}

impl<T> Toggle<T> {
    /// The configured value; a bare flag never carries one.
    pub fn value(&self) -> Option<&T> {
        match self {
            Toggle::Flag(_) => None,
            Toggle::Value(value) => Some(value),
        }
    }
}

/// Construction options as a host would write them, camelCase keys included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    pub disabled: bool,
    /// Preset items. When empty, the host element's value is split instead.
    pub items: Vec<String>,
    pub add_items: bool,
    pub remove_items: bool,
    pub edit_items: bool,
    pub max_items: Toggle<usize>,
    pub delimiter: String,
    pub allow_duplicates: bool,
    pub regex_filter: Toggle<String>,
    pub debug: bool,
    pub placeholder: Option<String>,
    pub prepend_value: Option<String>,
    pub append_value: Option<String>,
    pub select_all: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            disabled: false,
            items: Vec::new(),
            add_items: true,
            remove_items: true,
            edit_items: false,
            max_items: Toggle::default(),
            delimiter: ",".to_string(),
            allow_duplicates: true,
            regex_filter: Toggle::default(),
            debug: false,
            placeholder: None,
            prepend_value: None,
            append_value: None,
            select_all: true,
        }
    }
}

impl Options {
    pub fn compile(&self) -> Result<Config, ConfigError> {
        Config {
            add_items: self.add_items,
            remove_items: self.remove_items,
            edit_items: self.edit_items,
            allow_duplicates: self.allow_duplicates,
            prepend_value: self.prepend_value.clone().filter(|v| !v.is_empty()),
            append_value: self.append_value.clone().filter(|v| !v.is_empty()),
            select_all: self.select_all,
            ..Config::default()
        }
        .with_delimiter(self.delimiter.as_str())?
        .with_max_items(self.max_items.value().copied())?
        .with_regex_filter(self.regex_filter.value().map(String::as_str))
    }
}
