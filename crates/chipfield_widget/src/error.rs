use chipfield_core::{ConfigError, ItemId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("missing argument: an item reference or value is required")]
    MissingArgument,
    #[error("item not found: {0}")]
    ItemNotFound(String),
    #[error("item {0} not found")]
    ItemIdNotFound(ItemId),
    #[error("widget has been destroyed")]
    Destroyed,
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
