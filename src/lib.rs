pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command, ReviewCommand};

pub use adapters::{HttpPlaceLookup, JsonFileStore, MemoryStore};
pub use config::toml_config::TomlConfig;
pub use crate::core::assistant::{PlaceSummary, TravelAssistant};
pub use crate::core::scoring::{extract_tags, recommendation_label, recommendation_message, score};
pub use utils::error::{Result, TravelError};
