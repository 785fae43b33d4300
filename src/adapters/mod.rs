// Adapters layer: concrete implementations for external systems (storage, http).

pub mod http;
pub mod storage;

pub use http::HttpPlaceLookup;
pub use storage::{JsonFileStore, MemoryStore};
