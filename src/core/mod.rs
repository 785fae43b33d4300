pub mod accounts;
pub mod assistant;
pub mod chat;
pub mod geo;
pub mod reviews;
pub mod scoring;

pub use crate::domain::model::{
    Account, Coordinates, Description, PlaceRecord, Review, SearchKind, SearchResult, Tags,
};
pub use crate::domain::ports::{ConfigProvider, KeyValueStore, PlaceLookup};
pub use crate::utils::error::Result;
