use crate::domain::model::{Description, PlaceRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Named string values, one per entity (reviews, users, current result).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn geocoder_url(&self) -> &str;
    fn wiki_url(&self) -> &str;
    fn country(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn data_dir(&self) -> &str;
}

#[async_trait]
pub trait PlaceLookup: Send + Sync {
    /// `Ok(None)` means the geocoder answered but had no match.
    async fn resolve_place(&self, name: &str) -> Result<Option<PlaceRecord>>;
    async fn describe_place(&self, name: &str) -> Description;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
