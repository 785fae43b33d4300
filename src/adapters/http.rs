use crate::domain::model::{Coordinates, Description, PlaceRecord};
use crate::domain::ports::{ConfigProvider, PlaceLookup};
use crate::utils::error::{Result, TravelError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

#[derive(Debug, Deserialize)]
struct GeocodeHit {
    display_name: String,
    lat: String,
    lon: String,
}

#[derive(Debug, Deserialize)]
struct WikiSummary {
    extract: Option<String>,
}

/// Nominatim 地理編碼 + Wikipedia 摘要
pub struct HttpPlaceLookup<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpPlaceLookup<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;
        Ok(Self { config, client })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.geocoder_url().trim_end_matches('/'))
    }

    fn summary_url(&self, name: &str) -> Result<Url> {
        let mut url = Url::parse(self.config.wiki_url()).map_err(|e| {
            TravelError::InvalidConfigValueError {
                field: "lookup.wiki_url".to_string(),
                value: self.config.wiki_url().to_string(),
                reason: e.to_string(),
            }
        })?;
        url.path_segments_mut()
            .map_err(|_| TravelError::ConfigError {
                message: "wiki_url cannot be a base URL".to_string(),
            })?
            .pop_if_empty()
            .extend(["page", "summary", name]);
        Ok(url)
    }

    async fn fetch_summary(&self, name: &str) -> Result<Option<String>> {
        let url = self.summary_url(name)?;
        tracing::debug!("Fetching description from: {}", url);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            tracing::debug!("Description lookup returned {}", response.status());
            return Ok(None);
        }

        let summary: WikiSummary = response.json().await?;
        Ok(summary.extract.filter(|text| !text.trim().is_empty()))
    }
}

#[async_trait]
impl<C: ConfigProvider> PlaceLookup for HttpPlaceLookup<C> {
    async fn resolve_place(&self, name: &str) -> Result<Option<PlaceRecord>> {
        let query = format!("{},{}", name, self.config.country());
        tracing::debug!("Geocoding '{}' via {}", query, self.search_url());

        let response = self
            .client
            .get(self.search_url())
            .query(&[("q", query.as_str()), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!("Geocoder returned {} for '{}'", response.status(), name);
            return Ok(None);
        }

        let hits: Vec<GeocodeHit> = response.json().await?;
        let Some(hit) = hits.into_iter().next() else {
            tracing::info!("No geocoding results for '{}'", name);
            return Ok(None);
        };

        let latitude = parse_coordinate(&hit.lat)?;
        let longitude = parse_coordinate(&hit.lon)?;

        Ok(Some(PlaceRecord {
            display_name: hit.display_name,
            coordinates: Coordinates::new(latitude, longitude),
        }))
    }

    async fn describe_place(&self, name: &str) -> Description {
        match self.fetch_summary(name).await {
            Ok(Some(text)) => Description::Found(text),
            Ok(None) => Description::Fallback,
            Err(e) => {
                tracing::warn!("Description lookup for '{}' failed: {}", name, e);
                Description::Fallback
            }
        }
    }
}

fn parse_coordinate(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| TravelError::ServiceUnavailable {
            service: format!("geocoder (malformed coordinate '{}')", raw),
        })
}
