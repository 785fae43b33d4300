use crate::core::accounts::AccountStore;
use crate::core::chat::{self, ChatContext, ChatReply, DEFAULT_PLACE};
use crate::core::geo::{distance_km, format_distance};
use crate::core::reviews::ReviewStore;
use crate::core::scoring;
use crate::core::{KeyValueStore, PlaceLookup};
use crate::domain::model::{Review, RouteInfo, SearchKind, SearchResult, Tags};
use crate::utils::error::{Result, TravelError};
use crate::utils::validation::require_input;

pub const SEARCH_RESULT_KEY: &str = "searchResult";

/// Score, label and tags for one place, always computed from the current reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceSummary {
    pub place: String,
    pub score: u8,
    pub recommendation: String,
    pub average_rating: f64,
    pub review_count: usize,
    pub tags: Tags,
}

/// 搜尋、評論、評分與聊天的入口
pub struct TravelAssistant<S: KeyValueStore, L: PlaceLookup> {
    store: S,
    lookup: L,
}

impl<S: KeyValueStore, L: PlaceLookup> TravelAssistant<S, L> {
    pub fn new(store: S, lookup: L) -> Self {
        Self { store, lookup }
    }

    pub fn reviews(&self) -> ReviewStore<&S> {
        ReviewStore::new(&self.store)
    }

    pub fn accounts(&self) -> AccountStore<&S> {
        AccountStore::new(&self.store)
    }

    pub async fn search_place(&self, query: &str) -> Result<SearchResult> {
        let query = require_input("a place name", query)?;
        tracing::info!("🔍 Searching place: {}", query);

        let place = self
            .lookup
            .resolve_place(&query)
            .await?
            .ok_or_else(|| TravelError::not_found(&query))?;

        let description = self.lookup.describe_place(&query).await;
        if description.is_fallback() {
            tracing::debug!("No description for {}, using placeholder", query);
        }

        let score = scoring::score(&self.reviews().by_place(&query)?);

        let result = SearchResult {
            name: place.display_name,
            coordinates: place.coordinates,
            description: description.text().to_string(),
            score,
            kind: SearchKind::Place,
            route: None,
            query,
        };

        self.save_result(&result)?;
        Ok(result)
    }

    pub async fn search_route(&self, from: &str, to: &str) -> Result<SearchResult> {
        let from = require_input("both locations", from)?;
        let to = require_input("both locations", to)?;
        tracing::info!("🗺️ Searching route: {} → {}", from, to);

        let origin = self.lookup.resolve_place(&from).await?;
        let destination = self.lookup.resolve_place(&to).await?;
        let (origin, destination) = match (origin, destination) {
            (Some(origin), Some(destination)) => (origin, destination),
            (None, _) => return Err(TravelError::not_found(&from)),
            (_, None) => return Err(TravelError::not_found(&to)),
        };

        let description = self.lookup.describe_place(&to).await;
        let distance = distance_km(origin.coordinates, destination.coordinates);
        let score = scoring::score(&self.reviews().by_place(&to)?);

        let result = SearchResult {
            query: to.clone(),
            name: format!("Route: {} → {}", from, to),
            coordinates: destination.coordinates,
            description: format!(
                "Distance: {}\n\nAbout {}:\n{}",
                format_distance(distance),
                to,
                description.text()
            ),
            score,
            kind: SearchKind::Route,
            route: Some(RouteInfo {
                from,
                to,
                distance_km: distance,
            }),
        };

        self.save_result(&result)?;
        Ok(result)
    }

    pub fn current_result(&self) -> Result<Option<SearchResult>> {
        match self.store.get(SEARCH_RESULT_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save_result(&self, result: &SearchResult) -> Result<()> {
        self.store
            .set(SEARCH_RESULT_KEY, &serde_json::to_string(result)?)
    }

    pub fn summarize(&self, place: &str) -> Result<PlaceSummary> {
        let reviews = self.reviews();
        let place_reviews = reviews.by_place(place)?;
        let score = scoring::score(&place_reviews);

        Ok(PlaceSummary {
            place: place.to_string(),
            score,
            recommendation: scoring::recommendation_message(score),
            average_rating: reviews.average_rating(place)?,
            review_count: place_reviews.len(),
            tags: scoring::extract_tags(&place_reviews),
        })
    }

    /// Adds a review and refreshes the stored search result when it is for the same place.
    pub fn submit_review(&self, place: &str, rating: u8, text: &str, author: &str) -> Result<Review> {
        let review = self.reviews().add(place, rating, text, author)?;
        self.rescore_current(Some(&review.place))?;
        Ok(review)
    }

    pub fn delete_review(&self, index: usize) -> Result<Review> {
        let removed = self.reviews().delete_at(index)?;
        self.rescore_current(Some(&removed.place))?;
        Ok(removed)
    }

    pub fn reset_reviews(&self) -> Result<()> {
        self.reviews().clear_and_reseed()?;
        // 整批換掉，不管哪個地點都要重算
        self.rescore_current(None)
    }

    /// 評論變動後重算已存的搜尋結果，`place` 為 None 表示一律重算
    fn rescore_current(&self, place: Option<&str>) -> Result<()> {
        let Some(mut current) = self.current_result()? else {
            return Ok(());
        };
        if let Some(place) = place {
            if current.query.to_lowercase() != place.to_lowercase() {
                return Ok(());
            }
        }

        current.score = scoring::score(&self.reviews().by_place(&current.query)?);
        tracing::debug!("Rescored {} to {}", current.query, current.score);
        self.save_result(&current)
    }

    pub fn chat(&self, message: &str) -> Result<ChatReply> {
        let place = self
            .current_result()?
            .map(|r| r.query)
            .unwrap_or_else(|| DEFAULT_PLACE.to_string());
        let reviews = self.reviews().by_place(&place)?;

        chat::respond(
            message,
            &ChatContext {
                place: &place,
                reviews: &reviews,
            },
        )
    }
}
