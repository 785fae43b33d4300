use crate::core::KeyValueStore;
use crate::domain::model::Review;
use crate::utils::error::{Result, TravelError};
use crate::utils::validation::{require_input, validate_range};
use chrono::Utc;

pub const REVIEWS_KEY: &str = "travelReviews";
const SAMPLE_AUTHOR: &str = "Demo User";

const SAMPLE_REVIEWS: &[(&str, u8, &str)] = &[
    (
        "Delhi",
        4,
        "Clean and well-maintained monuments. Safe for tourists but can be crowded during peak hours.",
    ),
    (
        "Goa",
        5,
        "Beautiful beaches, very safe and friendly locals. Great food and nightlife!",
    ),
    (
        "Mumbai",
        3,
        "Crowded but exciting city. Be careful with belongings in busy areas.",
    ),
    (
        "Jaipur",
        5,
        "Amazing historical sites! Clean and safe. Locals are very friendly and helpful.",
    ),
    (
        "Agra",
        4,
        "Taj Mahal is stunning! Can be crowded but worth visiting. Guides are helpful.",
    ),
    (
        "Kerala",
        5,
        "Peaceful and beautiful backwaters. Very clean and safe. Excellent food!",
    ),
    (
        "Bangalore",
        4,
        "Modern city with great weather. Safe but traffic can be bad. Nice cafes and parks.",
    ),
];

/// The seven fixture reviews written into an empty store.
pub fn sample_reviews() -> Vec<Review> {
    let now = Utc::now();
    SAMPLE_REVIEWS
        .iter()
        .map(|(place, rating, text)| Review {
            place: place.to_string(),
            rating: *rating,
            text: text.to_string(),
            author: SAMPLE_AUTHOR.to_string(),
            timestamp: now,
        })
        .collect()
}

/// 評論存儲：整個列表存在同一個 key 底下
pub struct ReviewStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ReviewStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Vec<Review>> {
        match self.store.get(REVIEWS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => {
                tracing::info!("Review store empty, seeding {} sample reviews", SAMPLE_REVIEWS.len());
                let seeded = sample_reviews();
                self.save(&seeded)?;
                Ok(seeded)
            }
        }
    }

    fn save(&self, reviews: &[Review]) -> Result<()> {
        let raw = serde_json::to_string(reviews)?;
        self.store.set(REVIEWS_KEY, &raw)
    }

    pub fn add(&self, place: &str, rating: u8, text: &str, author: &str) -> Result<Review> {
        let place = require_input("a place name", place)?;
        validate_range("rating", rating, 1, 5)?;

        let mut reviews = self.load()?;
        let review = Review {
            place,
            rating,
            text: text.to_string(),
            author: author.to_string(),
            timestamp: Utc::now(),
        };

        reviews.push(review.clone());
        self.save(&reviews)?;

        tracing::debug!("Added review for {} ({} total)", review.place, reviews.len());
        Ok(review)
    }

    /// Case-insensitive exact match on the place name.
    pub fn by_place(&self, place: &str) -> Result<Vec<Review>> {
        let wanted = place.to_lowercase();
        Ok(self
            .load()?
            .into_iter()
            .filter(|review| review.place.to_lowercase() == wanted)
            .collect())
    }

    pub fn all(&self) -> Result<Vec<Review>> {
        self.load()
    }

    pub fn delete_at(&self, index: usize) -> Result<Review> {
        let mut reviews = self.load()?;
        if index >= reviews.len() {
            return Err(TravelError::not_found(format!(
                "review #{} (store has {})",
                index,
                reviews.len()
            )));
        }

        let removed = reviews.remove(index);
        self.save(&reviews)?;
        Ok(removed)
    }

    pub fn clear_and_reseed(&self) -> Result<()> {
        self.store.remove(REVIEWS_KEY)?;
        self.load().map(|_| ())
    }

    /// Mean rating for `place`, 0.0 when nobody reviewed it.
    pub fn average_rating(&self, place: &str) -> Result<f64> {
        let reviews = self.by_place(place)?;
        if reviews.is_empty() {
            return Ok(0.0);
        }

        let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
        Ok(f64::from(sum) / reviews.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryStore;

    #[test]
    fn test_first_access_seeds_samples() {
        let store = MemoryStore::new();
        let reviews = ReviewStore::new(&store);

        let all = reviews.all().unwrap();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0].place, "Delhi");
        assert_eq!(all[6].place, "Bangalore");
        assert!(all.iter().all(|r| r.author == "Demo User"));
        assert!(store.get(REVIEWS_KEY).unwrap().is_some());
    }

    #[test]
    fn test_by_place_is_case_insensitive() {
        let store = MemoryStore::new();
        let reviews = ReviewStore::new(&store);

        let lower = reviews.by_place("goa").unwrap();
        let upper = reviews.by_place("GOA").unwrap();
        assert_eq!(lower.len(), 1);
        assert_eq!(lower, upper);
        assert_eq!(lower[0].rating, 5);

        assert!(reviews.by_place("Goa Beach").unwrap().is_empty());
    }

    #[test]
    fn test_add_appends_and_persists() {
        let store = MemoryStore::new();
        let reviews = ReviewStore::new(&store);

        let added = reviews.add("Goa", 2, "Too crowded", "Asha").unwrap();
        assert_eq!(added.author, "Asha");

        let all = reviews.all().unwrap();
        assert_eq!(all.len(), 8);
        assert_eq!(all.last().unwrap(), &added);
        assert_eq!(reviews.by_place("goa").unwrap().len(), 2);

        // A fresh view over the same store sees the write
        let again = ReviewStore::new(&store);
        assert_eq!(again.all().unwrap().len(), 8);
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let store = MemoryStore::new();
        let reviews = ReviewStore::new(&store);

        assert!(matches!(
            reviews.add("  ", 4, "nice", "Asha"),
            Err(TravelError::EmptyInput { .. })
        ));
        assert!(matches!(
            reviews.add("Goa", 0, "nice", "Asha"),
            Err(TravelError::ValidationError { .. })
        ));
        assert!(matches!(
            reviews.add("Goa", 6, "nice", "Asha"),
            Err(TravelError::ValidationError { .. })
        ));
        assert_eq!(reviews.all().unwrap().len(), 7);
    }

    #[test]
    fn test_delete_at() {
        let store = MemoryStore::new();
        let reviews = ReviewStore::new(&store);

        let removed = reviews.delete_at(0).unwrap();
        assert_eq!(removed.place, "Delhi");
        assert_eq!(reviews.all().unwrap().len(), 6);
        assert!(reviews.by_place("delhi").unwrap().is_empty());

        assert!(matches!(
            reviews.delete_at(6),
            Err(TravelError::NotFound { .. })
        ));
        assert_eq!(reviews.all().unwrap().len(), 6);
    }

    #[test]
    fn test_deleting_everything_does_not_reseed() {
        let store = MemoryStore::new();
        let reviews = ReviewStore::new(&store);

        for _ in 0..7 {
            reviews.delete_at(0).unwrap();
        }
        assert!(reviews.all().unwrap().is_empty());
    }

    #[test]
    fn test_clear_and_reseed() {
        let store = MemoryStore::new();
        let reviews = ReviewStore::new(&store);

        reviews.add("Shimla", 5, "Peaceful hills", "Ravi").unwrap();
        reviews.delete_at(0).unwrap();
        reviews.clear_and_reseed().unwrap();

        let all = reviews.all().unwrap();
        assert_eq!(all.len(), 7);
        assert!(reviews.by_place("shimla").unwrap().is_empty());
        assert_eq!(all[0].place, "Delhi");
    }

    #[test]
    fn test_average_rating() {
        let store = MemoryStore::new();
        let reviews = ReviewStore::new(&store);

        assert_eq!(reviews.average_rating("Nowhere").unwrap(), 0.0);

        reviews.add("Goa", 2, "meh", "Asha").unwrap();
        assert_eq!(reviews.average_rating("goa").unwrap(), 3.5);
    }
}
