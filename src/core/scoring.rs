use crate::domain::model::{Review, Tags};

/// Score for a place nobody has reviewed yet.
pub const DEFAULT_SCORE: u8 = 60;
const BASE_SCORE: f64 = 50.0;
const RATING_STEP: f64 = 10.0;
const MEAN_RATING_WEIGHT: f64 = 5.0;

pub const POSITIVE_WEIGHTS: &[(&str, i32)] = &[
    ("safe", 5),
    ("clean", 5),
    ("beautiful", 5),
    ("amazing", 5),
    ("wonderful", 5),
    ("excellent", 5),
    ("friendly", 5),
    ("peaceful", 5),
    ("stunning", 5),
    ("awesome", 5),
    ("great", 4),
    ("good", 3),
    ("nice", 3),
    ("pleasant", 3),
];

pub const NEGATIVE_WEIGHTS: &[(&str, i32)] = &[
    ("unsafe", -10),
    ("dangerous", -10),
    ("dirty", -8),
    ("crowded", -5),
    ("expensive", -3),
    ("bad", -5),
    ("poor", -5),
    ("terrible", -8),
    ("awful", -8),
    ("avoid", -10),
    ("disappointed", -6),
    ("worst", -10),
];

pub const POSITIVE_TAGS: &[&str] = &[
    "safe",
    "clean",
    "beautiful",
    "friendly",
    "peaceful",
    "amazing",
    "excellent",
];

pub const NEGATIVE_TAGS: &[&str] = &["unsafe", "dirty", "crowded", "expensive", "bad", "dangerous"];

/// Sum of keyword weights hit by `text`. Substring test: each keyword
/// counts once no matter how often it appears, and "unsafe" also hits "safe".
pub fn keyword_weight(text: &str) -> i32 {
    let text = text.to_lowercase();
    POSITIVE_WEIGHTS
        .iter()
        .chain(NEGATIVE_WEIGHTS)
        .filter(|(keyword, _)| text.contains(keyword))
        .map(|(_, weight)| weight)
        .sum()
}

fn rating_adjustment(rating: u8) -> f64 {
    match rating {
        4.. => RATING_STEP,
        0..=2 => -RATING_STEP,
        _ => 0.0,
    }
}

/// Recommendation score in `[0, 100]` for the reviews of one place.
pub fn score(reviews: &[Review]) -> u8 {
    if reviews.is_empty() {
        return DEFAULT_SCORE;
    }

    let mut total = BASE_SCORE;
    let mut rating_sum = 0u32;

    for review in reviews {
        rating_sum += u32::from(review.rating);
        total += rating_adjustment(review.rating);
        total += f64::from(keyword_weight(&review.text));
    }

    let mean = f64::from(rating_sum) / reviews.len() as f64;
    total += (mean - 3.0) * MEAN_RATING_WEIGHT;

    // 先夾到 0..=100 再四捨五入 (half up)
    let clamped = total.clamp(0.0, 100.0);
    (clamped + 0.5).floor() as u8
}

pub fn recommendation_label(score: u8) -> &'static str {
    match score {
        80.. => "Highly Recommended",
        70..=79 => "Recommended",
        50..=69 => "Moderately Recommended",
        30..=49 => "Consider Alternatives",
        _ => "Not Recommended",
    }
}

pub fn recommendation_message(score: u8) -> String {
    let detail = match score {
        80.. => "Excellent destination!",
        70..=79 => "Great place to visit!",
        50..=69 => "Check reviews carefully",
        30..=49 => "Mixed reviews",
        _ => "Consider other destinations",
    };
    format!("{} - {}", recommendation_label(score), detail)
}

/// Tags mentioned across `reviews`, deduplicated in first-seen order.
pub fn extract_tags(reviews: &[Review]) -> Tags {
    let mut tags = Tags::default();

    for review in reviews {
        let text = review.text.to_lowercase();
        collect_new(&mut tags.positive, POSITIVE_TAGS, &text);
        collect_new(&mut tags.negative, NEGATIVE_TAGS, &text);
    }

    tags
}

fn collect_new(found: &mut Vec<String>, keywords: &[&str], text: &str) {
    for keyword in keywords {
        if text.contains(keyword) && !found.iter().any(|k| k == keyword) {
            found.push(keyword.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn review(rating: u8, text: &str) -> Review {
        Review {
            place: "Goa".to_string(),
            rating,
            text: text.to_string(),
            author: "Tester".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_empty_reviews_score_default() {
        assert_eq!(score(&[]), 60);
    }

    #[test]
    fn test_high_ratings_clamp_to_100() {
        // 50 + 30 + 15 + 10 = 105
        let reviews = vec![
            review(5, "Amazing view"),
            review(5, "amazing food"),
            review(5, "AMAZING people"),
        ];
        assert_eq!(score(&reviews), 100);
    }

    #[test]
    fn test_low_ratings_round_half_up() {
        // 50 - 20 (ratings) - 16 (terrible, dirty) - 7.5 (mean rating 1.5) = 6.5
        let reviews = vec![review(1, "terrible and dirty"), review(2, "")];
        assert_eq!(score(&reviews), 7);

        // Keywords count per review: 50 - 20 - 32 - 7.5 = -9.5
        let reviews = vec![review(1, "terrible and dirty"), review(2, "terrible and dirty")];
        assert_eq!(score(&reviews), 0);
    }

    #[test]
    fn test_score_never_below_zero() {
        let text = "unsafe dangerous dirty crowded expensive bad poor terrible awful avoid disappointed worst";
        let reviews: Vec<Review> = (0..10).map(|_| review(1, text)).collect();
        assert_eq!(score(&reviews), 0);
    }

    #[test]
    fn test_rating_three_is_neutral() {
        assert_eq!(score(&[review(3, "it was a place")]), 50);
        assert_eq!(score(&[review(3, "nice"), review(3, "")]), 53);
    }

    #[test]
    fn test_score_is_order_invariant() {
        let forward = vec![
            review(5, "Clean and safe"),
            review(2, "crowded and expensive"),
            review(3, "good"),
            review(4, "stunning"),
        ];
        let mut backward = forward.clone();
        backward.reverse();
        assert_eq!(score(&forward), score(&backward));
    }

    #[test]
    fn test_keyword_counted_once_per_review() {
        assert_eq!(keyword_weight("good good good"), 3);
    }

    #[test]
    fn test_unsafe_also_matches_safe() {
        assert_eq!(keyword_weight("unsafe"), -10 + 5);
    }

    #[test]
    fn test_recommendation_label_boundaries() {
        assert_eq!(recommendation_label(100), "Highly Recommended");
        assert_eq!(recommendation_label(80), "Highly Recommended");
        assert_eq!(recommendation_label(79), "Recommended");
        assert_eq!(recommendation_label(70), "Recommended");
        assert_eq!(recommendation_label(69), "Moderately Recommended");
        assert_eq!(recommendation_label(50), "Moderately Recommended");
        assert_eq!(recommendation_label(49), "Consider Alternatives");
        assert_eq!(recommendation_label(30), "Consider Alternatives");
        assert_eq!(recommendation_label(29), "Not Recommended");
        assert_eq!(recommendation_label(0), "Not Recommended");
    }

    #[test]
    fn test_recommendation_message() {
        assert_eq!(
            recommendation_message(85),
            "Highly Recommended - Excellent destination!"
        );
        assert_eq!(
            recommendation_message(10),
            "Not Recommended - Consider other destinations"
        );
    }

    #[test]
    fn test_extract_tags_first_seen_order() {
        let reviews = vec![
            review(4, "Clean and safe, but crowded"),
            review(5, "Beautiful and SAFE. Very clean."),
            review(2, "dirty and crowded"),
        ];
        let tags = extract_tags(&reviews);
        assert_eq!(tags.positive, vec!["safe", "clean", "beautiful"]);
        assert_eq!(tags.negative, vec!["crowded", "dirty"]);
    }

    #[test]
    fn test_extract_tags_empty() {
        assert_eq!(extract_tags(&[]), Tags::default());
    }
}
