use crate::domain::model::Review;
use crate::utils::error::Result;
use crate::utils::validation::require_input;
use serde::Serialize;

pub const DEFAULT_PLACE: &str = "this location";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Safety,
    Cleanliness,
    Crowd,
    Price,
    Weather,
    Food,
    Timing,
    Transport,
    Accommodation,
    Attractions,
}

/// What a rule gets to build its answer from.
pub struct ChatContext<'a> {
    pub place: &'a str,
    /// Reviews of `place`, read from the store for this message.
    pub reviews: &'a [Review],
}

impl ChatContext<'_> {
    fn reviews_mentioning(&self, keyword: &str) -> usize {
        self.reviews
            .iter()
            .filter(|r| r.text.to_lowercase().contains(keyword))
            .count()
    }
}

pub struct ChatRule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
    pub respond: fn(&ChatContext) -> String,
}

impl ChatRule {
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    /// `None` when no rule matched and the fallback menu was returned.
    pub topic: Option<Topic>,
    pub text: String,
}

/// 順序有意義：第一個符合的規則勝出
pub const RULES: &[ChatRule] = &[
    ChatRule {
        topic: Topic::Safety,
        keywords: &["safe", "safety", "secure"],
        respond: safety,
    },
    ChatRule {
        topic: Topic::Cleanliness,
        keywords: &["clean", "hygiene", "sanitation"],
        respond: cleanliness,
    },
    ChatRule {
        topic: Topic::Crowd,
        keywords: &["crowd", "busy", "rush", "people"],
        respond: crowd,
    },
    ChatRule {
        topic: Topic::Price,
        keywords: &["price", "cost", "expensive", "budget", "money"],
        respond: price,
    },
    ChatRule {
        topic: Topic::Weather,
        keywords: &["weather", "temperature", "rain", "climate", "season"],
        respond: weather,
    },
    ChatRule {
        topic: Topic::Food,
        keywords: &["food", "eat", "restaurant", "cuisine"],
        respond: food,
    },
    ChatRule {
        topic: Topic::Timing,
        keywords: &["when", "best time", "visit"],
        respond: timing,
    },
    ChatRule {
        topic: Topic::Transport,
        keywords: &["transport", "travel", "reach", "how to get"],
        respond: transport,
    },
    ChatRule {
        topic: Topic::Accommodation,
        keywords: &["hotel", "stay", "accommodation", "lodge"],
        respond: accommodation,
    },
    ChatRule {
        topic: Topic::Attractions,
        keywords: &["do", "see", "attraction", "activity", "visit"],
        respond: attractions,
    },
];

pub fn respond(message: &str, context: &ChatContext) -> Result<ChatReply> {
    let message = require_input("a message", message)?;
    let lowered = message.to_lowercase();

    let reply = match RULES.iter().find(|rule| rule.matches(&lowered)) {
        Some(rule) => {
            tracing::debug!("Chat message matched topic {:?}", rule.topic);
            ChatReply {
                topic: Some(rule.topic),
                text: (rule.respond)(context),
            }
        }
        None => ChatReply {
            topic: None,
            text: fallback(context),
        },
    };

    Ok(reply)
}

fn safety(ctx: &ChatContext) -> String {
    let count = ctx.reviews_mentioning("safe");
    if count > 0 {
        format!(
            "Based on {} user review(s), {} is generally considered safe. However, always stay alert, avoid isolated areas at night, and follow local guidelines. Keep your belongings secure and be aware of your surroundings.",
            count, ctx.place
        )
    } else {
        format!(
            "While we don't have specific safety reviews for {}, general travel safety tips apply: stay in well-lit areas, keep valuables secure, inform someone of your plans, and follow local advice. Check recent travel advisories before your trip.",
            ctx.place
        )
    }
}

fn cleanliness(ctx: &ChatContext) -> String {
    let count = ctx.reviews_mentioning("clean");
    if count > 0 {
        format!(
            "{} user(s) have mentioned cleanliness. Most users report good hygiene standards at {}. For the latest conditions, check recent reviews as standards can vary by season.",
            count, ctx.place
        )
    } else {
        format!(
            "Cleanliness standards at {} can vary. We recommend checking recent reviews and photos. Carry hand sanitizer and maintain personal hygiene practices while traveling.",
            ctx.place
        )
    }
}

fn crowd(ctx: &ChatContext) -> String {
    format!(
        "Crowd levels at {} typically vary by season and time. Peak tourist seasons (holidays, weekends, summer vacations) are usually busier. For a more peaceful experience, consider visiting during off-peak hours (early morning or weekdays) or during the shoulder season.",
        ctx.place
    )
}

fn price(ctx: &ChatContext) -> String {
    format!(
        "Prices at {} can vary depending on the season, type of accommodation, and activities you choose. Budget travelers should expect to spend less during off-peak seasons. Check current rates on booking platforms, and consider local transportation options to save money. Street food is often cheaper than restaurants.",
        ctx.place
    )
}

fn weather(ctx: &ChatContext) -> String {
    format!(
        "Weather conditions at {} vary by season. India has diverse climate zones - check specific weather forecasts for your travel dates. Generally, October to March is pleasant in most regions, while monsoon season (June-September) brings heavy rainfall to many areas. Pack accordingly!",
        ctx.place
    )
}

fn food(ctx: &ChatContext) -> String {
    format!(
        "{} likely offers diverse food options. Try local specialties for an authentic experience! Always choose busy, well-reviewed restaurants for food safety. Street food can be delicious but choose vendors with good hygiene. Carry bottled water and avoid uncooked foods if you have a sensitive stomach.",
        ctx.place
    )
}

fn timing(ctx: &ChatContext) -> String {
    format!(
        "The best time to visit {} depends on your preferences. For pleasant weather and lower crowds, consider visiting during the off-peak season. Check local festivals and events that might interest you. Weather-wise, October through March is generally comfortable in most Indian destinations.",
        ctx.place
    )
}

fn transport(ctx: &ChatContext) -> String {
    format!(
        "{} can typically be reached by various means of transportation. Check for the nearest airport, railway station, or bus terminal. Local transportation options include taxis, auto-rickshaws, ride-sharing apps, and public buses. Pre-book transportation when possible and use official/licensed services for safety.",
        ctx.place
    )
}

fn accommodation(ctx: &ChatContext) -> String {
    format!(
        "For accommodation in {}, book in advance during peak season. Options range from budget hostels to luxury hotels. Check reviews on booking platforms, verify location proximity to attractions, and confirm amenities. Consider homestays for an authentic local experience.",
        ctx.place
    )
}

fn attractions(ctx: &ChatContext) -> String {
    format!(
        "{} offers various attractions and activities. Research popular sites beforehand, but also leave time for spontaneous exploration. Hire local guides for historical sites to learn more. Book popular attractions in advance if possible. Check opening hours and any entry requirements.",
        ctx.place
    )
}

fn fallback(ctx: &ChatContext) -> String {
    format!(
        "I can help you with information about {} including safety, cleanliness, crowd levels, prices, weather, food, best time to visit, transportation, and things to do. What specific aspect would you like to know more about?",
        ctx.place
    )
}
