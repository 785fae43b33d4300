use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub place: String,
    pub rating: u8,
    pub text: String,
    #[serde(rename = "user")]
    pub author: String,
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub display_name: String,
    pub coordinates: Coordinates,
}

/// 描述查詢結果：查到文字，或是退回固定的預設文字
#[derive(Debug, Clone, PartialEq)]
pub enum Description {
    Found(String),
    Fallback,
}

impl Description {
    pub const FALLBACK_TEXT: &'static str = "No description available for this location.";

    pub fn text(&self) -> &str {
        match self {
            Description::Found(text) => text,
            Description::Fallback => Self::FALLBACK_TEXT,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Description::Fallback)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Place,
    Route,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteInfo {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: String,
    pub name: String,
    pub coordinates: Coordinates,
    pub description: String,
    pub score: u8,
    #[serde(rename = "type")]
    pub kind: SearchKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub salt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tags {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}
