use crate::models::GeoPoint;
use serde::{Deserialize, Serialize};

/// A place found near the route. Identity is `id` (the provider's place id):
/// two records with the same id are the same place, whichever sample point
/// found them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attraction {
    pub id: String,
    pub name: String,
    /// Unrated places are never ranked
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
    pub location: GeoPoint,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Attraction {
    pub fn is_rated(&self) -> bool {
        self.rating.is_some()
    }
}
