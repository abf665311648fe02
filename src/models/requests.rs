use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Occasion, OutfitCandidate, Season, Style};

/// Request to persist a recommended outfit
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveOutfitRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(length(min = 1))]
    #[serde(rename = "items")]
    pub item_ids: Vec<String>,
    #[serde(default)]
    pub style: Option<Style>,
    #[serde(rename = "occasion", default)]
    pub occasions: Vec<Occasion>,
    #[serde(rename = "season", default)]
    pub seasons: Vec<Season>,
}

impl SaveOutfitRequest {
    /// Offer a generated candidate for saving as-is
    pub fn from_candidate(candidate: &OutfitCandidate) -> Self {
        Self {
            name: candidate.name().to_string(),
            description: Some(candidate.description().to_string()),
            item_ids: candidate.item_ids(),
            style: Some(candidate.top().style),
            occasions: Vec::new(),
            seasons: Vec::new(),
        }
    }
}
