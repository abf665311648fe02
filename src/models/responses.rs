use serde::Serialize;
use crate::models::domain::OutfitCandidate;

/// Recommendation payload handed back to the caller
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<OutfitCandidate>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}
