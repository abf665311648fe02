use crate::core::{
    assembler::{assemble_candidate, limit_candidates},
    filters::matches_pair_preferences,
    layers::resolve_layers,
    pairs::generate_pairs,
    partition::partition_by_slot,
};
use crate::models::{ClothingItem, GarmentSlot, OutfitCandidate, PreferenceSet};

/// Number of candidates returned per run
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Counters describing one recommendation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecommendationStats {
    pub pairs_considered: usize,
    pub pairs_rejected: usize,
    pub pairs_without_shoes: usize,
    pub candidates_assembled: usize,
}

/// Result of the recommendation process
#[derive(Debug)]
pub struct RecommendationResult {
    pub candidates: Vec<OutfitCandidate>,
    pub stats: RecommendationStats,
}

/// Outfit recommendation orchestrator
///
/// # Pipeline Stages
/// 1. Partition the wardrobe by garment slot
/// 2. Enumerate (top, bottom) pairs, tops outermost
/// 3. Preference filtering of each pair
/// 4. Outerwear and shoe selection
/// 5. Candidate assembly
/// 6. Positional truncation
///
/// The recommender is stateless; one instance can serve any number of
/// concurrent runs.
#[derive(Debug, Clone)]
pub struct Recommender {
    limit: usize,
}

impl Recommender {
    pub fn new() -> Self {
        Self {
            limit: MAX_RECOMMENDATIONS,
        }
    }

    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Generate outfit candidates from a wardrobe snapshot
    ///
    /// # Arguments
    /// * `wardrobe` - The user's clothing items. Their order is significant:
    ///   it decides pair order, which layer wins, and which candidates
    ///   survive truncation.
    /// * `preferences` - Color and style constraints for this request
    ///
    /// # Returns
    /// RecommendationResult holding at most `limit` candidates in
    /// generation order
    pub fn recommend(
        &self,
        wardrobe: &[ClothingItem],
        preferences: &PreferenceSet,
    ) -> RecommendationResult {
        let inventory = partition_by_slot(wardrobe);
        let layers = resolve_layers(
            inventory.slot(GarmentSlot::Outerwear),
            inventory.slot(GarmentSlot::Shoes),
            preferences,
        );

        let mut stats = RecommendationStats::default();
        let mut candidates = Vec::new();

        for (top, bottom) in generate_pairs(
            inventory.slot(GarmentSlot::Top),
            inventory.slot(GarmentSlot::Bottom),
        ) {
            stats.pairs_considered += 1;

            if !matches_pair_preferences(top, bottom, preferences) {
                stats.pairs_rejected += 1;
                continue;
            }

            match layers {
                Some(layers) => candidates.push(assemble_candidate(top, bottom, layers)),
                None => stats.pairs_without_shoes += 1,
            }
        }

        stats.candidates_assembled = candidates.len();

        tracing::debug!(
            "Recommendation run: {} pairs, {} rejected, {} without shoes, {} assembled",
            stats.pairs_considered,
            stats.pairs_rejected,
            stats.pairs_without_shoes,
            stats.candidates_assembled
        );

        RecommendationResult {
            candidates: limit_candidates(candidates, self.limit),
            stats,
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate at most ten outfit candidates with a default recommender
pub fn recommend_outfits(
    wardrobe: &[ClothingItem],
    preferences: &PreferenceSet,
) -> Vec<OutfitCandidate> {
    Recommender::new().recommend(wardrobe, preferences).candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Style;

    fn create_item(id: &str, slot: GarmentSlot, color: &str, style: Style) -> ClothingItem {
        ClothingItem::new(id, "user_1", format!("Item {}", id), slot, color, style)
    }

    fn large_wardrobe() -> Vec<ClothingItem> {
        let mut wardrobe = Vec::new();
        for i in 0..5 {
            wardrobe.push(create_item(&format!("t{}", i), GarmentSlot::Top, "white", Style::Casual));
        }
        for i in 0..4 {
            wardrobe.push(create_item(&format!("b{}", i), GarmentSlot::Bottom, "blue", Style::Casual));
        }
        wardrobe.push(create_item("s0", GarmentSlot::Shoes, "black", Style::Casual));
        wardrobe
    }

    #[test]
    fn test_recommend_example_wardrobe() {
        let wardrobe = vec![
            create_item("A", GarmentSlot::Top, "red", Style::Casual),
            create_item("B", GarmentSlot::Top, "green", Style::Formal),
            create_item("X", GarmentSlot::Bottom, "blue", Style::Casual),
            create_item("S", GarmentSlot::Shoes, "red", Style::Casual),
        ];
        let prefs = PreferenceSet::unconstrained()
            .with_colors(["red"])
            .with_style(Style::Casual);

        let result = Recommender::new().recommend(&wardrobe, &prefs);

        assert_eq!(result.candidates.len(), 1);
        assert_eq!(result.candidates[0].item_ids(), vec!["A", "X", "S"]);
        assert_eq!(result.stats.pairs_considered, 2);
        assert_eq!(result.stats.pairs_rejected, 1);
    }

    #[test]
    fn test_respects_limit() {
        let result = Recommender::new().recommend(&large_wardrobe(), &PreferenceSet::unconstrained());

        assert_eq!(result.stats.candidates_assembled, 20);
        assert_eq!(result.candidates.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_truncation_is_prefix_stable() {
        let wardrobe = large_wardrobe();
        let prefs = PreferenceSet::unconstrained();

        let ten = Recommender::with_limit(10).recommend(&wardrobe, &prefs).candidates;
        let twenty = Recommender::with_limit(20).recommend(&wardrobe, &prefs).candidates;

        assert_eq!(twenty.len(), 20);
        assert_eq!(ten[..], twenty[..10]);
        // Tops outermost: first four candidates share the first top
        assert!(ten[..4].iter().all(|c| c.top().id == "t0"));
        assert_eq!(ten[4].top().id, "t1");
    }

    #[test]
    fn test_no_shoes_yields_nothing() {
        let wardrobe: Vec<ClothingItem> = large_wardrobe()
            .into_iter()
            .filter(|item| item.slot != GarmentSlot::Shoes)
            .collect();

        let result = Recommender::new().recommend(&wardrobe, &PreferenceSet::unconstrained());

        assert!(result.candidates.is_empty());
        assert_eq!(result.stats.pairs_without_shoes, 20);
    }

    #[test]
    fn test_default_recommender_limit() {
        assert_eq!(Recommender::default().limit(), MAX_RECOMMENDATIONS);
        assert!(recommend_outfits(&[], &PreferenceSet::unconstrained()).is_empty());
    }
}
