// Core algorithm exports
pub mod assembler;
pub mod filters;
pub mod layers;
pub mod pairs;
pub mod partition;
pub mod recommender;

pub use assembler::{assemble_candidate, candidate_description, candidate_name, limit_candidates};
pub use filters::{matches_layer_preferences, matches_pair_preferences};
pub use layers::{resolve_layers, select_outerwear, select_shoes, Layers};
pub use pairs::generate_pairs;
pub use partition::{favorite_items, items_for_occasion, items_for_season, items_in_slot, partition_by_slot, SlotInventory};
pub use recommender::{recommend_outfits, RecommendationResult, RecommendationStats, Recommender, MAX_RECOMMENDATIONS};
