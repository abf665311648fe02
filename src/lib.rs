//! Wardrobe Recs - Outfit recommendation engine for a digital wardrobe
//!
//! This library combines the clothing a user owns into outfit suggestions.
//! It implements a single-pass pipeline: partition by slot, pair tops with
//! bottoms, filter by preferences, add outerwear and shoes, then keep the
//! first ten results in enumeration order.

pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{recommend_outfits, Recommender, MAX_RECOMMENDATIONS};
pub use models::{ClothingItem, GarmentSlot, OutfitCandidate, PreferenceSet, Style, StyleConstraint};
pub use services::{RecommendationService, WardrobeStore};
