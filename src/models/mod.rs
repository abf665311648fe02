// Model exports
pub mod domain;
pub mod preferences;
pub mod requests;
pub mod responses;

pub use domain::{ClothingItem, GarmentSlot, NewOutfit, Occasion, Outfit, OutfitCandidate, Season, Style, UnknownStyle, UserProfile};
pub use preferences::{PreferenceSet, StyleConstraint};
pub use requests::SaveOutfitRequest;
pub use responses::RecommendationResponse;
