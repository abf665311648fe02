use crate::models::{ClothingItem, NewOutfit, Outfit, UserProfile};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when talking to the wardrobe store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid API key or token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Source of wardrobe documents
///
/// `list_clothing` must return items in a stable order; the recommendation
/// engine treats that order as meaningful.
#[async_trait]
pub trait WardrobeStore: Send + Sync {
    async fn list_clothing(&self, user_id: &str) -> Result<Vec<ClothingItem>, StoreError>;

    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, StoreError>;

    /// Persist an outfit; the store assigns its id
    async fn save_outfit(&self, outfit: &NewOutfit) -> Result<Outfit, StoreError>;
}
