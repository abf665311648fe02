use crate::models::{ClothingItem, NewOutfit, Outfit, UserProfile};
use crate::services::store::{StoreError, WardrobeStore};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process wardrobe store
///
/// Items are kept in insertion order. Used for tests and for embedding the
/// engine without a remote document store.
#[derive(Default)]
pub struct InMemoryWardrobeStore {
    profiles: RwLock<HashMap<String, UserProfile>>,
    clothing: RwLock<Vec<ClothingItem>>,
    outfits: RwLock<Vec<Outfit>>,
}

impl InMemoryWardrobeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_profile(&self, profile: UserProfile) {
        self.profiles
            .write()
            .await
            .insert(profile.user_id.clone(), profile);
    }

    pub async fn insert_clothing(&self, item: ClothingItem) {
        self.clothing.write().await.push(item);
    }

    pub async fn outfits_for(&self, user_id: &str) -> Vec<Outfit> {
        self.outfits
            .read()
            .await
            .iter()
            .filter(|outfit| outfit.user_id == user_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl WardrobeStore for InMemoryWardrobeStore {
    async fn list_clothing(&self, user_id: &str) -> Result<Vec<ClothingItem>, StoreError> {
        Ok(self
            .clothing
            .read()
            .await
            .iter()
            .filter(|item| item.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, StoreError> {
        self.profiles
            .read()
            .await
            .get(user_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("Profile not found for user {}", user_id)))
    }

    async fn save_outfit(&self, outfit: &NewOutfit) -> Result<Outfit, StoreError> {
        let saved = Outfit::from_new(
            outfit.clone(),
            uuid::Uuid::new_v4().to_string(),
            chrono::Utc::now(),
        );
        self.outfits.write().await.push(saved.clone());
        Ok(saved)
    }
}
