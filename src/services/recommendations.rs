use crate::core::Recommender;
use crate::models::{NewOutfit, Outfit, PreferenceSet, RecommendationResponse, SaveOutfitRequest, Style};
use crate::services::store::{StoreError, WardrobeStore};
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

/// Errors surfaced by the recommendation service
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Items not found in wardrobe: {0:?}")]
    UnknownItems(Vec<String>),
}

/// Glue between the wardrobe store and the recommendation engine
///
/// All I/O happens here, before the engine runs; the engine itself only sees
/// the fetched snapshot.
#[derive(Clone)]
pub struct RecommendationService {
    store: Arc<dyn WardrobeStore>,
    recommender: Recommender,
}

impl RecommendationService {
    pub fn new(store: Arc<dyn WardrobeStore>, recommender: Recommender) -> Self {
        Self { store, recommender }
    }

    /// Recommend outfits using the preferences stored on the user's profile
    pub async fn recommend_for_user(
        &self,
        user_id: &str,
    ) -> Result<RecommendationResponse, ServiceError> {
        let profile = self.store.get_profile(user_id).await.map_err(|e| {
            tracing::error!("Failed to fetch profile for {}: {}", user_id, e);
            e
        })?;

        let preferences = PreferenceSet::from_profile(&profile);
        self.recommend_with_preferences(user_id, &preferences).await
    }

    /// Recommend outfits for explicit preferences, ignoring the stored profile
    pub async fn recommend_with_preferences(
        &self,
        user_id: &str,
        preferences: &PreferenceSet,
    ) -> Result<RecommendationResponse, ServiceError> {
        tracing::info!("Generating recommendations for user: {}", user_id);

        let wardrobe = self.store.list_clothing(user_id).await.map_err(|e| {
            tracing::error!("Failed to fetch wardrobe for {}: {}", user_id, e);
            e
        })?;

        tracing::debug!("Fetched {} clothing items for {}", wardrobe.len(), user_id);

        let result = self.recommender.recommend(&wardrobe, preferences);

        let response = RecommendationResponse {
            recommendations: result.candidates,
            total_candidates: result.stats.candidates_assembled,
        };

        tracing::info!(
            "Returning {} recommendations for user {} (from {} candidates)",
            response.recommendations.len(),
            user_id,
            response.total_candidates
        );

        Ok(response)
    }

    /// Persist an outfit the user picked from the recommendations
    pub async fn save_recommendation(
        &self,
        user_id: &str,
        request: SaveOutfitRequest,
    ) -> Result<Outfit, ServiceError> {
        if let Err(errors) = request.validate() {
            tracing::info!("Validation failed for save request: field_errors={:?}", errors);
            return Err(errors.into());
        }

        // Only items from the user's own wardrobe can be saved
        let wardrobe = self.store.list_clothing(user_id).await?;
        let unknown: Vec<String> = request
            .item_ids
            .iter()
            .filter(|id| !wardrobe.iter().any(|item| &item.id == *id))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            tracing::warn!("User {} tried to save unknown items: {:?}", user_id, unknown);
            return Err(ServiceError::UnknownItems(unknown));
        }

        let outfit = NewOutfit {
            user_id: user_id.to_string(),
            name: request.name,
            description: request.description,
            item_ids: request.item_ids,
            style: request.style.unwrap_or(Style::Casual),
            occasions: request.occasions,
            seasons: request.seasons,
            is_recommended: true,
        };

        let saved = self.store.save_outfit(&outfit).await?;

        tracing::info!("Saved recommended outfit {} for user {}", saved.id, user_id);

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClothingItem, GarmentSlot, UserProfile};
    use crate::services::memory::InMemoryWardrobeStore;

    async fn seeded_store() -> Arc<InMemoryWardrobeStore> {
        let store = Arc::new(InMemoryWardrobeStore::new());
        store
            .insert_profile(UserProfile {
                user_id: "alice".to_string(),
                name: "Alice".to_string(),
                email: None,
                style_preferences: vec![Style::Casual],
                favorite_colors: vec!["red".to_string()],
            })
            .await;
        for item in [
            ClothingItem::new("A", "alice", "Red Tee", GarmentSlot::Top, "red", Style::Casual),
            ClothingItem::new("B", "alice", "Green Shirt", GarmentSlot::Top, "green", Style::Formal),
            ClothingItem::new("X", "alice", "Blue Jeans", GarmentSlot::Bottom, "blue", Style::Casual),
            ClothingItem::new("S", "alice", "Red Sneakers", GarmentSlot::Shoes, "red", Style::Casual),
        ] {
            store.insert_clothing(item).await;
        }
        store
    }

    #[tokio::test]
    async fn test_recommend_for_user_uses_profile() {
        let store = seeded_store().await;
        let service = RecommendationService::new(store, Recommender::new());

        let response = service.recommend_for_user("alice").await.unwrap();

        assert_eq!(response.recommendations.len(), 1);
        assert_eq!(response.recommendations[0].name(), "Red Tee with Blue Jeans");
        assert_eq!(response.total_candidates, 1);
    }

    #[tokio::test]
    async fn test_unknown_user_fails_before_engine() {
        let store = seeded_store().await;
        let service = RecommendationService::new(store, Recommender::new());

        let result = service.recommend_for_user("mallory").await;

        assert!(matches!(result, Err(ServiceError::Store(StoreError::NotFound(_)))));
    }

    #[tokio::test]
    async fn test_save_rejects_foreign_items() {
        let store = seeded_store().await;
        let service = RecommendationService::new(store, Recommender::new());

        let request = SaveOutfitRequest {
            name: "Mixed".to_string(),
            description: None,
            item_ids: vec!["A".to_string(), "Z".to_string()],
            style: None,
            occasions: vec![],
            seasons: vec![],
        };

        let result = service.save_recommendation("alice", request).await;

        match result {
            Err(ServiceError::UnknownItems(ids)) => assert_eq!(ids, vec!["Z"]),
            other => panic!("expected UnknownItems, got {:?}", other),
        }
    }
}
