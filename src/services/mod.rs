// Service exports
pub mod document_store;
pub mod memory;
pub mod recommendations;
pub mod store;

pub use document_store::{DocumentCollections, DocumentStoreClient};
pub use memory::InMemoryWardrobeStore;
pub use recommendations::{RecommendationService, ServiceError};
pub use store::{StoreError, WardrobeStore};
