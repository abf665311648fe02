use crate::models::{ClothingItem, NewOutfit, Outfit, UserProfile};
use crate::services::store::{StoreError, WardrobeStore};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Documents requested per page when listing a collection
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Collection IDs in the document store
#[derive(Debug, Clone)]
pub struct DocumentCollections {
    pub clothing_items: String,
    pub user_profiles: String,
    pub outfits: String,
}

/// Document store API client
///
/// Handles all communication with the Appwrite-style backend:
/// - Listing a user's clothing items
/// - Fetching the user's profile
/// - Saving outfits
pub struct DocumentStoreClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    client: Client,
    collections: DocumentCollections,
    page_size: usize,
}

impl DocumentStoreClient {
    /// Create a new document store client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        collections: DocumentCollections,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            project_id,
            database_id,
            client,
            collections,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the number of documents fetched per page
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    fn documents_url(&self, collection: &str) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            collection
        )
    }

    /// Fetch a single page of documents and the collection-wide total
    async fn query_documents(
        &self,
        collection: &str,
        queries: &[String],
    ) -> Result<(Vec<Value>, u64), StoreError> {
        let queries_json = serde_json::to_string(queries)
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to encode query: {}", e)))?;
        let url = format!(
            "{}?query={}",
            self.documents_url(collection),
            urlencoding::encode(&queries_json)
        );

        tracing::debug!("Querying documents from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        let response = check_status(response, collection).await?;
        let mut json: Value = response.json().await?;

        let total = json.get("total").and_then(|t| t.as_u64()).unwrap_or(0);

        let documents = match json.get_mut("documents").map(Value::take) {
            Some(Value::Array(documents)) => documents,
            _ => return Err(StoreError::InvalidResponse("Missing documents array".into())),
        };

        tracing::debug!("Fetched {} documents from {} (total: {})", documents.len(), collection, total);

        Ok((documents, total))
    }

    /// Page through every document matching `queries`
    ///
    /// Pages are requested with `limit`/`offset` until `total` documents have
    /// been read or a short page comes back. Ordering queries are kept on every
    /// page so offsets stay consistent.
    async fn query_all_documents(
        &self,
        collection: &str,
        queries: &[String],
    ) -> Result<Vec<Value>, StoreError> {
        let mut documents = Vec::new();

        loop {
            let mut page_queries = queries.to_vec();
            page_queries.push(format!("limit({})", self.page_size));
            page_queries.push(format!("offset({})", documents.len()));

            let (page, total) = self.query_documents(collection, &page_queries).await?;
            let page_len = page.len();
            documents.extend(page);

            if page_len < self.page_size || documents.len() as u64 >= total {
                break;
            }
        }

        Ok(documents)
    }
}

/// Build an `equal` query; the value is JSON-encoded so quotes are escaped
fn equal_query(attribute: &str, value: &str) -> String {
    format!("equal(\"{}\", {})", attribute, Value::from(value))
}

#[async_trait]
impl WardrobeStore for DocumentStoreClient {
    async fn list_clothing(&self, user_id: &str) -> Result<Vec<ClothingItem>, StoreError> {
        let queries = vec![
            equal_query("userId", user_id),
            "orderAsc(\"$createdAt\")".to_string(),
        ];

        let documents = self
            .query_all_documents(&self.collections.clothing_items, &queries)
            .await?;

        let items: Vec<ClothingItem> = documents
            .into_iter()
            .filter_map(|doc| match parse_document(doc, "clothing item") {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!("Skipping clothing document for {}: {}", user_id, e);
                    None
                }
            })
            .collect();

        Ok(items)
    }

    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, StoreError> {
        tracing::debug!("Fetching profile for user: {}", user_id);

        let queries = vec![equal_query("userId", user_id), "limit(1)".to_string()];
        let (documents, _) = self
            .query_documents(&self.collections.user_profiles, &queries)
            .await?;

        let doc = documents
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(format!("Profile not found for user {}", user_id)))?;

        parse_document(doc, "profile")
    }

    async fn save_outfit(&self, outfit: &NewOutfit) -> Result<Outfit, StoreError> {
        let url = self.documents_url(&self.collections.outfits);
        let id = uuid::Uuid::new_v4().to_string();

        let data = serde_json::to_value(outfit)
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to encode outfit: {}", e)))?;
        let payload = serde_json::json!({
            "documentId": id,
            "data": data,
        });

        let response = self
            .client
            .post(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .json(&payload)
            .send()
            .await?;

        let response = check_status(response, &self.collections.outfits).await?;
        let json: Value = response.json().await?;

        tracing::debug!("Saved outfit {} for user {}", id, outfit.user_id);

        parse_document(json, "outfit")
    }
}

/// Map non-success statuses onto store errors
async fn check_status(response: Response, collection: &str) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(StoreError::Unauthorized);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unable to read body".to_string());
    tracing::error!("Document store request on {} failed: {} - {}", collection, status, body);

    Err(StoreError::Api {
        status: status.as_u16(),
        message: body,
    })
}

/// Decode a document whose fields are either top-level or nested under `data`
///
/// Nested data without its own id inherits the outer document's `$id`.
fn parse_document<T: DeserializeOwned>(mut doc: Value, kind: &str) -> Result<T, StoreError> {
    let data = if doc.get("data").map_or(false, Value::is_object) {
        let outer_id = doc.get("$id").cloned();
        let mut data = doc["data"].take();
        if let (Some(id), Some(fields)) = (outer_id, data.as_object_mut()) {
            if !fields.contains_key("id") && !fields.contains_key("$id") {
                fields.insert("$id".to_string(), id);
            }
        }
        data
    } else {
        doc
    };

    serde_json::from_value(data)
        .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse {}: {}", kind, e)))
}
