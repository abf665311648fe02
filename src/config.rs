use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use crate::services::{DocumentCollections, DocumentStoreClient};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub store: StoreSettings,
    #[serde(default)]
    pub collection: CollectionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    pub endpoint: String,
    pub api_key: String,
    pub project_id: String,
    pub database_id: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionSettings {
    #[serde(default = "default_clothing_collection")]
    pub clothing_items: String,
    #[serde(default = "default_profiles_collection")]
    pub user_profiles: String,
    #[serde(default = "default_outfits_collection")]
    pub outfits: String,
}

impl Default for CollectionSettings {
    fn default() -> Self {
        Self {
            clothing_items: default_clothing_collection(),
            user_profiles: default_profiles_collection(),
            outfits: default_outfits_collection(),
        }
    }
}

fn default_clothing_collection() -> String { "clothing_items".to_string() }
fn default_profiles_collection() -> String { "user_profiles".to_string() }
fn default_outfits_collection() -> String { "outfits".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default, config/local)
    /// 3. Environment variables (prefixed with WARDROBE__)
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        dotenv::dotenv().ok();

        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., WARDROBE__STORE__ENDPOINT -> store.endpoint
            .add_source(
                Environment::with_prefix("WARDROBE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("WARDROBE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Build the document store client described by these settings
    pub fn document_store_client(&self) -> DocumentStoreClient {
        DocumentStoreClient::new(
            self.store.endpoint.clone(),
            self.store.api_key.clone(),
            self.store.project_id.clone(),
            self.store.database_id.clone(),
            DocumentCollections {
                clothing_items: self.collection.clothing_items.clone(),
                user_profiles: self.collection.user_profiles.clone(),
                outfits: self.collection.outfits.clone(),
            },
            Duration::from_secs(self.store.timeout_secs),
        )
    }
}

/// Apply the conventional Appwrite variables when they are set
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(endpoint) = env::var("APPWRITE_ENDPOINT") {
        builder = builder.set_override("store.endpoint", endpoint)?;
    }
    if let Ok(api_key) = env::var("APPWRITE_API_KEY") {
        builder = builder.set_override("store.api_key", api_key)?;
    }
    if let Ok(project_id) = env::var("APPWRITE_PROJECT_ID") {
        builder = builder.set_override("store.project_id", project_id)?;
    }

    builder.build()
}
