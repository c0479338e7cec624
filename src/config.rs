use crate::constants::GLOBAL_TOP_50_PLAYLIST_ID;
use crate::error::{EtlError, Result};
use std::env;

/// Credentials and source selection for the chart pipeline
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub client_id: String,
    pub client_secret: String,
    pub playlist_id: String,
}

/// Credentials and destination for the movies pipeline
#[derive(Debug, Clone)]
pub struct MoviesConfig {
    pub api_key: String,
    pub store: ObjectStoreConfig,
}

/// Supabase Storage destination for snapshot objects
#[derive(Debug, Clone)]
pub struct ObjectStoreConfig {
    pub url: String,
    pub service_key: String,
    pub bucket: String,
}

impl ChartConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client_id: require_env("SPOTIFY_CLIENT_ID")?,
            client_secret: require_env("SPOTIFY_CLIENT_SECRET")?,
            playlist_id: env::var("SPOTIFY_PLAYLIST_ID")
                .unwrap_or_else(|_| GLOBAL_TOP_50_PLAYLIST_ID.to_string()),
        })
    }
}

impl MoviesConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: require_env("TMDB_API_KEY")?,
            store: ObjectStoreConfig::from_env()?,
        })
    }
}

impl ObjectStoreConfig {
    /// Accepts either a full URL or a project ref to derive one from.
    pub fn from_env() -> Result<Self> {
        let url = match env::var("SUPABASE_URL") {
            Ok(u) if !u.trim().is_empty() => u,
            _ => {
                let project_ref = require_env("SUPABASE_PROJECT_REF")?;
                format!("https://{project_ref}.supabase.co")
            }
        };

        Ok(Self {
            url,
            service_key: require_env("SUPABASE_SERVICE_ROLE_KEY")?,
            bucket: require_env("SUPABASE_BUCKET")?,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(EtlError::Config(format!(
            "Missing required environment variable: {name}"
        ))),
    }
}
