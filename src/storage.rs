use crate::config::ObjectStoreConfig;
use crate::constants::HTTP_TIMEOUT_SECONDS;
use crate::error::{EtlError, Result};
use crate::types::{ChartRow, MovieRow};
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::debug;

/// Object storage port for snapshot uploads
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<()>;
}

/// Supabase Storage implementation
pub struct SupabaseStore {
    base_url: String,
    service_key: String,
    bucket: String,
    client: reqwest::Client,
}

impl SupabaseStore {
    pub fn new(config: &ObjectStoreConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECONDS))
            .build()?;
        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            service_key: config.service_key.clone(),
            bucket: config.bucket.clone(),
            client,
        })
    }
}

#[async_trait]
impl ObjectStore for SupabaseStore {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<()> {
        let endpoint = format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, key
        );

        // upsert=true: re-running the same day overwrites that day's object
        let response = self
            .client
            .put(&endpoint)
            .header("Authorization", format!("Bearer {}", self.service_key))
            .header("apikey", self.service_key.clone())
            .header(reqwest::header::CONTENT_TYPE, "text/csv")
            .query(&[("upsert", "true")])
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EtlError::Persistence(format!(
                "object upload failed: {status} - {body}"
            )));
        }

        debug!("Stored object at {}", key);
        Ok(())
    }
}

/// In-memory object store for development/testing
pub struct InMemoryStore {
    objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            objects: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let objects = self.objects.lock().unwrap();
        objects.get(key).cloned()
    }
}

#[async_trait]
impl ObjectStore for InMemoryStore {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<()> {
        let mut objects = self.objects.lock().unwrap();
        objects.insert(key.to_string(), bytes);
        debug!("Stored in-memory object at {}", key);
        Ok(())
    }
}

/// Appends chart rows to the local CSV history. The header is written only
/// when the file does not yet exist; prior rows are never rewritten.
pub fn append_chart_csv(path: &Path, rows: &[ChartRow]) -> Result<()> {
    let write_header = !path.exists();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| EtlError::Persistence(format!("opening {}: {e}", path.display())))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(write_header)
        .from_writer(file);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Serializes movie rows to CSV in memory, header included.
pub fn movies_csv(rows: &[MovieRow]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| EtlError::Persistence(format!("finalizing CSV buffer: {e}")))
}

/// Year/month partitioned object key for one day's movie snapshot.
pub fn movie_object_key(run_date: NaiveDate) -> String {
    format!(
        "cleaned_data/{:04}/{:02}/{}_movies.csv",
        run_date.year(),
        run_date.month(),
        run_date.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_key_is_partitioned_by_year_and_month() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(
            movie_object_key(date),
            "cleaned_data/2025/03/2025-03-07_movies.csv"
        );
    }
}
