use crate::constants::{HTTP_TIMEOUT_SECONDS, TMDB_TRENDING_URL};
use crate::error::{EtlError, Result};
use crate::types::MovieRow;
use chrono::NaiveDate;
use serde_json::Value;
use std::time::Duration;
use tracing::{info, instrument};

pub struct TmdbApi {
    client: reqwest::Client,
}

impl TmdbApi {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECONDS))
            .build()?;
        Ok(Self { client })
    }

    /// Fetches today's trending movies. Only the first response page is used.
    #[instrument(skip_all)]
    pub async fn fetch_trending(&self, api_key: &str) -> Result<Value> {
        let response = self
            .client
            .get(TMDB_TRENDING_URL)
            .query(&[("api_key", api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EtlError::Extraction(format!(
                "trending request returned {status}: {body}"
            )));
        }

        let payload: Value = serde_json::from_slice(&response.bytes().await?)?;
        info!("Fetched trending movies snapshot");
        Ok(payload)
    }
}

/// Projects the trending payload to ranked movie rows, in source order.
pub fn movie_rows(payload: &Value, run_date: NaiveDate) -> Result<Vec<MovieRow>> {
    let results = payload["results"]
        .as_array()
        .ok_or_else(|| EtlError::MissingField("results not found".into()))?;

    let date = run_date.format("%Y-%m-%d").to_string();
    let mut rows = Vec::with_capacity(results.len());
    for (i, movie) in results.iter().enumerate() {
        rows.push(movie_row(movie, &date, (i + 1) as u32)?);
    }
    Ok(rows)
}

fn movie_row(movie: &Value, date: &str, rank: u32) -> Result<MovieRow> {
    let title = movie["title"]
        .as_str()
        .ok_or_else(|| EtlError::MissingField("movie title not found".into()))?;

    // TMDB reports 0.0 for unrated entries; an absent field means the same
    let popularity = movie["popularity"].as_f64().unwrap_or(0.0);
    let vote_average = movie["vote_average"].as_f64().unwrap_or(0.0);

    let release_date = match movie["release_date"].as_str() {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => "N/A".to_string(),
    };

    Ok(MovieRow {
        date: date.to_string(),
        rank,
        title: title.to_string(),
        popularity,
        vote_average,
        release_date,
    })
}
