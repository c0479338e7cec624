use crate::config::ChartConfig;
use crate::constants::{HTTP_TIMEOUT_SECONDS, SPOTIFY_PLAYLIST_URL, SPOTIFY_TOKEN_URL};
use crate::error::{EtlError, Result};
use crate::types::ChartRow;
use chrono::NaiveDate;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, instrument};

pub struct SpotifyApi {
    client: reqwest::Client,
}

impl SpotifyApi {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECONDS))
            .build()?;
        Ok(Self { client })
    }

    /// Exchanges the client id/secret pair for a bearer token.
    /// A fresh token is fetched every run; nothing is cached.
    #[instrument(skip_all)]
    pub async fn authenticate(&self, config: &ChartConfig) -> Result<String> {
        debug!("Requesting client credentials token");
        let response = self
            .client
            .post(SPOTIFY_TOKEN_URL)
            .basic_auth(&config.client_id, Some(&config.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EtlError::Auth {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = serde_json::from_slice(&response.bytes().await?)?;
        let token = payload["access_token"]
            .as_str()
            .ok_or_else(|| EtlError::MissingField("access_token not found".into()))?;

        info!("Obtained bearer token");
        Ok(token.to_string())
    }

    /// Fetches the playlist snapshot. Only the first response page is used.
    #[instrument(skip(self, token))]
    pub async fn fetch_playlist(&self, token: &str, playlist_id: &str) -> Result<Value> {
        let url = format!("{SPOTIFY_PLAYLIST_URL}/{playlist_id}");
        let response = self.client.get(&url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EtlError::Extraction(format!(
                "playlist request returned {status}: {body}"
            )));
        }

        let payload: Value = serde_json::from_slice(&response.bytes().await?)?;
        info!("Fetched playlist snapshot");
        Ok(payload)
    }
}

/// Projects the playlist payload to ranked chart rows, in source order.
pub fn chart_rows(payload: &Value, run_date: NaiveDate) -> Result<Vec<ChartRow>> {
    let items = payload["tracks"]["items"]
        .as_array()
        .ok_or_else(|| EtlError::MissingField("tracks.items not found".into()))?;

    let date = run_date.format("%Y-%m-%d").to_string();
    let mut rows = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        rows.push(chart_row(&item["track"], &date, (i + 1) as u32)?);
    }
    Ok(rows)
}

fn chart_row(track: &Value, date: &str, rank: u32) -> Result<ChartRow> {
    let song = track["name"]
        .as_str()
        .ok_or_else(|| EtlError::MissingField("track name not found".into()))?;

    let artists = track["artists"]
        .as_array()
        .ok_or_else(|| EtlError::MissingField("track artists not found".into()))?;
    let mut names = Vec::with_capacity(artists.len());
    for artist in artists {
        let name = artist["name"]
            .as_str()
            .ok_or_else(|| EtlError::MissingField("artist name not found".into()))?;
        names.push(name);
    }

    let popularity = track["popularity"]
        .as_i64()
        .ok_or_else(|| EtlError::MissingField("track popularity not found".into()))?;

    // Duration arrives in milliseconds
    let duration_ms = track["duration"]
        .as_f64()
        .ok_or_else(|| EtlError::MissingField("track duration not found".into()))?;

    Ok(ChartRow {
        date: date.to_string(),
        rank,
        song: song.to_string(),
        artist: names.join(", "),
        popularity,
        duration_min: (duration_ms / 60_000.0 * 100.0).round() / 100.0,
    })
}
