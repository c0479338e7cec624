use serde::{Deserialize, Serialize};

/// One ranked track from a daily chart snapshot.
/// Field order defines the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub date: String,
    pub rank: u32,
    pub song: String,
    pub artist: String,
    pub popularity: i64,
    pub duration_min: f64,
}

/// One ranked entry from a daily trending-movies snapshot.
/// Field order defines the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRow {
    pub date: String,
    pub rank: u32,
    pub title: String,
    pub popularity: f64,
    pub vote_average: f64,
    pub release_date: String,
}
