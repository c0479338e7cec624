use crate::error::{EtlError, Result};
use crate::types::{ChartRow, MovieRow};
use std::fs;
use std::path::Path;

/// Renders a Markdown pipe table.
pub fn markdown_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = String::new();
    table.push_str(&format!("| {} |\n", headers.join(" | ")));
    table.push_str(&format!(
        "|{}|\n",
        headers.iter().map(|_| " --- ").collect::<Vec<_>>().join("|")
    ));
    for row in rows {
        table.push_str(&format!("| {} |\n", row.join(" | ")));
    }
    table
}

/// Top-of-chart view: rank, song and artist for the first `limit` rows.
pub fn chart_table(rows: &[ChartRow], limit: usize) -> String {
    let body: Vec<Vec<String>> = rows
        .iter()
        .take(limit)
        .map(|r| vec![r.rank.to_string(), r.song.clone(), r.artist.clone()])
        .collect();
    markdown_table(&["rank", "song", "artist"], &body)
}

/// Trending-movies view with display-friendly headers. A zero vote average
/// means the movie is unrated and renders as "N/A".
pub fn movie_table(rows: &[MovieRow], limit: usize) -> String {
    let body: Vec<Vec<String>> = rows
        .iter()
        .take(limit)
        .map(|r| {
            let rating = if r.vote_average == 0.0 {
                "N/A".to_string()
            } else {
                r.vote_average.to_string()
            };
            vec![
                r.rank.to_string(),
                r.title.clone(),
                r.popularity.to_string(),
                rating,
                r.release_date.clone(),
            ]
        })
        .collect();
    markdown_table(
        &["Rank", "Title", "Popularity", "Rating", "Release Date"],
        &body,
    )
}

/// Overwrites the report file with a heading and a Markdown table.
pub fn write_report(path: &Path, heading: &str, table: &str) -> Result<()> {
    let content = format!("# {heading}\n\n{table}");
    fs::write(path, content)
        .map_err(|e| EtlError::Persistence(format!("writing {}: {e}", path.display())))
}
