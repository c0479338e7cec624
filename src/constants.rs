/// Pipeline and endpoint constants shared across the CLI and pipelines

// Pipeline names (used in CLI and run summaries)
pub const CHART_PIPELINE: &str = "chart";
pub const MOVIES_PIPELINE: &str = "movies";

// Spotify Web API endpoints
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const SPOTIFY_PLAYLIST_URL: &str = "https://api.spotify.com/v1/playlists";

/// Global Top 50 playlist, the default chart snapshot source
pub const GLOBAL_TOP_50_PLAYLIST_ID: &str = "37i9dQZEVXbMDoHDwVN2tF";

// TMDB API endpoint
pub const TMDB_TRENDING_URL: &str = "https://api.themoviedb.org/3/trending/movie/day";

// Output files
pub const CHART_CSV_FILE: &str = "global_top_50.csv";
pub const REPORT_FILE: &str = "LATEST_UPDATE.md";

// Report sizes
pub const CHART_REPORT_ROWS: usize = 10;
pub const MOVIE_REPORT_ROWS: usize = 5;

// A hung remote endpoint must not block a scheduled run forever
pub const HTTP_TIMEOUT_SECONDS: u64 = 30;
