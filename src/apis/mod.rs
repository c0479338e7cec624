pub mod spotify;
pub mod tmdb;
