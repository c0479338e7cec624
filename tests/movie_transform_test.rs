#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use daily_trends::apis::tmdb::movie_rows;
    use daily_trends::error::EtlError;
    use serde_json::json;

    fn run_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 4).unwrap()
    }

    #[test]
    fn test_basic_projection() {
        let payload = json!({
            "results": [
                {
                    "title": "The Heist",
                    "popularity": 1234.5,
                    "vote_average": 7.8,
                    "release_date": "2025-07-18"
                }
            ]
        });

        let rows = movie_rows(&payload, run_date()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, "2025-08-04");
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].title, "The Heist");
        assert_eq!(rows[0].popularity, 1234.5);
        assert_eq!(rows[0].vote_average, 7.8);
        assert_eq!(rows[0].release_date, "2025-07-18");
    }

    #[test]
    fn test_ranks_are_dense_and_in_source_order() {
        let payload = json!({
            "results": [
                {"title": "First", "popularity": 900.0, "vote_average": 8.1, "release_date": "2025-06-01"},
                {"title": "Second", "popularity": 800.0, "vote_average": 6.4, "release_date": "2025-05-12"},
                {"title": "Third", "popularity": 700.0, "vote_average": 7.0, "release_date": "2025-04-30"},
                {"title": "Fourth", "popularity": 600.0, "vote_average": 5.9, "release_date": "2025-03-21"}
            ]
        });

        let rows = movie_rows(&payload, run_date()).unwrap();

        assert_eq!(rows.len(), 4);
        let ranks: Vec<u32> = rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third", "Fourth"]);
    }

    #[test]
    fn test_absent_release_date_becomes_na() {
        let payload = json!({
            "results": [
                {"title": "Unreleased", "popularity": 50.0, "vote_average": 0.0}
            ]
        });

        let rows = movie_rows(&payload, run_date()).unwrap();

        assert_eq!(rows[0].release_date, "N/A");
    }

    #[test]
    fn test_empty_release_date_becomes_na() {
        let payload = json!({
            "results": [
                {"title": "Unreleased", "popularity": 50.0, "vote_average": 0.0, "release_date": ""}
            ]
        });

        let rows = movie_rows(&payload, run_date()).unwrap();

        assert_eq!(rows[0].release_date, "N/A");
    }

    #[test]
    fn test_absent_ratings_default_to_zero() {
        let payload = json!({
            "results": [
                {"title": "Fresh", "release_date": "2025-08-01"}
            ]
        });

        let rows = movie_rows(&payload, run_date()).unwrap();

        assert_eq!(rows[0].popularity, 0.0);
        assert_eq!(rows[0].vote_average, 0.0);
    }

    #[test]
    fn test_transformation_is_deterministic() {
        let payload = json!({
            "results": [
                {"title": "The Heist", "popularity": 1234.5, "vote_average": 7.8, "release_date": "2025-07-18"},
                {"title": "Unreleased", "popularity": 50.0, "vote_average": 0.0}
            ]
        });

        let first = movie_rows(&payload, run_date()).unwrap();
        let second = movie_rows(&payload, run_date()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_results_is_an_error() {
        let payload = json!({"page": 1});

        let err = movie_rows(&payload, run_date()).unwrap_err();

        assert!(matches!(err, EtlError::MissingField(_)));
    }

    #[test]
    fn test_movie_without_title_is_an_error() {
        let payload = json!({
            "results": [
                {"popularity": 50.0, "vote_average": 6.0, "release_date": "2025-08-01"}
            ]
        });

        let err = movie_rows(&payload, run_date()).unwrap_err();

        assert!(matches!(err, EtlError::MissingField(_)));
    }
}
