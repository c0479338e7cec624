#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use daily_trends::apis::spotify::chart_rows;
    use daily_trends::error::EtlError;
    use serde_json::json;

    fn run_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 4).unwrap()
    }

    #[test]
    fn test_two_artist_track_projection() {
        let payload = json!({
            "tracks": {
                "items": [
                    {
                        "track": {
                            "name": "Song X",
                            "artists": [{"name": "A"}, {"name": "B"}],
                            "popularity": 80,
                            "duration": 210000
                        }
                    }
                ]
            }
        });

        let rows = chart_rows(&payload, run_date()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, "2025-08-04");
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].song, "Song X");
        assert_eq!(rows[0].artist, "A, B");
        assert_eq!(rows[0].popularity, 80);
        assert_eq!(rows[0].duration_min, 3.5);
    }

    #[test]
    fn test_ranks_are_dense_and_in_source_order() {
        let payload = json!({
            "tracks": {
                "items": [
                    {"track": {"name": "First", "artists": [{"name": "A"}], "popularity": 90, "duration": 180000}},
                    {"track": {"name": "Second", "artists": [{"name": "B"}], "popularity": 85, "duration": 200000}},
                    {"track": {"name": "Third", "artists": [{"name": "C"}], "popularity": 70, "duration": 240000}}
                ]
            }
        });

        let rows = chart_rows(&payload, run_date()).unwrap();

        assert_eq!(rows.len(), 3);
        let ranks: Vec<u32> = rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        let songs: Vec<&str> = rows.iter().map(|r| r.song.as_str()).collect();
        assert_eq!(songs, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_duration_rounds_to_two_decimals() {
        let payload = json!({
            "tracks": {
                "items": [
                    {"track": {"name": "Odd Length", "artists": [{"name": "A"}], "popularity": 50, "duration": 200000}}
                ]
            }
        });

        let rows = chart_rows(&payload, run_date()).unwrap();

        // 200000 ms is 3.3333... minutes
        assert_eq!(rows[0].duration_min, 3.33);
    }

    #[test]
    fn test_transformation_is_deterministic() {
        let payload = json!({
            "tracks": {
                "items": [
                    {"track": {"name": "Song X", "artists": [{"name": "A"}], "popularity": 80, "duration": 210000}},
                    {"track": {"name": "Song Y", "artists": [{"name": "B"}, {"name": "C"}], "popularity": 60, "duration": 195500}}
                ]
            }
        });

        let first = chart_rows(&payload, run_date()).unwrap();
        let second = chart_rows(&payload, run_date()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_item_list_yields_empty_rowset() {
        let payload = json!({"tracks": {"items": []}});

        let rows = chart_rows(&payload, run_date()).unwrap();

        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_items_is_an_error() {
        let payload = json!({"tracks": {}});

        let err = chart_rows(&payload, run_date()).unwrap_err();

        assert!(matches!(err, EtlError::MissingField(_)));
    }

    #[test]
    fn test_artist_without_name_is_an_error() {
        let payload = json!({
            "tracks": {
                "items": [
                    {"track": {"name": "Song X", "artists": [{"id": "123"}], "popularity": 80, "duration": 210000}}
                ]
            }
        });

        let err = chart_rows(&payload, run_date()).unwrap_err();

        assert!(matches!(err, EtlError::MissingField(_)));
    }
}
