//! Tests for backend row types

#[cfg(test)]
mod tests {
    use crate::{classic_session, sample_at};
    use gridhunt::geo::GridCell;
    use gridhunt::sync::{Table, UserGameRecord, UserLocationRecord};
    use serde_json::json;

    // Tests table names match the backend schema
    // Verified by using the Rust variant names
    #[test]
    fn test_table_names() {
        assert_eq!(Table::UserLocations.as_str(), "user_locations");
        assert_eq!(Table::UserGames.to_string(), "user_games");
        assert_eq!(serde_json::to_value(Table::UserGames).unwrap(), json!("user_games"));
    }

    // Tests location rows carry the raw coordinate and the mapped cell
    // Verified by storing the cell center instead of the sample
    #[test]
    fn test_location_record_from_sample() {
        let sample = sample_at(3, 1, 99);
        let record = UserLocationRecord::new("erin", &sample, GridCell::new(3, 1));

        assert_eq!(record.user_id, "erin");
        assert!((record.latitude - sample.latitude).abs() < f64::EPSILON);
        assert!((record.longitude - sample.longitude).abs() < f64::EPSILON);
        assert_eq!(record.cell(), GridCell::new(3, 1));
        assert!(record.updated_at > 0);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["grid_x"], json!(3));
        assert_eq!(value["grid_y"], json!(1));
    }

    // Tests game rows duplicate score and level next to the snapshot
    // Verified by leaving score at zero
    #[test]
    fn test_game_record_from_session() {
        let mut session = classic_session();
        session.move_to(GridCell::new(0, 4)).unwrap();

        let record = UserGameRecord::from_session("erin", &session).unwrap();
        assert_eq!(record.score, 10);
        assert_eq!(record.level, 1);
        assert_eq!(record.snapshot().unwrap(), session.snapshot());
    }

    // Tests a row whose game state is not a snapshot fails to decode
    // Verified by defaulting the snapshot on decode errors
    #[test]
    fn test_game_record_with_foreign_state() {
        let record = UserGameRecord {
            user_id: "erin".to_string(),
            game_state: json!({ "score": 10 }),
            score: 10,
            level: 1,
            updated_at: 0,
        };
        assert!(record.snapshot().is_err());
    }
}
