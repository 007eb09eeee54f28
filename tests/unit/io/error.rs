//! Tests for game errors

#[cfg(test)]
mod tests {
    use gridhunt::GameError;
    use gridhunt::game::GameStatus;
    use gridhunt::io::error::{
        Violation, backend_error, file_system_error, invalid_parameter, precondition,
    };
    use gridhunt::location::LocationError;
    use std::error::Error;

    // Tests messages name the parameter, operation and cause
    // Verified by dropping the value from the message
    #[test]
    fn test_error_messages() {
        let err = invalid_parameter("grid_size", &0, &"must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'grid_size' = '0': must be at least 1"
        );

        let err = precondition(
            "move_to",
            Violation::SessionFinished {
                status: GameStatus::Victory,
            },
        );
        assert_eq!(
            err.to_string(),
            "Precondition violated in move_to: session already finished (victory)"
        );

        let err = backend_error("upsert_game", &"connection refused");
        assert_eq!(
            err.to_string(),
            "Backend error during upsert_game: connection refused"
        );
    }

    // Tests wrapped errors expose their cause
    // Verified by returning None from source
    #[test]
    fn test_error_sources() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = file_system_error("/tmp/board.png", "write report", io);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("/tmp/board.png"));

        let err = GameError::from(LocationError::PermissionDenied);
        assert_eq!(
            err.source().map(ToString::to_string),
            Some("permission denied".to_string())
        );

        assert!(invalid_parameter("layout", &"x", &"y").source().is_none());
    }

    // Tests violations compare by value
    // Verified by comparing grid sizes loosely
    #[test]
    fn test_violation_equality() {
        let a = Violation::CellOutOfRange {
            x: 5,
            y: 0,
            grid_size: 5,
        };
        assert_eq!(a, a);
        assert_ne!(
            a,
            Violation::CellOutOfRange {
                x: 5,
                y: 0,
                grid_size: 6
            }
        );
        assert!(
            Violation::InconsistentSnapshot { reason: "bad" }
                .to_string()
                .contains("bad")
        );
    }
}
