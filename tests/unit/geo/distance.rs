//! Tests for haversine distance

#[cfg(test)]
mod tests {
    use gridhunt::geo::{LatLon, distance_meters};
    use gridhunt::io::configuration::EARTH_RADIUS_METERS;
    use std::f64::consts::PI;

    fn point(lat: f64, lon: f64) -> LatLon {
        LatLon::new(lat, lon).unwrap()
    }

    // Tests distance from a point to itself is zero
    // Verified by adding a constant offset to the result
    #[test]
    fn test_distance_to_self_is_zero() {
        let here = point(37.782_182, -122.391_254);
        assert!(distance_meters(here, here).abs() < f64::EPSILON);
    }

    // Tests distance is symmetric in its arguments
    // Verified by using only the first point's latitude in the cosine term
    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (point(37.782_182, -122.391_254), point(37.782_382, -122.391_054)),
            (point(51.5, -0.12), point(48.85, 2.35)),
            (point(-33.86, 151.2), point(35.68, 139.69)),
        ];

        for (a, b) in pairs {
            let forward = distance_meters(a, b);
            let backward = distance_meters(b, a);
            assert!((forward - backward).abs() < 1e-6);
            assert!(forward > 0.0);
        }
    }

    // Tests one degree along a meridian matches the arc length on the sphere
    // Verified by using the diameter instead of the radius
    #[test]
    fn test_one_degree_of_latitude() {
        let expected = EARTH_RADIUS_METERS * PI / 180.0;
        let measured = distance_meters(point(0.0, 0.0), point(1.0, 0.0));
        assert!(
            (measured - expected).abs() < 1e-6,
            "expected {expected}, got {measured}"
        );
    }

    // Tests antipodal points are half a circumference apart
    // Verified by removing the clamp on the half chord
    #[test]
    fn test_antipodal_points() {
        let measured = distance_meters(point(0.0, 0.0), point(0.0, 180.0));
        assert!((measured - PI * EARTH_RADIUS_METERS).abs() < 1e-3);
    }

    // Tests the default play area spans roughly 44 m north to south
    // Verified by skipping the degree-to-radian conversion
    #[test]
    fn test_play_area_scale() {
        let measured = distance_meters(point(37.781_982, -122.391_254), point(37.782_382, -122.391_254));
        assert!((measured - 44.478).abs() < 0.01, "got {measured}");
    }
}
