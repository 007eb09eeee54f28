//! Great-circle distance between coordinates

use crate::geo::coordinates::LatLon;
use crate::io::configuration::EARTH_RADIUS_METERS;

/// Haversine distance in meters between two points
///
/// Uses a spherical Earth of radius `EARTH_RADIUS_METERS`. The result is
/// symmetric and zero for identical points.
pub fn distance_meters(a: LatLon, b: LatLon) -> f64 {
    let phi_a = a.latitude().to_radians();
    let phi_b = b.latitude().to_radians();
    let delta_phi = (b.latitude() - a.latitude()).to_radians();
    let delta_lambda = (b.longitude() - a.longitude()).to_radians();

    let half_chord = (phi_a.cos() * phi_b.cos()).mul_add(
        (delta_lambda / 2.0).sin().powi(2),
        (delta_phi / 2.0).sin().powi(2),
    );
    // Rounding can push the chord slightly past 1 for antipodal points
    let half_chord = half_chord.clamp(0.0, 1.0);
    let angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());

    EARTH_RADIUS_METERS * angle
}
