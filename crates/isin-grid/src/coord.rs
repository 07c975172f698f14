//! Coordinate normalization and spherical distance helpers.

/// Mean Earth radius in kilometers used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.229;

/// Clamp a latitude to [-90, 90] degrees.
pub fn clamp_lat(lat: f64) -> f64 {
    lat.max(-90.0).min(90.0)
}

/// Wrap a longitude into (-180, 180] degrees.
///
/// Closed-form modulo, so inputs arbitrarily far out of range cost the same
/// as in-range ones. Values already inside the interval are returned
/// unchanged, which keeps the function idempotent.
pub fn wrap_lon(lon: f64) -> f64 {
    if lon > -180.0 && lon <= 180.0 {
        return lon;
    }
    let wrapped = 180.0 - (180.0 - lon).rem_euclid(360.0);
    // rem_euclid can round up to a full period for inputs just past 180.
    if wrapped == -180.0 {
        180.0
    } else {
        wrapped
    }
}

/// Great-circle distance in kilometers between two points, via the haversine
/// formula on a sphere of radius [`EARTH_RADIUS_KM`].
pub fn great_circle_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let half_dphi = (lat2 - lat1).to_radians() / 2.0;
    let half_dlambda = (lon2 - lon1).to_radians() / 2.0;

    let a = half_dphi.sin().powi(2) + phi1.cos() * phi2.cos() * half_dlambda.sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp_lat() {
        assert_eq!(clamp_lat(91.0), 90.0);
        assert_eq!(clamp_lat(-91.0), -90.0);
        assert_eq!(clamp_lat(45.5), 45.5);
        assert_eq!(clamp_lat(1e9), 90.0);
    }

    #[test]
    fn test_wrap_lon_in_range_unchanged() {
        for lon in [-179.99, -90.0, 0.0, 0.1, 90.0, 179.99, 180.0] {
            assert_eq!(wrap_lon(lon), lon);
        }
    }

    #[test]
    fn test_wrap_lon_out_of_range() {
        assert_eq!(wrap_lon(181.0), -179.0);
        assert_eq!(wrap_lon(-181.0), 179.0);
        assert_eq!(wrap_lon(360.0), 0.0);
        assert_eq!(wrap_lon(540.0), 180.0);
        assert_eq!(wrap_lon(-540.0), 180.0);
        assert_eq!(wrap_lon(-180.0), 180.0);
        assert_relative_eq!(wrap_lon(36190.0), 190.0 - 360.0, epsilon = 1e-9);
    }

    #[test]
    fn test_wrap_lon_idempotent() {
        for lon in [-1e6, -720.5, -180.0, -179.0, 0.0, 179.0, 180.0, 725.25, 4.2e7] {
            let once = wrap_lon(lon);
            assert_eq!(wrap_lon(once), once, "not idempotent for {lon}");
            assert!(once > -180.0 && once <= 180.0, "out of range for {lon}");
        }
    }

    #[test]
    fn test_great_circle_one_degree_on_equator() {
        // One degree of arc on the sphere is R * pi / 180 km.
        let km = great_circle_km(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(km, 111.19892344854581, epsilon = 1e-6);
    }

    #[test]
    fn test_great_circle_symmetry_and_zero() {
        assert_eq!(great_circle_km(12.0, 34.0, 12.0, 34.0), 0.0);
        let d1 = great_circle_km(10.0, 20.0, -30.0, 150.0);
        let d2 = great_circle_km(-30.0, 150.0, 10.0, 20.0);
        assert_relative_eq!(d1, d2, epsilon = 1e-9);
    }

    #[test]
    fn test_great_circle_antipodal() {
        // Half the circumference of the sphere.
        let km = great_circle_km(0.0, 0.0, 0.0, 180.0);
        assert_relative_eq!(km, EARTH_RADIUS_KM * std::f64::consts::PI, epsilon = 1e-6);
    }
}
