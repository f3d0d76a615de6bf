use crate::models::{BoundingBox, Coordinate};

/// Earth's radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers, `0.0` for identical points and about 20015 km
/// for antipodal ones. Swapping the two points yields the same value.
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just outside [0, 1] near antipodes
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance between two coordinates in kilometers
#[inline]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    haversine_distance(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Calculate a bounding box around a center point
///
/// The box contains every point whose haversine distance from `center`
/// is at most `radius_km`, so it is safe as a pre-filter ahead of the
/// exact check. Caps that reach a pole span the full longitude range.
pub fn calculate_bounding_box(center: Coordinate, radius_km: f64) -> BoundingBox {
    // Angular radius with a small pad for rounding in the exact check
    let angular = radius_km / EARTH_RADIUS_KM * (1.0 + 1e-9) + 1e-12;

    if angular >= std::f64::consts::PI {
        return BoundingBox {
            min_lat: -90.0,
            max_lat: 90.0,
            min_lon: -180.0,
            max_lon: 180.0,
        };
    }

    let lat_delta = angular.to_degrees();
    let min_lat = center.latitude - lat_delta;
    let max_lat = center.latitude + lat_delta;

    if min_lat <= -90.0 || max_lat >= 90.0 {
        return BoundingBox {
            min_lat: min_lat.max(-90.0),
            max_lat: max_lat.min(90.0),
            min_lon: -180.0,
            max_lon: 180.0,
        };
    }

    // Widest longitude offset reached by the cap (tangent meridians)
    let ratio = angular.sin() / center.latitude.to_radians().cos();
    let lon_delta = ratio.clamp(-1.0, 1.0).asin().to_degrees();

    BoundingBox {
        min_lat,
        max_lat,
        min_lon: center.longitude - lon_delta,
        max_lon: center.longitude + lon_delta,
    }
}

/// Check if a point is within a bounding box
#[inline]
pub fn is_within_bounding_box(point: Coordinate, bbox: &BoundingBox) -> bool {
    if point.latitude < bbox.min_lat || point.latitude > bbox.max_lat {
        return false;
    }

    if bbox.max_lon - bbox.min_lon >= 360.0 {
        return true;
    }

    [point.longitude, point.longitude - 360.0, point.longitude + 360.0]
        .iter()
        .any(|lon| *lon >= bbox.min_lon && *lon <= bbox.max_lon)
}
