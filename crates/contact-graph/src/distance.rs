//! Distance between two recorded locations.

use contact_core::config::DistanceMetric;
use contact_core::models::Location;
use geo::{Distance, Euclidean, Haversine, Point};

/// Distance between `a` and `b` under `metric`.
///
/// Planar: Euclidean over (latitude, longitude), in degrees.
/// Haversine: great-circle distance, in meters.
pub fn distance(metric: DistanceMetric, a: Location, b: Location) -> f64 {
    let pa = Point::new(a.longitude, a.latitude);
    let pb = Point::new(b.longitude, b.latitude);
    match metric {
        DistanceMetric::Planar => Euclidean::distance(pa, pb),
        DistanceMetric::Haversine => Haversine::distance(pa, pb),
    }
}
