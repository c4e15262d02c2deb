//! Routing provider seam.
//!
//! The route distance cache fetches uncached legs through the
//! [`RoutingProvider`] trait. Network-backed implementations must carry
//! their own request timeouts; failures surface as the retryable
//! `RouteUnavailable` error.

use crate::error::Result;
use crate::models::TravelMode;

/// A geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub latitude: f64,
    pub longitude: f64,
}

/// Raw route metrics as returned by a provider, before rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteMetrics {
    /// Travel distance in meters
    pub distance_meters: f64,
    /// Travel duration in seconds
    pub duration_seconds: f64,
}

/// External route computation service.
pub trait RoutingProvider: Send + Sync {
    /// Computes distance and duration between two coordinates for a mode.
    fn compute_route(&self, from: Coord, to: Coord, mode: TravelMode) -> Result<RouteMetrics>;
}

/// Deterministic offline provider using great-circle distance and per-mode
/// average speeds. Suitable for tests and for running without a routing
/// backend; real deployments implement [`RoutingProvider`] against a
/// routing API.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreatCircleRouter;

impl GreatCircleRouter {
    const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

    /// Average urban speed in meters per second for a travel mode.
    fn speed(mode: TravelMode) -> f64 {
        match mode {
            // 35 km/h
            TravelMode::Driving => 9.7,
            // 4.5 km/h
            TravelMode::Walking => 1.25,
            // 15 km/h
            TravelMode::Cycling => 4.2,
        }
    }

    fn haversine_meters(from: Coord, to: Coord) -> f64 {
        let lat1 = from.latitude.to_radians();
        let lat2 = to.latitude.to_radians();
        let dlat = (to.latitude - from.latitude).to_radians();
        let dlon = (to.longitude - from.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        Self::EARTH_RADIUS_METERS * c
    }
}

impl RoutingProvider for GreatCircleRouter {
    fn compute_route(&self, from: Coord, to: Coord, mode: TravelMode) -> Result<RouteMetrics> {
        let distance_meters = Self::haversine_meters(from, to);
        let duration_seconds = distance_meters / Self::speed(mode);
        Ok(RouteMetrics {
            distance_meters,
            duration_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_for_identical_coords() {
        let p = Coord {
            latitude: 21.0285,
            longitude: 105.8542,
        };
        let metrics = GreatCircleRouter
            .compute_route(p, p, TravelMode::Driving)
            .expect("route");
        assert_eq!(metrics.distance_meters, 0.0);
        assert_eq!(metrics.duration_seconds, 0.0);
    }

    #[test]
    fn test_known_distance_hanoi_landmarks() {
        // Hoan Kiem Lake to the Temple of Literature is roughly 2.2 km as
        // the crow flies.
        let lake = Coord {
            latitude: 21.0287,
            longitude: 105.8524,
        };
        let temple = Coord {
            latitude: 21.0293,
            longitude: 105.8355,
        };
        let metrics = GreatCircleRouter
            .compute_route(lake, temple, TravelMode::Walking)
            .expect("route");
        assert!(metrics.distance_meters > 1_500.0);
        assert!(metrics.distance_meters < 2_500.0);
    }

    #[test]
    fn test_walking_is_slower_than_driving() {
        let a = Coord {
            latitude: 21.0,
            longitude: 105.8,
        };
        let b = Coord {
            latitude: 21.05,
            longitude: 105.85,
        };
        let walk = GreatCircleRouter
            .compute_route(a, b, TravelMode::Walking)
            .expect("route");
        let drive = GreatCircleRouter
            .compute_route(a, b, TravelMode::Driving)
            .expect("route");
        assert!(walk.duration_seconds > drive.duration_seconds);
        assert_eq!(walk.distance_meters, drive.distance_meters);
    }
}
