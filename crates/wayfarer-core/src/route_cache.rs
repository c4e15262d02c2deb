//! Route distance cache.
//!
//! Memoizes travel distance/duration between an ordered pair of
//! destinations for a travel mode. Lookups hit storage first; a miss calls
//! the external routing provider, rounds the metrics up to whole units,
//! derives the human-readable strings, and persists the result for every
//! future lookup.
//!
//! Two guards keep concurrent cold-cache lookups sound:
//! - a process-local single-flight lock per (from, to, mode) key, so only
//!   one task calls the provider for a given key;
//! - an insert-or-ignore upsert, so a racing writer from another process is
//!   harmless and the first stored row stays canonical.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use log::{debug, warn};

use crate::db::Database;
use crate::error::{EngineError, Result};
use crate::models::{Destination, RouteLeg, TravelMode};
use crate::routing::{Coord, RoutingProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct LegKey {
    from_id: u64,
    to_id: u64,
    mode: TravelMode,
}

/// Single-flight guard over the persistent route-leg cache.
#[derive(Default)]
pub struct RouteCache {
    locks: Mutex<HashMap<LegKey, Arc<Mutex<()>>>>,
}

impl RouteCache {
    /// Creates an empty cache front.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the route leg between two destinations, fetching from the
    /// provider and persisting on a cache miss.
    ///
    /// A provider failure is retried once; a second failure surfaces as the
    /// retryable `RouteUnavailable`, which the caller must treat as fatal to
    /// the itinerary-building attempt in progress.
    pub fn leg(
        &self,
        db: &mut Database,
        provider: &dyn RoutingProvider,
        from: &Destination,
        to: &Destination,
        mode: TravelMode,
    ) -> Result<RouteLeg> {
        if let Some(leg) = db.get_route_leg(from.id, to.id, mode)? {
            return Ok(leg);
        }

        let key = LegKey {
            from_id: from.id,
            to_id: to.id,
            mode,
        };
        let slot = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            Arc::clone(locks.entry(key).or_default())
        };
        let _guard = slot.lock().unwrap_or_else(|e| e.into_inner());

        // Another task may have filled the cache while we waited.
        if let Some(leg) = db.get_route_leg(from.id, to.id, mode)? {
            return Ok(leg);
        }

        debug!(
            "route cache miss: {} -> {} ({})",
            from.id,
            to.id,
            mode.as_str()
        );
        let metrics = self.fetch_with_retry(provider, from, to, mode)?;

        let distance_meters = metrics.distance_meters.ceil() as i64;
        let duration_seconds = metrics.duration_seconds.ceil() as i64;
        let leg = RouteLeg {
            from_id: from.id,
            to_id: to.id,
            mode,
            distance_meters,
            duration_seconds,
            distance_text: human_distance(distance_meters),
            duration_text: human_duration(duration_seconds),
        };

        if !db.insert_route_leg(&leg)? {
            debug!(
                "route leg {} -> {} already stored by a concurrent writer",
                from.id, to.id
            );
        }

        // Serve the canonical stored row regardless of who inserted it.
        db.get_route_leg(from.id, to.id, mode)?
            .ok_or_else(|| EngineError::RouteUnavailable {
                message: format!("route leg {} -> {} vanished after upsert", from.id, to.id),
            })
    }

    fn fetch_with_retry(
        &self,
        provider: &dyn RoutingProvider,
        from: &Destination,
        to: &Destination,
        mode: TravelMode,
    ) -> Result<crate::routing::RouteMetrics> {
        let from_coord = Coord {
            latitude: from.latitude,
            longitude: from.longitude,
        };
        let to_coord = Coord {
            latitude: to.latitude,
            longitude: to.longitude,
        };

        match provider.compute_route(from_coord, to_coord, mode) {
            Ok(metrics) => Ok(metrics),
            Err(first) => {
                warn!(
                    "route provider failed for {} -> {}, retrying once: {first}",
                    from.name, to.name
                );
                provider.compute_route(from_coord, to_coord, mode)
            }
        }
    }
}

/// Formats whole meters: under 1 km as meters, otherwise one decimal in km.
fn human_distance(meters: i64) -> String {
    if meters < 1_000 {
        format!("{meters}m")
    } else {
        format!("{:.1}km", meters as f64 / 1_000.0)
    }
}

/// Formats whole seconds: under an hour as minutes, otherwise hours and
/// minutes.
fn human_duration(seconds: i64) -> String {
    let minutes = (seconds + 59).div_euclid(60);
    if minutes < 60 {
        format!("{minutes}p")
    } else {
        format!("{}h {}p", minutes / 60, minutes % 60)
    }
}
