mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::attraction;
use jiff::civil::time;
use tempfile::TempDir;
use wayfarer_core::{
    Coord, Database, GreatCircleRouter, RouteCache, RouteMetrics, RoutingProvider, TravelMode,
};

/// Routing provider that counts how often the external call happens.
struct CountingRouter {
    calls: AtomicUsize,
    inner: GreatCircleRouter,
}

impl CountingRouter {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            inner: GreatCircleRouter,
        }
    }
}

impl RoutingProvider for CountingRouter {
    fn compute_route(
        &self,
        from: Coord,
        to: Coord,
        mode: TravelMode,
    ) -> wayfarer_core::Result<RouteMetrics> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.compute_route(from, to, mode)
    }
}

#[test]
fn test_get_leg_is_idempotent() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("legs.db");
    let mut db = Database::new(&db_path).expect("database");

    let cache = RouteCache::new();
    let provider = CountingRouter::new();
    let from = attraction(10, time(8, 0, 0, 0), time(20, 0, 0, 0), 60, 10);
    let to = attraction(11, time(8, 0, 0, 0), time(20, 0, 0, 0), 60, 10);

    let first = cache
        .leg(&mut db, &provider, &from, &to, TravelMode::Driving)
        .expect("first lookup");
    let second = cache
        .leg(&mut db, &provider, &from, &to, TravelMode::Driving)
        .expect("second lookup");

    assert_eq!(first, second);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_concurrent_cold_lookups_make_one_external_call() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("legs.db");
    // Initialize the schema before the racers start.
    drop(Database::new(&db_path).expect("database"));

    let cache = Arc::new(RouteCache::new());
    let provider = Arc::new(CountingRouter::new());
    let from = attraction(10, time(8, 0, 0, 0), time(20, 0, 0, 0), 60, 10);
    let to = attraction(11, time(8, 0, 0, 0), time(20, 0, 0, 0), 60, 10);

    let mut handles = Vec::new();
    for _ in 0..2 {
        let cache = Arc::clone(&cache);
        let provider = Arc::clone(&provider);
        let db_path = db_path.clone();
        let from = from.clone();
        let to = to.clone();
        handles.push(std::thread::spawn(move || {
            let mut db = Database::new(&db_path).expect("database");
            cache
                .leg(&mut db, provider.as_ref(), &from, &to, TravelMode::Driving)
                .expect("lookup")
        }));
    }

    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("thread"))
        .collect();

    // Both lookups succeed with identical results, the provider was called
    // exactly once, and exactly one row exists for the key.
    assert_eq!(results[0], results[1]);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);

    let db = Database::new(&db_path).expect("database");
    let stored = db
        .get_route_leg(10, 11, TravelMode::Driving)
        .expect("query")
        .expect("row exists");
    assert_eq!(stored, results[0]);
}

#[test]
fn test_directed_keys_are_separate_fetches() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("legs.db");
    let mut db = Database::new(&db_path).expect("database");

    let cache = RouteCache::new();
    let provider = CountingRouter::new();
    let from = attraction(10, time(8, 0, 0, 0), time(20, 0, 0, 0), 60, 10);
    let to = attraction(11, time(8, 0, 0, 0), time(20, 0, 0, 0), 60, 10);

    cache
        .leg(&mut db, &provider, &from, &to, TravelMode::Driving)
        .expect("forward");
    cache
        .leg(&mut db, &provider, &to, &from, TravelMode::Driving)
        .expect("reverse");

    // A reverse leg is a distinct directed key and triggers its own fetch.
    assert_eq!(provider.calls.load(Ordering::SeqCst), 2);

    // A different mode over the same pair is also a distinct key.
    cache
        .leg(&mut db, &provider, &from, &to, TravelMode::Walking)
        .expect("walking");
    assert_eq!(provider.calls.load(Ordering::SeqCst), 3);
}
