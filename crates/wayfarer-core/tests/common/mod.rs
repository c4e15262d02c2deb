// Shared fixtures; each test binary uses a different subset.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use jiff::civil::{time, Date, Time};
use jiff::Timestamp;
use tempfile::TempDir;
use wayfarer_core::models::{AffinityStat, NewPlan, NewStop, TimeWindow};
use wayfarer_core::{
    Database, Destination, DestinationState, JsonCatalog, Plan, PlanStatus, Planner,
    PlannerBuilder, StopStatus, TravelMode,
};

/// Builds a lodging destination in Hanoi.
pub fn lodging(id: u64, lowest: i64, highest: i64) -> Destination {
    Destination {
        id,
        name: format!("Hotel {id}"),
        city: "Hanoi".to_string(),
        lowest_price: lowest,
        highest_price: highest,
        opens_at: time(0, 0, 0, 0),
        closes_at: time(23, 59, 0, 0),
        visit_minutes: 0,
        rating: 4.0,
        view_count: 50,
        created_at: Timestamp::UNIX_EPOCH,
        categories: vec!["lodging".to_string()],
        state: DestinationState::Open,
        latitude: 21.0285,
        longitude: 105.8542,
        affinities: BTreeMap::new(),
        recommended_windows: Vec::new(),
    }
}

/// Builds an open attraction in Hanoi with a culture affinity.
pub fn attraction(id: u64, opens: Time, closes: Time, visit_minutes: i64, price: i64) -> Destination {
    let mut affinities = BTreeMap::new();
    affinities.insert(
        "culture".to_string(),
        AffinityStat {
            plan_count: 2,
            visit_count: 1,
        },
    );
    Destination {
        id,
        name: format!("Attraction {id}"),
        city: "Hanoi".to_string(),
        lowest_price: price,
        highest_price: price,
        opens_at: opens,
        closes_at: closes,
        visit_minutes,
        rating: 4.0,
        view_count: 100 + id,
        created_at: Timestamp::UNIX_EPOCH,
        categories: vec!["museum".to_string()],
        state: DestinationState::Open,
        // Spread the attractions a few hundred meters apart so legs are
        // short but non-zero.
        latitude: 21.02 + id as f64 * 0.002,
        longitude: 105.85 + id as f64 * 0.002,
        affinities,
        recommended_windows: vec![TimeWindow {
            starts_at: time(9, 0, 0, 0),
            ends_at: time(11, 0, 0, 0),
            plan_count: 1,
            visit_count: 1,
        }],
    }
}

/// A catalog with three lodgings and twenty attractions in Hanoi.
pub fn hanoi_catalog() -> JsonCatalog {
    let mut destinations = vec![lodging(1, 60, 100), lodging(2, 90, 110), lodging(3, 140, 180)];
    for id in 10..30 {
        destinations.push(attraction(
            id,
            time(8, 0, 0, 0),
            time(20, 0, 0, 0),
            60,
            10 + (id as i64 % 3) * 5,
        ));
    }
    JsonCatalog::new(destinations)
}

/// Helper function to create a test planner over a scratch database.
pub async fn create_test_planner(catalog: JsonCatalog) -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = test_db_path(&temp_dir);
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_catalog(Arc::new(catalog))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// The database path `create_test_planner` uses inside a temp dir.
pub fn test_db_path(temp_dir: &TempDir) -> std::path::PathBuf {
    temp_dir.path().join("test.db")
}

/// A planned stop row for seeding plans directly through the database.
pub fn seeded_stop(destination_id: u64, date: Date, from_hour: i8) -> NewStop {
    NewStop {
        destination_id,
        destination_name: format!("Attraction {destination_id}"),
        date,
        from_time: time(from_hour, 0, 0, 0),
        to_time: time(from_hour + 1, 0, 0, 0),
        distance_from_prev: 0,
        duration_from_prev: 0,
        travel_mode: TravelMode::Driving,
        is_planned: true,
        status: StopStatus::Planned,
    }
}

/// Seeds a plan in an arbitrary lifecycle status directly through the
/// database layer, bypassing the commit-date validation so tests can build
/// trips that are underway today.
pub fn seed_plan(
    db_path: &Path,
    traveler: &str,
    status: PlanStatus,
    from_date: Date,
    to_date: Date,
    stops: Vec<NewStop>,
) -> Plan {
    let mut db = Database::new(db_path).expect("Failed to open database");
    db.create_plan(
        &NewPlan {
            traveler: traveler.to_string(),
            name: "Hanoi getaway".to_string(),
            from_date,
            to_date,
            lodging_id: None,
            estimated_cost: 0,
            is_public: false,
            status,
        },
        &stops,
    )
    .expect("Failed to seed plan")
}
