use jiff::civil::{date, time};
use tempfile::NamedTempFile;
use wayfarer_core::models::{NewPlan, NewStop};
use wayfarer_core::{
    Database, EngineError, PlanFilter, PlanStatus, RouteLeg, StopStatus, TravelMode,
};

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn draft_plan(traveler: &str, name: &str) -> NewPlan {
    NewPlan {
        traveler: traveler.to_string(),
        name: name.to_string(),
        from_date: date(2027, 5, 1),
        to_date: date(2027, 5, 3),
        lodging_id: None,
        estimated_cost: 0,
        is_public: false,
        status: PlanStatus::Draft,
    }
}

fn planned_stop(destination_id: u64, day: i8, from_hour: i8) -> NewStop {
    NewStop {
        destination_id,
        destination_name: format!("Attraction {destination_id}"),
        date: date(2027, 5, day),
        from_time: time(from_hour, 0, 0, 0),
        to_time: time(from_hour + 1, 0, 0, 0),
        distance_from_prev: 0,
        duration_from_prev: 0,
        travel_mode: TravelMode::Driving,
        is_planned: true,
        status: StopStatus::New,
    }
}

#[test]
fn test_database_initialization() {
    let (_temp_file, _db) = create_test_db();
    assert!(_temp_file.path().exists());
}

#[test]
fn test_create_and_get_plan() {
    let (_temp_file, mut db) = create_test_db();

    let plan = db
        .create_plan(
            &draft_plan("traveler-1", "Hanoi getaway"),
            &[planned_stop(10, 1, 9), planned_stop(11, 1, 11)],
        )
        .expect("Failed to create plan");

    assert_eq!(plan.name, "Hanoi getaway");
    assert_eq!(plan.status, PlanStatus::Draft);
    assert_eq!(plan.stops.len(), 2);
    assert!(plan.id > 0);

    let retrieved = db
        .get_plan(plan.id)
        .expect("Failed to get plan")
        .expect("Plan should exist");
    assert_eq!(retrieved.id, plan.id);
    assert_eq!(retrieved.stops.len(), 2);
    // Stops come back ordered by date and start time.
    assert_eq!(retrieved.stops[0].from_time, time(9, 0, 0, 0));
    assert_eq!(retrieved.stops[1].from_time, time(11, 0, 0, 0));
}

#[test]
fn test_get_missing_plan_returns_none() {
    let (_temp_file, db) = create_test_db();
    let result = db.get_plan(999).expect("Query should not fail");
    assert!(result.is_none());
}

#[test]
fn test_list_plans_filters_by_traveler_and_status() {
    let (_temp_file, mut db) = create_test_db();

    db.create_plan(&draft_plan("traveler-1", "Mine"), &[])
        .expect("Failed to create plan");
    let mut other = draft_plan("traveler-2", "Theirs");
    other.status = PlanStatus::Planned;
    db.create_plan(&other, &[])
        .expect("Failed to create plan");

    let filter = PlanFilter::for_traveler("traveler-1", None);
    let mine = db.list_plans(Some(&filter)).expect("Failed to list");
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].name, "Mine");

    let filter = PlanFilter::for_traveler("traveler-2", Some(PlanStatus::Planned));
    let theirs = db.list_plans(Some(&filter)).expect("Failed to list");
    assert_eq!(theirs.len(), 1);
    assert_eq!(theirs[0].status, PlanStatus::Planned);

    let filter = PlanFilter::for_traveler("traveler-2", Some(PlanStatus::Draft));
    assert!(db
        .list_plans(Some(&filter))
        .expect("Failed to list")
        .is_empty());
}

#[test]
fn test_replace_smart_batch_discards_previous_batch() {
    let (_temp_file, mut db) = create_test_db();

    let mut smart = draft_plan("traveler-1", "Hanoi getaway (1)");
    smart.status = PlanStatus::Smart;
    let old_ids = db
        .replace_smart_batch(
            "traveler-1",
            &[(smart.clone(), vec![planned_stop(10, 1, 9)])],
        )
        .expect("Failed to insert first batch");
    assert_eq!(old_ids.len(), 1);

    let new_ids = db
        .replace_smart_batch(
            "traveler-1",
            &[(smart.clone(), vec![]), (smart, vec![])],
        )
        .expect("Failed to insert second batch");
    assert_eq!(new_ids.len(), 2);

    // The first batch is gone, stops included.
    assert!(db
        .get_plan(old_ids[0])
        .expect("Query should not fail")
        .is_none());
    let filter = PlanFilter::for_traveler("traveler-1", Some(PlanStatus::Smart));
    assert_eq!(db.list_plans(Some(&filter)).expect("list").len(), 2);
}

#[test]
fn test_promote_smart_keeps_only_the_saved_plan() {
    let (_temp_file, mut db) = create_test_db();

    let mut smart = draft_plan("traveler-1", "Hanoi getaway (1)");
    smart.status = PlanStatus::Smart;
    let ids = db
        .replace_smart_batch(
            "traveler-1",
            &[(smart.clone(), vec![]), (smart.clone(), vec![]), (smart, vec![])],
        )
        .expect("Failed to insert batch");

    db.promote_smart(ids[1], "traveler-1", "Hanoi getaway")
        .expect("Failed to promote");

    let saved = db
        .get_plan(ids[1])
        .expect("query")
        .expect("saved plan exists");
    assert_eq!(saved.status, PlanStatus::Draft);
    assert_eq!(saved.name, "Hanoi getaway");

    assert!(db.get_plan(ids[0]).expect("query").is_none());
    assert!(db.get_plan(ids[2]).expect("query").is_none());
}

#[test]
fn test_commit_plan_marks_stops_planned() {
    let (_temp_file, mut db) = create_test_db();

    let plan = db
        .create_plan(
            &draft_plan("traveler-1", "Hanoi getaway"),
            &[planned_stop(10, 1, 9), planned_stop(11, 2, 9)],
        )
        .expect("create");

    db.commit_plan(plan.id, date(2027, 5, 2)).expect("commit");

    let committed = db.get_plan(plan.id).expect("query").expect("exists");
    assert_eq!(committed.status, PlanStatus::Planned);
    assert_eq!(committed.to_date, date(2027, 5, 2));
    assert!(committed
        .stops
        .iter()
        .all(|s| s.status == StopStatus::Planned));
}

#[test]
fn test_replace_actual_stops_is_idempotent_per_day() {
    let (_temp_file, mut db) = create_test_db();

    let plan = db
        .create_plan(&draft_plan("traveler-1", "Hanoi getaway"), &[])
        .expect("create");

    let mut visit = planned_stop(20, 1, 10);
    visit.is_planned = false;
    visit.status = StopStatus::CheckedIn;

    db.replace_actual_stops(plan.id, date(2027, 5, 1), &[visit.clone()])
        .expect("first checkin");
    let mut second = visit.clone();
    second.destination_id = 21;
    db.replace_actual_stops(plan.id, date(2027, 5, 1), &[second])
        .expect("replayed checkin");

    let stops = db.get_stops(plan.id).expect("stops");
    assert_eq!(stops.len(), 1);
    assert_eq!(stops[0].destination_id, 21);

    // A different day is untouched by the replay.
    db.replace_actual_stops(plan.id, date(2027, 5, 2), &[visit])
        .expect("other day");
    assert_eq!(db.get_stops(plan.id).expect("stops").len(), 2);
}

#[test]
fn test_delete_plan_cascades_stops() {
    let (_temp_file, mut db) = create_test_db();

    let plan = db
        .create_plan(
            &draft_plan("traveler-1", "To delete"),
            &[planned_stop(10, 1, 9)],
        )
        .expect("create");

    db.delete_plan(plan.id).expect("delete");

    assert!(db.get_plan(plan.id).expect("query").is_none());
    assert!(db.get_stops(plan.id).expect("stops").is_empty());
}

#[test]
fn test_delete_missing_plan_fails() {
    let (_temp_file, mut db) = create_test_db();
    let err = db.delete_plan(999).unwrap_err();
    assert!(matches!(err, EngineError::PlanNotFound { id: 999 }));
}

#[test]
fn test_route_leg_upsert_first_writer_wins() {
    let (_temp_file, mut db) = create_test_db();

    let leg = RouteLeg {
        from_id: 10,
        to_id: 11,
        mode: TravelMode::Driving,
        distance_meters: 1_200,
        duration_seconds: 300,
        distance_text: "1.2km".to_string(),
        duration_text: "5p".to_string(),
    };

    assert!(db.insert_route_leg(&leg).expect("first insert"));

    let mut racer = leg.clone();
    racer.distance_meters = 9_999;
    assert!(!db.insert_route_leg(&racer).expect("second insert"));

    let stored = db
        .get_route_leg(10, 11, TravelMode::Driving)
        .expect("query")
        .expect("row exists");
    assert_eq!(stored, leg);

    // The key is directed: the reverse leg is a separate entry.
    assert!(db
        .get_route_leg(11, 10, TravelMode::Driving)
        .expect("query")
        .is_none());
}
