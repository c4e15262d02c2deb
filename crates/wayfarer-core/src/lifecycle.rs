//! Plan lifecycle state machine.
//!
//! Governs the Draft/Smart/Planned/Activated/Completed transitions and the
//! check-in/completion reconciliation of planned vs. actual visits. Every
//! multi-step write goes through a single database transaction; validation
//! happens up front against the catalog so a failure leaves no partial
//! state behind.

use std::collections::{BTreeMap, BTreeSet};

use jiff::civil::Date;
use jiff::{ToSpan, Zoned};
use log::warn;

use crate::catalog::Catalog;
use crate::db::Database;
use crate::error::{EngineError, Result};
use crate::models::{
    Destination, DestinationState, NewPlan, NewStop, Plan, PlanStatus, StopStatus, TravelMode,
};
use crate::packer::strip_variant_suffix;
use crate::params::{
    parse_date, parse_time, AddStop, Checkin, CompleteTrip, CreateDraft, VisitDetail,
};
use crate::route_cache::RouteCache;
use crate::routing::RoutingProvider;

/// Fetches a plan and enforces ownership; a foreign or missing plan is
/// indistinguishable to the caller.
fn owned_plan(db: &Database, traveler: &str, id: u64) -> Result<Plan> {
    match db.get_plan(id)? {
        Some(plan) if plan.traveler == traveler => Ok(plan),
        _ => Err(EngineError::PlanNotFound { id }),
    }
}

/// Creates an empty manual draft.
pub(crate) fn create_draft(db: &mut Database, params: &CreateDraft) -> Result<Plan> {
    let from_date = parse_date("from_date", &params.from_date)?;
    let to_date = parse_date("to_date", &params.to_date)?;
    if to_date < from_date {
        return Err(EngineError::invalid_input(
            "to_date",
            format!("end date {to_date} is before start date {from_date}"),
        ));
    }
    if params.name.trim().is_empty() {
        return Err(EngineError::invalid_input("name", "name must not be empty"));
    }

    db.create_plan(
        &NewPlan {
            traveler: params.traveler.clone(),
            name: params.name.clone(),
            from_date,
            to_date,
            lodging_id: None,
            estimated_cost: 0,
            is_public: false,
            status: PlanStatus::Draft,
        },
        &[],
    )
}

/// Adds a planned stop to a draft, computing the leg from the previous stop
/// of the same day.
pub(crate) fn add_stop(
    db: &mut Database,
    catalog: &dyn Catalog,
    provider: &dyn RoutingProvider,
    cache: &RouteCache,
    params: &AddStop,
) -> Result<Plan> {
    let plan = owned_plan(db, &params.traveler, params.plan_id)?;
    if plan.status != PlanStatus::Draft {
        return Err(EngineError::state_conflict("add a stop to", plan.status));
    }

    let destination = catalog
        .destination(params.destination_id)?
        .ok_or(EngineError::DestinationNotFound {
            id: params.destination_id,
        })?;
    if destination.state != DestinationState::Open {
        return Err(EngineError::DestinationUnavailable {
            name: destination.name,
            reason: destination.state.as_str().into(),
        });
    }

    let date = parse_date("date", &params.date)?;
    if date < plan.from_date || date > plan.to_date {
        return Err(EngineError::invalid_input(
            "date",
            format!(
                "date {date} is outside the trip {} to {}",
                plan.from_date, plan.to_date
            ),
        ));
    }
    let from_time = parse_time("from_time", &params.from_time)?;
    let to_time = parse_time("to_time", &params.to_time)?;
    if to_time <= from_time {
        return Err(EngineError::invalid_input(
            "to_time",
            format!("visit ends at {to_time} before it starts at {from_time}"),
        ));
    }

    // Planned stops of one day never overlap.
    for stop in plan.planned_stops().filter(|s| s.date == date) {
        if from_time < stop.to_time && stop.from_time < to_time {
            return Err(EngineError::invalid_input(
                "from_time",
                format!(
                    "visit overlaps the existing stop at '{}' ({} to {})",
                    stop.destination_name, stop.from_time, stop.to_time
                ),
            ));
        }
    }

    let previous = plan
        .planned_stops()
        .filter(|s| s.date == date && s.to_time <= from_time)
        .last()
        .cloned();
    let (distance, duration) = match previous {
        None => (0, 0),
        Some(prev) => {
            let prev_dest =
                catalog
                    .destination(prev.destination_id)?
                    .ok_or(EngineError::DestinationNotFound {
                        id: prev.destination_id,
                    })?;
            let leg = cache.leg(db, provider, &prev_dest, &destination, params.travel_mode)?;
            (leg.distance_meters, leg.duration_seconds)
        }
    };

    db.add_stop(
        plan.id,
        &NewStop {
            destination_id: destination.id,
            destination_name: destination.name.clone(),
            date,
            from_time,
            to_time,
            distance_from_prev: distance,
            duration_from_prev: duration,
            travel_mode: params.travel_mode,
            is_planned: true,
            status: StopStatus::New,
        },
    )?;

    owned_plan(db, &params.traveler, params.plan_id)
}

/// Saves a smart plan as the traveler's draft, discarding its sibling smart
/// plans. The "(n)" disambiguation suffix is stripped from the name.
pub(crate) fn promote_smart_to_draft(db: &mut Database, traveler: &str, id: u64) -> Result<Plan> {
    let plan = owned_plan(db, traveler, id)?;
    if plan.status != PlanStatus::Smart {
        // Treated as absent: a non-smart plan cannot be saved again.
        return Err(EngineError::PlanNotFound { id });
    }

    let name = strip_variant_suffix(&plan.name);
    db.promote_smart(id, traveler, &name)?;

    owned_plan(db, traveler, id)
}

/// Commits a draft into an immutable planned itinerary.
pub(crate) fn commit_draft(
    db: &mut Database,
    catalog: &dyn Catalog,
    traveler: &str,
    id: u64,
) -> Result<Plan> {
    let plan = owned_plan(db, traveler, id)?;
    if plan.status != PlanStatus::Draft {
        return Err(EngineError::state_conflict("commit", plan.status));
    }

    let today = Zoned::now().date();
    if plan.from_date <= today {
        return Err(EngineError::invalid_input(
            "from_date",
            format!(
                "trip starting {} must begin no earlier than tomorrow",
                plan.from_date
            ),
        ));
    }

    // Every referenced destination must still be open at commit time.
    for stop in plan.planned_stops() {
        let destination =
            catalog
                .destination(stop.destination_id)?
                .ok_or(EngineError::DestinationNotFound {
                    id: stop.destination_id,
                })?;
        if destination.state != DestinationState::Open {
            return Err(EngineError::DestinationUnavailable {
                name: destination.name,
                reason: destination.state.as_str().into(),
            });
        }
    }

    // The trip ends on the latest day that actually has a stop.
    let to_date = plan
        .planned_stops()
        .map(|s| s.date)
        .max()
        .unwrap_or(plan.to_date);

    db.commit_plan(id, to_date)?;

    owned_plan(db, traveler, id)
}

/// Marks a committed plan as traveling. Check-ins are only accepted against
/// activated plans.
pub(crate) fn activate_plan(db: &mut Database, traveler: &str, id: u64) -> Result<Plan> {
    let plan = owned_plan(db, traveler, id)?;
    if plan.status != PlanStatus::Planned {
        return Err(EngineError::state_conflict("activate", plan.status));
    }

    db.update_plan_status(id, PlanStatus::Activated)?;

    owned_plan(db, traveler, id)
}

/// Records the actual visits of one trip day. Re-running a check-in for
/// the same day replaces the previously recorded visits.
pub(crate) fn checkin(
    db: &mut Database,
    catalog: &dyn Catalog,
    provider: &dyn RoutingProvider,
    cache: &RouteCache,
    params: &Checkin,
) -> Result<Plan> {
    let plan = owned_plan(db, &params.traveler, params.plan_id)?;
    if plan.status != PlanStatus::Activated {
        return Err(EngineError::state_conflict("check in", plan.status));
    }

    let date = parse_date("date", &params.date)?;
    let today = Zoned::now().date();
    let day_index = i64::from((today - plan.from_date).get_days());
    if date != today {
        return Err(EngineError::invalid_input(
            "date",
            format!("submitted date {date} does not line up with trip day {day_index} ({today})"),
        ));
    }
    if day_index < 0 || day_index >= plan.trip_days() {
        return Err(EngineError::invalid_input(
            "date",
            format!(
                "day index {day_index} is outside the trip {} to {}",
                plan.from_date, plan.to_date
            ),
        ));
    }

    let stops = build_day_visits(
        db,
        catalog,
        provider,
        cache,
        date,
        &params.visits,
        params.travel_mode,
    )?;

    db.replace_actual_stops(plan.id, date, &stops)?;

    owned_plan(db, &params.traveler, params.plan_id)
}

/// Completes a trip: fills in the actual visits for every day not already
/// checked in, reconciles planned stops against actual ones, and records
/// the reconciled cost and lodging.
pub(crate) fn complete_trip(
    db: &mut Database,
    catalog: &dyn Catalog,
    provider: &dyn RoutingProvider,
    cache: &RouteCache,
    params: &CompleteTrip,
) -> Result<Plan> {
    let plan = owned_plan(db, &params.traveler, params.plan_id)?;
    if plan.status != PlanStatus::Activated {
        return Err(EngineError::state_conflict("complete", plan.status));
    }

    let mut submitted: BTreeMap<Date, &[VisitDetail]> = BTreeMap::new();
    for day in &params.days {
        let date = parse_date("date", &day.date)?;
        if date < plan.from_date || date > plan.to_date {
            return Err(EngineError::invalid_input(
                "days",
                format!(
                    "date {date} is outside the trip {} to {}",
                    plan.from_date, plan.to_date
                ),
            ));
        }
        submitted.insert(date, day.visits.as_slice());
    }

    let mut covered: BTreeSet<Date> = plan.actual_stops().map(|s| s.date).collect();
    let mut actual_pairs: BTreeSet<(Date, u64)> = plan
        .actual_stops()
        .map(|s| (s.date, s.destination_id))
        .collect();

    // Build the actual-visit records for every day a check-in did not
    // already cover.
    let mut new_stops: Vec<NewStop> = Vec::new();
    let mut date = plan.from_date;
    let mut day_index = 0_i64;
    while date <= plan.to_date {
        if !covered.contains(&date) {
            let visits = submitted.get(&date).copied().ok_or_else(|| {
                EngineError::invalid_input(
                    "days",
                    format!("missing visit details for trip day {day_index} ({date})"),
                )
            })?;
            let built =
                build_day_visits(db, catalog, provider, cache, date, visits, params.travel_mode)?;
            for stop in &built {
                actual_pairs.insert((date, stop.destination_id));
            }
            covered.insert(date);
            new_stops.extend(built);
        }
        date = date.checked_add(1.day()).map_err(|e| {
            EngineError::invalid_input("to_date", format!("trip end overflows the calendar: {e}"))
        })?;
        day_index += 1;
    }

    // Reconcile: a planned stop is skipped unless an actual visit shares
    // its calendar day and destination.
    let stop_updates: Vec<(u64, StopStatus)> = plan
        .planned_stops()
        .map(|stop| {
            let status = if actual_pairs.contains(&(stop.date, stop.destination_id)) {
                StopStatus::CheckedIn
            } else {
                StopStatus::Skipped
            };
            (stop.id, status)
        })
        .collect();

    let actual_lodging_id = params.actual_lodging_id.or(plan.lodging_id);
    let lodging_cost = match actual_lodging_id {
        Some(lodging_id) => {
            let lodging =
                catalog
                    .destination(lodging_id)?
                    .ok_or(EngineError::DestinationNotFound { id: lodging_id })?;
            lodging.midpoint_cost() * plan.trip_days()
        }
        None => 0,
    };
    let mut visit_cost = 0_i64;
    for stop in plan.actual_stops() {
        visit_cost += destination_midpoint(catalog, stop.destination_id)?;
    }
    for stop in &new_stops {
        visit_cost += destination_midpoint(catalog, stop.destination_id)?;
    }

    db.finalize_trip(
        plan.id,
        &new_stops,
        &stop_updates,
        lodging_cost + visit_cost,
        actual_lodging_id,
    )?;

    owned_plan(db, &params.traveler, params.plan_id)
}

/// Deletes a plan; only drafts may be deleted. Returns the deleted plan for
/// confirmation.
pub(crate) fn delete_plan(db: &mut Database, traveler: &str, id: u64) -> Result<Plan> {
    let plan = owned_plan(db, traveler, id)?;
    if plan.status != PlanStatus::Draft {
        return Err(EngineError::state_conflict("delete", plan.status));
    }

    db.delete_plan(id)?;

    Ok(plan)
}

fn destination_midpoint(catalog: &dyn Catalog, id: u64) -> Result<i64> {
    let destination = catalog
        .destination(id)?
        .ok_or(EngineError::DestinationNotFound { id })?;
    Ok(destination.midpoint_cost())
}

/// Validates one day's submitted visits and turns them into actual-visit
/// stop records with inter-stop legs. A closed destination aborts the whole
/// operation; a deactivated one is skipped so the rest of the day still
/// lands.
fn build_day_visits(
    db: &mut Database,
    catalog: &dyn Catalog,
    provider: &dyn RoutingProvider,
    cache: &RouteCache,
    date: Date,
    visits: &[VisitDetail],
    travel_mode: TravelMode,
) -> Result<Vec<NewStop>> {
    let mut built = Vec::new();
    let mut prev: Option<Destination> = None;

    for visit in visits {
        let destination =
            catalog
                .destination(visit.destination_id)?
                .ok_or(EngineError::DestinationNotFound {
                    id: visit.destination_id,
                })?;
        match destination.state {
            DestinationState::Open => {}
            DestinationState::Closed => {
                return Err(EngineError::DestinationUnavailable {
                    name: destination.name,
                    reason: "closed".into(),
                });
            }
            DestinationState::Deactivated => {
                warn!(
                    "skipping deactivated destination '{}' in check-in for {date}",
                    destination.name
                );
                continue;
            }
        }

        let from_time = parse_time("from_time", &visit.from_time)?;
        let to_time = parse_time("to_time", &visit.to_time)?;
        if to_time <= from_time {
            return Err(EngineError::invalid_input(
                "to_time",
                format!(
                    "visit to '{}' ends at {to_time} before it starts at {from_time}",
                    destination.name
                ),
            ));
        }

        let leg = match &prev {
            None => None,
            Some(p) => Some(cache.leg(db, provider, p, &destination, travel_mode)?),
        };

        built.push(NewStop::actual_visit(
            &destination,
            date,
            from_time,
            to_time,
            leg.as_ref(),
            travel_mode,
        ));
        prev = Some(destination);
    }

    Ok(built)
}
