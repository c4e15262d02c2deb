//! Itinerary packing.
//!
//! Turns a scored candidate pool into an ordered multi-day route under two
//! simultaneous resource constraints: the remaining money budget and the
//! per-day time budget. Packing itself is a pure fold over the pool — it
//! produces stop records and running totals without mutating shared
//! destination data or touching storage; persistence happens once per
//! generation batch.

use jiff::civil::{time, Date, Time};
use jiff::{Timestamp, ToSpan, Zoned};
use log::{debug, warn};
use rand::Rng;

use crate::catalog::{Catalog, CategoryFilter};
use crate::db::Database;
use crate::error::{EngineError, Result};
use crate::models::{Destination, NewPlan, NewStop, PlanStatus, RouteLeg, StopStatus, TravelMode};
use crate::params::{parse_date, parse_time, GeneratePlans};
use crate::route_cache::RouteCache;
use crate::routing::RoutingProvider;
use crate::scoring::{score_destinations, sort_by_score, ScoredDestination};

/// Longest supported trip, in calendar days.
pub const MAX_TRIP_DAYS: i64 = 4;

/// Nominal per-day time budget: travel plus visits.
const DAY_TIME_BUDGET_SECONDS: i64 = 10 * 3_600;

/// Candidates kept in the working pool per trip day.
const POOL_PER_DAY: usize = 15;

/// Smart variants produced per generation request.
const SMART_VARIANTS: u32 = 3;

/// Top-ranked lodging options the random pick chooses among.
const LODGING_SHORTLIST: usize = 5;

/// Times the lodging budget cap is widened (by 25% of the cap each) before
/// giving up.
const LODGING_WIDEN_STEPS: i64 = 4;

/// A validated generation request with parsed dates and times.
#[derive(Debug, Clone)]
pub(crate) struct TripFrame {
    pub traveler: String,
    pub city: String,
    pub from_date: Date,
    pub to_date: Date,
    pub days: i64,
    pub day_start: Time,
    pub day_end: Time,
    pub total_budget: i64,
    pub lodging_budget: i64,
    pub personalities: Vec<String>,
    pub travel_mode: TravelMode,
}

impl TripFrame {
    /// Validates raw generation parameters into a trip frame.
    pub fn validate(params: &GeneratePlans) -> Result<Self> {
        let from_date = parse_date("from_date", &params.from_date)?;
        let to_date = parse_date("to_date", &params.to_date)?;
        let day_start = parse_time("day_start", &params.day_start)?;
        let day_end = parse_time("day_end", &params.day_end)?;

        if to_date < from_date {
            return Err(EngineError::invalid_input(
                "to_date",
                format!("end date {to_date} is before start date {from_date}"),
            ));
        }

        let days = i64::from((to_date - from_date).get_days()) + 1;
        if days > MAX_TRIP_DAYS {
            return Err(EngineError::invalid_input(
                "to_date",
                format!("trip spans {days} days; at most {MAX_TRIP_DAYS} are supported"),
            ));
        }

        let today = Zoned::now().date();
        if from_date < today {
            return Err(EngineError::invalid_input(
                "from_date",
                format!("trip start {from_date} is in the past"),
            ));
        }

        if params.total_budget <= 0 || params.lodging_budget <= 0 {
            return Err(EngineError::invalid_input(
                "total_budget",
                "budgets must be positive",
            ));
        }

        // Lodging may not dominate the budget: cap at half the total.
        if params.lodging_budget * days * 2 > params.total_budget {
            return Err(EngineError::invalid_input(
                "lodging_budget",
                format!(
                    "lodging at {} per day over {days} days exceeds half the total budget {}",
                    params.lodging_budget, params.total_budget
                ),
            ));
        }

        if day_end <= day_start {
            return Err(EngineError::invalid_input(
                "day_end",
                format!("day end {day_end} is not after day start {day_start}"),
            ));
        }

        Ok(Self {
            traveler: params.traveler.clone(),
            city: params.city.clone(),
            from_date,
            to_date,
            days,
            day_start,
            day_end,
            total_budget: params.total_budget,
            lodging_budget: params.lodging_budget,
            personalities: params.personalities.clone(),
            travel_mode: params.travel_mode,
        })
    }

    /// The trip's calendar days in order.
    fn dates(&self) -> Vec<Date> {
        let mut dates = Vec::with_capacity(self.days as usize);
        let mut date = self.from_date;
        while date <= self.to_date {
            dates.push(date);
            if let Ok(next) = date.checked_add(1.day()) {
                date = next;
            } else {
                break;
            }
        }
        dates
    }
}

/// Result of packing one variant: stop records plus running totals.
#[derive(Debug)]
pub(crate) struct PackedItinerary {
    pub stops: Vec<NewStop>,
    pub attraction_cost: i64,
    pub last_date: Option<Date>,
}

/// Generates a traveler's smart batch: up to [`SMART_VARIANTS`] alternative
/// plans, replacing any prior batch in one transaction. Returns the IDs of
/// the persisted plans.
pub(crate) fn generate_batch(
    db: &mut Database,
    catalog: &dyn Catalog,
    provider: &dyn RoutingProvider,
    cache: &RouteCache,
    params: &GeneratePlans,
    rng: &mut impl Rng,
) -> Result<Vec<u64>> {
    let frame = TripFrame::validate(params)?;
    let now = Timestamp::now();

    let mut batch = Vec::new();
    let mut last_route_error = None;
    for variant in 1..=SMART_VARIANTS {
        match build_variant(db, catalog, provider, cache, &frame, now, rng, variant) {
            Ok(Some(entry)) => batch.push(entry),
            Ok(None) => debug!("variant {variant} produced no stops, dropping it"),
            Err(e @ EngineError::RouteUnavailable { .. }) => {
                warn!("variant {variant} aborted by route lookup failure: {e}");
                last_route_error = Some(e);
            }
            Err(e) => return Err(e),
        }
    }

    if batch.is_empty() {
        return Err(last_route_error.unwrap_or_else(|| {
            EngineError::invalid_input(
                "city",
                format!("no itinerary could be packed for {}", frame.city),
            )
        }));
    }

    db.replace_smart_batch(&frame.traveler, &batch)
}

/// Builds one smart variant in memory. Returns None when the candidate pool
/// yields no placeable stop.
#[allow(clippy::too_many_arguments)]
fn build_variant(
    db: &mut Database,
    catalog: &dyn Catalog,
    provider: &dyn RoutingProvider,
    cache: &RouteCache,
    frame: &TripFrame,
    now: Timestamp,
    rng: &mut impl Rng,
    variant: u32,
) -> Result<Option<(NewPlan, Vec<NewStop>)>> {
    let lodging = select_lodging(catalog, frame, now, rng)?;
    let attraction_budget = frame.total_budget - lodging.midpoint_cost * frame.days;

    let pool = build_pool(catalog, frame, now, rng)?;
    if pool.is_empty() {
        debug!("no open attractions in {} match the request", frame.city);
        return Ok(None);
    }

    let mode = frame.travel_mode;
    let packed = pack_days(pool, frame, attraction_budget, |from, to| {
        cache.leg(db, provider, from, to, mode)
    })?;
    if packed.stops.is_empty() {
        return Ok(None);
    }

    // A short itinerary beats a sparse one: shrink the trip to the last
    // day that actually received stops.
    let to_date = packed.last_date.unwrap_or(frame.from_date);
    let final_days = i64::from((to_date - frame.from_date).get_days()) + 1;
    let estimated_cost = lodging.midpoint_cost * final_days + packed.attraction_cost;

    let plan = NewPlan {
        traveler: frame.traveler.clone(),
        name: format!("{} getaway ({variant})", frame.city),
        from_date: frame.from_date,
        to_date,
        lodging_id: Some(lodging.destination.id),
        estimated_cost,
        is_public: false,
        status: PlanStatus::Smart,
    };

    Ok(Some((plan, packed.stops)))
}

/// Selects the variant's lodging: affordable open lodging destinations are
/// scored and one of the top-ranked is picked uniformly at random, so the
/// three variants do not all propose the identical lodging.
fn select_lodging(
    catalog: &dyn Catalog,
    frame: &TripFrame,
    now: Timestamp,
    rng: &mut impl Rng,
) -> Result<ScoredDestination> {
    let lodgings = catalog.open_destinations(&frame.city, CategoryFilter::Lodging, &[])?;
    if lodgings.is_empty() {
        return Err(EngineError::invalid_input(
            "city",
            format!("no open lodging found in {}", frame.city),
        ));
    }

    // Widen the cap in fixed increments when nothing fits the daily budget.
    let mut affordable = Vec::new();
    for step in 0..=LODGING_WIDEN_STEPS {
        let cap = frame.lodging_budget + frame.lodging_budget * step / LODGING_WIDEN_STEPS;
        affordable = lodgings
            .iter()
            .filter(|d| d.midpoint_cost() <= cap)
            .cloned()
            .collect::<Vec<_>>();
        if !affordable.is_empty() {
            if step > 0 {
                debug!(
                    "widened lodging budget to {cap} to find a match in {}",
                    frame.city
                );
            }
            break;
        }
    }
    if affordable.is_empty() {
        return Err(EngineError::invalid_input(
            "lodging_budget",
            format!(
                "no lodging in {} fits the daily budget {}",
                frame.city, frame.lodging_budget
            ),
        ));
    }

    let mut scored = score_destinations(affordable, now, rng);
    sort_by_score(&mut scored);
    scored.truncate(LODGING_SHORTLIST);
    let pick = rng.random_range(0..scored.len());
    Ok(scored.swap_remove(pick))
}

/// Builds the scored attraction pool: open non-lodging destinations
/// matching at least one requested personality tag, best `days * 15` kept.
fn build_pool(
    catalog: &dyn Catalog,
    frame: &TripFrame,
    now: Timestamp,
    rng: &mut impl Rng,
) -> Result<Vec<ScoredDestination>> {
    let candidates = catalog.open_destinations(
        &frame.city,
        CategoryFilter::Attractions,
        &frame.personalities,
    )?;

    let mut scored = score_destinations(candidates, now, rng);
    sort_by_score(&mut scored);
    scored.truncate(frame.days as usize * POOL_PER_DAY);
    debug!(
        "attraction pool for {}: {} candidates",
        frame.city,
        scored.len()
    );
    Ok(scored)
}

/// Greedy day-by-day packing: walks a virtual clock from the day's start,
/// placing the highest-point candidate that fits the remaining money and
/// time, and closing the day out when the next placement would cross the
/// configured end, the daily time budget, or the late-evening ceiling.
///
/// Stops the whole fold when the date range is exhausted, the pool empties,
/// or fewer than four candidates remain after at least one day was filled.
pub(crate) fn pack_days<F>(
    pool: Vec<ScoredDestination>,
    frame: &TripFrame,
    attraction_budget: i64,
    mut fetch_leg: F,
) -> Result<PackedItinerary>
where
    F: FnMut(&Destination, &Destination) -> Result<RouteLeg>,
{
    let late_cutoff = time(23, 0, 0, 0);
    let mut pool = pool;
    let mut stops = Vec::new();
    let mut attraction_cost = 0_i64;
    let mut remaining_budget = attraction_budget;
    let mut last_date: Option<Date> = None;

    'days: for date in frame.dates() {
        let mut clock = frame.day_start;
        let mut day_seconds = 0_i64;
        let mut prev: Option<Destination> = None;

        loop {
            if pool.is_empty() {
                break 'days;
            }
            if pool.len() < 4 && last_date.is_some() {
                break 'days;
            }

            let Some(idx) = pick_candidate(&pool, clock, remaining_budget) else {
                // Nothing is open or affordable at this clock: close the day.
                break;
            };

            let candidate = &pool[idx];
            let (distance, duration) = match &prev {
                None => (0, 0),
                Some(p) => {
                    let leg = fetch_leg(p, &candidate.destination)?;
                    (leg.distance_meters, leg.duration_seconds)
                }
            };
            let visit_seconds = candidate.destination.visit_minutes * 60;

            // Advancing past midnight closes the day just like crossing the
            // configured end.
            let Some(from_time) = add_seconds(clock, duration) else {
                break;
            };
            let Some(to_time) = add_seconds(from_time, visit_seconds) else {
                break;
            };
            if to_time > frame.day_end
                || day_seconds + duration + visit_seconds > DAY_TIME_BUDGET_SECONDS
                || to_time >= late_cutoff
            {
                break;
            }

            let placed = pool.remove(idx);
            stops.push(NewStop {
                destination_id: placed.destination.id,
                destination_name: placed.destination.name.clone(),
                date,
                from_time,
                to_time,
                distance_from_prev: distance,
                duration_from_prev: duration,
                travel_mode: frame.travel_mode,
                is_planned: true,
                status: StopStatus::New,
            });
            attraction_cost += placed.midpoint_cost;
            remaining_budget -= placed.midpoint_cost;
            day_seconds += duration + visit_seconds;
            clock = to_time;
            last_date = Some(date);
            prev = Some(placed.destination);
        }
    }

    Ok(PackedItinerary {
        stops,
        attraction_cost,
        last_date,
    })
}

/// Picks the pool index with the maximum visit point at the given clock,
/// ties broken by pool order. Candidates over the remaining budget or
/// closed at this hour are ineligible.
fn pick_candidate(pool: &[ScoredDestination], clock: Time, remaining_budget: i64) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for (idx, candidate) in pool.iter().enumerate() {
        if candidate.midpoint_cost > remaining_budget {
            continue;
        }
        let points = visit_points(&candidate.destination, clock);
        if points == 0 {
            continue;
        }
        match best {
            Some((_, best_points)) if points <= best_points => {}
            _ => best = Some((idx, points)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Visit points at a clock time: 0 outside opening hours, 1 inside, and
/// 2 plus the window's own plan/visit signal when the clock falls inside a
/// recommended window.
fn visit_points(destination: &Destination, clock: Time) -> u64 {
    if !destination.is_open_at(clock) {
        return 0;
    }
    destination
        .recommended_windows
        .iter()
        .filter(|w| w.contains(clock))
        .map(|w| 2 + w.signal())
        .max()
        .unwrap_or(1)
}

fn add_seconds(clock: Time, seconds: i64) -> Option<Time> {
    let span = seconds.seconds();
    match clock.checked_add(span) {
        Ok(next) if next >= clock => Some(next),
        // Wrap-around or overflow means the day ended.
        _ => None,
    }
}

/// Strips the " (n)" variant suffix a smart plan carries, if present.
pub(crate) fn strip_variant_suffix(name: &str) -> String {
    if let Some(idx) = name.rfind(" (") {
        let tail = &name[idx + 2..];
        if let Some(digits) = tail.strip_suffix(')') {
            if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                return name[..idx].to_string();
            }
        }
    }
    name.to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use jiff::civil::time;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::models::{DestinationState, TimeWindow, TravelMode};

    fn attraction(id: u64, opens: Time, closes: Time, minutes: i64, price: i64) -> Destination {
        Destination {
            id,
            name: format!("Attraction {id}"),
            city: "Hanoi".to_string(),
            lowest_price: price,
            highest_price: price,
            opens_at: opens,
            closes_at: closes,
            visit_minutes: minutes,
            rating: 4.0,
            view_count: 10,
            created_at: Timestamp::UNIX_EPOCH,
            categories: vec!["museum".to_string()],
            state: DestinationState::Open,
            latitude: 21.0,
            longitude: 105.8,
            affinities: BTreeMap::new(),
            recommended_windows: Vec::new(),
        }
    }

    fn scored(destination: Destination) -> ScoredDestination {
        let midpoint_cost = destination.midpoint_cost();
        ScoredDestination {
            destination,
            score: 0.5,
            midpoint_cost,
        }
    }

    fn frame(days: i64) -> TripFrame {
        let from_date = Zoned::now()
            .date()
            .checked_add(7.days())
            .expect("future date");
        let to_date = from_date
            .checked_add((days - 1).days())
            .expect("future date");
        TripFrame {
            traveler: "traveler-1".to_string(),
            city: "Hanoi".to_string(),
            from_date,
            to_date,
            days,
            day_start: time(8, 0, 0, 0),
            day_end: time(21, 0, 0, 0),
            total_budget: 1_000,
            lodging_budget: 100,
            personalities: Vec::new(),
            travel_mode: TravelMode::Driving,
        }
    }

    fn no_legs(_: &Destination, _: &Destination) -> Result<RouteLeg> {
        Ok(RouteLeg {
            from_id: 0,
            to_id: 0,
            mode: TravelMode::Driving,
            distance_meters: 1_000,
            duration_seconds: 600,
            distance_text: "1.0km".to_string(),
            duration_text: "10p".to_string(),
        })
    }

    #[test]
    fn test_visit_points_outside_hours_is_zero() {
        let dest = attraction(1, time(9, 0, 0, 0), time(17, 0, 0, 0), 60, 10);
        assert_eq!(visit_points(&dest, time(8, 0, 0, 0)), 0);
        assert_eq!(visit_points(&dest, time(17, 0, 0, 0)), 0);
        assert_eq!(visit_points(&dest, time(12, 0, 0, 0)), 1);
    }

    #[test]
    fn test_visit_points_recommended_window_bonus() {
        let mut dest = attraction(1, time(8, 0, 0, 0), time(20, 0, 0, 0), 60, 10);
        dest.recommended_windows.push(TimeWindow {
            starts_at: time(17, 0, 0, 0),
            ends_at: time(19, 0, 0, 0),
            plan_count: 3,
            visit_count: 2,
        });
        // Inside the window: 2 + (3 + 2*2)
        assert_eq!(visit_points(&dest, time(18, 0, 0, 0)), 9);
        // Outside the window but open
        assert_eq!(visit_points(&dest, time(10, 0, 0, 0)), 1);
    }

    #[test]
    fn test_pick_candidate_prefers_max_points_then_pool_order() {
        let plain = scored(attraction(1, time(8, 0, 0, 0), time(20, 0, 0, 0), 60, 10));
        let mut windowed = attraction(2, time(8, 0, 0, 0), time(20, 0, 0, 0), 60, 10);
        windowed.recommended_windows.push(TimeWindow {
            starts_at: time(8, 0, 0, 0),
            ends_at: time(12, 0, 0, 0),
            plan_count: 1,
            visit_count: 0,
        });
        let windowed = scored(windowed);
        let also_plain = scored(attraction(3, time(8, 0, 0, 0), time(20, 0, 0, 0), 60, 10));

        let pool = vec![plain, windowed, also_plain];
        // The recommended window wins over pool order.
        assert_eq!(pick_candidate(&pool, time(9, 0, 0, 0), 1_000), Some(1));
        // After the window ends all three tie at 1 point: first wins.
        assert_eq!(pick_candidate(&pool, time(13, 0, 0, 0), 1_000), Some(0));
    }

    #[test]
    fn test_pick_candidate_respects_budget() {
        let cheap = scored(attraction(1, time(8, 0, 0, 0), time(20, 0, 0, 0), 60, 10));
        let pricey = scored(attraction(2, time(8, 0, 0, 0), time(20, 0, 0, 0), 60, 500));
        let pool = vec![pricey, cheap];
        assert_eq!(pick_candidate(&pool, time(9, 0, 0, 0), 50), Some(1));
        assert_eq!(pick_candidate(&pool, time(9, 0, 0, 0), 5), None);
    }

    #[test]
    fn test_pack_days_first_stop_has_zero_leg() {
        let pool: Vec<_> = (1..=6)
            .map(|id| scored(attraction(id, time(8, 0, 0, 0), time(20, 0, 0, 0), 60, 10)))
            .collect();
        let packed = pack_days(pool, &frame(1), 1_000, no_legs).expect("pack");

        assert!(!packed.stops.is_empty());
        assert_eq!(packed.stops[0].distance_from_prev, 0);
        assert_eq!(packed.stops[0].duration_from_prev, 0);
        assert_eq!(packed.stops[1].distance_from_prev, 1_000);
    }

    #[test]
    fn test_pack_days_respects_day_end() {
        // Each visit takes 4 hours; the 8:00-21:00 day fits three at most,
        // but the 10-hour cap allows only two (8h visits + travel).
        let pool: Vec<_> = (1..=6)
            .map(|id| scored(attraction(id, time(0, 1, 0, 0), time(23, 59, 0, 0), 240, 10)))
            .collect();
        let packed = pack_days(pool, &frame(1), 1_000, no_legs).expect("pack");

        let day_seconds: i64 = packed
            .stops
            .iter()
            .map(|s| {
                let visit = (s.to_time - s.from_time)
                    .total(jiff::Unit::Second)
                    .expect("span") as i64;
                s.duration_from_prev + visit
            })
            .sum();
        assert!(day_seconds <= 10 * 3_600);
        for stop in &packed.stops {
            assert!(stop.to_time <= time(21, 0, 0, 0));
        }
    }

    #[test]
    fn test_pack_days_no_overlap_within_day() {
        let pool: Vec<_> = (1..=10)
            .map(|id| scored(attraction(id, time(8, 0, 0, 0), time(20, 0, 0, 0), 90, 10)))
            .collect();
        let packed = pack_days(pool, &frame(2), 1_000, no_legs).expect("pack");

        for pair in packed.stops.windows(2) {
            if pair[0].date == pair[1].date {
                assert!(pair[0].to_time <= pair[1].from_time);
            }
        }
    }

    #[test]
    fn test_pack_days_stops_early_when_pool_runs_low() {
        // Five candidates: after the first day consumes two, fewer than four
        // remain, so day two never fills and the itinerary shrinks.
        let pool: Vec<_> = (1..=5)
            .map(|id| scored(attraction(id, time(8, 0, 0, 0), time(20, 0, 0, 0), 240, 10)))
            .collect();
        let f = frame(3);
        let packed = pack_days(pool, &f, 1_000, no_legs).expect("pack");

        assert_eq!(packed.last_date, Some(f.from_date));
        assert!(packed.stops.iter().all(|s| s.date == f.from_date));
    }

    #[test]
    fn test_pack_days_budget_ceiling() {
        let pool: Vec<_> = (1..=8)
            .map(|id| scored(attraction(id, time(8, 0, 0, 0), time(20, 0, 0, 0), 30, 100)))
            .collect();
        let packed = pack_days(pool, &frame(1), 250, no_legs).expect("pack");

        assert_eq!(packed.stops.len(), 2);
        assert_eq!(packed.attraction_cost, 200);
    }

    #[test]
    fn test_trip_frame_rejects_five_days() {
        let mut params = base_params();
        let from = Zoned::now().date().checked_add(7.days()).expect("date");
        params.from_date = from.to_string();
        params.to_date = from.checked_add(4.days()).expect("date").to_string();
        let err = TripFrame::validate(&params).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "to_date"));
    }

    #[test]
    fn test_trip_frame_accepts_four_days() {
        let mut params = base_params();
        let from = Zoned::now().date().checked_add(7.days()).expect("date");
        params.from_date = from.to_string();
        params.to_date = from.checked_add(3.days()).expect("date").to_string();
        let frame = TripFrame::validate(&params).expect("valid");
        assert_eq!(frame.days, 4);
    }

    #[test]
    fn test_trip_frame_budget_ratio() {
        // 100 per day over 3 days against 1000 total: 300 <= 500, passes.
        let mut params = base_params();
        let from = Zoned::now().date().checked_add(7.days()).expect("date");
        params.from_date = from.to_string();
        params.to_date = from.checked_add(2.days()).expect("date").to_string();
        params.total_budget = 1_000;
        params.lodging_budget = 100;
        assert!(TripFrame::validate(&params).is_ok());

        // Same lodging against 500 total: 300 > 250, rejected.
        params.total_budget = 500;
        let err = TripFrame::validate(&params).unwrap_err();
        assert!(
            matches!(err, EngineError::InvalidInput { ref field, .. } if field == "lodging_budget")
        );
    }

    #[test]
    fn test_trip_frame_rejects_past_start() {
        let mut params = base_params();
        let from = Zoned::now()
            .date()
            .checked_sub(1.day())
            .expect("yesterday");
        params.from_date = from.to_string();
        params.to_date = from.to_string();
        let err = TripFrame::validate(&params).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "from_date"));
    }

    #[test]
    fn test_strip_variant_suffix() {
        assert_eq!(strip_variant_suffix("Hanoi getaway (2)"), "Hanoi getaway");
        assert_eq!(strip_variant_suffix("Hanoi getaway"), "Hanoi getaway");
        assert_eq!(strip_variant_suffix("Trip (abc)"), "Trip (abc)");
        assert_eq!(strip_variant_suffix("Trip ()"), "Trip ()");
    }

    fn base_params() -> GeneratePlans {
        GeneratePlans {
            traveler: "traveler-1".to_string(),
            city: "Hanoi".to_string(),
            total_budget: 1_000,
            lodging_budget: 100,
            ..Default::default()
        }
    }
}
