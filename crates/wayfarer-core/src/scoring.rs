//! Candidate scoring.
//!
//! Computes a normalized desirability score per destination relative to the
//! batch it arrives in. Pure apart from the injected random source: shared
//! destination records are never mutated; callers receive wrapping
//! [`ScoredDestination`] values.

use jiff::Timestamp;
use rand::Rng;

use crate::models::Destination;

/// Weight applied to the recency sub-metric.
const RECENCY_WEIGHT: f64 = 2.0;
/// Weight applied to the combined affinity/quality sub-metric.
const MATCH_WEIGHT: f64 = 3.0;
/// Sum of all weights (popularity carries weight 1).
const WEIGHT_TOTAL: f64 = 6.0;

/// A destination together with its batch-relative score and the midpoint
/// cost used for budget arithmetic.
#[derive(Debug, Clone)]
pub struct ScoredDestination {
    pub destination: Destination,
    pub score: f64,
    pub midpoint_cost: i64,
}

/// Scores a batch of destinations relative to the batch maxima.
///
/// Sub-metrics per destination:
/// - popularity: view count over the batch maximum
/// - recency: inverted age over the batch maximum age
/// - affinity: personality plan/visit signal over the batch maximum, with a
///   uniform [0.25, 0.75) fallback when the destination has no signal yet,
///   so untested destinations are not permanently starved
/// - quality: rating over 5, with the same fallback for unrated entries
///
/// The composite deliberately favors newer, better-matched destinations
/// over raw traffic: recency counts double and the affinity/quality pair
/// triple against popularity.
pub fn score_destinations(
    destinations: Vec<Destination>,
    now: Timestamp,
    rng: &mut impl Rng,
) -> Vec<ScoredDestination> {
    let max_views = destinations.iter().map(|d| d.view_count).max().unwrap_or(0);
    let max_age_days = destinations
        .iter()
        .map(|d| age_days(d, now))
        .fold(0.0_f64, f64::max);
    let max_affinity = destinations
        .iter()
        .map(affinity_signal)
        .max()
        .unwrap_or(0);

    destinations
        .into_iter()
        .map(|destination| {
            let popularity = if max_views == 0 {
                0.0
            } else {
                destination.view_count as f64 / max_views as f64
            };

            let recency = if max_age_days == 0.0 {
                0.0
            } else {
                (max_age_days - age_days(&destination, now)) / max_age_days
            };

            let raw_affinity = affinity_signal(&destination);
            let affinity = if raw_affinity == 0 || max_affinity == 0 {
                rng.random_range(0.25..0.75)
            } else {
                raw_affinity as f64 / max_affinity as f64
            };

            let quality = if destination.rating > 0.0 {
                destination.rating / 5.0
            } else {
                rng.random_range(0.25..0.75)
            };

            let score = (popularity
                + RECENCY_WEIGHT * recency
                + MATCH_WEIGHT * ((affinity + quality) / 2.0))
                / WEIGHT_TOTAL;
            let midpoint_cost = destination.midpoint_cost();

            ScoredDestination {
                destination,
                score,
                midpoint_cost,
            }
        })
        .collect()
}

/// Sorts scored destinations best-first, keeping the incoming order for
/// equal scores.
pub fn sort_by_score(scored: &mut [ScoredDestination]) {
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

fn age_days(destination: &Destination, now: Timestamp) -> f64 {
    let seconds = now.as_second() - destination.created_at.as_second();
    (seconds.max(0) as f64) / 86_400.0
}

fn affinity_signal(destination: &Destination) -> u64 {
    destination.affinities.values().map(|a| a.signal()).sum()
}
