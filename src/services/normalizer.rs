use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::models::{AggregateSignals, NormalizedRepository, RepositoryFact, UNKNOWN_LANGUAGE};
use crate::services::ranker::{extract_languages, TOP_N};

/// Rolling window within which a repository counts as recently active
pub const RECENCY_WINDOW_DAYS: i64 = 180;

/// Coerces a raw fact into its canonical shape
///
/// Only optional fields are touched; the timestamp is passed through as-is.
pub fn normalize(fact: &RepositoryFact) -> NormalizedRepository {
    NormalizedRepository {
        name: fact.name.clone(),
        description: fact.description.clone().unwrap_or_default(),
        language: fact
            .language
            .clone()
            .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string()),
        stars: fact.stars,
        updated_at: fact.updated_at.clone(),
    }
}

pub fn normalize_all(facts: &[RepositoryFact]) -> Vec<NormalizedRepository> {
    facts.iter().map(normalize).collect()
}

/// Parses an ISO-8601 timestamp
///
/// Accepts RFC 3339, date-time without offset, and bare dates. The last two
/// are read as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Whether `updated_at` falls within the recency window ending at `now`
///
/// Timestamps that are not ISO-8601 are never recent. Timestamps after `now`
/// are.
pub fn is_recent(updated_at: &str, now: DateTime<Utc>) -> bool {
    match parse_timestamp(updated_at) {
        Some(ts) => now.signed_duration_since(ts) <= Duration::days(RECENCY_WINDOW_DAYS),
        None => {
            tracing::debug!(updated_at = %updated_at, "Unparseable timestamp");
            false
        }
    }
}

/// Derives aggregate signals for one analysis
///
/// `raw` is the full retrieved list (used for the fork ratio); `ranked` is the
/// ranker's output, over which every other signal is computed.
pub fn compute_signals(
    raw: &[RepositoryFact],
    ranked: &[NormalizedRepository],
    now: DateTime<Utc>,
) -> AggregateSignals {
    let forks = raw.iter().filter(|f| f.fork).count();
    let fork_ratio = if raw.is_empty() {
        0.0
    } else {
        forks as f64 / raw.len() as f64
    };

    let signals = AggregateSignals {
        repo_count: ranked.len(),
        has_recent_activity: ranked.iter().any(|r| is_recent(&r.updated_at, now)),
        languages: extract_languages(ranked),
        total_stars: ranked.iter().map(|r| r.stars).sum(),
        fork_ratio,
        top_repositories: ranked.iter().take(TOP_N).cloned().collect(),
    };

    tracing::debug!(
        repo_count = signals.repo_count,
        recent = signals.has_recent_activity,
        total_stars = signals.total_stars,
        fork_ratio = signals.fork_ratio,
        "Aggregate signals computed"
    );

    signals
}
