use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::{NormalizedRepository, RepositoryFact, UNKNOWN_LANGUAGE};
use crate::services::normalizer::normalize;

/// Number of repositories surfaced as "top" by suggestions and signals
pub const TOP_N: usize = 4;

/// Whether a repository represents original, presentable work
pub fn is_presentable(fact: &RepositoryFact) -> bool {
    !fact.fork && !fact.archived && fact.size > 0
}

/// Ranking order: stars descending, then last-modified descending
///
/// Timestamps are compared as strings. This matches chronological order only
/// while every timestamp shares one ISO-8601 format, precision and UTC
/// offset, which is what the GitHub API returns.
fn compare(a: &RepositoryFact, b: &RepositoryFact) -> Ordering {
    b.stars
        .cmp(&a.stars)
        .then_with(|| b.updated_at.cmp(&a.updated_at))
}

/// Filters out forks, archived and empty repositories, then orders the rest
///
/// The sort is stable, so exact ties keep their input order.
pub fn rank(facts: &[RepositoryFact]) -> Vec<NormalizedRepository> {
    let mut kept: Vec<&RepositoryFact> = facts.iter().filter(|f| is_presentable(f)).collect();
    kept.sort_by(|a, b| compare(a, b));

    tracing::debug!(
        retrieved = facts.len(),
        kept = kept.len(),
        "Repositories ranked"
    );

    kept.into_iter().map(normalize).collect()
}

/// Distinct languages of the ranked list in first-seen order, minus the sentinel
pub fn extract_languages(ranked: &[NormalizedRepository]) -> Vec<String> {
    let mut seen = HashSet::new();
    ranked
        .iter()
        .map(|r| r.language.as_str())
        .filter(|lang| *lang != UNKNOWN_LANGUAGE && !lang.is_empty())
        .filter(|lang| seen.insert(*lang))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fact(name: &str, stars: u64, updated_at: &str, lang: Option<&str>) -> RepositoryFact {
        RepositoryFact {
            name: name.to_string(),
            description: None,
            language: lang.map(str::to_string),
            stars,
            updated_at: updated_at.to_string(),
            fork: false,
            archived: false,
            size: 100,
        }
    }

    fn names(ranked: &[NormalizedRepository]) -> Vec<&str> {
        ranked.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_filters_forks_archived_and_empty() {
        let mut forked = fact("forked", 50, "2025-01-01T00:00:00Z", None);
        forked.fork = true;
        let mut archived = fact("archived", 40, "2025-01-01T00:00:00Z", None);
        archived.archived = true;
        let mut empty = fact("empty", 30, "2025-01-01T00:00:00Z", None);
        empty.size = 0;
        let keep = fact("keep", 1, "2025-01-01T00:00:00Z", None);

        let ranked = rank(&[forked, archived, empty, keep]);
        assert_eq!(names(&ranked), vec!["keep"]);
    }

    #[test]
    fn test_keeps_every_presentable_record_once() {
        let facts: Vec<RepositoryFact> = (0..10)
            .map(|i| fact(&format!("repo-{i}"), i % 3, "2025-01-01T00:00:00Z", None))
            .collect();
        let ranked = rank(&facts);
        assert_eq!(ranked.len(), facts.len());
        let unique: HashSet<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(unique.len(), facts.len());
    }

    #[test]
    fn test_orders_by_stars_then_timestamp() {
        let facts = vec![
            fact("low", 1, "2025-03-01T00:00:00Z", None),
            fact("old", 10, "2024-01-01T00:00:00Z", None),
            fact("new", 10, "2025-01-01T00:00:00Z", None),
            fact("top", 99, "2020-01-01T00:00:00Z", None),
        ];
        let ranked = rank(&facts);
        assert_eq!(names(&ranked), vec!["top", "new", "old", "low"]);
    }

    #[test]
    fn test_exact_ties_keep_input_order() {
        let mut go = fact("go-tool", 10, "2025-01-01T00:00:00Z", Some("Go"));
        go.size = 120;
        let mut rust = fact("rust-tool", 10, "2025-01-01T00:00:00Z", Some("Rust"));
        rust.size = 50;

        let ranked = rank(&[go.clone(), rust.clone()]);
        assert_eq!(names(&ranked), vec!["go-tool", "rust-tool"]);

        let ranked = rank(&[rust, go]);
        assert_eq!(names(&ranked), vec!["rust-tool", "go-tool"]);
    }

    #[test]
    fn test_rank_normalizes() {
        let ranked = rank(&[fact("a", 1, "2025-01-01T00:00:00Z", None)]);
        assert_eq!(ranked[0].language, UNKNOWN_LANGUAGE);
        assert_eq!(ranked[0].description, "");
    }

    #[test]
    fn test_extract_languages_first_seen_without_unknown() {
        let ranked = rank(&[
            fact("a", 5, "2025-01-01T00:00:00Z", Some("Rust")),
            fact("b", 4, "2025-01-01T00:00:00Z", None),
            fact("c", 3, "2025-01-01T00:00:00Z", Some("Go")),
            fact("d", 2, "2025-01-01T00:00:00Z", Some("Rust")),
        ]);
        assert_eq!(extract_languages(&ranked), vec!["Rust", "Go"]);
    }

    #[test]
    fn test_extract_languages_empty() {
        assert!(extract_languages(&[]).is_empty());
    }
}
