use chrono::{DateTime, Utc};

use crate::models::{
    FeaturedProject, NormalizedRepository, Suggestion, SuggestionKind, SuggestionPayload,
};
use crate::services::normalizer::is_recent;
use crate::services::ranker::TOP_N;

/// Impact line used when a repository has no description
pub const DEFAULT_IMPACT: &str = "A project on GitHub.";

/// Inputs shared by every suggestion rule
struct SuggestionContext<'a> {
    ranked: &'a [NormalizedRepository],
    languages: &'a [String],
    now: DateTime<Utc>,
}

impl SuggestionContext<'_> {
    fn top(&self) -> &[NormalizedRepository] {
        &self.ranked[..self.ranked.len().min(TOP_N)]
    }
}

struct SuggestionRule {
    id: &'static str,
    emit: fn(&SuggestionContext<'_>) -> Vec<Suggestion>,
}

/// Rules in display-priority order
const RULES: &[SuggestionRule] = &[
    SuggestionRule {
        id: "feature-top-repositories",
        emit: feature_top_repositories,
    },
    SuggestionRule {
        id: "no-recent-activity",
        emit: no_recent_activity,
    },
    SuggestionRule {
        id: "detected-languages",
        emit: detected_languages,
    },
    SuggestionRule {
        id: "feature-individual-projects",
        emit: feature_individual_projects,
    },
];

/// Derives advisory suggestions from the ranked repositories
///
/// Output order follows the rule table. Nothing is applied here.
pub fn generate_suggestions(
    ranked: &[NormalizedRepository],
    languages: &[String],
    now: DateTime<Utc>,
) -> Vec<Suggestion> {
    let ctx = SuggestionContext {
        ranked,
        languages,
        now,
    };

    let mut suggestions = Vec::new();
    for rule in RULES {
        let emitted = (rule.emit)(&ctx);
        if !emitted.is_empty() {
            tracing::debug!(rule = rule.id, count = emitted.len(), "Suggestion rule fired");
        }
        suggestions.extend(emitted);
    }
    suggestions
}

/// Featured-project entry proposed for a repository
pub fn project_from_repository(repo: &NormalizedRepository) -> FeaturedProject {
    let impact = if repo.description.trim().is_empty() {
        DEFAULT_IMPACT.to_string()
    } else {
        repo.description.clone()
    };
    FeaturedProject {
        name: repo.name.clone(),
        impact,
    }
}

fn feature_top_repositories(ctx: &SuggestionContext<'_>) -> Vec<Suggestion> {
    let top = ctx.top();
    if top.is_empty() {
        return vec![Suggestion::warning("No public repositories found.")];
    }

    let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
    vec![Suggestion::with_payload(
        SuggestionKind::RepositoryFeature,
        format!("Feature your top repositories: {}", names.join(", ")),
        SuggestionPayload::Repositories(top.to_vec()),
    )]
}

fn no_recent_activity(ctx: &SuggestionContext<'_>) -> Vec<Suggestion> {
    if ctx.ranked.is_empty() || ctx.ranked.iter().any(|r| is_recent(&r.updated_at, ctx.now)) {
        return Vec::new();
    }
    vec![Suggestion::warning(
        "None of your repositories were updated in the last 6 months. Consider highlighting \
         older work with context or pushing recent changes.",
    )]
}

fn detected_languages(ctx: &SuggestionContext<'_>) -> Vec<Suggestion> {
    if ctx.languages.is_empty() {
        return Vec::new();
    }
    vec![Suggestion::with_payload(
        SuggestionKind::SectionNote,
        format!("Detected languages: {}", ctx.languages.join(", ")),
        SuggestionPayload::Languages(ctx.languages.to_vec()),
    )]
}

fn feature_individual_projects(ctx: &SuggestionContext<'_>) -> Vec<Suggestion> {
    ctx.top()
        .iter()
        .map(|repo| {
            Suggestion::with_payload(
                SuggestionKind::RepositoryFeature,
                format!("Add {} as a featured project", repo.name),
                SuggestionPayload::Project(project_from_repository(repo)),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, stars: u64, updated_at: &str, description: &str) -> NormalizedRepository {
        NormalizedRepository {
            name: name.to_string(),
            description: description.to_string(),
            language: "Rust".to_string(),
            stars,
            updated_at: updated_at.to_string(),
        }
    }

    fn now() -> DateTime<Utc> {
        "2025-06-01T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_no_repositories_emits_only_warning() {
        let suggestions = generate_suggestions(&[], &[], now());
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::Warning);
        assert_eq!(suggestions[0].message, "No public repositories found.");
        assert!(suggestions
            .iter()
            .all(|s| s.kind != SuggestionKind::RepositoryFeature));
    }

    #[test]
    fn test_full_ordering() {
        let ranked: Vec<NormalizedRepository> = (0..6)
            .map(|i| repo(&format!("r{i}"), 10 - i, "2025-05-01T00:00:00Z", ""))
            .collect();
        let languages = vec!["Rust".to_string()];

        let suggestions = generate_suggestions(&ranked, &languages, now());

        // top-4 feature, languages note, 4 individual features
        assert_eq!(suggestions.len(), 6);
        assert_eq!(suggestions[0].kind, SuggestionKind::RepositoryFeature);
        match &suggestions[0].payload {
            Some(SuggestionPayload::Repositories(repos)) => assert_eq!(repos.len(), TOP_N),
            other => panic!("unexpected payload: {other:?}"),
        }
        assert_eq!(suggestions[1].kind, SuggestionKind::SectionNote);
        assert!(suggestions[2..]
            .iter()
            .all(|s| matches!(s.payload, Some(SuggestionPayload::Project(_)))));
    }

    #[test]
    fn test_stale_repositories_warn() {
        let ranked = vec![repo("old", 3, "2023-01-01T00:00:00Z", "")];
        let suggestions = generate_suggestions(&ranked, &[], now());
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[1].kind, SuggestionKind::Warning);
        assert!(suggestions[1].message.contains("6 months"));
    }

    #[test]
    fn test_impact_defaults_when_description_empty() {
        let ranked = vec![
            repo("documented", 3, "2025-05-01T00:00:00Z", "Fast search"),
            repo("bare", 2, "2025-05-01T00:00:00Z", ""),
        ];
        let suggestions = generate_suggestions(&ranked, &[], now());
        let projects: Vec<&FeaturedProject> = suggestions
            .iter()
            .filter_map(|s| match &s.payload {
                Some(SuggestionPayload::Project(p)) => Some(p),
                _ => None,
            })
            .collect();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].impact, "Fast search");
        assert_eq!(projects[1].impact, DEFAULT_IMPACT);
    }
}
