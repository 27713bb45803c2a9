use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{
    AggregateSignals, HeuristicRecommendation, NormalizedRepository, ProfileIntent,
    RepositoryFact, Suggestion,
};
use crate::services::{heuristics, normalizer, ranker, suggestions};

/// Everything one analysis produces
///
/// Advisory only: nothing in here has been applied to the intent.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Analysis {
    pub repositories: Vec<NormalizedRepository>,
    pub signals: Option<AggregateSignals>,
    pub suggestions: Vec<Suggestion>,
    pub recommendations: Vec<HeuristicRecommendation>,
}

/// Runs ranking, suggestions and heuristics for one snapshot of `now`
///
/// `facts` is `None` when no repository source was consulted; ranking and
/// suggestions are then skipped and only intent-driven rules run.
pub fn analyze(
    facts: Option<&[RepositoryFact]>,
    intent: &ProfileIntent,
    now: DateTime<Utc>,
) -> Analysis {
    let Some(facts) = facts else {
        return Analysis {
            repositories: Vec::new(),
            signals: None,
            suggestions: Vec::new(),
            recommendations: heuristics::recommend(intent, None),
        };
    };

    let ranked = ranker::rank(facts);
    let signals = normalizer::compute_signals(facts, &ranked, now);
    let suggestions = suggestions::generate_suggestions(&ranked, &signals.languages, now);
    let recommendations = heuristics::recommend(intent, Some(&signals));

    tracing::info!(
        retrieved = facts.len(),
        ranked = ranked.len(),
        suggestions = suggestions.len(),
        recommendations = recommendations.len(),
        "Analysis completed"
    );

    Analysis {
        repositories: ranked,
        signals: Some(signals),
        suggestions,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActionKind, ActionTarget, SuggestionKind};

    fn fact(name: &str, stars: u64, lang: &str) -> RepositoryFact {
        RepositoryFact {
            name: name.to_string(),
            description: Some(format!("{name} does things")),
            language: Some(lang.to_string()),
            stars,
            updated_at: "2025-05-20T12:00:00Z".to_string(),
            fork: false,
            archived: false,
            size: 64,
        }
    }

    fn now() -> DateTime<Utc> {
        "2025-06-01T00:00:00Z".parse().unwrap()
    }

    fn intent() -> ProfileIntent {
        ProfileIntent {
            display_name: "Grace Hopper".to_string(),
            handle: "grace".to_string(),
            role: "Compiler engineer".to_string(),
            tech_stack: vec!["COBOL".to_string()],
            ..ProfileIntent::new()
        }
    }

    #[test]
    fn test_analyze_without_facts_runs_intent_rules_only() {
        let mut intent = intent();
        intent.role = String::new();
        let analysis = analyze(None, &intent, now());

        assert!(analysis.repositories.is_empty());
        assert!(analysis.signals.is_none());
        assert!(analysis.suggestions.is_empty());
        assert!(analysis
            .recommendations
            .iter()
            .any(|r| r.rule == "warning.missing-role"));
    }

    #[test]
    fn test_analyze_strong_repositories_enable_projects() {
        let mut intent = intent();
        intent.sections.projects = false;
        let facts = vec![
            fact("a", 12, "Go"),
            fact("b", 7, "Rust"),
            fact("c", 5, "Go"),
            fact("d", 1, "C"),
        ];

        let analysis = analyze(Some(facts.as_slice()), &intent, now());

        let enables: Vec<_> = analysis
            .recommendations
            .iter()
            .filter_map(|r| r.suggested_action.as_ref())
            .filter(|a| a.target == ActionTarget::Projects)
            .collect();
        assert_eq!(enables.len(), 1);
        assert_eq!(enables[0].action, ActionKind::Enable);

        let signals = analysis.signals.unwrap();
        assert_eq!(signals.languages, vec!["Go", "Rust", "C"]);
        assert_eq!(analysis.suggestions[0].kind, SuggestionKind::RepositoryFeature);
    }

    #[test]
    fn test_analyze_only_unpresentable_repositories() {
        let mut forked = fact("fork", 3, "Go");
        forked.fork = true;
        let analysis = analyze(Some(&[forked][..]), &intent(), now());

        assert!(analysis.repositories.is_empty());
        assert_eq!(analysis.suggestions.len(), 1);
        assert_eq!(analysis.suggestions[0].kind, SuggestionKind::Warning);
    }

    #[test]
    fn test_analyze_timestamp_without_offset_counts_as_recent() {
        let mut repo = fact("naive", 3, "Go");
        repo.updated_at = "2025-05-30T10:00:00".to_string();
        let analysis = analyze(Some(&[repo][..]), &intent(), now());

        assert!(analysis.signals.as_ref().unwrap().has_recent_activity);
        assert!(!analysis
            .recommendations
            .iter()
            .any(|r| r.rule == "warning.no-recent-activity"));
        assert!(!analysis
            .suggestions
            .iter()
            .any(|s| s.kind == SuggestionKind::Warning));
    }

    #[test]
    fn test_analyze_mostly_forks_warns() {
        let mut facts: Vec<RepositoryFact> =
            (0..3).map(|i| fact(&format!("own-{i}"), 2, "Go")).collect();
        facts.extend((0..8).map(|i| {
            let mut forked = fact(&format!("fork-{i}"), 0, "Go");
            forked.fork = true;
            forked
        }));

        let analysis = analyze(Some(facts.as_slice()), &intent(), now());

        let signals = analysis.signals.as_ref().unwrap();
        assert_eq!(signals.repo_count, 3);
        assert!(signals.fork_ratio > 0.7);
        assert!(analysis
            .recommendations
            .iter()
            .any(|r| r.rule == "warning.mostly-forks"));
    }
}
