use serde::{Deserialize, Serialize};

pub mod profile_intent;
pub mod recommendation;
pub mod suggestion;

pub use profile_intent::{
    CareerStage, EmojiDensity, FeaturedProject, Goal, ProfileIntent, Section, SectionVisibility,
    Tone,
};
pub use recommendation::{
    ActionKind, ActionTarget, ActionValue, HeuristicRecommendation, RecommendationKind,
    SuggestedAction,
};
pub use suggestion::{Suggestion, SuggestionKind, SuggestionPayload};

/// Language sentinel used when a repository reports no primary language
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

// ============================================================================
// Repository facts
// ============================================================================

/// Raw repository record as handed over by the retrieval layer
///
/// Field aliases accept the GitHub REST shape directly
/// (`stargazers_count`, `pushed_at`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepositoryFact {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    /// Popularity count (stars)
    #[serde(alias = "stargazers_count")]
    pub stars: u64,
    /// Last-modified timestamp, ISO-8601
    #[serde(alias = "pushed_at")]
    pub updated_at: String,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
    /// Size in bytes; 0 means the repository is empty
    #[serde(default)]
    pub size: u64,
}

/// Engine-owned view of a repository that survived ranking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedRepository {
    pub name: String,
    /// Empty when the source had no description
    pub description: String,
    /// `UNKNOWN_LANGUAGE` when the source had no language
    pub language: String,
    pub stars: u64,
    pub updated_at: String,
}

/// Aggregate facts derived from one ranking pass
///
/// Never persisted; recomputed on every analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregateSignals {
    /// Number of ranked (kept) repositories
    pub repo_count: usize,
    pub has_recent_activity: bool,
    /// Distinct detected languages, first-seen order, without the sentinel
    pub languages: Vec<String>,
    pub total_stars: u64,
    /// Forked repositories over all retrieved repositories
    pub fork_ratio: f64,
    /// Highest-ranked repositories, at most `TOP_N`
    pub top_repositories: Vec<NormalizedRepository>,
}
