use serde::{Deserialize, Serialize};

use super::{FeaturedProject, NormalizedRepository};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    RepositoryFeature,
    SectionNote,
    Warning,
}

/// Data a suggestion carries so it can be applied mechanically
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum SuggestionPayload {
    Repositories(Vec<NormalizedRepository>),
    Languages(Vec<String>),
    Project(FeaturedProject),
}

/// Advisory item derived from ranked repository facts
///
/// Generated fresh per analysis and never applied automatically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<SuggestionPayload>,
}

impl Suggestion {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: SuggestionKind::Warning,
            message: message.into(),
            payload: None,
        }
    }

    pub fn with_payload(
        kind: SuggestionKind,
        message: impl Into<String>,
        payload: SuggestionPayload,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            payload: Some(payload),
        }
    }
}
