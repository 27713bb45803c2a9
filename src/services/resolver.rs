use thiserror::Error;

use crate::models::{
    ActionKind, ActionTarget, ActionValue, Goal, HeuristicRecommendation, ProfileIntent,
    Suggestion, SuggestionPayload, SuggestedAction, Tone,
};
use crate::services::suggestions::project_from_repository;

/// Error types for the apply/merge resolver
#[derive(Debug, Error, PartialEq)]
pub enum ApplyError {
    #[error("Advisory item is informational and has nothing to apply")]
    NotApplicable,
    #[error("Invalid value for {target:?}: {reason}")]
    InvalidValue {
        target: ActionTarget,
        reason: String,
    },
}

/// Applies a suggestion's payload to the intent, producing the next intent
///
/// Applying the same suggestion twice gives the same result as applying it
/// once.
pub fn apply_suggestion(
    mut intent: ProfileIntent,
    suggestion: &Suggestion,
) -> Result<ProfileIntent, ApplyError> {
    match suggestion.payload.as_ref().ok_or(ApplyError::NotApplicable)? {
        SuggestionPayload::Project(project) => intent.upsert_project(project.clone()),
        SuggestionPayload::Repositories(repos) => {
            for repo in repos {
                intent.upsert_project(project_from_repository(repo));
            }
        }
        SuggestionPayload::Languages(languages) => intent.merge_technologies(languages),
    }

    tracing::debug!(kind = ?suggestion.kind, "Suggestion applied");
    Ok(intent)
}

/// Applies a recommendation's suggested action to the intent
///
/// Recommendations without an action are informational and rejected with
/// `ApplyError::NotApplicable`.
pub fn apply_recommendation(
    intent: ProfileIntent,
    recommendation: &HeuristicRecommendation,
) -> Result<ProfileIntent, ApplyError> {
    let action = recommendation
        .suggested_action
        .as_ref()
        .ok_or(ApplyError::NotApplicable)?;

    let intent = apply_action(intent, action)?;
    tracing::debug!(rule = %recommendation.rule, "Recommendation applied");
    Ok(intent)
}

fn apply_action(
    mut intent: ProfileIntent,
    action: &SuggestedAction,
) -> Result<ProfileIntent, ApplyError> {
    match (action.action, action.target) {
        (ActionKind::Enable | ActionKind::Disable, target) => {
            let section = target.section().ok_or_else(|| ApplyError::InvalidValue {
                target,
                reason: "not a toggleable section".to_string(),
            })?;
            intent.set_section(section, action.action == ActionKind::Enable);
        }
        (ActionKind::Change, ActionTarget::Tone) => {
            let value = text_value(action)?;
            intent.tone = Tone::parse(value).ok_or_else(|| ApplyError::InvalidValue {
                target: ActionTarget::Tone,
                reason: format!("unknown tone '{}'", value),
            })?;
        }
        (ActionKind::Change, ActionTarget::Goal) => {
            let value = text_value(action)?;
            intent.goal = Goal::parse(value).ok_or_else(|| ApplyError::InvalidValue {
                target: ActionTarget::Goal,
                reason: format!("unknown goal '{}'", value),
            })?;
        }
        (ActionKind::Change, ActionTarget::TechStack) => match &action.value {
            Some(ActionValue::List(technologies)) => intent.merge_technologies(technologies),
            Some(ActionValue::Text(technology)) => intent.merge_technologies([technology]),
            _ => {
                return Err(ApplyError::InvalidValue {
                    target: ActionTarget::TechStack,
                    reason: "expected a list of technologies".to_string(),
                })
            }
        },
        (ActionKind::Change, target) => {
            return Err(ApplyError::InvalidValue {
                target,
                reason: "field cannot be changed, only enabled or disabled".to_string(),
            })
        }
    }
    Ok(intent)
}

fn text_value(action: &SuggestedAction) -> Result<&str, ApplyError> {
    match &action.value {
        Some(ActionValue::Text(value)) => Ok(value),
        _ => Err(ApplyError::InvalidValue {
            target: action.target,
            reason: "expected a text value".to_string(),
        }),
    }
}
