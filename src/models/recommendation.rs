use serde::{Deserialize, Serialize};

use super::Section;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Section,
    Tone,
    Warning,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Enable,
    Disable,
    Change,
}

/// Profile field a suggested action operates on
///
/// `Goal` names the goal section for `enable`/`disable` and the goal value
/// for `change`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActionTarget {
    WhatIDo,
    TechStack,
    Projects,
    Goal,
    Connect,
    Tone,
}

impl ActionTarget {
    /// The section this target toggles, if it is one
    pub fn section(&self) -> Option<Section> {
        match self {
            ActionTarget::WhatIDo => Some(Section::WhatIDo),
            ActionTarget::TechStack => Some(Section::TechStack),
            ActionTarget::Projects => Some(Section::Projects),
            ActionTarget::Goal => Some(Section::Goal),
            ActionTarget::Connect => Some(Section::Connect),
            ActionTarget::Tone => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ActionValue {
    Flag(bool),
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestedAction {
    pub action: ActionKind,
    pub target: ActionTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ActionValue>,
}

impl SuggestedAction {
    pub fn enable(target: ActionTarget) -> Self {
        Self {
            action: ActionKind::Enable,
            target,
            value: Some(ActionValue::Flag(true)),
        }
    }

    pub fn disable(target: ActionTarget) -> Self {
        Self {
            action: ActionKind::Disable,
            target,
            value: Some(ActionValue::Flag(false)),
        }
    }

    pub fn change(target: ActionTarget, value: ActionValue) -> Self {
        Self {
            action: ActionKind::Change,
            target,
            value: Some(value),
        }
    }
}

/// Tone/section/warning advice with its justification
///
/// `explanation` is the audit trail and is never empty. Recommendations
/// without a `suggested_action` are informational only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeuristicRecommendation {
    /// Identifier of the rule that produced this recommendation
    pub rule: String,
    pub kind: RecommendationKind,
    pub message: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<SuggestedAction>,
}

impl HeuristicRecommendation {
    pub fn is_actionable(&self) -> bool {
        self.suggested_action.is_some()
    }
}
