//! Heuristic recommendations over declared intent and repository signals.
//!
//! Rules live in three tables (section, tone, warning) evaluated in that
//! order. Every rule in every table is checked; several can fire together and
//! their output is concatenated in table order. Rules that need repository
//! signals simply do not fire when none are available.

use crate::models::{
    ActionTarget, ActionValue, AggregateSignals, CareerStage, Goal, HeuristicRecommendation,
    ProfileIntent, RecommendationKind, SuggestedAction, Tone,
};

/// Stars at which a repository counts as strong
pub const STRONG_REPOSITORY_STARS: u64 = 5;
/// Strong repositories needed before recommending the projects section
pub const STRONG_REPOSITORY_COUNT: usize = 3;
/// Maximum detected languages proposed for an empty tech stack
pub const MAX_SUGGESTED_LANGUAGES: usize = 5;
/// Total stars at which a confident tone is recommended
pub const CONFIDENT_TOTAL_STARS: u64 = 50;
pub const HIGH_FORK_RATIO: f64 = 0.7;
/// Exclusive upper bound for the few-repositories warning, which fires for
/// `0 < repo_count < FEW_REPOSITORIES` (one or two repositories)
pub const FEW_REPOSITORIES: usize = 3;

/// Display names treated as unset
const PLACEHOLDER_NAMES: &[&str] = &["your name", "name", "john doe", "jane doe", "username"];

struct RuleContext<'a> {
    intent: &'a ProfileIntent,
    signals: Option<&'a AggregateSignals>,
}

struct HeuristicRule {
    id: &'static str,
    evaluate: fn(&'static str, &RuleContext<'_>) -> Option<HeuristicRecommendation>,
}

const SECTION_RULES: &[HeuristicRule] = &[
    HeuristicRule {
        id: "section.projects.strong-repositories",
        evaluate: enable_projects_for_strong_repositories,
    },
    HeuristicRule {
        id: "section.projects.no-active-work",
        evaluate: disable_projects_without_active_work,
    },
    HeuristicRule {
        id: "section.tech-stack.no-languages",
        evaluate: enable_manual_tech_stack,
    },
    HeuristicRule {
        id: "section.tech-stack.populate-from-languages",
        evaluate: populate_tech_stack_from_languages,
    },
    HeuristicRule {
        id: "section.projects.no-featured-projects",
        evaluate: disable_projects_without_entries,
    },
    HeuristicRule {
        id: "section.tech-stack.empty",
        evaluate: note_empty_tech_stack,
    },
];

const TONE_RULES: &[HeuristicRule] = &[
    HeuristicRule {
        id: "tone.student-friendly",
        evaluate: friendly_for_quiet_students,
    },
    HeuristicRule {
        id: "tone.popular-confident",
        evaluate: confident_for_popular_work,
    },
    HeuristicRule {
        id: "tone.open-source-friendly",
        evaluate: friendly_for_open_source,
    },
    HeuristicRule {
        id: "tone.founder",
        evaluate: founder_for_founders,
    },
    HeuristicRule {
        id: "tone.job-seeking-confident",
        evaluate: confident_for_job_seekers,
    },
];

const WARNING_RULES: &[HeuristicRule] = &[
    HeuristicRule {
        id: "warning.no-recent-activity",
        evaluate: warn_no_recent_activity,
    },
    HeuristicRule {
        id: "warning.mostly-forks",
        evaluate: warn_mostly_forks,
    },
    HeuristicRule {
        id: "warning.no-stars",
        evaluate: warn_no_stars,
    },
    HeuristicRule {
        id: "warning.few-repositories",
        evaluate: warn_few_repositories,
    },
    HeuristicRule {
        id: "warning.missing-role",
        evaluate: warn_missing_role,
    },
    HeuristicRule {
        id: "warning.missing-name",
        evaluate: warn_missing_name,
    },
];

/// Evaluates every rule table against the intent and optional signals
///
/// `signals` is `None` when no repository source was consulted.
pub fn recommend(
    intent: &ProfileIntent,
    signals: Option<&AggregateSignals>,
) -> Vec<HeuristicRecommendation> {
    let ctx = RuleContext { intent, signals };

    let recommendations: Vec<HeuristicRecommendation> = [SECTION_RULES, TONE_RULES, WARNING_RULES]
        .into_iter()
        .flatten()
        .filter_map(|rule| (rule.evaluate)(rule.id, &ctx))
        .collect();

    tracing::debug!(
        has_signals = signals.is_some(),
        fired = recommendations.len(),
        "Heuristic rules evaluated"
    );

    recommendations
}

fn recommendation(
    rule: &'static str,
    kind: RecommendationKind,
    message: impl Into<String>,
    explanation: impl Into<String>,
    suggested_action: Option<SuggestedAction>,
) -> HeuristicRecommendation {
    HeuristicRecommendation {
        rule: rule.to_string(),
        kind,
        message: message.into(),
        explanation: explanation.into(),
        suggested_action,
    }
}

fn change_tone(
    rule: &'static str,
    tone: Tone,
    explanation: impl Into<String>,
) -> HeuristicRecommendation {
    recommendation(
        rule,
        RecommendationKind::Tone,
        format!("Switch to a {} tone", tone.as_str()),
        explanation,
        Some(SuggestedAction::change(
            ActionTarget::Tone,
            ActionValue::Text(tone.as_str().to_string()),
        )),
    )
}

fn is_quiet(signals: Option<&AggregateSignals>) -> bool {
    signals.map_or(true, |s| !s.has_recent_activity)
}

// ============================================================================
// Section rules
// ============================================================================

fn enable_projects_for_strong_repositories(
    rule: &'static str,
    ctx: &RuleContext<'_>,
) -> Option<HeuristicRecommendation> {
    let signals = ctx.signals?;
    let strong = signals
        .top_repositories
        .iter()
        .filter(|r| r.stars >= STRONG_REPOSITORY_STARS)
        .count();
    if strong < STRONG_REPOSITORY_COUNT || ctx.intent.sections.projects {
        return None;
    }
    Some(recommendation(
        rule,
        RecommendationKind::Section,
        "Enable the projects section",
        format!(
            "{strong} of your repositories have at least {STRONG_REPOSITORY_STARS} stars, \
             which is enough to showcase."
        ),
        Some(SuggestedAction::enable(ActionTarget::Projects)),
    ))
}

fn disable_projects_without_active_work(
    rule: &'static str,
    ctx: &RuleContext<'_>,
) -> Option<HeuristicRecommendation> {
    let signals = ctx.signals?;
    let inactive = signals.repo_count == 0 || !signals.has_recent_activity;
    if !inactive || !signals.top_repositories.is_empty() || !ctx.intent.sections.projects {
        return None;
    }
    Some(recommendation(
        rule,
        RecommendationKind::Section,
        "Hide the projects section",
        "No presentable repositories were found, so the projects section would be empty.",
        Some(SuggestedAction::disable(ActionTarget::Projects)),
    ))
}

fn enable_manual_tech_stack(
    rule: &'static str,
    ctx: &RuleContext<'_>,
) -> Option<HeuristicRecommendation> {
    let signals = ctx.signals?;
    if !signals.languages.is_empty() || ctx.intent.sections.tech_stack {
        return None;
    }
    Some(recommendation(
        rule,
        RecommendationKind::Section,
        "Enable the tech stack section and fill it in manually",
        "No languages could be detected from your repositories, so your stack has to be \
         listed by hand.",
        Some(SuggestedAction::enable(ActionTarget::TechStack)),
    ))
}

fn populate_tech_stack_from_languages(
    rule: &'static str,
    ctx: &RuleContext<'_>,
) -> Option<HeuristicRecommendation> {
    let signals = ctx.signals?;
    if signals.languages.is_empty() || !ctx.intent.tech_stack.is_empty() {
        return None;
    }
    let languages: Vec<String> = signals
        .languages
        .iter()
        .take(MAX_SUGGESTED_LANGUAGES)
        .cloned()
        .collect();
    Some(recommendation(
        rule,
        RecommendationKind::Section,
        format!("Add {} to your tech stack", languages.join(", ")),
        "Your tech stack is empty but these languages appear in your repositories.",
        Some(SuggestedAction::change(
            ActionTarget::TechStack,
            ActionValue::List(languages),
        )),
    ))
}

fn disable_projects_without_entries(
    rule: &'static str,
    ctx: &RuleContext<'_>,
) -> Option<HeuristicRecommendation> {
    if ctx.signals.is_some() || !ctx.intent.sections.projects || !ctx.intent.projects.is_empty() {
        return None;
    }
    Some(recommendation(
        rule,
        RecommendationKind::Section,
        "Hide the projects section",
        "The projects section is enabled but you have not listed any featured projects.",
        Some(SuggestedAction::disable(ActionTarget::Projects)),
    ))
}

fn note_empty_tech_stack(
    rule: &'static str,
    ctx: &RuleContext<'_>,
) -> Option<HeuristicRecommendation> {
    if ctx.signals.is_some() || !ctx.intent.sections.tech_stack || !ctx.intent.tech_stack.is_empty()
    {
        return None;
    }
    Some(recommendation(
        rule,
        RecommendationKind::Section,
        "Add technologies to your tech stack",
        "The tech stack section is enabled but lists no technologies.",
        None,
    ))
}

// ============================================================================
// Tone rules
// ============================================================================

fn friendly_for_quiet_students(
    rule: &'static str,
    ctx: &RuleContext<'_>,
) -> Option<HeuristicRecommendation> {
    let intent = ctx.intent;
    if intent.career_stage != CareerStage::Student
        || !is_quiet(ctx.signals)
        || intent.tone == Tone::Friendly
    {
        return None;
    }
    Some(change_tone(
        rule,
        Tone::Friendly,
        "A friendly tone reads better for students without much recent public activity.",
    ))
}

fn confident_for_popular_work(
    rule: &'static str,
    ctx: &RuleContext<'_>,
) -> Option<HeuristicRecommendation> {
    let signals = ctx.signals?;
    if signals.total_stars < CONFIDENT_TOTAL_STARS
        || !signals.has_recent_activity
        || !matches!(ctx.intent.tone, Tone::Minimal | Tone::Friendly)
    {
        return None;
    }
    Some(change_tone(
        rule,
        Tone::Confident,
        format!(
            "Your repositories have {} stars in total and recent activity; a confident tone \
             matches that track record.",
            signals.total_stars
        ),
    ))
}

fn friendly_for_open_source(
    rule: &'static str,
    ctx: &RuleContext<'_>,
) -> Option<HeuristicRecommendation> {
    if ctx.intent.goal != Goal::OpenSource || ctx.intent.tone != Tone::Minimal {
        return None;
    }
    Some(change_tone(
        rule,
        Tone::Friendly,
        "Open-source profiles attract contributors with a welcoming tone.",
    ))
}

fn founder_for_founders(
    rule: &'static str,
    ctx: &RuleContext<'_>,
) -> Option<HeuristicRecommendation> {
    if ctx.intent.career_stage != CareerStage::Founder || ctx.intent.tone == Tone::Founder {
        return None;
    }
    Some(change_tone(
        rule,
        Tone::Founder,
        "You described yourself as a founder; the founder tone is written for that audience.",
    ))
}

fn confident_for_job_seekers(
    rule: &'static str,
    ctx: &RuleContext<'_>,
) -> Option<HeuristicRecommendation> {
    let intent = ctx.intent;
    if intent.goal != Goal::Job
        || intent.career_stage != CareerStage::Professional
        || intent.tone == Tone::Confident
    {
        return None;
    }
    Some(change_tone(
        rule,
        Tone::Confident,
        "Recruiters respond to a confident tone from experienced professionals.",
    ))
}

// ============================================================================
// Warning rules
// ============================================================================

fn warning(rule: &'static str, message: &str, explanation: &str) -> HeuristicRecommendation {
    recommendation(rule, RecommendationKind::Warning, message, explanation, None)
}

fn warn_no_recent_activity(
    rule: &'static str,
    ctx: &RuleContext<'_>,
) -> Option<HeuristicRecommendation> {
    let signals = ctx.signals?;
    (signals.repo_count > 0 && !signals.has_recent_activity).then(|| {
        warning(
            rule,
            "No recent public activity",
            "None of your repositories were updated in the last 180 days.",
        )
    })
}

fn warn_mostly_forks(
    rule: &'static str,
    ctx: &RuleContext<'_>,
) -> Option<HeuristicRecommendation> {
    let signals = ctx.signals?;
    (signals.fork_ratio > HIGH_FORK_RATIO && signals.repo_count > 2).then(|| {
        warning(
            rule,
            "Most of your repositories are forks",
            "More than 70% of your public repositories are forks, which can hide your \
             original work.",
        )
    })
}

fn warn_no_stars(rule: &'static str, ctx: &RuleContext<'_>) -> Option<HeuristicRecommendation> {
    let signals = ctx.signals?;
    (signals.total_stars == 0 && signals.repo_count > 0).then(|| {
        warning(
            rule,
            "Your repositories have no stars yet",
            "Lead with impact statements rather than popularity.",
        )
    })
}

fn warn_few_repositories(
    rule: &'static str,
    ctx: &RuleContext<'_>,
) -> Option<HeuristicRecommendation> {
    let signals = ctx.signals?;
    (signals.repo_count > 0 && signals.repo_count < FEW_REPOSITORIES).then(|| {
        warning(
            rule,
            "Only a few public repositories",
            "With fewer than 3 presentable repositories, consider describing work that is \
             not public.",
        )
    })
}

fn warn_missing_role(
    rule: &'static str,
    ctx: &RuleContext<'_>,
) -> Option<HeuristicRecommendation> {
    ctx.intent.role.trim().is_empty().then(|| {
        warning(
            rule,
            "Add a role",
            "Your role is empty; readers look for it first.",
        )
    })
}

fn warn_missing_name(
    rule: &'static str,
    ctx: &RuleContext<'_>,
) -> Option<HeuristicRecommendation> {
    let name = ctx.intent.display_name.trim().to_lowercase();
    let missing = name.is_empty() || PLACEHOLDER_NAMES.contains(&name.as_str());
    missing.then(|| {
        warning(
            rule,
            "Set your display name",
            "Your display name is empty or still a placeholder.",
        )
    })
}
