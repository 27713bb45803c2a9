use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Career stage declared by the person
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CareerStage {
    Student,
    Professional,
    Founder,
    OpenSource,
}

/// What the profile is primarily meant to achieve
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Job,
    OpenSource,
    Branding,
}

/// Writing tone of the rendered profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Minimal,
    Confident,
    Friendly,
    Founder,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmojiDensity {
    None,
    #[default]
    Light,
    Heavy,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Minimal => "minimal",
            Tone::Confident => "confident",
            Tone::Friendly => "friendly",
            Tone::Founder => "founder",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "minimal" => Some(Tone::Minimal),
            "confident" => Some(Tone::Confident),
            "friendly" => Some(Tone::Friendly),
            "founder" => Some(Tone::Founder),
            _ => None,
        }
    }
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Job => "job",
            Goal::OpenSource => "open_source",
            Goal::Branding => "branding",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "job" => Some(Goal::Job),
            "open_source" => Some(Goal::OpenSource),
            "branding" => Some(Goal::Branding),
            _ => None,
        }
    }
}

/// A project the person wants to showcase
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeaturedProject {
    pub name: String,
    /// One-line impact statement
    pub impact: String,
}

/// Which profile sections are rendered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionVisibility {
    pub what_i_do: bool,
    pub tech_stack: bool,
    pub projects: bool,
    pub goal: bool,
    pub connect: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self {
            what_i_do: true,
            tech_stack: true,
            projects: true,
            goal: true,
            connect: true,
        }
    }
}

/// The person's declared self-description
///
/// Owned by the caller. The engine only reads it; new versions are produced
/// by the resolver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileIntent {
    pub display_name: String,
    pub handle: String,
    pub career_stage: CareerStage,
    pub role: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub projects: Vec<FeaturedProject>,
    pub goal: Goal,
    pub tone: Tone,
    #[serde(default)]
    pub emoji_density: EmojiDensity,
    #[serde(default)]
    pub sections: SectionVisibility,
}

impl Default for ProfileIntent {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileIntent {
    /// Creates an empty intent with every section visible
    pub fn new() -> Self {
        Self {
            display_name: String::new(),
            handle: String::new(),
            career_stage: CareerStage::Professional,
            role: String::new(),
            tech_stack: Vec::new(),
            projects: Vec::new(),
            goal: Goal::Job,
            tone: Tone::Minimal,
            emoji_density: EmojiDensity::default(),
            sections: SectionVisibility::default(),
        }
    }

    /// Rebuilds the keyed lists so technologies and project names are unique
    ///
    /// Duplicate technologies keep their first spelling; duplicate projects
    /// keep their first position and last entry.
    pub fn normalized(mut self) -> Self {
        let technologies = std::mem::take(&mut self.tech_stack);
        let projects = std::mem::take(&mut self.projects);
        self.merge_technologies(technologies);
        for project in projects {
            self.upsert_project(project);
        }
        self
    }

    /// Sets a featured project, replacing any existing entry with the same name
    pub fn upsert_project(&mut self, project: FeaturedProject) {
        let slot = {
            let index: HashMap<&str, usize> = self
                .projects
                .iter()
                .enumerate()
                .map(|(i, p)| (p.name.as_str(), i))
                .collect();
            index.get(project.name.as_str()).copied()
        };

        match slot {
            Some(slot) => self.projects[slot] = project,
            None => self.projects.push(project),
        }
    }

    /// Unions technologies into the declared stack
    ///
    /// Duplicates are detected case-insensitively; the first spelling wins.
    pub fn merge_technologies<I, S>(&mut self, technologies: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = self
            .tech_stack
            .iter()
            .map(|t| technology_key(t))
            .collect();

        for tech in technologies {
            let tech = tech.as_ref().trim();
            if tech.is_empty() {
                continue;
            }
            if seen.insert(technology_key(tech)) {
                self.tech_stack.push(tech.to_string());
            }
        }
    }

    /// Sets a section visibility flag
    pub fn set_section(&mut self, section: Section, visible: bool) {
        match section {
            Section::WhatIDo => self.sections.what_i_do = visible,
            Section::TechStack => self.sections.tech_stack = visible,
            Section::Projects => self.sections.projects = visible,
            Section::Goal => self.sections.goal = visible,
            Section::Connect => self.sections.connect = visible,
        }
    }
}

/// Toggleable profile section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    WhatIDo,
    TechStack,
    Projects,
    Goal,
    Connect,
}

fn technology_key(tech: &str) -> String {
    tech.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str, impact: &str) -> FeaturedProject {
        FeaturedProject {
            name: name.to_string(),
            impact: impact.to_string(),
        }
    }

    #[test]
    fn test_new_intent() {
        let intent = ProfileIntent::new();
        assert!(intent.tech_stack.is_empty());
        assert!(intent.projects.is_empty());
        assert!(intent.sections.projects);
    }

    #[test]
    fn test_upsert_project_replaces_by_name() {
        let mut intent = ProfileIntent::new();
        intent.upsert_project(project("occam", "first"));
        intent.upsert_project(project("atlas", "second"));
        intent.upsert_project(project("occam", "rewritten"));

        assert_eq!(intent.projects.len(), 2);
        assert_eq!(intent.projects[0], project("occam", "rewritten"));
        assert_eq!(intent.projects[1].name, "atlas");
    }

    #[test]
    fn test_merge_technologies_dedupes_case_insensitively() {
        let mut intent = ProfileIntent::new();
        intent.tech_stack = vec!["Go".to_string()];
        intent.merge_technologies(["go", "Rust", "rust", " ", "TypeScript"]);
        assert_eq!(intent.tech_stack, vec!["Go", "Rust", "TypeScript"]);
    }

    #[test]
    fn test_normalized_merges_duplicates() {
        let mut intent = ProfileIntent::new();
        intent.tech_stack = vec!["Go".to_string(), "go".to_string(), "Rust".to_string()];
        intent.projects = vec![project("x", "old"), project("y", "kept"), project("x", "new")];

        let intent = intent.normalized();
        assert_eq!(intent.tech_stack, vec!["Go", "Rust"]);
        assert_eq!(intent.projects, vec![project("x", "new"), project("y", "kept")]);

        let mut upserted = intent.clone();
        upserted.upsert_project(project("x", "newest"));
        assert_eq!(upserted.projects.len(), 2);
        assert_eq!(upserted.projects[0], project("x", "newest"));
    }

    #[test]
    fn test_set_section() {
        let mut intent = ProfileIntent::new();
        intent.set_section(Section::Connect, false);
        assert!(!intent.sections.connect);
        intent.set_section(Section::Connect, true);
        assert!(intent.sections.connect);
    }

    #[test]
    fn test_section_visibility_serializes_snake_case() {
        let json = serde_json::to_value(SectionVisibility::default()).unwrap();
        assert_eq!(json["what_i_do"], true);
        assert_eq!(json["tech_stack"], true);
    }

    #[test]
    fn test_tone_and_goal_parse() {
        assert_eq!(Tone::parse("Friendly"), Some(Tone::Friendly));
        assert_eq!(Tone::parse("loud"), None);
        assert_eq!(Goal::parse("open-source"), Some(Goal::OpenSource));
        assert_eq!(Goal::parse(Goal::Branding.as_str()), Some(Goal::Branding));
    }
}
