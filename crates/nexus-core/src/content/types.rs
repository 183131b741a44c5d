//! Content records: projects, skills, and experience entries.
//!
//! Serialized field names follow the original site's wire shape (`imageUrl`,
//! `comingSoon`, display-string category values) so a persisted mirror from a
//! previous deployment round-trips unchanged.

use serde::{Deserialize, Serialize};

/// Project category shown as a filter chip on the projects view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectCategory {
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "Web App")]
    WebApp,
    #[default]
    Software,
    Tool,
}

impl ProjectCategory {
    /// Display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ai => "AI",
            Self::WebApp => "Web App",
            Self::Software => "Software",
            Self::Tool => "Tool",
        }
    }
}

/// One portfolio project. `id` uniquely identifies the record within the
/// collection; callers generate it (Unix-millisecond strings in practice).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: String,
    pub link: String,
    /// Optional teaser video. Not all records carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub category: ProjectCategory,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub coming_soon: bool,
}

/// Skill category row in the skills matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Languages,
    #[serde(rename = "Web Development")]
    WebDevelopment,
    Database,
    #[serde(rename = "DevOps & Tools")]
    DevOpsTools,
    #[serde(rename = "AI & ML")]
    AiMl,
}

impl SkillCategory {
    /// All categories in matrix display order.
    pub const ALL: [Self; 5] = [
        Self::Languages,
        Self::WebDevelopment,
        Self::Database,
        Self::DevOpsTools,
        Self::AiMl,
    ];

    /// Display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Languages => "Languages",
            Self::WebDevelopment => "Web Development",
            Self::Database => "Database",
            Self::DevOpsTools => "DevOps & Tools",
            Self::AiMl => "AI & ML",
        }
    }
}

/// Proficiency ceiling for [`Skill::level`].
pub const SKILL_LEVEL_MAX: u8 = 100;

/// One skill in the matrix. Skills carry a stable unique `id` so edits and
/// deletes address a record, not a position in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Stable identifier. Compiled defaults use a slug of the name; records
    /// created through the admin surface get a fresh UUID.
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Proficiency percentage, kept within 0–100 by the store.
    pub level: u8,
    pub category: SkillCategory,
}

impl Skill {
    /// Returns a copy with the level clamped to [0, `SKILL_LEVEL_MAX`].
    pub fn clamped(mut self) -> Self {
        self.level = self.level.min(SKILL_LEVEL_MAX);
        self
    }
}

/// Deterministic id for a skill name: lowercase, runs of non-alphanumerics
/// collapsed to a single dash. `"JavaScript (ES6+)"` becomes `"javascript-es6"`.
pub fn skill_id_from_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

/// One timeline entry on the experience view. Read-only: the store exposes
/// the collection but there is no admin mutation surface for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    /// Free-form display string (e.g. "July 2025"), not a structured range.
    pub period: String,
    pub description: String,
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_serializes_with_original_field_names() {
        let project = Project {
            id: "1".into(),
            title: "T".into(),
            description: "D".into(),
            technologies: vec!["Rust".into()],
            image_url: "/images/t.png".into(),
            link: "#".into(),
            video_url: None,
            category: ProjectCategory::WebApp,
            featured: true,
            coming_soon: false,
        };
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["imageUrl"], "/images/t.png");
        assert_eq!(value["comingSoon"], false);
        assert_eq!(value["category"], "Web App");
        assert!(value.get("videoUrl").is_none());
    }

    #[test]
    fn skill_category_labels_match_serialized_form() {
        for category in SkillCategory::ALL {
            let serialized = serde_json::to_value(category).unwrap();
            assert_eq!(serialized, category.label());
        }
    }

    #[test]
    fn skill_id_slugs() {
        assert_eq!(skill_id_from_name("JavaScript (ES6+)"), "javascript-es6");
        assert_eq!(skill_id_from_name("React / Next.js"), "react-next-js");
        assert_eq!(skill_id_from_name("C"), "c");
        assert_eq!(skill_id_from_name("DevOps & Tools"), "devops-tools");
    }

    #[test]
    fn clamped_caps_level() {
        let skill = Skill {
            id: "x".into(),
            name: "X".into(),
            level: 250,
            category: SkillCategory::Languages,
        };
        assert_eq!(skill.clamped().level, 100);
    }
}
