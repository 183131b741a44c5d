//! Admin mutation surface behind the shared-secret gate.
//!
//! The gate is a UX novelty, not an access-control boundary: one static
//! passphrase, no rate limiting, no lockout, no per-user distinction.
//! Nothing security-sensitive lives behind it.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::content::{ContentStore, Project, ProjectCategory, Skill, SkillCategory};
use crate::error::CoreError;

/// Name of the placeholder record appended by [`AdminPanel::add_placeholder_skill`].
const PLACEHOLDER_SKILL_NAME: &str = "New Skill";

/// Compares unlock attempts against the configured passphrase and hands out
/// the mutation surface on a match.
pub struct AdminGate {
    passphrase: String,
}

impl AdminGate {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }

    /// Returns the mutation surface when `input` matches the passphrase.
    /// A failed attempt returns `None` and mutates nothing.
    pub fn unlock(&self, input: &str, store: Arc<ContentStore>) -> Option<AdminPanel> {
        if input == self.passphrase {
            info!("admin gate unlocked");
            Some(AdminPanel::new(store))
        } else {
            info!("admin gate rejected an unlock attempt");
            None
        }
    }
}

/// Editable form state for creating or editing a project. Technologies are
/// entered as one comma-separated string and split on save.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    /// Comma-separated technology tags, e.g. `"React, Node, CSS"`.
    pub technologies: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub video_url: Option<String>,
    pub category: ProjectCategory,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub coming_soon: bool,
}

impl ProjectDraft {
    fn into_project(self, id: String) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            technologies: split_technologies(&self.technologies),
            image_url: self.image_url,
            link: self.link,
            video_url: self.video_url,
            category: self.category,
            featured: self.featured,
            coming_soon: self.coming_soon,
        }
    }
}

/// Splits a comma-separated tag string, trimming each entry and dropping
/// empty segments.
pub fn split_technologies(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// One-shot token guarding the destructive reset. Issued by
/// [`AdminPanel::request_reset`] and consumed by [`AdminPanel::confirm_reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetToken(Uuid);

impl ResetToken {
    /// Parses a token previously rendered with `to_string`.
    pub fn parse(input: &str) -> Option<Self> {
        Uuid::parse_str(input.trim()).ok().map(Self)
    }
}

impl std::fmt::Display for ResetToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The unlocked mutation surface. Lives for the rest of the session; a full
/// restart locks the gate again.
pub struct AdminPanel {
    store: Arc<ContentStore>,
    pending_reset: Mutex<Option<Uuid>>,
}

impl AdminPanel {
    fn new(store: Arc<ContentStore>) -> Self {
        Self {
            store,
            pending_reset: Mutex::new(None),
        }
    }

    /// Creates a project from the draft with a freshly generated
    /// Unix-millisecond id and prepends it to the catalog.
    pub fn create_project(&self, draft: ProjectDraft) -> Project {
        let id = chrono::Utc::now().timestamp_millis().to_string();
        let project = draft.into_project(id);
        self.store.add_project(project.clone());
        project
    }

    /// Rebuilds the record under its existing id. Unknown ids are a silent
    /// no-op, matching the store contract.
    pub fn edit_project(&self, id: &str, draft: ProjectDraft) -> Project {
        let project = draft.into_project(id.to_string());
        self.store.update_project(project.clone());
        project
    }

    /// Immediate delete, no confirmation step.
    pub fn remove_project(&self, id: &str) {
        self.store.delete_project(id);
    }

    /// Appends the fixed placeholder skill for the admin to edit in place,
    /// and returns it (id included) so the caller can address it.
    pub fn add_placeholder_skill(&self) -> Skill {
        let skill = Skill {
            id: Uuid::new_v4().to_string(),
            name: PLACEHOLDER_SKILL_NAME.to_string(),
            level: 50,
            category: SkillCategory::WebDevelopment,
        };
        self.store.add_skill(skill.clone());
        skill
    }

    /// Replaces the skill record with the same id.
    pub fn edit_skill(&self, skill: Skill) {
        self.store.update_skill(skill);
    }

    /// Immediate delete, no confirmation step.
    pub fn remove_skill(&self, id: &str) {
        self.store.delete_skill(id);
    }

    /// First half of the destructive reset: issues the confirmation token.
    /// Requesting again invalidates any earlier token.
    pub fn request_reset(&self) -> ResetToken {
        let token = Uuid::new_v4();
        *self.lock_pending() = Some(token);
        ResetToken(token)
    }

    /// Second half: resets to compiled defaults only when `token` is the one
    /// most recently issued. Stale or foreign tokens leave content untouched.
    pub fn confirm_reset(&self, token: &ResetToken) -> Result<(), CoreError> {
        let mut pending = self.lock_pending();
        if pending.take() == Some(token.0) {
            drop(pending);
            self.store.reset_data();
            Ok(())
        } else {
            Err(CoreError::ResetNotConfirmed)
        }
    }

    fn lock_pending(&self) -> std::sync::MutexGuard<'_, Option<Uuid>> {
        self.pending_reset
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn technologies_split_and_trim() {
        assert_eq!(
            split_technologies(" React, Node ,,CSS ,"),
            vec!["React", "Node", "CSS"]
        );
        assert!(split_technologies("   ").is_empty());
    }
}
