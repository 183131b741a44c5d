//! Sled-backed content store: three collections in memory with a durable
//! JSON mirror, versioned cache invalidation, and atomic mutation operations.
//!
//! | Key                  | Value                          |
//! |----------------------|--------------------------------|
//! | `nexus_data_version` | content version tag (UTF-8)    |
//! | `nexus_projects`     | JSON array of [`Project`]      |
//! | `nexus_skills`       | JSON array of [`Skill`]        |
//! | `nexus_experience`   | JSON array of [`Experience`]   |
//!
//! The persisted copy is a mirror, not a second source of truth: on load it
//! is adopted wholesale per collection or discarded wholesale, never merged
//! field by field.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::defaults::{
    default_experience, default_projects, default_skills, CONTENT_VERSION,
};
use super::types::{Experience, Project, Skill};
use crate::error::CoreError;

/// Storage key for the persisted content version tag.
pub const KEY_DATA_VERSION: &str = "nexus_data_version";
/// Storage key for the persisted project collection.
pub const KEY_PROJECTS: &str = "nexus_projects";
/// Storage key for the persisted skill collection.
pub const KEY_SKILLS: &str = "nexus_skills";
/// Storage key for the persisted experience collection.
pub const KEY_EXPERIENCE: &str = "nexus_experience";

#[derive(Debug, Clone)]
struct Collections {
    projects: Vec<Project>,
    skills: Vec<Skill>,
    experience: Vec<Experience>,
}

/// Single source of truth for editable site content. One instance per
/// session, owned by the [`crate::provider::ContentProvider`].
pub struct ContentStore {
    db: sled::Db,
    inner: RwLock<Collections>,
    /// Set once load completes; mutation-triggered persistence is a no-op
    /// until then.
    ready: AtomicBool,
}

impl ContentStore {
    /// Opens the durable mirror at `path` and runs the load cycle: version
    /// check, per-collection adoption with default fallback, ready mark.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CoreError> {
        let db = sled::open(path)?;

        let stored_version = read_utf8(&db, KEY_DATA_VERSION);
        let version_ok = stored_version.as_deref() == Some(CONTENT_VERSION);
        if !version_ok {
            info!(
                stored = stored_version.as_deref().unwrap_or("<none>"),
                current = CONTENT_VERSION,
                "content version mismatch, discarding persisted collections"
            );
            // Drop the stale collections and bring the tag forward in the
            // same load, so a reopen before the first mutation cannot adopt
            // them under the new tag.
            for key in [KEY_PROJECTS, KEY_SKILLS, KEY_EXPERIENCE] {
                db.remove(key)?;
            }
            db.insert(KEY_DATA_VERSION, CONTENT_VERSION.as_bytes())?;
        }

        let projects = if version_ok {
            load_collection(&db, KEY_PROJECTS).unwrap_or_else(default_projects)
        } else {
            default_projects()
        };
        let skills = if version_ok {
            load_collection(&db, KEY_SKILLS).unwrap_or_else(default_skills)
        } else {
            default_skills()
        };
        let experience = if version_ok {
            load_collection(&db, KEY_EXPERIENCE).unwrap_or_else(default_experience)
        } else {
            default_experience()
        };

        let skills = skills.into_iter().map(normalize_skill).collect();

        let store = Self {
            db,
            inner: RwLock::new(Collections {
                projects,
                skills,
                experience,
            }),
            ready: AtomicBool::new(true),
        };
        Ok(store)
    }

    /// Current content version tag compiled into this build.
    pub fn content_version(&self) -> &'static str {
        CONTENT_VERSION
    }

    /// Version tag currently written in the durable mirror, if any.
    pub fn stored_version(&self) -> Option<String> {
        read_utf8(&self.db, KEY_DATA_VERSION)
    }

    /// Snapshot of the project collection.
    pub fn projects(&self) -> Vec<Project> {
        self.read().projects.clone()
    }

    /// Snapshot of the skill collection.
    pub fn skills(&self) -> Vec<Skill> {
        self.read().skills.clone()
    }

    /// Snapshot of the experience collection.
    pub fn experience(&self) -> Vec<Experience> {
        self.read().experience.clone()
    }

    /// Prepends a project. The caller supplies the id; the store does not
    /// deduplicate.
    pub fn add_project(&self, project: Project) {
        self.write().projects.insert(0, project);
        self.persist();
    }

    /// Replaces the project whose id matches `project.id`. Silent no-op when
    /// no record matches.
    pub fn update_project(&self, project: Project) {
        {
            let mut inner = self.write();
            if let Some(slot) = inner.projects.iter_mut().find(|p| p.id == project.id) {
                *slot = project;
            } else {
                debug!(id = %project.id, "update_project: no matching record");
            }
        }
        self.persist();
    }

    /// Removes every project with the given id.
    pub fn delete_project(&self, id: &str) {
        self.write().projects.retain(|p| p.id != id);
        self.persist();
    }

    /// Appends a skill. A blank id is replaced with a fresh UUID; the level
    /// is clamped to the valid range.
    pub fn add_skill(&self, skill: Skill) {
        self.write().skills.push(normalize_skill(skill));
        self.persist();
    }

    /// Replaces the skill whose id matches `skill.id`. Silent no-op when no
    /// record matches.
    pub fn update_skill(&self, skill: Skill) {
        {
            let mut inner = self.write();
            if let Some(slot) = inner.skills.iter_mut().find(|s| s.id == skill.id) {
                *slot = skill.clamped();
            } else {
                debug!(id = %skill.id, "update_skill: no matching record");
            }
        }
        self.persist();
    }

    /// Removes the skill with the given id.
    pub fn delete_skill(&self, id: &str) {
        self.write().skills.retain(|s| s.id != id);
        self.persist();
    }

    /// Restores all three collections to compiled defaults and clears the
    /// persisted mirror entirely, version tag included. The next load cycle
    /// re-derives from defaults unconditionally.
    pub fn reset_data(&self) {
        {
            let mut inner = self.write();
            inner.projects = default_projects();
            inner.skills = default_skills();
            inner.experience = default_experience();
        }
        for key in [KEY_DATA_VERSION, KEY_PROJECTS, KEY_SKILLS, KEY_EXPERIENCE] {
            if let Err(e) = self.db.remove(key) {
                warn!(key, error = %e, "reset: failed to clear persisted key");
            }
        }
        if let Err(e) = self.db.flush() {
            warn!(error = %e, "reset: flush failed");
        }
        info!("content reset to compiled defaults");
    }

    /// Serializes all three collections plus the version tag into the
    /// durable mirror. Best effort: failures are logged and swallowed, since
    /// loss of persistence is not safety-critical here.
    fn persist(&self) {
        if !self.ready.load(Ordering::Acquire) {
            return;
        }
        if let Err(e) = self.try_persist() {
            warn!(error = %e, "content persist failed, continuing in memory");
        }
    }

    fn try_persist(&self) -> Result<(), CoreError> {
        let snapshot = self.read().clone();
        self.db
            .insert(KEY_DATA_VERSION, CONTENT_VERSION.as_bytes())?;
        put_collection(&self.db, KEY_PROJECTS, &snapshot.projects)?;
        put_collection(&self.db, KEY_SKILLS, &snapshot.skills)?;
        put_collection(&self.db, KEY_EXPERIENCE, &snapshot.experience)?;
        self.db.flush()?;
        Ok(())
    }

    /// Final write-out used by provider shutdown.
    pub(crate) fn flush(&self) -> Result<(), CoreError> {
        self.try_persist()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Collections> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Collections> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn normalize_skill(mut skill: Skill) -> Skill {
    if skill.id.trim().is_empty() {
        skill.id = Uuid::new_v4().to_string();
    }
    skill.clamped()
}

fn read_utf8(db: &sled::Db, key: &str) -> Option<String> {
    match db.get(key) {
        Ok(Some(value)) => Some(String::from_utf8_lossy(&value).into_owned()),
        Ok(None) => None,
        Err(e) => {
            warn!(key, error = %e, "durable storage read failed");
            None
        }
    }
}

/// Reads one collection from the mirror. Absent or malformed values yield
/// `None` so the caller falls back to that collection's defaults; one bad
/// collection never blocks the others.
fn load_collection<T: DeserializeOwned>(db: &sled::Db, key: &str) -> Option<Vec<T>> {
    let raw = match db.get(key) {
        Ok(Some(value)) => value,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "durable storage read failed");
            return None;
        }
    };
    match serde_json::from_slice(&raw) {
        Ok(collection) => Some(collection),
        Err(e) => {
            warn!(key, error = %e, "persisted collection malformed, using defaults");
            None
        }
    }
}

fn put_collection<T: Serialize>(db: &sled::Db, key: &str, value: &[T]) -> Result<(), CoreError> {
    let raw = serde_json::to_vec(value)?;
    db.insert(key, raw)?;
    Ok(())
}
