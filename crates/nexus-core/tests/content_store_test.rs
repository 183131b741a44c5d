//! Integration test: versioned content store: verifies the load cycle
//! (version check, per-collection fallback), mutation operations, and the
//! durable mirror.
//!
//! ## Scenarios
//! 1. Fresh storage loads compiled defaults.
//! 2. Mutations persist across a reopen (simulated page refresh).
//! 3. A stale version tag discards every persisted collection.
//! 4. One malformed collection falls back alone; the others load.
//! 5. add_project then delete_project restores the prior collection.
//! 6. update_project with an unknown id is a silent no-op.
//! 7. reset_data clears the mirror; a reopen yields defaults.
//! 8. Skill levels clamp to [0, 100] on add and update.
//! 9. Skills are addressed by stable id for update and delete.

use nexus_core::content::{
    default_projects, default_skills, ContentStore, Project, ProjectCategory, Skill,
    SkillCategory, CONTENT_VERSION, KEY_DATA_VERSION, KEY_SKILLS,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn sample_project(id: &str) -> Project {
    Project {
        id: id.to_string(),
        title: "Telemetry Dashboard".to_string(),
        description: "Realtime metrics panel.".to_string(),
        technologies: vec!["Rust".to_string(), "Axum".to_string()],
        image_url: "/images/telemetry.png".to_string(),
        link: "https://example.com/telemetry".to_string(),
        video_url: None,
        category: ProjectCategory::Tool,
        featured: false,
        coming_soon: false,
    }
}

fn sample_skill(id: &str, level: u8) -> Skill {
    Skill {
        id: id.to_string(),
        name: "Kubernetes".to_string(),
        level,
        category: SkillCategory::DevOpsTools,
    }
}

// ===========================================================================
// Test 1: Fresh storage loads compiled defaults
// ===========================================================================

#[test]
fn fresh_storage_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContentStore::open(dir.path().join("content")).unwrap();
    assert_eq!(store.projects(), default_projects());
    assert_eq!(store.skills(), default_skills());
    assert_eq!(store.experience().len(), 2);
    assert_eq!(store.stored_version().as_deref(), Some(CONTENT_VERSION));
}

// ===========================================================================
// Test 2: Mutations persist across a reopen
// ===========================================================================

#[test]
fn mutations_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content");

    let store = ContentStore::open(&path).unwrap();
    store.add_project(sample_project("custom-1"));
    let mut skill = store.skills()[0].clone();
    skill.level = 42;
    store.update_skill(skill.clone());
    drop(store);

    let reopened = ContentStore::open(&path).unwrap();
    assert_eq!(reopened.projects()[0].id, "custom-1");
    let found = reopened
        .skills()
        .into_iter()
        .find(|s| s.id == skill.id)
        .unwrap();
    assert_eq!(found.level, 42);
}

// ===========================================================================
// Test 3: Stale version tag discards persisted collections
// ===========================================================================

#[test]
fn version_mismatch_discards_persisted_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content");

    let store = ContentStore::open(&path).unwrap();
    store.add_project(sample_project("custom-1"));
    drop(store);

    // Simulate a deployment that shipped under an older content version.
    let db = sled::open(&path).unwrap();
    db.insert(KEY_DATA_VERSION, "2020-01-01-0").unwrap();
    db.flush().unwrap();
    drop(db);

    let reopened = ContentStore::open(&path).unwrap();
    assert_eq!(reopened.projects(), default_projects());
    assert_eq!(reopened.skills(), default_skills());
    // The tag is brought forward on load.
    assert_eq!(reopened.stored_version().as_deref(), Some(CONTENT_VERSION));
}

// ===========================================================================
// Test 4: One malformed collection falls back alone
// ===========================================================================

#[test]
fn malformed_collection_falls_back_per_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content");

    let store = ContentStore::open(&path).unwrap();
    store.add_project(sample_project("kept-1"));
    drop(store);

    let db = sled::open(&path).unwrap();
    db.insert(KEY_SKILLS, &b"{definitely not json"[..]).unwrap();
    db.flush().unwrap();
    drop(db);

    let reopened = ContentStore::open(&path).unwrap();
    // Skills fell back to defaults, projects kept the persisted edit.
    assert_eq!(reopened.skills(), default_skills());
    assert_eq!(reopened.projects()[0].id, "kept-1");
}

// ===========================================================================
// Test 5: add then delete restores the prior collection
// ===========================================================================

#[test]
fn add_then_delete_project_roundtrips() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContentStore::open(dir.path().join("content")).unwrap();

    let before = store.projects();
    store.add_project(sample_project("ephemeral"));
    assert_eq!(store.projects().len(), before.len() + 1);
    store.delete_project("ephemeral");
    assert_eq!(store.projects(), before);
}

// ===========================================================================
// Test 6: update with unknown id is a silent no-op
// ===========================================================================

#[test]
fn update_unknown_project_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContentStore::open(dir.path().join("content")).unwrap();

    let before = store.projects();
    store.update_project(sample_project("no-such-id"));
    assert_eq!(store.projects(), before);
}

// ===========================================================================
// Test 7: reset clears the mirror entirely
// ===========================================================================

#[test]
fn reset_clears_mirror_and_reload_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content");

    let store = ContentStore::open(&path).unwrap();
    store.add_project(sample_project("custom-1"));
    store.delete_skill(&default_skills()[0].id);
    store.reset_data();
    assert_eq!(store.projects(), default_projects());
    assert_eq!(store.skills(), default_skills());
    drop(store);

    // Mirror was cleared wholesale, version tag included.
    let db = sled::open(&path).unwrap();
    assert!(db.get(KEY_DATA_VERSION).unwrap().is_none());
    drop(db);

    let reopened = ContentStore::open(&path).unwrap();
    assert_eq!(reopened.projects(), default_projects());
}

// ===========================================================================
// Test 8: skill levels clamp on add and update
// ===========================================================================

#[test]
fn skill_levels_clamp_to_valid_range() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContentStore::open(dir.path().join("content")).unwrap();

    store.add_skill(sample_skill("k8s", 200));
    let added = store.skills().into_iter().find(|s| s.id == "k8s").unwrap();
    assert_eq!(added.level, 100);

    store.update_skill(sample_skill("k8s", 180));
    let updated = store.skills().into_iter().find(|s| s.id == "k8s").unwrap();
    assert_eq!(updated.level, 100);
}

// ===========================================================================
// Test 9: skills are addressed by stable id
// ===========================================================================

#[test]
fn skills_update_and_delete_by_id() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContentStore::open(dir.path().join("content")).unwrap();

    store.add_skill(sample_skill("k8s", 60));
    let mut edited = sample_skill("k8s", 75);
    edited.name = "Kubernetes / Helm".to_string();
    store.update_skill(edited);

    let found = store.skills().into_iter().find(|s| s.id == "k8s").unwrap();
    assert_eq!(found.name, "Kubernetes / Helm");
    assert_eq!(found.level, 75);

    // Unknown id: silent no-op.
    let before = store.skills();
    store.update_skill(sample_skill("missing", 10));
    assert_eq!(store.skills(), before);

    store.delete_skill("k8s");
    assert!(store.skills().into_iter().all(|s| s.id != "k8s"));

    // A blank id gets a fresh UUID on insert.
    store.add_skill(sample_skill("", 50));
    assert!(store.skills().into_iter().all(|s| !s.id.is_empty()));
}
