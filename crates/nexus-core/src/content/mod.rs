//! Editable site content: record types, compiled defaults, and the
//! versioned sled-backed store.

pub mod defaults;
pub mod store;
pub mod types;

pub use defaults::{default_experience, default_projects, default_skills, CONTENT_VERSION};
pub use store::{
    ContentStore, KEY_DATA_VERSION, KEY_EXPERIENCE, KEY_PROJECTS, KEY_SKILLS,
};
pub use types::{
    skill_id_from_name, Experience, Project, ProjectCategory, Skill, SkillCategory,
    SKILL_LEVEL_MAX,
};
