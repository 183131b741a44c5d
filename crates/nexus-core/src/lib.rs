//! nexus-core: content store, admin surface, chat pipeline, and contact
//! relay for the Nexus portfolio site.
//!
//! The gateway binary composes these pieces; nothing here reaches ambient
//! global state. The [`provider::ContentProvider`] owns the single
//! [`content::ContentStore`] per session and hands out explicit handles.

pub mod admin;
pub mod chat;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod profile;
pub mod provider;

// Content: records, defaults, and the versioned store
pub use content::{
    default_experience, default_projects, default_skills, skill_id_from_name, ContentStore,
    Experience, Project, ProjectCategory, Skill, SkillCategory, CONTENT_VERSION,
    SKILL_LEVEL_MAX,
};

// Composition root
pub use provider::ContentProvider;

// Admin surface behind the novelty gate
pub use admin::{split_technologies, AdminGate, AdminPanel, ProjectDraft, ResetToken};

// Chat pipeline
pub use chat::{
    build_wire_messages, AbortHandle, ChatBackend, ChatMessage, ChatRole, ChatSession,
    DeltaStream, GroqClient, SseDecoder, WireMessage, WireRole,
};

// Contact relay
pub use contact::{ContactRelay, ContactSubmission, DEFAULT_RELAY_ENDPOINT};

// Configuration
pub use config::{ChatConfig, SiteConfig, UserConfig, DEFAULT_ADMIN_PASSPHRASE};

// Static profile
pub use profile::{profile, Education, Profile, SocialLink, DEV_NAME, DEV_TITLE};

// Errors
pub use error::{ChatError, ContactError, CoreError};
