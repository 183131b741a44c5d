//! Static developer profile: identity, bio, education, and social links.
//! Compiled constants, not store-backed; the hero/about views read these
//! directly.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const DEV_NAME: &str = "Saquib Nazeer";
pub const DEV_TITLE: &str = "Full Stack Developer | AI Enthusiast";
pub const DEV_BIO: &str = "Building the digital future with scalable web architectures and immersive user experiences. Transforming complex problems into elegant, high-performance solutions.";
pub const DEV_EMAIL: &str = "bhatsaakib505@gmail.com";

/// One education entry on the about view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub description: String,
}

/// One social profile link. `icon` names the glyph the frontend renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

/// The full static profile served by `GET /api/v1/profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub education: Vec<Education>,
    pub social_links: Vec<SocialLink>,
}

static PROFILE: Lazy<Profile> = Lazy::new(|| Profile {
    name: DEV_NAME.to_string(),
    title: DEV_TITLE.to_string(),
    bio: DEV_BIO.to_string(),
    email: DEV_EMAIL.to_string(),
    education: vec![
        Education {
            degree: "Bachelors in Computer Science and Engineering".to_string(),
            institution: "M.Kumarasamy College of Engineering  |  Anna University".to_string(),
            year: "2013 - 2027".to_string(),
            description: "Currently Persuing my under-graduate degree in Computer Science and Engineering. Focused on Algorithms, Data Structures, Software Engineering, App Development, Operating Systems and Database Management Systems.".to_string(),
        },
        Education {
            degree: "Blockchain Certification".to_string(),
            institution: "IIT Kharagpur".to_string(),
            year: "2024".to_string(),
            description: "Specialized training in blockchain technology, covering cryptographic principles, consensus mechanisms, smart contracts, and real-world applications.".to_string(),
        },
        Education {
            degree: "Responsible and Safe AI Systems - ELITE Certification".to_string(),
            institution: "IIIT Hyderabad".to_string(),
            year: "2025".to_string(),
            description: "Specialized training in developing safe, transparent, fair, and accountable AI systems aligned with ethical and regulatory standards.".to_string(),
        },
    ],
    social_links: vec![
        SocialLink {
            name: "LinkedIn".to_string(),
            url: "https://www.linkedin.com/in/saquib-nazeer-2b3043326?trk=contact-info".to_string(),
            icon: "linkedin".to_string(),
        },
        SocialLink {
            name: "GitHub".to_string(),
            url: "https://github.com/SaquibNazeer01".to_string(),
            icon: "github".to_string(),
        },
        SocialLink {
            name: "YouTube".to_string(),
            url: "https://www.youtube.com/@Bhat_Saakib019".to_string(),
            icon: "youtube".to_string(),
        },
        SocialLink {
            name: "LeetCode".to_string(),
            url: "https://leetcode.com/bhat_saakib019".to_string(),
            icon: "leetcode".to_string(),
        },
        SocialLink {
            name: "HackerRank".to_string(),
            url: "https://hackerrank.com/DOMAINASTRILL".to_string(),
            icon: "hackerrank".to_string(),
        },
    ],
});

/// Returns the compiled profile.
pub fn profile() -> &'static Profile {
    &PROFILE
}
