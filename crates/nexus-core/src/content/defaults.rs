//! Compiled-in default content and the content version tag.
//!
//! The version tag is the cache-invalidation lever: bump it when shipping new
//! default content and every stale persisted mirror is discarded wholesale on
//! the next load.

use once_cell::sync::Lazy;

use super::types::{
    skill_id_from_name, Experience, Project, ProjectCategory, Skill, SkillCategory,
};

/// Current content version. Persisted mirrors tagged with anything else are
/// ignored and replaced with these defaults.
pub const CONTENT_VERSION: &str = "2025-12-13-2";

fn project(
    id: &str,
    title: &str,
    description: &str,
    technologies: &[&str],
    image_url: &str,
    link: &str,
    category: ProjectCategory,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        image_url: image_url.to_string(),
        link: link.to_string(),
        video_url: None,
        category,
        featured: false,
        coming_soon: false,
    }
}

static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        Project {
            video_url: Some("/videos/xai-expenses-teaser.mp4".to_string()),
            featured: true,
            coming_soon: true,
            ..project(
                "7",
                "EconoMind - AI Powered Expenses Tracker & Personal Shopping Assistant",
                "COMING SOON: An XAI-powered assistant that tracks expenses, learns your spending patterns, and helps you shop smarter. It compares product prices and reviews across multiple platforms to recommend the best value, while also explaining \"why\" with clear, transparent insights. Under active development — teaser video below.",
                &["React", "Node", "Python", "CSS", "AI Integration", "TensorFlow"],
                "/images/economind.jpg",
                "#",
                ProjectCategory::Ai,
            )
        },
        Project {
            featured: true,
            ..project(
                "1",
                "Face Recognition Attendance system",
                "Developed a facial recognition-based attendance system that accurately records student attendance using their facial features.",
                &["Python", "OpenCV", "SQLite"],
                "/images/Attendance.JPG",
                "https://youtu.be/zxWtZIFV2-U?si=a2Fitm5zYI5f07B5",
                ProjectCategory::Ai,
            )
        },
        Project {
            featured: true,
            ..project(
                "2",
                "Smart Screen Controller",
                "Smart Classroom Controller – Control slides and zoom using hand gestures and voice commands for seamless, touch-free teaching.",
                &["Python", "MediaPipe", "SpeechRecognition"],
                "/images/smart-controller.jpeg",
                "https://youtu.be/0fmJsbo6oIk?si=pGdZCy7MdWNg9LZR",
                ProjectCategory::Ai,
            )
        },
        project(
            "3",
            "EliteStyle",
            "A fully functional eCommerce platform built with PHP, featuring dynamic product and category management, secure cart and checkout functionality, and a professionally redesigned frontend for a modern shopping experience. The system supports real-time product listings, category filtering, and seamless integration between the frontend UI and backend logic.",
            &["HTML", "CSS", "Javascript", "PHP", "MySQL"],
            "/images/elitestyle.png",
            "https://youtu.be/G4PxR9NKixY?si=OOmlCXY34jJmIVzw",
            ProjectCategory::WebApp,
        ),
        project(
            "4",
            "Visitor Management System",
            "Designed and implemented an automated visitor check-in/check-out system, improving facility security and reducing manual work by 60%.",
            &["Java", "JavaFX", "SQLite"],
            "/images/visitor-management.jpg",
            "#",
            ProjectCategory::Software,
        ),
        Project {
            coming_soon: true,
            ..project(
                "5",
                "AI-Powered Market Prediction Tool",
                "Developing an AI-powered tool to predict market trends using machine learning algorithms. The tool will provide actionable insights through data visualization.",
                &["Python", "TensorFlow", "Yahoo Finance API"],
                "/images/market-prediction.jpg",
                "#",
                ProjectCategory::Tool,
            )
        },
        project(
            "6",
            "SwiftInsureX",
            "Built a web-based system for managing insurance policies, claims, and customer interactions with in-built AI ChatBot Assistance. Integrates WhatsApp reminders for payments and renewals.",
            &["HTML", "CSS", "Javascript", "PHP", "MySQL", "DBMS"],
            "/images/insurance.png",
            "https://swiftinsurex.wuaze.com/",
            ProjectCategory::Software,
        ),
        Project {
            featured: true,
            ..project(
                "8",
                "EconoShop - Sustainable E-Commerce Platform",
                "A modern Sustainable E-Commerce Platform promoting eco-friendly shopping and ethical trade. Features include green product listings, carbon footprint tracking, AI-based eco recommendations, and reward points for sustainable choices — merging convenience with environmental responsibility.",
                &["React", "Node", "CSS", "AI Integration"],
                "/images/ecoshop.png",
                "https://youtu.be/jN5SsDSDm7c?si=b6yGlqfGVMVbEhFZ",
                ProjectCategory::WebApp,
            )
        },
        project(
            "9",
            "DeepTraceX",
            "Built a web-application that lets you check whether your image is AI generated or not.",
            &["TypeScript", "React", "CSS"],
            "/images/DeepTraceX.jpeg",
            "https://youtu.be/69ofbnRJJQI?si=XrOIwaVkXxXUxW1z",
            ProjectCategory::WebApp,
        ),
    ]
});

fn skill(name: &str, level: u8, category: SkillCategory) -> Skill {
    Skill {
        id: skill_id_from_name(name),
        name: name.to_string(),
        level,
        category,
    }
}

static SKILLS: Lazy<Vec<Skill>> = Lazy::new(|| {
    use SkillCategory::*;
    vec![
        skill("JavaScript (ES6+)", 85, Languages),
        skill("TypeScript", 65, Languages),
        skill("Python", 90, Languages),
        skill("Java", 90, Languages),
        skill("SQL", 85, Languages),
        skill("C#", 90, Languages),
        skill("C", 95, Languages),
        skill("React / Next.js", 75, WebDevelopment),
        skill("Node.js", 80, WebDevelopment),
        skill("Tailwind CSS", 90, WebDevelopment),
        skill("HTML5", 90, WebDevelopment),
        skill("PostgreSQL", 70, Database),
        skill("MongoDB", 75, Database),
        skill("MySQL", 90, Database),
        skill("Docker", 75, DevOpsTools),
        skill("Jupyter Notebook", 90, DevOpsTools),
        skill("Git / GitHub", 95, DevOpsTools),
        skill("VS Code", 95, DevOpsTools),
        skill("Eclipse", 85, DevOpsTools),
        skill("WEKA", 75, DevOpsTools),
        skill("TensorFlow", 75, AiMl),
        skill("Gemini API", 90, AiMl),
        skill("SERP API", 90, AiMl),
        skill("Groq API", 90, AiMl),
        skill("OpenAI API", 88, AiMl),
    ]
});

static EXPERIENCE: Lazy<Vec<Experience>> = Lazy::new(|| {
    vec![
        Experience {
            id: "1".to_string(),
            role: "Web Development Internship".to_string(),
            company: "ElySpace".to_string(),
            period: "July 2025".to_string(),
            description: "Professional experience in designing and developing responsive web applications, with a focus on performance, usability, and modern development practices.".to_string(),
            skills: ["HTML", "CSS", "JavaScript", "MySQL"].iter().map(|s| s.to_string()).collect(),
        },
        Experience {
            id: "2".to_string(),
            role: "PHP and MySQL Internship".to_string(),
            company: "ApexPlanet Software Ltd.".to_string(),
            period: "September 2025".to_string(),
            description: "Worked on end-to-end web application features, integrating PHP logic with MySQL databases while ensuring scalability, security, and best coding practices.".to_string(),
            skills: ["PHP", "MySQL", "SQL", "DBMS", "HTML", "CSS", "Javascript"].iter().map(|s| s.to_string()).collect(),
        },
    ]
});

/// Default project catalog.
pub fn default_projects() -> Vec<Project> {
    PROJECTS.clone()
}

/// Default skills matrix.
pub fn default_skills() -> Vec<Skill> {
    SKILLS.clone()
}

/// Default experience timeline.
pub fn default_experience() -> Vec<Experience> {
    EXPERIENCE.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_project_ids_are_unique() {
        let projects = default_projects();
        let mut ids: Vec<_> = projects.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), projects.len());
    }

    #[test]
    fn default_skill_ids_are_unique_and_in_range() {
        let skills = default_skills();
        let mut ids: Vec<_> = skills.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), skills.len());
        assert!(skills.iter().all(|s| s.level <= 100 && !s.id.is_empty()));
    }
}
