// Portfolio Content - Static display data
//
// Everything the site shows lives here: profile text, skills, certificates,
// projects, current activities, and social links. One canonical data set is
// compiled in; an alternate set can be loaded from a JSON file.

use crate::error::{PortfolioError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

// ============================================================================
// DATA MODEL
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0-100
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: u32,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
    /// Shown only while the card is expanded
    pub details: String,
    pub credential_link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
}

impl Media {
    pub fn image(url: &str) -> Self {
        Media { kind: MediaKind::Image, url: url.to_string() }
    }

    pub fn video(url: &str) -> Self {
        Media { kind: MediaKind::Video, url: url.to_string() }
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub year: u16,
    pub technologies: Vec<String>,
    pub description: String,
    pub github_url: String,
    pub media: Media,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// Completion, 0-100
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    /// Icon identifier: "mail", "linkedin", "github"
    pub icon: String,
}

/// Free text that is not a list: greeting, biography, contact blurb
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub intro: String,
    pub about: Vec<String>,
    pub contact_blurb: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub certificates: Vec<Certificate>,
    pub projects: Vec<Project>,
    pub activities: Vec<Activity>,
    pub social_links: Vec<SocialLink>,
}

// ============================================================================
// LOADING & VALIDATION
// ============================================================================

impl Content {
    /// Parse and validate a JSON content document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let content: Content = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Load and validate a JSON content file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| PortfolioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            certificates = content.certificates.len(),
            projects = content.projects.len(),
            "loaded content file"
        );
        Ok(content)
    }

    /// Reject data the views cannot display sensibly
    pub fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            return Err(invalid("profile name is empty"));
        }

        for skill in &self.skills {
            if skill.name.trim().is_empty() {
                return Err(invalid("skill with empty name"));
            }
            if skill.level > 100 {
                return Err(invalid(&format!(
                    "skill '{}' has level {} (max 100)",
                    skill.name, skill.level
                )));
            }
        }

        let mut seen = HashSet::new();
        for cert in &self.certificates {
            if cert.title.trim().is_empty() {
                return Err(invalid(&format!("certificate {} has an empty title", cert.id)));
            }
            if !seen.insert(cert.id) {
                return Err(invalid(&format!("duplicate certificate id {}", cert.id)));
            }
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.name.trim().is_empty() {
                return Err(invalid(&format!("project {} has an empty name", project.id)));
            }
            if !seen.insert(project.id) {
                return Err(invalid(&format!("duplicate project id {}", project.id)));
            }
        }

        for activity in &self.activities {
            if activity.title.trim().is_empty() {
                return Err(invalid("activity with empty title"));
            }
            if activity.progress > 100 {
                return Err(invalid(&format!(
                    "activity '{}' has progress {} (max 100)",
                    activity.title, activity.progress
                )));
            }
        }

        Ok(())
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

fn invalid(msg: &str) -> PortfolioError {
    PortfolioError::InvalidContent(msg.to_string())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// CANONICAL DATA SET
// ============================================================================

impl Content {
    pub fn canonical() -> Self {
        Content {
            profile: canonical_profile(),
            skills: canonical_skills(),
            certificates: canonical_certificates(),
            projects: canonical_projects(),
            activities: canonical_activities(),
            social_links: canonical_social_links(),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::canonical()
    }
}

fn canonical_profile() -> Profile {
    Profile {
        name: "Siyabonga Mbuyisa".to_string(),
        headline: "Computer Science Graduate & Software Developer".to_string(),
        intro: "I am passionate about problem solving through code and turning ideas into reality."
            .to_string(),
        about: strings(&[
            "My name is Siyabonga 'Siya' Mbuyisa, and I'm a software developer driven by the \
             belief that software can solve real-world problems and create long-lasting \
             solutions. My goal isn't just to be another developer, but to work on exciting, \
             impactful projects that change people's lives. This is one of the reasons I love \
             coding: it allows me to be part of such meaningful work.",
            "Outside of coding, I'm passionate about sports and maintaining my health and fitness. \
             Soccer is my favorite sport, and I play whenever I get the chance. I also enjoy other \
             sports like rugby from time to time. But if I had to pick a favorite hobby, it would \
             definitely be eating! I love trying new foods and exploring different cuisines, my \
             current favourite meal is pizza with extra cheese.",
            "I consider myself a social person who values spending quality time with family and \
             friends. I also believe networking is a crucial part of personal and professional \
             growth, and I'm always eager to connect with others and learn from their experiences. \
             If you share similar interests or just want to chat, feel free to reach out!",
        ]),
        contact_blurb: "I'm always open to discussing new projects, creative ideas, or \
                        opportunities to be part of your vision."
            .to_string(),
    }
}

fn canonical_skills() -> Vec<Skill> {
    [
        ("JavaScript", 90),
        ("React", 85),
        ("Python", 80),
        ("Java", 70),
        ("SQL", 85),
        ("AWS", 60),
        ("Git", 80),
        ("HTML & CSS", 80),
        ("Supabase", 75),
        ("Django", 60),
        ("C++ / C#", 75),
    ]
    .iter()
    .map(|(name, level)| Skill { name: name.to_string(), level: *level })
    .collect()
}

fn canonical_certificates() -> Vec<Certificate> {
    vec![
        Certificate {
            id: 1,
            title: "AWS Certified Developer Associate".to_string(),
            issuer: "Amazon Web Services".to_string(),
            date: "June 2023".to_string(),
            description: "Validation of technical expertise in developing and maintaining \
                          applications on AWS."
                .to_string(),
            details: "This certification demonstrates proficiency in developing, deploying, and \
                      debugging cloud-based applications using AWS. Covered services include AWS \
                      Lambda, Amazon API Gateway, Amazon S3, AWS DynamoDB, and more."
                .to_string(),
            credential_link: "https://aws.amazon.com/verification".to_string(),
        },
        Certificate {
            id: 2,
            title: "React Developer Certification".to_string(),
            issuer: "Meta".to_string(),
            date: "March 2023".to_string(),
            description: "Advanced React concepts including hooks, context API, and performance \
                          optimization."
                .to_string(),
            details: "Comprehensive certification covering advanced React patterns, state \
                      management, React Router, testing with Jest and React Testing Library, and \
                      building scalable React applications."
                .to_string(),
            credential_link: "https://www.coursera.org/verify/meta-react".to_string(),
        },
        Certificate {
            id: 3,
            title: "Python for Data Science".to_string(),
            issuer: "University of Michigan (Coursera)".to_string(),
            date: "January 2023".to_string(),
            description: "Data manipulation and analysis with Pandas, NumPy, and visualization \
                          libraries."
                .to_string(),
            details: "Specialization focusing on Python programming for data analysis, \
                      statistical modeling, machine learning fundamentals, and data visualization \
                      using Matplotlib and Seaborn."
                .to_string(),
            credential_link: "https://www.coursera.org/verify/umich-python-data".to_string(),
        },
        Certificate {
            id: 4,
            title: "Full Stack Web Development".to_string(),
            issuer: "freeCodeCamp".to_string(),
            date: "November 2022".to_string(),
            description: "Comprehensive full-stack JavaScript development certification."
                .to_string(),
            details: "Rigorous curriculum covering HTML5, CSS3, JavaScript, React, Node.js, \
                      Express.js, MongoDB, and DevOps. Completed several projects including a \
                      full-stack application with user authentication."
                .to_string(),
            credential_link: "https://www.freecodecamp.org/certification".to_string(),
        },
        Certificate {
            id: 5,
            title: "Java Programming Masterclass".to_string(),
            issuer: "Udemy".to_string(),
            date: "August 2022".to_string(),
            description: "Comprehensive Java programming covering fundamentals to advanced \
                          concepts."
                .to_string(),
            details: "Masterclass covering Java syntax, object-oriented programming, data \
                      structures, algorithms, multithreading, JDBC, and JavaFX for building \
                      desktop applications."
                .to_string(),
            credential_link: "https://www.udemy.com/certificate".to_string(),
        },
    ]
}

fn canonical_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "E-Commerce Platform".to_string(),
            year: 2023,
            technologies: strings(&["React", "Node.js", "MongoDB", "Stripe"]),
            description: "Full-featured online store with shopping cart, user authentication, \
                          and payment processing."
                .to_string(),
            github_url: "https://github.com".to_string(),
            media: Media::image(
                "https://via.placeholder.com/400x250/1F2937/FFFFFF?text=E-Commerce+Platform",
            ),
        },
        Project {
            id: 2,
            name: "Task Management App".to_string(),
            year: 2022,
            technologies: strings(&["React Native", "Firebase", "Redux"]),
            description: "Cross-platform task manager with real-time synchronization and \
                          collaborative features."
                .to_string(),
            github_url: "https://github.com".to_string(),
            media: Media::video("/media/task-manager-demo.mp4"),
        },
        Project {
            id: 3,
            name: "Weather Dashboard".to_string(),
            year: 2022,
            technologies: strings(&["JavaScript", "REST API", "Chart.js"]),
            description: "Interactive weather application with forecasts, charts, and \
                          location-based services."
                .to_string(),
            github_url: "https://github.com".to_string(),
            media: Media::image(
                "https://via.placeholder.com/400x250/1F2937/FFFFFF?text=Weather+Dashboard",
            ),
        },
        Project {
            id: 4,
            name: "Social Media Analytics".to_string(),
            year: 2023,
            technologies: strings(&["Python", "Django", "D3.js", "PostgreSQL"]),
            description: "Dashboard for analyzing social media engagement and performance \
                          metrics."
                .to_string(),
            github_url: "https://github.com".to_string(),
            media: Media::video("/media/social-analytics-demo.mp4"),
        },
    ]
}

fn canonical_activities() -> Vec<Activity> {
    vec![
        Activity {
            title: "AI Stock Prediction System".to_string(),
            description: "Developing a machine learning model to predict stock market trends \
                          using historical data and sentiment analysis."
                .to_string(),
            technologies: strings(&["Python", "TensorFlow", "AWS", "React"]),
            progress: 65,
        },
        Activity {
            title: "AI Alignment Course".to_string(),
            description: "Creating an online course about AI safety and alignment principles for \
                          developers and researchers."
                .to_string(),
            technologies: strings(&["Next.js", "MDX", "Tailwind CSS"]),
            progress: 40,
        },
        Activity {
            title: "Open Source Contribution".to_string(),
            description: "Contributing to open source projects focused on AI ethics and \
                          responsible technology development."
                .to_string(),
            technologies: strings(&["Python", "JavaScript", "Git"]),
            progress: 80,
        },
    ]
}

fn canonical_social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            name: "Gmail".to_string(),
            url: "mailto:siyabonga.mbuyisa@example.com".to_string(),
            icon: "mail".to_string(),
        },
        SocialLink {
            name: "LinkedIn".to_string(),
            url: "https://linkedin.com/in/siyabonga-mbuyisa".to_string(),
            icon: "linkedin".to_string(),
        },
        SocialLink {
            name: "GitHub".to_string(),
            url: "https://github.com/siyabonga-mbuyisa".to_string(),
            icon: "github".to_string(),
        },
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_canonical_content_is_valid() {
        let content = Content::canonical();
        assert!(content.validate().is_ok());
        assert_eq!(content.skills.len(), 11);
        assert_eq!(content.certificates.len(), 5);
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.activities.len(), 3);
        assert_eq!(content.social_links.len(), 3);
    }

    #[test]
    fn test_canonical_projects_mix_media_kinds() {
        let content = Content::canonical();
        assert!(content.projects.iter().any(|p| p.media.is_video()));
        assert!(content.projects.iter().any(|p| !p.media.is_video()));
    }

    #[test]
    fn test_json_shape_uses_web_field_names() {
        let content = Content::canonical();
        let json = serde_json::to_value(&content).unwrap();

        assert!(json["certificates"][0]["credentialLink"].is_string());
        assert!(json["projects"][0]["githubUrl"].is_string());
        assert_eq!(json["projects"][0]["media"]["type"], "image");
        assert_eq!(json["projects"][1]["media"]["type"], "video");
        assert!(json["socialLinks"].is_array());
    }

    #[test]
    fn test_from_json_str_accepts_serialized_canonical() {
        let json = serde_json::to_string(&Content::canonical()).unwrap();
        let parsed = Content::from_json_str(&json).unwrap();
        assert_eq!(parsed, Content::canonical());
    }

    #[test]
    fn test_rejects_skill_level_above_100() {
        let mut content = Content::canonical();
        content.skills[0].level = 101;

        let err = content.validate().unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidContent(_)));
        assert!(err.to_string().contains("JavaScript"));
    }

    #[test]
    fn test_rejects_activity_progress_above_100() {
        let mut content = Content::canonical();
        content.activities[1].progress = 150;
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_rejects_duplicate_certificate_ids() {
        let mut content = Content::canonical();
        content.certificates[1].id = content.certificates[0].id;

        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate certificate id"));
    }

    #[test]
    fn test_rejects_duplicate_project_ids() {
        let mut content = Content::canonical();
        content.projects[3].id = 1;
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_profile_name() {
        let mut content = Content::canonical();
        content.profile.name = "   ".to_string();
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = Content::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, PortfolioError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut content = Content::canonical();
        content.certificates.truncate(3);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string_pretty(&content).unwrap().as_bytes())
            .unwrap();

        let loaded = Content::load(file.path()).unwrap();
        assert_eq!(loaded.certificates.len(), 3);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Content::load(Path::new("/nonexistent/portfolio.json")).unwrap_err();
        assert!(matches!(err, PortfolioError::Io { .. }));
    }

    #[test]
    fn test_lookup_by_id() {
        let content = Content::canonical();
        assert_eq!(content.project(2).unwrap().name, "Task Management App");
        assert!(content.project(0).is_none());
    }
}
