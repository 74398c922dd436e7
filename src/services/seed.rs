use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use crate::config::DashboardConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{Activity, ActivityKind, Project, ProjectStatus, UserProfile};

/// Initial contents of the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    pub projects: Vec<Project>,
    pub activities: Vec<Activity>,
    pub profile: UserProfile,
}

impl Seed {
    // Project ids must be unique before the store takes ownership
    pub fn validate(&self) -> AppResult<()> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id.as_str()) {
                return Err(AppError::Seed(format!("duplicate project id '{}'", project.id)));
            }
        }
        Ok(())
    }
}

/// Source of the initial store state.
pub trait SeedLoader: Send + Sync {
    fn load(&self) -> AppResult<Seed>;
}

/// The hardcoded sample data shipped with the dashboard.
pub struct BuiltinSeed;

impl SeedLoader for BuiltinSeed {
    fn load(&self) -> AppResult<Seed> {
        Ok(sample_seed())
    }
}

/// Reads a `Seed` from a JSON file.
pub struct JsonSeedFile {
    path: PathBuf,
}

impl JsonSeedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SeedLoader for JsonSeedFile {
    fn load(&self) -> AppResult<Seed> {
        tracing::info!("Loading seed data from {}", self.path.display());

        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            tracing::error!("Failed to read seed file {}: {}", self.path.display(), e);
            AppError::File(e)
        })?;
        let seed: Seed = serde_json::from_str(&raw)?;

        tracing::debug!(
            "Seed file provided {} projects and {} activities",
            seed.projects.len(),
            seed.activities.len()
        );
        Ok(seed)
    }
}

pub fn loader_from_config(config: &DashboardConfig) -> Box<dyn SeedLoader> {
    match &config.seed_file {
        Some(path) => Box::new(JsonSeedFile::new(path)),
        None => Box::new(BuiltinSeed),
    }
}

pub fn sample_seed() -> Seed {
    let project = |id: &str, name: &str, client: &str, status, deadline: &str, budget, description: &str| Project {
        id: id.into(),
        name: name.into(),
        client: client.into(),
        status,
        deadline: deadline.into(),
        budget,
        description: description.into(),
    };
    let activity = |id: &str, message: &str, timestamp: &str, kind| Activity {
        id: id.into(),
        message: message.into(),
        timestamp: timestamp.into(),
        kind,
    };

    Seed {
        projects: vec![
            project("1", "E-commerce Website", "Tech Corp", ProjectStatus::InProgress,
                "2024-02-15", 15000.0, "Build a modern e-commerce platform"),
            project("2", "Mobile App Design", "StartUp Inc", ProjectStatus::Completed,
                "2024-01-20", 8000.0, "Design UI/UX for mobile application"),
            project("3", "Dashboard Development", "Finance Co", ProjectStatus::OnHold,
                "2024-03-01", 12000.0, "Admin dashboard for financial data"),
            project("4", "Logo Redesign", "Brand Studio", ProjectStatus::Pending,
                "2024-02-10", 3000.0, "Modernize company logo"),
        ],
        activities: vec![
            activity("1", "Project \"E-commerce Website\" milestone completed", "2 hours ago", ActivityKind::Project),
            activity("2", "Payment of $8,000 received from StartUp Inc", "5 hours ago", ActivityKind::Payment),
            activity("3", "New task assigned: Review design mockups", "1 day ago", ActivityKind::Task),
            activity("4", "Project \"Mobile App Design\" delivered", "2 days ago", ActivityKind::Project),
            activity("5", "Meeting scheduled with Tech Corp", "3 days ago", ActivityKind::Task),
        ],
        profile: UserProfile {
            name: "Hossam Hassan".into(),
            email: "hossamhassan112003@gmail.com".into(),
            role: "Full Stack Developer".into(),
            avatar: None,
            bio: Some("Passionate developer with 3+ years of experience in web development.".into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_seed_shape() {
        let seed = BuiltinSeed.load().unwrap();
        assert_eq!(seed.projects.len(), 4);
        assert_eq!(seed.activities.len(), 5);
        assert_eq!(seed.profile.name, "Hossam Hassan");
        assert!(seed.validate().is_ok());
    }

    #[test]
    fn test_json_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&sample_seed()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let seed = JsonSeedFile::new(file.path()).load().unwrap();
        assert_eq!(seed.projects, sample_seed().projects);
        assert_eq!(seed.activities[1].kind, ActivityKind::Payment);
    }

    #[test]
    fn test_json_seed_uses_display_labels() {
        let json = r#"{
            "projects": [{"id": "a", "name": "N", "client": "C", "status": "In Progress",
                          "deadline": "2024-05-01", "budget": 100}],
            "activities": [{"id": "1", "message": "m", "timestamp": "now", "type": "payment"}],
            "profile": {"name": "N", "email": "e@example.com", "role": "Dev"}
        }"#;
        let seed: Seed = serde_json::from_str(json).unwrap();
        assert_eq!(seed.projects[0].status, ProjectStatus::InProgress);
        assert_eq!(seed.projects[0].description, "");
        assert_eq!(seed.profile.bio, None);
    }

    #[test]
    fn test_missing_seed_file_is_file_error() {
        let result = JsonSeedFile::new("does/not/exist.json").load();
        assert!(matches!(result, Err(AppError::File(_))));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut seed = sample_seed();
        seed.projects[3].id = "1".into();
        assert!(matches!(seed.validate(), Err(AppError::Seed(_))));
    }
}
