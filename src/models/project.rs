use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Project lifecycle status, serialized with its display label
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "On Hold")]
    OnHold,
    #[serde(rename = "Completed")]
    Completed,
}

impl ProjectStatus {
    /// Order used by the status distribution chart.
    pub const DISTRIBUTION_ORDER: [ProjectStatus; 4] = [
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
        ProjectStatus::Pending,
    ];

    /// Order used by the editor's status select.
    pub const SELECT_ORDER: [ProjectStatus; 4] = [
        ProjectStatus::Pending,
        ProjectStatus::InProgress,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "Pending",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
        }
    }

    // CSS class of the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "badge-completed",
            ProjectStatus::InProgress => "badge-in-progress",
            ProjectStatus::OnHold => "badge-on-hold",
            ProjectStatus::Pending => "badge-pending",
        }
    }

    // Chart colour as an RGB triple
    pub fn chart_color(&self) -> (u8, u8, u8) {
        match self {
            ProjectStatus::InProgress => (0x3B, 0x82, 0xF6),
            ProjectStatus::Completed => (0x10, 0xB9, 0x81),
            ProjectStatus::OnHold => (0xF5, 0x9E, 0x0B),
            ProjectStatus::Pending => (0x8B, 0x5C, 0xF6),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectStatus::SELECT_ORDER
            .iter()
            .copied()
            .find(|status| status.label() == s.trim())
            .ok_or_else(|| format!("Unknown project status '{}'", s))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client: String,
    pub status: ProjectStatus,
    pub deadline: String, // ISO date, YYYY-MM-DD
    pub budget: f64,
    #[serde(default)]
    pub description: String,
}

/// A project as submitted for creation, before the store assigns its id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub client: String,
    pub status: ProjectStatus,
    pub deadline: String,
    pub budget: f64,
    #[serde(default)]
    pub description: String,
}

impl NewProject {
    pub fn into_project(self, id: String) -> Project {
        Project {
            id,
            name: self.name,
            client: self.client,
            status: self.status,
            deadline: self.deadline,
            budget: self.budget,
            description: self.description,
        }
    }
}

/// Partial update of a project. Present fields overwrite, absent ones are kept.
/// The id is not patchable.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProjectPatch {
    pub fn apply_to(self, project: &mut Project) {
        if let Some(name) = self.name {
            project.name = name;
        }
        if let Some(client) = self.client {
            project.client = client;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(deadline) = self.deadline {
            project.deadline = deadline;
        }
        if let Some(budget) = self.budget {
            project.budget = budget;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
    }
}

// Editing a project submits the full field set
impl From<NewProject> for ProjectPatch {
    fn from(draft: NewProject) -> Self {
        Self {
            name: Some(draft.name),
            client: Some(draft.client),
            status: Some(draft.status),
            deadline: Some(draft.deadline),
            budget: Some(draft.budget),
            description: Some(draft.description),
        }
    }
}
