//! Create / edit / view form bound to a single project.
//!
//! The mode is fixed when the editor is built. Validation replaces the
//! browser's native constraints: every rule is checked and all failures are
//! reported together.

use crate::errors::{AppError, AppResult};
use crate::models::{NewProject, Project, ProjectForm, ProjectPatch, ProjectStatus};
use crate::services::store::{parse_deadline, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit,
    View,
}

#[derive(Debug, Clone)]
pub struct ProjectEditor {
    mode: EditorMode,
    project: Option<Project>,
}

impl ProjectEditor {
    pub fn create() -> Self {
        Self { mode: EditorMode::Create, project: None }
    }

    pub fn edit(project: Project) -> Self {
        Self { mode: EditorMode::Edit, project: Some(project) }
    }

    pub fn view(project: Project) -> Self {
        Self { mode: EditorMode::View, project: Some(project) }
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn is_read_only(&self) -> bool {
        self.mode == EditorMode::View
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            EditorMode::Create => "Create New Project",
            EditorMode::Edit => "Edit Project",
            EditorMode::View => "Project Details",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            EditorMode::Create => "Create Project",
            EditorMode::Edit | EditorMode::View => "Save Changes",
        }
    }

    // Where the form posts to; view mode has no submit control
    pub fn action(&self) -> Option<String> {
        match (self.mode, &self.project) {
            (EditorMode::Create, _) => Some("/projects".to_string()),
            (EditorMode::Edit, Some(project)) => Some(format!("/projects/{}", project.id)),
            _ => None,
        }
    }

    /// Initial form contents: the bound project, or a blank template.
    pub fn form(&self) -> ProjectForm {
        match &self.project {
            Some(project) => ProjectForm {
                name: project.name.clone(),
                client: project.client.clone(),
                status: project.status.label().to_string(),
                deadline: project.deadline.clone(),
                budget: format_budget_input(project.budget),
                description: project.description.clone(),
            },
            None => ProjectForm {
                status: ProjectStatus::Pending.label().to_string(),
                budget: "0".to_string(),
                ..Default::default()
            },
        }
    }

    /// Validates `form` and applies it to the store.
    pub async fn submit(&self, store: &Store, form: &ProjectForm) -> AppResult<Project> {
        match (self.mode, &self.project) {
            (EditorMode::Create, _) => {
                let draft = validate(form)?;
                Ok(store.add_project(draft).await)
            }
            (EditorMode::Edit, Some(project)) => {
                let draft = validate(form)?;
                let updated = store
                    .update_project(&project.id, ProjectPatch::from(draft))
                    .await?;
                Ok(updated)
            }
            _ => Err(AppError::validation("Project details are read-only")),
        }
    }
}

/// Checks every editor rule and builds the project draft.
pub fn validate(form: &ProjectForm) -> AppResult<NewProject> {
    let mut errors = Vec::new();

    let name = form.name.trim();
    if name.is_empty() {
        errors.push("Project name is required".to_string());
    }
    let client = form.client.trim();
    if client.is_empty() {
        errors.push("Client name is required".to_string());
    }

    let status = match form.status.parse::<ProjectStatus>() {
        Ok(status) => Some(status),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let deadline = form.deadline.trim();
    if deadline.is_empty() {
        errors.push("Deadline is required".to_string());
    } else if parse_deadline(deadline).is_none() {
        errors.push(format!("Deadline '{}' is not a valid date (YYYY-MM-DD)", deadline));
    }

    let budget = match parse_budget(&form.budget) {
        Ok(budget) => Some(budget),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    match (status, budget) {
        (Some(status), Some(budget)) if errors.is_empty() => Ok(NewProject {
            name: name.to_string(),
            client: client.to_string(),
            status,
            deadline: deadline.to_string(),
            budget,
            description: form.description.clone(),
        }),
        _ => Err(AppError::Validation(errors)),
    }
}

/// Checks a JSON API draft against the same rules as the form.
pub fn validate_draft(draft: NewProject) -> AppResult<NewProject> {
    let form = ProjectForm {
        name: draft.name,
        client: draft.client,
        status: draft.status.label().to_string(),
        deadline: draft.deadline,
        budget: draft.budget.to_string(),
        description: draft.description,
    };
    validate(&form)
}

// Non-numeric budgets are rejected rather than coerced to zero
fn parse_budget(raw: &str) -> Result<f64, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Budget is required".to_string());
    }
    match raw.parse::<f64>() {
        Ok(budget) if !budget.is_finite() => Err(format!("Budget '{}' is not a number", raw)),
        Ok(budget) if budget < 0.0 => Err("Budget cannot be negative".to_string()),
        Ok(budget) => Ok(budget),
        Err(_) => Err(format!("Budget '{}' is not a number", raw)),
    }
}

fn format_budget_input(budget: f64) -> String {
    if budget.fract() == 0.0 {
        format!("{:.0}", budget)
    } else {
        budget.to_string()
    }
}
