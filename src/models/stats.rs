use serde::Serialize;
use super::project::{Project, ProjectStatus};

/// Summary figures shown on the overview cards. Always derived from the
/// current project collection, never stored.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: usize,
    pub total_earnings: f64,
    pub tasks_due: usize,
    pub completed_projects: usize,
}

impl DashboardStats {
    pub fn from_projects(projects: &[Project]) -> Self {
        let mut stats = DashboardStats {
            total_projects: projects.len(),
            ..Default::default()
        };
        for project in projects {
            match project.status {
                ProjectStatus::Completed => {
                    stats.completed_projects += 1;
                    stats.total_earnings += project.budget;
                }
                ProjectStatus::InProgress => stats.tasks_due += 1,
                ProjectStatus::OnHold | ProjectStatus::Pending => {}
            }
        }
        stats
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StatusCount {
    pub status: ProjectStatus,
    pub count: usize,
}

// One bar of the monthly earnings chart
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EarningsPoint {
    pub month: String,
    pub year: i32,
    pub earnings: f64,
}
