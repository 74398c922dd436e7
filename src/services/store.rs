use chrono::{Datelike, NaiveDate};
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use crate::errors::{StoreError, StoreResult};
use crate::models::{
    Activity, DashboardStats, EarningsPoint, NewProject, Project, ProjectPatch,
    ProjectStatus, ProfilePatch, StatusCount, UserProfile,
};
use super::seed::Seed;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_deadline(deadline: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(deadline.trim(), DEADLINE_FORMAT).ok()
}

/// The canonical dashboard data: projects, activities and the user profile.
///
/// Every operation is synchronous and runs to completion. Stats are derived
/// from the project collection on each call.
#[derive(Debug, Clone)]
pub struct DashboardState {
    projects: Vec<Project>,
    activities: Vec<Activity>,
    profile: UserProfile,
}

impl DashboardState {
    pub fn from_seed(seed: Seed) -> Self {
        Self {
            projects: seed.projects,
            activities: seed.activities,
            profile: seed.profile,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Appends a project under a freshly generated id and returns it.
    pub fn add_project(&mut self, draft: NewProject) -> Project {
        let mut id = uuid::Uuid::new_v4().to_string();
        while self.project(&id).is_some() {
            id = uuid::Uuid::new_v4().to_string();
        }

        let project = draft.into_project(id);
        self.projects.push(project.clone());
        project
    }

    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) -> StoreResult<Project> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::ProjectNotFound(id.to_string()))?;

        patch.apply_to(project);
        Ok(project.clone())
    }

    pub fn delete_project(&mut self, id: &str) -> StoreResult<Project> {
        let index = self
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::ProjectNotFound(id.to_string()))?;

        Ok(self.projects.remove(index))
    }

    pub fn update_user_profile(&mut self, patch: ProfilePatch) -> UserProfile {
        patch.apply_to(&mut self.profile);
        self.profile.clone()
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_projects(&self.projects)
    }

    pub fn status_breakdown(&self) -> Vec<StatusCount> {
        ProjectStatus::DISTRIBUTION_ORDER
            .iter()
            .map(|&status| StatusCount {
                status,
                count: self.projects.iter().filter(|p| p.status == status).count(),
            })
            .collect()
    }

    // Stored order, no re-sorting by time
    pub fn recent_activities(&self, limit: usize) -> &[Activity] {
        &self.activities[..limit.min(self.activities.len())]
    }

    /// Earnings per month for `months` consecutive months. Each completed
    /// project counts its budget in the month of its deadline. The window
    /// ends at the latest completed deadline, or at `today` when nothing is
    /// completed yet.
    pub fn earnings_by_month(&self, months: u32, today: NaiveDate) -> Vec<EarningsPoint> {
        let completed: Vec<(i32, f64)> = self
            .projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Completed)
            .filter_map(|p| parse_deadline(&p.deadline).map(|d| (month_index(d), p.budget)))
            .collect();

        let end = completed
            .iter()
            .map(|(index, _)| *index)
            .max()
            .unwrap_or_else(|| month_index(today));
        let start = end - months as i32 + 1;

        (start..=end)
            .map(|index| EarningsPoint {
                month: MONTH_NAMES[index.rem_euclid(12) as usize].to_string(),
                year: index.div_euclid(12),
                earnings: completed
                    .iter()
                    .filter(|(i, _)| *i == index)
                    .map(|(_, budget)| budget)
                    .sum(),
            })
            .collect()
    }
}

// Months since year 0, so consecutive months differ by one
fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

/// Shared handle to the dashboard state.
///
/// Cloning is cheap; all clones see the same data. Each successful mutation
/// bumps a revision counter that subscribers can watch.
#[derive(Clone)]
pub struct Store {
    state: Arc<RwLock<DashboardState>>,
    revision: Arc<watch::Sender<u64>>,
}

impl Store {
    pub fn new(seed: Seed) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            state: Arc::new(RwLock::new(DashboardState::from_seed(seed))),
            revision: Arc::new(revision),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    fn bump_revision(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }

    /// A consistent copy of the whole state, for rendering.
    pub async fn snapshot(&self) -> DashboardState {
        self.state.read().await.clone()
    }

    pub async fn projects(&self) -> Vec<Project> {
        self.state.read().await.projects().to_vec()
    }

    pub async fn project(&self, id: &str) -> Option<Project> {
        self.state.read().await.project(id).cloned()
    }

    pub async fn activities(&self) -> Vec<Activity> {
        self.state.read().await.activities().to_vec()
    }

    pub async fn profile(&self) -> UserProfile {
        self.state.read().await.profile().clone()
    }

    pub async fn stats(&self) -> DashboardStats {
        self.state.read().await.stats()
    }

    pub async fn add_project(&self, draft: NewProject) -> Project {
        let project = self.state.write().await.add_project(draft);
        self.bump_revision();
        tracing::info!("Created project {} ({})", project.id, project.name);
        project
    }

    pub async fn update_project(&self, id: &str, patch: ProjectPatch) -> StoreResult<Project> {
        let result = self.state.write().await.update_project(id, patch);
        match &result {
            Ok(project) => {
                self.bump_revision();
                tracing::info!("Updated project {} ({})", project.id, project.name);
            }
            Err(e) => tracing::warn!("Update rejected: {}", e),
        }
        result
    }

    pub async fn delete_project(&self, id: &str) -> StoreResult<Project> {
        let result = self.state.write().await.delete_project(id);
        match &result {
            Ok(project) => {
                self.bump_revision();
                tracing::info!("Deleted project {} ({})", project.id, project.name);
            }
            Err(e) => tracing::warn!("Delete rejected: {}", e),
        }
        result
    }

    pub async fn update_user_profile(&self, patch: ProfilePatch) -> UserProfile {
        let profile = self.state.write().await.update_user_profile(patch);
        self.bump_revision();
        tracing::info!("Updated profile for {}", profile.name);
        profile
    }
}
