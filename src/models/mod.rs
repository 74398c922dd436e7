mod project;
mod activity;
mod profile;
mod stats;
mod forms;

pub use project::{Project, ProjectStatus, NewProject, ProjectPatch};
pub use activity::{Activity, ActivityKind};
pub use profile::{UserProfile, ProfilePatch};
pub use stats::{DashboardStats, StatusCount, EarningsPoint};
pub use forms::{ProjectForm, ProfileForm, PasswordForm, DeleteConfirmForm, PageQuery};
