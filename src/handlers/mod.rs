pub mod api;
mod dashboard;
mod events;
mod projects;

pub use dashboard::{serve_overview, serve_profile, save_profile, change_password};
pub use events::revision_events;
pub use projects::{
    serve_project_list, serve_new_project, create_project, view_project, serve_edit_project,
    update_project, confirm_delete_project, delete_project,
};
