use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use crate::config::Config;
use crate::editor::validate_draft;
use crate::errors::{AppResult, StoreError};
use crate::models::{
    Activity, DashboardStats, NewProject, Project, ProjectPatch, ProfilePatch, UserProfile,
};
use crate::services::Store;

pub async fn get_stats(State((store, _)): State<(Store, Config)>) -> Json<DashboardStats> {
    Json(store.stats().await)
}

pub async fn list_activities(State((store, _)): State<(Store, Config)>) -> Json<Vec<Activity>> {
    Json(store.activities().await)
}

pub async fn list_projects(State((store, _)): State<(Store, Config)>) -> Json<Vec<Project>> {
    Json(store.projects().await)
}

pub async fn create_project(
    State((store, _)): State<(Store, Config)>,
    Json(draft): Json<NewProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let draft = validate_draft(draft)?;
    let project = store.add_project(draft).await;
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn get_project(
    State((store, _)): State<(Store, Config)>,
    Path(project_id): Path<String>,
) -> AppResult<Json<Project>> {
    let project = store
        .project(&project_id)
        .await
        .ok_or_else(|| StoreError::ProjectNotFound(project_id.clone()))?;
    Ok(Json(project))
}

// The patched result must still satisfy the editor rules. Fields the patch
// touches are stored in their normalized (trimmed) form.
pub async fn patch_project(
    State((store, _)): State<(Store, Config)>,
    Path(project_id): Path<String>,
    Json(patch): Json<ProjectPatch>,
) -> AppResult<Json<Project>> {
    let mut preview = store
        .project(&project_id)
        .await
        .ok_or_else(|| StoreError::ProjectNotFound(project_id.clone()))?;
    patch.clone().apply_to(&mut preview);
    let normalized = validate_draft(NewProject {
        name: preview.name,
        client: preview.client,
        status: preview.status,
        deadline: preview.deadline,
        budget: preview.budget,
        description: preview.description,
    })?;

    let patch = ProjectPatch {
        name: patch.name.map(|_| normalized.name),
        client: patch.client.map(|_| normalized.client),
        status: patch.status.map(|_| normalized.status),
        deadline: patch.deadline.map(|_| normalized.deadline),
        budget: patch.budget.map(|_| normalized.budget),
        description: patch.description.map(|_| normalized.description),
    };
    let project = store.update_project(&project_id, patch).await?;
    Ok(Json(project))
}

pub async fn delete_project(
    State((store, _)): State<(Store, Config)>,
    Path(project_id): Path<String>,
) -> AppResult<StatusCode> {
    store.delete_project(&project_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_profile(State((store, _)): State<(Store, Config)>) -> Json<UserProfile> {
    Json(store.profile().await)
}

pub async fn patch_profile(
    State((store, _)): State<(Store, Config)>,
    Json(patch): Json<ProfilePatch>,
) -> Json<UserProfile> {
    Json(store.update_user_profile(patch).await)
}
