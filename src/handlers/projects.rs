use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use crate::config::Config;
use crate::editor::ProjectEditor;
use crate::errors::{AppError, AppResult, StoreError};
use crate::models::{DeleteConfirmForm, PageQuery, Project, ProjectForm};
use crate::services::{DashboardState, Store};
use crate::views::{self, ActivePage};

fn redirect_with(key: &str, message: &str) -> Response {
    Redirect::to(&format!("/projects?{}={}", key, urlencoding::encode(message))).into_response()
}

// Renders content for the projects section inside the layout
async fn projects_page(
    store: &Store,
    config: &Config,
    title: &str,
    query: &PageQuery,
    live_reload: bool,
    content: impl FnOnce(&DashboardState) -> AppResult<String>,
) -> AppResult<String> {
    let state = store.snapshot().await;
    let body = content(&state)?;
    views::page(&config.dashboard, &state, ActivePage::Projects, title, query, body, live_reload)
}

async fn find_project_editor(
    store: &Store,
    id: &str,
    build: fn(Project) -> ProjectEditor,
) -> AppResult<ProjectEditor> {
    let project = store
        .project(id)
        .await
        .ok_or_else(|| AppError::Store(StoreError::ProjectNotFound(id.to_string())))?;
    Ok(build(project))
}

pub async fn serve_project_list(
    State((store, config)): State<(Store, Config)>,
    Query(query): Query<PageQuery>,
) -> AppResult<Response> {
    tracing::info!("Serving project list");

    let html = projects_page(&store, &config, "Projects", &query, true, |state| {
        views::render_project_list(&config.dashboard, state.projects())
    })
    .await?;

    Ok(Html(html).into_response())
}

async fn render_editor_page(
    store: &Store,
    config: &Config,
    editor: &ProjectEditor,
    form: &ProjectForm,
    errors: &[String],
) -> AppResult<String> {
    // Only the read-only view may reload under the user
    let live_reload = editor.is_read_only();
    projects_page(store, config, editor.title(), &PageQuery::default(), live_reload, |_| {
        views::render_editor(&config.dashboard, editor, form, errors)
    })
    .await
}

pub async fn serve_new_project(
    State((store, config)): State<(Store, Config)>,
) -> AppResult<Response> {
    let editor = ProjectEditor::create();
    let html = render_editor_page(&store, &config, &editor, &editor.form(), &[]).await?;
    Ok(Html(html).into_response())
}

pub async fn view_project(
    State((store, config)): State<(Store, Config)>,
    Path(project_id): Path<String>,
) -> AppResult<Response> {
    tracing::info!("Viewing project {}", project_id);

    let editor = find_project_editor(&store, &project_id, ProjectEditor::view).await?;
    let html = render_editor_page(&store, &config, &editor, &editor.form(), &[]).await?;
    Ok(Html(html).into_response())
}

pub async fn serve_edit_project(
    State((store, config)): State<(Store, Config)>,
    Path(project_id): Path<String>,
) -> AppResult<Response> {
    tracing::info!("Editing project {}", project_id);

    let editor = find_project_editor(&store, &project_id, ProjectEditor::edit).await?;
    let html = render_editor_page(&store, &config, &editor, &editor.form(), &[]).await?;
    Ok(Html(html).into_response())
}

// Submits the editor; validation failures re-render the form with the input
async fn submit_editor(
    store: &Store,
    config: &Config,
    editor: ProjectEditor,
    form: ProjectForm,
    success: &str,
) -> AppResult<Response> {
    match editor.submit(store, &form).await {
        Ok(project) => {
            tracing::debug!("Editor submit stored project {}", project.id);
            Ok(redirect_with("message", success))
        }
        Err(AppError::Validation(errors)) => {
            tracing::info!("Project form rejected: {}", errors.join("; "));
            let html = render_editor_page(store, config, &editor, &form, &errors).await?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn create_project(
    State((store, config)): State<(Store, Config)>,
    Form(form): Form<ProjectForm>,
) -> AppResult<Response> {
    submit_editor(&store, &config, ProjectEditor::create(), form, "Project created").await
}

pub async fn update_project(
    State((store, config)): State<(Store, Config)>,
    Path(project_id): Path<String>,
    Form(form): Form<ProjectForm>,
) -> AppResult<Response> {
    let editor = find_project_editor(&store, &project_id, ProjectEditor::edit).await?;
    submit_editor(&store, &config, editor, form, "Project updated").await
}

pub async fn confirm_delete_project(
    State((store, config)): State<(Store, Config)>,
    Path(project_id): Path<String>,
) -> AppResult<Response> {
    let project = store
        .project(&project_id)
        .await
        .ok_or_else(|| AppError::Store(StoreError::ProjectNotFound(project_id.clone())))?;

    let html = projects_page(&store, &config, "Delete Project", &PageQuery::default(), false, |_| {
        views::render_delete_confirm(&config.dashboard, &project)
    })
    .await?;

    Ok(Html(html).into_response())
}

/// Deletes only when the confirmation was accepted; a cancel changes nothing.
pub async fn delete_project(
    State((store, _)): State<(Store, Config)>,
    Path(project_id): Path<String>,
    Form(form): Form<DeleteConfirmForm>,
) -> Response {
    if form.confirm != "yes" {
        tracing::info!("Deletion of project {} cancelled", project_id);
        return Redirect::to("/projects").into_response();
    }

    match store.delete_project(&project_id).await {
        Ok(project) => redirect_with("message", &format!("Deleted \"{}\"", project.name)),
        Err(e) => redirect_with("error", &e.to_string()),
    }
}
