use axum::{
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{PageQuery, PasswordForm, ProfileForm, ProfilePatch};
use crate::services::Store;
use crate::views::{self, ActivePage};

pub async fn serve_overview(
    State((store, config)): State<(Store, Config)>,
    Query(query): Query<PageQuery>,
) -> AppResult<Response> {
    tracing::info!("Serving overview page");

    let state = store.snapshot().await;
    let today = chrono::Local::now().date_naive();
    let content = views::render_overview(&config.dashboard, &state, today)?;
    let html = views::page(
        &config.dashboard,
        &state,
        ActivePage::Overview,
        "Dashboard Overview",
        &query,
        content,
        true,
    )?;

    Ok(Html(html).into_response())
}

pub async fn serve_profile(
    State((store, config)): State<(Store, Config)>,
    Query(query): Query<PageQuery>,
) -> AppResult<Response> {
    let editing = query.is_editing();
    tracing::info!("Serving profile page (editing: {})", editing);

    let state = store.snapshot().await;
    let content = views::render_profile(&config.dashboard, state.profile(), editing)?;
    let html = views::page(
        &config.dashboard,
        &state,
        ActivePage::Profile,
        "Profile Settings",
        &query,
        content,
        !editing,
    )?;

    Ok(Html(html).into_response())
}

// Saves the whole profile draft at once
pub async fn save_profile(
    State((store, _)): State<(Store, Config)>,
    Form(form): Form<ProfileForm>,
) -> Response {
    let patch = ProfilePatch {
        name: Some(form.name),
        email: Some(form.email),
        role: Some(form.role),
        avatar: None,
        bio: Some(form.bio),
    };
    store.update_user_profile(patch).await;

    Redirect::to("/profile?message=Profile%20updated").into_response()
}

/// Password change is cosmetic: the two new password fields must match, and
/// nothing is stored or verified.
pub async fn change_password(Form(form): Form<PasswordForm>) -> Response {
    tracing::debug!(
        "Password change requested (current password supplied: {})",
        !form.current_password.is_empty()
    );

    if form.new_password != form.confirm_password {
        tracing::info!("Password change rejected: confirmation does not match");
        return Redirect::to(&format!(
            "/profile?error={}",
            urlencoding::encode("Passwords do not match!")
        ))
        .into_response();
    }

    Redirect::to(&format!(
        "/profile?message={}",
        urlencoding::encode("Password updated successfully!")
    ))
    .into_response()
}
