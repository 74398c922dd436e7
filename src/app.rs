use axum::{
    routing::{get, post},
    Router,
    middleware::from_fn,
};
use tower_http::{
    services::ServeDir,
    limit::RequestBodyLimitLayer,
};
use crate::{
    config::Config,
    handlers::{self, api},
    middleware,
    services::Store,
};

/// Builds the dashboard router around a store and its configuration.
pub fn build_router(store: Store, config: Config) -> Router {
    let static_dir = config.dashboard.static_dir.clone();
    let max_body_size = config.form.max_body_size;

    Router::new()
        // Pages
        .route("/", get(handlers::serve_overview))
        .route("/projects", get(handlers::serve_project_list).post(handlers::create_project))
        .route("/projects/new", get(handlers::serve_new_project))
        .route("/projects/:project_id", get(handlers::view_project).post(handlers::update_project))
        .route("/projects/:project_id/edit", get(handlers::serve_edit_project))
        .route(
            "/projects/:project_id/delete",
            get(handlers::confirm_delete_project).post(handlers::delete_project),
        )
        .route("/profile", get(handlers::serve_profile).post(handlers::save_profile))
        .route("/profile/password", post(handlers::change_password))

        // Change feed
        .route("/events", get(handlers::revision_events))

        // JSON API
        .route("/api/stats", get(api::get_stats))
        .route("/api/activities", get(api::list_activities))
        .route("/api/projects", get(api::list_projects).post(api::create_project))
        .route(
            "/api/projects/:project_id",
            get(api::get_project).patch(api::patch_project).delete(api::delete_project),
        )
        .route("/api/profile", get(api::get_profile).patch(api::patch_profile))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir))

        .layer(from_fn(middleware::log_requests))
        .layer(RequestBodyLimitLayer::new(max_body_size))

        .with_state((store, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::ServiceExt;
    use crate::models::{DashboardStats, Project};
    use crate::services::seed::sample_seed;

    fn setup() -> (Store, Router) {
        let store = Store::new(sample_seed());
        let router = build_router(store.clone(), Config::default());
        (store, router)
    }

    async fn send(router: Router, request: Request<Body>) -> Response {
        router.oneshot(request).await.unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn form_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    async fn test_overview_page() {
        let (_, router) = setup();
        let response = send(router, get_request("/")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Dashboard Overview"));
        assert!(html.contains("$8,000"));
        assert!(html.contains("Meeting scheduled with Tech Corp"));
        assert!(html.contains("<svg"));
        assert!(html.contains("Hossam Hassan"));
    }

    #[tokio::test]
    async fn test_project_list_in_store_order() {
        let (_, router) = setup();
        let html = body_text(send(router, get_request("/projects")).await).await;

        let first = html.find("E-commerce Website").unwrap();
        let last = html.find("Logo Redesign").unwrap();
        assert!(first < last);
        assert!(html.contains("Feb 15, 2024"));
        assert!(html.contains("$15,000"));
    }

    #[tokio::test]
    async fn test_create_via_form() {
        let (store, router) = setup();
        let response = send(router, form_request(
            "/projects",
            "name=X&client=Y&status=Pending&deadline=2024-05-01&budget=500&description=",
        ))
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(location(&response).starts_with("/projects?message="));
        assert_eq!(store.projects().await.len(), 5);
    }

    #[tokio::test]
    async fn test_invalid_form_rerenders_with_errors() {
        let (store, router) = setup();
        let response = send(router, form_request(
            "/projects",
            "name=&client=Y&status=Pending&deadline=2024-05-01&budget=abc",
        ))
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let html = body_text(response).await;
        assert!(html.contains("Project name is required"));
        assert!(html.contains("Budget &#39;abc&#39; is not a number"));
        assert_eq!(store.projects().await.len(), 4);
    }

    #[tokio::test]
    async fn test_edit_via_form() {
        let (store, router) = setup();
        let response = send(router, form_request(
            "/projects/4",
            "name=Logo+Redesign&client=Brand+Studio&status=Completed&deadline=2024-02-10&budget=3000&description=Done",
        ))
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(store.stats().await.total_earnings, 11000.0);
    }

    #[tokio::test]
    async fn test_view_mode_is_disabled() {
        let (_, router) = setup();
        let response = send(router, get_request("/projects/1")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Project Details"));
        assert!(html.contains("disabled"));
        assert!(!html.contains(r#"type="submit""#));
    }

    #[tokio::test]
    async fn test_unknown_project_is_404() {
        let (_, router) = setup();
        let response = send(router.clone(), get_request("/projects/missing/edit")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(router, form_request("/projects/missing", "name=X")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let (store, router) = setup();

        let page = body_text(send(router.clone(), get_request("/projects/2/delete")).await).await;
        assert!(page.contains("Are you sure you want to delete this project?"));

        let response = send(router.clone(), form_request("/projects/2/delete", "confirm=no")).await;
        assert_eq!(location(&response), "/projects");
        assert_eq!(store.projects().await.len(), 4);

        let response = send(router, form_request("/projects/2/delete", "confirm=yes")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(store.projects().await.len(), 3);
        assert_eq!(store.stats().await.total_earnings, 0.0);
    }

    #[tokio::test]
    async fn test_profile_edit_and_save() {
        let (store, router) = setup();

        let readonly = body_text(send(router.clone(), get_request("/profile")).await).await;
        assert!(readonly.contains("Edit Profile"));

        let editing = body_text(send(router.clone(), get_request("/profile?edit=true")).await).await;
        assert!(editing.contains("Save Changes"));

        let response = send(router, form_request(
            "/profile",
            "name=Jane+Doe&email=jane%40example.com&role=Designer&bio=",
        ))
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let profile = store.profile().await;
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.email, "jane@example.com");
        assert_eq!(profile.bio, None);
    }

    #[tokio::test]
    async fn test_profile_edit_toggle_accepts_any_truthy_value() {
        let (_, router) = setup();
        for uri in ["/profile?edit=1", "/profile?edit", "/profile?edit=true"] {
            let response = send(router.clone(), get_request(uri)).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
            assert!(body_text(response).await.contains("Save Changes"), "{}", uri);
        }

        let html = body_text(send(router, get_request("/profile?edit=false")).await).await;
        assert!(html.contains("Edit Profile"));
        assert!(!html.contains("Save Changes"));
    }

    #[tokio::test]
    async fn test_change_feed_left_out_of_draft_pages() {
        let (_, router) = setup();
        for uri in ["/", "/projects", "/projects/1", "/profile"] {
            let html = body_text(send(router.clone(), get_request(uri)).await).await;
            assert!(html.contains("new EventSource('/events')"), "{} should reload on changes", uri);
        }
        for uri in ["/projects/new", "/projects/1/edit", "/projects/1/delete", "/profile?edit=true"] {
            let html = body_text(send(router.clone(), get_request(uri)).await).await;
            assert!(!html.contains("EventSource"), "{} holds a draft and must not reload", uri);
        }
    }

    #[tokio::test]
    async fn test_password_change_is_cosmetic() {
        let (store, router) = setup();

        let response = send(router.clone(), form_request(
            "/profile/password",
            "current_password=a&new_password=b&confirm_password=c",
        ))
        .await;
        assert!(location(&response).contains("error=Passwords%20do%20not%20match%21"));

        let response = send(router, form_request(
            "/profile/password",
            "current_password=a&new_password=b&confirm_password=b",
        ))
        .await;
        assert!(location(&response).contains("message=Password%20updated%20successfully%21"));
        assert_eq!(store.revision(), 0);
    }

    #[tokio::test]
    async fn test_api_stats() {
        let (_, router) = setup();
        let body = body_text(send(router, get_request("/api/stats")).await).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(json["totalProjects"], 4);
        assert_eq!(json["totalEarnings"], 8000.0);
        assert_eq!(json["tasksDue"], 1);
        assert_eq!(json["completedProjects"], 1);
    }

    #[tokio::test]
    async fn test_api_project_crud() {
        let (store, router) = setup();

        let response = send(router.clone(), json_request(
            "POST",
            "/api/projects",
            r#"{"name":"X","client":"Y","status":"Pending","deadline":"2024-05-01","budget":500,"description":""}"#,
        ))
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: Project = serde_json::from_str(&body_text(response).await).unwrap();
        assert!(!["1", "2", "3", "4"].contains(&created.id.as_str()));

        let response = send(router.clone(), json_request(
            "PATCH",
            &format!("/api/projects/{}", created.id),
            r#"{"status":"Completed"}"#,
        ))
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.stats().await, DashboardStats {
            total_projects: 5,
            total_earnings: 8500.0,
            tasks_due: 1,
            completed_projects: 2,
        });

        let response = send(router.clone(), json_request("DELETE", "/api/projects/2", "")).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(router, json_request("DELETE", "/api/projects/2", "")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(store.projects().await.len(), 4);
    }

    #[tokio::test]
    async fn test_api_patch_stores_trimmed_fields() {
        let (store, router) = setup();
        let response = send(router, json_request(
            "PATCH",
            "/api/projects/1",
            r#"{"name":"  Padded  ","client":" Tech Corp "}"#,
        ))
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let project = store.project("1").await.unwrap();
        assert_eq!(project.name, "Padded");
        assert_eq!(project.client, "Tech Corp");
        assert_eq!(project.budget, 15000.0);
        assert_eq!(project.deadline, "2024-02-15");
    }

    #[tokio::test]
    async fn test_api_rejects_invalid_patch() {
        let (store, router) = setup();
        let response = send(router, json_request(
            "PATCH",
            "/api/projects/1",
            r#"{"budget": -10}"#,
        ))
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(store.project("1").await.map(|p| p.budget), Some(15000.0));
    }

    #[tokio::test]
    async fn test_static_stylesheet() {
        let (_, router) = setup();
        let response = send(router, get_request("/static/style.css")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
