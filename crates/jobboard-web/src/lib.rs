//! Axum + Askama front end for the job board.

mod config;
mod error;
mod views;

use std::sync::Arc;

use askama::Template;
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Path as AxumPath, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use jobboard_core::applications::{mock_applications, Application};
use jobboard_core::companies::{CompanyDirectory, ALL_INDUSTRIES, INDUSTRIES};
use jobboard_core::{AdvancedFilterState, FilterQuery, JobFilterEngine, JobPosting};
use jobboard_storage::resume::{ALLOWED_CONTENT_TYPES, MAX_RESUME_BYTES};
use jobboard_storage::{parse_resume, ResumeService, ResumeStore, TracingNotifier};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, warn};

pub use config::AppConfig;
pub use error::WebError;
use views::{JobCard, JobDetailTemplate, JobsPageTemplate};

pub const CRATE_NAME: &str = "jobboard-web";

const FILE_NAME_HEADER: &str = "x-file-name";
const SIDEBAR_FIELD: &str = "sidebar";

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<[JobPosting]>,
    pub page_size: usize,
    pub companies: CompanyDirectory,
    pub applications: Vec<Application>,
    pub resumes: ResumeService,
}

impl AppState {
    pub fn new(catalog: Vec<JobPosting>, page_size: usize, resumes: ResumeService) -> Self {
        Self {
            catalog: catalog.into(),
            page_size,
            companies: CompanyDirectory::mock(),
            applications: mock_applications(),
            resumes,
        }
    }

    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let catalog = config.catalog_source().load().await?;
        let store = ResumeStore::new(&config.resume_dir, &config.public_base_url);
        let resumes = ResumeService::new(store, Arc::new(TracingNotifier));
        Ok(Self::new(catalog, config.page_size, resumes))
    }

    /// A fresh engine over the shared catalog. Each request evaluates its
    /// own query, so no filter state lives on the server.
    pub fn engine(&self) -> JobFilterEngine {
        JobFilterEngine::new(self.catalog.clone(), self.page_size)
    }
}

#[derive(Debug, Deserialize, Default)]
struct JobsQuery {
    search: Option<String>,
    category: Option<String>,
    page: Option<i64>,
    /// Advanced filter snapshot as JSON.
    filters: Option<String>,
    /// Snapshot posted by the sidebar form; takes precedence over `filters`.
    #[serde(skip)]
    sidebar: Option<AdvancedFilterState>,
}

impl JobsQuery {
    /// Builds a query from raw form pairs. A `sidebar` field marks a sidebar
    /// submission: its `<group>.<option>` checkboxes form the whole snapshot.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = JobsQuery::default();
        let mut sidebar: Option<AdvancedFilterState> = None;
        let mut toggles = Vec::new();
        for (key, value) in pairs {
            match key.as_str() {
                "search" => query.search = Some(value),
                "category" => query.category = Some(value),
                "page" => query.page = value.trim().parse().ok(),
                "filters" => query.filters = Some(value),
                SIDEBAR_FIELD => sidebar = Some(AdvancedFilterState::default()),
                other => {
                    if let Some((group, option)) = other.split_once('.') {
                        toggles.push((group.to_string(), option.to_string()));
                    }
                }
            }
        }
        if let Some(state) = sidebar.as_mut() {
            for (group, option) in &toggles {
                state.set_toggle(group, option, true);
            }
        }
        query.sidebar = sidebar;
        query
    }
}

#[derive(Debug, Serialize)]
struct JobsResponse {
    jobs: Vec<JobPosting>,
    filtered_count: usize,
    page: usize,
    total_pages: usize,
    page_size: usize,
    heading: String,
    show_pagination: bool,
}

#[derive(Debug, Deserialize, Default)]
struct CompaniesQuery {
    search: Option<String>,
    industry: Option<String>,
    page: Option<i64>,
}

#[derive(Debug, Serialize)]
struct ApplicationView {
    #[serde(flatten)]
    application: Application,
    progress_percent: usize,
    status_label: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParseRequest {
    #[serde(default)]
    file_url: Option<String>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(jobs_page_handler))
        .route("/jobs", get(jobs_page_handler))
        .route("/jobs/{id}", get(job_detail_page_handler))
        .route("/api/jobs", get(jobs_handler))
        .route("/api/jobs/{id}", get(job_handler))
        .route("/api/categories", get(categories_handler))
        .route("/api/companies", get(companies_handler))
        .route("/api/companies/industries", get(industries_handler))
        .route("/api/applications", get(applications_handler))
        .route("/api/resumes", post(upload_resume_handler).get(list_resumes_handler))
        .route("/api/resumes/parse", post(parse_url_handler))
        .route(
            "/api/resumes/{key}",
            get(download_resume_handler).delete(delete_resume_handler),
        )
        .route("/api/resumes/{key}/parse", post(parse_stored_handler))
        .route("/assets/static/app.css", get(app_css_handler))
        .layer(DefaultBodyLimit::max(MAX_RESUME_BYTES * 2))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

pub async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(config).await?;
    let listener = TcpListener::bind(("0.0.0.0", config.web_port)).await?;
    info!(port = config.web_port, postings = state.catalog.len(), "job board listening");
    axum::serve(listener, app(state)).await?;
    Ok(())
}

pub async fn serve_from_env() -> anyhow::Result<()> {
    serve(&AppConfig::from_env()).await
}

/// Malformed filter JSON is treated as an empty snapshot.
fn parse_filters(raw: Option<&str>) -> AdvancedFilterState {
    match raw.map(str::trim) {
        None | Some("") => AdvancedFilterState::default(),
        Some(raw) => serde_json::from_str(raw).unwrap_or_else(|err| {
            warn!(error = %err, "ignoring malformed filters parameter");
            AdvancedFilterState::default()
        }),
    }
}

fn evaluate(state: &AppState, query: JobsQuery) -> JobFilterEngine {
    let filter_query = FilterQuery {
        search_term: query.search.unwrap_or_default(),
        selected_category: query.category.unwrap_or_default(),
        advanced_filters: match query.sidebar {
            Some(snapshot) => snapshot,
            None => parse_filters(query.filters.as_deref()),
        },
    };
    let _span = info_span!(
        "evaluate_jobs",
        search = %filter_query.search_term,
        category = %filter_query.selected_category,
    )
    .entered();
    let mut engine = state.engine();
    engine.apply(filter_query);
    if let Some(page) = query.page {
        engine.set_current_page(page);
    }
    engine
}

fn filters_json(engine: &JobFilterEngine) -> String {
    let filters = &engine.query().advanced_filters;
    if filters.is_empty() {
        return String::new();
    }
    serde_json::to_string(filters).unwrap_or_default()
}

async fn jobs_page_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let engine = evaluate(&state, JobsQuery::from_pairs(pairs));
    let filters = filters_json(&engine);
    render_html(JobsPageTemplate::from_engine(&engine, filters))
}

async fn job_detail_page_handler(
    State(state): State<Arc<AppState>>,
    AxumPath(id): AxumPath<String>,
) -> Response {
    match state.catalog.iter().find(|job| job.id == id) {
        Some(job) => render_html(JobDetailTemplate {
            job: JobCard::from(job),
        }),
        None => (StatusCode::NOT_FOUND, Html("Job not found".to_string())).into_response(),
    }
}

async fn jobs_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<JobsQuery>,
) -> Json<JobsResponse> {
    let engine = evaluate(&state, query);
    Json(JobsResponse {
        jobs: engine.current_jobs().to_vec(),
        filtered_count: engine.result_count(),
        page: engine.current_page(),
        total_pages: engine.total_pages(),
        page_size: engine.page_size(),
        heading: engine.heading(),
        show_pagination: engine.needs_pagination(),
    })
}

async fn job_handler(
    State(state): State<Arc<AppState>>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<JobPosting>, WebError> {
    state
        .catalog
        .iter()
        .find(|job| job.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| WebError::NotFound(format!("job {id}")))
}

async fn categories_handler(State(state): State<Arc<AppState>>) -> Response {
    Json(state.engine().category_counts()).into_response()
}

async fn companies_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CompaniesQuery>,
) -> Response {
    let page = state.companies.search(
        query.search.as_deref().unwrap_or(""),
        query.industry.as_deref().unwrap_or(ALL_INDUSTRIES),
        query.page.unwrap_or(1),
    );
    Json(page).into_response()
}

async fn industries_handler() -> Json<[&'static str; 9]> {
    Json(INDUSTRIES)
}

async fn applications_handler(State(state): State<Arc<AppState>>) -> Response {
    let views = state
        .applications
        .iter()
        .map(|application| ApplicationView {
            progress_percent: application.progress_percent(),
            status_label: application.status.label(),
            application: application.clone(),
        })
        .collect::<Vec<_>>();
    Json(views).into_response()
}

async fn upload_resume_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, WebError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::trim)
        .unwrap_or("");
    let file_name = headers
        .get(FILE_NAME_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("resume");
    let stored = state.resumes.upload(file_name, content_type, &body).await?;
    Ok((StatusCode::CREATED, Json(stored)).into_response())
}

async fn list_resumes_handler(State(state): State<Arc<AppState>>) -> Result<Response, WebError> {
    Ok(Json(state.resumes.list().await?).into_response())
}

async fn download_resume_handler(
    State(state): State<Arc<AppState>>,
    AxumPath(key): AxumPath<String>,
) -> Result<Response, WebError> {
    let bytes = state.resumes.store().read(&key).await?;
    let content_type = ALLOWED_CONTENT_TYPES
        .iter()
        .find(|(_, ext)| key.ends_with(&format!(".{ext}")))
        .map(|(mime, _)| *mime)
        .unwrap_or("application/octet-stream");
    Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
}

async fn delete_resume_handler(
    State(state): State<Arc<AppState>>,
    AxumPath(key): AxumPath<String>,
) -> Result<StatusCode, WebError> {
    state.resumes.delete(&key).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn parse_stored_handler(
    State(state): State<Arc<AppState>>,
    AxumPath(key): AxumPath<String>,
) -> Result<Response, WebError> {
    let parsed = state.resumes.parse(&key).await?;
    Ok(Json(parsed).into_response())
}

/// Parses the résumé at `fileUrl`. Failures are reported in the body as
/// `{"success": false, "error": ..}` with a 500 status.
async fn parse_url_handler(body: Bytes) -> Response {
    let result = serde_json::from_slice::<ParseRequest>(&body)
        .map_err(|err| err.to_string())
        .and_then(|req| {
            parse_resume(req.file_url.as_deref().unwrap_or("")).map_err(|err| err.to_string())
        });
    match result {
        Ok(data) => Json(serde_json::json!({ "success": true, "data": data })).into_response(),
        Err(message) => {
            warn!(error = %message, "resume parsing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "success": false, "error": message })),
            )
                .into_response()
        }
    }
}

async fn app_css_handler() -> Response {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../assets/app.css"),
    )
        .into_response()
}

fn render_html<T: Template>(tpl: T) -> Response {
    match tpl.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => server_error(anyhow::anyhow!(err.to_string())),
    }
}

fn server_error(err: anyhow::Error) -> Response {
    tracing::error!("render failed: {err:?}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(format!("Server error: {}", err)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use jobboard_core::mock_catalog;
    use jobboard_storage::RecordingNotifier;
    use serde_json::Value;
    use tower::ServiceExt;

    struct Harness {
        app: Router,
        notifier: Arc<RecordingNotifier>,
        _dir: tempfile::TempDir,
    }

    fn harness() -> Harness {
        let dir = tempfile::tempdir().unwrap();
        let notifier = Arc::new(RecordingNotifier::default());
        let store = ResumeStore::new(dir.path(), "http://localhost:8000/api/resumes");
        let resumes = ResumeService::new(store, notifier.clone());
        let state = AppState::new(mock_catalog(), 6, resumes);
        Harness {
            app: app(state),
            notifier,
            _dir: dir,
        }
    }

    async fn get(app: &Router, uri: &str) -> Response {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(resp: Response) -> String {
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    async fn body_json(resp: Response) -> Value {
        serde_json::from_str(&body_text(resp).await).unwrap()
    }

    fn ids(value: &Value) -> Vec<String> {
        value["jobs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|j| j["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn jobs_api_defaults_to_first_page_of_full_catalog() {
        let h = harness();
        let resp = get(&h.app, "/api/jobs").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["filtered_count"], 12);
        assert_eq!(json["total_pages"], 2);
        assert_eq!(json["page"], 1);
        assert_eq!(json["heading"], "Recommended Jobs");
        assert_eq!(json["show_pagination"], true);
        assert_eq!(ids(&json), vec!["1", "2", "3", "4", "5", "6"]);

        let second = body_json(get(&h.app, "/api/jobs?page=2").await).await;
        assert_eq!(ids(&second), vec!["7", "8", "9", "10", "11", "12"]);
    }

    #[tokio::test]
    async fn jobs_api_applies_search_term() {
        let h = harness();
        let json = body_json(get(&h.app, "/api/jobs?search=react").await).await;
        assert_eq!(ids(&json), vec!["2"]);
        assert_eq!(json["show_pagination"], false);
    }

    #[tokio::test]
    async fn jobs_api_clamps_out_of_range_page() {
        let h = harness();
        let json = body_json(get(&h.app, "/api/jobs?category=Designer&page=9").await).await;
        assert_eq!(json["heading"], "Designer Jobs");
        assert_eq!(json["page"], 1);
        assert_eq!(ids(&json), vec!["1", "12"]);

        let json = body_json(get(&h.app, "/api/jobs?page=-4").await).await;
        assert_eq!(json["page"], 1);
    }

    #[tokio::test]
    async fn jobs_api_reads_filter_snapshot() {
        let h = harness();
        let json = body_json(
            get(
                &h.app,
                "/api/jobs?filters=%7B%22workingSchedule%22%3A%7B%22fullTime%22%3Atrue%7D%7D",
            )
            .await,
        )
        .await;
        assert_eq!(json["filtered_count"], 6);
        assert_eq!(ids(&json), vec!["1", "4", "6", "9", "10", "12"]);
    }

    #[tokio::test]
    async fn jobs_api_ignores_malformed_filters() {
        let h = harness();
        let json = body_json(get(&h.app, "/api/jobs?filters=not-json").await).await;
        assert_eq!(json["filtered_count"], 12);
    }

    #[tokio::test]
    async fn job_lookup_and_missing_job() {
        let h = harness();
        let json = body_json(get(&h.app, "/api/jobs/3").await).await;
        assert_eq!(json["title"], "Backend Developer");

        let resp = get(&h.app, "/api/jobs/999").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json = body_json(resp).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");

        let resp = get(&h.app, "/jobs/999").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn categories_api_lists_every_category() {
        let h = harness();
        let json = body_json(get(&h.app, "/api/categories").await).await;
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0]["category"], "HR");
    }

    #[tokio::test]
    async fn companies_api_filters_by_industry() {
        let h = harness();
        let json = body_json(get(&h.app, "/api/companies?industry=Software").await).await;
        assert_eq!(json["total"], 2);
        assert_eq!(json["page"], 1);
    }

    #[tokio::test]
    async fn industries_api_lists_the_facet() {
        let h = harness();
        let json = body_json(get(&h.app, "/api/companies/industries").await).await;
        let industries = json.as_array().unwrap();
        assert_eq!(industries.len(), 9);
        assert_eq!(industries[0], "All Industries");
        assert!(industries.iter().any(|i| i == "Software"));
    }

    #[tokio::test]
    async fn applications_api_reports_progress() {
        let h = harness();
        let json = body_json(get(&h.app, "/api/applications").await).await;
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[0]["progress_percent"].as_u64().is_some());
        assert!(rows[0]["status_label"].as_str().is_some());
    }

    #[tokio::test]
    async fn listing_page_renders_heading_and_empty_state() {
        let h = harness();
        let resp = get(&h.app, "/").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let text = body_text(resp).await;
        assert!(text.contains("Recommended Jobs"));
        assert!(text.contains("Frontend Developer"));

        let text = body_text(get(&h.app, "/jobs?category=Designer").await).await;
        assert!(text.contains("Designer Jobs"));

        let text = body_text(get(&h.app, "/jobs?search=zzzz").await).await;
        assert!(text.contains("No jobs found"));
        assert!(!text.contains("class=\"pagination\""));
    }

    #[test]
    fn sidebar_pairs_replace_the_filter_snapshot() {
        let pairs = |items: &[(&str, &str)]| {
            items
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Vec<_>>()
        };
        let query = JobsQuery::from_pairs(pairs(&[
            ("search", "data"),
            ("filters", r#"{"workingSchedule":{"contract":true}}"#),
            ("sidebar", "1"),
            ("workingSchedule.fullTime", "true"),
            ("page", ""),
        ]));
        assert_eq!(query.search.as_deref(), Some("data"));
        assert_eq!(query.page, None);
        let snapshot = query.sidebar.expect("sidebar snapshot");
        assert_eq!(
            snapshot.active_options("workingSchedule").collect::<Vec<_>>(),
            vec!["fullTime"]
        );

        let query = JobsQuery::from_pairs(pairs(&[("workingSchedule.fullTime", "true")]));
        assert!(query.sidebar.is_none());
    }

    #[tokio::test]
    async fn sidebar_form_filters_the_listing() {
        let h = harness();
        let text = body_text(get(&h.app, "/jobs?sidebar=1&workingSchedule.fullTime=true").await).await;
        assert!(text.contains("<span class=\"badge\">6</span>"));
        assert!(text.contains("name=\"workingSchedule.fullTime\" value=\"true\" checked"));
        assert!(text.contains("Reset all"));

        // An empty sidebar submission clears a previously carried snapshot.
        let text = body_text(
            get(
                &h.app,
                "/jobs?sidebar=1&filters=%7B%22workingSchedule%22%3A%7B%22contract%22%3Atrue%7D%7D",
            )
            .await,
        )
        .await;
        assert!(text.contains("<span class=\"badge\">12</span>"));
        assert!(!text.contains("Reset all"));
    }

    #[tokio::test]
    async fn stylesheet_is_served() {
        let h = harness();
        let resp = get(&h.app, "/assets/static/app.css").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE].to_str().unwrap(),
            "text/css; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn resume_upload_list_parse_delete_flow() {
        let h = harness();
        let resp = h
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/resumes")
                    .header(header::CONTENT_TYPE, "application/pdf")
                    .header(FILE_NAME_HEADER, "cv.pdf")
                    .body(Body::from("%PDF-1.4 resume"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let stored = body_json(resp).await;
        let key = stored["key"].as_str().unwrap().to_string();
        assert!(key.ends_with(".pdf"));

        let listed = body_json(get(&h.app, "/api/resumes").await).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let resp = get(&h.app, &format!("/api/resumes/{key}")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE].to_str().unwrap(),
            "application/pdf"
        );

        let resp = h
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/resumes/{key}/parse"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let parsed = body_json(resp).await;
        assert_eq!(parsed["personalDetails"]["fullName"], "John Doe");

        let resp = h
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/resumes/{key}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let listed = body_json(get(&h.app, "/api/resumes").await).await;
        assert!(listed.as_array().unwrap().is_empty());
        assert_eq!(
            h.notifier.titles(),
            vec![
                "File uploaded successfully",
                "Resume parsing started",
                "Resume parsed successfully",
                "File deleted",
            ]
        );
    }

    #[tokio::test]
    async fn parsing_a_malformed_key_is_a_bad_request() {
        let h = harness();
        let resp = h
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/resumes/nope/parse")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert_eq!(json["error"]["code"], "INVALID_KEY");
        assert_eq!(h.notifier.titles(), vec!["Parsing failed"]);
    }

    #[tokio::test]
    async fn resume_upload_rejects_unsupported_type() {
        let h = harness();
        let resp = h
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/resumes")
                    .header(header::CONTENT_TYPE, "image/png")
                    .body(Body::from("png"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let json = body_json(resp).await;
        assert_eq!(json["error"]["code"], "INVALID_FILE_TYPE");
        assert_eq!(h.notifier.titles(), vec!["Invalid file type"]);
    }

    #[tokio::test]
    async fn parse_endpoint_wraps_result() {
        let h = harness();
        let resp = h
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/resumes/parse")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"fileUrl":"http://localhost/cv.pdf"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["personalDetails"]["fullName"], "John Doe");

        let resp = h
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/resumes/parse")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(resp).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "File URL is required");
    }
}
