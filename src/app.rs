// Router assembly. Each resource group chains its public and admin method
// handlers on the shared path; the session middleware runs on every route.
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config;
use crate::handlers::{protected, public};
use crate::middleware::session::resolve_session;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_routes())
        .merge(project_routes())
        .merge(service_routes())
        .merge(product_routes())
        .merge(job_routes())
        .merge(application_routes())
        .merge(blog_routes())
        .layer(middleware::from_fn_with_state(state.clone(), resolve_session))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    use public::auth;

    Router::new()
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/user", get(auth::current_user))
}

fn project_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/projects",
            get(public::projects::list).post(protected::projects::create),
        )
        .route("/api/projects/featured", get(public::projects::featured))
        .route(
            "/api/projects/category/:category",
            get(public::projects::by_category),
        )
        .route(
            "/api/projects/:id",
            get(public::projects::get)
                .put(protected::projects::update)
                .delete(protected::projects::remove),
        )
}

fn service_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/services",
            get(public::services::list).post(protected::services::create),
        )
        .route(
            "/api/services/:id",
            get(public::services::get)
                .put(protected::services::update)
                .delete(protected::services::remove),
        )
}

fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/products",
            get(public::products::list).post(protected::products::create),
        )
        .route("/api/products/featured", get(public::products::featured))
        .route(
            "/api/products/category/:category",
            get(public::products::by_category),
        )
        .route(
            "/api/products/:id",
            get(public::products::get)
                .put(protected::products::update)
                .delete(protected::products::remove),
        )
}

fn job_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/jobs",
            get(public::jobs::list_active).post(protected::jobs::create),
        )
        .route("/api/jobs/all", get(protected::jobs::list_all))
        .route(
            "/api/jobs/:id",
            get(public::jobs::get)
                .put(protected::jobs::update)
                .delete(protected::jobs::remove),
        )
}

fn application_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/applications",
            get(protected::applications::list).post(public::applications::submit),
        )
        .route(
            "/api/applications/job/:job_id",
            get(protected::applications::by_job),
        )
        .route(
            "/api/applications/:id",
            get(protected::applications::get).delete(protected::applications::remove),
        )
        // The handler enforces the 5 MiB resume ceiling; the transport cap
        // only has to sit above it so oversized files reach the handler.
        .layer(DefaultBodyLimit::max(config::config().uploads.max_body_bytes))
}

fn blog_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/blog",
            get(public::blog::list_published).post(protected::blog::create),
        )
        .route("/api/blog/all", get(protected::blog::list_all))
        .route(
            "/api/blog/:id",
            get(public::blog::get)
                .put(protected::blog::update)
                .delete(protected::blog::remove),
        )
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "PixelPerfect API",
        "version": version,
        "endpoints": {
            "auth": "/api/register, /api/login, /api/logout, /api/user",
            "projects": "/api/projects (public reads, admin writes)",
            "services": "/api/services (public reads, admin writes)",
            "products": "/api/products (public reads, admin writes)",
            "jobs": "/api/jobs (public, active only), /api/jobs/all (admin)",
            "applications": "/api/applications (public multipart submit, admin reads)",
            "blog": "/api/blog (public, published only), /api/blog/all (admin)",
        }
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}
