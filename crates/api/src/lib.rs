pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use state::AppState;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth routes
    let auth_routes = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login))
        .route("/logout", post(routes::auth::logout))
        .route("/refresh", post(routes::auth::refresh))
        .route("/me", get(routes::auth::me));

    // Profile routes
    let profile_routes = Router::new()
        .route("/", get(routes::profile::get))
        .route("/", put(routes::profile::update));

    // Owner-scoped invitation routes
    let invitation_routes = Router::new()
        .route("/", get(routes::invitation::list))
        .route("/", post(routes::invitation::create))
        .route("/{invitation_id}", get(routes::invitation::get))
        .route("/{invitation_id}", put(routes::invitation::update))
        .route("/{invitation_id}", delete(routes::invitation::delete));

    // Public guest-facing routes (no auth by design)
    let public_routes = Router::new().route("/{slug}", get(routes::public::get_by_slug));
    let rsvp_routes = Router::new().route("/", post(routes::rsvp::submit));
    let wish_routes = Router::new()
        .route("/", get(routes::wish::list))
        .route("/", post(routes::wish::create));

    // Template catalog
    let template_routes = Router::new().route("/", get(routes::template::list));

    // Admin routes
    let admin_routes = Router::new()
        .route("/user", get(routes::admin::list_users))
        .route("/user/{user_id}", put(routes::admin::update_user));

    // Upload. The transport limit sits above the configured cap so the
    // handler gets to reject oversized files itself with a clear message.
    let upload_routes = Router::new()
        .route("/", post(routes::upload::upload))
        .layer(DefaultBodyLimit::max(
            (state.settings.uploads.max_size_bytes as usize).saturating_mul(2),
        ));

    // Compose API
    let api = Router::new()
        .nest("/auth", auth_routes)
        .nest("/profile", profile_routes)
        .nest("/invitation", invitation_routes)
        .nest("/public", public_routes)
        .nest("/rsvp", rsvp_routes)
        .nest("/wish", wish_routes)
        .nest("/template", template_routes)
        .nest("/admin", admin_routes)
        .nest("/upload", upload_routes);

    // Health check
    let health = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api)
        .merge(health)
        .nest_service("/uploads", ServeDir::new(&state.settings.uploads.dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
