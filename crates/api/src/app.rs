use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use persistence::{Repositories, Storage};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, require_admin, security_headers_middleware, trace_id,
};
use crate::routes::{
    auth, carts, catalog, health, orders, pages, posts, reviews, service_pages, settings, team,
    uploads,
};
use crate::services::{CartRegistry, SessionStore, TelegramNotifier};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub storage: Arc<dyn Storage>,
    pub repos: Arc<Repositories>,
    pub carts: Arc<CartRegistry>,
    pub sessions: Arc<SessionStore>,
    pub notifier: Arc<TelegramNotifier>,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>, repos: Repositories) -> Self {
        let sessions = Arc::new(SessionStore::new(config.auth.session_ttl_secs));
        let notifier = Arc::new(TelegramNotifier::new(config.notifications.clone()));

        AppState {
            config: Arc::new(config),
            storage,
            repos: Arc::new(repos),
            carts: Arc::new(CartRegistry::new()),
            sessions,
            notifier,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    let config = state.config.clone();

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/catalog", get(catalog::list_public))
        .route("/api/catalog/:slug", get(catalog::get_category))
        .route("/api/carts", post(carts::create_cart))
        .route("/api/carts/:id", get(carts::get_cart))
        .route(
            "/api/carts/:id/items",
            post(carts::add_item).delete(carts::clear_cart),
        )
        .route(
            "/api/carts/:id/items/:service_id",
            put(carts::update_quantity).delete(carts::remove_item),
        )
        .route("/api/orders", post(orders::submit))
        .route("/api/service-pages", get(service_pages::list_public))
        .route("/api/service-pages/:id", get(service_pages::get))
        .route("/api/posts", get(posts::list_public))
        .route("/api/posts/:id", get(posts::get))
        .route("/api/team", get(team::list_public))
        .route(
            "/api/reviews",
            get(reviews::list_public).post(reviews::submit),
        )
        .route("/api/pages/contact", get(pages::get_contact))
        .route("/api/pages/home", get(pages::get_homepage))
        .route("/api/settings", get(settings::get));

    // Admin routes (require a live session token)
    let admin_routes = Router::new()
        .route(
            "/api/admin/catalog",
            get(catalog::list_admin).post(catalog::create_category),
        )
        .route("/api/admin/catalog/reorder", post(catalog::reorder_categories))
        .route(
            "/api/admin/catalog/:slug",
            put(catalog::update_category).delete(catalog::delete_category),
        )
        .route(
            "/api/admin/catalog/:slug/toggle-visibility",
            post(catalog::toggle_category_visibility),
        )
        .route("/api/admin/catalog/:slug/services", post(catalog::add_service))
        .route(
            "/api/admin/catalog/:slug/services/reorder",
            post(catalog::reorder_services),
        )
        .route(
            "/api/admin/catalog/:slug/services/:service_id",
            put(catalog::update_service).delete(catalog::delete_service),
        )
        .route("/api/admin/orders", get(orders::list))
        .route(
            "/api/admin/orders/:id",
            get(orders::get).delete(orders::delete),
        )
        .route("/api/admin/orders/:id/status", put(orders::update_status))
        .route(
            "/api/admin/service-pages",
            get(service_pages::list_admin).post(service_pages::create),
        )
        .route(
            "/api/admin/service-pages/:id",
            put(service_pages::update).delete(service_pages::remove),
        )
        .route(
            "/api/admin/service-pages/:id/toggle-visibility",
            post(service_pages::toggle_visibility),
        )
        .route(
            "/api/admin/service-pages/:id/restore",
            post(service_pages::restore),
        )
        .route(
            "/api/admin/posts",
            get(posts::list_admin).post(posts::create),
        )
        .route(
            "/api/admin/posts/:id",
            put(posts::update).delete(posts::remove),
        )
        .route(
            "/api/admin/posts/:id/toggle-visibility",
            post(posts::toggle_visibility),
        )
        .route("/api/admin/posts/:id/restore", post(posts::restore))
        .route("/api/admin/team", get(team::list_admin).post(team::create))
        .route(
            "/api/admin/team/:id",
            get(team::get).put(team::update).delete(team::remove),
        )
        .route(
            "/api/admin/team/:id/toggle-visibility",
            post(team::toggle_visibility),
        )
        .route("/api/admin/team/:id/restore", post(team::restore))
        .route("/api/admin/reviews", get(reviews::list_admin))
        .route("/api/admin/reviews/:id", delete(reviews::delete))
        .route("/api/admin/reviews/:id/status", put(reviews::update_status))
        .route("/api/admin/pages/contact", put(pages::update_contact))
        .route("/api/admin/pages/home", put(pages::update_homepage))
        .route("/api/admin/settings", post(settings::update))
        .route(
            "/api/admin/settings/integrations",
            get(settings::get_integrations).put(settings::update_integrations),
        )
        .route(
            "/api/admin/uploads",
            get(uploads::list).post(uploads::upload),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    // Uploaded images are served statically.
    let static_uploads = ServeDir::new(&config.storage.uploads_dir);

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .nest_service("/uploads", static_uploads)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
