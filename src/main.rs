// src/main.rs

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() is fine here: if configuration fails, the app must not start.
    let app_state = AppState::new()
        .await
        .expect("Failed to initialize application state.");

    // Run the SQLx migrations on startup.
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Failed to run database migrations.");

    tracing::info!("✅ Database migrations applied successfully!");

    // Public routes: register/login/refresh; the profile pair is gated by
    // the extractor inside its handlers.
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/refresh", post(handlers::auth::refresh))
        .route(
            "/profile",
            get(handlers::auth::get_profile).put(handlers::auth::update_profile),
        );

    let site_routes = Router::new()
        .route(
            "/",
            get(handlers::sites::list_sites).post(handlers::sites::create_site),
        )
        .route(
            "/{id}",
            get(handlers::sites::get_site)
                .put(handlers::sites::update_site)
                .delete(handlers::sites::delete_site),
        );

    let project_routes = Router::new()
        .route(
            "/",
            get(handlers::projects::list_projects).post(handlers::projects::create_project),
        )
        .route(
            "/{id}",
            get(handlers::projects::get_project)
                .put(handlers::projects::update_project)
                .delete(handlers::projects::delete_project),
        );

    // The catalog reads are public; writes require the listing farmer.
    let product_routes = Router::new()
        .route(
            "/",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/{id}",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        );

    let finance_routes = Router::new()
        .route(
            "/transactions",
            get(handlers::finance::list_transactions).post(handlers::finance::create_transaction),
        )
        .route(
            "/transactions/{id}",
            get(handlers::finance::get_transaction)
                .put(handlers::finance::update_transaction)
                .delete(handlers::finance::delete_transaction),
        )
        .route(
            "/investments",
            get(handlers::finance::list_investments).post(handlers::finance::create_investment),
        )
        .route(
            "/investments/{id}",
            get(handlers::finance::get_investment)
                .put(handlers::finance::update_investment)
                .delete(handlers::finance::delete_investment),
        );

    let analytics_routes = Router::new().route("/summary", get(handlers::analytics::get_summary));

    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/sites", site_routes)
        .nest("/api/projects", project_routes)
        .nest("/api/products", product_routes)
        .nest("/api/finance", finance_routes)
        .nest("/api/analytics", analytics_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to start the TCP listener");
    tracing::info!(
        "🚀 Server listening on {}",
        listener.local_addr().expect("listener has a local address")
    );
    axum::serve(listener, app).await.expect("Axum server error");
}
