//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API + live WebSocket endpoints and stitches
//! them with Leptos SSR rendering under a single Axum router. The Leptos
//! app is the site; `/pkg` serves its compiled assets.

pub mod chat;
pub mod records;
pub mod stats;
pub mod ws;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API + live feed.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chat", post(chat::post_chat))
        .route("/api/stats/coding", get(stats::coding_stats))
        .route("/api/comments", get(records::list_comments).post(records::create_comment))
        .route("/api/comments/{id}/like", post(records::like_comment))
        .route(
            "/api/guestbook",
            get(records::list_guestbook).post(records::create_guestbook_entry),
        )
        .route(
            "/api/testimonials",
            get(records::list_testimonials).post(records::create_testimonial),
        )
        .route("/api/contact", post(records::submit_contact))
        .route("/api/scores", get(records::list_scores).post(records::submit_score))
        .route("/api/counters/{name}", get(records::get_counter))
        .route("/api/counters/{name}/hit", post(records::hit_counter))
        .route("/api/live", get(ws::handle_live))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Leptos SSR frontend rendered at `/` with compiled assets under `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
fn leptos_routes() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .with_state(leptos_options);

    Ok(router)
}

/// The full application router. A broken Leptos config degrades to
/// API-only instead of refusing to boot — the widgets' data plane stays up.
pub fn app(state: AppState) -> Router {
    let api = api_routes(state);

    let merged = match leptos_routes() {
        Ok(leptos) => api.merge(leptos),
        Err(reason) => {
            tracing::warn!(%reason, "leptos SSR disabled — serving API only");
            api
        }
    };

    merged
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
