//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::DefaultBodyLimit,
    http::{header::CACHE_CONTROL, HeaderValue},
    routing::{delete, get, post, put},
    Router,
};
use huescope_engine::Analyzer;
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{HistoryStore, InMemoryHistory, InMemoryPalettes, PaletteStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub analyzer: Arc<Analyzer>,
    pub history: Arc<dyn HistoryStore>,
    pub palettes: Arc<dyn PaletteStore>,
}

/// Create application state from configuration, with in-memory stores.
pub fn create_app_state(config: AppConfig) -> AppState {
    let analyzer = Arc::new(Analyzer::new(config.sample_options()));
    let history = Arc::new(InMemoryHistory::new(config.history.max_entries_per_session));
    let palettes = Arc::new(InMemoryPalettes::new());

    AppState {
        config: Arc::new(config),
        analyzer,
        history,
        palettes,
    }
}

/// Request body limit for a given decoded-image limit.
///
/// Base64 inflates by 4/3; the rest covers the JSON envelope.
fn body_limit(max_upload_bytes: usize) -> usize {
    max_upload_bytes.saturating_mul(4) / 3 + 64 * 1024
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
/// Responses are per-session or freshly computed, so they are marked
/// `Cache-Control: no-store`.
pub fn build_router(state: AppState) -> Router {
    let limit = body_limit(state.config.max_upload_bytes);

    Router::new()
        // Detection and analysis
        .route("/api/detect", post(api::detect::handle_detect))
        .route("/api/analyze", post(api::analyze::handle_analyze))
        // Session history and palettes
        .route(
            "/api/history",
            get(api::history::handle_list_history).delete(api::history::handle_clear_history),
        )
        .route("/api/history/:id", delete(api::history::handle_delete_history))
        .route(
            "/api/palettes",
            get(api::palettes::handle_list_palettes).post(api::palettes::handle_create_palette),
        )
        .route(
            "/api/palettes/:id",
            put(api::palettes::handle_update_palette).delete(api::palettes::handle_delete_palette),
        )
        // Catalogue
        .route("/api/colors/search", get(api::colors::handle_search))
        .route("/api/colors/name/:hex", get(api::colors::handle_color_name))
        .route("/api/colors/all", get(api::colors::handle_all_colors))
        .route("/api/colors/hue", get(api::colors::handle_hue_range))
        // Gradients
        .route("/api/gradient/generate", post(api::gradient::handle_generate))
        .route("/api/gradient/custom", post(api::gradient::handle_custom))
        .route("/api/gradient/presets", get(api::gradient::handle_presets))
        // Color vision
        .route(
            "/api/colorblindness/simulate",
            post(api::colorblindness::handle_simulate),
        )
        .route(
            "/api/colorblindness/all-types",
            post(api::colorblindness::handle_simulate_all),
        )
        .route(
            "/api/colorblindness/check-pair",
            post(api::colorblindness::handle_check_pair),
        )
        .route("/api/colorblindness/info", get(api::colorblindness::handle_info))
        .route(
            "/api/colorblindness/alternatives",
            post(api::colorblindness::handle_alternatives),
        )
        // Mixer
        .route("/api/mixer/mix", post(api::mixer::handle_mix))
        .route("/api/mixer/two-colors", post(api::mixer::handle_two_colors))
        .route("/api/mixer/palette", post(api::mixer::handle_palette))
        // Tools
        .route("/api/tools/compare", post(api::tools::handle_compare))
        .route("/api/tools/random", get(api::tools::handle_random))
        .route("/api/tools/convert", post(api::tools::handle_convert))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .fallback(|| async { ApiError::NotFound("Route") })
        // Add state and tracing
        .with_state(state)
        .layer(DefaultBodyLimit::max(limit))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}
