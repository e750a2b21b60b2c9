//! Dropout-risk desktop client: a single form backed by a remote prediction service.

/// Application folder resolution.
pub mod app_dirs;
/// Persisted settings.
pub mod config;
/// egui form, controller, and state.
pub mod egui_app;
mod http_client;
/// Tracing subscriber setup.
pub mod logging;
/// Prediction service wire types and client.
pub mod prediction;
