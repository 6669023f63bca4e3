//! Library exports for reuse in integration tests.
/// Application directory helpers.
pub mod app_dirs;
/// Launcher item model and persisted deck entries.
pub mod apps;
/// Persisted configuration.
pub mod config;
/// Drag-and-drop plumbing.
pub mod drag;
/// Concrete drop targets and their collaborators.
pub mod drop_targets;
/// Shared egui UI modules.
pub mod egui_app;
/// Logging setup.
pub mod logging;
