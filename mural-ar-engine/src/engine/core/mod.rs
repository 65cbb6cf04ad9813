//! Core application setup.
//!
//! Wires plugins, startup spawning and platform-specific window settings for
//! both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
pub mod app_setup;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration and transparency for web targets.
pub mod window_config;
