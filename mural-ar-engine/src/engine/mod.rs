//! Scene-side engine: app setup, data model, document loading, the anchored
//! content root and the wayspot anchor controller.

/// Wayspot tracking state machine and the systems applying it to the scene.
pub mod anchor;

/// Mural and calibration data model.
pub mod assets;

/// AR camera spawning and pose streaming.
pub mod camera;

/// Application setup and window configuration.
pub mod core;

/// Asynchronous document loading.
pub mod loading;

/// Content root hierarchy and mural scene.
pub mod scene;
