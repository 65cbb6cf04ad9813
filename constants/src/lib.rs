//! Shared tunables for the mural AR engine.
//!
//! Kept in a separate crate so asset tooling and the engine agree on paths,
//! layer numbers and naming conventions without depending on each other.

pub mod data_source;
pub mod render_settings;
pub mod selection;
pub mod tracking;
