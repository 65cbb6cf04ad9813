//! Augmented-reality overlay for artist-labelled murals.
//!
//! A tracked wayspot positions the mural content, a per-wayspot calibration
//! offset aligns it with the painted wall, and a centre-screen reticle picks
//! figures whose captions unfold in a small overlay.

pub mod engine;
pub mod rpc;
pub mod tools;

pub use engine::core::app_setup::create_app;
