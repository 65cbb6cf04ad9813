//! Data model for murals and wayspot calibration.
//!
//! Documents are loaded as Bevy assets through `bevy_common_assets` and then
//! validated into plain value types held in resources.

/// Wayspot calibration document and the read-only lookup built from it.
pub mod calibration;

/// Mural description document, figure records and validation errors.
pub mod mural;

/// Rigid transform value types shared by calibration and tracking.
pub mod pose;
