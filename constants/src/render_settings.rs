use bevy::prelude::*;

/// Reticle size in logical pixels.
pub const RETICLE_SIZE: f32 = 18.0;

pub const RETICLE_COLOUR: Color = Color::srgba(1.0, 1.0, 1.0, 0.8);

pub const CAPTION_FONT_SIZE: f32 = 22.0;
pub const DETAIL_FONT_SIZE: f32 = 16.0;
pub const DEBUG_FONT_SIZE: f32 = 12.0;

/// Number of log lines kept for the on-screen debug panel.
pub const DEBUG_LOG_CAPACITY: usize = 32;

/// Native-only camera placement used when no AR camera pose is streamed in.
pub const NATIVE_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 1.5, 4.0);
