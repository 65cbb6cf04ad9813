use bevy::prelude::*;
use bevy::window::PresentMode;

pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            // Composited over the camera feed by the host page.
            transparent: true,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Mural AR".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

/// Clear colour behind the content: transparent on the web so the camera
/// feed shows through, dark natively.
pub fn clear_colour() -> ClearColor {
    #[cfg(target_arch = "wasm32")]
    {
        ClearColor(Color::NONE)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        ClearColor(Color::srgb(0.05, 0.05, 0.07))
    }
}
