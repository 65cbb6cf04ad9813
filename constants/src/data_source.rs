/// Directory (relative to the asset root) holding per-mural documents and scenes.
pub const MURAL_DIRECTORY: &str = "murals";

/// Extension registered for mural description documents.
pub const MURAL_DOCUMENT_EXTENSION: &str = "mural.json";

/// Extension registered for wayspot calibration documents.
pub const CALIBRATION_DOCUMENT_EXTENSION: &str = "wayspots.json";

/// Calibration document shared by every mural.
pub const CALIBRATION_DOCUMENT_PATH: &str = "wayspots/wayspots.json";

/// Mural loaded when neither the URL fragment nor the command line names one.
pub const DEFAULT_MURAL_ID: &str = "default";

/// Mural description document path for a mural id.
pub fn mural_document_path(mural_id: &str) -> String {
    format!("{}/{}.{}", MURAL_DIRECTORY, mural_id, MURAL_DOCUMENT_EXTENSION)
}

/// glTF scene path for a mural id.
pub fn mural_scene_path(mural_id: &str) -> String {
    format!("{}/{}.glb#Scene0", MURAL_DIRECTORY, mural_id)
}
