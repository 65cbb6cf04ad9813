use bevy::prelude::*;
use constants::data_source::DEFAULT_MURAL_ID;

/// Which mural this session shows.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct MuralRoute {
    pub mural_id: String,
}

impl Default for MuralRoute {
    fn default() -> Self {
        Self {
            mural_id: DEFAULT_MURAL_ID.to_string(),
        }
    }
}

impl MuralRoute {
    /// Resolve from the page URL fragment on the web, or the first command
    /// line argument natively. Falls back to the default mural.
    pub fn from_environment() -> Self {
        let raw = Self::raw_route();
        match raw.as_deref().and_then(mural_id_from_fragment) {
            Some(mural_id) => Self { mural_id },
            None => {
                if let Some(raw) = raw.filter(|raw| !raw.trim_start_matches('#').is_empty()) {
                    warn!("Ignoring unusable mural route '{}'", raw);
                }
                Self::default()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn raw_route() -> Option<String> {
        web_sys::window()?.location().hash().ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn raw_route() -> Option<String> {
        std::env::args().nth(1)
    }
}

/// Extract a mural id from `#id`, `#/id` or a bare `id`.
///
/// Ids are restricted to ASCII alphanumerics, `-` and `_` because they are
/// spliced into asset paths.
pub fn mural_id_from_fragment(fragment: &str) -> Option<String> {
    let id = fragment.trim().trim_start_matches('#').trim_matches('/');
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    valid.then(|| id.to_string())
}
