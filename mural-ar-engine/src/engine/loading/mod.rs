//! Mural and calibration document loading.
//!
//! Both documents load asynchronously through the asset server. The frame
//! loop and tracking never wait on them: until a document resolves its store
//! reads as empty, and a failed load keeps it empty for the session.

/// Fetch kick-off and polling systems for the two documents.
pub mod data_loader;

/// Per-document load status.
pub mod progress;

/// Mural id resolution from the URL fragment or command line.
pub mod route;

use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::data_source::{CALIBRATION_DOCUMENT_EXTENSION, MURAL_DOCUMENT_EXTENSION};

use crate::engine::assets::calibration::{CalibrationDocument, CalibrationStore};
use crate::engine::assets::mural::{MuralDocument, MuralStore};
use data_loader::{DataLoader, poll_calibration_document, poll_mural_document, start_loading};
use progress::LoadingProgress;

pub struct DataLoadingPlugin;

impl Plugin for DataLoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(JsonAssetPlugin::<MuralDocument>::new(&[MURAL_DOCUMENT_EXTENSION]))
            .add_plugins(JsonAssetPlugin::<CalibrationDocument>::new(&[
                CALIBRATION_DOCUMENT_EXTENSION,
            ]))
            .init_resource::<DataLoader>()
            .init_resource::<LoadingProgress>()
            .init_resource::<MuralStore>()
            .init_resource::<CalibrationStore>()
            .add_systems(Startup, start_loading)
            .add_systems(Update, (poll_mural_document, poll_calibration_document));
    }
}
