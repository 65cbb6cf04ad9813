use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::data_source::{CALIBRATION_DOCUMENT_PATH, mural_document_path};

use super::progress::{LoadStatus, LoadingProgress};
use super::route::MuralRoute;
use crate::engine::assets::calibration::{CalibrationDocument, CalibrationStore};
use crate::engine::assets::mural::{MuralDescription, MuralDocument, MuralStore};
use crate::tools::debug_log::DebugLog;

#[derive(Resource, Default)]
pub struct DataLoader {
    mural: Option<Handle<MuralDocument>>,
    calibration: Option<Handle<CalibrationDocument>>,
}

// Kick off both document fetches; nothing waits on them
pub fn start_loading(
    mut loader: ResMut<DataLoader>,
    asset_server: Res<AssetServer>,
    route: Res<MuralRoute>,
) {
    let mural_path = mural_document_path(&route.mural_id);
    info!("Loading mural '{}' from {}", route.mural_id, mural_path);
    loader.mural = Some(asset_server.load(mural_path));
    loader.calibration = Some(asset_server.load(CALIBRATION_DOCUMENT_PATH));
}

// Validate the mural once it arrives; a bad payload leaves the store empty
pub fn poll_mural_document(
    loader: Res<DataLoader>,
    asset_server: Res<AssetServer>,
    documents: Res<Assets<MuralDocument>>,
    mut store: ResMut<MuralStore>,
    mut progress: ResMut<LoadingProgress>,
    mut debug_log: ResMut<DebugLog>,
) {
    if progress.mural.is_settled() {
        return;
    }
    let Some(handle) = loader.mural.as_ref() else {
        return;
    };

    if let Some(document) = documents.get(handle) {
        match MuralDescription::from_document(document) {
            Ok(mural) => {
                debug_log.record(format!(
                    "mural loaded: {} figures, scale {}",
                    mural.figures().len(),
                    mural.scale()
                ));
                store.set(mural);
                progress.mural = LoadStatus::Loaded;
            }
            Err(err) => {
                error!("Malformed mural document: {}", err);
                debug_log.record(format!("mural rejected: {}", err));
                progress.mural = LoadStatus::Failed;
            }
        }
    } else if let LoadState::Failed(err) = asset_server.load_state(handle) {
        error!("Mural document failed to load: {}", err);
        debug_log.record("mural unavailable");
        progress.mural = LoadStatus::Failed;
    }
}

// Build the calibration lookup once the document arrives
pub fn poll_calibration_document(
    loader: Res<DataLoader>,
    asset_server: Res<AssetServer>,
    documents: Res<Assets<CalibrationDocument>>,
    mut store: ResMut<CalibrationStore>,
    mut progress: ResMut<LoadingProgress>,
    mut debug_log: ResMut<DebugLog>,
) {
    if progress.calibration.is_settled() {
        return;
    }
    let Some(handle) = loader.calibration.as_ref() else {
        return;
    };

    if let Some(document) = documents.get(handle) {
        *store = CalibrationStore::from_document(document);
        debug_log.record(format!("calibration loaded: {} wayspots", store.len()));
        progress.calibration = LoadStatus::Loaded;
    } else if let LoadState::Failed(err) = asset_server.load_state(handle) {
        error!("Calibration document failed to load: {}", err);
        debug_log.record("calibration unavailable");
        progress.calibration = LoadStatus::Failed;
    }
}
