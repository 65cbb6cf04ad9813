use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Pending,
    Loaded,
    Failed,
}

impl LoadStatus {
    pub fn is_settled(&self) -> bool {
        *self != LoadStatus::Pending
    }
}

/// Load status of the two fetched documents.
#[derive(Resource, Debug, Default)]
pub struct LoadingProgress {
    pub mural: LoadStatus,
    pub calibration: LoadStatus,
}
