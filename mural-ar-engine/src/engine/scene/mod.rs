//! Scene graph nodes owned by the application: the anchored content root,
//! its calibration container and the mural scene beneath it.

pub mod content_root;
