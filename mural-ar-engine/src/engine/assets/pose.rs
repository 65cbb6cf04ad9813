use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Rigid transform authored alongside mural data.
///
/// Rotation is stored as XYZ Euler angles in radians, the convention used by
/// the calibration documents. Applied relative to the parent as
/// translation, then rotation, then scale, which is the same order Bevy's
/// [`Transform`] uses, so conversion is a direct field copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    position: Vec3,
    rotation: Vec3,
    scale: Vec3,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn new(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Euler XYZ rotation in radians.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    pub fn to_transform(&self) -> Transform {
        Transform {
            translation: self.position,
            rotation: self.rotation_quat(),
            scale: self.scale,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Authored scale: either one number for all axes or one per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleDocument {
    Uniform(f32),
    Axes([f32; 3]),
}

impl ScaleDocument {
    pub fn to_vec3(self) -> Vec3 {
        match self {
            Self::Uniform(s) => Vec3::splat(s),
            Self::Axes(axes) => Vec3::from_array(axes),
        }
    }
}

/// Wire shape of a pose inside the calibration document.
///
/// Every field is optional; missing position and rotation are zero and a
/// missing scale is one on all axes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseDocument {
    #[serde(default)]
    pub position: Option<[f32; 3]>,
    #[serde(default)]
    pub rotation: Option<[f32; 3]>,
    #[serde(default)]
    pub scale: Option<ScaleDocument>,
}

impl From<&PoseDocument> for Pose {
    fn from(doc: &PoseDocument) -> Self {
        Pose::new(
            doc.position.map(Vec3::from_array).unwrap_or(Vec3::ZERO),
            doc.rotation.map(Vec3::from_array).unwrap_or(Vec3::ZERO),
            doc.scale.map(ScaleDocument::to_vec3).unwrap_or(Vec3::ONE),
        )
    }
}

/// World-space pose reported by the tracking collaborator for a wayspot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl WorldPose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Root transform for content anchored at this pose. Scale stays at one;
    /// authored scale lives on the calibration offset.
    pub fn to_transform(&self) -> Transform {
        Transform::from_translation(self.position).with_rotation(self.rotation)
    }
}
