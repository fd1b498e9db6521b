//! Camera path for the particle backdrop, keyed on how far the space section
//! has scrolled into view. The renderer owns the scene; it only reads the pose.

use crate::constants::*;
use crate::scroll::clamped_progress;
use glam::Vec3;

/// Camera position plus the particle field's yaw for one frame. The camera
/// always looks at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub particle_rotation: f32,
}

impl CameraPose {
    pub const REST: CameraPose = CameraPose {
        position: CAMERA_REST,
        particle_rotation: 0.0,
    };

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.particle_rotation.is_finite()
    }
}

/// Waypoints of the two-phase path: a dolly back from `start` to `mid`
/// while the field spins, then a crane up to `end` with the spin held.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPath {
    pub rest: Vec3,
    pub start: Vec3,
    pub mid: Vec3,
    pub end: Vec3,
    pub enter_ratio: f32,
    pub split: f32,
    pub rotation_total: f32,
}

impl Default for CameraPath {
    fn default() -> Self {
        Self {
            rest: CAMERA_REST,
            start: CAMERA_START,
            mid: CAMERA_MID,
            end: CAMERA_END,
            enter_ratio: CAMERA_ENTER_RATIO,
            split: CAMERA_SPLIT,
            rotation_total: PARTICLE_ROTATION_TOTAL,
        }
    }
}

impl CameraPath {
    /// Path progress for an entered ratio, `None` while the camera should rest.
    pub fn progress(&self, entered: f32) -> Option<f32> {
        if entered.is_nan() || entered < self.enter_ratio {
            return None;
        }
        let span = 1.0 - self.enter_ratio;
        if span <= 0.0 {
            return Some(1.0);
        }
        Some(clamped_progress((entered - self.enter_ratio) / span))
    }

    pub fn pose(&self, entered: f32) -> CameraPose {
        let Some(progress) = self.progress(entered) else {
            return CameraPose {
                position: self.rest,
                particle_rotation: 0.0,
            };
        };
        if progress < self.split {
            let phase = progress / self.split;
            CameraPose {
                position: self.start.lerp(self.mid, phase),
                particle_rotation: self.rotation_total * phase,
            }
        } else {
            let tail = 1.0 - self.split;
            let phase = if tail > 0.0 {
                (progress - self.split) / tail
            } else {
                1.0
            };
            CameraPose {
                position: self.mid.lerp(self.end, phase),
                particle_rotation: self.rotation_total,
            }
        }
    }
}
