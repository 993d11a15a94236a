use glam::Vec3;

/// Viewpoint description carried by scene files. Projection setup depends on
/// the output resolution and is left to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub origin: Vec3,
    pub target: Vec3,
}

impl Camera {
    pub fn new(origin: Vec3, target: Vec3) -> Self {
        Self { origin, target }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            target: Vec3::NEG_Z,
        }
    }
}
