use glam::Vec3;

use crate::material::Material;

/// Radius used for the "wall" spheres of box scenes. A sphere this large is
/// effectively flat at room scale.
pub const WALL_RAD: f32 = 10000.0;

/// One sphere of the scene: geometry, radiometry and a single material.
///
/// The `set_*` methods fully re-materialize the sphere: every field,
/// including the material, is overwritten on each call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    pub position: Vec3,
    pub emission: Vec3,
    pub color: Vec3,
    pub material: Material,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            radius: 1.0,
            position: Vec3::ZERO,
            emission: Vec3::ZERO,
            color: Vec3::ZERO,
            material: Material::Matte,
        }
    }
}

impl Sphere {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_matte(&mut self, radius: f32, position: Vec3, emission: Vec3, color: Vec3) {
        *self = Self {
            radius,
            position,
            emission,
            color,
            material: Material::Matte,
        };
    }

    pub fn set_mirror(&mut self, radius: f32, position: Vec3, emission: Vec3, color: Vec3) {
        *self = Self {
            radius,
            position,
            emission,
            color,
            material: Material::Mirror,
        };
    }

    pub fn set_glass(
        &mut self,
        radius: f32,
        position: Vec3,
        emission: Vec3,
        color: Vec3,
        ior: f32,
        sigma_s: f32,
        sigma_a: f32,
    ) {
        *self = Self {
            radius,
            position,
            emission,
            color,
            material: Material::Glass {
                ior,
                sigma_s,
                sigma_a,
            },
        };
    }

    pub fn set_matte_translucent(
        &mut self,
        radius: f32,
        position: Vec3,
        emission: Vec3,
        color: Vec3,
        transparency: f32,
        sigma_s: f32,
        sigma_a: f32,
    ) {
        *self = Self {
            radius,
            position,
            emission,
            color,
            material: Material::MatteTranslucent {
                transparency,
                sigma_s,
                sigma_a,
            },
        };
    }

    pub fn set_glossy(
        &mut self,
        radius: f32,
        position: Vec3,
        emission: Vec3,
        color: Vec3,
        exponent: f32,
    ) {
        *self = Self {
            radius,
            position,
            emission,
            color,
            material: Material::Glossy { exponent },
        };
    }

    pub fn set_glossy_translucent(
        &mut self,
        radius: f32,
        position: Vec3,
        emission: Vec3,
        color: Vec3,
        exponent: f32,
        transparency: f32,
        sigma_s: f32,
        sigma_a: f32,
    ) {
        *self = Self {
            radius,
            position,
            emission,
            color,
            material: Material::GlossyTranslucent {
                exponent,
                transparency,
                sigma_s,
                sigma_a,
            },
        };
    }

    pub fn to_uniform(&self) -> SphereUniform {
        SphereUniform {
            radius: self.radius,
            position: self.position.to_array(),
            emission: self.emission.to_array(),
            material: self.material.code() as f32,
            color: self.color.to_array(),
            _reserved: [0.0; 4],
        }
    }
}

/// Packed per-sphere record as the compute kernel reads it: 15 floats at a
/// fixed stride. The material's auxiliary parameters are not part of the
/// record; the trailing slots are reserved and stay zero.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Default)]
pub struct SphereUniform {
    pub radius: f32,
    pub position: [f32; 3],
    pub emission: [f32; 3],
    pub material: f32,
    pub color: [f32; 3],
    pub _reserved: [f32; 4],
}
