use glam::Vec3;

use crate::sphere::{Sphere, SphereUniform, WALL_RAD};

/// Ordered collection of spheres. Order only determines each sphere's slot
/// in the packed buffer.
#[derive(Debug, Clone)]
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    /// Build a scene from the given spheres, preserving their order. An
    /// empty list yields the built-in box scene.
    pub fn new(spheres: Vec<Sphere>) -> Self {
        if spheres.is_empty() {
            Self::default()
        } else {
            Self { spheres }
        }
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn uniforms(&self) -> Vec<SphereUniform> {
        self.spheres.iter().map(Sphere::to_uniform).collect()
    }

    /// Flat buffer handed to the compute kernel: 15 floats per sphere, in
    /// sphere order. See [`SphereUniform`] for the slot layout.
    pub fn buffer(&self) -> Vec<f32> {
        bytemuck::cast_slice(&self.uniforms()).to_vec()
    }
}

impl Default for Scene {
    /// The classic open box: five wall spheres, a floor/ceiling pair and one
    /// small light.
    fn default() -> Self {
        let mut spheres = vec![Sphere::new(); 7];
        // Left wall
        spheres[0].set_matte(
            WALL_RAD,
            Vec3::new(WALL_RAD + 1.0, 40.8, 81.6),
            Vec3::ZERO,
            Vec3::new(0.75, 0.25, 0.25),
        );
        // Right wall
        spheres[1].set_matte(
            WALL_RAD,
            Vec3::new(-WALL_RAD + 99.0, 40.8, 81.6),
            Vec3::ZERO,
            Vec3::new(0.25, 0.25, 0.25),
        );
        // Back wall
        spheres[2].set_matte(
            WALL_RAD,
            Vec3::new(50.0, 40.8, WALL_RAD),
            Vec3::ZERO,
            Vec3::new(0.75, 0.75, 0.75),
        );
        // Front wall, behind the camera
        spheres[3].set_matte(
            WALL_RAD,
            Vec3::new(50.0, 40.8, -WALL_RAD + 270.0),
            Vec3::ZERO,
            Vec3::ZERO,
        );
        // Floor
        spheres[4].set_matte(
            WALL_RAD,
            Vec3::new(50.0, WALL_RAD, 81.6),
            Vec3::ZERO,
            Vec3::new(0.75, 0.75, 0.75),
        );
        // Ceiling
        spheres[5].set_matte(
            WALL_RAD,
            Vec3::new(50.0, -WALL_RAD + 81.6, 81.6),
            Vec3::ZERO,
            Vec3::new(0.75, 0.75, 0.75),
        );
        // Light
        spheres[6].set_matte(
            7.0,
            Vec3::new(50.0, 66.6, 81.6),
            Vec3::new(12.0, 12.0, 12.0),
            Vec3::ZERO,
        );
        log::debug!("Built default box scene with {} spheres", spheres.len());
        Self { spheres }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;

    #[test]
    fn empty_input_yields_the_default_box_scene() {
        let scene = Scene::new(Vec::new());
        assert_eq!(scene.sphere_count(), 7);

        let spheres = scene.spheres();
        for sphere in &spheres[..6] {
            assert_eq!(sphere.radius, WALL_RAD);
            assert_eq!(sphere.emission, Vec3::ZERO);
            assert_eq!(sphere.material, Material::Matte);
        }
        assert_eq!(spheres[0].position, Vec3::new(WALL_RAD + 1.0, 40.8, 81.6));
        assert_eq!(spheres[0].color, Vec3::new(0.75, 0.25, 0.25));
        assert_eq!(spheres[1].position, Vec3::new(-WALL_RAD + 99.0, 40.8, 81.6));
        assert_eq!(spheres[1].color, Vec3::new(0.25, 0.25, 0.25));
        assert_eq!(spheres[3].color, Vec3::ZERO);

        let light = &spheres[6];
        assert_eq!(light.radius, 7.0);
        assert_eq!(light.position, Vec3::new(50.0, 66.6, 81.6));
        assert_eq!(light.emission, Vec3::new(12.0, 12.0, 12.0));
        assert_eq!(light.color, Vec3::ZERO);
        assert_eq!(light.material, Material::Matte);
    }

    #[test]
    fn supplied_spheres_are_stored_in_order() {
        let mut a = Sphere::new();
        a.set_matte(1.0, Vec3::ZERO, Vec3::ZERO, Vec3::ONE);
        let mut b = Sphere::new();
        b.set_glossy(2.0, Vec3::X, Vec3::ZERO, Vec3::ONE, 25.0);
        let mut c = Sphere::new();
        c.set_mirror(3.0, Vec3::Y, Vec3::ZERO, Vec3::ONE);

        let scene = Scene::new(vec![a, b, c]);
        assert_eq!(scene.sphere_count(), 3);
        assert_eq!(scene.spheres()[0].radius, 1.0);
        assert_eq!(scene.spheres()[1].radius, 2.0);
        assert_eq!(scene.spheres()[2].radius, 3.0);
    }

    #[test]
    fn buffer_has_fifteen_slots_per_sphere() {
        let scene = Scene::default();
        assert_eq!(scene.buffer().len(), 15 * scene.sphere_count());
    }

    #[test]
    fn buffer_packs_material_codes_and_zeroes_reserved_slots() {
        let mut glass = Sphere::new();
        glass.set_glass(
            16.5,
            Vec3::new(27.0, 16.5, 47.0),
            Vec3::ZERO,
            Vec3::splat(0.999),
            1.5,
            0.0,
            0.0,
        );
        let mut glossy = Sphere::new();
        glossy.set_glossy_translucent(
            10.0,
            Vec3::new(50.0, 10.0, 80.0),
            Vec3::ZERO,
            Vec3::ONE,
            40.0,
            0.5,
            0.0,
            0.0,
        );
        let scene = Scene::new(vec![glass, glossy]);

        let buffer = scene.buffer();
        for (i, sphere) in scene.spheres().iter().enumerate() {
            assert_eq!(buffer[i * 15 + 7], sphere.material.code() as f32);
            assert_eq!(&buffer[i * 15 + 11..i * 15 + 15], &[0.0; 4]);
        }
    }

    #[test]
    fn buffer_is_idempotent() {
        let scene = Scene::default();
        assert_eq!(scene.buffer(), scene.buffer());
    }

    #[test]
    fn single_mirror_sphere_packs_to_the_documented_layout() {
        let mut sphere = Sphere::new();
        sphere.set_mirror(5.0, Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::ONE);
        let scene = Scene::new(vec![sphere]);
        assert_eq!(
            scene.buffer(),
            vec![5.0, 1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0]
        );
    }
}
