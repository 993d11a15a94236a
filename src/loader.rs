//! Plain-text scene file reader.
//!
//! A scene file holds one camera line, one sphere count line and one line
//! per sphere:
//!
//! ```text
//! camera 50.0 45.0 205.6 50.0 44.7 204.6
//! size 2
//! sphere 16.5 27.0 16.5 47.0 0.0 0.0 0.0 0.999 0.999 0.999 1
//! sphere 16.5 73.0 16.5 78.0 0.0 0.0 0.0 0.999 0.999 0.999 2
//! ```
//!
//! Sphere fields are radius, position, emission, color and a material code:
//! 0 matte, 1 mirror, 2 glass. Glass spheres get an index of refraction of
//! 1.5 with no scattering or absorption, matching the ideal dielectric the
//! kernel implements. The translucent and glossy materials have no file
//! syntax and are built programmatically.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use glam::Vec3;
use thiserror::Error;

use crate::camera::Camera;
use crate::scene::Scene;
use crate::sphere::Sphere;

/// Index of refraction applied to glass spheres read from scene files.
const GLASS_IOR: f32 = 1.5;

#[derive(Debug, Error)]
pub enum SceneFileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read camera parameters")]
    CameraMissing,
    #[error("failed to parse camera parameters")]
    CameraParse,
    #[error("failed to read sphere count")]
    CountMissing,
    #[error("failed to parse sphere count")]
    CountParse,
    #[error("failed to read sphere #{0}")]
    SphereMissing(usize),
    #[error("failed to parse sphere #{0}")]
    SphereParse(usize),
    #[error("unknown material {code} for sphere #{index}")]
    UnknownMaterial { index: usize, code: u32 },
}

/// Contents of a parsed scene file.
#[derive(Debug, Clone)]
pub struct SceneFile {
    pub camera: Camera,
    pub scene: Scene,
}

/// Read a scene file from disk.
pub fn read_scene(path: impl AsRef<Path>) -> Result<SceneFile, SceneFileError> {
    let path = path.as_ref();
    log::info!("Reading scene: {}", path.display());

    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines();

    let camera_line = lines.next().ok_or(SceneFileError::CameraMissing)??;
    let camera = parse_camera(&camera_line)?;

    let count_line = lines.next().ok_or(SceneFileError::CountMissing)??;
    let count = parse_count(&count_line)?;

    let mut spheres = Vec::with_capacity(count);
    for i in 0..count {
        let sphere_line = lines.next().ok_or(SceneFileError::SphereMissing(i))??;
        spheres.push(parse_sphere(&sphere_line, i)?);
    }

    Ok(SceneFile {
        camera,
        scene: Scene::new(spheres),
    })
}

fn parse_camera(line: &str) -> Result<Camera, SceneFileError> {
    let args: Vec<&str> = line.split_whitespace().collect();
    if args.len() != 7 {
        return Err(SceneFileError::CameraParse);
    }
    let mut vals = [0.0f32; 6];
    for (val, arg) in vals.iter_mut().zip(&args[1..]) {
        *val = arg.parse().map_err(|_| SceneFileError::CameraParse)?;
    }
    Ok(Camera::new(
        Vec3::new(vals[0], vals[1], vals[2]),
        Vec3::new(vals[3], vals[4], vals[5]),
    ))
}

fn parse_count(line: &str) -> Result<usize, SceneFileError> {
    let args: Vec<&str> = line.split_whitespace().collect();
    if args.len() != 2 {
        return Err(SceneFileError::CountParse);
    }
    args[1].parse().map_err(|_| SceneFileError::CountParse)
}

fn parse_sphere(line: &str, index: usize) -> Result<Sphere, SceneFileError> {
    let args: Vec<&str> = line.split_whitespace().collect();
    if args.len() != 12 {
        return Err(SceneFileError::SphereParse(index));
    }
    let mut vals = [0.0f32; 10];
    for (val, arg) in vals.iter_mut().zip(&args[1..11]) {
        *val = arg.parse().map_err(|_| SceneFileError::SphereParse(index))?;
    }
    let code: u32 = args[11]
        .parse()
        .map_err(|_| SceneFileError::SphereParse(index))?;

    let radius = vals[0];
    let position = Vec3::new(vals[1], vals[2], vals[3]);
    let emission = Vec3::new(vals[4], vals[5], vals[6]);
    let color = Vec3::new(vals[7], vals[8], vals[9]);

    let mut sphere = Sphere::new();
    match code {
        0 => sphere.set_matte(radius, position, emission, color),
        1 => sphere.set_mirror(radius, position, emission, color),
        2 => sphere.set_glass(radius, position, emission, color, GLASS_IOR, 0.0, 0.0),
        code => return Err(SceneFileError::UnknownMaterial { index, code }),
    }
    Ok(sphere)
}
