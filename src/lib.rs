//! Scene and material data model for a GPU path tracer.
//!
//! Describes a scene as a flat list of spheres, each carrying an emission,
//! a base color and one of six material behaviours, and packs that list
//! into the fixed-stride buffer the compute kernel consumes. Kernel
//! dispatch, accumulation and display live outside this crate.

pub mod camera;
pub mod loader;
pub mod material;
pub mod scene;
pub mod sphere;
