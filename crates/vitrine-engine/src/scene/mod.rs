//! Scene data types.
//!
//! Responsibilities:
//! - hold renderer-agnostic drawable state (camera, lights, geometry, instances)
//! - keep ownership single-writer: the animator mutates group rotation, the
//!   viewport adapter mutates camera aspect, nothing else mutates after
//!   assembly

mod camera;
mod geometry;
mod group;
mod light;
mod material;
mod scene;

pub use camera::Camera;
pub use geometry::{Geometry, Vertex};
pub use group::{Instance, InstanceGroup};
pub use light::{AmbientLight, Lights, PointLight};
pub use material::StandardMaterial;
pub use scene::Scene;
