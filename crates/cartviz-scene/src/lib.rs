//! Scene graph and per-frame mapping for the cartpole visualizer.
//!
//! The scene is a pole that exists from mount, plus a cart rig (cart body,
//! four wheels, camera, lights) that appears once the wheel asset has loaded.
//! [`map_state`] is the pure state-to-transform function; [`SceneGraph::apply`]
//! guards it on readiness; [`build_frame`] flattens the scene into shaded
//! screen-space triangles for a 2D painter.

pub mod camera;
pub mod color;
pub mod frame;
pub mod geometry;
pub mod graph;
pub mod light;
pub mod mapper;
pub mod mesh;
pub mod obj;
pub mod quaternion;

pub use camera::PerspectiveCamera;
pub use color::Color;
pub use frame::{Frame, ScreenTriangle, build_frame};
pub use geometry::CartpoleGeometry;
pub use graph::{CartRig, Node, SceneGraph};
pub use light::{AmbientLight, Lighting, PointLight};
pub use mapper::{SceneTransforms, Transform, background_color, map_state};
pub use mesh::{Material, Mesh};
pub use obj::{ObjError, ObjModel, parse_obj};
pub use quaternion::Quat;

use nalgebra as na;

/// 3D vector alias.
pub type Vec3 = na::Vector3<f64>;
/// 3D point alias.
pub type Point3 = na::Point3<f64>;

/// Rotation axis shared by the pole and the wheels.
#[inline]
pub fn z_axis() -> Vec3 {
    Vec3::new(0.0, 0.0, 1.0)
}
