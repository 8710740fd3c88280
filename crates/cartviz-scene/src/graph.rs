//! The cartpole scene graph.
//!
//! The pole is built at mount. Everything that depends on the wheel asset
//! (cart, wheels, camera, lights) lives in a [`CartRig`] that only exists once
//! the asset has loaded; until then per-frame updates are skipped.

use cartviz_model::CartpoleModel;
use cartviz_protocol::ThemeMode;

use crate::camera::PerspectiveCamera;
use crate::color::Color;
use crate::geometry::CartpoleGeometry;
use crate::light::{AmbientLight, Lighting, PointLight};
use crate::mapper::{Transform, background_color, map_state};
use crate::mesh::{Material, Mesh};
use crate::obj::ObjModel;
use crate::{Point3, Vec3};

const POLE_SEGMENTS: u32 = 32;
const CAMERA_FOV_DEG: f64 = 40.0;
const CAMERA_NEAR: f64 = 0.1;
const CAMERA_FAR: f64 = 1000.0;

/// A transform plus the meshes drawn in its space.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub transform: Transform,
    pub meshes: Vec<Mesh>,
}

impl Node {
    pub fn new(transform: Transform, meshes: Vec<Mesh>) -> Self {
        Self { transform, meshes }
    }
}

/// Scene objects created once the wheel asset is available.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRig {
    pub cart: Node,
    /// Wheel transforms are relative to the cart.
    pub wheels: [Node; 4],
    pub camera: PerspectiveCamera,
    pub lighting: Lighting,
}

impl CartRig {
    /// Build the cart, mount four copies of `wheel`, and set up camera and lights
    /// for a `width` x `height` viewport.
    pub fn new(geometry: &CartpoleGeometry, mut wheel: ObjModel, width: f64, height: f64) -> Self {
        wheel.scale(geometry.wheel_scale);
        wheel.recolor_wheel_parts();

        let wheels = geometry.wheel_offsets().map(|(x, z)| {
            Node::new(
                Transform::from_position(Vec3::new(x, -geometry.cart_height * 0.5, z)),
                wheel.parts.clone(),
            )
        });

        let body = Mesh::cuboid(
            geometry.cart_width,
            geometry.cart_height,
            geometry.cart_depth,
            Material::phong(Color::rgb(0.3, 0.3, 0.3), 150.0),
        );
        let cart = Node::new(Transform::default(), vec![body]);

        let mut camera =
            PerspectiveCamera::new(CAMERA_FOV_DEG, width, height, CAMERA_NEAR, CAMERA_FAR);
        camera.position = Point3::new(0.0, geometry.pole_length / 2.0, 0.5);
        camera.look_at(Point3::new(
            0.0,
            geometry.pole_length / 2.0 - geometry.cart_height,
            0.0,
        ));

        let points = [-0.25, 0.25].map(|x| PointLight {
            color: Color::WHITE,
            intensity: 0.85,
            distance: 50.0,
            decay: 1.25,
            position: Vec3::new(x, geometry.pole_length * 2.0, 0.0),
        });
        let lighting = Lighting {
            ambient: AmbientLight {
                color: Color::WHITE,
                intensity: 1.5,
            },
            points: points.to_vec(),
        };

        Self {
            cart,
            wheels,
            camera,
            lighting,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneGraph {
    pub geometry: CartpoleGeometry,
    pub pole: Node,
    pub rig: Option<CartRig>,
    pub background: Color,
}

impl SceneGraph {
    /// Scene with only the pole; [`SceneGraph::attach_rig`] completes it.
    pub fn new(geometry: CartpoleGeometry) -> Self {
        let pole = Mesh::cylinder(
            geometry.pole_radius,
            geometry.pole_length,
            POLE_SEGMENTS,
            Material::lambert(geometry.pole_color),
        );
        Self {
            geometry,
            pole: Node::new(Transform::default(), vec![pole]),
            rig: None,
            background: background_color(ThemeMode::Light),
        }
    }

    pub fn attach_rig(&mut self, wheel: ObjModel, width: f64, height: f64) {
        self.rig = Some(CartRig::new(&self.geometry, wheel, width, height));
    }

    pub fn camera(&self) -> Option<&PerspectiveCamera> {
        self.rig.as_ref().map(|r| &r.camera)
    }

    /// Push the model into the scene. Returns `false`, touching nothing, while
    /// the model is invalid or the rig is not ready yet.
    pub fn apply(&mut self, model: &CartpoleModel, theme: ThemeMode) -> bool {
        if !model.is_valid {
            return false;
        }
        let Some(rig) = self.rig.as_mut() else {
            return false;
        };

        let t = map_state(&model.state, &self.geometry, theme);
        self.background = t.background;
        self.pole.transform.position = t.pole_position;
        self.pole.transform.set_rotation_z(t.pole_rotation_z);
        rig.cart.transform.position = t.cart_position;
        for wheel in &mut rig.wheels {
            wheel.transform.set_rotation_z(t.wheel_rotation_z);
        }
        true
    }

    /// Follow a window resize. No-op until the camera exists.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        match self.rig.as_mut() {
            Some(rig) => {
                rig.camera.resize(width, height);
                true
            }
            None => false,
        }
    }
}
