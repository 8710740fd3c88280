//! Pure mapping from a cartpole state to scene transforms.

use cartviz_model::CartpoleState;
use cartviz_protocol::ThemeMode;

use crate::color::Color;
use crate::geometry::CartpoleGeometry;
use crate::quaternion::Quat;
use crate::{Vec3, z_axis};

/// Position and orientation of a scene node relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::identity(),
        }
    }

    /// Replace the rotation with `angle` radians about +Z.
    pub fn set_rotation_z(&mut self, angle: f64) {
        self.rotation = Quat::from_axis_angle(&z_axis(), angle);
    }

    /// Map a point from this node's space into its parent's.
    pub fn apply(&self, p: &Vec3) -> Vec3 {
        self.rotation.rotate(p) + self.position
    }
}

/// Everything that changes from frame to frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneTransforms {
    pub pole_position: Vec3,
    /// Pole rotation about +Z, radians.
    pub pole_rotation_z: f64,
    pub cart_position: Vec3,
    /// Rotation about +Z shared by all four wheels, radians.
    pub wheel_rotation_z: f64,
    pub background: Color,
}

/// Background color for a theme.
pub fn background_color(theme: ThemeMode) -> Color {
    match theme {
        ThemeMode::Light => Color::from_hex(0xffffff),
        ThemeMode::Dark => Color::from_hex(0x1a1a1a),
    }
}

/// Map `state` onto the pole, cart and wheels.
///
/// The pole's base is flat, so it lifts by `sin(|angle|) * pole_radius` as it
/// tips over; the lift is the same for left and right tilt. The engine's
/// rotations are right-handed, so the pole turns by `-angle`. Wheels roll
/// without slipping: arc length equals cart travel.
pub fn map_state(
    state: &CartpoleState,
    geometry: &CartpoleGeometry,
    theme: ThemeMode,
) -> SceneTransforms {
    SceneTransforms {
        pole_position: Vec3::new(
            state.position,
            state.angle.abs().sin() * geometry.pole_radius,
            0.0,
        ),
        pole_rotation_z: -state.angle,
        cart_position: Vec3::new(state.position, -geometry.cart_height / 2.0, 0.0),
        wheel_rotation_z: -state.position / geometry.wheel_radius,
        background: background_color(theme),
    }
}
