use crate::color::Color;

/// Fixed dimensions of the rendered cartpole, in scene units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartpoleGeometry {
    pub pole_radius: f64,
    pub pole_length: f64,
    pub cart_width: f64,
    pub cart_height: f64,
    pub cart_depth: f64,
    pub wheel_radius: f64,
    /// Uniform scale applied to the wheel asset.
    pub wheel_scale: f64,
    pub pole_color: Color,
}

impl Default for CartpoleGeometry {
    fn default() -> Self {
        Self {
            pole_radius: 0.01,
            pole_length: 0.25,
            cart_width: 0.2,
            cart_height: 0.02,
            cart_depth: 0.08,
            wheel_radius: 0.045,
            wheel_scale: 0.00125,
            pole_color: Color::rgb(0.22, 0.3, 0.38),
        }
    }
}

impl CartpoleGeometry {
    /// Wheel mount points relative to the cart center: (x, z).
    pub fn wheel_offsets(&self) -> [(f64, f64); 4] {
        let x = self.cart_width * 0.3;
        let z = self.cart_depth * 0.675;
        [(x, z), (-x, z), (x, -z), (-x, -z)]
    }
}
