//! Quaternion utilities for 3D rotations.
//!
//! Convention: q = [w; x; y; z] where w is scalar, (x,y,z) is vector part.

use crate::Vec3;

/// A unit quaternion representing a 3D rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat {
    /// Scalar part (w).
    pub w: f64,
    /// Vector part (x, y, z).
    pub v: Vec3,
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quat {
    /// Identity quaternion (no rotation).
    pub fn identity() -> Self {
        Self {
            w: 1.0,
            v: Vec3::zeros(),
        }
    }

    /// Create quaternion from axis-angle representation.
    /// axis should be a unit vector, angle in radians.
    pub fn from_axis_angle(axis: &Vec3, angle: f64) -> Self {
        let half_angle = angle * 0.5;
        let (s, c) = half_angle.sin_cos();
        Self { w: c, v: *axis * s }
    }

    /// Signed rotation angle about `axis`, in (-2π, 2π].
    ///
    /// Only meaningful when the quaternion was built around that axis.
    pub fn angle_about(&self, axis: &Vec3) -> f64 {
        2.0 * self.v.dot(axis).atan2(self.w)
    }

    /// Rotate a vector: q v q*.
    pub fn rotate(&self, p: &Vec3) -> Vec3 {
        // Expanded form of q * (0, p) * q^-1.
        let t = self.v.cross(p) * 2.0;
        p + t * self.w + self.v.cross(&t)
    }
}
