use nalgebra as na;

use crate::{Point3, Vec3};

/// Perspective camera with a vertical field of view, looking at a fixed target.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub position: Point3,
    pub target: Point3,
    /// Viewport size in CSS pixels.
    pub viewport: (f64, f64),
}

impl PerspectiveCamera {
    pub fn new(fov_deg: f64, width: f64, height: f64, near: f64, far: f64) -> Self {
        let mut cam = Self {
            fov_deg,
            aspect: 1.0,
            near,
            far,
            position: Point3::origin(),
            target: Point3::new(0.0, 0.0, -1.0),
            viewport: (1.0, 1.0),
        };
        cam.resize(width, height);
        cam
    }

    pub fn look_at(&mut self, target: Point3) {
        self.target = target;
    }

    /// Recompute aspect ratio and viewport from the current window size.
    /// Degenerate sizes are clamped to one pixel.
    pub fn resize(&mut self, width: f64, height: f64) {
        let w = width.max(1.0);
        let h = height.max(1.0);
        self.viewport = (w, h);
        self.aspect = w / h;
    }

    pub fn view(&self) -> na::Isometry3<f64> {
        na::Isometry3::look_at_rh(&self.position, &self.target, &Vec3::y())
    }

    pub fn projection(&self) -> na::Perspective3<f64> {
        na::Perspective3::new(self.aspect, self.fov_deg.to_radians(), self.near, self.far)
    }

    /// World point to viewport pixels (origin top-left) plus view depth.
    /// Returns `None` for points outside the near/far range.
    pub fn project(&self, world: &Vec3) -> Option<(f64, f64, f64)> {
        let eye = self.view().transform_point(&Point3::from(*world));
        let depth = -eye.z;
        if depth < self.near || depth > self.far {
            return None;
        }
        let ndc = self.projection().project_point(&eye);
        let (w, h) = self.viewport;
        Some(((ndc.x + 1.0) * 0.5 * w, (1.0 - ndc.y) * 0.5 * h, depth))
    }
}
