//! Triangle meshes and the few primitives the scene builds itself.

use std::f64::consts::TAU;

use crate::Vec3;
use crate::color::Color;

/// Surface response used by the flat shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    /// Strength of the specular highlight, 0 for purely diffuse surfaces.
    pub specular: f64,
    pub shininess: f64,
    pub metalness: f64,
}

impl Material {
    /// Matte surface, diffuse only.
    pub fn lambert(color: Color) -> Self {
        Self {
            color,
            specular: 0.0,
            shininess: 0.0,
            metalness: 0.0,
        }
    }

    /// Glossy surface with a Blinn-Phong highlight.
    pub fn phong(color: Color, shininess: f64) -> Self {
        Self {
            color,
            specular: 0.067,
            shininess,
            metalness: 0.0,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::phong(Color::WHITE, 30.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub name: String,
    pub vertices: Vec<Vec3>,
    /// Counter-clockwise when seen from outside, if `closed`.
    pub triangles: Vec<[u32; 3]>,
    pub material: Material,
    /// Closed meshes with consistent winding get back-face culled.
    pub closed: bool,
}

impl Mesh {
    pub fn new(name: impl Into<String>, material: Material) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            triangles: Vec::new(),
            material,
            closed: false,
        }
    }

    /// Upright cylinder with its base at `y = 0` and top at `y = length`.
    pub fn cylinder(radius: f64, length: f64, segments: u32, material: Material) -> Self {
        let n = segments.max(3);
        let mut mesh = Self::new("cylinder", material);
        mesh.closed = true;

        for y in [0.0, length] {
            for i in 0..n {
                let theta = TAU * i as f64 / n as f64;
                mesh.vertices
                    .push(Vec3::new(radius * theta.cos(), y, radius * theta.sin()));
            }
        }
        let bottom_center = mesh.vertices.len() as u32;
        mesh.vertices.push(Vec3::new(0.0, 0.0, 0.0));
        let top_center = bottom_center + 1;
        mesh.vertices.push(Vec3::new(0.0, length, 0.0));

        for i in 0..n {
            let j = (i + 1) % n;
            let (b0, b1, t0, t1) = (i, j, n + i, n + j);
            mesh.triangles.push([b0, t0, t1]);
            mesh.triangles.push([b0, t1, b1]);
            mesh.triangles.push([top_center, t1, t0]);
            mesh.triangles.push([bottom_center, b0, b1]);
        }
        mesh
    }

    /// Axis-aligned box centered on the origin.
    pub fn cuboid(width: f64, height: f64, depth: f64, material: Material) -> Self {
        let (hx, hy, hz) = (width / 2.0, height / 2.0, depth / 2.0);
        let mut mesh = Self::new("box", material);
        mesh.closed = true;

        for i in 0..8u32 {
            let sx = if i & 1 == 0 { -hx } else { hx };
            let sy = if i & 2 == 0 { -hy } else { hy };
            let sz = if i & 4 == 0 { -hz } else { hz };
            mesh.vertices.push(Vec3::new(sx, sy, sz));
        }

        // Corner index bits: x = 1, y = 2, z = 4.
        let faces: [([u32; 4], Vec3); 6] = [
            ([0, 2, 6, 4], Vec3::new(-1.0, 0.0, 0.0)),
            ([1, 3, 7, 5], Vec3::new(1.0, 0.0, 0.0)),
            ([0, 1, 5, 4], Vec3::new(0.0, -1.0, 0.0)),
            ([2, 3, 7, 6], Vec3::new(0.0, 1.0, 0.0)),
            ([0, 1, 3, 2], Vec3::new(0.0, 0.0, -1.0)),
            ([4, 5, 7, 6], Vec3::new(0.0, 0.0, 1.0)),
        ];
        for (quad, outward) in faces {
            mesh.push_quad(quad, &outward);
        }
        mesh
    }

    /// Split a planar quad into two triangles wound to face `outward`.
    fn push_quad(&mut self, [a, b, c, d]: [u32; 4], outward: &Vec3) {
        let n = self.triangle_normal([a, b, c]);
        if n.dot(outward) >= 0.0 {
            self.triangles.push([a, b, c]);
            self.triangles.push([a, c, d]);
        } else {
            self.triangles.push([a, c, b]);
            self.triangles.push([a, d, c]);
        }
    }

    /// Unnormalized geometric normal of a triangle in local space.
    pub fn triangle_normal(&self, [a, b, c]: [u32; 3]) -> Vec3 {
        let pa = self.vertices[a as usize];
        let pb = self.vertices[b as usize];
        let pc = self.vertices[c as usize];
        (pb - pa).cross(&(pc - pa))
    }

    /// Bake a uniform scale into the vertices.
    pub fn scale(&mut self, s: f64) {
        for v in &mut self.vertices {
            *v *= s;
        }
    }
}
