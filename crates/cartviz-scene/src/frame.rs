//! Flatten the scene into shaded, depth-sorted screen triangles.
//!
//! Canvas2D has no depth buffer, so triangles are painted back to front.

use crate::Vec3;
use crate::camera::PerspectiveCamera;
use crate::color::Color;
use crate::graph::{Node, SceneGraph};
use crate::light::Lighting;
use crate::mapper::Transform;

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenTriangle {
    /// Viewport pixels, origin top-left.
    pub points: [(f64, f64); 3],
    /// Mean view-space depth of the corners.
    pub depth: f64,
    pub fill: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub background: Color,
    /// Sorted far to near.
    pub triangles: Vec<ScreenTriangle>,
}

/// Build the draw list for the current transforms, or `None` while the rig
/// (and with it the camera) is not ready.
pub fn build_frame(scene: &SceneGraph) -> Option<Frame> {
    let rig = scene.rig.as_ref()?;
    let camera = &rig.camera;
    let mut out = Vec::new();

    emit_node(&scene.pole, &[], camera, &rig.lighting, &mut out);
    emit_node(&rig.cart, &[], camera, &rig.lighting, &mut out);
    for wheel in &rig.wheels {
        emit_node(wheel, &[rig.cart.transform], camera, &rig.lighting, &mut out);
    }

    out.sort_by(|a, b| b.depth.total_cmp(&a.depth));

    let (width, height) = camera.viewport;
    Some(Frame {
        width,
        height,
        background: scene.background,
        triangles: out,
    })
}

/// `parents` are applied innermost first, after the node's own transform.
fn emit_node(
    node: &Node,
    parents: &[Transform],
    camera: &PerspectiveCamera,
    lighting: &Lighting,
    out: &mut Vec<ScreenTriangle>,
) {
    let to_world = |p: &Vec3| {
        parents
            .iter()
            .fold(node.transform.apply(p), |acc, t| t.apply(&acc))
    };
    let eye = camera.position.coords;

    for mesh in &node.meshes {
        let world: Vec<Vec3> = mesh.vertices.iter().map(to_world).collect();

        for &[a, b, c] in &mesh.triangles {
            let (pa, pb, pc) = (world[a as usize], world[b as usize], world[c as usize]);
            let n = (pb - pa).cross(&(pc - pa));
            let len = n.norm();
            if len < 1e-18 {
                continue;
            }
            let mut n = n / len;
            let centroid = (pa + pb + pc) / 3.0;
            if n.dot(&(eye - centroid)) < 0.0 {
                if mesh.closed {
                    continue;
                }
                n = -n;
            }

            let (Some(sa), Some(sb), Some(sc)) =
                (camera.project(&pa), camera.project(&pb), camera.project(&pc))
            else {
                continue;
            };

            out.push(ScreenTriangle {
                points: [(sa.0, sa.1), (sb.0, sb.1), (sc.0, sc.1)],
                depth: (sa.2 + sb.2 + sc.2) / 3.0,
                fill: lighting.shade(&mesh.material, &centroid, &n, &eye),
            });
        }
    }
}
