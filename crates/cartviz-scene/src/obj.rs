//! Wavefront OBJ loading for the wheel asset.
//!
//! Only what the wheel needs: `v`, `f`, and `o`/`g` names that split the file
//! into named parts. Texture coordinates, normals and materials are ignored;
//! faces are fan-triangulated.

use std::collections::HashMap;

use thiserror::Error;

use crate::Vec3;
use crate::color::Color;
use crate::mesh::{Material, Mesh};

#[derive(Debug, Error, PartialEq)]
pub enum ObjError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: vertex index {index} out of range")]
    InvalidIndex { line: usize, index: i64 },

    #[error("OBJ contains no faces")]
    Empty,
}

/// A loaded OBJ file: one mesh per named part.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjModel {
    pub parts: Vec<Mesh>,
}

struct PartBuilder {
    mesh: Mesh,
    remap: HashMap<usize, u32>,
}

impl PartBuilder {
    fn new(name: &str) -> Self {
        Self {
            mesh: Mesh::new(name, Material::default()),
            remap: HashMap::new(),
        }
    }

    fn local(&mut self, global: usize, positions: &[Vec3]) -> u32 {
        *self.remap.entry(global).or_insert_with(|| {
            self.mesh.vertices.push(positions[global]);
            (self.mesh.vertices.len() - 1) as u32
        })
    }
}

/// Parse OBJ text into named parts. Parts without faces are dropped.
pub fn parse_obj(src: &str) -> Result<ObjModel, ObjError> {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut parts: Vec<PartBuilder> = vec![PartBuilder::new("")];

    for (i, raw) in src.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.split('#').next().unwrap_or("").trim();
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };

        match keyword {
            "v" => {
                let coords: Vec<f64> = tokens
                    .take(3)
                    .map(|t| t.parse::<f64>())
                    .collect::<Result<_, _>>()
                    .map_err(|e| ObjError::Parse {
                        line: line_no,
                        message: format!("bad vertex: {e}"),
                    })?;
                if coords.len() != 3 {
                    return Err(ObjError::Parse {
                        line: line_no,
                        message: "vertex needs 3 coordinates".into(),
                    });
                }
                positions.push(Vec3::new(coords[0], coords[1], coords[2]));
            }
            "o" | "g" => {
                let name = tokens.collect::<Vec<_>>().join(" ");
                parts.push(PartBuilder::new(&name));
            }
            "f" => {
                let mut corners = Vec::new();
                for token in tokens {
                    corners.push(resolve_index(token, positions.len(), line_no)?);
                }
                if corners.len() < 3 {
                    return Err(ObjError::Parse {
                        line: line_no,
                        message: "face needs at least 3 vertices".into(),
                    });
                }
                // Always non-empty: seeded with an unnamed part.
                let Some(part) = parts.last_mut() else {
                    continue;
                };
                let first = part.local(corners[0], &positions);
                for pair in corners[1..].windows(2) {
                    let b = part.local(pair[0], &positions);
                    let c = part.local(pair[1], &positions);
                    part.mesh.triangles.push([first, b, c]);
                }
            }
            _ => {}
        }
    }

    let parts: Vec<Mesh> = parts
        .into_iter()
        .map(|p| p.mesh)
        .filter(|m| !m.triangles.is_empty())
        .collect();
    if parts.is_empty() {
        return Err(ObjError::Empty);
    }
    Ok(ObjModel { parts })
}

/// Resolve a face corner (`v`, `v/vt`, `v//vn`, `v/vt/vn`) to a 0-based index.
/// Negative indices count back from the latest vertex.
fn resolve_index(token: &str, count: usize, line: usize) -> Result<usize, ObjError> {
    let head = token.split('/').next().unwrap_or("");
    let index: i64 = head.parse().map_err(|_| ObjError::Parse {
        line,
        message: format!("bad face index {token:?}"),
    })?;
    let resolved = match index {
        i if i > 0 => i - 1,
        i if i < 0 => count as i64 + i,
        _ => -1,
    };
    if resolved < 0 || resolved as usize >= count {
        return Err(ObjError::InvalidIndex { line, index });
    }
    Ok(resolved as usize)
}

impl ObjModel {
    pub fn scale(&mut self, s: f64) {
        for part in &mut self.parts {
            part.scale(s);
        }
    }

    /// Wheel look: metallic gray hub (`plastic`) and near-black tire (`rubber`).
    /// Other parts keep their material.
    pub fn recolor_wheel_parts(&mut self) {
        for part in &mut self.parts {
            match part.name.as_str() {
                "plastic" => {
                    part.material.color = Color::from_hex(0x666666);
                    part.material.metalness = 1.0;
                }
                "rubber" => {
                    part.material.color = Color::from_hex(0x111111);
                }
                _ => {}
            }
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(|p| p.triangles.len()).sum()
    }
}
