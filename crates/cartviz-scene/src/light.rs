use crate::Vec3;
use crate::color::Color;
use crate::mesh::Material;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: Color,
    pub intensity: f64,
    /// Range beyond which the light contributes nothing; 0 means unbounded.
    pub distance: f64,
    pub decay: f64,
    pub position: Vec3,
}

impl PointLight {
    /// Distance falloff: `(1 - d / distance)^decay`, clamped to [0, 1].
    pub fn attenuation(&self, d: f64) -> f64 {
        if self.distance <= 0.0 {
            return 1.0;
        }
        (1.0 - d / self.distance).clamp(0.0, 1.0).powf(self.decay)
    }
}

/// All lights in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub points: Vec<PointLight>,
}

impl Lighting {
    /// Flat Blinn-Phong shade of a surface point.
    ///
    /// `normal` must be unit length and face the viewer.
    pub fn shade(&self, material: &Material, point: &Vec3, normal: &Vec3, eye: &Vec3) -> Color {
        let ambient = self.ambient.color.scale(self.ambient.intensity);
        let mut diffuse = ambient;
        let mut specular = Color::BLACK;
        let view_dir = (eye - point).normalize();

        for light in &self.points {
            let to_light = light.position - point;
            let d = to_light.norm();
            if d < 1e-12 {
                continue;
            }
            let l = to_light / d;
            let radiance = light.color.scale(light.intensity * light.attenuation(d));

            let n_dot_l = normal.dot(&l).max(0.0);
            diffuse = diffuse.add(radiance.scale(n_dot_l));

            if material.specular > 0.0 && n_dot_l > 0.0 {
                let half = (l + view_dir).normalize();
                let strength = normal.dot(&half).max(0.0).powf(material.shininess.max(1.0));
                let k = material.specular + (1.0 - material.specular) * material.metalness * 0.25;
                specular = specular.add(radiance.scale(strength * k));
            }
        }

        material.color.modulate(diffuse).add(specular)
    }
}
