use glam::Vec3;

/// Non-directional fill light applied uniformly to every surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AmbientLight {
    pub intensity: f32,
}

/// Omnidirectional light at a fixed world position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
}

/// The scene's light rig. Static for the session; built once at assembly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Lights {
    pub ambient: AmbientLight,
    pub point: PointLight,
}

impl Lights {
    /// The standard rig: soft ambient fill plus one point light above and to
    /// the side of the field.
    pub fn studio() -> Self {
        Self {
            ambient: AmbientLight { intensity: 0.5 },
            point: PointLight {
                position: Vec3::new(5.0, 5.0, 5.0),
                intensity: 0.8,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn studio_rig_values() {
        let lights = Lights::studio();
        assert_eq!(lights.ambient.intensity, 0.5);
        assert_eq!(lights.point.position, Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(lights.point.intensity, 0.8);
    }
}
