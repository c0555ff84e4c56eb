use crate::field::{self, FieldConfig, Sampler};

use super::{Camera, Geometry, InstanceGroup, Lights, StandardMaterial};

/// The full set of drawable and lighting state for one frame.
///
/// Created once at startup and owned by the caller for the process lifetime
/// (no explicit teardown). Writers after assembly:
/// - the animator, through [`InstanceGroup::set_rotation`]
/// - the viewport adapter, through [`Camera::set_aspect`]
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Linear-space clear color.
    pub background: [f32; 3],
    pub camera: Camera,
    pub lights: Lights,
    /// Shared geometry referenced by every instance in `group`.
    pub geometry: Geometry,
    pub group: InstanceGroup,
}

impl Scene {
    /// Composes camera, lights, and the generated instance group into a
    /// scene ready for repeated drawing.
    ///
    /// Must run before the animation loop starts. CPU-side only; surface
    /// availability is checked by the runtime before any frame is drawn.
    pub fn assemble(config: &FieldConfig, aspect: f32, sampler: &mut dyn Sampler) -> Self {
        let template = StandardMaterial::template();
        let geometry = Geometry::icosahedron(config.size);
        let group = field::scatter(config, &template, sampler);

        log::debug!(
            "scene assembled: {} instances, size {}, spread {}",
            group.len(),
            config.size,
            config.spread,
        );

        Self {
            // Matches the page background the panel was embedded in (#222222).
            background: [0.0159, 0.0159, 0.0159],
            camera: Camera::new(aspect),
            lights: Lights::studio(),
            geometry,
            group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::SequenceSampler;

    #[test]
    fn assemble_attaches_generated_group() {
        let config = FieldConfig {
            count: 200,
            size: 0.1,
            spread: 10.0,
        };
        let mut sampler = SequenceSampler::cycling(&[0.1, 0.4, 0.9]);
        let scene = Scene::assemble(&config, 800.0 / 600.0, &mut sampler);

        assert_eq!(scene.group.len(), 200);
        assert_eq!(scene.geometry.vertex_count(), 60);
        assert_eq!(scene.group.rotation(), (0.0, 0.0));
    }

    #[test]
    fn assemble_with_zero_count_yields_empty_group() {
        let config = FieldConfig {
            count: 0,
            size: 0.1,
            spread: 10.0,
        };
        let mut sampler = SequenceSampler::cycling(&[0.5]);
        let scene = Scene::assemble(&config, 1.0, &mut sampler);
        assert!(scene.group.is_empty());
    }
}
