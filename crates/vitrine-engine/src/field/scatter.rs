use std::f32::consts::TAU;

use glam::Vec3;

use crate::scene::{Instance, InstanceGroup, StandardMaterial};

use super::Sampler;

/// Field generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// Number of instances to place.
    pub count: usize,

    /// Geometry radius.
    pub size: f32,

    /// Side length of the placement cube; positions land in
    /// `[-spread/2, +spread/2]` per axis.
    pub spread: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 200,
            size: 0.1,
            spread: 10.0,
        }
    }
}

/// Produces `config.count` placed instances, each owning a clone of
/// `template` and sharing the field geometry held by the scene.
///
/// Positions are sampled uniformly within the symmetric placement cube,
/// rotations uniformly in `[0, 2π)` per axis. `count = 0` yields a valid
/// empty group.
pub fn scatter(
    config: &FieldConfig,
    template: &StandardMaterial,
    sampler: &mut dyn Sampler,
) -> InstanceGroup {
    let half = config.spread / 2.0;

    let instances = (0..config.count)
        .map(|_| Instance {
            position: Vec3::new(
                sampler.next_in(-half..half),
                sampler.next_in(-half..half),
                sampler.next_in(-half..half),
            ),
            rotation: Vec3::new(
                sampler.next_in(0.0..TAU),
                sampler.next_in(0.0..TAU),
                sampler.next_in(0.0..TAU),
            ),
            material: template.clone(),
        })
        .collect();

    InstanceGroup::new(instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{SequenceSampler, ThreadSampler};

    fn config(count: usize, spread: f32) -> FieldConfig {
        FieldConfig {
            count,
            size: 0.1,
            spread,
        }
    }

    #[test]
    fn produces_exactly_count_instances() {
        let mut sampler = SequenceSampler::cycling(&[0.25]);
        for count in [0, 1, 7, 200] {
            let group = scatter(
                &config(count, 10.0),
                &StandardMaterial::template(),
                &mut sampler,
            );
            assert_eq!(group.len(), count);
        }
    }

    #[test]
    fn zero_count_yields_valid_empty_group() {
        let mut sampler = SequenceSampler::cycling(&[0.5]);
        let group = scatter(&config(0, 10.0), &StandardMaterial::template(), &mut sampler);
        assert!(group.is_empty());
        assert_eq!(group.rotation(), (0.0, 0.0));
    }

    #[test]
    fn positions_and_rotations_stay_in_bounds() {
        let spread = 10.0;
        let half = spread / 2.0;
        let mut sampler = ThreadSampler::new();
        let group = scatter(
            &config(500, spread),
            &StandardMaterial::template(),
            &mut sampler,
        );

        for inst in group.instances() {
            for p in inst.position.to_array() {
                assert!((-half..=half).contains(&p), "position {p} out of bounds");
            }
            for r in inst.rotation.to_array() {
                assert!((0.0..TAU).contains(&r), "rotation {r} out of bounds");
            }
        }
    }

    #[test]
    fn deterministic_with_sequence_sampler() {
        let units = [0.0, 0.25, 0.5, 0.75, 0.9, 0.1];
        let mut a = SequenceSampler::cycling(&units);
        let mut b = SequenceSampler::cycling(&units);
        let template = StandardMaterial::template();

        let ga = scatter(&config(20, 8.0), &template, &mut a);
        let gb = scatter(&config(20, 8.0), &template, &mut b);
        assert_eq!(ga, gb);
    }

    #[test]
    fn zero_spread_collapses_positions_onto_center() {
        let mut sampler = ThreadSampler::new();
        let group = scatter(&config(10, 0.0), &StandardMaterial::template(), &mut sampler);
        for inst in group.instances() {
            assert_eq!(inst.position, Vec3::ZERO);
        }
    }

    #[test]
    fn instances_own_material_clones() {
        let template = StandardMaterial::template();
        let mut sampler = SequenceSampler::cycling(&[0.3]);
        let group = scatter(&config(3, 4.0), &template, &mut sampler);
        for inst in group.instances() {
            assert_eq!(inst.material, template);
        }
    }
}
