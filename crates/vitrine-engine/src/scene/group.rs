use glam::{EulerRot, Mat4, Quat, Vec3};

use super::StandardMaterial;

/// One placed copy of the shared geometry.
///
/// Position and rotation are fixed at creation; only the parent group's
/// aggregate rotation changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub position: Vec3,
    /// Euler angles (XYZ order), radians.
    pub rotation: Vec3,
    pub material: StandardMaterial,
}

impl Instance {
    /// Local model matrix (instance rotation + translation). Constant for
    /// the lifetime of the instance, so renderers may upload it once.
    pub fn model(&self) -> Mat4 {
        let rot = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_rotation_translation(rot, self.position)
    }
}

/// Ordered collection of instances plus the aggregate group rotation.
///
/// Populated once at assembly and never resized. The two rotation angles
/// accumulate monotonically; wrapping happens implicitly through the
/// periodic functions inside [`InstanceGroup::model`] at draw time.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceGroup {
    instances: Vec<Instance>,
    rotation_x: f32,
    rotation_y: f32,
}

impl InstanceGroup {
    pub fn new(instances: Vec<Instance>) -> Self {
        Self {
            instances,
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }

    /// A valid group with nothing to draw.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Current aggregate rotation as `(x, y)` radians.
    pub fn rotation(&self) -> (f32, f32) {
        (self.rotation_x, self.rotation_y)
    }

    /// Overwrites the aggregate rotation. Only the animator calls this.
    pub fn set_rotation(&mut self, x: f32, y: f32) {
        self.rotation_x = x;
        self.rotation_y = y;
    }

    /// Aggregate model matrix applied on top of each instance's local
    /// transform.
    pub fn model(&self) -> Mat4 {
        Mat4::from_quat(Quat::from_euler(
            EulerRot::XYZ,
            self.rotation_x,
            self.rotation_y,
            0.0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::TAU;

    #[test]
    fn empty_group_is_valid() {
        let group = InstanceGroup::empty();
        assert_eq!(group.len(), 0);
        assert!(group.is_empty());
        assert_eq!(group.model(), Mat4::IDENTITY);
    }

    #[test]
    fn instance_model_places_position() {
        let inst = Instance {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation: Vec3::ZERO,
            material: StandardMaterial::template(),
        };
        let p = inst.model().transform_point3(Vec3::ZERO);
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 2.0);
        assert_relative_eq!(p.z, 3.0);
    }

    #[test]
    fn group_rotation_wraps_through_periodic_functions() {
        let mut a = InstanceGroup::empty();
        let mut b = InstanceGroup::empty();

        a.set_rotation(0.25, 0.5);
        b.set_rotation(0.25 + TAU, 0.5 + TAU);

        let ma = a.model().to_cols_array();
        let mb = b.model().to_cols_array();
        for i in 0..16 {
            assert_relative_eq!(ma[i], mb[i], epsilon = 1e-4);
        }
    }
}
