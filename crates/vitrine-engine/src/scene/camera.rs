use glam::{Mat4, Vec3};

/// Vertical field of view, in degrees.
pub const FOV_Y_DEG: f32 = 75.0;

/// Near clip plane distance.
pub const Z_NEAR: f32 = 0.1;

/// Far clip plane distance.
pub const Z_FAR: f32 = 1000.0;

/// Camera distance from the origin along +Z.
pub const EYE_DISTANCE: f32 = 5.0;

/// Perspective camera looking at the origin from a fixed position on +Z.
///
/// Only `aspect` is mutable after construction, and only the viewport adapter
/// writes it (on resize). Matrices are right-handed with a [0, 1] depth range
/// to match wgpu clip space.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Creates the scene camera with the fixed projection parameters and the
    /// given initial aspect ratio.
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, EYE_DISTANCE),
            fov_y: FOV_Y_DEG.to_radians(),
            aspect: sanitize_aspect(aspect),
            znear: Z_NEAR,
            zfar: Z_FAR,
        }
    }

    /// Updates the aspect ratio. Projection is recomputed on the next
    /// [`Camera::proj`] call; there is no cached matrix to invalidate.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = sanitize_aspect(aspect);
    }

    /// View matrix (eye looking at the origin, +Y up).
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, Vec3::ZERO, Vec3::Y)
    }

    /// Projection matrix.
    pub fn proj(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.znear, self.zfar)
    }

    /// Combined view-projection matrix.
    pub fn view_proj(&self) -> Mat4 {
        self.proj() * self.view()
    }
}

/// Zero/degenerate aspect ratios would produce a non-invertible projection;
/// clamp to a small positive value instead.
fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_uses_fixed_projection_parameters() {
        let cam = Camera::new(800.0 / 600.0);
        assert_relative_eq!(cam.fov_y, 75.0_f32.to_radians());
        assert_relative_eq!(cam.znear, 0.1);
        assert_relative_eq!(cam.zfar, 1000.0);
        assert_relative_eq!(cam.eye.z, 5.0);
    }

    #[test]
    fn set_aspect_tracks_latest_value() {
        let mut cam = Camera::new(800.0 / 600.0);
        assert_relative_eq!(cam.aspect, 1.333, max_relative = 1e-3);

        cam.set_aspect(1600.0 / 900.0);
        assert_relative_eq!(cam.aspect, 1.778, max_relative = 1e-3);
    }

    #[test]
    fn set_aspect_is_idempotent() {
        let mut a = Camera::new(1.0);
        let mut b = Camera::new(1.0);

        a.set_aspect(2.0);
        b.set_aspect(2.0);
        b.set_aspect(2.0);

        assert_eq!(a, b);
        assert_eq!(a.proj(), b.proj());
    }

    #[test]
    fn degenerate_aspect_is_clamped() {
        let mut cam = Camera::new(0.0);
        assert!(cam.aspect > 0.0);
        cam.set_aspect(f32::NAN);
        assert!(cam.aspect > 0.0);
    }

    #[test]
    fn view_looks_down_negative_z() {
        let cam = Camera::new(1.0);
        // The origin sits EYE_DISTANCE in front of the camera.
        let p = cam.view().transform_point3(Vec3::ZERO);
        assert_relative_eq!(p.z, -EYE_DISTANCE, epsilon = 1e-5);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let cam = Camera::new(1.6);
        let clip = cam.view_proj() * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert_relative_eq!(ndc.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(ndc.y, 0.0, epsilon = 1e-6);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
