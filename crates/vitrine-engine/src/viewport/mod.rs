//! Viewport tracking and the resize adapter.
//!
//! The host window is the source of truth for output dimensions; this module
//! mirrors them into the camera. The GPU surface itself is reconfigured by
//! the window runtime using the same physical size, so after any resize both
//! the camera aspect and the draw surface agree with the latest event.

use crate::scene::Camera;

/// Explicit initialization state, checked before any adapter action.
///
/// Resize events can be dispatched before scene setup completes; those are a
/// defined no-op rather than an implicit null check.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Stage {
    Uninitialized,
    Ready,
}

/// Host-provided drawable surface dimensions (physical pixels) plus the
/// device pixel ratio.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ViewportState {
    pub width: u32,
    pub height: u32,
    pub scale_factor: f64,
}

impl ViewportState {
    pub fn new(width: u32, height: u32, scale_factor: f64) -> Self {
        Self {
            width,
            height,
            scale_factor,
        }
    }

    /// Width/height ratio; a zero height degrades to 1 pixel rather than
    /// dividing by zero.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Applies resize signals to the camera once initialization has completed.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportAdapter {
    stage: Stage,
    state: ViewportState,
}

impl ViewportAdapter {
    pub fn new() -> Self {
        Self {
            stage: Stage::Uninitialized,
            state: ViewportState::default(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Records the initial viewport and transitions to `Ready`. Called at
    /// scene-assembly completion.
    pub fn mark_ready(&mut self, state: ViewportState) {
        self.state = state;
        self.stage = Stage::Ready;
    }

    /// Processes one resize signal: remembers the new viewport and updates
    /// the camera aspect to `width / height`.
    ///
    /// Returns `false` (mutating nothing) while `Uninitialized`. Idempotent:
    /// applying the same signal twice leaves the same state as once.
    pub fn apply(&mut self, camera: &mut Camera, state: ViewportState) -> bool {
        if self.stage != Stage::Ready {
            log::trace!("resize before initialization; ignored");
            return false;
        }

        self.state = state;
        camera.set_aspect(state.aspect());
        true
    }
}

impl Default for ViewportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn resize_before_ready_is_a_no_op() {
        let mut adapter = ViewportAdapter::new();
        let mut camera = Camera::new(1.0);
        let before = camera.clone();

        let applied = adapter.apply(&mut camera, ViewportState::new(1600, 900, 1.0));
        assert!(!applied);
        assert_eq!(camera, before);
        assert_eq!(adapter.stage(), Stage::Uninitialized);
    }

    #[test]
    fn resize_updates_camera_aspect() {
        let mut adapter = ViewportAdapter::new();
        let mut camera = Camera::new(800.0 / 600.0);
        adapter.mark_ready(ViewportState::new(800, 600, 1.0));

        assert!(adapter.apply(&mut camera, ViewportState::new(1600, 900, 1.0)));
        assert_relative_eq!(camera.aspect, 1.778, max_relative = 1e-3);
        assert_eq!(adapter.state(), ViewportState::new(1600, 900, 1.0));
    }

    #[test]
    fn applying_same_resize_twice_is_idempotent() {
        let mut adapter = ViewportAdapter::new();
        let mut camera = Camera::new(1.0);
        adapter.mark_ready(ViewportState::new(800, 600, 2.0));

        let signal = ViewportState::new(1024, 768, 2.0);
        adapter.apply(&mut camera, signal);
        let once = (adapter.clone(), camera.clone());

        adapter.apply(&mut camera, signal);
        assert_eq!((adapter, camera), once);
    }

    #[test]
    fn latest_of_a_sequence_wins() {
        let mut adapter = ViewportAdapter::new();
        let mut camera = Camera::new(1.0);
        adapter.mark_ready(ViewportState::new(100, 100, 1.0));

        for (w, h) in [(640, 480), (800, 600), (1600, 900)] {
            adapter.apply(&mut camera, ViewportState::new(w, h, 1.0));
        }
        assert_relative_eq!(camera.aspect, 1600.0 / 900.0);
        assert_eq!(adapter.state().width, 1600);
    }

    #[test]
    fn aspect_survives_zero_height() {
        let state = ViewportState::new(300, 0, 1.0);
        assert!(state.aspect().is_finite());
    }
}
