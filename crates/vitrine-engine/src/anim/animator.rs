use crate::scene::InstanceGroup;

/// Per-frame X rotation increment, radians.
pub const X_STEP: f32 = 0.0002;

/// Per-frame Y rotation increment, radians.
pub const Y_STEP: f32 = 0.0005;

/// Animation loop lifecycle.
///
/// `Idle` until scene assembly completes, then `Running` for the rest of the
/// process. There is no terminal state and no cancellation; the host tears
/// the loop down with the process.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Idle,
    Running,
}

/// Drives the group rotation, one fixed increment per frame.
///
/// The rotation is derived from the monotonic frame counter by
/// multiplication (`step * k`), not by repeated addition, so after `k` ticks
/// the group has advanced by exactly `k` increments with no accumulation
/// drift.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Animator {
    state: LoopState,
    frames: u64,
}

impl Animator {
    pub fn new() -> Self {
        Self {
            state: LoopState::Idle,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of ticks applied so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Transitions Idle → Running. Called once, at scene-assembly
    /// completion; calling again is a no-op.
    pub fn start(&mut self) {
        if self.state == LoopState::Idle {
            self.state = LoopState::Running;
            log::debug!("animation loop running");
        }
    }

    /// One loop iteration: advance the frame counter and apply the aggregate
    /// rotation to `group`. Returns `false` (leaving `group` untouched) while
    /// the loop has not been started.
    pub fn tick(&mut self, group: &mut InstanceGroup) -> bool {
        if self.state != LoopState::Running {
            return false;
        }

        self.frames += 1;
        let k = self.frames as f32;
        group.set_rotation(X_STEP * k, Y_STEP * k);
        true
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn starts_idle_and_ignores_ticks() {
        let mut animator = Animator::new();
        let mut group = InstanceGroup::empty();

        assert_eq!(animator.state(), LoopState::Idle);
        assert!(!animator.tick(&mut group));
        assert_eq!(group.rotation(), (0.0, 0.0));
        assert_eq!(animator.frames(), 0);
    }

    #[test]
    fn start_transitions_once() {
        let mut animator = Animator::new();
        animator.start();
        assert_eq!(animator.state(), LoopState::Running);

        // Re-starting is a defined no-op.
        animator.start();
        assert_eq!(animator.state(), LoopState::Running);
    }

    #[test]
    fn k_ticks_advance_exactly_k_increments() {
        let mut animator = Animator::new();
        let mut group = InstanceGroup::empty();
        animator.start();

        for _ in 0..137 {
            assert!(animator.tick(&mut group));
        }

        let (x, y) = group.rotation();
        assert_eq!(x, X_STEP * 137.0);
        assert_eq!(y, Y_STEP * 137.0);
        assert_eq!(animator.frames(), 137);
    }

    #[test]
    fn thousand_frames_reach_expected_rotation() {
        let mut animator = Animator::new();
        let mut group = InstanceGroup::empty();
        animator.start();

        for _ in 0..1000 {
            animator.tick(&mut group);
        }

        let (x, y) = group.rotation();
        assert_relative_eq!(x, 0.2, max_relative = 1e-5);
        assert_relative_eq!(y, 0.5, max_relative = 1e-5);
    }
}
