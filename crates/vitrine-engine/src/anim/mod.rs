//! Animation loop state.
//!
//! The loop body lives here as a plain method so tests can drive it
//! synchronously; the production frame source is the window runtime's
//! continuous redraw requests.

mod animator;

pub use animator::{Animator, LoopState, X_STEP, Y_STEP};
