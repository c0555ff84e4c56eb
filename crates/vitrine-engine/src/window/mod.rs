//! Window runtime (winit event loop + frame pacing).

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
