//! Renderers.
//!
//! Responsibilities:
//! - expose a small, stable renderer-facing context ([`RenderCtx`],
//!   [`RenderTarget`])
//! - draw the instance field through one instanced pipeline
//!   ([`FieldRenderer`])

mod ctx;
mod field;

pub use ctx::{RenderCtx, RenderTarget};
pub use field::FieldRenderer;
