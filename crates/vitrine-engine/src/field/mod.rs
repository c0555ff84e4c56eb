//! Instance field generation.
//!
//! Responsibilities:
//! - bounded pseudo-random placement of instances inside a cube
//! - keep the sampling source injectable so placement is testable

mod sampler;
mod scatter;

pub use sampler::{Sampler, SequenceSampler, ThreadSampler};
pub use scatter::{FieldConfig, scatter};
