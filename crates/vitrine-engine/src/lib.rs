//! Vitrine engine crate.
//!
//! This crate owns the platform + GPU runtime pieces and the 3D field scene
//! used by the viewer binary.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod scene;
pub mod field;
pub mod viewport;
pub mod anim;
pub mod render;
