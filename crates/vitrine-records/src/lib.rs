//! Record display collaborator.
//!
//! Shapes plain project/post records into a rendered, collapsible text list.
//! This crate runs alongside the 3D core from the same startup trigger but is
//! causally unrelated to it: a failure here never reaches the render loop.

mod display;
mod record;
mod source;

pub use display::{current_year, footer_line, render_list};
pub use record::{Record, parse_documents};
pub use source::{RecordSource, StaticSource};
