//! Rope-style progress indicator for iced hosts.
//!
//! Geometry lives in `rope-geometry`; this crate binds it to the host
//! toolkit: canvas drawing, cached geometry, preferred-size reporting,
//! and the public mutator surface.

pub mod measure;
pub mod rope;

pub use measure::MonoMeasure;
pub use rope::RopeProgress;
