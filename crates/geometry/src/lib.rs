//! Geometry model of the rope progress widget.
//!
//! Everything here is pure: the sag curve, the worst-case bubble sizing,
//! and the per-draw [`Scene`] that places each primitive. The host-facing
//! widget crate replays a `Scene` onto its canvas; nothing in this crate
//! knows about the host toolkit.

pub mod bubble;
pub mod curve;
pub mod point;
pub mod scene;

pub use bubble::{widest_value_text, BubbleMetrics};
pub use curve::{lerp, sag_factor};
pub use point::{Point, Size};
pub use scene::{preferred_size, Completed, Label, Scene, Segment};
