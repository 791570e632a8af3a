//! Per-draw geometry: everything the widget paints, already placed.

use rope_core::Padding;

use crate::bubble::{clamp_left, BubbleMetrics, LABEL_BASELINE_INSET};
use crate::curve::{lerp, sag_factor};
use crate::point::{Point, Size};

/// A straight rope segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// The completed portion of the rope.
///
/// At zero progress a round-capped line of length zero renders invisibly
/// on some rasterizers, so the segment degenerates to a filled dot at the
/// left anchor instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Completed {
    Line(Segment),
    Dot { center: Point, radius: f32 },
}

/// The value label, horizontally centered on `anchor.x` with its baseline
/// at `anchor.y`.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub anchor: Point,
}

/// One frame's worth of drawing, in paint order:
///
/// 1. `remaining` — stroked with the secondary color, round caps.
/// 2. `completed` — stroked/filled with the primary color.
/// 3. The bubble template translated to `bubble_origin`.
/// 4. The pointer template translated to `triangle_origin`.
/// 5. `label` on top of the bubble.
///
/// Later steps may occlude earlier ones; the order is part of the visual
/// contract.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub remaining: Segment,
    pub completed: Completed,
    pub bubble_origin: Point,
    pub triangle_origin: Point,
    pub label: Label,
    pub sag_height: f32,
}

impl Scene {
    /// Place every primitive for the current progress value.
    ///
    /// `bounds` is the widget's resolved size. `max == 0` defines the
    /// offset as 0; out-of-range progress is taken as-is and produces an
    /// off-screen rope end rather than an error.
    pub fn compose(
        bounds: Size,
        padding: Padding,
        stroke_width: f32,
        slack: f32,
        progress: i32,
        max: i32,
        bubble: &BubbleMetrics,
    ) -> Self {
        let radius = stroke_width / 2.0;
        let top = padding.top + radius + bubble.vertical_displacement();
        let left = padding.left + radius;
        let right = bounds.width - padding.right - radius;

        let offset = if max == 0 {
            0.0
        } else {
            progress as f32 / max as f32
        };
        let sag_height = sag_factor(offset) * slack;
        let progress_end = lerp(left, right, offset);

        let remaining = Segment {
            from: Point::new(progress_end, top + sag_height),
            to: Point::new(right, top),
        };

        // lerp is exact at t == 0, so zero progress lands on `left` and
        // the dot fallback triggers reliably.
        let completed = if progress_end == left {
            Completed::Dot {
                center: Point::new(left, top),
                radius,
            }
        } else {
            Completed::Line(Segment {
                from: Point::new(left, top),
                to: Point::new(progress_end, top + sag_height),
            })
        };

        let bubble_left = clamp_left(progress_end - bubble.width / 2.0, bounds.width, bubble.width);
        let bubble_top = sag_height;
        let triangle_left = clamp_left(
            progress_end - bubble.triangle_width / 2.0,
            bounds.width,
            bubble.triangle_width,
        );

        let label = Label {
            text: progress.to_string(),
            anchor: Point::new(
                bubble_left + bubble.width / 2.0,
                bubble_top + bubble.height - LABEL_BASELINE_INSET,
            ),
        };

        Self {
            remaining,
            completed,
            bubble_origin: Point::new(bubble_left, bubble_top),
            triangle_origin: Point::new(triangle_left, bubble_top + bubble.height),
            label,
            sag_height,
        }
    }
}

/// Preferred widget size before host resolution.
///
/// Width is padding plus stroke (content does not drive width — hosts
/// stretch it); height stacks padding, stroke, slack, and the bubble
/// displacement. The host resolves both against its own constraints.
pub fn preferred_size(
    padding: Padding,
    stroke_width: f32,
    slack: f32,
    bubble: &BubbleMetrics,
) -> Size {
    let width = (padding.horizontal() + stroke_width).ceil();
    let height =
        (padding.vertical() + stroke_width + slack).ceil() + bubble.vertical_displacement().ceil();
    Size::new(width, height)
}
