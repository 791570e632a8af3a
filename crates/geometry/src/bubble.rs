//! Worst-case sizing and placement of the value bubble and its pointer.

use rope_core::TextMeasure;

/// Horizontal padding inside the bubble, around the label.
pub const BUBBLE_PADDING: f32 = 16.0;
/// Gap between the top of the widget and the bubble.
pub const BUBBLE_MARGIN: f32 = 4.0;
/// Corner radius of the bubble rectangle.
pub const CORNER_RADIUS: f32 = 2.0;
/// Pointer triangle dimensions.
pub const TRIANGLE_WIDTH: f32 = 12.0;
pub const TRIANGLE_HEIGHT: f32 = 6.0;
/// Label baseline inset from the bottom edge of the bubble.
pub const LABEL_BASELINE_INSET: f32 = 5.0;
/// Widest digit glyph in the faces we target.
pub const WIDEST_DIGIT: char = '8';

/// Decimal rendering of `max` with every character replaced by the widest
/// digit glyph (the sign position included).
///
/// Sizing against this string keeps the bubble wide enough for every value
/// the progress can take, so it never resizes mid-run.
pub fn widest_value_text(max: i32) -> String {
    max.to_string().chars().map(|_| WIDEST_DIGIT).collect()
}

/// Clamp an element's left edge so it stays inside `[0, total - width]`.
///
/// Composed as `min(total − width, max(0, desired))`: when the element is
/// wider than `total` the result goes negative rather than panicking, and
/// the element simply overhangs both edges.
pub fn clamp_left(desired: f32, total: f32, width: f32) -> f32 {
    (total - width).min(desired.max(0.0))
}

/// Fixed-size metrics of the bubble/pointer stack.
///
/// Recomputed only when `max` or the label size changes; every draw in
/// between reuses the same metrics (and the shape templates built from
/// them).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleMetrics {
    pub width: f32,
    /// Always `width / 2`.
    pub height: f32,
    pub triangle_width: f32,
    pub triangle_height: f32,
}

impl BubbleMetrics {
    /// Size the bubble for the widest rendering any value in `[0, max]`
    /// can have at `text_size`.
    pub fn measure(max: i32, text_size: f32, measure: &dyn TextMeasure) -> Self {
        let width = measure.width(&widest_value_text(max), text_size) + BUBBLE_PADDING;
        Self {
            width,
            height: width / 2.0,
            triangle_width: TRIANGLE_WIDTH,
            triangle_height: TRIANGLE_HEIGHT,
        }
    }

    /// Vertical space reserved above the rope for the bubble stack:
    /// margin + bubble + pointer.
    pub fn vertical_displacement(&self) -> f32 {
        BUBBLE_MARGIN + self.height + self.triangle_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Deterministic measurer: every glyph advances `advance` px.
    struct FixedAdvance(f32);

    impl TextMeasure for FixedAdvance {
        fn width(&self, text: &str, _size: f32) -> f32 {
            text.chars().count() as f32 * self.0
        }
    }

    #[test]
    fn widest_text_matches_digit_count() {
        assert_eq!(widest_value_text(0), "8");
        assert_eq!(widest_value_text(100), "888");
        assert_eq!(widest_value_text(9999), "8888");
    }

    #[test]
    fn widest_text_covers_the_sign() {
        assert_eq!(widest_value_text(-100), "8888");
    }

    #[test]
    fn clamp_left_passes_through_in_range() {
        assert_eq!(clamp_left(40.0, 100.0, 20.0), 40.0);
    }

    #[test]
    fn clamp_left_pins_both_edges() {
        assert_eq!(clamp_left(-5.0, 100.0, 20.0), 0.0);
        assert_eq!(clamp_left(95.0, 100.0, 20.0), 80.0);
    }

    #[test]
    fn clamp_left_does_not_panic_when_wider_than_total() {
        assert_eq!(clamp_left(10.0, 50.0, 80.0), -30.0);
    }

    proptest! {
        #[test]
        fn bubble_height_is_half_width(max in -99_999i32..=99_999, advance in 1.0f32..40.0) {
            let metrics = BubbleMetrics::measure(max, 16.0, &FixedAdvance(advance));
            prop_assert_eq!(metrics.height, metrics.width / 2.0);
        }

        #[test]
        fn displacement_stacks_margin_bubble_pointer(max in 0i32..=99_999) {
            let metrics = BubbleMetrics::measure(max, 16.0, &FixedAdvance(9.6));
            let expected = BUBBLE_MARGIN + metrics.height + metrics.triangle_height;
            prop_assert_eq!(metrics.vertical_displacement(), expected);
        }
    }
}
