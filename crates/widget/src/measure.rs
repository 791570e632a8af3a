use rope_core::TextMeasure;

/// Advance width of the monospace face's glyphs, in ems.
const MONO_ADVANCE_EM: f32 = 0.6;

/// Fixed-advance measurer matched to the monospace face the bubble label
/// is drawn with.
///
/// Canvas text APIs rasterize but do not measure, so width measurement is
/// an injected capability; this default agrees with `Font::MONOSPACE`.
/// Hosts drawing the label with another face inject their own
/// [`TextMeasure`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MonoMeasure;

impl TextMeasure for MonoMeasure {
    fn width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * MONO_ADVANCE_EM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_with_glyph_count_and_size() {
        let m = MonoMeasure;
        assert_eq!(m.width("88", 10.0), 2.0 * m.width("8", 10.0));
        assert_eq!(m.width("8", 20.0), 2.0 * m.width("8", 10.0));
    }
}
