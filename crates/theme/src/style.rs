use crate::colors::Color;
use rope_config::StyleConfig;

/// Compiled widget appearance derived from [`StyleConfig`].
///
/// Building is infallible — invalid color strings fall back to safe
/// defaults. `primary`/`secondary` stay `None` when unset so they can
/// resolve against the host theme at draw time.
#[derive(Debug, Clone)]
pub struct RopeStyle {
    /// Completed-segment color.  `None` = take it from the host theme.
    pub primary:      Option<Color>,
    /// Remaining-segment color.  `None` = take it from the host theme.
    pub secondary:    Option<Color>,
    /// Rope thickness in logical pixels.
    pub stroke_width: f32,
    /// Maximum sag at 50% progress, logical pixels.
    pub slack:        f32,
    /// Bubble label size.
    pub text_size:    f32,
    pub bubble_fill:  Color,
    pub label_color:  Color,
    /// Uniform inner padding of the widget.
    pub padding:      f32,
}

impl RopeStyle {
    /// Build a [`RopeStyle`] from the config file's `[style]` section.
    pub fn from_config(cfg: &StyleConfig) -> Self {
        Self {
            primary:      Color::from_hex(&cfg.primary),
            secondary:    Color::from_hex(&cfg.secondary),
            stroke_width: cfg.stroke_width,
            slack:        cfg.slack,
            text_size:    cfg.text_size,
            bubble_fill:  Color::from_hex(&cfg.bubble_fill).unwrap_or(Color::WHITE),
            label_color:  Color::from_hex(&cfg.label_color).unwrap_or(Color::BLACK),
            padding:      cfg.padding,
        }
    }
}

impl Default for RopeStyle {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default())
    }
}
