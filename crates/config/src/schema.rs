use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `rope.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RopeConfig {
    /// Demo window settings.
    pub window: WindowConfig,
    /// Initial progress value/range shown by the demo.
    pub progress: ProgressConfig,
    /// Widget appearance.
    pub style: StyleConfig,
}

/// Demo window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial window width in logical pixels.
    pub width: f32,
    /// Initial window height in logical pixels.
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 260.0,
        }
    }
}

/// Initial progress state for the demo host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    pub value: i32,
    pub max: i32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self { value: 35, max: 100 }
    }
}

/// Widget appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Completed-segment color (hex, e.g. `"#009688"`).
    /// Empty = resolve from the host theme.
    pub primary: String,
    /// Remaining-segment color (hex). Empty = resolve from the host theme.
    pub secondary: String,
    /// Rope thickness in logical pixels.
    pub stroke_width: f32,
    /// Maximum sag displacement at 50% progress, logical pixels.
    pub slack: f32,
    /// Bubble label size.
    pub text_size: f32,
    /// Bubble fill color (hex).
    pub bubble_fill: String,
    /// Bubble label color (hex).
    pub label_color: String,
    /// Uniform inner padding of the widget.
    pub padding: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            primary:      String::new(),
            secondary:    String::new(),
            stroke_width: 8.0,
            slack:        32.0,
            text_size:    16.0,
            bubble_fill:  "#ffffff".to_string(),
            label_color:  "#000000".to_string(),
            padding:      0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: RopeConfig = toml::from_str("").expect("empty config must parse");
        assert_eq!(cfg.progress.max, 100);
        assert_eq!(cfg.style.stroke_width, 8.0);
        assert_eq!(cfg.style.slack, 32.0);
        assert!(cfg.style.primary.is_empty());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let cfg: RopeConfig = toml::from_str(
            r#"
            [style]
            slack = 48.0
            primary = "#ff0000"
            "#,
        )
        .expect("partial config must parse");
        assert_eq!(cfg.style.slack, 48.0);
        assert_eq!(cfg.style.primary, "#ff0000");
        assert_eq!(cfg.style.stroke_width, 8.0);
        assert_eq!(cfg.window.width, 480.0);
    }
}
