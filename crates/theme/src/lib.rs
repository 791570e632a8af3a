pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::RopeStyle;

/// Resolve the completed/remaining color pair for a style.
///
/// Explicit overrides win. Unset colors take the host theme's
/// active/highlight control pair; without a host theme they fall back to
/// the fixed teal/light-gray pair.
pub fn line_colors(style: &RopeStyle, host: Option<&iced::Theme>) -> (Color, Color) {
    let host_pair = host.map(host_palette);
    let primary = style
        .primary
        .or(host_pair.map(|p| p.0))
        .unwrap_or(Color::TEAL);
    let secondary = style
        .secondary
        .or(host_pair.map(|p| p.1))
        .unwrap_or(Color::SILVER);
    (primary, secondary)
}

/// The host theme's control colors: the strong primary for the completed
/// segment, the weak background for the remaining one.
pub fn host_palette(theme: &iced::Theme) -> (Color, Color) {
    let palette = theme.extended_palette();
    (
        Color::from_iced(palette.primary.strong.color),
        Color::from_iced(palette.background.weak.color),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rope_config::StyleConfig;

    #[test]
    fn unset_colors_fall_back_to_teal_and_silver() {
        let style = RopeStyle::default();
        assert_eq!(line_colors(&style, None), (Color::TEAL, Color::SILVER));
    }

    #[test]
    fn explicit_colors_win_over_the_host_theme() {
        let style = RopeStyle::from_config(&StyleConfig {
            primary: "#ff0000".to_string(),
            secondary: "#00ff00".to_string(),
            ..StyleConfig::default()
        });
        let host = iced::Theme::Dark;
        let (p, s) = line_colors(&style, Some(&host));
        assert_eq!(p, Color::from_hex("#ff0000").unwrap());
        assert_eq!(s, Color::from_hex("#00ff00").unwrap());
    }

    #[test]
    fn host_theme_fills_unset_colors() {
        let style = RopeStyle::default();
        let host = iced::Theme::Dark;
        let (p, s) = line_colors(&style, Some(&host));
        let (hp, hs) = host_palette(&host);
        assert_eq!(p, hp);
        assert_eq!(s, hs);
    }

    #[test]
    fn invalid_hex_degrades_to_host_resolution() {
        let style = RopeStyle::from_config(&StyleConfig {
            primary: "not-a-color".to_string(),
            ..StyleConfig::default()
        });
        assert!(style.primary.is_none());
    }
}
