//! Fixed theme tokens consumed by all views
//!
//! The source material styles every view from one small palette, so the
//! tokens live in a single struct rather than scattered per-component
//! styles. The palette is fixed; there is no user theming.

use crate::model::MetricStatus;
use ratatui::style::Color;

/// Default chart palette, indexed by series/slice position when a
/// `Series` supplies no explicit color.
pub const CHART_PALETTE: &[Color] = &[
    Color::Rgb(74, 134, 232),  // blue
    Color::Rgb(0, 204, 0),     // green
    Color::Rgb(255, 153, 0),   // amber
    Color::Rgb(255, 102, 102), // soft red
    Color::Rgb(153, 102, 255), // violet
    Color::Rgb(0, 188, 212),   // teal
];

/// Data-driven theme: every color in one struct.
#[derive(Debug, Clone)]
pub struct Theme {
    pub heading: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    pub tab_active: Color,

    // Semantic metric treatments
    pub good: Color,
    pub warning: Color,
    pub critical: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            heading: Color::Rgb(30, 61, 89), // navy
            text: Color::White,
            dim: Color::DarkGray,
            border: Color::Rgb(55, 55, 75),
            tab_active: Color::Cyan,
            good: Color::Rgb(0, 204, 0),
            warning: Color::Rgb(255, 153, 0),
            critical: Color::Rgb(255, 0, 0),
        }
    }
}

impl Theme {
    /// Map a metric status to its fixed visual treatment.
    /// `None` gets the neutral text color.
    pub fn status_color(&self, status: Option<MetricStatus>) -> Color {
        match status {
            Some(MetricStatus::Good) => self.good,
            Some(MetricStatus::Warning) => self.warning,
            Some(MetricStatus::Critical) => self.critical,
            None => self.text,
        }
    }

    /// Resolve a series color: explicit `#rrggbb` value if present and
    /// parseable, otherwise the default palette at `index`.
    pub fn series_color(&self, explicit: Option<&str>, index: usize) -> Color {
        explicit
            .and_then(parse_hex_color)
            .unwrap_or(CHART_PALETTE[index % CHART_PALETTE.len()])
    }
}

/// Parse a `#rrggbb` hex string into a terminal color.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#00cc00"), Some(Color::Rgb(0, 204, 0)));
        assert_eq!(parse_hex_color("#FF9900"), Some(Color::Rgb(255, 153, 0)));
        assert_eq!(parse_hex_color("00cc00"), None);
        assert_eq!(parse_hex_color("#00cc0"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn test_series_color_falls_back_to_palette() {
        let theme = Theme::default();
        assert_eq!(theme.series_color(None, 0), CHART_PALETTE[0]);
        assert_eq!(
            theme.series_color(None, CHART_PALETTE.len() + 1),
            CHART_PALETTE[1]
        );
        assert_eq!(
            theme.series_color(Some("#ff6666"), 0),
            Color::Rgb(255, 102, 102)
        );
        // Unparseable explicit color falls back too
        assert_eq!(theme.series_color(Some("red"), 2), CHART_PALETTE[2]);
    }

    #[test]
    fn test_status_color_mapping() {
        let theme = Theme::default();
        assert_eq!(theme.status_color(Some(MetricStatus::Good)), theme.good);
        assert_eq!(
            theme.status_color(Some(MetricStatus::Critical)),
            theme.critical
        );
        assert_eq!(theme.status_color(None), theme.text);
    }
}
