//! Visual defaults applied where containers do not override them.

use serde::Deserialize;

use crate::cell::Color;
use crate::width::rune_width;

/// Glyph drawn when a container is too small to show its content.
pub const RESIZE_GLYPH: char = '⇄';

/// Theme settings, loadable from JSON. Missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Border color for containers that are not focused.
    pub border_color: Color,
    /// Border color for the focused container.
    pub focused_color: Color,
    pub resize_glyph: char,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border_color: Color::Default,
            focused_color: Color::Yellow,
            resize_glyph: RESIZE_GLYPH,
        }
    }
}

impl Theme {
    /// Parse a theme. A `resize_glyph` wider than one cell is rejected, since
    /// the indicator must fit into a 1×1 container.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let theme: Self = serde_json::from_str(raw)?;
        if rune_width(theme.resize_glyph) != 1 {
            return Err(serde::de::Error::custom(format!(
                "resize_glyph `{}` must be one cell wide",
                theme.resize_glyph
            )));
        }
        Ok(theme)
    }

    /// Glyph used for the resize indicator, falling back to [`RESIZE_GLYPH`]
    /// when the configured one is wider than a cell.
    pub fn indicator(&self) -> char {
        if rune_width(self.resize_glyph) == 1 {
            self.resize_glyph
        } else {
            RESIZE_GLYPH
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let theme = Theme::from_json(r#"{"focused_color":"bright_green"}"#).unwrap();
        assert_eq!(theme.focused_color, Color::BrightGreen);
        assert_eq!(theme.border_color, Color::Default);
        assert_eq!(theme.resize_glyph, '⇄');
    }

    #[test]
    fn wide_resize_glyph_is_rejected() {
        assert!(Theme::from_json(r#"{"resize_glyph":"界"}"#).is_err());
        let theme = Theme::from_json(r#"{"resize_glyph":"!"}"#).unwrap();
        assert_eq!(theme.indicator(), '!');

        let wide = Theme {
            resize_glyph: '界',
            ..Theme::default()
        };
        assert_eq!(wide.indicator(), RESIZE_GLYPH);
    }

    #[test]
    fn unknown_color_is_rejected() {
        assert!(Theme::from_json(r#"{"border_color":"chartreuse"}"#).is_err());
    }
}
