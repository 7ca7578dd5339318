//! Color palette for the slideshow.

use orderwrapped::scene::SceneKind;
use ratatui::style::Color;

pub(crate) const ACCENT_YELLOW: Color = Color::Rgb(0xf5, 0xc5, 0x18);
pub(crate) const ACCENT_PINK: Color = Color::Rgb(0xff, 0x30, 0x86);
pub(crate) const DIMMED: Color = Color::DarkGray;
pub(crate) const BAR_FILLED: Color = Color::White;
pub(crate) const BAR_EMPTY: Color = Color::Rgb(0x33, 0x33, 0x33);

/// Per-scene accent color, echoing the web gradients scene by scene.
pub(crate) fn scene_accent(kind: &SceneKind) -> Color {
    match kind {
        SceneKind::Intro { .. } => ACCENT_PINK,
        SceneKind::UniqueItems { .. } => Color::Rgb(0x7d, 0xd3, 0xfc),
        SceneKind::TopItems { .. } => ACCENT_YELLOW,
        SceneKind::FavoriteRestaurant { .. } => Color::Rgb(0xc0, 0x84, 0xfc),
        SceneKind::TopRestaurants { .. } => Color::Rgb(0x34, 0xc2, 0x30),
        SceneKind::BusiestDay { .. } => Color::Rgb(0xe1, 0xc4, 0xff),
        SceneKind::BusiestDayOrders { .. } => Color::Rgb(0xfb, 0x92, 0x3c),
        SceneKind::EarliestOrder { .. } => Color::Rgb(0xfd, 0xe0, 0x47),
        SceneKind::LatestOrder { .. } => Color::Rgb(0x81, 0x8c, 0xf8),
        SceneKind::MostExpensiveOrder { .. } => Color::Rgb(0x4a, 0xde, 0x80),
        SceneKind::Vibe => ACCENT_PINK,
        SceneKind::End => Color::White,
        SceneKind::Summary(_) => Color::Rgb(0xa5, 0xb4, 0xfc),
    }
}

/// Parse a `#rrggbb` highlight color from the vibe response. The response is
/// untrusted, so slicing stays byte-boundary safe and anything malformed is
/// `None`.
pub(crate) fn parse_hex_color(raw: &str) -> Option<Color> {
    let hex = raw.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_hex() {
        assert_eq!(parse_hex_color("#ff3086"), Some(Color::Rgb(0xff, 0x30, 0x86)));
        assert_eq!(parse_hex_color("#000000"), Some(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(parse_hex_color("ff3086"), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn rejects_multibyte_hex_without_panicking() {
        // Six bytes but not six ASCII chars; slicing must not cross a char
        // boundary.
        assert_eq!(parse_hex_color("#a\u{e9}a\u{e9}"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }
}
