//! Background color parsing: named colors, hex and `rgb()` notation.

use std::fmt;
use std::str::FromStr;

use image::Rgba;

use crate::CollageError;

const ACCEPTED_FORMS: &str =
    "use a color name (e.g. 'white', 'black', 'red'), hex (e.g. '#FFFFFF') or 'rgb(255, 255, 255)'";

/// Canvas fill color, stored as straight-alpha RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundColor(pub Rgba<u8>);

impl BackgroundColor {
    pub const WHITE: Self = Self(Rgba([255, 255, 255, 255]));
    pub const BLACK: Self = Self(Rgba([0, 0, 0, 255]));

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(Rgba([r, g, b, a]))
    }

    /// Parse a named, hex (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`) or
    /// `rgb(r, g, b)` / `rgba(r, g, b, a)` color.
    pub fn parse(s: &str) -> crate::Result<Self> {
        let s = s.trim();
        parse_functional(s)
            .or_else(|| parse_hex(s.strip_prefix('#').unwrap_or(s)))
            .or_else(|| lookup_named(s))
            .ok_or_else(|| {
                CollageError::InvalidConfig(format!("invalid background color '{s}': {ACCEPTED_FORMS}"))
            })
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        self.0
    }
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for BackgroundColor {
    type Err = CollageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0.0;
        if a == 255 {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

fn parse_hex(hex: &str) -> Option<BackgroundColor> {
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|n| n << 4 | n);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(BackgroundColor::rgba(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
        4 => Some(BackgroundColor::rgba(
            nibble(0)?,
            nibble(1)?,
            nibble(2)?,
            nibble(3)?,
        )),
        6 => Some(BackgroundColor::rgba(byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Some(BackgroundColor::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

/// `rgb(r, g, b)` or `rgba(r, g, b, a)` with 0..=255 components.
fn parse_functional(s: &str) -> Option<BackgroundColor> {
    let lower = s.to_ascii_lowercase();
    let (args, expected) = if let Some(rest) = lower.strip_prefix("rgba(") {
        (rest.strip_suffix(')')?, 4)
    } else if let Some(rest) = lower.strip_prefix("rgb(") {
        (rest.strip_suffix(')')?, 3)
    } else {
        return None;
    };

    let parts = args
        .split(',')
        .map(|p| p.trim().parse::<u8>().ok())
        .collect::<Option<Vec<_>>>()?;
    if parts.len() != expected {
        return None;
    }
    let a = parts.get(3).copied().unwrap_or(255);
    Some(BackgroundColor::rgba(parts[0], parts[1], parts[2], a))
}

fn lookup_named(name: &str) -> Option<BackgroundColor> {
    let lower = name.to_ascii_lowercase();
    NAMED_COLORS
        .binary_search_by_key(&lower.as_str(), |&(n, _)| n)
        .ok()
        .map(|idx| {
            let [r, g, b, a] = NAMED_COLORS[idx].1;
            BackgroundColor::rgba(r, g, b, a)
        })
}

/// Common CSS color names, sorted for binary search.
const NAMED_COLORS: &[(&str, [u8; 4])] = &[
    ("aqua", [0, 255, 255, 255]),
    ("beige", [245, 245, 220, 255]),
    ("black", [0, 0, 0, 255]),
    ("blue", [0, 0, 255, 255]),
    ("brown", [165, 42, 42, 255]),
    ("charcoal", [54, 69, 79, 255]),
    ("coral", [255, 127, 80, 255]),
    ("cream", [255, 253, 208, 255]),
    ("cyan", [0, 255, 255, 255]),
    ("darkblue", [0, 0, 139, 255]),
    ("darkgray", [169, 169, 169, 255]),
    ("darkgreen", [0, 100, 0, 255]),
    ("darkgrey", [169, 169, 169, 255]),
    ("darkred", [139, 0, 0, 255]),
    ("fuchsia", [255, 0, 255, 255]),
    ("gold", [255, 215, 0, 255]),
    ("gray", [128, 128, 128, 255]),
    ("green", [0, 128, 0, 255]),
    ("grey", [128, 128, 128, 255]),
    ("indigo", [75, 0, 130, 255]),
    ("ivory", [255, 255, 240, 255]),
    ("khaki", [240, 230, 140, 255]),
    ("lavender", [230, 230, 250, 255]),
    ("lightblue", [173, 216, 230, 255]),
    ("lightgray", [211, 211, 211, 255]),
    ("lightgreen", [144, 238, 144, 255]),
    ("lightgrey", [211, 211, 211, 255]),
    ("lime", [0, 255, 0, 255]),
    ("linen", [250, 240, 230, 255]),
    ("magenta", [255, 0, 255, 255]),
    ("maroon", [128, 0, 0, 255]),
    ("navy", [0, 0, 128, 255]),
    ("olive", [128, 128, 0, 255]),
    ("orange", [255, 165, 0, 255]),
    ("pink", [255, 192, 203, 255]),
    ("purple", [128, 0, 128, 255]),
    ("red", [255, 0, 0, 255]),
    ("salmon", [250, 128, 114, 255]),
    ("silver", [192, 192, 192, 255]),
    ("skyblue", [135, 206, 235, 255]),
    ("tan", [210, 180, 140, 255]),
    ("teal", [0, 128, 128, 255]),
    ("transparent", [0, 0, 0, 0]),
    ("turquoise", [64, 224, 208, 255]),
    ("violet", [238, 130, 238, 255]),
    ("white", [255, 255, 255, 255]),
    ("whitesmoke", [245, 245, 245, 255]),
    ("yellow", [255, 255, 0, 255]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_case_insensitive() {
        assert_eq!(BackgroundColor::parse("white").unwrap(), BackgroundColor::WHITE);
        assert_eq!(BackgroundColor::parse("Black").unwrap(), BackgroundColor::BLACK);
        assert_eq!(
            BackgroundColor::parse("  NAVY ").unwrap(),
            BackgroundColor::rgba(0, 0, 128, 255)
        );
    }

    #[test]
    fn test_named_table_is_sorted() {
        assert!(NAMED_COLORS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_hex_forms() {
        assert_eq!(
            BackgroundColor::parse("#FFFFFF").unwrap(),
            BackgroundColor::WHITE
        );
        assert_eq!(
            BackgroundColor::parse("ff8000").unwrap(),
            BackgroundColor::rgba(255, 128, 0, 255)
        );
        assert_eq!(
            BackgroundColor::parse("#f80").unwrap(),
            BackgroundColor::rgba(255, 136, 0, 255)
        );
        assert_eq!(
            BackgroundColor::parse("#0000ff80").unwrap(),
            BackgroundColor::rgba(0, 0, 255, 128)
        );
        assert_eq!(
            BackgroundColor::parse("#fff0").unwrap(),
            BackgroundColor::rgba(255, 255, 255, 0)
        );
    }

    #[test]
    fn test_functional_forms() {
        assert_eq!(
            BackgroundColor::parse("rgb(10, 20, 30)").unwrap(),
            BackgroundColor::rgba(10, 20, 30, 255)
        );
        assert_eq!(
            BackgroundColor::parse("RGBA(1,2,3,4)").unwrap(),
            BackgroundColor::rgba(1, 2, 3, 4)
        );
        assert!(BackgroundColor::parse("rgb(1, 2)").is_err());
        assert!(BackgroundColor::parse("rgb(256, 0, 0)").is_err());
    }

    #[test]
    fn test_invalid_colors() {
        for bad in ["", "#12", "notacolor", "#gggggg", "rgba(1,2,3)"] {
            let err = BackgroundColor::parse(bad).unwrap_err();
            assert!(matches!(err, CollageError::InvalidConfig(_)), "{bad}");
        }
    }

    #[test]
    fn test_display_round_trips() {
        let c = BackgroundColor::rgba(18, 52, 86, 255);
        assert_eq!(c.to_string(), "#123456");
        assert_eq!(c.to_string().parse::<BackgroundColor>().unwrap(), c);
        assert_eq!(BackgroundColor::rgba(1, 2, 3, 4).to_string(), "#01020304");
    }
}
