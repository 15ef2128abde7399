use smallvec::SmallVec;

use crate::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }

    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(r, g, b, a)
    }

    pub fn from_hex(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        // str::get, not indexing: non-ASCII input would split a char
        let pair = |range| {
            s.get(range)
                .and_then(|p| u8::from_str_radix(p, 16).ok())
        };
        let (r, g, b, a) = match s.len() {
            6 => (
                pair(0..2).unwrap_or(0),
                pair(2..4).unwrap_or(0),
                pair(4..6).unwrap_or(0),
                255,
            ),
            8 => (
                pair(0..2).unwrap_or(0),
                pair(2..4).unwrap_or(0),
                pair(4..6).unwrap_or(0),
                pair(6..8).unwrap_or(255),
            ),
            _ => (0, 0, 0, 255),
        };
        Color(r, g, b, a)
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }

    /// Alpha scaled by a 0..=1 factor, used for highlight states.
    pub fn with_alpha_fraction(self, f: f32) -> Self {
        let a = (self.3 as f32 * f.clamp(0.0, 1.0)).round() as u8;
        self.with_alpha(a)
    }
}

/// A color stop of a linear gradient. `location` is normalized 0..=1 along
/// the gradient line.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientStop {
    pub color: Color,
    pub location: f32,
}

/// Linear gradient in the local space of the cell being drawn: `start` and
/// `end` are normalized coordinates (top-left is (0,0), bottom-right is
/// (1,1)), interpreted against the cell's actual rect by the surface.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: SmallVec<[GradientStop; 4]>,
}

impl Gradient {
    pub fn vertical(stops: impl IntoIterator<Item = GradientStop>) -> Self {
        Gradient {
            start: Vec2 { x: 0.0, y: 0.0 },
            end: Vec2 { x: 0.0, y: 1.0 },
            stops: stops.into_iter().collect(),
        }
    }

    pub fn horizontal(stops: impl IntoIterator<Item = GradientStop>) -> Self {
        Gradient {
            start: Vec2 { x: 0.0, y: 0.0 },
            end: Vec2 { x: 1.0, y: 0.0 },
            stops: stops.into_iter().collect(),
        }
    }

    /// Builds a vertical gradient from parallel color/location arrays.
    ///
    /// Colors without a matching location are spread evenly over 0..=1;
    /// surplus locations are ignored.
    pub fn from_parts(colors: &[Color], locations: &[f32]) -> Self {
        let n = colors.len();
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| GradientStop {
                color,
                location: locations.get(i).copied().unwrap_or_else(|| {
                    if n <= 1 {
                        0.0
                    } else {
                        i as f32 / (n - 1) as f32
                    }
                }),
            })
            .collect();
        Gradient {
            start: Vec2 { x: 0.0, y: 0.0 },
            end: Vec2 { x: 0.0, y: 1.0 },
            stops,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        assert_eq!(Color::from_hex("#102030"), Color(16, 32, 48, 255));
        assert_eq!(Color::from_hex("10203040"), Color(16, 32, 48, 64));
        assert_eq!(Color::from_hex("nope"), Color::BLACK);
    }

    #[test]
    fn hex_parsing_tolerates_non_ascii_input() {
        // 6 bytes, but the byte ranges land inside multi-byte chars
        assert_eq!(Color::from_hex("éaéa"), Color::BLACK);
        // 8 bytes; only the trailing ascii pair parses
        assert_eq!(Color::from_hex("#éééaa"), Color(0, 0, 0, 170));
    }

    #[test]
    fn alpha_fraction_scales_existing_alpha() {
        let c = Color::from_rgba(10, 20, 30, 200);
        assert_eq!(c.with_alpha_fraction(0.5).3, 100);
        assert_eq!(c.with_alpha_fraction(2.0).3, 200);
    }

    #[test]
    fn gradient_from_parts_fills_missing_locations() {
        let g = Gradient::from_parts(&[Color::BLACK, Color::WHITE, Color::TRANSPARENT], &[0.1]);
        assert_eq!(g.stops.len(), 3);
        assert_eq!(g.stops[0].location, 0.1);
        assert_eq!(g.stops[1].location, 0.5);
        assert_eq!(g.stops[2].location, 1.0);
    }
}
