//! Color maps: normalized scalar to [`Color32`].
//!
//! Named maps are continuous and sampled through a 256-entry lookup, so two
//! values falling into the same bucket get exactly the same color. Maps that
//! are not piecewise linear by definition (coolwarm, viridis) are stored as
//! evenly spaced samples of the reference tables and interpolated in between,
//! which stays within a few 8-bit steps of the reference. Listed maps
//! hold a discrete set of colors and are typically paired with a
//! [`Norm::Boundary`](crate::data::norm::Norm::Boundary).

use std::fmt;
use std::str::FromStr;

use egui::Color32;

use crate::data::norm::Normalized;
use crate::error::{ColorLineError, Result};

/// Number of lookup entries of the continuous maps.
pub const LUT_SIZE: usize = 256;

/// Color used for NaN inputs.
pub const BAD_COLOR: Color32 = Color32::TRANSPARENT;

type Anchors = &'static [(f64, f64)];

/// Piecewise-linear channel definitions, `(position, intensity)` pairs.
struct SegmentData {
    red: Anchors,
    green: Anchors,
    blue: Anchors,
}

const COPPER: SegmentData = SegmentData {
    red: &[(0.0, 0.0), (0.809524, 1.0), (1.0, 1.0)],
    green: &[(0.0, 0.0), (1.0, 0.7812)],
    blue: &[(0.0, 0.0), (1.0, 0.4975)],
};

const COOL: SegmentData = SegmentData {
    red: &[(0.0, 0.0), (1.0, 1.0)],
    green: &[(0.0, 1.0), (1.0, 0.0)],
    blue: &[(0.0, 1.0), (1.0, 1.0)],
};

const JET: SegmentData = SegmentData {
    red: &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)],
    green: &[
        (0.0, 0.0),
        (0.125, 0.0),
        (0.375, 1.0),
        (0.64, 1.0),
        (0.91, 0.0),
        (1.0, 0.0),
    ],
    blue: &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)],
};

const COOLWARM: SegmentData = SegmentData {
    red: &[
        (0.0, 0.2298),
        (0.0625, 0.3039),
        (0.125, 0.3830),
        (0.1875, 0.4667),
        (0.25, 0.5530),
        (0.3125, 0.6392),
        (0.375, 0.7222),
        (0.4375, 0.7987),
        (0.5, 0.8654),
        (0.5625, 0.9241),
        (0.625, 0.9589),
        (0.6875, 0.9700),
        (0.75, 0.9580),
        (0.8125, 0.9239),
        (0.875, 0.8692),
        (0.9375, 0.7956),
        (1.0, 0.7057),
    ],
    green: &[
        (0.0, 0.2987),
        (0.0625, 0.4065),
        (0.125, 0.5094),
        (0.1875, 0.6046),
        (0.25, 0.6889),
        (0.3125, 0.7596),
        (0.375, 0.8140),
        (0.4375, 0.8498),
        (0.5, 0.8654),
        (0.5625, 0.8274),
        (0.625, 0.7698),
        (0.6875, 0.6943),
        (0.75, 0.6028),
        (0.8125, 0.4973),
        (0.875, 0.3783),
        (0.9375, 0.2413),
        (1.0, 0.0156),
    ],
    blue: &[
        (0.0, 0.7537),
        (0.0625, 0.8450),
        (0.125, 0.9174),
        (0.1875, 0.9682),
        (0.25, 0.9954),
        (0.3125, 0.9982),
        (0.375, 0.9766),
        (0.4375, 0.9317),
        (0.5, 0.8654),
        (0.5625, 0.7716),
        (0.625, 0.6721),
        (0.6875, 0.5748),
        (0.75, 0.4828),
        (0.8125, 0.3936),
        (0.875, 0.3050),
        (0.9375, 0.2156),
        (1.0, 0.1502),
    ],
};

const VIRIDIS: SegmentData = SegmentData {
    red: &[
        (0.0, 0.2670),
        (0.1, 0.2823),
        (0.2, 0.2539),
        (0.3, 0.2068),
        (0.4, 0.1636),
        (0.5, 0.1276),
        (0.6, 0.1347),
        (0.7, 0.2669),
        (0.8, 0.4775),
        (0.9, 0.7414),
        (1.0, 0.9932),
    ],
    green: &[
        (0.0, 0.0049),
        (0.1, 0.1409),
        (0.2, 0.2653),
        (0.3, 0.3718),
        (0.4, 0.4711),
        (0.5, 0.5669),
        (0.6, 0.6586),
        (0.7, 0.7488),
        (0.8, 0.8214),
        (0.9, 0.8734),
        (1.0, 0.9062),
    ],
    blue: &[
        (0.0, 0.3294),
        (0.1, 0.4575),
        (0.2, 0.5300),
        (0.3, 0.5531),
        (0.4, 0.5581),
        (0.5, 0.5506),
        (0.6, 0.5176),
        (0.7, 0.4406),
        (0.8, 0.3182),
        (0.9, 0.1496),
        (1.0, 0.1439),
    ],
};

const GRAY: SegmentData = SegmentData {
    red: &[(0.0, 0.0), (1.0, 1.0)],
    green: &[(0.0, 0.0), (1.0, 1.0)],
    blue: &[(0.0, 0.0), (1.0, 1.0)],
};

const HOT: SegmentData = SegmentData {
    red: &[(0.0, 0.0416), (0.365079, 1.0), (1.0, 1.0)],
    green: &[(0.0, 0.0), (0.365079, 0.0), (0.746032, 1.0), (1.0, 1.0)],
    blue: &[(0.0, 0.0), (0.746032, 0.0), (1.0, 1.0)],
};

fn interpolate(anchors: Anchors, x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    for pair in anchors.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            if x1 <= x0 {
                return y1;
            }
            return y0 + (y1 - y0) * (x - x0) / (x1 - x0);
        }
    }
    anchors.last().map(|a| a.1).unwrap_or(0.0)
}

fn channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Value-to-color mapping.
#[derive(Clone, Debug, PartialEq)]
pub enum Colormap {
    Copper,
    Cool,
    Jet,
    Coolwarm,
    Viridis,
    Gray,
    Hot,
    /// Discrete colors, indexed directly.
    Listed(Vec<Color32>),
}

impl Default for Colormap {
    fn default() -> Self {
        Colormap::Copper
    }
}

impl Colormap {
    /// All named continuous maps (useful for combo-box UIs).
    pub fn all_named() -> &'static [Colormap] {
        &[
            Colormap::Copper,
            Colormap::Cool,
            Colormap::Jet,
            Colormap::Coolwarm,
            Colormap::Viridis,
            Colormap::Gray,
            Colormap::Hot,
        ]
    }

    /// Listed map from color specifications such as `"r"`, `"green"` or `"#1f77b4"`.
    pub fn listed<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
        if colors.is_empty() {
            return Err(ColorLineError::EmptyColormap);
        }
        let colors = colors
            .iter()
            .map(|c| parse_color(c.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Colormap::Listed(colors))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Colormap::Copper => "copper",
            Colormap::Cool => "cool",
            Colormap::Jet => "jet",
            Colormap::Coolwarm => "coolwarm",
            Colormap::Viridis => "viridis",
            Colormap::Gray => "gray",
            Colormap::Hot => "hot",
            Colormap::Listed(_) => "listed",
        }
    }

    /// Number of distinct colors the map can produce.
    pub fn len(&self) -> usize {
        match self {
            Colormap::Listed(colors) => colors.len(),
            _ => LUT_SIZE,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn segment_data(&self) -> Option<&'static SegmentData> {
        match self {
            Colormap::Copper => Some(&COPPER),
            Colormap::Cool => Some(&COOL),
            Colormap::Jet => Some(&JET),
            Colormap::Coolwarm => Some(&COOLWARM),
            Colormap::Viridis => Some(&VIRIDIS),
            Colormap::Gray => Some(&GRAY),
            Colormap::Hot => Some(&HOT),
            Colormap::Listed(_) => None,
        }
    }

    /// Color of lookup entry `index`, clamped to the valid range.
    ///
    /// Under-range indices take the first color, over-range ones the last.
    pub fn entry(&self, index: i64) -> Color32 {
        let n = self.len();
        if n == 0 {
            return BAD_COLOR;
        }
        let idx = index.clamp(0, n as i64 - 1) as usize;
        match self {
            Colormap::Listed(colors) => colors[idx],
            _ => match self.segment_data() {
                Some(data) => {
                    let x = idx as f64 / (n - 1) as f64;
                    Color32::from_rgb(
                        channel(interpolate(data.red, x)),
                        channel(interpolate(data.green, x)),
                        channel(interpolate(data.blue, x)),
                    )
                }
                None => BAD_COLOR,
            },
        }
    }

    /// Color for a normalized value.
    pub fn color_at(&self, value: Normalized) -> Color32 {
        match value {
            Normalized::Fraction(f) if f.is_nan() => BAD_COLOR,
            Normalized::Fraction(f) => {
                let scaled = f * self.len() as f64;
                let index = if scaled < 0.0 {
                    -1
                } else if scaled >= i64::MAX as f64 {
                    i64::MAX
                } else {
                    scaled.floor() as i64
                };
                self.entry(index)
            }
            Normalized::Index(i) => self.entry(i),
        }
    }
}

impl FromStr for Colormap {
    type Err = ColorLineError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Colormap::all_named()
            .iter()
            .find(|c| c.name() == lower || (lower == "grey" && c.name() == "gray"))
            .cloned()
            .ok_or_else(|| ColorLineError::UnknownColormap(s.to_string()))
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a single-letter code (`b g r c m y k w`), a basic color name, or `#rrggbb[aa]`.
pub fn parse_color(spec: &str) -> Result<Color32> {
    let s = spec.trim();
    let color = match s {
        "b" | "blue" => Color32::from_rgb(0, 0, 255),
        "g" => Color32::from_rgb(0, 128, 0),
        "green" => Color32::from_rgb(0, 128, 0),
        "r" | "red" => Color32::from_rgb(255, 0, 0),
        "c" => Color32::from_rgb(0, 191, 191),
        "cyan" => Color32::from_rgb(0, 255, 255),
        "m" => Color32::from_rgb(191, 0, 191),
        "magenta" => Color32::from_rgb(255, 0, 255),
        "y" => Color32::from_rgb(191, 191, 0),
        "yellow" => Color32::from_rgb(255, 255, 0),
        "k" | "black" => Color32::BLACK,
        "w" | "white" => Color32::WHITE,
        "gray" | "grey" => Color32::from_rgb(128, 128, 128),
        "orange" => Color32::from_rgb(255, 165, 0),
        hex if hex.starts_with('#') => return parse_hex(hex),
        _ => return Err(ColorLineError::InvalidColor(spec.to_string())),
    };
    Ok(color)
}

fn parse_hex(hex: &str) -> Result<Color32> {
    let digits = &hex[1..];
    let invalid = || ColorLineError::InvalidColor(hex.to_string());
    if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
        return Err(invalid());
    }
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    let (r, g, b) = (byte(0)?, byte(2)?, byte(4)?);
    let a = if digits.len() == 8 { byte(6)? } else { 255 };
    Ok(Color32::from_rgba_unmultiplied(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copper_endpoints() {
        let cmap = Colormap::Copper;
        assert_eq!(cmap.color_at(Normalized::Fraction(0.0)), Color32::from_rgb(0, 0, 0));
        assert_eq!(
            cmap.color_at(Normalized::Fraction(1.0)),
            Color32::from_rgb(255, 199, 127)
        );
    }

    #[test]
    fn out_of_range_clamps_to_ends() {
        let cmap = Colormap::Cool;
        let first = cmap.entry(0);
        let last = cmap.entry(LUT_SIZE as i64 - 1);
        assert_eq!(first, Color32::from_rgb(0, 255, 255));
        assert_eq!(last, Color32::from_rgb(255, 0, 255));
        assert_eq!(cmap.color_at(Normalized::Fraction(-3.0)), first);
        assert_eq!(cmap.color_at(Normalized::Fraction(7.5)), last);
    }

    #[test]
    fn nan_is_transparent() {
        assert_eq!(Colormap::Jet.color_at(Normalized::Fraction(f64::NAN)), BAD_COLOR);
    }

    fn close(a: Color32, b: Color32) -> bool {
        let d = |x: u8, y: u8| (x as i16 - y as i16).abs() <= 3;
        d(a.r(), b.r()) && d(a.g(), b.g()) && d(a.b(), b.b())
    }

    #[test]
    fn sampled_maps_track_reference_midtones() {
        assert!(close(Colormap::Coolwarm.entry(0), Color32::from_rgb(59, 76, 192)));
        assert!(close(Colormap::Coolwarm.entry(128), Color32::from_rgb(221, 220, 220)));
        assert!(close(Colormap::Coolwarm.entry(255), Color32::from_rgb(180, 4, 38)));
        assert!(close(Colormap::Viridis.entry(64), Color32::from_rgb(59, 82, 139)));
        assert!(close(Colormap::Viridis.entry(128), Color32::from_rgb(33, 145, 140)));
        assert!(close(Colormap::Viridis.entry(192), Color32::from_rgb(94, 201, 98)));
    }

    #[test]
    fn same_bucket_same_color() {
        let cmap = Colormap::Viridis;
        let a = cmap.color_at(Normalized::Fraction(0.5));
        let b = cmap.color_at(Normalized::Fraction(0.5 + 0.5 / LUT_SIZE as f64 * 0.5));
        assert_eq!(a, b);
    }

    #[test]
    fn listed_indexes_directly() {
        let cmap = Colormap::listed(&["r", "g", "b"]).unwrap();
        assert_eq!(cmap.len(), 3);
        assert_eq!(cmap.color_at(Normalized::Index(0)), Color32::from_rgb(255, 0, 0));
        assert_eq!(cmap.color_at(Normalized::Index(1)), Color32::from_rgb(0, 128, 0));
        assert_eq!(cmap.color_at(Normalized::Index(-1)), Color32::from_rgb(255, 0, 0));
        assert_eq!(cmap.color_at(Normalized::Index(3)), Color32::from_rgb(0, 0, 255));
        assert_eq!(cmap.color_at(Normalized::Fraction(0.5)), Color32::from_rgb(0, 128, 0));
    }

    #[test]
    fn names_parse() {
        assert_eq!("cool".parse::<Colormap>().unwrap(), Colormap::Cool);
        assert_eq!("CoolWarm".parse::<Colormap>().unwrap(), Colormap::Coolwarm);
        assert_eq!("grey".parse::<Colormap>().unwrap(), Colormap::Gray);
        let err = "rainbowish".parse::<Colormap>().unwrap_err();
        assert!(matches!(err, ColorLineError::UnknownColormap(name) if name == "rainbowish"));
        for cmap in Colormap::all_named() {
            assert_eq!(&cmap.name().parse::<Colormap>().unwrap(), cmap);
        }
    }

    #[test]
    fn color_specs() {
        assert_eq!(parse_color("#1f77b4").unwrap(), Color32::from_rgb(31, 119, 180));
        assert_eq!(
            parse_color("#ff000080").unwrap(),
            Color32::from_rgba_unmultiplied(255, 0, 0, 128)
        );
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("chartreuse-ish").is_err());
        assert!(matches!(
            Colormap::listed::<&str>(&[]),
            Err(ColorLineError::EmptyColormap)
        ));
    }
}
