use crate::{Error, IsEmpty};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An 8-bit-per-channel voxel color. A voxel with zero alpha does not exist.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const EMPTY: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba::new(r, g, b, 255)
    }

    pub fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Replaces the color channels, keeping alpha.
    pub fn with_rgb(&self, rgb: [u8; 3]) -> Self {
        Rgba::new(rgb[0], rgb[1], rgb[2], self.a)
    }

    /// Replaces the color channels with float values in `[0, 255]`, rounded to nearest and
    /// clamped. Keeps alpha.
    pub fn with_rgb_f32(&self, rgb: [f32; 3]) -> Self {
        self.with_rgb([
            channel_from_f32(rgb[0]),
            channel_from_f32(rgb[1]),
            channel_from_f32(rgb[2]),
        ])
    }

    pub fn rgb_eq(&self, other: &Self) -> bool {
        self.rgb() == other.rgb()
    }
}

pub(crate) fn channel_from_f32(c: f32) -> u8 {
    if c.is_nan() {
        return 0;
    }

    c.round().max(0.0).min(255.0) as u8
}

impl IsEmpty for Rgba {
    fn is_empty(&self) -> bool {
        self.a == 0
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(c: [u8; 4]) -> Self {
        Rgba::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Accepts `#rrggbb`, `#rrggbbaa` and `r,g,b[,a]`. Alpha defaults to opaque.
impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        let invalid = || Error::InvalidColor(s.to_string());

        let channels: Vec<u8> = if let Some(hex) = s.strip_prefix('#') {
            let is_hex = hex.bytes().all(|b| b.is_ascii_hexdigit());
            if !(hex.len() == 6 || hex.len() == 8) || !is_hex {
                return Err(invalid());
            }
            (0..hex.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
                .collect::<Result<_, _>>()
                .map_err(|_| invalid())?
        } else {
            s.split(',')
                .map(|c| {
                    let c = c.trim();
                    if c.is_empty() || !c.bytes().all(|b| b.is_ascii_digit()) {
                        return Err(invalid());
                    }
                    c.parse::<u8>().map_err(|_| invalid())
                })
                .collect::<Result<_, _>>()?
        };

        match channels.as_slice() {
            [r, g, b] => Ok(Rgba::opaque(*r, *g, *b)),
            [r, g, b, a] => Ok(Rgba::new(*r, *g, *b, *a)),
            _ => Err(invalid()),
        }
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
