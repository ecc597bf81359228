//! Cylindrical color models for 8-bit RGB.
//!
//! Channels coming back out of these models are `f32` in `[0, 255]`; quantizing them is left to
//! the caller (see `Rgba::with_rgb_f32`).

/// Hue, saturation and value, each in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        let [r, g, b] = rgb;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        let v = max as f32 / 255.0;
        if max == 0 {
            return Hsv { h: 0.0, s: 0.0, v };
        }

        let d = (max - min) as f32 / 255.0;
        let s = d / v;

        // Achromatic.
        if max == min {
            return Hsv { h: 0.0, s, v };
        }

        let (r, g, b) = (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
        let sector = if max == rgb[0] {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == rgb[1] {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsv {
            h: sector / 6.0,
            s,
            v,
        }
    }

    pub fn to_rgb(&self) -> [f32; 3] {
        let Hsv { h, s, v } = *self;

        let i = (h * 6.0).floor();
        let f = h * 6.0 - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match (i as i32).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        [r * 255.0, g * 255.0, b * 255.0]
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        let [r, g, b] = rgb;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        let (v, m) = (max as f32 / 255.0, min as f32 / 255.0);
        let l = (v + m) / 2.0;
        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let c = v - m;
        let (r, g, b) = (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
        let sector = if max == rgb[0] {
            (g - b) / c + if g < b { 6.0 } else { 0.0 }
        } else if max == rgb[1] {
            (b - r) / c + 2.0
        } else {
            (r - g) / c + 4.0
        };
        let s = if l > 0.5 {
            c / (2.0 - v - m)
        } else {
            c / (v + m)
        };

        Hsl {
            h: sector * 60.0,
            s,
            l,
        }
    }

    pub fn to_rgb(&self) -> [f32; 3] {
        let h = self.h.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());

        let (r, g, b) = if h < 1.0 {
            (c, x, 0.0)
        } else if h < 2.0 {
            (x, c, 0.0)
        } else if h < 3.0 {
            (0.0, c, x)
        } else if h < 4.0 {
            (0.0, x, c)
        } else if h < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };
        let m = self.l - 0.5 * c;

        [(r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0]
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
