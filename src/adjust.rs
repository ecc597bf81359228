//! Per-voxel color transforms. Every function here keeps alpha untouched.

use crate::{Error, Hsl, Hsv, Result, Rgba};

use serde::{Deserialize, Serialize};

/// Adds `diff` to each color channel, saturating at 0 and 255.
pub fn lighten(color: Rgba, diff: i32) -> Rgba {
    let shift = |c: u8| (c as i32).saturating_add(diff).max(0).min(255) as u8;

    color.with_rgb([shift(color.r), shift(color.g), shift(color.b)])
}

/// Scales each channel's distance from the midpoint 128 by `factor`.
pub fn adjust_contrast(color: Rgba, factor: f32) -> Rgba {
    let scale = |c: u8| (c as f32 - 128.0) * factor + 128.0;

    color.with_rgb_f32([scale(color.r), scale(color.g), scale(color.b)])
}

/// Shifts HSV saturation by `diff / 255`. Hue and value are kept.
pub fn saturate(color: Rgba, diff: i32) -> Rgba {
    let mut hsv = Hsv::from_rgb(color.rgb());
    hsv.s = (hsv.s + diff as f32 / 255.0).max(0.0).min(1.0);

    color.with_rgb_f32(hsv.to_rgb())
}

pub fn check_contrast_factor(factor: f32) -> Result<()> {
    if !factor.is_finite() || factor < 0.0 {
        return Err(Error::InvalidParameter {
            name: "factor",
            reason: format!("contrast factor must be finite and non-negative, got {}", factor),
        });
    }

    Ok(())
}

/// The four sliders of an interactive color adjustment. Zero everywhere is the identity.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ColorAdjustment {
    /// Hue rotation in degrees, `[-180, 180]`.
    pub hue: f32,
    /// Percent, `[-100, 100]`.
    pub lightness: f32,
    /// Percent, `[-100, 100]`.
    pub saturation: f32,
    /// Percent, `[-100, 100]`. -100 flattens everything to mid grey.
    pub contrast: f32,
}

impl ColorAdjustment {
    pub fn validate(&self) -> Result<()> {
        check_range("hue", self.hue, 180.0)?;
        check_range("lightness", self.lightness, 100.0)?;
        check_range("saturation", self.saturation, 100.0)?;
        check_range("contrast", self.contrast, 100.0)
    }

    pub fn is_identity(&self) -> bool {
        *self == ColorAdjustment::default()
    }
}

fn check_range(name: &'static str, value: f32, limit: f32) -> Result<()> {
    if !(value.is_finite() && value.abs() <= limit) {
        return Err(Error::InvalidParameter {
            name,
            reason: format!("{} is outside [-{}, {}]", value, limit, limit),
        });
    }

    Ok(())
}

/// Moves `x` toward 1 (or toward 0 for negative `amount`) by `|amount|` of the way.
fn move_toward_bound(x: f32, amount: f32) -> f32 {
    let target = if amount >= 0.0 { 1.0 } else { 0.0 };
    let t = amount.abs();

    x * (1.0 - t) + target * t
}

/// Applies hue, saturation and lightness in HSL space, then contrast around the midpoint.
pub fn adjust_colors(color: Rgba, adjustment: &ColorAdjustment) -> Rgba {
    let mut hsl = Hsl::from_rgb(color.rgb());
    hsl.h = (hsl.h + adjustment.hue).rem_euclid(360.0);
    hsl.s = move_toward_bound(hsl.s, adjustment.saturation / 100.0);
    hsl.l = move_toward_bound(hsl.l, adjustment.lightness / 100.0);
    let shifted = color.with_rgb_f32(hsl.to_rgb());

    let factor = adjustment.contrast / 100.0 + 1.0;
    let contrast = |c: u8| {
        let normalized = (c as f32 / 255.0 - 0.5) * factor + 0.5;

        normalized.max(0.0).min(1.0) * 255.0
    };

    shifted.with_rgb_f32([contrast(shifted.r), contrast(shifted.g), contrast(shifted.b)])
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_color_near;

    const BROWN: Rgba = Rgba::opaque(103, 64, 40);

    #[test]
    fn test_lighten_clamps_both_ends() {
        assert_eq!(lighten(Rgba::new(10, 10, 10, 200), -20), Rgba::new(0, 0, 0, 200));
        assert_eq!(lighten(Rgba::opaque(250, 100, 0), 10), Rgba::opaque(255, 110, 10));
        assert_eq!(lighten(BROWN, 0), BROWN);
    }

    #[test]
    fn test_lighten_by_extreme_amounts_saturates() {
        let c = Rgba::new(200, 10, 10, 255);

        assert_eq!(lighten(c, i32::MAX), Rgba::opaque(255, 255, 255));
        assert_eq!(lighten(c, i32::MIN), Rgba::opaque(0, 0, 0));
        assert_eq!(lighten(Rgba::opaque(255, 255, 255), i32::MAX - 100), Rgba::opaque(255, 255, 255));
    }

    #[test]
    fn test_contrast_keeps_midpoint() {
        let grey = Rgba::new(128, 128, 128, 77);

        for factor in &[0.5, 0.8, 1.2, 1.5] {
            assert_eq!(adjust_contrast(grey, *factor), grey);
        }
    }

    #[test]
    fn test_contrast_scales_and_clamps() {
        assert_eq!(
            adjust_contrast(Rgba::opaque(200, 50, 0), 1.5),
            Rgba::opaque(236, 11, 0)
        );
        assert_eq!(
            adjust_contrast(Rgba::opaque(200, 50, 0), 0.5),
            Rgba::opaque(164, 89, 64)
        );
        assert_eq!(adjust_contrast(Rgba::opaque(255, 0, 255), 1.2), Rgba::opaque(255, 0, 255));
    }

    #[test]
    fn test_contrast_factor_validation() {
        assert!(check_contrast_factor(0.0).is_ok());
        assert!(check_contrast_factor(1.2).is_ok());
        assert!(check_contrast_factor(-0.1).is_err());
        assert!(check_contrast_factor(f32::NAN).is_err());
        assert!(check_contrast_factor(f32::INFINITY).is_err());
    }

    #[test]
    fn test_saturate_then_desaturate_is_approximately_identity() {
        for color in &[BROWN, Rgba::opaque(200, 100, 100), Rgba::opaque(30, 160, 220)] {
            for diff in &[5, 10, 20] {
                let back = saturate(saturate(*color, *diff), -*diff);
                assert_color_near(back, *color, 2);
            }
        }
    }

    #[test]
    fn test_saturate_chromatic_known_values() {
        // Dead brown is h = 0.0635, s = 0.6117, v = 103 / 255 in HSV.
        assert_eq!(saturate(BROWN, 20), Rgba::opaque(103, 59, 32));
        assert_eq!(saturate(BROWN, -20), Rgba::opaque(103, 69, 48));
        assert_eq!(saturate(Rgba::new(103, 64, 40, 90), 20).a, 90);
    }

    #[test]
    fn test_saturate_keeps_alpha_and_clamps() {
        let red = Rgba::new(255, 0, 0, 9);

        assert_eq!(saturate(red, 20), red);
        assert_eq!(saturate(red, -255), Rgba::new(255, 255, 255, 9));
    }

    #[test]
    fn test_desaturating_grey_is_identity() {
        let grey = Rgba::opaque(128, 128, 128);

        assert_eq!(saturate(grey, -20), grey);
    }

    #[test]
    fn test_saturating_grey_tints_toward_hue_zero() {
        let tinted = saturate(Rgba::opaque(128, 128, 128), 20);

        assert_eq!(tinted.r, 128);
        assert!(tinted.g < 128);
        assert_eq!(tinted.g, tinted.b);
    }

    #[test]
    fn test_identity_adjustment_preserves_colors() {
        let identity = ColorAdjustment::default();

        assert!(identity.is_identity());
        for color in &[BROWN, Rgba::opaque(12, 200, 99), Rgba::new(255, 255, 255, 3)] {
            assert_eq!(adjust_colors(*color, &identity), *color);
        }
    }

    #[test]
    fn test_adjust_hue_rotates_red_to_green() {
        let adjustment = ColorAdjustment {
            hue: 120.0,
            ..Default::default()
        };

        assert_eq!(adjust_colors(Rgba::opaque(255, 0, 0), &adjustment), Rgba::opaque(0, 255, 0));
    }

    #[test]
    fn test_adjust_extremes() {
        let red = Rgba::opaque(255, 0, 0);
        let full = |f: fn(&mut ColorAdjustment)| {
            let mut a = ColorAdjustment::default();
            f(&mut a);
            adjust_colors(red, &a)
        };

        assert_eq!(full(|a| a.saturation = -100.0), Rgba::opaque(128, 128, 128));
        assert_eq!(full(|a| a.lightness = 100.0), Rgba::opaque(255, 255, 255));
        assert_eq!(full(|a| a.lightness = -100.0), Rgba::opaque(0, 0, 0));
        assert_eq!(full(|a| a.contrast = -100.0), Rgba::opaque(128, 128, 128));
    }

    #[test]
    fn test_adjustment_validation() {
        let ok = ColorAdjustment {
            hue: -180.0,
            lightness: 100.0,
            saturation: -100.0,
            contrast: 0.0,
        };
        assert!(ok.validate().is_ok());

        let bad_hue = ColorAdjustment {
            hue: 181.0,
            ..Default::default()
        };
        assert!(bad_hue.validate().is_err());

        let bad_contrast = ColorAdjustment {
            contrast: f32::NAN,
            ..Default::default()
        };
        assert!(bad_contrast.validate().is_err());
    }
}
