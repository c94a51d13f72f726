//! Colour values and their CSS string forms.

use std::fmt;

/// 8-bit RGB triple. Alpha is supplied at draw time from entity opacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgba()` string. `alpha` is clamped to `[0, 1]`, so a fading
    /// entity that undershoots zero still yields a valid colour.
    pub fn css_with_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, clamp_alpha(alpha))
    }
}

/// HSL colour with hue in degrees and saturation/lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub const fn new(hue: f64, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

pub fn clamp_alpha(alpha: f64) -> f64 {
    if alpha.is_nan() {
        0.0
    } else {
        alpha.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_clamps_alpha() {
        let c = Rgb::new(200, 150, 255);
        assert_eq!(c.css_with_alpha(0.5), "rgba(200, 150, 255, 0.5)");
        assert_eq!(c.css_with_alpha(-0.004), "rgba(200, 150, 255, 0)");
        assert_eq!(c.css_with_alpha(1.7), "rgba(200, 150, 255, 1)");
        assert_eq!(c.css_with_alpha(f64::NAN), "rgba(200, 150, 255, 0)");
    }

    #[test]
    fn test_hsl_display() {
        assert_eq!(Hsl::new(320.0, 70, 70).to_string(), "hsl(320, 70%, 70%)");
        assert_eq!(Hsl::new(95.5, 60, 40).to_string(), "hsl(95.5, 60%, 40%)");
    }
}
