// src/services/harmony.rs
use super::color_space::{adjust_brightness, from_hsl, invert, to_hsl};
use crate::models::{Color, ColorVariations, Mood};

pub const ANALOGOUS_OFFSETS: [f64; 2] = [30.0, -30.0];
pub const TRIADIC_OFFSETS: [f64; 2] = [120.0, 240.0];

/// Channel spread below which a color reads as neutral.
const NEUTRAL_SPREAD: u8 = 30;

pub fn complementary(color: Color) -> Color {
    invert(color)
}

pub fn rotate_hue(color: Color, degrees: f64) -> Color {
    let mut hsl = to_hsl(color);
    hsl.h = (hsl.h + degrees).rem_euclid(360.0);
    from_hsl(hsl)
}

pub fn analogous(color: Color, degrees: f64) -> Color {
    rotate_hue(color, degrees)
}

pub fn triadic(color: Color, degrees: f64) -> Color {
    rotate_hue(color, degrees)
}

pub fn variant_set(color: Color) -> ColorVariations {
    ColorVariations {
        primary: color,
        secondary: adjust_brightness(color, 0.2),
        accent: adjust_brightness(color, -0.3),
        light: adjust_brightness(color, 0.4),
        dark: adjust_brightness(color, -0.4),
    }
}

pub fn mood(color: Color) -> Mood {
    let Color { r, g, b } = color;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max - min < NEUTRAL_SPREAD {
        Mood::Neutral
    } else if r > g && r > b {
        Mood::Warm
    } else if b > r && b > g {
        Mood::Cool
    } else if g > r && g > b {
        Mood::Fresh
    } else {
        Mood::Balanced
    }
}
