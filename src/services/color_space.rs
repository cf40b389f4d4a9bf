// src/services/color_space.rs
use crate::models::{Color, Hsl};

/// Perceptual brightness above which dark text reads better.
const CONTRAST_BRIGHTNESS_CUTOFF: f64 = 128.0;

pub fn to_hsl(color: Color) -> Hsl {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl {
        h: (h * 60.0).rem_euclid(360.0),
        s,
        l,
    }
}

pub fn from_hsl(hsl: Hsl) -> Color {
    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    let channel = |x: f64| (x * 255.0 + 0.5).floor() as i32;
    Color::from_channels(channel(r), channel(g), channel(b))
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Shift every channel by `255 * amount`, clamped to `[0, 255]`.
///
/// Halves round toward positive infinity, so `-0.3` shifts by `-76`.
pub fn adjust_brightness(color: Color, amount: f64) -> Color {
    let amount = if amount.is_finite() { amount.clamp(-1.0, 1.0) } else { 0.0 };
    let shift = (255.0 * amount + 0.5).floor() as i32;
    Color::from_channels(
        i32::from(color.r) + shift,
        i32::from(color.g) + shift,
        i32::from(color.b) + shift,
    )
}

pub fn invert(color: Color) -> Color {
    Color::rgb(255 - color.r, 255 - color.g, 255 - color.b)
}

/// Black or white, whichever reads better on `background`.
pub fn contrast_color(background: Color) -> Color {
    let brightness = (f64::from(background.r) * 299.0
        + f64::from(background.g) * 587.0
        + f64::from(background.b) * 114.0)
        / 1000.0;

    if brightness > CONTRAST_BRIGHTNESS_CUTOFF {
        Color::BLACK
    } else {
        Color::WHITE
    }
}
