// src/services/accessibility.rs
use crate::models::{AccessibilityRating, Color, ContrastReport};

pub const AAA_MIN_RATIO: f64 = 7.0;
pub const AA_MIN_RATIO: f64 = 4.5;

/// WCAG 2.x relative luminance.
pub fn relative_luminance(color: Color) -> f64 {
    let [r, g, b] = color.channels().map(linearize);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Contrast ratio in `[1, 21]`, symmetric in its arguments.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

pub fn classify(ratio: f64) -> AccessibilityRating {
    if ratio >= AAA_MIN_RATIO {
        AccessibilityRating::Aaa
    } else if ratio >= AA_MIN_RATIO {
        AccessibilityRating::Aa
    } else {
        AccessibilityRating::NeedsImprovement
    }
}

pub fn contrast_report(foreground: Color, background: Color) -> ContrastReport {
    let ratio = contrast_ratio(foreground, background);
    ContrastReport {
        ratio,
        rating: classify(ratio),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn white_on_black_is_maximal() {
        assert!((contrast_ratio(Color::WHITE, Color::BLACK) - 21.0).abs() < 1e-6);
        assert!((relative_luminance(Color::WHITE) - 1.0).abs() < 1e-12);
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
    }

    #[test]
    fn material_blue_on_white_needs_improvement() {
        let report = contrast_report(Color::rgb(0x21, 0x96, 0xF3), Color::WHITE);
        assert!((report.ratio - 3.12).abs() < 0.01, "ratio was {}", report.ratio);
        assert_eq!(report.rating, AccessibilityRating::NeedsImprovement);
    }

    #[test]
    fn classification_thresholds_are_inclusive() {
        assert_eq!(classify(7.0), AccessibilityRating::Aaa);
        assert_eq!(classify(6.99), AccessibilityRating::Aa);
        assert_eq!(classify(4.5), AccessibilityRating::Aa);
        assert_eq!(classify(4.49), AccessibilityRating::NeedsImprovement);
        assert_eq!(classify(1.0), AccessibilityRating::NeedsImprovement);
    }

    #[test]
    fn ink_on_white_is_aaa() {
        assert_eq!(
            contrast_report(Color::INK, Color::WHITE).rating,
            AccessibilityRating::Aaa
        );
    }

    fn any_color() -> impl Strategy<Value = Color> {
        (0u8..=255, 0u8..=255, 0u8..=255).prop_map(|(r, g, b)| Color::rgb(r, g, b))
    }

    proptest! {
        #[test]
        fn contrast_is_symmetric(a in any_color(), b in any_color()) {
            prop_assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        }

        #[test]
        fn contrast_stays_in_bounds(a in any_color(), b in any_color()) {
            let ratio = contrast_ratio(a, b);
            prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio));
        }

        #[test]
        fn self_contrast_is_one(c in any_color()) {
            prop_assert!((contrast_ratio(c, c) - 1.0).abs() < 1e-12);
        }
    }
}
