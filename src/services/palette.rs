// src/services/palette.rs
use super::accessibility::{classify, contrast_ratio};
use super::color_space::{adjust_brightness, contrast_color};
use super::harmony::{self, ANALOGOUS_OFFSETS, TRIADIC_OFFSETS};
use crate::models::{AccessibilityRating, Color, ColorScheme, ExistingColors, Mood, ProjectType};
use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasePalette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
}

const fn base(primary: u32, secondary: u32, accent: u32) -> BasePalette {
    BasePalette {
        primary: hex(primary),
        secondary: hex(secondary),
        accent: hex(accent),
    }
}

const fn hex(value: u32) -> Color {
    Color::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

const GENERAL_PALETTE: BasePalette = base(0x2196F3, 0x03A9F4, 0xFF9800);

static BASE_PALETTES: Lazy<HashMap<ProjectType, BasePalette>> = Lazy::new(|| {
    HashMap::from([
        (ProjectType::Dashboard, base(0x1976D2, 0x2196F3, 0xFFC107)),
        (ProjectType::Ecommerce, base(0x7B1FA2, 0x9C27B0, 0xFF5722)),
        (ProjectType::Blog, base(0x388E3C, 0x4CAF50, 0xFF9800)),
        (ProjectType::Survey, base(0xD32F2F, 0xF44336, 0x4CAF50)),
        (ProjectType::General, GENERAL_PALETTE),
    ])
});

/// Hand-tuned schemes appended for the project types that have one.
static CURATED_SCHEMES: Lazy<HashMap<ProjectType, ColorScheme>> = Lazy::new(|| {
    HashMap::from([
        (
            ProjectType::Dashboard,
            ColorScheme {
                name: "Professional Dashboard".to_string(),
                primary: hex(0x1976D2),
                secondary: hex(0x2196F3),
                accent: hex(0xFFC107),
                background: hex(0xFAFAFA),
                text: Color::INK,
                description: "Professional blue scheme perfect for business dashboards"
                    .to_string(),
                accessibility_rating: AccessibilityRating::Aa,
                mood: Mood::Professional,
                is_dynamic: true,
                variations: None,
            },
        ),
        (
            ProjectType::Ecommerce,
            ColorScheme {
                name: "Modern E-commerce".to_string(),
                primary: hex(0x7B1FA2),
                secondary: hex(0x9C27B0),
                accent: hex(0xFF5722),
                background: Color::WHITE,
                text: Color::INK,
                description: "Modern purple scheme for e-commerce platforms".to_string(),
                accessibility_rating: AccessibilityRating::Aa,
                mood: Mood::Modern,
                is_dynamic: true,
                variations: None,
            },
        ),
    ])
});

const MINIMALIST_GRAYS: BasePalette = base(0x424242, 0x757575, 0x2196F3);

pub fn base_palette(project_type: ProjectType) -> BasePalette {
    BASE_PALETTES
        .get(&project_type.table_key())
        .copied()
        .unwrap_or(GENERAL_PALETTE)
}

/// Full ordered palette for a project type.
///
/// Order: three dynamic schemes (primary, secondary, accent), the
/// complementary, analogous and triadic harmonies, the curated scheme for
/// the project type if one exists, and finally the minimalist scheme.
pub fn generate_palette(project_type: ProjectType, existing: &ExistingColors) -> Vec<ColorScheme> {
    let palette = base_palette(project_type);
    let bias = existing.brightness_bias();

    let mut schemes = vec![
        dynamic_scheme("Primary", palette.primary, bias),
        dynamic_scheme("Secondary", palette.secondary, bias),
        dynamic_scheme("Accent", palette.accent, bias),
        complementary_scheme(palette.primary),
        analogous_scheme(palette.primary),
        triadic_scheme(palette.primary),
    ];

    if let Some(curated) = CURATED_SCHEMES.get(&project_type.table_key()) {
        schemes.push(curated.clone());
    }

    schemes.push(minimalist_scheme(existing, bias));

    debug!(
        "Generated {} color schemes for {:?} (brightness bias {})",
        schemes.len(),
        project_type,
        bias
    );

    schemes
}

fn dynamic_scheme(name: &str, base_color: Color, bias: f64) -> ColorScheme {
    let variations = harmony::variant_set(base_color);

    ColorScheme {
        name: format!("Dynamic {}", name),
        primary: variations.primary,
        secondary: variations.secondary,
        accent: variations.accent,
        background: adjust_brightness(Color::WHITE, bias),
        text: contrast_color(variations.primary),
        description: format!(
            "Dynamic {} scheme with automatic variations",
            name.to_lowercase()
        ),
        accessibility_rating: classify(contrast_ratio(variations.primary, Color::WHITE)),
        mood: harmony::mood(variations.primary),
        is_dynamic: true,
        variations: Some(variations),
    }
}

// Harmony schemes carry a fixed AA label; it is not recomputed from contrast.
fn harmony_scheme(
    name: &str,
    primary: Color,
    secondary: Color,
    accent: Color,
    description: &str,
    mood: Mood,
) -> ColorScheme {
    ColorScheme {
        name: name.to_string(),
        primary,
        secondary,
        accent,
        background: Color::WHITE,
        text: Color::INK,
        description: description.to_string(),
        accessibility_rating: AccessibilityRating::Aa,
        mood,
        is_dynamic: true,
        variations: None,
    }
}

fn complementary_scheme(base_color: Color) -> ColorScheme {
    harmony_scheme(
        "Complementary Harmony",
        base_color,
        harmony::complementary(base_color),
        adjust_brightness(base_color, 0.3),
        "Complementary color scheme for high contrast",
        Mood::Vibrant,
    )
}

fn analogous_scheme(base_color: Color) -> ColorScheme {
    let [up, down] = ANALOGOUS_OFFSETS;
    harmony_scheme(
        "Analogous Harmony",
        base_color,
        harmony::analogous(base_color, up),
        harmony::analogous(base_color, down),
        "Analogous color scheme for subtle harmony",
        Mood::Harmonious,
    )
}

fn triadic_scheme(base_color: Color) -> ColorScheme {
    let [first, second] = TRIADIC_OFFSETS;
    harmony_scheme(
        "Triadic Harmony",
        base_color,
        harmony::triadic(base_color, first),
        harmony::triadic(base_color, second),
        "Triadic color scheme for balanced design",
        Mood::Balanced,
    )
}

fn minimalist_scheme(existing: &ExistingColors, bias: f64) -> ColorScheme {
    ColorScheme {
        name: "Dynamic Minimalist".to_string(),
        primary: adjust_brightness(MINIMALIST_GRAYS.primary, bias),
        secondary: adjust_brightness(MINIMALIST_GRAYS.secondary, bias),
        accent: adjust_brightness(MINIMALIST_GRAYS.accent, bias),
        background: existing.background.unwrap_or(Color::WHITE),
        text: existing.text.unwrap_or(Color::INK),
        description: "Dynamic minimalist scheme based on your preferences".to_string(),
        accessibility_rating: AccessibilityRating::Aaa,
        mood: Mood::Minimalist,
        is_dynamic: true,
        variations: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(schemes: &[ColorScheme]) -> Vec<&str> {
        schemes.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn dashboard_palette_order() {
        let schemes = generate_palette(ProjectType::Dashboard, &ExistingColors::default());
        assert_eq!(
            names(&schemes),
            vec![
                "Dynamic Primary",
                "Dynamic Secondary",
                "Dynamic Accent",
                "Complementary Harmony",
                "Analogous Harmony",
                "Triadic Harmony",
                "Professional Dashboard",
                "Dynamic Minimalist",
            ]
        );
    }

    #[test]
    fn blog_and_survey_have_no_curated_scheme() {
        for project_type in [ProjectType::Blog, ProjectType::Survey, ProjectType::General] {
            let schemes = generate_palette(project_type, &ExistingColors::default());
            assert_eq!(schemes.len(), 7);
            assert_eq!(schemes[6].name, "Dynamic Minimalist");
        }
    }

    #[test]
    fn ecommerce_appends_modern_scheme() {
        let schemes = generate_palette(ProjectType::Ecommerce, &ExistingColors::default());
        assert_eq!(schemes.len(), 8);
        assert_eq!(schemes[6].name, "Modern E-commerce");
        assert_eq!(schemes[6].mood, Mood::Modern);
        assert_eq!(schemes[0].primary, hex(0x7B1FA2));
    }

    #[test]
    fn unknown_project_type_uses_general_palette() {
        assert_eq!(
            base_palette(ProjectType::Other),
            base_palette(ProjectType::General)
        );
        let schemes = generate_palette(ProjectType::Other, &ExistingColors::default());
        assert_eq!(schemes[0].primary, hex(0x2196F3));
        assert_eq!(schemes.len(), 7);
    }

    #[test]
    fn dynamic_scheme_is_annotated_from_its_primary() {
        let schemes = generate_palette(ProjectType::General, &ExistingColors::default());
        let primary = &schemes[0];
        assert_eq!(primary.text, Color::WHITE);
        assert_eq!(primary.background, Color::WHITE);
        assert_eq!(primary.accessibility_rating, AccessibilityRating::NeedsImprovement);
        assert_eq!(primary.mood, Mood::Cool);
        assert!(primary.variations.is_some());
    }

    #[test]
    fn harmony_schemes_keep_fixed_labels() {
        let schemes = generate_palette(ProjectType::General, &ExistingColors::default());
        for scheme in &schemes[3..6] {
            assert_eq!(scheme.accessibility_rating, AccessibilityRating::Aa);
            assert_eq!(scheme.background, Color::WHITE);
            assert_eq!(scheme.text, Color::INK);
            assert_eq!(scheme.primary, hex(0x2196F3));
        }
        assert_eq!(schemes[3].secondary, hex(0xDE690C));
    }

    #[test]
    fn brightness_bias_darkens_backgrounds_and_grays() {
        let existing = ExistingColors {
            brightness: Some(-0.1),
            text: Some(hex(0x000000)),
            ..ExistingColors::default()
        };
        let schemes = generate_palette(ProjectType::General, &existing);

        // 255 * -0.1 = -25.5 shifts by -25
        assert_eq!(schemes[0].background, Color::rgb(230, 230, 230));
        let minimalist = schemes.last().unwrap();
        assert_eq!(minimalist.primary, Color::rgb(0x29, 0x29, 0x29));
        assert_eq!(minimalist.background, Color::WHITE);
        assert_eq!(minimalist.text, Color::BLACK);
        assert_eq!(minimalist.accessibility_rating, AccessibilityRating::Aaa);
    }
}
