// src/services/typography.rs
use crate::models::{FontPairing, ProjectType, SizeRange, SizingRecommendations};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const READABILITY_SCORE: f64 = 0.8;

pub const SIZING: SizingRecommendations = SizingRecommendations {
    heading: SizeRange {
        min: 24,
        max: 48,
        recommended: 32,
    },
    subheading: SizeRange {
        min: 18,
        max: 24,
        recommended: 20,
    },
    body: SizeRange {
        min: 14,
        max: 18,
        recommended: 16,
    },
    caption: SizeRange {
        min: 12,
        max: 14,
        recommended: 12,
    },
};

fn pairing(
    name: &str,
    heading: &str,
    body: &str,
    description: &str,
    traits: &[&str],
) -> FontPairing {
    FontPairing {
        name: name.to_string(),
        heading: heading.to_string(),
        body: body.to_string(),
        description: description.to_string(),
        characteristics: traits.iter().map(|t| t.to_string()).collect(),
    }
}

static PROJECT_PAIRINGS: Lazy<HashMap<ProjectType, FontPairing>> = Lazy::new(|| {
    HashMap::from([
        (
            ProjectType::Dashboard,
            pairing(
                "Data-Driven",
                "Roboto",
                "Open Sans",
                "Clean, readable fonts perfect for data display",
                &["high readability", "professional", "data-friendly"],
            ),
        ),
        (
            ProjectType::Ecommerce,
            pairing(
                "Modern Shop",
                "Montserrat",
                "Lato",
                "Modern, friendly fonts for shopping experiences",
                &["friendly", "modern", "conversion-focused"],
            ),
        ),
    ])
});

static UNIVERSAL_PAIRING: Lazy<FontPairing> = Lazy::new(|| {
    pairing(
        "Classic Professional",
        "Arial",
        "Georgia",
        "Timeless combination suitable for any business",
        &["classic", "professional", "widely-supported"],
    )
});

/// Project-specific pairing first, when there is one, then the universal one.
pub fn font_pairings(project_type: ProjectType) -> Vec<FontPairing> {
    PROJECT_PAIRINGS
        .get(&project_type.table_key())
        .into_iter()
        .chain(std::iter::once(&*UNIVERSAL_PAIRING))
        .cloned()
        .collect()
}
