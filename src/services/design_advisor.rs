// src/services/design_advisor.rs
use super::{accessibility, auto_layout, layout_metrics, palette, typography};
use crate::models::*;
use log::info;
use serde_json::Value;
use std::collections::HashMap;

const DENSITY_LIMIT: f64 = 0.8;
const ALIGNMENT_FLOOR: f64 = 0.7;
const SPACING_FLOOR: f64 = 0.6;
const HIERARCHY_FLOOR: f64 = 0.5;

const AAA_SCHEME_SCORE: f64 = 0.95;
const DEFAULT_SCHEME_SCORE: f64 = 0.85;
const CURRENT_SCHEME_CONSISTENCY: f64 = 0.7;

fn suggestion(kind: SuggestionKind) -> Suggestion {
    let (priority, description, action, impact) = match kind {
        SuggestionKind::Density => (
            Priority::High,
            "Reduce widget density for better readability",
            "Consider grouping related widgets or using scrollable areas",
            "Improves user focus and reduces cognitive load",
        ),
        SuggestionKind::Alignment => (
            Priority::Medium,
            "Improve widget alignment for cleaner appearance",
            "Use grid alignment or consistent spacing",
            "Creates more professional and organized look",
        ),
        SuggestionKind::Spacing => (
            Priority::Medium,
            "Standardize spacing between widgets",
            "Use consistent 8px, 16px, or 24px spacing",
            "Improves visual rhythm and user experience",
        ),
        SuggestionKind::Hierarchy => (
            Priority::High,
            "Establish clear visual hierarchy",
            "Use size, color, and positioning to create hierarchy",
            "Helps users understand content importance",
        ),
    };

    Suggestion {
        kind,
        priority,
        description: description.to_string(),
        action: action.to_string(),
        impact: impact.to_string(),
    }
}

/// Entry point for the design assistant. Stateless; every call is a pure
/// function of its arguments.
pub struct DesignAdvisor;

impl Default for DesignAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignAdvisor {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze_layout(&self, widgets: &[Widget], canvas: &Canvas) -> LayoutAnalysis {
        layout_metrics::analyze_layout(widgets, canvas)
    }

    /// Threshold checks run density, alignment, spacing, hierarchy; output
    /// follows that order regardless of priority.
    pub fn advise_layout_improvements(
        &self,
        analysis: &LayoutAnalysis,
        _project_type: ProjectType,
    ) -> Vec<Suggestion> {
        let checks = [
            (SuggestionKind::Density, analysis.density > DENSITY_LIMIT),
            (SuggestionKind::Alignment, analysis.alignment.score < ALIGNMENT_FLOOR),
            (SuggestionKind::Spacing, analysis.spacing.consistency < SPACING_FLOOR),
            (SuggestionKind::Hierarchy, analysis.hierarchy.clarity < HIERARCHY_FLOOR),
        ];

        checks
            .into_iter()
            .filter(|(_, triggered)| *triggered)
            .map(|(kind, _)| suggestion(kind))
            .collect()
    }

    pub fn generate_auto_layouts(
        &self,
        widgets: &[Widget],
        canvas: &Canvas,
        project_type: ProjectType,
    ) -> Vec<AutoLayout> {
        auto_layout::generate_auto_layouts(widgets, canvas, project_type)
    }

    pub fn layout_suggestions(
        &self,
        widgets: &[Widget],
        canvas: &Canvas,
        project_type: ProjectType,
    ) -> LayoutSuggestions {
        info!(
            "Getting layout suggestions for {:?} ({} widgets)",
            project_type,
            widgets.len()
        );

        let layout_analysis = self.analyze_layout(widgets, canvas);
        let suggestions = self.advise_layout_improvements(&layout_analysis, project_type);

        LayoutSuggestions {
            layout_analysis,
            suggestions,
            auto_layouts: self.generate_auto_layouts(widgets, canvas, project_type),
        }
    }

    pub fn generate_palette(
        &self,
        project_type: ProjectType,
        existing: &ExistingColors,
    ) -> Vec<ColorScheme> {
        palette::generate_palette(project_type, existing)
    }

    pub fn color_scheme_suggestions(
        &self,
        project_type: ProjectType,
        existing: &ExistingColors,
    ) -> ColorSchemeSuggestions {
        info!("Getting color scheme suggestions for {:?}", project_type);

        let recommended_schemes = self.generate_palette(project_type, existing);
        let accessibility_score = recommended_schemes
            .iter()
            .map(|scheme| SchemeAccessibility {
                scheme_name: scheme.name.clone(),
                score: match scheme.accessibility_rating {
                    AccessibilityRating::Aaa => AAA_SCHEME_SCORE,
                    _ => DEFAULT_SCHEME_SCORE,
                },
                issues: Vec::new(),
            })
            .collect();

        ColorSchemeSuggestions {
            recommended_schemes,
            accessibility_score,
            current_scheme: CurrentSchemeAnalysis {
                has_primary: existing.primary.is_some(),
                has_secondary: existing.secondary.is_some(),
                has_accent: existing.accent.is_some(),
                consistency: CURRENT_SCHEME_CONSISTENCY,
                mood: Mood::Neutral,
            },
        }
    }

    // Current fonts do not influence the result yet; the tables are static.
    pub fn typography_suggestions(
        &self,
        project_type: ProjectType,
        _current_fonts: &HashMap<String, Value>,
    ) -> TypographySuggestions {
        info!("Getting typography suggestions for {:?}", project_type);

        TypographySuggestions {
            font_pairings: typography::font_pairings(project_type),
            sizing_recommendations: typography::SIZING,
            readability_score: typography::READABILITY_SCORE,
        }
    }

    pub fn contrast(&self, foreground: Color, background: Color) -> ContrastReport {
        accessibility::contrast_report(foreground, background)
    }
}
