// src/services/layout_metrics.rs
use crate::models::{
    AlignmentAnalysis, BalanceAnalysis, Canvas, HierarchyAnalysis, LayoutAnalysis,
    SpacingAnalysis, Widget,
};
use log::debug;

pub const DEFAULT_GRID_UNIT: f64 = 50.0;

const HEADING_MIN_FONT_SIZE: f64 = 18.0;
const CLEAR_HIERARCHY: f64 = 0.8;
const FLAT_HIERARCHY: f64 = 0.4;
const BALANCE_TOLERANCE: f64 = 0.2;

pub fn analyze_layout(widgets: &[Widget], canvas: &Canvas) -> LayoutAnalysis {
    let analysis = LayoutAnalysis {
        widget_count: widgets.len(),
        density: density(widgets, canvas),
        alignment: alignment(widgets, DEFAULT_GRID_UNIT),
        spacing: spacing(widgets),
        hierarchy: hierarchy(widgets),
        balance: balance(widgets, canvas),
    };

    debug!(
        "Analyzed {} widgets: density={:.3} alignment={:.3} spacing={:.3}",
        analysis.widget_count,
        analysis.density,
        analysis.alignment.score,
        analysis.spacing.consistency
    );

    analysis
}

/// Covered area over canvas area. Not clamped above; a canvas without
/// positive area yields 0.
pub fn density(widgets: &[Widget], canvas: &Canvas) -> f64 {
    let canvas_area = canvas.area();
    if canvas_area <= 0.0 || !canvas_area.is_finite() {
        return 0.0;
    }

    let covered: f64 = widgets
        .iter()
        .map(|w| w.width().max(0.0) * w.height().max(0.0))
        .sum();

    covered / canvas_area
}

pub fn alignment(widgets: &[Widget], grid_unit: f64) -> AlignmentAnalysis {
    let unit = if grid_unit > 0.0 { grid_unit } else { DEFAULT_GRID_UNIT };
    let aligned_count = widgets.iter().filter(|w| w.x() % unit == 0.0).count();
    let total_count = widgets.len();

    let score = if total_count == 0 {
        1.0
    } else {
        aligned_count as f64 / total_count as f64
    };

    AlignmentAnalysis {
        score,
        aligned_count,
        total_count,
    }
}

/// Horizontal gaps between consecutive widgets, in input order.
pub fn spacing(widgets: &[Widget]) -> SpacingAnalysis {
    let gaps: Vec<f64> = widgets
        .windows(2)
        .map(|pair| (pair[0].x() - pair[1].x()).abs())
        .collect();

    if gaps.is_empty() {
        return SpacingAnalysis {
            consistency: 1.0,
            average: 0.0,
            variance: 0.0,
        };
    }

    let n = gaps.len() as f64;
    let average = gaps.iter().sum::<f64>() / n;
    let variance = gaps.iter().map(|g| (g - average).powi(2)).sum::<f64>() / n;

    let consistency = if average == 0.0 {
        1.0
    } else {
        (1.0 - variance / (average * average)).clamp(0.0, 1.0)
    };

    SpacingAnalysis {
        consistency,
        average,
        variance,
    }
}

pub fn hierarchy(widgets: &[Widget]) -> HierarchyAnalysis {
    let font_sizes = || widgets.iter().filter(|w| w.is_text()).filter_map(Widget::font_size);

    let heading_count = font_sizes().filter(|s| *s > HEADING_MIN_FONT_SIZE).count();
    let has_body = font_sizes().any(|s| s <= HEADING_MIN_FONT_SIZE);
    let has_headings = heading_count > 0;

    HierarchyAnalysis {
        clarity: if has_headings && has_body {
            CLEAR_HIERARCHY
        } else {
            FLAT_HIERARCHY
        },
        has_headings,
        has_body,
        heading_count,
    }
}

pub fn balance(widgets: &[Widget], canvas: &Canvas) -> BalanceAnalysis {
    let midline = canvas.width / 2.0;
    let left_weight = widgets.iter().filter(|w| w.x() < midline).count();
    let right_weight = widgets.len() - left_weight;

    if widgets.is_empty() {
        return BalanceAnalysis {
            score: 1.0,
            left_weight,
            right_weight,
            is_balanced: true,
        };
    }

    let imbalance = left_weight.abs_diff(right_weight) as f64 / widgets.len() as f64;

    BalanceAnalysis {
        score: 1.0 - imbalance,
        left_weight,
        right_weight,
        is_balanced: imbalance < BALANCE_TOLERANCE,
    }
}
