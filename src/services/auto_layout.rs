// src/services/auto_layout.rs
use crate::models::{AutoLayout, Canvas, LayoutKind, Placement, ProjectType, Widget};
use once_cell::sync::Lazy;
use std::collections::HashMap;

const GRID_INSET: f64 = 10.0;

const LIST_ITEM_HEIGHT: f64 = 80.0;
const LIST_SPACING: f64 = 16.0;
const LIST_MARGIN: f64 = 20.0;

const DEFAULT_SUITABILITY: f64 = 0.5;

static SUITABILITY: Lazy<HashMap<(ProjectType, LayoutKind), f64>> = Lazy::new(|| {
    use LayoutKind::{Grid, List};
    use ProjectType::{Blog, Dashboard, Ecommerce, Survey};

    HashMap::from([
        ((Dashboard, Grid), 0.9),
        ((Dashboard, List), 0.6),
        ((Ecommerce, Grid), 0.7),
        ((Ecommerce, List), 0.8),
        ((Blog, Grid), 0.6),
        ((Blog, List), 0.9),
        ((Survey, Grid), 0.5),
        ((Survey, List), 0.9),
    ])
});

/// Grid geometry for `n` items: near-square, `cols * rows >= n`.
pub fn grid_dimensions(n: usize) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    let cols = (n as f64).sqrt().ceil() as usize;
    let rows = n.div_ceil(cols);
    (cols, rows)
}

pub fn grid_layout(widgets: &[Widget], canvas: &Canvas) -> Vec<Placement> {
    let (cols, rows) = grid_dimensions(widgets.len());
    if cols == 0 {
        return Vec::new();
    }

    let cell_width = canvas.width / cols as f64;
    let cell_height = canvas.height / rows as f64;

    widgets
        .iter()
        .enumerate()
        .map(|(index, widget)| Placement {
            id: widget.id.clone(),
            x: (index % cols) as f64 * cell_width + GRID_INSET,
            y: (index / cols) as f64 * cell_height + GRID_INSET,
            width: cell_width - 2.0 * GRID_INSET,
            height: cell_height - 2.0 * GRID_INSET,
        })
        .collect()
}

pub fn list_layout(widgets: &[Widget], canvas: &Canvas) -> Vec<Placement> {
    widgets
        .iter()
        .enumerate()
        .map(|(index, widget)| Placement {
            id: widget.id.clone(),
            x: LIST_MARGIN,
            y: index as f64 * (LIST_ITEM_HEIGHT + LIST_SPACING) + LIST_MARGIN,
            width: canvas.width - 2.0 * LIST_MARGIN,
            height: LIST_ITEM_HEIGHT,
        })
        .collect()
}

pub fn suitability(layout: LayoutKind, project_type: ProjectType) -> f64 {
    SUITABILITY
        .get(&(project_type, layout))
        .copied()
        .unwrap_or(DEFAULT_SUITABILITY)
}

pub fn generate_auto_layouts(
    widgets: &[Widget],
    canvas: &Canvas,
    project_type: ProjectType,
) -> Vec<AutoLayout> {
    vec![
        AutoLayout {
            name: "Grid Layout".to_string(),
            description: "Organized grid arrangement for better structure".to_string(),
            positions: grid_layout(widgets, canvas),
            suitability: suitability(LayoutKind::Grid, project_type),
        },
        AutoLayout {
            name: "List Layout".to_string(),
            description: "Vertical list arrangement for content-heavy pages".to_string(),
            positions: list_layout(widgets, canvas),
            suitability: suitability(LayoutKind::List, project_type),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CANVAS: Canvas = Canvas {
        width: 1200.0,
        height: 800.0,
    };

    fn widgets(n: usize) -> Vec<Widget> {
        (0..n)
            .map(|i| Widget {
                id: format!("w{}", i),
                ..Widget::default()
            })
            .collect()
    }

    #[test]
    fn five_widgets_make_a_three_by_two_grid() {
        assert_eq!(grid_dimensions(5), (3, 2));
        let placements = grid_layout(&widgets(5), &CANVAS);
        assert_eq!(placements.len(), 5);
        assert_eq!(
            placements[0],
            Placement {
                id: "w0".into(),
                x: 10.0,
                y: 10.0,
                width: 380.0,
                height: 380.0
            }
        );
        assert_eq!(placements[4].x, 410.0);
        assert_eq!(placements[4].y, 410.0);
    }

    #[test]
    fn empty_grid_has_no_placements() {
        assert_eq!(grid_dimensions(0), (0, 0));
        assert!(grid_layout(&[], &CANVAS).is_empty());
    }

    #[test]
    fn list_rows_stack_downwards() {
        let placements = list_layout(&widgets(3), &CANVAS);
        let ys: Vec<f64> = placements.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![20.0, 116.0, 212.0]);
        assert!(placements.iter().all(|p| p.width == 1160.0 && p.height == 80.0 && p.x == 20.0));
    }

    #[test]
    fn suitability_table_with_default() {
        assert_eq!(suitability(LayoutKind::Grid, ProjectType::Dashboard), 0.9);
        assert_eq!(suitability(LayoutKind::List, ProjectType::Blog), 0.9);
        assert_eq!(suitability(LayoutKind::List, ProjectType::Ecommerce), 0.8);
        assert_eq!(suitability(LayoutKind::Grid, ProjectType::General), 0.5);
        assert_eq!(suitability(LayoutKind::List, ProjectType::Other), 0.5);
    }

    #[test]
    fn auto_layouts_are_grid_then_list() {
        let layouts = generate_auto_layouts(&widgets(2), &CANVAS, ProjectType::Survey);
        assert_eq!(layouts.len(), 2);
        assert_eq!(layouts[0].name, "Grid Layout");
        assert_eq!(layouts[0].suitability, 0.5);
        assert_eq!(layouts[1].name, "List Layout");
        assert_eq!(layouts[1].suitability, 0.9);
    }

    proptest! {
        #[test]
        fn grid_cells_tile_the_canvas(
            n in 1usize..200,
            width in 100.0f64..4000.0,
            height in 100.0f64..4000.0,
        ) {
            let canvas = Canvas { width, height };
            let (cols, rows) = grid_dimensions(n);
            prop_assert!(cols * rows >= n);

            let placements = grid_layout(&widgets(n), &canvas);
            prop_assert_eq!(placements.len(), n);

            let cell_width = width / cols as f64;
            let cell_height = height / rows as f64;
            prop_assert!((cell_width * cols as f64 - width).abs() < 1e-6);
            prop_assert!((cell_height * rows as f64 - height).abs() < 1e-6);

            let mut seen = std::collections::HashSet::new();
            for p in &placements {
                let col = ((p.x - GRID_INSET) / cell_width).round() as usize;
                let row = ((p.y - GRID_INSET) / cell_height).round() as usize;
                prop_assert!(col < cols && row < rows);
                prop_assert!(seen.insert((col, row)));
                prop_assert!(p.x + p.width + GRID_INSET <= width + 1e-6);
                prop_assert!(p.y + p.height + GRID_INSET <= height + 1e-6);
            }
        }
    }
}
