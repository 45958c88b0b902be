//! Overlay rendering for imposed sheets
//!
//! This module generates PDF content stream operations for the overlay
//! drawn on every sheet side: dashed cut guides along the internal grid
//! boundaries, and 1-based page-number stamps in the occupied cells.
//! The ops are appended after the placed page content, so the overlay
//! always sits on top.

use crate::constants::{
    CUT_GUIDE_DASH, CUT_GUIDE_GRAY, CUT_GUIDE_WIDTH, HELVETICA_CHAR_WIDTH_RATIO, STAMP_BOX_HEIGHT,
    STAMP_FONT_SIZE, STAMP_INSET_X, STAMP_INSET_Y, STAMP_PAD,
};
use crate::layout::CellAssignment;

/// Configuration for rendering the overlay
pub struct OverlayConfig {
    /// Number of columns in the grid
    pub cols: usize,
    /// Number of rows in the grid
    pub rows: usize,
    /// Cell width in points
    pub cell_width: f32,
    /// Cell height in points
    pub cell_height: f32,
    /// Sheet width in points
    pub sheet_width: f32,
    /// Sheet height in points
    pub sheet_height: f32,
}

/// Generate dashed guide lines at every internal grid boundary.
///
/// Lines span the full sheet so the guides stay visible outside the
/// printed content.
pub fn generate_cut_guides(config: &OverlayConfig) -> String {
    let mut ops = String::new();

    ops.push_str("q\n");
    ops.push_str(&format!(
        "{} {} {} RG\n",
        CUT_GUIDE_GRAY, CUT_GUIDE_GRAY, CUT_GUIDE_GRAY
    ));
    ops.push_str(&format!("{} w\n", CUT_GUIDE_WIDTH));
    ops.push_str(&format!(
        "[{} {}] 0 d\n",
        CUT_GUIDE_DASH.0, CUT_GUIDE_DASH.1
    ));

    // Vertical boundaries between columns
    for col in 1..config.cols {
        let x = col as f32 * config.cell_width;
        ops.push_str(&format!("{} 0 m {} {} l S\n", x, x, config.sheet_height));
    }

    // Horizontal boundaries between rows
    for row in 1..config.rows {
        let y = row as f32 * config.cell_height;
        ops.push_str(&format!("0 {} m {} {} l S\n", y, config.sheet_width, y));
    }

    ops.push_str("Q\n");
    ops
}

/// Generate page-number stamps for the occupied cells of one sheet side.
///
/// Each stamp sits near the top-left corner of the cell the page is
/// physically placed in (`target_col`, so back-side stamps follow the
/// mirrored placement), over a white backing rectangle for legibility.
/// Expects a font resource named `/F1`.
pub fn generate_page_stamps(config: &OverlayConfig, cells: &[CellAssignment]) -> String {
    let mut ops = String::new();

    ops.push_str("q\n");

    for cell in cells {
        let Some(page) = cell.source_page else {
            continue;
        };

        let cell_x = cell.target_col as f32 * config.cell_width;
        let cell_top = config.sheet_height - cell.pos.row as f32 * config.cell_height;

        let text = page.to_string();
        let text_x = cell_x + STAMP_INSET_X;
        let text_y = cell_top - STAMP_INSET_Y;
        let text_width = text.len() as f32 * STAMP_FONT_SIZE * HELVETICA_CHAR_WIDTH_RATIO;

        // Backing rectangle, then the number on top of it.
        ops.push_str(&format!(
            "1 1 1 rg {} {} {} {} re f\n",
            text_x - STAMP_PAD,
            text_y - STAMP_PAD,
            text_width + 2.0 * STAMP_PAD,
            STAMP_BOX_HEIGHT
        ));
        ops.push_str(&format!(
            "0 0 0 rg BT /F1 {} Tf {} {} Td ({}) Tj ET\n",
            STAMP_FONT_SIZE, text_x, text_y, text
        ));
    }

    ops.push_str("Q\n");
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{GridPosition, LayoutGrid, SheetSide, side_assignments};

    fn config(grid: &LayoutGrid) -> OverlayConfig {
        OverlayConfig {
            cols: grid.cols,
            rows: grid.rows,
            cell_width: 595.0 / grid.cols as f32,
            cell_height: 842.0 / grid.rows as f32,
            sheet_width: 595.0,
            sheet_height: 842.0,
        }
    }

    #[test]
    fn test_guides_cover_internal_boundaries_only() {
        let grid = LayoutGrid { cols: 2, rows: 3 };
        let ops = generate_cut_guides(&config(&grid));

        // 1 vertical + 2 horizontal boundaries = 3 stroked lines.
        assert_eq!(ops.matches(" l S").count(), 3);
        assert!(ops.contains("[2 2] 0 d"));
    }

    #[test]
    fn test_single_cell_grid_draws_no_guides() {
        let grid = LayoutGrid { cols: 1, rows: 1 };
        let ops = generate_cut_guides(&config(&grid));
        assert_eq!(ops.matches(" l S").count(), 0);
    }

    #[test]
    fn test_stamps_skip_empty_cells() {
        let grid = LayoutGrid { cols: 1, rows: 2 };
        // Sheet 1 front of a 5-page 2-up job: page 5 and one empty cell.
        let cells = side_assignments(&grid, 1, SheetSide::Front, 2, 5);
        let ops = generate_page_stamps(&config(&grid), &cells);

        assert_eq!(ops.matches("Tj").count(), 1);
        assert!(ops.contains("(5) Tj"));
    }

    #[test]
    fn test_stamp_follows_mirrored_column() {
        let grid = LayoutGrid { cols: 2, rows: 1 };
        let cfg = config(&grid);

        let cells = vec![CellAssignment {
            pos: GridPosition::new(0, 0),
            target_col: 1,
            source_page: Some(2),
        }];
        let ops = generate_page_stamps(&cfg, &cells);

        // Stamp x lands in the right-hand column.
        let expected_x = cfg.cell_width + STAMP_INSET_X;
        assert!(ops.contains(&format!("{} ", expected_x)));
    }
}
