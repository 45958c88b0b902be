//! Sequential duplex page mapping
//!
//! This module decides which source page lands in which cell of which
//! sheet side. Pages are dealt out in pairs: cell k of sheet s holds the
//! front/back pair `2*(s*n + k) + 1` and `2*(s*n + k) + 2` (1-based), so
//! cutting the printed stack along the grid and collating the sub-stacks
//! in cell order reproduces the original page sequence.
//!
//! Back sides mirror the placement column across the sheet's vertical
//! axis. After duplex printing, a cell's back content then sits directly
//! behind its front content, so every cut sub-stack keeps its pages
//! physically paired.

use super::{CellAssignment, GridPosition, LayoutGrid, SheetSide};

/// Number of physical sheets needed for `total_pages` input pages at
/// `pages_per_side` pages per sheet side.
///
/// Each sheet carries up to `2 * pages_per_side` pages (front and back).
pub fn sheets_per_stack(total_pages: usize, pages_per_side: usize) -> usize {
    total_pages.div_ceil(2 * pages_per_side)
}

/// 1-based source page number for stack position `stack_index` on the
/// given side of sheet `sheet_index`.
///
/// The caller is responsible for treating numbers beyond the document's
/// page count as empty cells.
pub fn source_page_number(
    sheet_index: usize,
    stack_index: usize,
    pages_per_side: usize,
    side: SheetSide,
) -> usize {
    let pair_index = sheet_index * pages_per_side + stack_index;
    match side {
        SheetSide::Front => pair_index * 2 + 1,
        SheetSide::Back => pair_index * 2 + 2,
    }
}

/// Mirror a column across the sheet's vertical axis.
pub fn mirror_col(cols: usize, col: usize) -> usize {
    cols - 1 - col
}

/// Compute the cell assignments for one sheet side.
///
/// Cells are enumerated row-major (left to right, top to bottom). A cell
/// is empty when its stack index falls in the grid's waste capacity
/// (`>= pages_per_side`) or when its page number exceeds `total_pages`.
/// The source page is always selected with the unmirrored column; only
/// the placement column flips on the back.
pub fn side_assignments(
    grid: &LayoutGrid,
    sheet_index: usize,
    side: SheetSide,
    pages_per_side: usize,
    total_pages: usize,
) -> Vec<CellAssignment> {
    let mut cells = Vec::with_capacity(grid.capacity());

    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let stack_index = row * grid.cols + col;

            let source_page = if stack_index < pages_per_side {
                let page = source_page_number(sheet_index, stack_index, pages_per_side, side);
                (page <= total_pages).then_some(page)
            } else {
                None
            };

            let target_col = if side.is_front() {
                col
            } else {
                mirror_col(grid.cols, col)
            };

            cells.push(CellAssignment {
                pos: GridPosition::new(row, col),
                target_col,
                source_page,
            });
        }
    }

    cells
}
