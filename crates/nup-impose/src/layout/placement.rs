//! Content placement within cells
//!
//! Cell geometry on the sheet and the scale/translate transform that
//! centers a source page inside its cell.

use super::{LayoutGrid, PagePlacement, Rect};

/// Calculate the bounds of a cell on the sheet.
///
/// Columns grow left to right and rows top to bottom, while the PDF
/// coordinate system grows bottom to top, so row 0 sits at the top of
/// the sheet.
///
/// # Arguments
/// * `grid` - The grid layout
/// * `row` - Row index (0 = top)
/// * `target_col` - Physical column the cell is placed in (already
///   mirrored for back sides)
/// * `sheet_width_pt` / `sheet_height_pt` - Sheet dimensions in points
pub fn cell_bounds(
    grid: &LayoutGrid,
    row: usize,
    target_col: usize,
    sheet_width_pt: f32,
    sheet_height_pt: f32,
) -> Rect {
    let cell_width = sheet_width_pt / grid.cols as f32;
    let cell_height = sheet_height_pt / grid.rows as f32;

    Rect::new(
        target_col as f32 * cell_width,
        sheet_height_pt - (row + 1) as f32 * cell_height,
        cell_width,
        cell_height,
    )
}

/// Calculate the transform placing a source page inside a cell.
///
/// The page is scaled uniformly to the largest size fully contained in
/// the cell (no cropping), then centered.
pub fn place_in_cell(cell: &Rect, source_width: f32, source_height: f32) -> PagePlacement {
    let scale = (cell.width / source_width).min(cell.height / source_height);

    let off_x = (cell.width - source_width * scale) / 2.0;
    let off_y = (cell.height - source_height * scale) / 2.0;

    PagePlacement {
        scale,
        x: cell.x + off_x,
        y: cell.y + off_y,
    }
}
