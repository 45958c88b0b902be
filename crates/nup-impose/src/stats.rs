use crate::constants::mm_to_pt;
use crate::layout::{compute_grid, sheets_per_stack};
use crate::options::ImposeOptions;
use crate::types::*;
use lopdf::Document;

/// Calculate statistics for the imposition without rendering anything.
pub fn calculate_statistics(
    document: &Document,
    options: &ImposeOptions,
) -> Result<ImpositionStatistics> {
    options.validate()?;

    let source_pages = document.get_pages().len();
    let n = options.pages_per_side;

    let (width_mm, height_mm) = options
        .paper_size
        .dimensions_with_orientation(options.orientation);
    let grid = compute_grid(n, mm_to_pt(height_mm) / mm_to_pt(width_mm));

    let output_sheets = sheets_per_stack(source_pages, n);
    let output_pages = output_sheets * 2;
    let empty_cells = output_pages * n - source_pages;

    Ok(ImpositionStatistics {
        source_pages,
        pages_per_side: n,
        grid_cols: grid.cols,
        grid_rows: grid.rows,
        output_sheets,
        output_pages,
        empty_cells,
    })
}
