//! Grid selection
//!
//! This module chooses the rows x columns grid used to tile N pages onto
//! one sheet side.

use super::LayoutGrid;

/// Choose a grid for placing `n` pages on a sheet side.
///
/// Candidate column counts run from 1 to `ceil(sqrt(n)) + 2` inclusive,
/// each paired with `rows = ceil(n / cols)`. A candidate is scored as
/// `waste + |rows/cols - sheet_aspect|`, where waste is the unused cell
/// count `rows*cols - n` and `sheet_aspect` is the target sheet's
/// height/width ratio (1.414 for A4 portrait). The lowest score wins;
/// ties go to the smaller column count.
///
/// Pure waste minimization would always pick a 1xN strip. The aspect term
/// trades a cell or two of waste for a grid shaped like the physical
/// sheet, so N=5 on A4 portrait becomes 2x3 rather than 1x5.
pub fn compute_grid(n: usize, sheet_aspect: f32) -> LayoutGrid {
    let limit = (n as f32).sqrt().ceil() as usize + 2;

    let mut best = LayoutGrid { cols: 1, rows: n };
    let mut best_cost = f32::INFINITY;

    for cols in 1..=limit {
        let rows = n.div_ceil(cols);
        let waste = (rows * cols - n) as f32;
        let cost = waste + (rows as f32 / cols as f32 - sheet_aspect).abs();

        if cost < best_cost {
            best = LayoutGrid { cols, rows };
            best_cost = cost;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    const A4_PORTRAIT_ASPECT: f32 = 1.414;

    #[test]
    fn test_single_page_is_one_by_one() {
        let grid = compute_grid(1, A4_PORTRAIT_ASPECT);
        assert_eq!(grid, LayoutGrid { cols: 1, rows: 1 });
    }

    #[test]
    fn test_two_up_prefers_vertical_stack() {
        // c=1: r=2, waste 0, cost |2 - 1.414| = 0.586
        // c=2: r=1, waste 0, cost |0.5 - 1.414| = 0.914
        let grid = compute_grid(2, A4_PORTRAIT_ASPECT);
        assert_eq!(grid, LayoutGrid { cols: 1, rows: 2 });
    }

    #[test]
    fn test_five_up_accepts_waste_for_shape() {
        // c=1: waste 0, cost 3.586
        // c=2: r=3, waste 1, cost 1.086  <- winner
        // c=3: r=2, waste 1, cost 1.747
        let grid = compute_grid(5, A4_PORTRAIT_ASPECT);
        assert_eq!(grid, LayoutGrid { cols: 2, rows: 3 });
    }

    #[test]
    fn test_four_up_is_square() {
        let grid = compute_grid(4, A4_PORTRAIT_ASPECT);
        assert_eq!(grid, LayoutGrid { cols: 2, rows: 2 });
    }

    #[test]
    fn test_capacity_covers_density() {
        for n in 1..=64 {
            let grid = compute_grid(n, A4_PORTRAIT_ASPECT);
            assert!(
                grid.capacity() >= n,
                "grid {}x{} cannot hold {} pages",
                grid.cols,
                grid.rows,
                n
            );
        }
    }

    #[test]
    fn test_never_worse_than_strip_layout() {
        // The 1xN strip is always a candidate, so the winner's score can
        // never exceed it.
        for n in 1..=64 {
            let grid = compute_grid(n, A4_PORTRAIT_ASPECT);
            let waste = (grid.capacity() - n) as f32;
            let cost = waste + (grid.rows as f32 / grid.cols as f32 - A4_PORTRAIT_ASPECT).abs();
            let strip_cost = (n as f32 - A4_PORTRAIT_ASPECT).abs();
            assert!(cost <= strip_cost, "n={}: {} > {}", n, cost, strip_cost);
        }
    }

    #[test]
    fn test_waste_bounded_by_columns() {
        // waste = ceil(n/c)*c - n < c for every candidate, so also for the
        // winner.
        for n in 1..=64 {
            let grid = compute_grid(n, A4_PORTRAIT_ASPECT);
            assert!(grid.capacity() - n < grid.cols);
        }
    }

    #[test]
    fn test_landscape_aspect_prefers_wide_grids() {
        // On a landscape sheet (aspect < 1) the same density leans wide.
        let grid = compute_grid(2, 1.0 / 1.414);
        assert_eq!(grid, LayoutGrid { cols: 2, rows: 1 });
    }
}
