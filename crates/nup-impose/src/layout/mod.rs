//! Layout calculation modules for N-up imposition
//!
//! This module handles all the geometric and ordering decisions:
//! - Grid selection (how many rows and columns for a density N)
//! - Sequential duplex mapping (which source page goes in which cell)
//! - Content placement (cell bounds, fit scaling, centering)
//!
//! Everything here is pure computation over one job's inputs; rendering
//! lives in `impose` and `render`.

mod duplex;
mod grid;
mod placement;
mod types;

pub use duplex::*;
pub use grid::*;
pub use placement::*;
pub use types::*;
