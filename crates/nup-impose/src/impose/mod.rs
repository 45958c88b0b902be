//! N-up imposition - tiling pages for duplex cut stacks
//!
//! This module orchestrates the imposition process:
//! 1. Choose the grid for the requested density
//! 2. Walk sheet indices, emitting a front and a back side for each
//! 3. Place source pages and composite the overlay per side
//! 4. Assemble the output PDF page tree

mod io;
mod sheet;

pub use io::{load_pdf, save_pdf};

use crate::constants::mm_to_pt;
use crate::layout::{SheetSide, compute_grid, sheets_per_stack, side_assignments};
use crate::options::ImposeOptions;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId};
use sheet::render_sheet_side;

/// Main imposition function
///
/// Tiles the source document's pages `pages_per_side`-up onto duplex
/// sheets so that cutting along the grid and collating the stacks
/// restores the original page order. A zero-page source yields a
/// zero-page output document; whether that is an error is the caller's
/// call.
pub async fn impose(document: &Document, options: &ImposeOptions) -> Result<Document> {
    options.validate()?;

    let document = document.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || impose_sync(&document, &options)).await?
}

fn impose_sync(source: &Document, options: &ImposeOptions) -> Result<Document> {
    let pages = source.get_pages();
    let page_ids: Vec<ObjectId> = pages.values().copied().collect();
    let total_pages = page_ids.len();

    let n = options.pages_per_side;

    let (sheet_width_mm, sheet_height_mm) = options
        .paper_size
        .dimensions_with_orientation(options.orientation);
    let sheet_width_pt = mm_to_pt(sheet_width_mm);
    let sheet_height_pt = mm_to_pt(sheet_height_mm);

    // The grid is chosen once per job and shapes every sheet side.
    let grid = compute_grid(n, sheet_height_pt / sheet_width_pt);
    let sheet_count = sheets_per_stack(total_pages, n);

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::new();

    for sheet_index in 0..sheet_count {
        for side in [SheetSide::Front, SheetSide::Back] {
            let cells = side_assignments(&grid, sheet_index, side, n, total_pages);
            let page_id = render_sheet_side(
                &mut output,
                source,
                &page_ids,
                &grid,
                &cells,
                options,
                sheet_width_pt,
                sheet_height_pt,
                pages_tree_id,
            )?;
            page_refs.push(Object::Reference(page_id));
        }
    }

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);

    Ok(output)
}
