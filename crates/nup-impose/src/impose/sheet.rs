//! Sheet-side rendering

use crate::layout::{CellAssignment, LayoutGrid, cell_bounds, place_in_cell};
use crate::options::ImposeOptions;
use crate::overlay::{OverlayConfig, generate_cut_guides, generate_page_stamps};
use crate::render::{page_dimensions, page_xobject};
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Render one side of a sheet into the output document.
///
/// Places every assigned source page into its cell, then composites the
/// overlay (cut guides and page-number stamps) strictly on top of the
/// page content. Returns the new output page's object id.
#[allow(clippy::too_many_arguments)]
pub(crate) fn render_sheet_side(
    output: &mut Document,
    source: &Document,
    source_page_ids: &[ObjectId],
    grid: &LayoutGrid,
    cells: &[CellAssignment],
    options: &ImposeOptions,
    sheet_width_pt: f32,
    sheet_height_pt: f32,
    parent_pages_id: ObjectId,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(sheet_width_pt),
            Object::Real(sheet_height_pt),
        ]),
    );

    let mut content_ops = Vec::new();
    let mut xobjects = Dictionary::new();
    let mut fonts = Dictionary::new();
    let mut xobject_cache: HashMap<ObjectId, ObjectId> = HashMap::new();

    // Place the assigned source pages
    for (idx, cell) in cells.iter().enumerate() {
        let Some(page_number) = cell.source_page else {
            continue;
        };
        // Mapping guarantees assigned numbers are within the document.
        let source_page_id = source_page_ids[page_number - 1];

        let (src_width, src_height) = page_dimensions(source, source_page_id, page_number)?;

        let cell_rect = cell_bounds(
            grid,
            cell.pos.row,
            cell.target_col,
            sheet_width_pt,
            sheet_height_pt,
        );
        let placement = place_in_cell(&cell_rect, src_width, src_height);

        let xobject_name = format!("P{}", idx);
        let xobject_id = page_xobject(
            output,
            source,
            source_page_id,
            page_number,
            &mut xobject_cache,
        )?;
        xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));

        content_ops.push(format!(
            "q {} 0 0 {} {} {} cm /{} Do Q\n",
            placement.scale, placement.scale, placement.x, placement.y, xobject_name
        ));
    }

    // Overlay goes after the content ops so it is never painted over
    let overlay_config = OverlayConfig {
        cols: grid.cols,
        rows: grid.rows,
        cell_width: sheet_width_pt / grid.cols as f32,
        cell_height: sheet_height_pt / grid.rows as f32,
        sheet_width: sheet_width_pt,
        sheet_height: sheet_height_pt,
    };

    if options.cut_guides {
        content_ops.push(generate_cut_guides(&overlay_config));
    }

    if options.page_labels && cells.iter().any(|c| c.source_page.is_some()) {
        let mut font_dict = Dictionary::new();
        font_dict.set("Type", Object::Name(b"Font".to_vec()));
        font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
        font_dict.set("BaseFont", Object::Name(b"Helvetica-Bold".to_vec()));
        let font_id = output.add_object(font_dict);
        fonts.set("F1", Object::Reference(font_id));

        content_ops.push(generate_page_stamps(&overlay_config, cells));
    }

    // Build resources
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));
    if !fonts.is_empty() {
        resources.set("Font", Object::Dictionary(fonts));
    }

    // Create content stream
    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}
