//! Source-page rendering plumbing
//!
//! Wraps source PDF pages as Form XObjects so the composer can place the
//! same content with an arbitrary scale/translate transform, and reads
//! source page dimensions. A source page that yields neither a usable
//! MediaBox nor content fails the whole job as [`ImposeError::UnreadablePage`];
//! partial output is never produced.

use crate::types::{ImposeError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Create a Form XObject from a source page.
///
/// The XObject can be placed any number of times on output pages with
/// different transforms. Deep-copied objects are cached so shared
/// resources are copied once per output document. `page_number` is the
/// 1-based source page number, used for error reporting only.
pub(crate) fn page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    page_number: usize,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let unreadable = |_| ImposeError::UnreadablePage(page_number);

    let page_dict = source.get_dictionary(page_id).map_err(unreadable)?;

    let media_box = page_dict
        .get(b"MediaBox")
        .and_then(|obj| obj.as_array())
        .map_err(unreadable)?
        .clone();
    if media_box.len() < 4 {
        return Err(ImposeError::UnreadablePage(page_number));
    }

    let content_data = page_content(source, page_dict).map_err(unreadable)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set("BBox", Object::Array(media_box));
    xobject_dict.set("FormType", Object::Integer(1));

    if let Ok(resources) = page_dict.get(b"Resources") {
        xobject_dict.set(
            "Resources",
            deep_copy(output, source, resources, cache).map_err(unreadable)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

/// Source page dimensions (width, height) in points.
///
/// Read from the page's MediaBox; a page without four numeric MediaBox
/// coordinates is unreadable as far as layout is concerned.
pub(crate) fn page_dimensions(
    doc: &Document,
    page_id: ObjectId,
    page_number: usize,
) -> Result<(f32, f32)> {
    let unreadable = |_| ImposeError::UnreadablePage(page_number);

    let page_dict = doc.get_dictionary(page_id).map_err(unreadable)?;
    let media_box = page_dict
        .get(b"MediaBox")
        .and_then(|obj| obj.as_array())
        .map_err(unreadable)?;

    let coords: Vec<f32> = media_box.iter().filter_map(as_number).collect();
    if coords.len() < 4 {
        return Err(ImposeError::UnreadablePage(page_number));
    }

    Ok((coords[2] - coords[0], coords[3] - coords[1]))
}

fn as_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Concatenated, decompressed content stream bytes of a page.
fn page_content(doc: &Document, page_dict: &Dictionary) -> lopdf::Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()), // No content = blank page
    };

    match contents {
        Object::Reference(id) => stream_content(doc, *id),
        Object::Array(refs) => {
            let mut result = Vec::new();
            for obj in refs {
                if let Object::Reference(id) = obj {
                    result.extend_from_slice(&stream_content(doc, *id)?);
                    result.push(b'\n');
                }
            }
            Ok(result)
        }
        _ => Ok(Vec::new()),
    }
}

fn stream_content(doc: &Document, id: ObjectId) -> lopdf::Result<Vec<u8>> {
    if let Ok(stream) = doc.get_object(id)?.as_stream() {
        Ok(stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone()))
    } else {
        Ok(Vec::new())
    }
}

/// Deep copy an object from source to output document, following
/// references. The cache keeps shared objects from being duplicated.
fn deep_copy(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> lopdf::Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            let referenced = source.get_object(*id)?;
            let copied = deep_copy(output, source, referenced, cache)?;

            let new_id = output.add_object(copied);
            cache.insert(*id, new_id);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in dict.iter() {
                new_dict.set(key.clone(), deep_copy(output, source, value, cache)?);
            }
            Ok(Object::Dictionary(new_dict))
        }
        Object::Array(arr) => {
            let new_arr: lopdf::Result<Vec<_>> = arr
                .iter()
                .map(|item| deep_copy(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in stream.dict.iter() {
                new_dict.set(key.clone(), deep_copy(output, source, value, cache)?);
            }
            Ok(Object::Stream(Stream {
                dict: new_dict,
                content: stream.content.clone(),
                allows_compression: stream.allows_compression,
                start_position: None,
            }))
        }
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}
