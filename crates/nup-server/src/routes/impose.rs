//! Upload-and-impose endpoints

use axum::{
    Json,
    body::Bytes,
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
};
use lopdf::Document;
use nup_impose::ImposeOptions;
use serde_json::{Value, json};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

/// Density applied when the form omits the `n_up` field entirely.
const DEFAULT_PAGES_PER_SIDE: usize = 2;

struct Upload {
    filename: String,
    bytes: Bytes,
    pages_per_side: usize,
}

/// POST /impose
/// Multipart form: `pdf_file` (the document) and optional `n_up` (density).
/// Returns the imposed PDF as a download.
pub async fn impose_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let upload = read_upload(multipart, state.config.max_upload_bytes).await?;

    let document = Document::load_mem(&upload.bytes)
        .map_err(|e| AppError::UnreadablePdf(format!("Could not parse uploaded PDF: {e}")))?;

    let options = ImposeOptions {
        pages_per_side: upload.pages_per_side,
        ..Default::default()
    };

    // The gate holds a waiting-room slot for the duration and lets one
    // job render at a time; the slot is returned before we respond.
    let mut imposed = state
        .gate
        .run(|| async { nup_impose::impose(&document, &options).await })
        .await
        .map_err(|_| AppError::Busy)??;

    let mut output = Vec::new();
    imposed
        .save_to(&mut output)
        .map_err(|e| AppError::Impose(e.into()))?;

    info!(
        filename = %upload.filename,
        n = upload.pages_per_side,
        output_bytes = output.len(),
        "imposed upload"
    );

    let download_name = format!("imposed_{}up_{}", upload.pages_per_side, upload.filename);
    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", download_name),
        ),
    ];

    Ok((headers, output).into_response())
}

/// POST /page-count
/// Multipart form: `pdf_file`. Returns `{"pages": N}` without imposing.
pub async fn page_count_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let upload = read_upload(multipart, state.config.max_upload_bytes).await?;

    let document = Document::load_mem(&upload.bytes)
        .map_err(|e| AppError::UnreadablePdf(format!("Could not parse uploaded PDF: {e}")))?;

    Ok(Json(json!({ "pages": document.get_pages().len() })))
}

/// Pull the file and density out of the multipart form.
///
/// Missing `n_up` falls back to the default density, but a field that is
/// present and not a positive integer is a validation error; garbage
/// input is never silently papered over.
async fn read_upload(mut multipart: Multipart, max_upload_bytes: usize) -> Result<Upload, AppError> {
    let mut filename = String::new();
    let mut bytes: Option<Bytes> = None;
    let mut pages_per_side = DEFAULT_PAGES_PER_SIDE;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "pdf_file" => {
                filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                bytes = Some(data);
            }
            "n_up" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read density: {e}")))?;
                pages_per_side = text.trim().parse().ok().filter(|&n| n >= 1).ok_or_else(|| {
                    AppError::Validation(format!(
                        "Page density must be a positive integer, got '{}'",
                        text.trim()
                    ))
                })?;
            }
            _ => {}
        }
    }

    let Some(bytes) = bytes else {
        return Err(AppError::Validation("No file uploaded".to_string()));
    };
    if filename.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }
    if bytes.len() > max_upload_bytes {
        return Err(AppError::PayloadTooLarge);
    }

    Ok(Upload {
        filename,
        bytes,
        pages_per_side,
    })
}
