//! Axum route handlers for the Screening API.

use std::path::Path;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use tracing::warn;

use crate::errors::AppError;
use crate::screening::pipeline::{screen_resume, ResumeUpload, ScreeningReport};
use crate::state::AppState;

/// Multipart field carrying the résumé file.
pub const RESUME_FIELD: &str = "resume";
/// Used when a PDF part arrives without a filename.
const DEFAULT_FILE_NAME: &str = "resume.pdf";

/// POST /api/v1/evaluations
///
/// Accepts one PDF in the `resume` multipart field and runs the full
/// extract → score → evaluate pipeline.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScreeningReport>, AppError> {
    let upload = read_resume_field(multipart, state.config.max_upload_bytes).await?;

    let report = screen_resume(
        state.document_reader.clone(),
        &state.extractor,
        state.evaluator.as_ref(),
        state.config.locale.prompt_template(),
        upload,
    )
    .await?;

    Ok(Json(report))
}

async fn read_resume_field(
    mut multipart: Multipart,
    max_bytes: usize,
) -> Result<ResumeUpload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_bytes))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);

        if !is_pdf(file_name.as_deref(), content_type.as_deref()) {
            warn!("Rejected upload {file_name:?} ({content_type:?}): not a PDF");
            return Err(AppError::Validation(
                "Invalid file type. Only PDF files are allowed".to_string(),
            ));
        }
        let file_name = file_name.unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());

        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, max_bytes))?;

        if bytes.is_empty() {
            warn!("Rejected upload '{file_name}': empty file");
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }

        return Ok(ResumeUpload { file_name, bytes });
    }

    Err(AppError::Validation(format!(
        "Missing '{RESUME_FIELD}' file field"
    )))
}

/// Body-limit overruns become 413; anything else is a malformed request.
fn multipart_error(err: MultipartError, max_bytes: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!("Rejected upload: body exceeds {max_bytes} bytes");
        AppError::PayloadTooLarge(format!("Uploaded file exceeds {max_bytes} bytes"))
    } else {
        AppError::Validation(format!("Malformed multipart body: {err}"))
    }
}

fn is_pdf(file_name: Option<&str>, content_type: Option<&str>) -> bool {
    let by_extension = file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    by_extension || content_type == Some("application/pdf")
}
