//! Axum route handler for the review API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::review::extract::DocumentKind;
use crate::review::prompts::{build_prompt, REVIEW_SYSTEM};
use crate::review::tagger::{tag_feedback, TaggedFeedback};
use crate::state::AppState;

/// Multipart field carrying the resume.
const FILE_FIELD: &str = "file";

/// An uploaded resume. Lives for one request.
#[derive(Debug)]
pub struct UploadedDocument {
    pub filename: String,
    pub bytes: Bytes,
}

/// Returns the first part named `file` that carries a filename. Parts without
/// a filename are form values, not uploads.
async fn read_upload(multipart: &mut Multipart) -> Result<Option<UploadedDocument>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        return Ok(Some(UploadedDocument { filename, bytes }));
    }
    Ok(None)
}

/// POST /evaluate
pub async fn handle_evaluate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<TaggedFeedback>, AppError> {
    let upload = read_upload(&mut multipart)
        .await?
        .ok_or(AppError::MissingFile)?;

    info!(
        "Evaluating resume '{}' ({} bytes)",
        upload.filename,
        upload.bytes.len()
    );

    let kind = DocumentKind::from_filename(&upload.filename)?;
    let resume_text = tokio::task::spawn_blocking(move || kind.extract(&upload.bytes))
        .await
        .map_err(anyhow::Error::from)??;
    debug!("Extracted {} chars of resume text", resume_text.len());

    let prompt = build_prompt(&resume_text);
    let feedback = state.llm.complete(REVIEW_SYSTEM, &prompt).await?;

    let tagged = tag_feedback(&feedback);
    info!(
        "Review complete: {} sections {:?}",
        tagged.len(),
        tagged.labels().collect::<Vec<_>>()
    );

    Ok(Json(tagged))
}
