use crate::config::AppConfig;
use crate::error::ApiError;
use crate::services::data_sources::parse_upload;
use crate::session_controller::state::SessionsState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::responses::ValidateResponse;
use common::session::controller;
use futures_util::StreamExt;
use log::{info, warn};

struct UploadedFile {
    filename: String,
    bytes: Vec<u8>,
}

/// HTTP handler wrapper that converts the internal result to an `HttpResponse`.
///
/// - On success: returns `200 OK` with a `ValidateResponse`.
/// - On failure: returns the `ApiError` status with an `ErrorResponse` body.
pub(crate) async fn process(
    session_id: web::Path<String>,
    state: web::Data<SessionsState>,
    config: web::Data<AppConfig>,
    payload: Multipart,
) -> impl Responder {
    match validate_upload(&session_id, &state, config.max_upload_bytes, payload).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            warn!("Validation failed for session {}: {}", session_id, e);
            e.error_response()
        }
    }
}

/// Reads the uploaded table, validates its `telefone` column and applies the
/// `validate` action to the session.
///
/// Upload and parse errors are raised before the session is locked, so they
/// never change its state.
async fn validate_upload(
    session_id: &str,
    state: &SessionsState,
    max_upload_bytes: usize,
    payload: Multipart,
) -> Result<ValidateResponse, ApiError> {
    state.get(session_id).await?;

    let file = read_file_field(payload, max_upload_bytes).await?;
    let table = parse_upload(&file.filename, &file.bytes)?;

    let response = state
        .update(session_id, |current| {
            let transition = controller::validate(current, &table)?;
            let response = ValidateResponse {
                screen: transition.state.current_screen(),
                report: transition.output.report,
                warning: transition.output.warning,
            };
            Ok((transition.state, response))
        })
        .await?;

    info!(
        "Session {}: '{}' validated, {} rows, {} valid, {} invalid, now on {}",
        session_id,
        file.filename,
        response.report.total,
        response.report.valid_count(),
        response.report.invalid_count(),
        response.screen
    );
    Ok(response)
}

/// Collects the `file` field of the multipart payload, enforcing `limit` bytes.
/// Other fields are skipped.
async fn read_file_field(mut payload: Multipart, limit: usize) -> Result<UploadedFile, ApiError> {
    let mut uploaded: Option<UploadedFile> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| ApiError::Multipart(e.to_string()))?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        if name.as_deref() != Some("file") {
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| ApiError::Multipart(e.to_string()))?;
            if bytes.len() + chunk.len() > limit {
                return Err(ApiError::UploadTooLarge(limit));
            }
            bytes.extend_from_slice(&chunk);
        }

        // Browsers send an empty, unnamed part when no file was picked.
        if filename.is_empty() && bytes.is_empty() {
            continue;
        }
        uploaded = Some(UploadedFile { filename, bytes });
    }

    uploaded.ok_or(ApiError::MissingFile)
}
