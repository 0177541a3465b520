//! Multipart photo extraction

use axum::extract::Multipart;
use shared::error::{AppError, ErrorCode};

use crate::services::photo::Upload;

/// Read the `file` field of a multipart body
pub async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::with_message(ErrorCode::InvalidRequest, format!("Multipart error: {e}"))
    })? {
        let name = field.name().map(|s| s.to_string());
        if name.as_deref() == Some("file") || name.as_deref() == Some("") {
            let filename = field.file_name().map(|s| s.to_string()).unwrap_or_default();
            let data = field
                .bytes()
                .await
                .map_err(|e| {
                    AppError::with_message(ErrorCode::InvalidRequest, format!("Read error: {e}"))
                })?
                .to_vec();
            return Ok(Upload { filename, data });
        }
    }
    Err(AppError::new(ErrorCode::NoFileProvided))
}
