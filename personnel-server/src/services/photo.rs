//! Profile pictures: validate → resize 200x200 → JPEG → blob store
//!
//! Stored at `pictureprofile/pp_{employee_id}.jpg`; uploading again overwrites.

use std::io::Cursor;
use std::sync::Arc;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use shared::error::{AppError, ErrorCode};
use uuid::Uuid;

use crate::error::ServiceResult;
use crate::policy::AuthorizationPolicy;
use crate::repository::{BlobStore, EmployeeRepository, Repositories};
use crate::util::now_millis;

/// Maximum upload size (5MB)
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

const PHOTO_SIZE: u32 = 200;
const JPEG_QUALITY: u8 = 90;
const SUPPORTED_FORMATS: &[&str] = &["jpg", "jpeg", "png"];

pub fn photo_key(employee_id: Uuid) -> String {
    format!("pictureprofile/pp_{employee_id}.jpg")
}

/// An uploaded file as read from the multipart body
pub struct Upload {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Check extension and size, decode, resize and re-encode as JPEG
pub fn process_image(upload: &Upload) -> Result<Vec<u8>, AppError> {
    if upload.data.is_empty() {
        return Err(AppError::new(ErrorCode::NoFileProvided));
    }
    if upload.data.len() > MAX_FILE_SIZE {
        return Err(AppError::new(ErrorCode::FileTooLarge)
            .with_detail("size", upload.data.len())
            .with_detail("max", MAX_FILE_SIZE));
    }

    let ext = std::path::Path::new(&upload.filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
        return Err(AppError::with_message(
            ErrorCode::UnsupportedFileFormat,
            format!("Unsupported format: {ext}. Supported: jpg, jpeg, png"),
        ));
    }

    let img = image::load_from_memory(&upload.data).map_err(|e| {
        AppError::with_message(ErrorCode::InvalidImageFile, format!("Invalid image: {e}"))
    })?;
    let resized = img.resize_exact(PHOTO_SIZE, PHOTO_SIZE, FilterType::Lanczos3);

    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut buffer), JPEG_QUALITY);
    resized.to_rgb8().write_with_encoder(encoder).map_err(|e| {
        tracing::error!(error = %e, "JPEG encoding failed");
        AppError::new(ErrorCode::ImageProcessingFailed)
    })?;
    Ok(buffer)
}

#[derive(Clone)]
pub struct PhotoService {
    policy: AuthorizationPolicy,
    employees: Arc<dyn EmployeeRepository>,
    blobs: Arc<dyn BlobStore>,
}

impl PhotoService {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            policy: AuthorizationPolicy::new(
                repos.employees.clone(),
                repos.roles.clone(),
                repos.assignments.clone(),
            ),
            employees: repos.employees.clone(),
            blobs: repos.blobs.clone(),
        }
    }

    /// Upload for the employee with `nip`: themself, or a proposer who may add employees
    pub async fn upload_for(
        &self,
        proposer: Uuid,
        nip: &str,
        upload: Upload,
    ) -> ServiceResult<String> {
        let target = self
            .employees
            .find_by_nip(nip)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound).with_detail("nip", nip))?;
        if target.id != proposer {
            self.policy.authorize_directory(proposer, true).await?;
        }
        self.store(target.id, upload).await
    }

    /// Upload for the authenticated employee
    pub async fn upload_own(&self, employee_id: Uuid, upload: Upload) -> ServiceResult<String> {
        if self.employees.find_by_id(employee_id).await?.is_none() {
            return Err(AppError::new(ErrorCode::EmployeeNotFound).into());
        }
        self.store(employee_id, upload).await
    }

    async fn store(&self, employee_id: Uuid, upload: Upload) -> ServiceResult<String> {
        let jpeg = tokio::task::spawn_blocking(move || process_image(&upload))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Image worker panicked");
                AppError::new(ErrorCode::ImageProcessingFailed)
            })??;

        let key = photo_key(employee_id);
        let url = self
            .blobs
            .put_object(&key, jpeg, "image/jpeg")
            .await
            .map_err(|e| {
                tracing::error!(employee_id = %employee_id, error = %e, "Photo upload failed");
                AppError::new(ErrorCode::StorageError)
            })?;

        self.employees
            .update_photo_url(employee_id, &url, now_millis())
            .await?;
        tracing::info!(employee_id = %employee_id, key = %key, "Profile picture updated");
        Ok(url)
    }
}
