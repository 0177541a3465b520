//! Self-service profile of the authenticated employee

use shared::error::{AppError, ErrorCode};
use shared::models::{Employee, EmployeeUpdate};
use uuid::Uuid;

use crate::error::ServiceResult;
use crate::services::employee::EmployeeService;
use crate::services::photo::{PhotoService, Upload};

#[derive(Clone)]
pub struct MeService {
    directory: EmployeeService,
    photos: PhotoService,
}

impl MeService {
    pub fn new(directory: EmployeeService, photos: PhotoService) -> Self {
        Self { directory, photos }
    }

    pub async fn get(&self, employee_id: Uuid) -> ServiceResult<Employee> {
        self.directory
            .find_by_id(employee_id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound).into())
    }

    /// Same lenient rules as a directory update; the role stays untouched
    pub async fn update(&self, employee_id: Uuid, patch: EmployeeUpdate) -> ServiceResult<Employee> {
        let mut employee = self.get(employee_id).await?;
        self.directory.save_patch(&mut employee, &patch).await?;
        tracing::info!(employee_id = %employee_id, "Own profile updated");
        Ok(employee)
    }

    pub async fn upload_photo(&self, employee_id: Uuid, upload: Upload) -> ServiceResult<String> {
        self.photos.upload_own(employee_id, upload).await
    }
}
