//! Grade, religion and echelon lookup tables

use std::sync::Arc;

use shared::error::{AppError, ErrorCode};
use shared::models::{Echelon, Grade, Religion, ReligionCreate};
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};
use crate::policy::AuthorizationPolicy;
use crate::repository::{ReferenceRepository, RepoError, Repositories};
use crate::util::now_millis;

fn required(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} is required"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Duplicate keys and references held by employees become domain conflicts
fn conflict(e: RepoError, exists: ErrorCode) -> ServiceError {
    match e {
        RepoError::Duplicate(_) => AppError::new(exists).into(),
        RepoError::InUse(_) => AppError::new(ErrorCode::ReferenceInUse).into(),
        other => other.into(),
    }
}

#[derive(Clone)]
pub struct ReferenceService {
    policy: AuthorizationPolicy,
    references: Arc<dyn ReferenceRepository>,
}

impl ReferenceService {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            policy: AuthorizationPolicy::new(
                repos.employees.clone(),
                repos.roles.clone(),
                repos.assignments.clone(),
            ),
            references: repos.references.clone(),
        }
    }

    // ── Grades ──

    pub async fn list_grades(&self) -> ServiceResult<Vec<Grade>> {
        Ok(self.references.list_grades().await?)
    }

    pub async fn get_grade(&self, id: i64) -> ServiceResult<Grade> {
        self.references
            .find_grade(id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::GradeNotFound).into())
    }

    pub async fn create_grade(&self, proposer: Uuid, code: &str) -> ServiceResult<Grade> {
        self.policy
            .require(proposer, |r| r.can_add_grade, "manage grades")
            .await?;
        required("code", code)?;
        self.references
            .create_grade(code.trim(), now_millis())
            .await
            .map_err(|e| conflict(e, ErrorCode::GradeExists))
    }

    pub async fn update_grade(&self, proposer: Uuid, id: i64, code: &str) -> ServiceResult<Grade> {
        self.policy
            .require(proposer, |r| r.can_add_grade, "manage grades")
            .await?;
        required("code", code)?;
        self.references
            .update_grade(id, code.trim(), now_millis())
            .await
            .map_err(|e| conflict(e, ErrorCode::GradeExists))?
            .ok_or_else(|| AppError::new(ErrorCode::GradeNotFound).into())
    }

    pub async fn delete_grade(&self, proposer: Uuid, id: i64) -> ServiceResult<()> {
        self.policy
            .require(proposer, |r| r.can_add_grade, "manage grades")
            .await?;
        let deleted = self
            .references
            .delete_grade(id)
            .await
            .map_err(|e| conflict(e, ErrorCode::GradeExists))?;
        if !deleted {
            return Err(AppError::new(ErrorCode::GradeNotFound).into());
        }
        Ok(())
    }

    // ── Religions ──

    pub async fn list_religions(&self) -> ServiceResult<Vec<Religion>> {
        Ok(self.references.list_religions().await?)
    }

    pub async fn get_religion(&self, id: &str) -> ServiceResult<Religion> {
        self.references
            .find_religion(id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::ReligionNotFound).into())
    }

    pub async fn create_religion(
        &self,
        proposer: Uuid,
        data: ReligionCreate,
    ) -> ServiceResult<Religion> {
        self.policy
            .require(proposer, |r| r.can_add_religion, "manage religions")
            .await?;
        if data.id.chars().count() != 3 {
            return Err(AppError::validation("Religion id must be 3 characters")
                .with_detail("field", "id")
                .into());
        }
        required("name", &data.name)?;
        self.references
            .create_religion(&data, now_millis())
            .await
            .map_err(|e| conflict(e, ErrorCode::ReligionExists))
    }

    pub async fn update_religion(
        &self,
        proposer: Uuid,
        id: &str,
        name: &str,
    ) -> ServiceResult<Religion> {
        self.policy
            .require(proposer, |r| r.can_add_religion, "manage religions")
            .await?;
        required("name", name)?;
        self.references
            .update_religion(id, name.trim(), now_millis())
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::ReligionNotFound).into())
    }

    pub async fn delete_religion(&self, proposer: Uuid, id: &str) -> ServiceResult<()> {
        self.policy
            .require(proposer, |r| r.can_add_religion, "manage religions")
            .await?;
        let deleted = self
            .references
            .delete_religion(id)
            .await
            .map_err(|e| conflict(e, ErrorCode::ReligionExists))?;
        if !deleted {
            return Err(AppError::new(ErrorCode::ReligionNotFound).into());
        }
        Ok(())
    }

    // ── Echelons ──

    pub async fn list_echelons(&self) -> ServiceResult<Vec<Echelon>> {
        Ok(self.references.list_echelons().await?)
    }

    pub async fn get_echelon(&self, id: i64) -> ServiceResult<Echelon> {
        self.references
            .find_echelon(id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::EchelonNotFound).into())
    }

    pub async fn create_echelon(&self, proposer: Uuid, code: &str) -> ServiceResult<Echelon> {
        self.policy
            .require(proposer, |r| r.can_add_echelon, "manage echelons")
            .await?;
        required("code", code)?;
        self.references
            .create_echelon(code.trim(), now_millis())
            .await
            .map_err(|e| conflict(e, ErrorCode::EchelonExists))
    }

    pub async fn update_echelon(
        &self,
        proposer: Uuid,
        id: i64,
        code: &str,
    ) -> ServiceResult<Echelon> {
        self.policy
            .require(proposer, |r| r.can_add_echelon, "manage echelons")
            .await?;
        required("code", code)?;
        self.references
            .update_echelon(id, code.trim(), now_millis())
            .await
            .map_err(|e| conflict(e, ErrorCode::EchelonExists))?
            .ok_or_else(|| AppError::new(ErrorCode::EchelonNotFound).into())
    }

    pub async fn delete_echelon(&self, proposer: Uuid, id: i64) -> ServiceResult<()> {
        self.policy
            .require(proposer, |r| r.can_add_echelon, "manage echelons")
            .await?;
        let deleted = self
            .references
            .delete_echelon(id)
            .await
            .map_err(|e| conflict(e, ErrorCode::EchelonExists))?;
        if !deleted {
            return Err(AppError::new(ErrorCode::EchelonNotFound).into());
        }
        Ok(())
    }
}
