//! Repository capabilities
//!
//! One object-safe trait per entity. Services hold them as `Arc<dyn Trait>`;
//! the PostgreSQL implementations live in [`crate::db`].

use std::sync::Arc;

use async_trait::async_trait;
use shared::models::{
    AssignmentKey, Echelon, Employee, EmployeeAssignmentResponse, EmployeeReport, Grade, Position,
    PositionCreate, Religion, ReligionCreate, Role, RolePromotion, Unit, UnitCreate,
};
use thiserror::Error;
use uuid::Uuid;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Still referenced: {0}")]
    InUse(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or_default().to_string();
            if db_err.is_unique_violation() {
                return RepoError::Duplicate(constraint);
            }
            if db_err.is_foreign_key_violation() {
                return RepoError::InUse(constraint);
            }
        }
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Employee>>;
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Employee>>;
    async fn find_by_nip(&self, nip: &str) -> RepoResult<Option<Employee>>;
    /// Case-insensitive substring match on full name or NIP prefix
    async fn search(&self, query: &str) -> RepoResult<Vec<Employee>>;
    /// Employees whose active assignment is in `unit_id`
    async fn find_by_unit(&self, unit_id: i64) -> RepoResult<Vec<Employee>>;
    async fn create(&self, employee: &Employee) -> RepoResult<()>;
    /// Persist every profile column except role, NIP and password
    async fn update_profile(&self, employee: &Employee) -> RepoResult<bool>;
    async fn update_role(&self, id: Uuid, role_id: &str, now: i64) -> RepoResult<bool>;
    async fn update_photo_url(&self, id: Uuid, url: &str, now: i64) -> RepoResult<bool>;
}

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Role>>;
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Role>>;
    /// Edges a holder of `promoter_role_id` may apply
    async fn find_promotion_edges(&self, promoter_role_id: &str)
    -> RepoResult<Vec<RolePromotion>>;
}

#[async_trait]
pub trait UnitRepository: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Unit>>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Unit>>;
    async fn search(&self, query: &str) -> RepoResult<Vec<Unit>>;
    async fn create(&self, data: &UnitCreate, now: i64) -> RepoResult<Unit>;
    async fn update(&self, unit: &Unit) -> RepoResult<bool>;
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

#[async_trait]
pub trait PositionRepository: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Position>>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Position>>;
    /// Exact, case-insensitive name lookup
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Position>>;
    async fn search(&self, query: &str) -> RepoResult<Vec<Position>>;
    async fn create(&self, data: &PositionCreate, now: i64) -> RepoResult<Position>;
    async fn update(&self, position: &Position) -> RepoResult<bool>;
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

/// Grades, religions and echelons
#[async_trait]
pub trait ReferenceRepository: Send + Sync {
    async fn list_grades(&self) -> RepoResult<Vec<Grade>>;
    async fn find_grade(&self, id: i64) -> RepoResult<Option<Grade>>;
    async fn create_grade(&self, code: &str, now: i64) -> RepoResult<Grade>;
    async fn update_grade(&self, id: i64, code: &str, now: i64) -> RepoResult<Option<Grade>>;
    async fn delete_grade(&self, id: i64) -> RepoResult<bool>;

    async fn list_religions(&self) -> RepoResult<Vec<Religion>>;
    async fn find_religion(&self, id: &str) -> RepoResult<Option<Religion>>;
    async fn create_religion(&self, data: &ReligionCreate, now: i64) -> RepoResult<Religion>;
    async fn update_religion(&self, id: &str, name: &str, now: i64)
    -> RepoResult<Option<Religion>>;
    async fn delete_religion(&self, id: &str) -> RepoResult<bool>;

    async fn list_echelons(&self) -> RepoResult<Vec<Echelon>>;
    async fn find_echelon(&self, id: i64) -> RepoResult<Option<Echelon>>;
    async fn create_echelon(&self, code: &str, now: i64) -> RepoResult<Echelon>;
    async fn update_echelon(&self, id: i64, code: &str, now: i64) -> RepoResult<Option<Echelon>>;
    async fn delete_echelon(&self, id: i64) -> RepoResult<bool>;
}

/// Sole writer of `employee_assignments`
#[async_trait]
pub trait AssignmentLedger: Send + Sync {
    /// Deactivate every active row of the employee, then reactivate the
    /// requested triple or insert it. All or nothing.
    async fn transactional_assign(&self, key: AssignmentKey) -> RepoResult<()>;
    /// Soft-deactivate one triple. Missing or already inactive rows are not an error.
    async fn deactivate(&self, key: AssignmentKey) -> RepoResult<()>;
    async fn find_all(&self) -> RepoResult<Vec<EmployeeAssignmentResponse>>;
    /// Active row of the employee, else the most recently assigned one
    async fn find_by_employee_id(
        &self,
        employee_id: Uuid,
    ) -> RepoResult<Option<EmployeeAssignmentResponse>>;
    async fn find_by_unit_id(&self, unit_id: i64) -> RepoResult<Vec<EmployeeAssignmentResponse>>;
    async fn find_by_composite_key(
        &self,
        key: AssignmentKey,
    ) -> RepoResult<Option<EmployeeAssignmentResponse>>;
}

/// Denormalized personnel sheets
#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn report_all(&self) -> RepoResult<Vec<EmployeeReport>>;
    async fn report_by_nip(&self, nip: &str) -> RepoResult<Option<EmployeeReport>>;
    async fn report_by_unit(&self, unit_id: i64) -> RepoResult<Vec<EmployeeReport>>;
}

/// Object storage for profile pictures
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `bytes` under `key` and return the public URL
    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, BoxError>;
}

/// Every repository the services need, behind trait objects
#[derive(Clone)]
pub struct Repositories {
    pub employees: Arc<dyn EmployeeRepository>,
    pub roles: Arc<dyn RoleRepository>,
    pub units: Arc<dyn UnitRepository>,
    pub positions: Arc<dyn PositionRepository>,
    pub references: Arc<dyn ReferenceRepository>,
    pub assignments: Arc<dyn AssignmentLedger>,
    pub reports: Arc<dyn ReportRepository>,
    pub blobs: Arc<dyn BlobStore>,
}
