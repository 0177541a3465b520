//! Database access layer
//!
//! PostgreSQL implementations of the repository traits, plus the S3 blob
//! store. Queries are built at runtime with `sqlx::query_as`.

pub mod assignments;
pub mod employees;
pub mod positions;
pub mod references;
pub mod reports;
pub mod roles;
pub mod s3;
pub mod units;

#[cfg(test)]
pub mod memory;

use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use sqlx::PgPool;

use crate::config::Config;
use crate::repository::Repositories;

impl Repositories {
    /// Wire every repository to the same pool and bucket
    pub fn postgres(pool: PgPool, s3: S3Client, config: &Config) -> Self {
        Self {
            employees: Arc::new(employees::PgEmployeeRepository::new(pool.clone())),
            roles: Arc::new(roles::PgRoleRepository::new(pool.clone())),
            units: Arc::new(units::PgUnitRepository::new(pool.clone())),
            positions: Arc::new(positions::PgPositionRepository::new(pool.clone())),
            references: Arc::new(references::PgReferenceRepository::new(pool.clone())),
            assignments: Arc::new(assignments::PgAssignmentLedger::new(pool.clone())),
            reports: Arc::new(reports::PgReportRepository::new(pool)),
            blobs: Arc::new(s3::S3BlobStore::new(s3, config)),
        }
    }
}
