//! Printable personnel sheets

use std::sync::Arc;

use shared::error::{AppError, ErrorCode};
use shared::models::EmployeeReport;
use uuid::Uuid;

use crate::error::ServiceResult;
use crate::policy::AuthorizationPolicy;
use crate::repository::{ReportRepository, Repositories, UnitRepository};

#[derive(Clone)]
pub struct ReportService {
    policy: AuthorizationPolicy,
    reports: Arc<dyn ReportRepository>,
    units: Arc<dyn UnitRepository>,
}

impl ReportService {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            policy: AuthorizationPolicy::new(
                repos.employees.clone(),
                repos.roles.clone(),
                repos.assignments.clone(),
            ),
            reports: repos.reports.clone(),
            units: repos.units.clone(),
        }
    }

    pub async fn all(&self, proposer: Uuid) -> ServiceResult<Vec<EmployeeReport>> {
        self.policy.authorize_directory(proposer, false).await?;
        Ok(self.reports.report_all().await?)
    }

    pub async fn by_nip(&self, proposer: Uuid, nip: &str) -> ServiceResult<EmployeeReport> {
        self.policy.authorize_directory(proposer, false).await?;
        self.reports.report_by_nip(nip).await?.ok_or_else(|| {
            AppError::new(ErrorCode::EmployeeNotFound)
                .with_detail("nip", nip)
                .into()
        })
    }

    pub async fn by_unit(&self, proposer: Uuid, unit_id: i64) -> ServiceResult<Vec<EmployeeReport>> {
        self.policy.authorize_directory(proposer, false).await?;
        if self.units.find_by_id(unit_id).await?.is_none() {
            return Err(AppError::new(ErrorCode::UnitNotFound).into());
        }
        Ok(self.reports.report_by_unit(unit_id).await?)
    }
}
