//! Employee assignment use cases
//!
//! Scope checks go through [`AuthorizationPolicy`]; referential existence is
//! checked before the ledger transaction starts.

use std::sync::Arc;

use shared::error::{AppError, ErrorCode};
use shared::models::{AssignmentKey, EmployeeAssignmentResponse};
use uuid::Uuid;

use crate::error::ServiceResult;
use crate::policy::AuthorizationPolicy;
use crate::repository::{
    AssignmentLedger, EmployeeRepository, PositionRepository, Repositories, UnitRepository,
};

#[derive(Clone)]
pub struct AssignmentService {
    policy: AuthorizationPolicy,
    ledger: Arc<dyn AssignmentLedger>,
    employees: Arc<dyn EmployeeRepository>,
    units: Arc<dyn UnitRepository>,
    positions: Arc<dyn PositionRepository>,
}

impl AssignmentService {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            policy: AuthorizationPolicy::new(
                repos.employees.clone(),
                repos.roles.clone(),
                repos.assignments.clone(),
            ),
            ledger: repos.assignments.clone(),
            employees: repos.employees.clone(),
            units: repos.units.clone(),
            positions: repos.positions.clone(),
        }
    }

    pub async fn assign(&self, proposer: Uuid, key: AssignmentKey) -> ServiceResult<()> {
        self.policy.authorize(proposer, key.unit_id).await?;

        if self.employees.find_by_id(key.employee_id).await?.is_none() {
            return Err(AppError::new(ErrorCode::EmployeeNotFound).into());
        }
        if self.units.find_by_id(key.unit_id).await?.is_none() {
            return Err(AppError::new(ErrorCode::UnitNotFound).into());
        }
        if self.positions.find_by_id(key.position_id).await?.is_none() {
            return Err(AppError::new(ErrorCode::PositionNotFound).into());
        }

        if let Err(e) = self.ledger.transactional_assign(key).await {
            tracing::error!(
                employee_id = %key.employee_id,
                unit_id = key.unit_id,
                position_id = key.position_id,
                error = %e,
                "Assignment transaction rolled back"
            );
            return Err(AppError::new(ErrorCode::AssignmentFailed).into());
        }

        tracing::info!(
            proposer = %proposer,
            employee_id = %key.employee_id,
            unit_id = key.unit_id,
            position_id = key.position_id,
            "Employee assigned"
        );
        Ok(())
    }

    pub async fn deactivate(&self, proposer: Uuid, key: AssignmentKey) -> ServiceResult<()> {
        self.policy.authorize(proposer, key.unit_id).await?;
        self.ledger.deactivate(key).await?;
        tracing::info!(
            proposer = %proposer,
            employee_id = %key.employee_id,
            unit_id = key.unit_id,
            position_id = key.position_id,
            "Assignment deactivated"
        );
        Ok(())
    }

    pub async fn list(&self, proposer: Uuid) -> ServiceResult<Vec<EmployeeAssignmentResponse>> {
        self.policy.require_global(proposer).await?;
        Ok(self.ledger.find_all().await?)
    }

    pub async fn get_by_composite(
        &self,
        proposer: Uuid,
        key: AssignmentKey,
    ) -> ServiceResult<EmployeeAssignmentResponse> {
        self.policy.authorize(proposer, key.unit_id).await?;
        self.ledger
            .find_by_composite_key(key)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::AssignmentNotFound).into())
    }

    /// Internal scope compares against the target employee's own unit.
    /// The proposer is vetted before the target is read.
    pub async fn get_by_employee(
        &self,
        proposer: Uuid,
        employee_id: Uuid,
    ) -> ServiceResult<EmployeeAssignmentResponse> {
        let scope = self.policy.scope(proposer).await?;
        let view = self
            .ledger
            .find_by_employee_id(employee_id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::AssignmentNotFound))?;
        scope.admit(view.unit_id)?;
        Ok(view)
    }

    pub async fn get_by_unit(
        &self,
        proposer: Uuid,
        unit_id: i64,
    ) -> ServiceResult<Vec<EmployeeAssignmentResponse>> {
        self.policy.authorize(proposer, unit_id).await?;
        if self.units.find_by_id(unit_id).await?.is_none() {
            return Err(AppError::new(ErrorCode::UnitNotFound).into());
        }
        Ok(self.ledger.find_by_unit_id(unit_id).await?)
    }
}
