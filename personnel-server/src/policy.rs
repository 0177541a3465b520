//! Assignment scope authorization
//!
//! Every assignment operation runs the same three steps:
//!
//! 1. resolve the proposer's role (`EmployeeNotFound` / `RoleNotFound`)
//! 2. resolve the proposer's home unit from their active assignment, else the
//!    most recent one (`NoHomeAssignment` when there is none or the lookup
//!    fails)
//! 3. apply [`decide`]
//!
//! Listing every assignment needs the global capability and skips step 2.
//! Lookups keyed by a target employee run steps 1 and 2 through [`Scope`]
//! before the target is read, then finish with [`Scope::admit`].

use std::sync::Arc;

use shared::error::{AppError, ErrorCode};
use shared::models::Role;
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};
use crate::repository::{AssignmentLedger, EmployeeRepository, RoleRepository};

/// Outcome of the scope decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// Internal capability only, target is another unit
    OutOfScope,
    /// Neither capability held
    Denied,
}

/// Scope decision table
///
/// | capability         | target == home | result     |
/// |--------------------|----------------|------------|
/// | global             | any            | Allow      |
/// | internal only      | true           | Allow      |
/// | internal only      | false          | OutOfScope |
/// | neither            | any            | Denied     |
pub fn decide(role: &Role, home_unit: i64, target_unit: i64) -> Decision {
    if role.can_assign_employee_global {
        Decision::Allow
    } else if role.can_assign_employee_internal {
        if home_unit == target_unit {
            Decision::Allow
        } else {
            Decision::OutOfScope
        }
    } else {
        Decision::Denied
    }
}

#[derive(Clone)]
pub struct AuthorizationPolicy {
    employees: Arc<dyn EmployeeRepository>,
    roles: Arc<dyn RoleRepository>,
    assignments: Arc<dyn AssignmentLedger>,
}

impl AuthorizationPolicy {
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        roles: Arc<dyn RoleRepository>,
        assignments: Arc<dyn AssignmentLedger>,
    ) -> Self {
        Self {
            employees,
            roles,
            assignments,
        }
    }

    /// Role of the proposer; distinguishes a missing employee from a missing role
    pub async fn resolve_role(&self, proposer: Uuid) -> ServiceResult<Role> {
        let employee = self
            .employees
            .find_by_id(proposer)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;
        self.roles
            .find_by_id(&employee.role_id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::RoleNotFound).into())
    }

    /// Unit of the proposer's active assignment, else their most recent one
    pub async fn home_unit(&self, proposer: Uuid) -> ServiceResult<i64> {
        match self.assignments.find_by_employee_id(proposer).await {
            Ok(Some(view)) => Ok(view.unit_id),
            Ok(None) => Err(AppError::new(ErrorCode::NoHomeAssignment).into()),
            Err(e) => {
                tracing::warn!(proposer = %proposer, error = %e, "Home unit lookup failed");
                Err(AppError::new(ErrorCode::NoHomeAssignment).into())
            }
        }
    }

    /// Resolve role and home unit, rejecting a proposer without either
    /// assignment capability before any target is looked at
    pub async fn scope(&self, proposer: Uuid) -> ServiceResult<Scope> {
        let role = self.resolve_role(proposer).await?;
        let home_unit = self.home_unit(proposer).await?;
        let scope = Scope {
            proposer,
            role,
            home_unit,
        };
        if !scope.role.can_assign_employee_internal && !scope.role.can_assign_employee_global {
            return Err(scope.denied());
        }
        Ok(scope)
    }

    /// Allow the proposer to act on `target_unit`, returning their role
    pub async fn authorize(&self, proposer: Uuid, target_unit: i64) -> ServiceResult<Role> {
        let scope = self.scope(proposer).await?;
        scope.admit(target_unit)?;
        Ok(scope.role)
    }

    /// Global capability, no home unit needed
    pub async fn require_global(&self, proposer: Uuid) -> ServiceResult<Role> {
        self.require(proposer, |r| r.can_assign_employee_global, "assign employees globally")
            .await
    }

    /// Employee directory gate: `can_add_employee` when `require_add`,
    /// otherwise any employee-management capability.
    pub async fn authorize_directory(&self, proposer: Uuid, require_add: bool) -> ServiceResult<Role> {
        if require_add {
            self.require(proposer, |r| r.can_add_employee, "add employees").await
        } else {
            self.require(proposer, Role::can_read_directory, "read the employee directory")
                .await
        }
    }

    /// Proposer's role must satisfy `capability`
    pub async fn require(
        &self,
        proposer: Uuid,
        capability: impl Fn(&Role) -> bool,
        action: &str,
    ) -> ServiceResult<Role> {
        let role = self.resolve_role(proposer).await?;
        if capability(&role) {
            Ok(role)
        } else {
            tracing::warn!(proposer = %proposer, role = %role.id, action, "Capability missing");
            Err(AppError::permission_denied(format!("Role {} cannot {action}", role.id)).into())
        }
    }
}

/// Proposer's resolved role and home unit
pub struct Scope {
    proposer: Uuid,
    pub role: Role,
    pub home_unit: i64,
}

impl Scope {
    /// Apply [`decide`] to `target_unit`
    pub fn admit(&self, target_unit: i64) -> ServiceResult<()> {
        match decide(&self.role, self.home_unit, target_unit) {
            Decision::Allow => Ok(()),
            Decision::OutOfScope => {
                tracing::warn!(
                    proposer = %self.proposer,
                    home_unit = self.home_unit,
                    target_unit,
                    "Assignment outside proposer's unit denied"
                );
                Err(AppError::new(ErrorCode::OutOfScope)
                    .with_detail("target_unit", target_unit)
                    .into())
            }
            Decision::Denied => Err(self.denied()),
        }
    }

    fn denied(&self) -> ServiceError {
        tracing::warn!(proposer = %self.proposer, role = %self.role.id, "Assignment capability missing");
        AppError::permission_denied("Role cannot manage assignments").into()
    }
}
