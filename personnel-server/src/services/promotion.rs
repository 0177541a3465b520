//! Role promotion
//!
//! A change is legal when the target's current role and the requested role
//! each appear, as from- or to-role, in some edge the proposer's role may
//! apply. The two lookups are independent: they need not hit the same edge.

use std::sync::Arc;

use shared::error::{AppError, ErrorCode};
use shared::models::{Employee, RolePromotion};
use uuid::Uuid;

use crate::error::ServiceResult;
use crate::repository::{EmployeeRepository, Repositories, RoleRepository};
use crate::util::now_millis;

/// Membership test over the proposer's edges
pub fn is_legal(edges: &[RolePromotion], current_role: &str, new_role: &str) -> bool {
    edges.iter().any(|e| e.touches(current_role)) && edges.iter().any(|e| e.touches(new_role))
}

#[derive(Clone)]
pub struct PromotionService {
    employees: Arc<dyn EmployeeRepository>,
    roles: Arc<dyn RoleRepository>,
}

impl PromotionService {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            employees: repos.employees.clone(),
            roles: repos.roles.clone(),
        }
    }

    /// Move the employee identified by `target_nip` to `new_role_id`
    pub async fn promote(
        &self,
        proposer_id: Uuid,
        target_nip: &str,
        new_role_id: &str,
    ) -> ServiceResult<Employee> {
        let proposer = self
            .employees
            .find_by_id(proposer_id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;
        let mut target = self
            .employees
            .find_by_nip(target_nip)
            .await?
            .ok_or_else(|| {
                AppError::new(ErrorCode::EmployeeNotFound).with_detail("nip", target_nip)
            })?;

        if proposer.id == target.id {
            tracing::warn!(proposer = %proposer.id, "Self-promotion rejected");
            return Err(AppError::new(ErrorCode::SelfPromotion).into());
        }
        if target.role_id == new_role_id {
            return Err(AppError::new(ErrorCode::RoleUnchanged)
                .with_detail("role_id", new_role_id)
                .into());
        }

        // Lookup failure counts as no edges
        let edges = match self.roles.find_promotion_edges(&proposer.role_id).await {
            Ok(edges) => edges,
            Err(e) => {
                tracing::warn!(promoter_role = %proposer.role_id, error = %e, "Promotion edge lookup failed");
                Vec::new()
            }
        };

        if !is_legal(&edges, &target.role_id, new_role_id) {
            tracing::warn!(
                proposer = %proposer.id,
                target = %target.id,
                from = %target.role_id,
                to = %new_role_id,
                "Promotion not allowed"
            );
            return Err(AppError::new(ErrorCode::PromotionNotAllowed).into());
        }

        let now = now_millis();
        if !self.employees.update_role(target.id, new_role_id, now).await? {
            return Err(AppError::new(ErrorCode::EmployeeNotFound).into());
        }

        tracing::info!(
            proposer = %proposer.id,
            target = %target.id,
            from = %target.role_id,
            to = %new_role_id,
            "Employee role changed"
        );

        target.role_id = new_role_id.to_string();
        target.updated_at = now;
        target.password_hash.clear();
        Ok(target)
    }
}
