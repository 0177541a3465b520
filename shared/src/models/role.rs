//! Role Model

use serde::{Deserialize, Serialize};

/// Role entity: a bundle of capability flags
///
/// `level` is informational only; legal role transitions come from
/// [`RolePromotion`] edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Role {
    pub id: String,
    pub name: String,
    pub level: i32,
    pub description: String,
    pub can_add_role: bool,
    pub can_add_employee: bool,
    pub can_add_unit: bool,
    pub can_add_position: bool,
    pub can_add_echelon: bool,
    pub can_add_religion: bool,
    pub can_add_grade: bool,
    pub can_assign_employee_internal: bool,
    pub can_assign_employee_global: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Role {
    /// May read and update the employee directory
    pub fn can_read_directory(&self) -> bool {
        self.can_add_employee || self.can_assign_employee_internal || self.can_assign_employee_global
    }
}

/// Promotion graph edge
///
/// An actor holding `promoter_role_id` may move a subject from `from_role_id`
/// to `to_role_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RolePromotion {
    pub promoter_role_id: String,
    pub from_role_id: String,
    pub to_role_id: String,
}

impl RolePromotion {
    pub fn new(promoter: &str, from: &str, to: &str) -> Self {
        Self {
            promoter_role_id: promoter.to_string(),
            from_role_id: from.to_string(),
            to_role_id: to.to_string(),
        }
    }

    /// Role appears on either end of this edge
    pub fn touches(&self, role_id: &str) -> bool {
        self.from_role_id == role_id || self.to_role_id == role_id
    }
}
