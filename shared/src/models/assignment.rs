//! Employee assignment ledger models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One (employee, unit, position) row
///
/// The triple is the primary key. Reassignment toggles `is_active`; at most
/// one row per employee is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeeAssignment {
    pub employee_id: Uuid,
    pub unit_id: i64,
    pub position_id: i64,
    pub is_active: bool,
    pub assigned_at: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Assignment row joined with display names
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeeAssignmentResponse {
    pub employee_id: Uuid,
    pub employee_nip: String,
    pub employee_name: String,
    pub unit_id: i64,
    pub unit_name: String,
    pub position_id: i64,
    pub position_name: String,
    pub is_active: bool,
    pub assigned_at: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Assign / deactivate payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AssignmentKey {
    pub employee_id: Uuid,
    pub unit_id: i64,
    pub position_id: i64,
}
