//! PostgreSQL assignment ledger
//!
//! `transactional_assign` locks the employee row first so that concurrent
//! assignments of the same employee run one after another. Without the lock
//! two transactions could both miss the reactivation and both insert.
//! The timestamp is read after the lock so a later holder never stamps an
//! older `assigned_at` than the holder before it.

use async_trait::async_trait;
use shared::models::{AssignmentKey, EmployeeAssignmentResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::{AssignmentLedger, RepoError, RepoResult};
use crate::util::now_millis;

const SELECT_VIEW: &str = "SELECT a.employee_id, e.nip AS employee_nip, e.full_name AS employee_name,
        a.unit_id, u.name AS unit_name, a.position_id, p.name AS position_name,
        a.is_active, a.assigned_at, a.created_at, a.updated_at
     FROM employee_assignments a
     JOIN employees e ON e.id = a.employee_id
     JOIN units u ON u.id = a.unit_id
     JOIN positions p ON p.id = a.position_id";

pub struct PgAssignmentLedger {
    pool: PgPool,
}

impl PgAssignmentLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentLedger for PgAssignmentLedger {
    async fn transactional_assign(&self, key: AssignmentKey) -> RepoResult<()> {
        let mut tx = self.pool.begin().await?;

        let locked: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM employees WHERE id = $1 FOR UPDATE")
                .bind(key.employee_id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Err(RepoError::Database(format!(
                "employee {} vanished before assignment",
                key.employee_id
            )));
        }
        let now = now_millis();

        sqlx::query(
            "UPDATE employee_assignments SET is_active = FALSE, updated_at = $2
             WHERE employee_id = $1 AND is_active",
        )
        .bind(key.employee_id)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let reactivated = sqlx::query(
            "UPDATE employee_assignments
             SET is_active = TRUE, assigned_at = $4, updated_at = $4
             WHERE employee_id = $1 AND unit_id = $2 AND position_id = $3",
        )
        .bind(key.employee_id)
        .bind(key.unit_id)
        .bind(key.position_id)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        if reactivated.rows_affected() == 0 {
            sqlx::query(
                "INSERT INTO employee_assignments
                    (employee_id, unit_id, position_id, is_active, assigned_at, created_at, updated_at)
                 VALUES ($1, $2, $3, TRUE, $4, $4, $4)",
            )
            .bind(key.employee_id)
            .bind(key.unit_id)
            .bind(key.position_id)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn deactivate(&self, key: AssignmentKey) -> RepoResult<()> {
        sqlx::query(
            "UPDATE employee_assignments SET is_active = FALSE, updated_at = $4
             WHERE employee_id = $1 AND unit_id = $2 AND position_id = $3",
        )
        .bind(key.employee_id)
        .bind(key.unit_id)
        .bind(key.position_id)
        .bind(now_millis())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_all(&self) -> RepoResult<Vec<EmployeeAssignmentResponse>> {
        let sql = format!("{SELECT_VIEW} ORDER BY a.assigned_at DESC");
        let rows = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_employee_id(
        &self,
        employee_id: Uuid,
    ) -> RepoResult<Option<EmployeeAssignmentResponse>> {
        let sql = format!(
            "{SELECT_VIEW} WHERE a.employee_id = $1
             ORDER BY a.is_active DESC, a.assigned_at DESC LIMIT 1"
        );
        let row = sqlx::query_as(&sql)
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_unit_id(&self, unit_id: i64) -> RepoResult<Vec<EmployeeAssignmentResponse>> {
        let sql = format!("{SELECT_VIEW} WHERE a.unit_id = $1 ORDER BY a.assigned_at DESC");
        let rows = sqlx::query_as(&sql)
            .bind(unit_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_composite_key(
        &self,
        key: AssignmentKey,
    ) -> RepoResult<Option<EmployeeAssignmentResponse>> {
        let sql = format!(
            "{SELECT_VIEW} WHERE a.employee_id = $1 AND a.unit_id = $2 AND a.position_id = $3
             ORDER BY a.is_active DESC, a.assigned_at DESC LIMIT 1"
        );
        let row = sqlx::query_as(&sql)
            .bind(key.employee_id)
            .bind(key.unit_id)
            .bind(key.position_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
