use async_trait::async_trait;
use shared::models::EmployeeReport;
use sqlx::PgPool;

use crate::repository::{ReportRepository, RepoResult};

/// Only the active assignment contributes unit and position.
const SELECT_REPORT: &str = "SELECT e.nip, e.full_name, e.place_of_birth, e.address, e.date_of_birth,
        e.gender, g.code AS grade, ec.code AS echelon,
        COALESCE(p.name, '-') AS position,
        COALESCE(u.address, '-') AS work_location,
        r.name AS religion,
        COALESCE(u.name, '-') AS unit,
        e.phone_number,
        COALESCE(NULLIF(e.npwp, ''), '-') AS npwp,
        e.photo_url
     FROM employees e
     JOIN grades g ON g.id = e.grade_id
     JOIN echelons ec ON ec.id = e.echelon_id
     JOIN religions r ON r.id = e.religion_id
     LEFT JOIN employee_assignments a ON a.employee_id = e.id AND a.is_active
     LEFT JOIN units u ON u.id = a.unit_id
     LEFT JOIN positions p ON p.id = a.position_id";

pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn report_all(&self) -> RepoResult<Vec<EmployeeReport>> {
        let sql = format!("{SELECT_REPORT} ORDER BY e.full_name");
        let rows = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn report_by_nip(&self, nip: &str) -> RepoResult<Option<EmployeeReport>> {
        let sql = format!("{SELECT_REPORT} WHERE e.nip = $1");
        let row = sqlx::query_as(&sql)
            .bind(nip)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn report_by_unit(&self, unit_id: i64) -> RepoResult<Vec<EmployeeReport>> {
        let sql = format!("{SELECT_REPORT} WHERE a.unit_id = $1 ORDER BY e.full_name");
        let rows = sqlx::query_as(&sql)
            .bind(unit_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
