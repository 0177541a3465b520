use async_trait::async_trait;
use shared::models::Employee;
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::{EmployeeRepository, RepoResult};

pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let rows = sqlx::query_as("SELECT * FROM employees ORDER BY full_name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Employee>> {
        let row = sqlx::query_as("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_nip(&self, nip: &str) -> RepoResult<Option<Employee>> {
        let row = sqlx::query_as("SELECT * FROM employees WHERE nip = $1")
            .bind(nip)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn search(&self, query: &str) -> RepoResult<Vec<Employee>> {
        let pattern = format!("%{}%", query.to_lowercase());
        let prefix = format!("{query}%");
        let rows = sqlx::query_as(
            "SELECT * FROM employees
             WHERE lower(full_name) LIKE $1 OR nip LIKE $2
             ORDER BY full_name",
        )
        .bind(pattern)
        .bind(prefix)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_unit(&self, unit_id: i64) -> RepoResult<Vec<Employee>> {
        let rows = sqlx::query_as(
            "SELECT e.* FROM employees e
             JOIN employee_assignments a ON a.employee_id = e.id AND a.is_active
             WHERE a.unit_id = $1
             ORDER BY e.full_name",
        )
        .bind(unit_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create(&self, e: &Employee) -> RepoResult<()> {
        sqlx::query(
            "INSERT INTO employees (
                id, role_id, nip, password_hash, full_name, place_of_birth, date_of_birth,
                gender, phone_number, photo_url, address, npwp, grade_id, religion_id,
                echelon_id, created_at, updated_at
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)",
        )
        .bind(e.id)
        .bind(&e.role_id)
        .bind(&e.nip)
        .bind(&e.password_hash)
        .bind(&e.full_name)
        .bind(&e.place_of_birth)
        .bind(e.date_of_birth)
        .bind(&e.gender)
        .bind(&e.phone_number)
        .bind(&e.photo_url)
        .bind(&e.address)
        .bind(&e.npwp)
        .bind(e.grade_id)
        .bind(&e.religion_id)
        .bind(e.echelon_id)
        .bind(e.created_at)
        .bind(e.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_profile(&self, e: &Employee) -> RepoResult<bool> {
        let result = sqlx::query(
            "UPDATE employees SET
                full_name = $1, place_of_birth = $2, date_of_birth = $3, gender = $4,
                phone_number = $5, address = $6, npwp = $7, grade_id = $8,
                religion_id = $9, echelon_id = $10, updated_at = $11
             WHERE id = $12",
        )
        .bind(&e.full_name)
        .bind(&e.place_of_birth)
        .bind(e.date_of_birth)
        .bind(&e.gender)
        .bind(&e.phone_number)
        .bind(&e.address)
        .bind(&e.npwp)
        .bind(e.grade_id)
        .bind(&e.religion_id)
        .bind(e.echelon_id)
        .bind(e.updated_at)
        .bind(e.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn update_role(&self, id: Uuid, role_id: &str, now: i64) -> RepoResult<bool> {
        let result = sqlx::query("UPDATE employees SET role_id = $1, updated_at = $2 WHERE id = $3")
            .bind(role_id)
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn update_photo_url(&self, id: Uuid, url: &str, now: i64) -> RepoResult<bool> {
        let result =
            sqlx::query("UPDATE employees SET photo_url = $1, updated_at = $2 WHERE id = $3")
                .bind(url)
                .bind(now)
                .bind(id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
