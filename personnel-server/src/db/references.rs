use async_trait::async_trait;
use shared::models::{Echelon, Grade, Religion, ReligionCreate};
use sqlx::PgPool;

use crate::repository::{ReferenceRepository, RepoResult};

pub struct PgReferenceRepository {
    pool: PgPool,
}

impl PgReferenceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferenceRepository for PgReferenceRepository {
    // ── Grades ──

    async fn list_grades(&self) -> RepoResult<Vec<Grade>> {
        let rows = sqlx::query_as("SELECT * FROM grades ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_grade(&self, id: i64) -> RepoResult<Option<Grade>> {
        let row = sqlx::query_as("SELECT * FROM grades WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create_grade(&self, code: &str, now: i64) -> RepoResult<Grade> {
        let row = sqlx::query_as(
            "INSERT INTO grades (code, created_at, updated_at) VALUES ($1, $2, $2) RETURNING *",
        )
        .bind(code)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_grade(&self, id: i64, code: &str, now: i64) -> RepoResult<Option<Grade>> {
        let row = sqlx::query_as(
            "UPDATE grades SET code = $1, updated_at = $2 WHERE id = $3 RETURNING *",
        )
        .bind(code)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_grade(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM grades WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ── Religions ──

    async fn list_religions(&self) -> RepoResult<Vec<Religion>> {
        let rows = sqlx::query_as("SELECT * FROM religions ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_religion(&self, id: &str) -> RepoResult<Option<Religion>> {
        let row = sqlx::query_as("SELECT * FROM religions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create_religion(&self, data: &ReligionCreate, now: i64) -> RepoResult<Religion> {
        let row = sqlx::query_as(
            "INSERT INTO religions (id, name, created_at, updated_at)
             VALUES ($1, $2, $3, $3) RETURNING *",
        )
        .bind(&data.id)
        .bind(&data.name)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_religion(
        &self,
        id: &str,
        name: &str,
        now: i64,
    ) -> RepoResult<Option<Religion>> {
        let row = sqlx::query_as(
            "UPDATE religions SET name = $1, updated_at = $2 WHERE id = $3 RETURNING *",
        )
        .bind(name)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_religion(&self, id: &str) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM religions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ── Echelons ──

    async fn list_echelons(&self) -> RepoResult<Vec<Echelon>> {
        let rows = sqlx::query_as("SELECT * FROM echelons ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_echelon(&self, id: i64) -> RepoResult<Option<Echelon>> {
        let row = sqlx::query_as("SELECT * FROM echelons WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create_echelon(&self, code: &str, now: i64) -> RepoResult<Echelon> {
        let row = sqlx::query_as(
            "INSERT INTO echelons (code, created_at, updated_at) VALUES ($1, $2, $2) RETURNING *",
        )
        .bind(code)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_echelon(&self, id: i64, code: &str, now: i64) -> RepoResult<Option<Echelon>> {
        let row = sqlx::query_as(
            "UPDATE echelons SET code = $1, updated_at = $2 WHERE id = $3 RETURNING *",
        )
        .bind(code)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_echelon(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM echelons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
