use async_trait::async_trait;
use shared::models::{Unit, UnitCreate};
use sqlx::PgPool;

use crate::repository::{RepoResult, UnitRepository};

pub struct PgUnitRepository {
    pool: PgPool,
}

impl PgUnitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitRepository for PgUnitRepository {
    async fn find_all(&self) -> RepoResult<Vec<Unit>> {
        let rows = sqlx::query_as("SELECT * FROM units ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Unit>> {
        let row = sqlx::query_as("SELECT * FROM units WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn search(&self, query: &str) -> RepoResult<Vec<Unit>> {
        let rows = sqlx::query_as("SELECT * FROM units WHERE name ILIKE $1 ORDER BY name")
            .bind(format!("%{query}%"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, data: &UnitCreate, now: i64) -> RepoResult<Unit> {
        let row = sqlx::query_as(
            "INSERT INTO units (name, address, description, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.address)
        .bind(&data.description)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, unit: &Unit) -> RepoResult<bool> {
        let result = sqlx::query(
            "UPDATE units SET name = $1, address = $2, description = $3, updated_at = $4
             WHERE id = $5",
        )
        .bind(&unit.name)
        .bind(&unit.address)
        .bind(&unit.description)
        .bind(unit.updated_at)
        .bind(unit.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM units WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
