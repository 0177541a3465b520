use async_trait::async_trait;
use shared::models::{Position, PositionCreate};
use sqlx::PgPool;

use crate::repository::{PositionRepository, RepoResult};

pub struct PgPositionRepository {
    pool: PgPool,
}

impl PgPositionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PositionRepository for PgPositionRepository {
    async fn find_all(&self) -> RepoResult<Vec<Position>> {
        let rows = sqlx::query_as("SELECT * FROM positions ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Position>> {
        let row = sqlx::query_as("SELECT * FROM positions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Position>> {
        let row = sqlx::query_as("SELECT * FROM positions WHERE lower(name) = lower($1) LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn search(&self, query: &str) -> RepoResult<Vec<Position>> {
        let rows = sqlx::query_as("SELECT * FROM positions WHERE name ILIKE $1 ORDER BY name")
            .bind(format!("%{query}%"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, data: &PositionCreate, now: i64) -> RepoResult<Position> {
        let row = sqlx::query_as(
            "INSERT INTO positions (name, created_at, updated_at) VALUES ($1, $2, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, position: &Position) -> RepoResult<bool> {
        let result = sqlx::query("UPDATE positions SET name = $1, updated_at = $2 WHERE id = $3")
            .bind(&position.name)
            .bind(position.updated_at)
            .bind(position.id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM positions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
