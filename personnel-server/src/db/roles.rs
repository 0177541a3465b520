use async_trait::async_trait;
use shared::models::{Role, RolePromotion};
use sqlx::PgPool;

use crate::repository::{RepoResult, RoleRepository};

pub struct PgRoleRepository {
    pool: PgPool,
}

impl PgRoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for PgRoleRepository {
    async fn find_all(&self) -> RepoResult<Vec<Role>> {
        let rows = sqlx::query_as("SELECT * FROM roles ORDER BY level, id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Role>> {
        let row = sqlx::query_as("SELECT * FROM roles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_promotion_edges(
        &self,
        promoter_role_id: &str,
    ) -> RepoResult<Vec<RolePromotion>> {
        let rows = sqlx::query_as(
            "SELECT promoter_role_id, from_role_id, to_role_id
             FROM role_promotions WHERE promoter_role_id = $1",
        )
        .bind(promoter_role_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
