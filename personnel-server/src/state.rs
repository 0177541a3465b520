//! Application state for personnel-server

use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::{JwtConfig, JwtService};
use crate::auth::rate_limit::{RateLimiter, TokenBucket};
use crate::config::Config;
use crate::db::s3::S3BlobStore;
use crate::repository::Repositories;
use crate::services::Services;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Use-case services
    pub services: Services,
    /// Access/refresh token service
    pub jwt: Arc<JwtService>,
    /// Rate limiter for the login route
    pub rate_limiter: RateLimiter,
    /// Process-wide request limiter
    pub global_limiter: TokenBucket,
}

impl AppState {
    /// Connect to PostgreSQL and S3, run migrations and wire the services
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");

        let s3 = S3BlobStore::client_from_config(config).await;
        let repos = Repositories::postgres(pool, s3, config);

        Ok(Self::from_repositories(&repos, config))
    }

    /// Build the state on top of any repository set
    pub fn from_repositories(repos: &Repositories, config: &Config) -> Self {
        let jwt = Arc::new(JwtService::with_config(JwtConfig::from(config)));
        Self {
            services: Services::new(repos, jwt.clone(), config.default_photo_url.clone()),
            jwt,
            rate_limiter: RateLimiter::new(),
            global_limiter: TokenBucket::new(config.rate_limit_per_second, config.rate_limit_burst),
        }
    }
}
