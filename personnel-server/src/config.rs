//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Personnel server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// HMAC secret for access tokens
    pub jwt_secret: String,
    /// HMAC secret for refresh tokens
    pub refresh_secret: String,
    pub access_token_minutes: i64,
    pub refresh_token_minutes: i64,
    pub jwt_issuer: String,
    /// Bucket holding profile pictures
    pub s3_bucket: String,
    /// Custom S3-compatible endpoint
    pub s3_endpoint: Option<String>,
    pub s3_force_path_style: bool,
    /// Base URL returned for stored objects
    pub s3_public_base_url: String,
    /// Photo assigned to newly created employees
    pub default_photo_url: String,
    /// Global token bucket refill rate
    pub rate_limit_per_second: u32,
    /// Global token bucket capacity
    pub rate_limit_burst: u32,
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development environments.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> T {
        std::env::var(name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let s3_bucket =
            std::env::var("S3_BUCKET").unwrap_or_else(|_| "personnel-profiles".into());
        let s3_endpoint = std::env::var("S3_ENDPOINT").ok().filter(|s| !s.is_empty());
        let s3_force_path_style = Self::parse_or("S3_FORCE_PATH_STYLE", false);
        let s3_public_base_url = std::env::var("S3_PUBLIC_BASE_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                default_public_base_url(&s3_bucket, s3_endpoint.as_deref(), s3_force_path_style)
            });
        let default_photo_url = std::env::var("DEFAULT_PHOTO_URL")
            .unwrap_or_else(|_| format!("{s3_public_base_url}/pictureprofile/defaultprofile.jpg"));

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            http_port: Self::parse_or("HTTP_PORT", 8080),
            environment: environment.clone(),
            jwt_secret: Self::require_secret("JWT_SECRET", &environment)?,
            refresh_secret: Self::require_secret("REFRESH_SECRET", &environment)?,
            access_token_minutes: Self::parse_or("ACCESS_TOKEN_MINUTES", 30),
            refresh_token_minutes: Self::parse_or("REFRESH_TOKEN_MINUTES", 7 * 24 * 60),
            jwt_issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "personnel-server".into()),
            s3_bucket,
            s3_endpoint,
            s3_force_path_style,
            s3_public_base_url,
            default_photo_url,
            rate_limit_per_second: Self::parse_or("RATE_LIMIT_PER_SECOND", 1000),
            rate_limit_burst: Self::parse_or("RATE_LIMIT_BURST", 1200),
        })
    }
}

fn default_public_base_url(bucket: &str, endpoint: Option<&str>, path_style: bool) -> String {
    match endpoint {
        Some(ep) if path_style => format!("{}/{bucket}", ep.trim_end_matches('/')),
        Some(ep) => {
            let ep = ep.trim_end_matches('/');
            match ep.split_once("://") {
                Some((scheme, host)) => format!("{scheme}://{bucket}.{host}"),
                None => format!("https://{bucket}.{ep}"),
            }
        }
        None => format!("https://{bucket}.s3.amazonaws.com"),
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Self {
            database_url: "postgres://localhost/personnel_test".into(),
            http_port: 0,
            environment: "development".into(),
            jwt_secret: "test-access-secret".into(),
            refresh_secret: "test-refresh-secret".into(),
            access_token_minutes: 30,
            refresh_token_minutes: 7 * 24 * 60,
            jwt_issuer: "personnel-server".into(),
            s3_bucket: "personnel-profiles".into(),
            s3_endpoint: None,
            s3_force_path_style: false,
            s3_public_base_url: "https://personnel-profiles.s3.amazonaws.com".into(),
            default_photo_url:
                "https://personnel-profiles.s3.amazonaws.com/pictureprofile/defaultprofile.jpg"
                    .into(),
            rate_limit_per_second: 1000,
            rate_limit_burst: 1200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_base_url_virtual_host() {
        assert_eq!(
            default_public_base_url("pics", Some("https://s3.example.id/"), false),
            "https://pics.s3.example.id"
        );
    }

    #[test]
    fn test_public_base_url_path_style() {
        assert_eq!(
            default_public_base_url("pics", Some("http://localhost:9000"), true),
            "http://localhost:9000/pics"
        );
    }

    #[test]
    fn test_public_base_url_aws_default() {
        assert_eq!(
            default_public_base_url("pics", None, false),
            "https://pics.s3.amazonaws.com"
        );
    }

    #[test]
    fn test_require_secret_dev_fallback() {
        let v = Config::require_secret("PERSONNEL_TEST_UNSET_SECRET", "development").unwrap();
        assert_eq!(v, "dev-PERSONNEL_TEST_UNSET_SECRET-not-for-production");
        assert!(Config::require_secret("PERSONNEL_TEST_UNSET_SECRET", "production").is_err());
    }
}
