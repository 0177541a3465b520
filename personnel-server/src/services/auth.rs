//! Login and token refresh

use std::sync::Arc;

use shared::error::{AppError, ErrorCode};
use uuid::Uuid;

use crate::auth::jwt::{JwtService, TokenPair};
use crate::error::ServiceResult;
use crate::repository::{EmployeeRepository, Repositories};
use crate::util::verify_password;

#[derive(Clone)]
pub struct AuthService {
    employees: Arc<dyn EmployeeRepository>,
    jwt: Arc<JwtService>,
}

impl AuthService {
    pub fn new(repos: &Repositories, jwt: Arc<JwtService>) -> Self {
        Self {
            employees: repos.employees.clone(),
            jwt,
        }
    }

    /// Verify NIP + password and issue a token pair
    pub async fn login(&self, nip: &str, password: &str) -> ServiceResult<TokenPair> {
        let employee = match self.employees.find_by_nip(nip).await? {
            Some(e) => e,
            None => {
                tracing::warn!(nip = %nip, "Login failed - employee not found");
                return Err(AppError::new(ErrorCode::EmployeeNotFound)
                    .with_detail("nip", nip)
                    .into());
            }
        };

        if !verify_password(password, &employee.password_hash) {
            tracing::warn!(employee_id = %employee.id, "Login failed - invalid password");
            return Err(AppError::invalid_credentials().into());
        }

        let pair = self.issue(employee.id)?;
        tracing::info!(employee_id = %employee.id, "Employee logged in");
        Ok(pair)
    }

    /// Issue a new pair for the holder of a valid refresh token
    pub async fn refresh(&self, employee_id: Uuid) -> ServiceResult<TokenPair> {
        if self.employees.find_by_id(employee_id).await?.is_none() {
            tracing::warn!(employee_id = %employee_id, "Refresh for unknown employee");
            return Err(AppError::invalid_token("Employee no longer exists").into());
        }
        self.issue(employee_id)
    }

    fn issue(&self, employee_id: Uuid) -> ServiceResult<TokenPair> {
        self.jwt.generate_pair(employee_id).map_err(|e| {
            tracing::error!(error = %e, "Token generation failed");
            AppError::internal("Token generation failed").into()
        })
    }
}
