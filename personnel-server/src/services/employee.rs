//! Employee directory
//!
//! Creation validates every field and rejects the request on the first
//! failure. Updates are lenient: a field that fails its rule is left
//! unchanged. Roles never change here, only through promotion.

use std::sync::Arc;

use shared::error::{AppError, ErrorCode};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use uuid::Uuid;

use crate::error::ServiceResult;
use crate::policy::AuthorizationPolicy;
use crate::repository::{
    EmployeeRepository, ReferenceRepository, RepoError, Repositories, UnitRepository,
};
use crate::util::{hash_password, is_alpha, is_numeric, now_millis};

/// Role given to every newly created employee
pub const DEFAULT_ROLE: &str = "USR";

const NIP_LEN: usize = 18;
const NPWP_LEN: usize = 16;
const MIN_PASSWORD: usize = 8;

fn len(s: &str) -> usize {
    s.chars().count()
}

fn invalid(code: ErrorCode, field: &str) -> AppError {
    AppError::new(code).with_detail("field", field)
}

/// Reject the first invalid field of a new employee
pub fn validate_create(data: &EmployeeCreate) -> Result<(), AppError> {
    if data.role_id.is_some() {
        return Err(AppError::bad_request("New employees always start as USR")
            .with_detail("field", "role_id"));
    }
    if len(&data.nip) != NIP_LEN || !is_numeric(&data.nip) {
        return Err(invalid(ErrorCode::InvalidNip, "nip"));
    }
    if len(&data.password) < MIN_PASSWORD {
        return Err(invalid(ErrorCode::PasswordTooShort, "password"));
    }
    if len(&data.full_name) < 3 || !is_alpha(&data.full_name) {
        return Err(invalid(ErrorCode::InvalidName, "full_name"));
    }
    if len(&data.place_of_birth) < 3 || !is_alpha(&data.place_of_birth) {
        return Err(invalid(ErrorCode::InvalidName, "place_of_birth"));
    }
    if len(&data.gender) != 1 {
        return Err(invalid(ErrorCode::InvalidGender, "gender"));
    }
    if len(&data.phone_number) < 6 || !is_numeric(&data.phone_number) {
        return Err(invalid(ErrorCode::InvalidPhone, "phone_number"));
    }
    if len(&data.address) < 6 {
        return Err(invalid(ErrorCode::InvalidAddress, "address"));
    }
    if let Some(npwp) = data.npwp.as_deref().filter(|n| !n.is_empty()) {
        if len(npwp) != NPWP_LEN || !is_numeric(npwp) {
            return Err(invalid(ErrorCode::InvalidNpwp, "npwp"));
        }
    }
    if data.grade_id <= 0 {
        return Err(invalid(ErrorCode::ValidationFailed, "grade_id"));
    }
    if data.echelon_id <= 0 {
        return Err(invalid(ErrorCode::ValidationFailed, "echelon_id"));
    }
    if len(&data.religion_id) != 3 {
        return Err(invalid(ErrorCode::ValidationFailed, "religion_id"));
    }
    Ok(())
}

/// Copy every acceptable field of `patch` onto `employee`
pub fn apply_update(employee: &mut Employee, patch: &EmployeeUpdate) -> Result<(), AppError> {
    if patch.role_id.is_some() {
        return Err(AppError::with_message(
            ErrorCode::RoleChangeNotAllowed,
            "Role changes go through promotion",
        ));
    }
    if let Some(v) = patch.full_name.as_deref().filter(|v| len(v) > 3 && is_alpha(v)) {
        employee.full_name = v.to_string();
    }
    if let Some(v) = patch
        .place_of_birth
        .as_deref()
        .filter(|v| len(v) > 3 && is_alpha(v))
    {
        employee.place_of_birth = v.to_string();
    }
    if let Some(v) = patch.date_of_birth {
        employee.date_of_birth = v;
    }
    if let Some(v) = patch.gender.as_deref().filter(|v| len(v) == 1) {
        employee.gender = v.to_string();
    }
    if let Some(v) = patch
        .phone_number
        .as_deref()
        .filter(|v| len(v) > 6 && is_numeric(v))
    {
        employee.phone_number = v.to_string();
    }
    if let Some(v) = patch.address.as_deref().filter(|v| len(v) > 6) {
        employee.address = v.to_string();
    }
    if let Some(v) = patch
        .npwp
        .as_deref()
        .filter(|v| len(v) == NPWP_LEN && is_numeric(v))
    {
        employee.npwp = Some(v.to_string());
    }
    if let Some(v) = patch.grade_id.filter(|v| *v > 0) {
        employee.grade_id = v;
    }
    if let Some(v) = patch.echelon_id.filter(|v| *v > 0) {
        employee.echelon_id = v;
    }
    if let Some(v) = patch.religion_id.as_deref().filter(|v| len(v) == 3) {
        employee.religion_id = v.to_string();
    }
    Ok(())
}

#[derive(Clone)]
pub struct EmployeeService {
    policy: AuthorizationPolicy,
    employees: Arc<dyn EmployeeRepository>,
    units: Arc<dyn UnitRepository>,
    references: Arc<dyn ReferenceRepository>,
    default_photo_url: String,
}

impl EmployeeService {
    pub fn new(repos: &Repositories, default_photo_url: String) -> Self {
        Self {
            policy: AuthorizationPolicy::new(
                repos.employees.clone(),
                repos.roles.clone(),
                repos.assignments.clone(),
            ),
            employees: repos.employees.clone(),
            units: repos.units.clone(),
            references: repos.references.clone(),
            default_photo_url,
        }
    }

    pub async fn list(&self, proposer: Uuid) -> ServiceResult<Vec<Employee>> {
        self.policy.authorize_directory(proposer, false).await?;
        Ok(self.employees.find_all().await?)
    }

    pub async fn get_by_nip(&self, proposer: Uuid, nip: &str) -> ServiceResult<Employee> {
        self.policy.authorize_directory(proposer, false).await?;
        self.find_by_nip(nip).await
    }

    pub async fn list_by_unit(&self, proposer: Uuid, unit_id: i64) -> ServiceResult<Vec<Employee>> {
        self.policy.authorize_directory(proposer, false).await?;
        if self.units.find_by_id(unit_id).await?.is_none() {
            return Err(AppError::new(ErrorCode::UnitNotFound).into());
        }
        Ok(self.employees.find_by_unit(unit_id).await?)
    }

    pub async fn search(&self, proposer: Uuid, query: &str) -> ServiceResult<Vec<Employee>> {
        self.policy.authorize_directory(proposer, false).await?;
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::with_message(ErrorCode::RequiredField, "Search query is empty")
                .with_detail("field", "q")
                .into());
        }
        Ok(self.employees.search(query).await?)
    }

    pub async fn create(&self, proposer: Uuid, data: EmployeeCreate) -> ServiceResult<Employee> {
        self.policy.authorize_directory(proposer, true).await?;
        validate_create(&data)?;

        if self.employees.find_by_nip(&data.nip).await?.is_some() {
            return Err(AppError::new(ErrorCode::EmployeeNipExists)
                .with_detail("nip", data.nip)
                .into());
        }
        self.check_references(data.grade_id, &data.religion_id, data.echelon_id)
            .await?;

        let password_hash = hash_password(&data.password).map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            AppError::internal("Password hashing failed")
        })?;

        let now = now_millis();
        let employee = Employee {
            id: Uuid::new_v4(),
            role_id: DEFAULT_ROLE.to_string(),
            nip: data.nip,
            password_hash,
            full_name: data.full_name,
            place_of_birth: data.place_of_birth,
            date_of_birth: data.date_of_birth,
            gender: data.gender,
            phone_number: data.phone_number,
            photo_url: self.default_photo_url.clone(),
            address: data.address,
            npwp: data.npwp.filter(|n| !n.is_empty()),
            grade_id: data.grade_id,
            religion_id: data.religion_id,
            echelon_id: data.echelon_id,
            created_at: now,
            updated_at: now,
        };

        match self.employees.create(&employee).await {
            Ok(()) => {}
            Err(RepoError::Duplicate(_)) => {
                return Err(AppError::new(ErrorCode::EmployeeNipExists)
                    .with_detail("nip", employee.nip)
                    .into());
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(proposer = %proposer, employee_id = %employee.id, "Employee created");
        Ok(employee)
    }

    pub async fn update(
        &self,
        proposer: Uuid,
        nip: &str,
        patch: EmployeeUpdate,
    ) -> ServiceResult<Employee> {
        self.policy.authorize_directory(proposer, false).await?;
        let mut employee = self.find_by_nip(nip).await?;
        self.save_patch(&mut employee, &patch).await?;
        tracing::info!(proposer = %proposer, employee_id = %employee.id, "Employee updated");
        Ok(employee)
    }

    /// Shared by directory and self-service updates
    pub(crate) async fn save_patch(
        &self,
        employee: &mut Employee,
        patch: &EmployeeUpdate,
    ) -> ServiceResult<()> {
        let before = (employee.grade_id, employee.religion_id.clone(), employee.echelon_id);
        apply_update(employee, patch)?;
        if before != (employee.grade_id, employee.religion_id.clone(), employee.echelon_id) {
            self.check_references(employee.grade_id, &employee.religion_id, employee.echelon_id)
                .await?;
        }
        employee.updated_at = now_millis();
        if !self.employees.update_profile(employee).await? {
            return Err(AppError::new(ErrorCode::EmployeeNotFound).into());
        }
        Ok(())
    }

    pub(crate) async fn find_by_id(&self, id: Uuid) -> ServiceResult<Option<Employee>> {
        Ok(self.employees.find_by_id(id).await?)
    }

    pub(crate) async fn find_by_nip(&self, nip: &str) -> ServiceResult<Employee> {
        self.employees
            .find_by_nip(nip)
            .await?
            .ok_or_else(|| {
                AppError::new(ErrorCode::EmployeeNotFound)
                    .with_detail("nip", nip)
                    .into()
            })
    }

    async fn check_references(
        &self,
        grade_id: i64,
        religion_id: &str,
        echelon_id: i64,
    ) -> ServiceResult<()> {
        if self.references.find_grade(grade_id).await?.is_none() {
            return Err(AppError::new(ErrorCode::GradeNotFound).into());
        }
        if self.references.find_religion(religion_id).await?.is_none() {
            return Err(AppError::new(ErrorCode::ReligionNotFound).into());
        }
        if self.references.find_echelon(echelon_id).await?.is_none() {
            return Err(AppError::new(ErrorCode::EchelonNotFound).into());
        }
        Ok(())
    }
}
