//! Units and positions

use std::sync::Arc;

use shared::error::{AppError, ErrorCode};
use shared::models::{Position, PositionCreate, PositionUpdate, Unit, UnitCreate, UnitUpdate};
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};
use crate::policy::AuthorizationPolicy;
use crate::repository::{PositionRepository, RepoError, Repositories, UnitRepository};
use crate::util::now_millis;

const UNIT_NAME_MIN: usize = 5;
const UNIT_ADDRESS_MIN: usize = 10;
const UNIT_DESCRIPTION_MIN: usize = 5;
const POSITION_NAME_MIN: usize = 5;

fn len(s: &str) -> usize {
    s.chars().count()
}

fn too_short(field: &str, min: usize) -> AppError {
    AppError::validation(format!("{field} must be at least {min} characters"))
        .with_detail("field", field)
        .with_detail("min", min)
}

/// Map a foreign-key refusal on delete to a domain conflict
fn in_use(e: RepoError, code: ErrorCode) -> ServiceError {
    match e {
        RepoError::InUse(_) => AppError::new(code).into(),
        other => other.into(),
    }
}

pub fn validate_unit(data: &UnitCreate) -> Result<(), AppError> {
    if len(&data.name) < UNIT_NAME_MIN {
        return Err(too_short("name", UNIT_NAME_MIN));
    }
    if len(&data.address) < UNIT_ADDRESS_MIN {
        return Err(too_short("address", UNIT_ADDRESS_MIN));
    }
    if len(&data.description) < UNIT_DESCRIPTION_MIN {
        return Err(too_short("description", UNIT_DESCRIPTION_MIN));
    }
    Ok(())
}

#[derive(Clone)]
pub struct OrgService {
    policy: AuthorizationPolicy,
    units: Arc<dyn UnitRepository>,
    positions: Arc<dyn PositionRepository>,
}

impl OrgService {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            policy: AuthorizationPolicy::new(
                repos.employees.clone(),
                repos.roles.clone(),
                repos.assignments.clone(),
            ),
            units: repos.units.clone(),
            positions: repos.positions.clone(),
        }
    }

    // ── Units ──

    pub async fn list_units(&self) -> ServiceResult<Vec<Unit>> {
        Ok(self.units.find_all().await?)
    }

    pub async fn get_unit(&self, id: i64) -> ServiceResult<Unit> {
        self.units
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::UnitNotFound).into())
    }

    pub async fn search_units(&self, query: &str) -> ServiceResult<Vec<Unit>> {
        Ok(self.units.search(query.trim()).await?)
    }

    pub async fn create_unit(&self, proposer: Uuid, data: UnitCreate) -> ServiceResult<Unit> {
        self.policy
            .require(proposer, |r| r.can_add_unit, "add units")
            .await?;
        validate_unit(&data)?;
        let unit = self.units.create(&data, now_millis()).await?;
        tracing::info!(proposer = %proposer, unit_id = unit.id, "Unit created");
        Ok(unit)
    }

    /// Fields at or below their minimum length are ignored
    pub async fn update_unit(
        &self,
        proposer: Uuid,
        id: i64,
        patch: UnitUpdate,
    ) -> ServiceResult<Unit> {
        self.policy
            .require(proposer, |r| r.can_add_unit, "update units")
            .await?;
        let mut unit = self.get_unit(id).await?;

        if let Some(name) = patch.name.filter(|v| len(v) > UNIT_NAME_MIN) {
            unit.name = name;
        }
        if let Some(address) = patch.address.filter(|v| len(v) > UNIT_ADDRESS_MIN) {
            unit.address = address;
        }
        if let Some(description) = patch
            .description
            .filter(|v| len(v) > UNIT_DESCRIPTION_MIN)
        {
            unit.description = description;
        }
        unit.updated_at = now_millis();

        if !self.units.update(&unit).await? {
            return Err(AppError::new(ErrorCode::UnitNotFound).into());
        }
        Ok(unit)
    }

    pub async fn delete_unit(&self, proposer: Uuid, id: i64) -> ServiceResult<()> {
        self.policy
            .require(proposer, |r| r.can_add_unit, "delete units")
            .await?;
        let deleted = self
            .units
            .delete(id)
            .await
            .map_err(|e| in_use(e, ErrorCode::UnitInUse))?;
        if !deleted {
            return Err(AppError::new(ErrorCode::UnitNotFound).into());
        }
        tracing::info!(proposer = %proposer, unit_id = id, "Unit deleted");
        Ok(())
    }

    // ── Positions ──

    pub async fn list_positions(&self) -> ServiceResult<Vec<Position>> {
        Ok(self.positions.find_all().await?)
    }

    pub async fn get_position(&self, id: i64) -> ServiceResult<Position> {
        self.positions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::PositionNotFound).into())
    }

    pub async fn search_positions(&self, query: &str) -> ServiceResult<Vec<Position>> {
        Ok(self.positions.search(query.trim()).await?)
    }

    pub async fn create_position(
        &self,
        proposer: Uuid,
        data: PositionCreate,
    ) -> ServiceResult<Position> {
        self.policy
            .require(proposer, |r| r.can_add_position, "add positions")
            .await?;
        let name = data.name.trim();
        if name.is_empty() {
            return Err(AppError::with_message(ErrorCode::RequiredField, "Position name is required")
                .with_detail("field", "name")
                .into());
        }
        if self.positions.find_by_name(name).await?.is_some() {
            return Err(AppError::conflict(format!("Position {name} already exists")).into());
        }
        let position = self
            .positions
            .create(
                &PositionCreate {
                    name: name.to_string(),
                },
                now_millis(),
            )
            .await?;
        tracing::info!(proposer = %proposer, position_id = position.id, "Position created");
        Ok(position)
    }

    /// A name used by another position conflicts; a short name is ignored
    pub async fn update_position(
        &self,
        proposer: Uuid,
        id: i64,
        patch: PositionUpdate,
    ) -> ServiceResult<Position> {
        self.policy
            .require(proposer, |r| r.can_add_position, "update positions")
            .await?;
        let mut position = self.get_position(id).await?;

        if let Some(name) = patch.name.as_deref().map(str::trim) {
            if let Some(existing) = self.positions.find_by_name(name).await? {
                if existing.id != id {
                    return Err(AppError::conflict(format!("Position {name} already exists"))
                        .with_detail("position_id", existing.id)
                        .into());
                }
            }
            if len(name) > POSITION_NAME_MIN {
                position.name = name.to_string();
            }
        }
        position.updated_at = now_millis();

        if !self.positions.update(&position).await? {
            return Err(AppError::new(ErrorCode::PositionNotFound).into());
        }
        Ok(position)
    }

    pub async fn delete_position(&self, proposer: Uuid, id: i64) -> ServiceResult<()> {
        self.policy
            .require(proposer, |r| r.can_add_position, "delete positions")
            .await?;
        let deleted = self
            .positions
            .delete(id)
            .await
            .map_err(|e| in_use(e, ErrorCode::PositionInUse))?;
        if !deleted {
            return Err(AppError::new(ErrorCode::PositionNotFound).into());
        }
        tracing::info!(proposer = %proposer, position_id = id, "Position deleted");
        Ok(())
    }
}
