//! Organization catalog: units and positions

use serde::{Deserialize, Serialize};

/// Organizational unit (flat, no parent)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Unit {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub description: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitCreate {
    pub name: String,
    pub address: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

/// Job title
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Position {
    pub id: i64,
    pub name: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionCreate {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionUpdate {
    pub name: Option<String>,
}
