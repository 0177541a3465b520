//! Reference tables: grades, religions, echelons

use serde::{Deserialize, Serialize};

/// Civil-service grade (golongan), e.g. "III/a"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Grade {
    pub id: i64,
    pub code: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Echelon {
    pub id: i64,
    pub code: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Payload shared by grade and echelon writes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodePayload {
    pub code: String,
}

/// Religion, keyed by a 3-char id such as "ISL"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Religion {
    pub id: String,
    pub name: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReligionCreate {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReligionUpdate {
    pub name: String,
}
