//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Employee entity
///
/// `password_hash` is never serialized; every response built from this type
/// is credential-free.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: Uuid,
    /// Role reference (3-char code, e.g. "USR")
    pub role_id: String,
    /// 18-digit civil servant number, globally unique
    pub nip: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub full_name: String,
    pub place_of_birth: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub phone_number: String,
    pub photo_url: String,
    pub address: String,
    /// Tax id
    pub npwp: Option<String>,
    pub grade_id: i64,
    pub religion_id: String,
    pub echelon_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create employee payload
///
/// `role_id` exists only so a payload carrying one can be rejected; new
/// employees always start as `USR`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub nip: String,
    pub password: String,
    pub full_name: String,
    pub place_of_birth: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub phone_number: String,
    pub address: String,
    #[serde(default)]
    pub npwp: Option<String>,
    pub grade_id: i64,
    pub religion_id: String,
    pub echelon_id: i64,
    #[serde(default)]
    pub role_id: Option<String>,
}

/// Update employee payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub full_name: Option<String>,
    pub place_of_birth: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub npwp: Option<String>,
    pub grade_id: Option<i64>,
    pub religion_id: Option<String>,
    pub echelon_id: Option<i64>,
    /// Rejected when present; roles change only through promotion
    pub role_id: Option<String>,
}

/// Promote / demote payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleChange {
    pub role_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            id: Uuid::new_v4(),
            role_id: "USR".to_string(),
            nip: "198709102015031001".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            full_name: "Siti Rahma".to_string(),
            place_of_birth: "Bandung".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1987, 9, 10).unwrap(),
            gender: "P".to_string(),
            phone_number: "081234567".to_string(),
            photo_url: "https://cdn/x.jpg".to_string(),
            address: "Jl. Merdeka 1".to_string(),
            npwp: None,
            grade_id: 1,
            religion_id: "ISL".to_string(),
            echelon_id: 2,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
        assert!(json.contains("\"nip\":\"198709102015031001\""));
    }

    #[test]
    fn test_update_payload_defaults_to_empty() {
        let patch: EmployeeUpdate = serde_json::from_str("{}").unwrap();
        assert!(patch.full_name.is_none());
        assert!(patch.role_id.is_none());
    }
}
