//! Printable personnel sheet

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Denormalized employee record for printing
///
/// Unit, position and work location come from the active assignment and are
/// `"-"` when the employee has none.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeeReport {
    pub nip: String,
    pub full_name: String,
    pub place_of_birth: String,
    pub address: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub grade: String,
    pub echelon: String,
    pub position: String,
    pub work_location: String,
    pub religion: String,
    pub unit: String,
    pub phone_number: String,
    pub npwp: String,
    pub photo_url: String,
}
