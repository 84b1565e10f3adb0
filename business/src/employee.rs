use serde::{Deserialize, Serialize};

/// Salary as the backend sends it: sometimes a JSON number, sometimes a
/// string. The raw value is preserved so edit mode can load it back into the
/// form without going through display formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SalaryField {
    Number(f64),
    Text(String),
}

impl SalaryField {
    /// The value as it should appear in an editable input: plain digits,
    /// no grouping, no currency marker.
    pub fn as_input(&self) -> String {
        match self {
            Self::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            Self::Text(s) => s.clone(),
        }
    }
}

/// One employee row as returned by the backend.
///
/// Only `id` is required; every other field tolerates being absent so a
/// partial record still renders (as empty cells, never a literal "null").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: i64,
    #[serde(default)]
    pub emp_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub salary: Option<SalaryField>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
    /// Displayed verbatim; the backend renders it as `D-MMM-YYYY`.
    #[serde(default)]
    pub join_date: Option<String>,
}

/// Request body shared by create and update.
///
/// `salary` is sent as the raw form string; the backend coerces it. A `None`
/// join date serializes as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub emp_id: String,
    pub name: String,
    pub salary: String,
    pub email: String,
    pub department: String,
    pub join_date: Option<String>,
}

/// Body for `POST /api/change_password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}
