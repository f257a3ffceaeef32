//! Immutable session context passed to components that need role checks.
//!
//! The source UI read `isAuthenticated`/`isPatient`/`isPhysician`/`isAdmin`
//! from ambient global state; here the login response is captured once in a
//! read-only value and handed by reference to whoever needs it.

use serde::{Deserialize, Serialize};

use super::ModelError;

/// The account type the backend attaches to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Physician,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Physician => "physician",
            Self::Admin => "admin",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "patient" => Ok(Self::Patient),
            "physician" => Ok(Self::Physician),
            "admin" => Ok(Self::Admin),
            _ => Err(ModelError::InvalidEnum {
                field: "Role".into(),
                value: s.into(),
            }),
        }
    }
}

/// Who is logged in. `reference_id` points at the Patient or Physician row
/// the account belongs to; admins have no entity row and carry `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    pub user_id: i64,
    pub reference_id: Option<i64>,
    pub name: String,
    pub role: Role,
}

impl SessionContext {
    pub fn new(user_id: i64, reference_id: Option<i64>, name: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            reference_id,
            name: name.into(),
            role,
        }
    }

    pub fn is_patient(&self) -> bool {
        self.role == Role::Patient
    }

    pub fn is_physician(&self) -> bool {
        self.role == Role::Physician
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
