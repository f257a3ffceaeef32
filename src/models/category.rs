//! Entity category tags used to key filter alias tables and list routes.

use serde::{Deserialize, Serialize};

use super::ModelError;

/// The entity categories the admin screens page through. The REST layer
/// keys its `/api/data/{category}` routes by the same lowercase tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Patient,
    Physician,
    HealthReport,
    Clinic,
    WorkAssignment,
    Prescription,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Physician => "physician",
            Self::HealthReport => "healthreport",
            Self::Clinic => "clinic",
            Self::WorkAssignment => "workassignment",
            Self::Prescription => "prescription",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "patient" => Ok(Self::Patient),
            "physician" => Ok(Self::Physician),
            "healthreport" => Ok(Self::HealthReport),
            "clinic" => Ok(Self::Clinic),
            "workassignment" => Ok(Self::WorkAssignment),
            "prescription" => Ok(Self::Prescription),
            _ => Err(ModelError::InvalidEnum {
                field: "Category".into(),
                value: s.into(),
            }),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_roundtrip() {
        for cat in [
            Category::Patient,
            Category::Physician,
            Category::HealthReport,
            Category::Clinic,
            Category::WorkAssignment,
            Category::Prescription,
        ] {
            assert_eq!(cat.as_str().parse::<Category>(), Ok(cat));
        }
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!("HealthReport".parse::<Category>(), Ok(Category::HealthReport));
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&Category::WorkAssignment).unwrap();
        assert_eq!(json, "\"workassignment\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::WorkAssignment);
    }
}
