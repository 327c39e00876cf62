//! Point-of-sale domain entity
//!
//! A place on campus where coffee can be bought.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a point of sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PosId(pub i64);

impl From<i64> for PosId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PosId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of point of sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PosType {
    Cafe,
    Bakery,
    Cafeteria,
    VendingMachine,
}

impl std::fmt::Display for PosType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PosType::Cafe => write!(f, "CAFE"),
            PosType::Bakery => write!(f, "BAKERY"),
            PosType::Cafeteria => write!(f, "CAFETERIA"),
            PosType::VendingMachine => write!(f, "VENDING_MACHINE"),
        }
    }
}

impl std::str::FromStr for PosType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CAFE" => Ok(PosType::Cafe),
            "BAKERY" => Ok(PosType::Bakery),
            "CAFETERIA" => Ok(PosType::Cafeteria),
            "VENDING_MACHINE" => Ok(PosType::VendingMachine),
            _ => Err(format!("Unknown POS type: {}", s)),
        }
    }
}

/// Campus the point of sale belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampusType {
    Altstadt,
    Bergheim,
    Inf,
}

impl std::fmt::Display for CampusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CampusType::Altstadt => write!(f, "ALTSTADT"),
            CampusType::Bergheim => write!(f, "BERGHEIM"),
            CampusType::Inf => write!(f, "INF"),
        }
    }
}

impl std::str::FromStr for CampusType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ALTSTADT" => Ok(CampusType::Altstadt),
            "BERGHEIM" => Ok(CampusType::Bergheim),
            "INF" => Ok(CampusType::Inf),
            _ => Err(format!("Unknown campus: {}", s)),
        }
    }
}

/// A point of sale
///
/// `id` is `None` until the value has been persisted. Timestamps are only
/// ever filled in by the persistence adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pos {
    pub id: Option<PosId>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
    pub pos_type: PosType,
    pub campus: CampusType,
    pub street: String,
    /// May carry a suffix such as "21a"
    pub house_number: String,
    pub postal_code: i32,
    pub city: String,
}

impl Pos {
    /// Copy of this value as it looks before its first write
    pub fn without_identity(&self) -> Self {
        Self {
            id: None,
            created_at: None,
            updated_at: None,
            ..self.clone()
        }
    }

    /// Whether this value has been through an upsert
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
