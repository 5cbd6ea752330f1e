use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's persisted product idea.
///
/// Submissions are append-only: intake assigns the id and timestamp, and the
/// record is never mutated or deleted afterwards. The domain tag is stored as
/// the caller sent it; it is checked against the registered verticals only
/// when a document is generated, so an unknown tag is accepted at intake and
/// rejected at generation time. A submission without a domain uses the
/// generic prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub idea: String,
    pub domain: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Industry vertical selecting among alternative prompt templates.
///
/// On the wire and in storage a domain is the full human-readable name
/// ([`Domain::as_str`]); this enum is the catalog key it maps onto.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Domain {
    #[serde(rename = "Software Technology")]
    SoftwareTechnology,
    #[serde(rename = "Healthcare and Biotech")]
    HealthcareBiotech,
    #[serde(rename = "Renewable Energy")]
    RenewableEnergy,
    #[serde(rename = "Financial Services")]
    FinancialServices,
    #[serde(rename = "Advanced Manufacturing")]
    AdvancedManufacturing,
    #[serde(rename = "Artificial Intelligence and Robotics")]
    AiRobotics,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SoftwareTechnology => "Software Technology",
            Self::HealthcareBiotech => "Healthcare and Biotech",
            Self::RenewableEnergy => "Renewable Energy",
            Self::FinancialServices => "Financial Services",
            Self::AdvancedManufacturing => "Advanced Manufacturing",
            Self::AiRobotics => "Artificial Intelligence and Robotics",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Software Technology" => Some(Self::SoftwareTechnology),
            "Healthcare and Biotech" => Some(Self::HealthcareBiotech),
            "Renewable Energy" => Some(Self::RenewableEnergy),
            "Financial Services" => Some(Self::FinancialServices),
            "Advanced Manufacturing" => Some(Self::AdvancedManufacturing),
            "Artificial Intelligence and Robotics" => Some(Self::AiRobotics),
            _ => None,
        }
    }

    /// All registered verticals, in catalog order.
    pub const ALL: [Domain; 6] = [
        Self::SoftwareTechnology,
        Self::HealthcareBiotech,
        Self::RenewableEnergy,
        Self::FinancialServices,
        Self::AdvancedManufacturing,
        Self::AiRobotics,
    ];
}

/// Input for the intake endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitIdeaInput {
    pub idea: String,
    /// Omitted for domain-agnostic submissions. Not validated at intake.
    pub domain: Option<String>,
}
