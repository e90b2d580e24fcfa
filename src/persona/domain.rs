//! Expertise domains and task categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::context::ContextType;

// ============================================================================
// Expertise domains
// ============================================================================

/// An area of expertise used to look up a persona's confidence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainType {
    SoftwareArchitecture,
    SoftwareDevelopment,
    TeamLeadership,
    ProjectManagement,
    DevOps,
    Security,
    DataEngineering,
    ProductStrategy,
    BusinessStrategy,
    Family,
    PersonalFinance,
    Health,
    Arts,
    Marketing,
    Legal,
}

impl DomainType {
    /// All 15 domains in canonical order.
    pub const ALL: [DomainType; 15] = [
        Self::SoftwareArchitecture,
        Self::SoftwareDevelopment,
        Self::TeamLeadership,
        Self::ProjectManagement,
        Self::DevOps,
        Self::Security,
        Self::DataEngineering,
        Self::ProductStrategy,
        Self::BusinessStrategy,
        Self::Family,
        Self::PersonalFinance,
        Self::Health,
        Self::Arts,
        Self::Marketing,
        Self::Legal,
    ];

    /// Snake-case key, identical to the serde representation.
    pub fn key(&self) -> &'static str {
        match self {
            Self::SoftwareArchitecture => "software_architecture",
            Self::SoftwareDevelopment => "software_development",
            Self::TeamLeadership => "team_leadership",
            Self::ProjectManagement => "project_management",
            Self::DevOps => "dev_ops",
            Self::Security => "security",
            Self::DataEngineering => "data_engineering",
            Self::ProductStrategy => "product_strategy",
            Self::BusinessStrategy => "business_strategy",
            Self::Family => "family",
            Self::PersonalFinance => "personal_finance",
            Self::Health => "health",
            Self::Arts => "arts",
            Self::Marketing => "marketing",
            Self::Legal => "legal",
        }
    }

    /// Human-readable label used in confidence explanations.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SoftwareArchitecture => "software architecture",
            Self::SoftwareDevelopment => "software development",
            Self::TeamLeadership => "team leadership",
            Self::ProjectManagement => "project management",
            Self::DevOps => "DevOps",
            Self::Security => "security",
            Self::DataEngineering => "data engineering",
            Self::ProductStrategy => "product strategy",
            Self::BusinessStrategy => "business strategy",
            Self::Family => "family",
            Self::PersonalFinance => "personal finance",
            Self::Health => "health",
            Self::Arts => "arts",
            Self::Marketing => "marketing",
            Self::Legal => "legal",
        }
    }
}

impl fmt::Display for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a domain name does not match any [`DomainType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown domain: {0}")]
pub struct UnknownDomain(pub String);

impl FromStr for DomainType {
    type Err = UnknownDomain;

    /// Accepts snake_case, kebab-case, spaced or CamelCase names, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squashed: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.key().replace('_', "") == squashed)
            .ok_or_else(|| UnknownDomain(s.to_string()))
    }
}

// ============================================================================
// Task categories
// ============================================================================

/// The kind of work a response serves, used for trait relevance ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Technical,
    Personal,
    Professional,
    Creative,
    Analytical,
    Communication,
}

impl TaskType {
    pub const ALL: [TaskType; 6] = [
        Self::Technical,
        Self::Personal,
        Self::Professional,
        Self::Creative,
        Self::Analytical,
        Self::Communication,
    ];
}

impl From<ContextType> for TaskType {
    fn from(context: ContextType) -> Self {
        match context {
            ContextType::Technical => Self::Technical,
            ContextType::Professional => Self::Professional,
            ContextType::Personal | ContextType::Family | ContextType::Celebration => {
                Self::Personal
            }
            ContextType::Creative => Self::Creative,
            ContextType::Strategic => Self::Analytical,
            ContextType::Crisis => Self::Communication,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
