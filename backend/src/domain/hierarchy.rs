//! Government hierarchy tiers and display labels.
//!
//! [`describe`] turns a government official's structured hierarchy
//! attributes into the stable label the presentation layer renders. It is
//! a pure function: no side effects, deterministic, and total over its
//! input. It never gates access.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Canonical tier at which a government-track official operates.
///
/// Mutually exclusive with department attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HierarchyLevel {
    /// State or central government, for example a ministry.
    StateCentral,
    /// District administration.
    District,
    /// Taluka administration within a district.
    Taluka,
    /// City administration.
    City,
    /// Ward administration within a city.
    Ward,
}

impl HierarchyLevel {
    /// Returns the stable string representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StateCentral => "state_central",
            Self::District => "district",
            Self::Taluka => "taluka",
            Self::City => "city",
            Self::Ward => "ward",
        }
    }
}

impl fmt::Display for HierarchyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown hierarchy level string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hierarchy level: {input}")]
pub struct ParseHierarchyLevelError {
    /// The unrecognised input value.
    pub input: String,
}

impl std::str::FromStr for HierarchyLevel {
    type Err = ParseHierarchyLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "state_central" => Ok(Self::StateCentral),
            "district" => Ok(Self::District),
            "taluka" => Ok(Self::Taluka),
            "city" => Ok(Self::City),
            "ward" => Ok(Self::Ward),
            other => Err(ParseHierarchyLevelError {
                input: other.to_owned(),
            }),
        }
    }
}

/// Structured hierarchy attributes carried by a government official.
///
/// All level-specific fields are optional; [`describe`] substitutes
/// `N/A` when a field the level needs is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyInfo {
    /// Tier the official operates at.
    pub hierarchy_level: HierarchyLevel,
    /// Kind of state/central body, for example "Ministry".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_type: Option<String>,
    /// Ministry name for state/central officials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ministry_name: Option<String>,
    /// District name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    /// Taluka name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taluka: Option<String>,
    /// City name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Ward number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ward_number: Option<String>,
}

impl HierarchyInfo {
    /// Build an info record for a tier with no level-specific fields yet.
    pub const fn new(hierarchy_level: HierarchyLevel) -> Self {
        Self {
            hierarchy_level,
            level_type: None,
            ministry_name: None,
            district: None,
            taluka: None,
            city: None,
            ward_number: None,
        }
    }

    /// Render the display label for this record.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{HierarchyInfo, HierarchyLevel};
    ///
    /// let mut info = HierarchyInfo::new(HierarchyLevel::Ward);
    /// info.ward_number = Some("12".into());
    /// info.city = Some("Pune".into());
    /// assert_eq!(info.label(), "Ward: 12, City: Pune");
    /// ```
    pub fn label(&self) -> String {
        match self.hierarchy_level {
            HierarchyLevel::StateCentral => format!(
                "{} - {}",
                self.level_type.as_deref().unwrap_or("State/Central"),
                or_na(self.ministry_name.as_deref()),
            ),
            HierarchyLevel::District => {
                format!("District: {}", or_na(self.district.as_deref()))
            }
            HierarchyLevel::Taluka => format!(
                "Taluka: {}, District: {}",
                or_na(self.taluka.as_deref()),
                or_na(self.district.as_deref()),
            ),
            HierarchyLevel::City => format!(
                "City: {}, District: {}",
                or_na(self.city.as_deref()),
                or_na(self.district.as_deref()),
            ),
            HierarchyLevel::Ward => format!(
                "Ward: {}, City: {}",
                or_na(self.ward_number.as_deref()),
                or_na(self.city.as_deref()),
            ),
        }
    }
}

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or("N/A")
}

/// Describe an official's organisational context, if any.
///
/// Absent input yields `None`; anything else yields the label for its
/// tier. Unknown tiers are unrepresentable because [`HierarchyLevel`] is
/// a closed enum.
///
/// # Examples
/// ```
/// use backend::domain::hierarchy::{describe, HierarchyInfo, HierarchyLevel};
///
/// assert_eq!(describe(None), None);
///
/// let info = HierarchyInfo::new(HierarchyLevel::District);
/// assert_eq!(describe(Some(&info)).as_deref(), Some("District: N/A"));
/// ```
pub fn describe(info: Option<&HierarchyInfo>) -> Option<String> {
    info.map(HierarchyInfo::label)
}
