//! Account model: users, roles, approval state, and departments.
//!
//! A [`User`] is created externally at registration time in `Pending`
//! state with `role` and `is_government_official` already fixed. Only the
//! approval workflow moves `approval_status` out of `Pending` and only it
//! sets `department_id`; nothing in this crate deletes a user.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::hierarchy::HierarchyInfo;

/// Validation errors returned by the identifier newtypes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    /// Identifier is empty after trimming whitespace.
    #[error("identifier must not be empty")]
    Empty,
    /// Identifier contains leading or trailing whitespace.
    #[error("identifier must not contain surrounding whitespace")]
    SurroundingWhitespace,
}

/// Stable opaque user identifier.
///
/// ## Invariants
/// - Non-empty and carries no surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl Into<String>) -> Result<Self, IdentifierError> {
        validate_identifier(id.into()).map(Self)
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the underlying identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_identifier(value).map(Self)
    }
}

/// Stable opaque department identifier.
///
/// ## Invariants
/// - Non-empty and carries no surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DepartmentId(String);

impl DepartmentId {
    /// Validate and construct a [`DepartmentId`] from borrowed input.
    pub fn new(id: impl Into<String>) -> Result<Self, IdentifierError> {
        validate_identifier(id.into()).map(Self)
    }

    /// Borrow the underlying identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for DepartmentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DepartmentId> for String {
    fn from(value: DepartmentId) -> Self {
        value.0
    }
}

impl TryFrom<String> for DepartmentId {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_identifier(value).map(Self)
    }
}

fn validate_identifier(raw: String) -> Result<String, IdentifierError> {
    if raw.trim().is_empty() {
        return Err(IdentifierError::Empty);
    }
    if raw.trim() != raw {
        return Err(IdentifierError::SurroundingWhitespace);
    }
    Ok(raw)
}

/// Closed enumeration of portal roles.
///
/// Matching on this enum is exhaustive throughout the crate, so adding a
/// role is a compile-time-checked change rather than a string comparison
/// silently falling through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A resident filing grievances.
    Citizen,
    /// An officer working grievances inside one department.
    DepartmentOfficer,
    /// The head of a department.
    DepartmentHead,
    /// An officer responsible for a ward.
    WardOfficer,
    /// The commissioner of a city.
    CityCommissioner,
    /// The collector of a district.
    DistrictCollector,
    /// An official in the government hierarchy with no department tie.
    GovernmentOfficial,
    /// A portal administrator approving registrations.
    Admin,
}

impl Role {
    /// Returns the stable string representation.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::Role;
    ///
    /// assert_eq!(Role::DepartmentOfficer.as_str(), "department_officer");
    /// assert_eq!(Role::Admin.as_str(), "admin");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Citizen => "citizen",
            Self::DepartmentOfficer => "department_officer",
            Self::DepartmentHead => "department_head",
            Self::WardOfficer => "ward_officer",
            Self::CityCommissioner => "city_commissioner",
            Self::DistrictCollector => "district_collector",
            Self::GovernmentOfficial => "government_official",
            Self::Admin => "admin",
        }
    }

    /// Whether this role belongs to the department-track group.
    ///
    /// Department-track roles route through the department portal when an
    /// attachment exists and fall back to the government-officials portal
    /// while unattached.
    pub const fn is_department_track(self) -> bool {
        matches!(
            self,
            Self::DepartmentOfficer
                | Self::DepartmentHead
                | Self::WardOfficer
                | Self::CityCommissioner
                | Self::DistrictCollector
        )
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {input}")]
pub struct ParseRoleError {
    /// The unrecognised input value.
    pub input: String,
}

impl std::str::FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "citizen" => Ok(Self::Citizen),
            "department_officer" => Ok(Self::DepartmentOfficer),
            "department_head" => Ok(Self::DepartmentHead),
            "ward_officer" => Ok(Self::WardOfficer),
            "city_commissioner" => Ok(Self::CityCommissioner),
            "district_collector" => Ok(Self::DistrictCollector),
            "government_official" => Ok(Self::GovernmentOfficial),
            "admin" => Ok(Self::Admin),
            other => Err(ParseRoleError {
                input: other.to_owned(),
            }),
        }
    }
}

/// Lifecycle stage of a registration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// Awaiting an administrator's decision.
    #[default]
    Pending,
    /// Admitted to the portal. Terminal.
    Approved,
    /// Turned away with a recorded reason. Terminal.
    Rejected,
}

impl ApprovalStatus {
    /// Returns the stable string representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Whether the registration still awaits review.
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Portal account.
///
/// ## Invariants
/// - `approval_status` never reverts to `Pending`; `Approved` and
///   `Rejected` are mutually terminal.
/// - `department_id` is mutually exclusive with
///   `is_government_official = true`.
/// - A department officer (see [`User::is_department_officer`]) carries
///   exactly one `department_id` once approved.
/// - `hierarchy_info` is present only when `is_government_official = true`.
/// - `rejection_reason` is present iff `approval_status = Rejected`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable opaque identifier, immutable.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: UserId,
    /// Portal role fixed at registration time.
    pub role: Role,
    /// Lifecycle stage of the registration request.
    pub approval_status: ApprovalStatus,
    /// Whether the identity belongs to the government-officials hierarchy
    /// rather than the department-officer hierarchy. Independent of `role`.
    pub is_government_official: bool,
    /// Department attachment, set by the approval workflow only.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "dept-42")]
    pub department_id: Option<DepartmentId>,
    /// Structured hierarchy attributes for government officials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy_info: Option<HierarchyInfo>,
    /// Reason recorded when the registration was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    /// Registration instant, informational only.
    pub created_at: DateTime<Utc>,
    /// Most recent login instant, informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Build the pending record a registration produces.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{ApprovalStatus, Role, User, UserId};
    ///
    /// let user = User::pending(UserId::random(), Role::Citizen, false);
    /// assert_eq!(user.approval_status, ApprovalStatus::Pending);
    /// assert!(user.department_id.is_none());
    /// ```
    pub fn pending(id: UserId, role: Role, is_government_official: bool) -> Self {
        Self {
            id,
            role,
            approval_status: ApprovalStatus::Pending,
            is_government_official,
            department_id: None,
            hierarchy_info: None,
            rejection_reason: None,
            created_at: Utc::now(),
            last_login_at: None,
        }
    }

    /// The single source of truth for "does this identity require a
    /// department".
    ///
    /// True iff the role is `DepartmentOfficer` or `DepartmentHead` and
    /// the identity is not in the government hierarchy. Not equivalent to
    /// role membership alone: the same roles can be held by
    /// government-hierarchy officials who must remain unattached.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{Role, User, UserId};
    ///
    /// let officer = User::pending(UserId::random(), Role::DepartmentOfficer, false);
    /// assert!(officer.is_department_officer());
    ///
    /// let official = User::pending(UserId::random(), Role::DepartmentOfficer, true);
    /// assert!(!official.is_department_officer());
    /// ```
    pub fn is_department_officer(&self) -> bool {
        matches!(self.role, Role::DepartmentOfficer | Role::DepartmentHead)
            && !self.is_government_official
    }
}

/// Organisational unit a department-track officer is attached to.
///
/// Immutable reference data; looked up, never mutated, by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    /// Stable opaque identifier.
    #[schema(value_type = String, example = "dept-42")]
    pub id: DepartmentId,
    /// Display name.
    #[schema(example = "Water Supply")]
    pub name: String,
}
