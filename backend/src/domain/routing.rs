//! Landing-path resolution for authenticated identities.
//!
//! [`landing_path`] maps an identity to the one canonical route it owns
//! immediately after authentication. It is pure, total, and
//! deterministic: it runs on every navigation and must never fail, so
//! incomplete identities degrade to a login path instead of an error.

use serde::{Deserialize, Serialize};

use super::user::{DepartmentId, Role, User, UserId};

/// Canonical landing route for administrators.
pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
/// Login entry for the administrator portal.
pub const ADMIN_LOGIN: &str = "/admin/login";
/// Login entry for the official portals (department and government).
pub const OFFICIAL_LOGIN: &str = "/official/login";
/// Login entry for the citizen portal.
pub const CITIZEN_LOGIN: &str = "/citizen/login";
/// Generic login fallback for sessions owning no portal.
pub const LOGIN: &str = "/login";

/// Routing-facing projection of a possibly partially-authenticated
/// session.
///
/// `User` always carries an id; mid-authentication sessions may not. The
/// resolver and guard consume this looser shape so both states share one
/// code path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Stable user identifier, when the session has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    /// Portal role claimed by the session.
    pub role: Role,
    /// Department attachment, when approved with one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<DepartmentId>,
}

impl Identity {
    /// Build an identity from known parts.
    pub const fn new(id: Option<UserId>, role: Role, department_id: Option<DepartmentId>) -> Self {
        Self {
            id,
            role,
            department_id,
        }
    }
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            id: Some(user.id.clone()),
            role: user.role,
            department_id: user.department_id.clone(),
        }
    }
}

/// Resolve the canonical landing path an identity owns.
///
/// Decision order (first match wins):
/// 1. `Admin` → [`ADMIN_DASHBOARD`].
/// 2. Department-track roles (see [`Role::is_department_track`]):
///    attachment first, then identity-only government routing, then the
///    official login. Attachment must be checked before identity,
///    otherwise an officer mid-approval would be routed into the
///    department portal with an undefined department.
/// 3. `GovernmentOfficial` → the government portal. By invariant this
///    role never carries an attachment; one present anyway is data
///    corruption and is ignored, not used for routing.
/// 4. `Citizen` → the citizen portal.
/// 5. Any role owning no portal of its own → the generic [`LOGIN`].
///
/// # Examples
/// ```
/// use backend::domain::{Identity, Role, UserId};
/// use backend::domain::routing::landing_path;
///
/// let citizen = Identity::new(
///     Some(UserId::new("c1").unwrap()),
///     Role::Citizen,
///     None,
/// );
/// assert_eq!(landing_path(&citizen), "/citizen/c1");
/// ```
pub fn landing_path(identity: &Identity) -> String {
    match identity.role {
        Role::Admin => ADMIN_DASHBOARD.to_owned(),
        role if role.is_department_track() => match (&identity.department_id, &identity.id) {
            (Some(department_id), _) => format!("/department/{department_id}"),
            (None, Some(id)) => format!("/government/{id}/dashboard"),
            (None, None) => OFFICIAL_LOGIN.to_owned(),
        },
        Role::GovernmentOfficial => identity.id.as_ref().map_or_else(
            || OFFICIAL_LOGIN.to_owned(),
            |id| format!("/government/{id}"),
        ),
        Role::Citizen => identity.id.as_ref().map_or_else(
            || CITIZEN_LOGIN.to_owned(),
            |id| format!("/citizen/{id}"),
        ),
        // Department-track roles are resolved by the guard arm above;
        // the remaining arm is the portal-less fallback.
        _ => LOGIN.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    #![expect(
        clippy::expect_used,
        reason = "test setup fails fast on invalid fixtures"
    )]

    use rstest::rstest;

    use super::*;
    use crate::domain::user::ApprovalStatus;

    fn dept_id(raw: &str) -> DepartmentId {
        DepartmentId::new(raw).expect("valid id")
    }

    fn user_id(raw: &str) -> UserId {
        UserId::new(raw).expect("valid id")
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some("a1"), None)]
    #[case(Some("a1"), Some("dept-1"))]
    fn admin_always_lands_on_the_dashboard(
        #[case] id: Option<&str>,
        #[case] department: Option<&str>,
    ) {
        let identity = Identity::new(
            id.map(user_id),
            Role::Admin,
            department.map(dept_id),
        );
        assert_eq!(landing_path(&identity), ADMIN_DASHBOARD);
    }

    #[rstest]
    #[case(Role::DepartmentOfficer)]
    #[case(Role::DepartmentHead)]
    #[case(Role::WardOfficer)]
    #[case(Role::CityCommissioner)]
    #[case(Role::DistrictCollector)]
    fn attached_officers_land_in_their_department(#[case] role: Role) {
        let identity = Identity::new(Some(user_id("o1")), role, Some(dept_id("d1")));
        assert_eq!(landing_path(&identity), "/department/d1");
    }

    #[rstest]
    fn unattached_officer_falls_back_to_the_government_portal() {
        let identity = Identity::new(Some(user_id("o1")), Role::DepartmentOfficer, None);
        assert_eq!(landing_path(&identity), "/government/o1/dashboard");
    }

    #[rstest]
    fn officer_without_identity_lands_on_the_official_login() {
        let identity = Identity::new(None, Role::DepartmentOfficer, None);
        assert_eq!(landing_path(&identity), OFFICIAL_LOGIN);
    }

    #[rstest]
    fn government_official_lands_in_the_government_portal() {
        let identity = Identity::new(Some(user_id("g1")), Role::GovernmentOfficial, None);
        assert_eq!(landing_path(&identity), "/government/g1");
    }

    #[rstest]
    fn corrupt_attachment_on_a_government_official_is_ignored() {
        let identity = Identity::new(
            Some(user_id("g1")),
            Role::GovernmentOfficial,
            Some(dept_id("d1")),
        );
        assert_eq!(landing_path(&identity), "/government/g1");
    }

    #[rstest]
    #[case(Some("c1"), "/citizen/c1")]
    #[case(None, CITIZEN_LOGIN)]
    fn citizens_land_in_the_citizen_portal(#[case] id: Option<&str>, #[case] expected: &str) {
        let identity = Identity::new(id.map(user_id), Role::Citizen, None);
        assert_eq!(landing_path(&identity), expected);
    }

    #[rstest]
    fn identity_projects_the_user_fields() {
        let mut user = User::pending(user_id("u9"), Role::DepartmentHead, false);
        user.department_id = Some(dept_id("d4"));
        user.approval_status = ApprovalStatus::Approved;

        let identity = Identity::from(&user);
        assert_eq!(identity.id, Some(user_id("u9")));
        assert_eq!(identity.role, Role::DepartmentHead);
        assert_eq!(identity.department_id, Some(dept_id("d4")));
        assert_eq!(landing_path(&identity), "/department/d4");
    }
}
