//! Per-navigation access guard.
//!
//! [`evaluate`] decides whether an identity may reach a route. It is pure
//! and never fails: anonymous or unauthorised sessions degrade to a
//! redirect or denial, never an error, because the guard runs on every
//! navigation and must not crash the UI. The identity it receives is
//! assumed already loaded and current; the guard performs no I/O.

use super::routing::{ADMIN_LOGIN, CITIZEN_LOGIN, Identity, LOGIN, OFFICIAL_LOGIN};
use super::user::{DepartmentId, Role};

/// Portal family a route belongs to, determining where an anonymous
/// session is sent to authenticate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Portal {
    /// Administrator portal.
    Admin,
    /// Department-scoped officer portal.
    Department,
    /// Government-officials portal.
    Government,
    /// Citizen portal.
    Citizen,
    /// Routes shared across portal families, owning no login of their
    /// own.
    Shared,
}

impl Portal {
    /// Authentication entry point for this portal family.
    pub const fn login_path(self) -> &'static str {
        match self {
            Self::Admin => ADMIN_LOGIN,
            Self::Department | Self::Government => OFFICIAL_LOGIN,
            Self::Citizen => CITIZEN_LOGIN,
            Self::Shared => LOGIN,
        }
    }
}

/// Access requirements a route declares.
///
/// Built once per route by the routing layer and evaluated against each
/// navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePolicy {
    portal: Portal,
    roles: Vec<Role>,
    department_in_route: Option<DepartmentId>,
    require_unattached: bool,
}

impl RoutePolicy {
    /// Declare a route reachable by the given roles.
    pub fn new(portal: Portal, roles: impl Into<Vec<Role>>) -> Self {
        Self {
            portal,
            roles: roles.into(),
            department_in_route: None,
            require_unattached: false,
        }
    }

    /// Require the user's attachment to equal the department carried in
    /// the requested route.
    #[must_use]
    pub fn with_department_match(mut self, department_id: DepartmentId) -> Self {
        self.department_in_route = Some(department_id);
        self
    }

    /// Require the user to carry no department attachment. A now-attached
    /// officer belongs in the department portal and is redirected there.
    #[must_use]
    pub const fn require_unattached(mut self) -> Self {
        self.require_unattached = true;
        self
    }
}

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// The identity may view the route.
    Allow,
    /// The identity belongs elsewhere; navigate to `target` instead.
    Redirect {
        /// Path the navigation is sent to.
        target: String,
    },
    /// The identity is authenticated but not permitted here.
    Deny {
        /// Operator-facing reason.
        reason: String,
    },
}

/// Evaluate a route's policy against the current session.
///
/// Checks run in declaration order: authentication, role membership,
/// department match, attachment requirement.
///
/// # Examples
/// ```
/// use backend::domain::access::{evaluate, AccessDecision, Portal, RoutePolicy};
/// use backend::domain::Role;
///
/// let policy = RoutePolicy::new(Portal::Admin, [Role::Admin]);
/// let decision = evaluate(None, &policy);
/// assert_eq!(
///     decision,
///     AccessDecision::Redirect { target: "/admin/login".into() }
/// );
/// ```
pub fn evaluate(identity: Option<&Identity>, policy: &RoutePolicy) -> AccessDecision {
    let Some(identity) = identity else {
        return AccessDecision::Redirect {
            target: policy.portal.login_path().to_owned(),
        };
    };

    if !policy.roles.contains(&identity.role) {
        return AccessDecision::Deny {
            reason: "role not permitted".to_owned(),
        };
    }

    if let Some(required) = &policy.department_in_route {
        if identity.department_id.as_ref() != Some(required) {
            return AccessDecision::Deny {
                reason: "department mismatch".to_owned(),
            };
        }
        return AccessDecision::Allow;
    }

    if policy.require_unattached {
        if let Some(department_id) = &identity.department_id {
            return AccessDecision::Redirect {
                target: format!("/department/{department_id}"),
            };
        }
    }

    AccessDecision::Allow
}
