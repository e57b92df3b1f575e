//! Driving port for the administrative review surface.

use async_trait::async_trait;

use crate::domain::DomainResult;
use crate::domain::user::{Department, DepartmentId, User, UserId};

/// Operations the administrative HTTP layer calls to review
/// registrations.
///
/// Errors surface to the operator performing the review: invalid input
/// as `InvalidRequest`, stale reviews as `Conflict`, and missing records
/// as `NotFound`, all carried by the domain [`Error`](crate::domain::Error).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountReview: Send + Sync {
    /// List registrations awaiting review, untransformed.
    async fn list_pending_users(&self) -> DomainResult<Vec<User>>;

    /// List departments an officer may be attached to.
    async fn list_departments(&self) -> DomainResult<Vec<Department>>;

    /// Admit a pending registration, attaching the given department when
    /// the user requires one.
    async fn approve_user(
        &self,
        id: &UserId,
        department_id: Option<DepartmentId>,
    ) -> DomainResult<User>;

    /// Turn a pending registration away, recording the reason.
    async fn reject_user(&self, id: &UserId, reason: &str) -> DomainResult<User>;
}
