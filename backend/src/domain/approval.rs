//! Registration approval state machine.
//!
//! `Pending` is the only state a transition may leave; `Approved` and
//! `Rejected` are both terminal. The workflow is pure: it validates a
//! transition against a snapshot of the user and returns the transitioned
//! record. Persisting the result atomically against a still-pending row
//! is the store's contract (see
//! [`UserStore::complete_review`](super::ports::UserStore::complete_review)).

use serde_json::json;

use super::DomainResult;
use super::error::Error;
use super::user::{ApprovalStatus, Department, User};

/// Stateless approval workflow.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApprovalWorkflow;

impl ApprovalWorkflow {
    /// Admit a pending registration.
    ///
    /// A department officer must be handed the resolved [`Department`] it
    /// is being attached to; approval without one fails with
    /// `invalid_request`. For every other identity a supplied department
    /// is ignored, since a government-track official is never attached.
    ///
    /// # Errors
    /// - `Conflict` when the registration is no longer pending.
    /// - `InvalidRequest` when a required department is missing.
    pub fn approve(&self, user: &User, department: Option<&Department>) -> DomainResult<User> {
        Self::require_pending(user)?;

        let mut approved = user.clone();
        if user.is_department_officer() {
            let department = department
                .ok_or_else(|| Error::invalid_request("department required"))?;
            approved.department_id = Some(department.id.clone());
        }
        approved.approval_status = ApprovalStatus::Approved;
        Ok(approved)
    }

    /// Turn a pending registration away.
    ///
    /// # Errors
    /// - `Conflict` when the registration is no longer pending.
    /// - `InvalidRequest` when the reason is blank.
    pub fn reject(&self, user: &User, reason: &str) -> DomainResult<User> {
        Self::require_pending(user)?;

        let reason = reason.trim();
        if reason.is_empty() {
            return Err(Error::invalid_request("reason required"));
        }

        let mut rejected = user.clone();
        rejected.approval_status = ApprovalStatus::Rejected;
        rejected.rejection_reason = Some(reason.to_owned());
        Ok(rejected)
    }

    fn require_pending(user: &User) -> DomainResult<()> {
        if user.approval_status.is_pending() {
            return Ok(());
        }
        Err(
            Error::conflict(format!("registration for user {} is no longer pending", user.id))
                .with_details(json!({
                    "currentStatus": user.approval_status.as_str(),
                })),
        )
    }
}
