//! Account review domain service.
//!
//! Implements the [`AccountReview`] driving port by wiring the stores to
//! the pure [`ApprovalWorkflow`]: load the registration, resolve the
//! department when one is required, run the transition, and persist the
//! result through the store's check-and-set contract.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::DomainResult;
use crate::domain::approval::ApprovalWorkflow;
use crate::domain::error::Error;
use crate::domain::ports::{
    AccountReview, DepartmentStore, DepartmentStoreError, UserStore, UserStoreError,
};
use crate::domain::user::{Department, DepartmentId, User, UserId};

fn map_user_store_error(error: UserStoreError) -> Error {
    match error {
        UserStoreError::Connection { message } => {
            Error::service_unavailable(format!("user store unavailable: {message}"))
        }
        UserStoreError::Query { message } => {
            Error::internal(format!("user store error: {message}"))
        }
        UserStoreError::StatusConflict { user_id, current } => {
            tracing::warn!(%user_id, current = %current, "review lost a concurrent race");
            Error::conflict(format!(
                "registration for user {user_id} is no longer pending"
            ))
            .with_details(json!({ "currentStatus": current.as_str() }))
        }
    }
}

fn map_department_store_error(error: DepartmentStoreError) -> Error {
    match error {
        DepartmentStoreError::Connection { message } => {
            Error::service_unavailable(format!("department store unavailable: {message}"))
        }
        DepartmentStoreError::Query { message } => {
            Error::internal(format!("department store error: {message}"))
        }
    }
}

/// Account review service implementing the driving port.
#[derive(Clone)]
pub struct AccountReviewService<U, D> {
    user_store: Arc<U>,
    department_store: Arc<D>,
    workflow: ApprovalWorkflow,
}

impl<U, D> AccountReviewService<U, D> {
    /// Create a new service with the given stores.
    pub const fn new(user_store: Arc<U>, department_store: Arc<D>) -> Self {
        Self {
            user_store,
            department_store,
            workflow: ApprovalWorkflow,
        }
    }
}

impl<U, D> AccountReviewService<U, D>
where
    U: UserStore,
    D: DepartmentStore,
{
    async fn load_user(&self, id: &UserId) -> DomainResult<User> {
        self.user_store
            .find_by_id(id)
            .await
            .map_err(map_user_store_error)?
            .ok_or_else(|| Error::not_found(format!("user {id} not found")))
    }

    /// Resolve the department an approval will attach, when the user
    /// requires one. Identities outside the department-officer predicate
    /// never trigger a lookup: their supplied department is ignored by
    /// the workflow anyway.
    async fn resolve_department(
        &self,
        user: &User,
        department_id: Option<DepartmentId>,
    ) -> DomainResult<Option<Department>> {
        if !user.is_department_officer() {
            return Ok(None);
        }
        let Some(department_id) = department_id else {
            return Ok(None);
        };

        self.department_store
            .find_by_id(&department_id)
            .await
            .map_err(map_department_store_error)?
            .ok_or_else(|| Error::not_found(format!("department {department_id} not found")))
            .map(Some)
    }

    async fn persist(&self, reviewed: &User) -> DomainResult<User> {
        self.user_store
            .complete_review(reviewed)
            .await
            .map_err(map_user_store_error)
    }
}

#[async_trait]
impl<U, D> AccountReview for AccountReviewService<U, D>
where
    U: UserStore,
    D: DepartmentStore,
{
    async fn list_pending_users(&self) -> DomainResult<Vec<User>> {
        self.user_store
            .find_pending()
            .await
            .map_err(map_user_store_error)
    }

    async fn list_departments(&self) -> DomainResult<Vec<Department>> {
        self.department_store
            .list()
            .await
            .map_err(map_department_store_error)
    }

    async fn approve_user(
        &self,
        id: &UserId,
        department_id: Option<DepartmentId>,
    ) -> DomainResult<User> {
        let user = self.load_user(id).await?;
        let department = self.resolve_department(&user, department_id).await?;
        let approved = self.workflow.approve(&user, department.as_ref())?;
        let persisted = self.persist(&approved).await?;

        tracing::info!(
            user_id = %persisted.id,
            role = %persisted.role,
            department_id = ?persisted.department_id,
            "registration approved"
        );
        Ok(persisted)
    }

    async fn reject_user(&self, id: &UserId, reason: &str) -> DomainResult<User> {
        let user = self.load_user(id).await?;
        let rejected = self.workflow.reject(&user, reason)?;
        let persisted = self.persist(&rejected).await?;

        tracing::info!(user_id = %persisted.id, "registration rejected");
        Ok(persisted)
    }
}

#[cfg(test)]
#[path = "account_review_service_tests.rs"]
mod tests;
