//! Port for user record persistence.

use async_trait::async_trait;

use crate::domain::user::{ApprovalStatus, User, UserId};

/// Errors raised by user store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    /// Store connection could not be established.
    #[error("user store connection failed: {message}")]
    Connection {
        /// Adapter-provided failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("user store query failed: {message}")]
    Query {
        /// Adapter-provided failure description.
        message: String,
    },
    /// The stored row left `Pending` between load and write.
    #[error("user {user_id} is no longer pending (currently {current})")]
    StatusConflict {
        /// Identifier of the contested user record.
        user_id: String,
        /// Status found in the store at write time.
        current: ApprovalStatus,
    },
}

impl UserStoreError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Helper for check-and-set conflicts.
    pub fn status_conflict(user_id: impl Into<String>, current: ApprovalStatus) -> Self {
        Self::StatusConflict {
            user_id: user_id.into(),
            current,
        }
    }
}

/// Port for reading and writing user records.
///
/// # Concurrency
///
/// Two administrators may review the same registration simultaneously.
/// [`UserStore::complete_review`] therefore carries a compare-and-swap
/// contract: the adapter must persist the reviewed record only if the
/// stored row is still `Pending` (a conditional update or a transaction
/// with row-level locking), and report
/// [`UserStoreError::StatusConflict`] otherwise. The loser of the race
/// surfaces as a `Conflict` to its operator, never a silent overwrite.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// List registrations awaiting review.
    async fn find_pending(&self) -> Result<Vec<User>, UserStoreError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError>;

    /// Persist a reviewed record, conditional on the stored row still
    /// being `Pending`. Returns the record as persisted.
    async fn complete_review(&self, user: &User) -> Result<User, UserStoreError>;
}
