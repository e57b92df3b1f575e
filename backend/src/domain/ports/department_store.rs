//! Port for department reference data.

use async_trait::async_trait;

use crate::domain::user::{Department, DepartmentId};

/// Errors raised by department store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DepartmentStoreError {
    /// Store connection could not be established.
    #[error("department store connection failed: {message}")]
    Connection {
        /// Adapter-provided failure description.
        message: String,
    },
    /// Query failed during execution.
    #[error("department store query failed: {message}")]
    Query {
        /// Adapter-provided failure description.
        message: String,
    },
}

impl DepartmentStoreError {
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
}

/// Port for looking up departments. Departments are immutable reference
/// data; this port never mutates them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentStore: Send + Sync {
    /// Fetch a department by identifier.
    async fn find_by_id(
        &self,
        id: &DepartmentId,
    ) -> Result<Option<Department>, DepartmentStoreError>;

    /// List all departments.
    async fn list(&self) -> Result<Vec<Department>, DepartmentStoreError>;
}

/// Fixture implementation for tests that do not exercise department
/// lookups.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDepartmentStore;

#[async_trait]
impl DepartmentStore for FixtureDepartmentStore {
    async fn find_by_id(
        &self,
        _id: &DepartmentId,
    ) -> Result<Option<Department>, DepartmentStoreError> {
        Ok(None)
    }

    async fn list(&self) -> Result<Vec<Department>, DepartmentStoreError> {
        Ok(Vec::new())
    }
}
