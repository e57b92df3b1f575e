//! Domain primitives, aggregates, and services.
//!
//! Purpose: define the strongly typed account model (users, roles,
//! approval state, organisational hierarchy) and the decision logic that
//! consumes it. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - [`User`], [`Role`], [`ApprovalStatus`], [`Department`] — account model.
//! - [`HierarchyInfo`] and [`hierarchy::describe`] — organisational labels.
//! - [`ApprovalWorkflow`] — the Pending → Approved/Rejected state machine.
//! - [`routing`] and [`access`] — landing-path resolution and route guards.
//! - [`ports`] — traits the persistence and HTTP layers implement/consume.

pub mod access;
pub mod account_review_service;
pub mod approval;
pub mod error;
pub mod hierarchy;
pub mod ports;
pub mod routing;
pub mod user;

pub use self::access::{AccessDecision, Portal, RoutePolicy};
pub use self::account_review_service::AccountReviewService;
pub use self::approval::ApprovalWorkflow;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::hierarchy::{HierarchyInfo, HierarchyLevel};
pub use self::routing::Identity;
pub use self::user::{
    ApprovalStatus, Department, DepartmentId, IdentifierError, Role, User, UserId,
};

/// Convenient domain result alias.
///
/// # Examples
/// ```
/// use backend::domain::{DomainResult, Error};
///
/// fn review() -> DomainResult<()> {
///     Err(Error::conflict("registration is no longer pending"))
/// }
/// ```
pub type DomainResult<T> = Result<T, Error>;
