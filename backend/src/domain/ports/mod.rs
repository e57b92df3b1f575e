//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports describe how the domain expects to reach its backing
//! stores; the driving port is the surface the administrative HTTP layer
//! calls. Each trait exposes strongly typed errors so adapters map their
//! failures into predictable variants instead of returning
//! `anyhow::Result`.

mod account_review;
mod department_store;
mod user_store;

pub use self::account_review::AccountReview;
pub use self::department_store::{DepartmentStore, DepartmentStoreError, FixtureDepartmentStore};
pub use self::user_store::{UserStore, UserStoreError};

#[cfg(test)]
pub use self::account_review::MockAccountReview;
#[cfg(test)]
pub use self::department_store::MockDepartmentStore;
#[cfg(test)]
pub use self::user_store::MockUserStore;
