//! Tests for the account review service.
#![expect(
    clippy::expect_used,
    reason = "test setup fails fast on invalid fixtures"
)]

use std::sync::Arc;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{FixtureDepartmentStore, MockDepartmentStore, MockUserStore};
use crate::domain::user::{ApprovalStatus, Role};

fn pending_officer(id: &str) -> User {
    User::pending(
        UserId::new(id).expect("valid id"),
        Role::DepartmentOfficer,
        false,
    )
}

fn pending_official(id: &str) -> User {
    User::pending(
        UserId::new(id).expect("valid id"),
        Role::GovernmentOfficial,
        true,
    )
}

fn department(id: &str) -> Department {
    Department {
        id: DepartmentId::new(id).expect("valid id"),
        name: "Sanitation".to_owned(),
    }
}

fn user_id(raw: &str) -> UserId {
    UserId::new(raw).expect("valid id")
}

fn dept_id(raw: &str) -> DepartmentId {
    DepartmentId::new(raw).expect("valid id")
}

fn service<U, D>(users: U, departments: D) -> AccountReviewService<U, D> {
    AccountReviewService::new(Arc::new(users), Arc::new(departments))
}

#[tokio::test]
async fn list_pending_users_delegates_untransformed() {
    let records = vec![pending_officer("u1"), pending_official("u2")];
    let expected = records.clone();

    let mut users = MockUserStore::new();
    users
        .expect_find_pending()
        .times(1)
        .return_once(move || Ok(records));

    let service = service(users, FixtureDepartmentStore);
    let listed = service.list_pending_users().await.expect("listing succeeds");
    assert_eq!(listed, expected);
}

#[tokio::test]
async fn list_departments_delegates_to_the_store() {
    let mut departments = MockDepartmentStore::new();
    departments
        .expect_list()
        .times(1)
        .return_once(|| Ok(vec![department("d1"), department("d2")]));

    let service = service(MockUserStore::new(), departments);
    let listed = service.list_departments().await.expect("listing succeeds");
    assert_eq!(listed.len(), 2);
}

#[tokio::test]
async fn approving_an_officer_attaches_the_resolved_department() {
    let mut users = MockUserStore::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(pending_officer("u1"))));
    users
        .expect_complete_review()
        .withf(|user: &User| {
            user.approval_status == ApprovalStatus::Approved
                && user.department_id.as_ref().map(DepartmentId::as_str) == Some("dept-42")
        })
        .times(1)
        .returning(|user| Ok(user.clone()));

    let mut departments = MockDepartmentStore::new();
    departments
        .expect_find_by_id()
        .withf(|id: &DepartmentId| id.as_str() == "dept-42")
        .times(1)
        .return_once(|_| Ok(Some(department("dept-42"))));

    let service = service(users, departments);
    let approved = service
        .approve_user(&user_id("u1"), Some(dept_id("dept-42")))
        .await
        .expect("approval succeeds");

    assert_eq!(approved.approval_status, ApprovalStatus::Approved);
    assert_eq!(
        approved.department_id.as_ref().map(DepartmentId::as_str),
        Some("dept-42")
    );
}

#[tokio::test]
async fn approving_an_officer_without_a_department_is_refused_before_persisting() {
    let mut users = MockUserStore::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(pending_officer("u1"))));
    users.expect_complete_review().times(0);

    let service = service(users, FixtureDepartmentStore);
    let error = service
        .approve_user(&user_id("u1"), None)
        .await
        .expect_err("department required");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "department required");
}

#[tokio::test]
async fn approving_with_an_unknown_department_is_not_found() {
    let mut users = MockUserStore::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(pending_officer("u1"))));
    users.expect_complete_review().times(0);

    let mut departments = MockDepartmentStore::new();
    departments
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));

    let service = service(users, departments);
    let error = service
        .approve_user(&user_id("u1"), Some(dept_id("dept-9")))
        .await
        .expect_err("unknown department");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn approving_a_government_official_never_looks_up_a_department() {
    let mut users = MockUserStore::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(pending_official("g1"))));
    users
        .expect_complete_review()
        .withf(|user: &User| {
            user.approval_status == ApprovalStatus::Approved && user.department_id.is_none()
        })
        .times(1)
        .returning(|user| Ok(user.clone()));

    let mut departments = MockDepartmentStore::new();
    departments.expect_find_by_id().times(0);

    let service = service(users, departments);
    let approved = service
        .approve_user(&user_id("g1"), Some(dept_id("dept-1")))
        .await
        .expect("approval succeeds");

    assert!(approved.department_id.is_none());
}

#[tokio::test]
async fn approving_a_missing_user_is_not_found() {
    let mut users = MockUserStore::new();
    users.expect_find_by_id().times(1).return_once(|_| Ok(None));

    let service = service(users, FixtureDepartmentStore);
    let error = service
        .approve_user(&user_id("ghost"), None)
        .await
        .expect_err("missing user");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn losing_the_review_race_surfaces_a_conflict() {
    let mut users = MockUserStore::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(pending_official("g1"))));
    users.expect_complete_review().times(1).return_once(|_| {
        Err(UserStoreError::status_conflict("g1", ApprovalStatus::Rejected))
    });

    let service = service(users, FixtureDepartmentStore);
    let error = service
        .approve_user(&user_id("g1"), None)
        .await
        .expect_err("race lost");

    assert_eq!(error.code(), ErrorCode::Conflict);
    assert_eq!(
        error.details().and_then(|d| d["currentStatus"].as_str()),
        Some("rejected")
    );
}

#[tokio::test]
async fn store_connection_failures_surface_as_service_unavailable() {
    let mut users = MockUserStore::new();
    users
        .expect_find_pending()
        .times(1)
        .return_once(|| Err(UserStoreError::connection("pool unavailable")));

    let service = service(users, FixtureDepartmentStore);
    let error = service
        .list_pending_users()
        .await
        .expect_err("store unreachable");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[tokio::test]
async fn store_query_failures_surface_as_internal_errors() {
    let mut users = MockUserStore::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Err(UserStoreError::query("relation missing")));

    let service = service(users, FixtureDepartmentStore);
    let error = service
        .approve_user(&user_id("u1"), None)
        .await
        .expect_err("query failed");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[tokio::test]
async fn department_store_failures_surface_through_listing() {
    let mut departments = MockDepartmentStore::new();
    departments
        .expect_list()
        .times(1)
        .return_once(|| Err(DepartmentStoreError::connection("pool unavailable")));

    let service = service(MockUserStore::new(), departments);
    let error = service
        .list_departments()
        .await
        .expect_err("store unreachable");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[tokio::test]
async fn rejecting_records_the_reason() {
    let mut users = MockUserStore::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(pending_officer("u1"))));
    users
        .expect_complete_review()
        .withf(|user: &User| {
            user.approval_status == ApprovalStatus::Rejected
                && user.rejection_reason.as_deref() == Some("insufficient proof")
        })
        .times(1)
        .returning(|user| Ok(user.clone()));

    let service = service(users, FixtureDepartmentStore);
    let rejected = service
        .reject_user(&user_id("u1"), "insufficient proof")
        .await
        .expect("rejection succeeds");

    assert_eq!(rejected.approval_status, ApprovalStatus::Rejected);
}

#[tokio::test]
async fn rejecting_with_a_blank_reason_is_refused_before_persisting() {
    let mut users = MockUserStore::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(pending_officer("u1"))));
    users.expect_complete_review().times(0);

    let service = service(users, FixtureDepartmentStore);
    let error = service
        .reject_user(&user_id("u1"), "   ")
        .await
        .expect_err("reason required");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}
