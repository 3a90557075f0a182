//! Tests for the identity service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::rstest;

use super::*;
use crate::domain::ports::{MockPasswordHasher, MockUserRepository};
use crate::domain::{EmailAddress, ErrorCode, StoredCredentials, UserId};

fn hasher_returning(hash: &'static str) -> MockPasswordHasher {
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .times(1)
        .returning(move |_| Ok(PasswordHash::new(hash)));
    hasher
}

fn signup_details() -> SignupDetails {
    SignupDetails::try_from_parts(" Ada ", " ADA@Example.com ", Some(" "), "secret")
        .expect("valid signup")
}

fn stored(status: AccountStatus) -> StoredCredentials {
    StoredCredentials {
        profile: UserProfile {
            id: UserId::new(7),
            name: "Ada".into(),
            email: EmailAddress::parse("ada@example.com").expect("valid email"),
            phone: Some("07700 900123".into()),
            role: Role::Client,
        },
        password_hash: PasswordHash::new("$2b$10$stored"),
        status,
    }
}

fn credentials(password: &str) -> LoginCredentials {
    LoginCredentials::try_from_parts("Ada@Example.com", password).expect("valid credentials")
}

#[tokio::test]
async fn signup_inserts_an_active_client_with_the_hash() {
    let mut users = MockUserRepository::new();
    users
        .expect_insert_if_absent()
        .withf(|user| {
            user.name == "Ada"
                && user.email.as_str() == "ada@example.com"
                && user.phone.is_none()
                && user.role == Role::Client
                && user.status == AccountStatus::Active
                && user.password_hash.as_str() == "$2b$10$derived"
        })
        .times(1)
        .return_once(|_| Ok(Some(UserId::new(1))));

    let service = IdentityService::new(Arc::new(users), Arc::new(hasher_returning("$2b$10$derived")));
    let outcome = service.signup(&signup_details()).await.expect("signup succeeds");

    assert_eq!(outcome.id, UserId::new(1));
    assert_eq!(outcome.email.as_str(), "ada@example.com");
}

#[tokio::test]
async fn signup_with_taken_email_is_a_conflict() {
    let mut users = MockUserRepository::new();
    users
        .expect_insert_if_absent()
        .times(1)
        .return_once(|_| Ok(None));

    let service = IdentityService::new(Arc::new(users), Arc::new(hasher_returning("$2b$10$x")));
    let error = service
        .signup(&signup_details())
        .await
        .expect_err("duplicate email");

    assert_eq!(error.code(), ErrorCode::Conflict);
    assert_eq!(error.message(), EMAIL_TAKEN_MESSAGE);
}

#[rstest]
#[case(UserPersistenceError::connection("refused"))]
#[case(UserPersistenceError::query("relation missing"))]
#[tokio::test]
async fn signup_store_failures_are_internal(#[case] failure: UserPersistenceError) {
    let mut users = MockUserRepository::new();
    users
        .expect_insert_if_absent()
        .times(1)
        .return_once(move |_| Err(failure));

    let service = IdentityService::new(Arc::new(users), Arc::new(hasher_returning("$2b$10$x")));
    let error = service
        .signup(&signup_details())
        .await
        .expect_err("store failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[tokio::test]
async fn signup_hash_failure_skips_the_insert() {
    let mut users = MockUserRepository::new();
    users.expect_insert_if_absent().times(0);
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .times(1)
        .return_once(|_| Err(PasswordHasherError::hash("rng unavailable")));

    let service = IdentityService::new(Arc::new(users), Arc::new(hasher));
    let error = service
        .signup(&signup_details())
        .await
        .expect_err("hash failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[tokio::test]
async fn login_returns_the_sanitised_profile() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_credentials_by_email()
        .withf(|email| email.as_str() == "ada@example.com")
        .times(1)
        .return_once(|_| Ok(Some(stored(AccountStatus::Active))));
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_verify()
        .withf(|password, hash| password == "secret" && hash.as_str() == "$2b$10$stored")
        .times(1)
        .return_once(|_, _| Ok(true));

    let service = IdentityService::new(Arc::new(users), Arc::new(hasher));
    let profile = service
        .authenticate(&credentials("secret"))
        .await
        .expect("login succeeds");

    assert_eq!(profile.id, UserId::new(7));
    assert_eq!(profile.role, Role::Client);
}

#[rstest]
#[case::wrong_password(Some(AccountStatus::Active), false)]
#[case::inactive_account(Some(AccountStatus::Inactive), true)]
#[case::unknown_email(None, false)]
#[tokio::test]
async fn rejected_logins_share_one_error(
    #[case] status: Option<AccountStatus>,
    #[case] password_matches: bool,
) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_credentials_by_email()
        .times(1)
        .return_once(move |_| Ok(status.map(stored)));
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_verify()
        .times(1)
        .return_once(move |_, _| Ok(password_matches));

    let service = IdentityService::new(Arc::new(users), Arc::new(hasher));
    let error = service
        .authenticate(&credentials("guess"))
        .await
        .expect_err("login rejected");

    assert_eq!(error.code(), ErrorCode::Unauthorized);
    assert_eq!(error.message(), INVALID_CREDENTIALS_MESSAGE);
}

#[tokio::test]
async fn unknown_email_still_runs_a_verify() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_credentials_by_email()
        .times(1)
        .return_once(|_| Ok(None));
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_verify()
        .with(eq("guess"), eq(PasswordHash::new(TIMING_EQUALISER_HASH)))
        .times(1)
        .return_once(|_, _| Err(PasswordHasherError::verify("ignored")));

    let service = IdentityService::new(Arc::new(users), Arc::new(hasher));
    let error = service
        .authenticate(&credentials("guess"))
        .await
        .expect_err("login rejected");

    assert_eq!(error.code(), ErrorCode::Unauthorized);
}

#[tokio::test]
async fn login_store_failure_is_internal() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_credentials_by_email()
        .times(1)
        .return_once(|_| Err(UserPersistenceError::connection("pool timed out")));
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_verify().times(0);

    let service = IdentityService::new(Arc::new(users), Arc::new(hasher));
    let error = service
        .authenticate(&credentials("secret"))
        .await
        .expect_err("store failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}
