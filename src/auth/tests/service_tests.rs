//! Service orchestration tests for login, signup, and logout.

use std::sync::Arc;

use crate::auth::{
    adapters::{InMemoryUserDirectory, SnapshotSessionStore},
    domain::AuthDomainError,
    ports::UserDirectory,
    services::{AuthService, AuthServiceError, SignupRequest},
};
use crate::notify::{MockNotifier, Notification, RecordingNotifier};
use crate::storage::{SnapshotStore, USER_KEY, adapters::InMemorySnapshotStore};
use rstest::{fixture, rstest};

type TestService = AuthService<InMemoryUserDirectory, SnapshotSessionStore<InMemorySnapshotStore>>;

struct Harness {
    service: TestService,
    directory: Arc<InMemoryUserDirectory>,
    store: Arc<InMemorySnapshotStore>,
    notifier: RecordingNotifier,
}

#[fixture]
fn harness() -> Harness {
    let store = Arc::new(InMemorySnapshotStore::new());
    let notifier = RecordingNotifier::new();
    let directory = Arc::new(InMemoryUserDirectory::seeded().expect("seed accounts"));
    let service = AuthService::new(
        Arc::clone(&directory),
        Arc::new(SnapshotSessionStore::new(Arc::clone(&store))),
        Arc::new(notifier.clone()),
    );
    Harness {
        service,
        directory,
        store,
        notifier,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_persists_sanitized_session(harness: Harness) {
    let user = harness
        .service
        .login("jane@example.com", "password123")
        .await
        .expect("login should succeed");

    assert_eq!(user.name(), "Jane Smith");
    let raw = harness
        .store
        .get(USER_KEY)
        .await
        .expect("read session")
        .expect("session should be stored");
    assert!(!raw.contains("password"));
    assert_eq!(
        harness.service.restore().await.expect("restore"),
        Some(user)
    );
    assert_eq!(
        harness.notifier.last(),
        Some(Notification::new("Welcome back!", "Logged in as Jane Smith"))
    );
}

#[rstest]
#[case("john@example.com", "wrong")]
#[case("nobody@example.com", "password123")]
#[case("not-an-email", "password123")]
#[tokio::test(flavor = "multi_thread")]
async fn login_rejects_unknown_credentials(
    harness: Harness,
    #[case] email: &str,
    #[case] password: &str,
) {
    let result = harness.service.login(email, password).await;

    assert!(matches!(result, Err(AuthServiceError::InvalidCredentials)));
    assert_eq!(harness.service.restore().await.expect("restore"), None);
    assert_eq!(
        harness.notifier.last(),
        Some(Notification::destructive("Login failed", "Invalid credentials"))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signup_assigns_next_identifier_and_signs_in(harness: Harness) {
    let user = harness
        .service
        .signup(SignupRequest::new("ada@example.com", "engine", "Ada Lovelace"))
        .await
        .expect("signup should succeed");

    assert_eq!(user.id().as_str(), "3");
    assert_eq!(
        user.avatar(),
        "https://ui-avatars.com/api/?name=Ada+Lovelace&background=10B981&color=fff"
    );
    assert_eq!(
        harness.service.current_user().await.expect("current user"),
        Some(user.clone())
    );

    harness.service.logout().await.expect("logout");
    let again = harness
        .service
        .login("ada@example.com", "engine")
        .await
        .expect("new account should be able to log in");
    assert_eq!(again, user);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signup_rejects_existing_email(harness: Harness) {
    let result = harness
        .service
        .signup(SignupRequest::new("john@example.com", "pw", "Another John"))
        .await;

    assert!(matches!(result, Err(AuthServiceError::UserAlreadyExists(_))));
    assert_eq!(
        harness.notifier.last(),
        Some(Notification::destructive("Signup failed", "User already exists"))
    );
}

#[rstest]
#[case::malformed_email("not-an-email", "engine", "Ada Lovelace", "invalid email address 'not-an-email'")]
#[case::blank_name("ada@example.com", "engine", "   ", "name must not be empty")]
#[case::empty_password("ada@example.com", "", "Ada Lovelace", "password must not be empty")]
#[tokio::test(flavor = "multi_thread")]
async fn signup_rejects_invalid_input_without_side_effects(
    harness: Harness,
    #[case] email: &str,
    #[case] password: &str,
    #[case] name: &str,
    #[case] reason: &str,
) {
    let accounts = harness.directory.count().await.expect("count accounts");

    let result = harness
        .service
        .signup(SignupRequest::new(email, password, name))
        .await;

    assert!(matches!(
        result,
        Err(AuthServiceError::Domain(
            AuthDomainError::InvalidEmail(_)
                | AuthDomainError::EmptyName
                | AuthDomainError::EmptyPassword
        ))
    ));
    assert_eq!(
        harness.notifier.last(),
        Some(Notification::destructive("Signup failed", reason))
    );
    assert_eq!(harness.store.get(USER_KEY).await.expect("read"), None);
    assert_eq!(harness.service.restore().await.expect("restore"), None);
    assert_eq!(
        harness.directory.count().await.expect("count accounts"),
        accounts
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logout_removes_the_session_snapshot(harness: Harness) {
    harness
        .service
        .login("john@example.com", "password123")
        .await
        .expect("login should succeed");
    harness.service.logout().await.expect("logout should succeed");

    assert_eq!(harness.store.get(USER_KEY).await.expect("read"), None);
    assert_eq!(
        harness.notifier.last().map(|n| n.title().to_owned()),
        Some("Logged out".to_owned())
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_login_notifies_exactly_once() {
    let mut notifier = MockNotifier::new();
    notifier
        .expect_notify()
        .withf(Notification::is_destructive)
        .times(1)
        .return_const(());
    let service = AuthService::new(
        Arc::new(InMemoryUserDirectory::seeded().expect("seed accounts")),
        Arc::new(crate::auth::adapters::InMemorySessionStore::new()),
        Arc::new(notifier),
    );

    let result = service.login("john@example.com", "nope").await;
    assert!(result.is_err());
}
