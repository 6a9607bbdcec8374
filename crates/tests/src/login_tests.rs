use pretty_assertions::assert_eq;
use shared_types::{
    AppErrorKind, Decision, LoginRequest, MissingRolePolicy, Role, LOGIN_FAILED_MESSAGE,
    PASSWORD_REQUIRED, USERNAME_REQUIRED,
};
use shell::credential_store::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};
use shell::{CredentialStore, Shell, ALREADY_SIGNED_IN};

use crate::common::{self, StubAuthenticator};

#[tokio::test]
async fn login_redirects_each_role_home() {
    for (raw, role, home) in [
        ("super_admin", Role::SuperAdmin, "/superAdminDashboard"),
        ("admin", Role::Admin, "/adminDashboard"),
        ("client", Role::Client, "/clientDashboard"),
    ] {
        let mut shell = common::anonymous_shell();
        let decision = shell
            .login(&StubAuthenticator::granting(raw), common::login_request())
            .await
            .unwrap();
        assert_eq!(decision, Decision::RedirectToRoleHome(role));
        assert_eq!(shell.active_path(), home);
    }
}

#[tokio::test]
async fn login_persists_tokens_and_record() {
    let shell = common::signed_in_shell("client").await;
    let store = shell.store();

    assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("access-token"));
    assert_eq!(store.get(REFRESH_TOKEN_KEY).as_deref(), Some("refresh-token"));
    let record: serde_json::Value = serde_json::from_str(&store.get(USER_KEY).unwrap()).unwrap();
    assert_eq!(record["role"], "client");
}

#[tokio::test]
async fn persisted_login_survives_a_restart() {
    let shell = common::signed_in_shell("admin").await;
    let store = shell.store().clone();

    let restarted = Shell::rehydrate(store, MissingRolePolicy::SuperAdmin);
    assert_eq!(restarted.session().role(), Role::Admin);
    assert_eq!(restarted.session().display_name(), "Test User");
    assert_eq!(restarted.session().subject_id(), "42");
    assert_eq!(restarted.active_path(), "/adminDashboard");
}

#[tokio::test]
async fn placeholder_image_is_not_an_avatar() {
    let shell = common::signed_in_shell("admin").await;
    assert_eq!(shell.session().avatar_ref(), None);
    assert_eq!(shell.session().display_name(), "Test User");
}

#[tokio::test]
async fn rejected_login_reports_server_reason() {
    let mut shell = common::anonymous_shell();
    let auth = StubAuthenticator::rejecting(r#"{"detail":"No active account found"}"#);

    let err = shell.login(&auth, common::login_request()).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::AuthenticationFailed);
    assert_eq!(err.friendly_message(), "No active account found");
    assert!(!shell.session().is_authenticated());
    assert!(shell.store().is_empty());
    assert_eq!(auth.calls(), 1);
}

#[tokio::test]
async fn rejected_login_without_reason_uses_generic_message() {
    let mut shell = common::anonymous_shell();
    let auth = StubAuthenticator::rejecting("<html>502</html>");

    let err = shell.login(&auth, common::login_request()).await.unwrap_err();
    assert_eq!(err.friendly_message(), LOGIN_FAILED_MESSAGE);
}

#[tokio::test]
async fn response_without_access_token_fails() {
    let mut shell = common::anonymous_shell();
    let err = shell
        .login(&StubAuthenticator::tokenless(), common::login_request())
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::AuthenticationFailed);
    assert!(!shell.is_authenticating());
}

#[tokio::test]
async fn second_login_while_signed_in_is_refused() {
    let mut shell = common::signed_in_shell("client").await;
    let auth = StubAuthenticator::granting("admin");

    let err = shell.login(&auth, common::login_request()).await.unwrap_err();
    assert_eq!(err.message, ALREADY_SIGNED_IN);
    assert_eq!(auth.calls(), 0);
    assert_eq!(shell.session().role(), Role::Client);
}

#[tokio::test]
async fn blank_credentials_never_reach_the_authenticator() {
    let mut shell = common::anonymous_shell();
    let auth = StubAuthenticator::granting("admin");

    let err = shell
        .login(&auth, LoginRequest::new("  \t", "password"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.friendly_message(), USERNAME_REQUIRED);

    let err = shell.login(&auth, LoginRequest::new("test", "")).await.unwrap_err();
    assert_eq!(err.friendly_message(), PASSWORD_REQUIRED);

    assert_eq!(auth.calls(), 0);
    assert!(!shell.is_authenticating());
    assert!(shell.begin_login());
}

#[tokio::test]
async fn signed_in_user_visiting_login_goes_home() {
    let mut shell = common::signed_in_shell("client").await;
    assert_eq!(
        shell.navigate("/login"),
        Decision::RedirectToRoleHome(Role::Client)
    );
}
