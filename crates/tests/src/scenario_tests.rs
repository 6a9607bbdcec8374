use pretty_assertions::assert_eq;
use shared_types::{
    authorize, resolve, Decision, MissingRolePolicy, Role, RoleRegistry, Session, ViewportClass,
};

use crate::common::{self, StubAuthenticator};

#[tokio::test]
async fn admin_login_resolves_admin_menu_in_order() {
    let shell = common::signed_in_shell("admin").await;

    assert_eq!(shell.session().role(), Role::Admin);
    assert_eq!(
        common::paths(&shell.menu()),
        vec![
            "/adminDashboard",
            "/createSubAdmin",
            "/manageSubAdmin",
            "/clients",
            "/warehouse",
            "/devices",
            "/subscription",
            "/invoices",
            "/payments",
        ]
    );
}

#[tokio::test]
async fn admin_requesting_client_dashboard_goes_home() {
    let mut shell = common::signed_in_shell("admin").await;

    let decision = shell.navigate("/clientDashboard");
    assert_eq!(decision, Decision::RedirectToRoleHome(Role::Admin));
    assert_eq!(decision.target_path(), "/adminDashboard");
    assert_eq!(shell.active_path(), "/adminDashboard");
}

#[test]
fn navigation_during_login_waits_for_the_outcome() {
    let mut shell = common::anonymous_shell();
    assert!(shell.begin_login());
    assert_eq!(shell.navigate("/adminDashboard"), Decision::RedirectToLogin);
    assert!(shell.menu().is_empty());

    let grant = StubAuthenticator::granting("admin").grant();
    shell.apply_login_result(Ok(grant)).unwrap();
    assert_eq!(
        shell.navigate("/adminDashboard"),
        Decision::Mount("/adminDashboard".into())
    );
}

#[tokio::test]
async fn tapping_the_open_page_again_dismisses_the_drawer() {
    let mut shell = common::signed_in_shell("admin").await;
    shell.on_viewport_change(375);
    shell.navigate("/clients");
    shell.toggle_sidebar();
    assert!(shell.layout_state().sidebar_open);

    assert_eq!(shell.navigate("/clients"), Decision::Mount("/clients".into()));
    assert!(!shell.layout_state().sidebar_open);
}

#[test]
fn anonymous_requesting_warehouse_goes_to_login() {
    let decision = authorize(
        RoleRegistry::standard(),
        &Session::anonymous(),
        "/warehouse",
    );
    assert_eq!(decision, Decision::RedirectToLogin);
}

#[test]
fn drawer_opened_on_mobile_is_closed_on_desktop() {
    let mut shell = common::anonymous_shell();
    shell.on_viewport_change(300);
    shell.toggle_sidebar();
    assert!(shell.layout_state().sidebar_open);

    shell.on_viewport_change(1200);
    let state = shell.layout_state();
    assert!(!state.sidebar_open);
    assert_eq!(state.viewport_class, Some(ViewportClass::Desktop));
}

#[test]
fn stored_record_with_null_role_opens_super_admin_menu() {
    let shell = common::shell_with_record(r#"{ "role": null }"#, MissingRolePolicy::SuperAdmin);

    assert_eq!(shell.session().role(), Role::SuperAdmin);
    assert_eq!(
        common::paths(&resolve(RoleRegistry::standard(), shell.session())),
        vec!["/superAdminDashboard", "/createAdmin", "/manageAdmins"]
    );
}

#[test]
fn stored_record_with_null_role_fails_closed_when_configured() {
    let shell = common::shell_with_record(r#"{ "role": null }"#, MissingRolePolicy::Anonymous);

    assert_eq!(shell.session(), &Session::anonymous());
    assert!(shell.store().is_empty());
    assert!(shell.menu().is_empty());
}

#[tokio::test]
async fn logout_from_payments_returns_to_login() {
    let mut shell = common::signed_in_shell("client").await;
    shell.on_viewport_change(375);
    assert_eq!(shell.navigate("/payments"), Decision::Mount("/payments".into()));
    shell.toggle_sidebar();

    assert_eq!(shell.logout(), Decision::RedirectToLogin);
    assert_eq!(shell.session().role(), Role::Anonymous);
    assert!(!shell.layout_state().sidebar_open);
    assert_eq!(shell.navigate("/payments"), Decision::RedirectToLogin);
}
