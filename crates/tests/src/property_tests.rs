use pretty_assertions::assert_eq;
use shared_types::{authorize, resolve, Decision, LayoutController, Role, RoleRegistry, Session};

use crate::common;

const AUTHENTICATED: [Role; 3] = [Role::SuperAdmin, Role::Admin, Role::Client];

#[test]
fn every_authenticated_role_has_its_own_menu() {
    let registry = RoleRegistry::standard();
    for role in AUTHENTICATED {
        let entries = registry.entries_for_role(role);
        assert!(!entries.is_empty(), "{role}");
        assert!(entries.iter().all(|e| e.allowed_roles.contains(&role)), "{role}");
    }
}

#[test]
fn resolve_twice_gives_the_same_list() {
    let registry = RoleRegistry::standard();
    for role in Role::ALL {
        let session = common::session_for(role);
        assert_eq!(resolve(registry, &session), resolve(registry, &session));
    }
}

#[test]
fn own_paths_mount_and_foreign_paths_redirect_home() {
    let registry = RoleRegistry::standard();
    let every_path: Vec<&str> = Role::ALL
        .iter()
        .flat_map(|role| registry.entries_for_role(*role))
        .map(|e| e.path)
        .chain(["/", "/inventory", "/businessModule", "/nowhere"])
        .collect();

    for role in AUTHENTICATED {
        let session = common::session_for(role);
        let own = common::paths(registry.entries_for_role(role));
        for path in &every_path {
            let expected = if own.contains(path) {
                Decision::Mount(path.to_string())
            } else {
                Decision::RedirectToRoleHome(role)
            };
            assert_eq!(authorize(registry, &session, path), expected, "{role} {path}");
        }
    }
}

#[test]
fn anonymous_is_sent_to_login_for_every_protected_path() {
    let registry = RoleRegistry::standard();
    let anonymous = Session::anonymous();
    for role in AUTHENTICATED {
        for entry in registry.entries_for_role(role) {
            assert_eq!(
                authorize(registry, &anonymous, entry.path),
                Decision::RedirectToLogin,
                "{}",
                entry.path
            );
        }
    }
}

#[test]
fn desktop_mobile_desktop_always_ends_closed() {
    // Every toggle count between 0 and 4 on the mobile leg.
    for toggles in 0..5 {
        let mut layout = LayoutController::new();
        layout.on_viewport_change(1920);
        layout.on_viewport_change(500);
        for _ in 0..toggles {
            layout.toggle_sidebar();
        }
        layout.on_viewport_change(1920);
        assert!(!layout.state().sidebar_open, "{toggles} toggles");
    }
}

#[tokio::test]
async fn logout_clears_session_and_drawer() {
    let mut shell = common::signed_in_shell("admin").await;
    shell.on_viewport_change(320);
    shell.toggle_sidebar();

    shell.logout();
    assert_eq!(shell.session(), &Session::anonymous());
    assert!(!shell.layout_state().sidebar_open);
    assert_eq!(
        authorize(shell.registry(), shell.session(), "/adminDashboard"),
        Decision::RedirectToLogin
    );
}
