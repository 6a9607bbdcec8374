pub mod login;
pub mod not_found;
pub mod screens;

use crate::auth::use_auth;
use crate::icons::NavGlyph;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdMenu};
use dioxus_free_icons::Icon;
use shared_types::{authorize, Decision};
use shared_ui::{
    Sidebar, SidebarContent, SidebarFooter, SidebarHeader, SidebarInset, SidebarMenu,
    SidebarMenuButton, SidebarMenuItem, SidebarProvider, SidebarSeparator, SidebarState,
    SidebarTrigger, UserAvatar,
};

use login::Login;
use not_found::NotFound;
use screens::{
    AdminDashboard, ClientDashboard, Clients, CreateAdmin, CreateSubAdmin, Devices, Invoices,
    ManageAdmins, ManageCustomers, ManageSubAdmin, Payments, Products, SoldProducts,
    Subscription, SuperAdminDashboard, Warehouse,
};

/// Application routes. Every path except `/login` is checked by
/// [`AccessGuard`] against the signed-in role's menu.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AccessGuard)]
    #[route("/login")]
    Login {},
    #[layout(AppLayout)]
    #[route("/")]
    Root {},
    // ── Super admin ──
    #[route("/superAdminDashboard")]
    SuperAdminDashboard {},
    #[route("/createAdmin")]
    CreateAdmin {},
    #[route("/manageAdmins")]
    ManageAdmins {},
    // ── Admin ──
    #[route("/adminDashboard")]
    AdminDashboard {},
    #[route("/createSubAdmin")]
    CreateSubAdmin {},
    #[route("/manageSubAdmin")]
    ManageSubAdmin {},
    #[route("/clients")]
    Clients {},
    #[route("/warehouse")]
    Warehouse {},
    #[route("/devices")]
    Devices {},
    #[route("/subscription")]
    Subscription {},
    // ── Shared by admin and client ──
    #[route("/invoices")]
    Invoices {},
    #[route("/payments")]
    Payments {},
    // ── Client ──
    #[route("/clientDashboard")]
    ClientDashboard {},
    #[route("/manageCustomers")]
    ManageCustomers {},
    #[route("/products")]
    Products {},
    #[route("/soldProducts")]
    SoldProducts {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
    #[end_layout]
    #[end_layout]
}

/// The route for a path produced by a guard decision. Registry paths
/// always parse; anything else lands on the login page.
pub fn route_for(path: &str) -> Route {
    path.parse::<Route>().unwrap_or(Route::Login {})
}

/// Access guard layout: mounts the requested view only when the session
/// may see it, otherwise replaces the location with the redirect target.
#[component]
fn AccessGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let requested = route.to_string();

    let decision = {
        let shell = auth.shell.read();
        authorize(shell.registry(), shell.session(), &requested)
    };

    // Commit the navigation (active path, sidebar reset) after render.
    use_effect(use_reactive((&requested,), move |(requested,)| {
        let mut shell = auth.shell;
        let decision = shell.write().navigate(&requested);
        if !decision.is_mount() {
            navigator().replace(route_for(decision.target_path()));
        }
    }));

    match decision {
        Decision::Mount(_) => rsx! { Outlet::<Route> {} },
        Decision::RedirectToLogin | Decision::RedirectToRoleHome(_) => rsx! {
            div { class: "guard-redirect",
                p { "Redirecting..." }
            }
        },
    }
}

/// Dashboard chrome: role menu in the sidebar, title bar, page content.
#[component]
fn AppLayout() -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let current = route.to_string();

    let (menu, flags, session, title) = {
        let shell = auth.shell.read();
        (
            shell.menu(),
            shell.flags(),
            shell.session().clone(),
            shell.registry().label_for(&current).unwrap_or_default(),
        )
    };

    let state = SidebarState {
        mobile: flags.is_mobile,
        open: flags.is_mobile && flags.sidebar_visible,
        collapsed: flags.sidebar_collapsed,
    };
    let offset = if flags.is_mobile { 0 } else { flags.sidebar_width };
    let display_name = session.display_name().to_string();
    let role_name = session.role().display_name();
    let avatar = session.avatar_ref().map(str::to_string);

    let close_sidebar = move |_: ()| {
        let mut shell = auth.shell;
        shell.write().close_sidebar();
    };
    let toggle_sidebar = move |_: MouseEvent| {
        let mut shell = auth.shell;
        shell.write().toggle_sidebar();
    };
    let logout = move |_: MouseEvent| {
        let mut shell = auth.shell;
        let decision = shell.write().logout();
        navigator().replace(route_for(decision.target_path()));
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { state: state,
            Sidebar { state: state, on_close: close_sidebar,
                SidebarHeader {
                    span { class: "sidebar-brand-mark", "F" }
                    span { class: "sidebar-brand-name sidebar-menu-label", "Falcon" }
                }

                SidebarSeparator {}

                SidebarContent {
                    SidebarMenu {
                        for entry in menu {
                            SidebarMenuItem { key: "{entry.path}",
                                SidebarMenuButton {
                                    label: entry.label.to_string(),
                                    active: entry.is_active(&current),
                                    onclick: move |_| {
                                        // Pushing the current route does not re-run the guard.
                                        let mut shell = auth.shell;
                                        shell.write().navigate(entry.path);
                                        navigator().push(route_for(entry.path));
                                    },
                                    NavGlyph { icon: entry.icon }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    UserAvatar { name: display_name.clone(), image: avatar }
                    div { class: "sidebar-footer-text",
                        span { class: "sidebar-user-name", "{display_name}" }
                        span { class: "sidebar-user-role", "{role_name}" }
                    }
                    button {
                        class: "sidebar-logout",
                        r#type: "button",
                        title: "Log out",
                        "aria-label": "Log out",
                        onclick: logout,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                    }
                }
            }

            SidebarInset { offset: offset, padding: flags.content_padding,
                header { class: "topbar",
                    SidebarTrigger { onclick: toggle_sidebar,
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                    h1 { class: "topbar-title", "{title}" }
                }
                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// `/` has no view of its own; the guard always redirects it.
#[component]
fn Root() -> Element {
    rsx! {}
}
