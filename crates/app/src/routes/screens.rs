//! Placeholder views mounted for each menu path.

use dioxus::prelude::*;
use shared_types::RoleRegistry;

#[component]
fn Screen(path: &'static str, summary: &'static str) -> Element {
    let title = RoleRegistry::standard().label_for(path).unwrap_or(path);

    rsx! {
        section { class: "screen",
            h2 { class: "screen-title", "{title}" }
            p { class: "screen-summary", "{summary}" }
        }
    }
}

// ── Super admin ──

#[component]
pub fn SuperAdminDashboard() -> Element {
    rsx! { Screen { path: "/superAdminDashboard", summary: "Overview of every admin account." } }
}

#[component]
pub fn CreateAdmin() -> Element {
    rsx! { Screen { path: "/createAdmin", summary: "Register a new admin account." } }
}

#[component]
pub fn ManageAdmins() -> Element {
    rsx! { Screen { path: "/manageAdmins", summary: "Edit, suspend or remove admin accounts." } }
}

// ── Admin ──

#[component]
pub fn AdminDashboard() -> Element {
    rsx! { Screen { path: "/adminDashboard", summary: "Clients, warehouses and billing at a glance." } }
}

#[component]
pub fn CreateSubAdmin() -> Element {
    rsx! { Screen { path: "/createSubAdmin", summary: "Register a sub admin under this account." } }
}

#[component]
pub fn ManageSubAdmin() -> Element {
    rsx! { Screen { path: "/manageSubAdmin", summary: "Edit or remove sub admins." } }
}

#[component]
pub fn Clients() -> Element {
    rsx! { Screen { path: "/clients", summary: "Client businesses served by this account." } }
}

#[component]
pub fn Warehouse() -> Element {
    rsx! { Screen { path: "/warehouse", summary: "Warehouses and their stock locations." } }
}

#[component]
pub fn Devices() -> Element {
    rsx! { Screen { path: "/devices", summary: "Registered devices and cameras." } }
}

#[component]
pub fn Subscription() -> Element {
    rsx! { Screen { path: "/subscription", summary: "Current plan and renewal details." } }
}

// ── Shared ──

#[component]
pub fn Invoices() -> Element {
    rsx! { Screen { path: "/invoices", summary: "Issued invoices and their status." } }
}

#[component]
pub fn Payments() -> Element {
    rsx! { Screen { path: "/payments", summary: "Received and pending payments." } }
}

// ── Client ──

#[component]
pub fn ClientDashboard() -> Element {
    rsx! { Screen { path: "/clientDashboard", summary: "Customers, products and sales at a glance." } }
}

#[component]
pub fn ManageCustomers() -> Element {
    rsx! { Screen { path: "/manageCustomers", summary: "Customer records for this business." } }
}

#[component]
pub fn Products() -> Element {
    rsx! { Screen { path: "/products", summary: "Products available for sale." } }
}

#[component]
pub fn SoldProducts() -> Element {
    rsx! { Screen { path: "/soldProducts", summary: "Sales history by product." } }
}
