use std::sync::OnceLock;

use crate::models::Role;
use crate::route_guard::normalize_path;
use crate::session::Session;

/// Icon shown next to a menu label. The UI maps each variant to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Dashboard,
    UserPlus,
    Crown,
    Users,
    Briefcase,
    Warehouse,
    Camera,
    Refresh,
    Receipt,
    Wallet,
    Home,
    Package,
    Cart,
    CreditCard,
}

/// A single sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub icon: NavIcon,
    pub label: &'static str,
    pub path: &'static str,
    /// Never empty.
    pub allowed_roles: &'static [Role],
}

impl NavigationEntry {
    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }

    /// Whether this entry is the page at `current_path`.
    pub fn is_active(&self, current_path: &str) -> bool {
        normalize_path(current_path) == self.path
    }
}

const SUPER_ADMIN: &[Role] = &[Role::SuperAdmin];
const ADMIN: &[Role] = &[Role::Admin];
const CLIENT: &[Role] = &[Role::Client];

const fn entry(
    icon: NavIcon,
    label: &'static str,
    path: &'static str,
    allowed_roles: &'static [Role],
) -> NavigationEntry {
    NavigationEntry {
        icon,
        label,
        path,
        allowed_roles,
    }
}

pub const SUPER_ADMIN_MENU: &[NavigationEntry] = &[
    entry(NavIcon::Dashboard, "Super Admin Dashboard", "/superAdminDashboard", SUPER_ADMIN),
    entry(NavIcon::UserPlus, "Create Admin", "/createAdmin", SUPER_ADMIN),
    entry(NavIcon::Crown, "Manage Admins", "/manageAdmins", SUPER_ADMIN),
];

pub const ADMIN_MENU: &[NavigationEntry] = &[
    entry(NavIcon::Dashboard, "Admin Dashboard", "/adminDashboard", ADMIN),
    entry(NavIcon::UserPlus, "Create Sub Admin", "/createSubAdmin", ADMIN),
    entry(NavIcon::Users, "Manage Sub Admins", "/manageSubAdmin", ADMIN),
    entry(NavIcon::Briefcase, "Clients", "/clients", ADMIN),
    entry(NavIcon::Warehouse, "Warehouse", "/warehouse", ADMIN),
    entry(NavIcon::Camera, "Devices & Cams", "/devices", ADMIN),
    entry(NavIcon::Refresh, "Subscription", "/subscription", ADMIN),
    entry(NavIcon::Receipt, "Invoices", "/invoices", ADMIN),
    entry(NavIcon::Wallet, "Payments", "/payments", ADMIN),
];

pub const CLIENT_MENU: &[NavigationEntry] = &[
    entry(NavIcon::Home, "Dashboard", "/clientDashboard", CLIENT),
    entry(NavIcon::Users, "Manage Customers", "/manageCustomers", CLIENT),
    entry(NavIcon::Package, "View Products", "/products", CLIENT),
    entry(NavIcon::Cart, "Sold Products", "/soldProducts", CLIENT),
    entry(NavIcon::Receipt, "Invoices", "/invoices", CLIENT),
    entry(NavIcon::CreditCard, "Payments", "/payments", CLIENT),
];

/// Static mapping from role to its ordered menu.
///
/// Roles without a list (anonymous) get an empty menu.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoleRegistry {
    menus: Vec<(Role, Vec<NavigationEntry>)>,
}

impl RoleRegistry {
    /// Build a registry from per-role lists. Lists for the same role are
    /// concatenated in order; a path repeated within one role keeps its
    /// first entry.
    pub fn merged<I>(lists: I) -> Self
    where
        I: IntoIterator<Item = (Role, &'static [NavigationEntry])>,
    {
        let mut menus: Vec<(Role, Vec<NavigationEntry>)> = Vec::new();
        for (role, entries) in lists {
            let idx = match menus.iter().position(|(r, _)| *r == role) {
                Some(idx) => idx,
                None => {
                    menus.push((role, Vec::new()));
                    menus.len() - 1
                }
            };
            let menu = &mut menus[idx].1;
            for entry in entries {
                if entry.allowed_roles.is_empty() {
                    continue;
                }
                if !menu.iter().any(|existing| existing.path == entry.path) {
                    menu.push(*entry);
                }
            }
        }
        Self { menus }
    }

    /// The dashboard's registry, built once.
    pub fn standard() -> &'static RoleRegistry {
        static STANDARD: OnceLock<RoleRegistry> = OnceLock::new();
        STANDARD.get_or_init(|| {
            RoleRegistry::merged([
                (Role::SuperAdmin, SUPER_ADMIN_MENU),
                (Role::Admin, ADMIN_MENU),
                (Role::Client, CLIENT_MENU),
            ])
        })
    }

    /// Ordered entries registered for `role`. Never fails.
    pub fn entries_for_role(&self, role: Role) -> &[NavigationEntry] {
        self.menus
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or(&[])
    }

    /// First label registered for `path`, across all roles.
    pub fn label_for(&self, path: &str) -> Option<&'static str> {
        let path = normalize_path(path);
        self.all_entries().find(|e| e.path == path).map(|e| e.label)
    }

    fn all_entries(&self) -> impl Iterator<Item = &NavigationEntry> {
        self.menus.iter().flat_map(|(_, entries)| entries.iter())
    }
}

/// The menu a session may see: the role's list, keeping only entries
/// whose `allowed_roles` include the session's role.
pub fn resolve(registry: &RoleRegistry, session: &Session) -> Vec<NavigationEntry> {
    let role = session.role();
    registry
        .entries_for_role(role)
        .iter()
        .filter(|entry| entry.allows(role))
        .copied()
        .collect()
}
