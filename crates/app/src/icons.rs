use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdBuilding, LdCamera, LdCreditCard, LdCrown, LdLayoutDashboard, LdPackage,
    LdReceipt, LdRefreshCw, LdShoppingCart, LdUserPlus, LdUsers, LdWallet,
};
use dioxus_free_icons::Icon;
use shared_types::NavIcon;

/// Lucide glyph for a menu entry.
#[component]
pub fn NavGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard | NavIcon::Home => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
        },
        NavIcon::UserPlus => rsx! { Icon::<LdUserPlus> { icon: LdUserPlus, width: 18, height: 18 } },
        NavIcon::Crown => rsx! { Icon::<LdCrown> { icon: LdCrown, width: 18, height: 18 } },
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::Briefcase => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } },
        NavIcon::Warehouse => rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: 18, height: 18 } },
        NavIcon::Camera => rsx! { Icon::<LdCamera> { icon: LdCamera, width: 18, height: 18 } },
        NavIcon::Refresh => rsx! { Icon::<LdRefreshCw> { icon: LdRefreshCw, width: 18, height: 18 } },
        NavIcon::Receipt => rsx! { Icon::<LdReceipt> { icon: LdReceipt, width: 18, height: 18 } },
        NavIcon::Wallet => rsx! { Icon::<LdWallet> { icon: LdWallet, width: 18, height: 18 } },
        NavIcon::Package => rsx! { Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 } },
        NavIcon::Cart => rsx! { Icon::<LdShoppingCart> { icon: LdShoppingCart, width: 18, height: 18 } },
        NavIcon::CreditCard => rsx! { Icon::<LdCreditCard> { icon: LdCreditCard, width: 18, height: 18 } },
    }
}
