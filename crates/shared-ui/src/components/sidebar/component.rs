use dioxus::prelude::*;

// ─── State ─────────────────────────────────────────────────────────────

/// Sidebar presentation driven by the owner of the layout.
///
/// On mobile the sidebar is an overlay drawer shown only while `open`.
/// Elsewhere it is always shown, either full width or collapsed to icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    pub mobile: bool,
    pub open: bool,
    pub collapsed: bool,
}

impl SidebarState {
    pub fn visible(&self) -> bool {
        !self.mobile || self.open
    }

    pub fn data_state(&self) -> &'static str {
        if !self.visible() {
            "closed"
        } else if self.collapsed && !self.mobile {
            "collapsed"
        } else {
            "expanded"
        }
    }
}

// ─── Layout components ─────────────────────────────────────────────────

/// Wraps the sidebar and the inset, exposing the state as data attributes
/// for the stylesheet.
#[component]
pub fn SidebarProvider(
    state: SidebarState,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sidebar-provider", None, false),
        Attribute::new("data-sidebar-state", state.data_state(), None, false),
        Attribute::new(
            "data-mobile",
            if state.mobile { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// The sidebar itself. On mobile an open drawer gets a backdrop that
/// calls `on_close` when tapped.
#[component]
pub fn Sidebar(
    state: SidebarState,
    #[props(default)] on_close: EventHandler<()>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new("data-state", state.data_state(), None, false),
        Attribute::new(
            "aria-hidden",
            if state.visible() { "false" } else { "true" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if state.mobile && state.open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| on_close.call(()),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

/// Brand area at the top of the sidebar.
#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        nav {
            ..merged,
            {children}
        }
    }
}

/// Bottom section, holding the signed-in user and the logout control.
#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

// ─── Menu components ───────────────────────────────────────────────────

#[component]
pub fn SidebarMenu(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-menu", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        ul {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarMenuItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-menu-item", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        li {
            ..merged,
            {children}
        }
    }
}

/// A menu link. `children` is the icon; `label` is hidden by the
/// stylesheet when the sidebar is collapsed and doubles as the tooltip.
#[component]
pub fn SidebarMenuButton(
    label: String,
    #[props(default = false)] active: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sidebar-menu-button", None, false),
        Attribute::new(
            "data-active",
            if active { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            title: "{label}",
            "aria-current": if active { "page" } else { "false" },
            onclick: move |evt| onclick.call(evt),
            ..merged,
            span { class: "sidebar-menu-icon", {children} }
            span { class: "sidebar-menu-label", "{label}" }
        }
    }
}

// ─── Utility components ────────────────────────────────────────────────

/// Menu button that opens the drawer or collapses the sidebar.
#[component]
pub fn SidebarTrigger(
    #[props(default)] onclick: EventHandler<MouseEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-trigger", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            "aria-label": "Toggle sidebar",
            onclick: move |evt| onclick.call(evt),
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarSeparator(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "sidebar-separator", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        hr {
            ..merged,
        }
    }
}

/// Main content area beside the sidebar, offset by `offset` pixels.
#[component]
pub fn SidebarInset(
    offset: u16,
    padding: u16,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sidebar-inset", None, false),
        Attribute::new(
            "style",
            format!("margin-left: {offset}px; padding: {padding}px;"),
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        main {
            ..merged,
            {children}
        }
    }
}
