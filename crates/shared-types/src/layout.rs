/// Widest viewport (in CSS pixels) still treated as mobile.
pub const MOBILE_MAX_WIDTH: u32 = 768;
/// Widest viewport still treated as tablet.
pub const TABLET_MAX_WIDTH: u32 = 1024;

pub const SIDEBAR_WIDTH: u16 = 280;
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 80;

/// Coarse device-size bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Mobile,
    Tablet,
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: u32) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            ViewportClass::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            ViewportClass::Tablet
        } else {
            ViewportClass::Desktop
        }
    }
}

/// Raw layout state. `viewport_class` is `None` until the first
/// viewport event arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutState {
    pub viewport_class: Option<ViewportClass>,
    /// Mobile drawer open. Always false off mobile.
    pub sidebar_open: bool,
    /// Sidebar shrunk to icons. Only read on tablet/desktop.
    pub sidebar_collapsed: bool,
}

/// Read-only flags derived from [`LayoutState`] for views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutFlags {
    pub viewport_class: Option<ViewportClass>,
    pub is_mobile: bool,
    pub sidebar_visible: bool,
    pub sidebar_collapsed: bool,
    /// Sidebar width in pixels, also the content's left offset.
    pub sidebar_width: u16,
    pub content_padding: u16,
}

/// Keeps [`LayoutState`] in step with viewport events and sidebar toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutController {
    state: LayoutState,
}

impl LayoutController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LayoutState {
        self.state
    }

    /// Recompute the viewport class. Leaving mobile closes the drawer.
    pub fn on_viewport_change(&mut self, width: u32) {
        let class = ViewportClass::from_width(width);
        self.state.viewport_class = Some(class);
        if class != ViewportClass::Mobile {
            self.state.sidebar_open = false;
        }
    }

    /// Mobile: open/close the drawer. Tablet/desktop: collapse/expand.
    /// Ignored until the viewport is known.
    pub fn toggle_sidebar(&mut self) {
        match self.state.viewport_class {
            Some(ViewportClass::Mobile) => self.state.sidebar_open = !self.state.sidebar_open,
            Some(ViewportClass::Tablet | ViewportClass::Desktop) => {
                self.state.sidebar_collapsed = !self.state.sidebar_collapsed
            }
            None => {}
        }
    }

    pub fn close_sidebar(&mut self) {
        self.state.sidebar_open = false;
    }

    /// A view was mounted: dismiss the mobile drawer, or expand a
    /// collapsed sidebar on larger screens.
    pub fn after_navigation(&mut self) {
        match self.state.viewport_class {
            Some(ViewportClass::Mobile) => self.state.sidebar_open = false,
            Some(_) => self.state.sidebar_collapsed = false,
            None => {}
        }
    }

    /// Clear both sidebar flags, keeping the viewport class.
    pub fn reset(&mut self) {
        self.state.sidebar_open = false;
        self.state.sidebar_collapsed = false;
    }

    pub fn flags(&self) -> LayoutFlags {
        let LayoutState {
            viewport_class,
            sidebar_open,
            sidebar_collapsed,
        } = self.state;
        let is_mobile = viewport_class == Some(ViewportClass::Mobile);
        let collapsed = !is_mobile && viewport_class.is_some() && sidebar_collapsed;
        let visible = if is_mobile { sidebar_open } else { true };
        let sidebar_width = match (visible, collapsed) {
            (false, _) => 0,
            (true, true) => SIDEBAR_COLLAPSED_WIDTH,
            (true, false) => SIDEBAR_WIDTH,
        };

        LayoutFlags {
            viewport_class,
            is_mobile,
            sidebar_visible: visible,
            sidebar_collapsed: collapsed,
            sidebar_width,
            content_padding: if is_mobile { 20 } else { 30 },
        }
    }
}
