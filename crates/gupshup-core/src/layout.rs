//! View state for the chat screen
//!
//! Pure state machines the desktop view drives from its event handlers:
//! sidebar/detail layout, per-image loading state and scroll triggering.

/// Widths below this are treated as a phone-sized viewport.
pub const NARROW_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewport {
    Narrow,
    #[default]
    Wide,
}

impl Viewport {
    pub fn from_width(width: f64) -> Self {
        if width <= NARROW_BREAKPOINT_PX {
            Viewport::Narrow
        } else {
            Viewport::Wide
        }
    }

    pub fn is_narrow(&self) -> bool {
        matches!(self, Viewport::Narrow)
    }
}

/// Peer list / thread layout.
///
/// On a wide viewport both panels are always shown. On a narrow one only
/// one is, starting with the detail panel: selecting a peer hides the list,
/// "show list" brings it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLayout {
    viewport: Viewport,
    active_peer: Option<String>,
    sidebar_visible: bool,
}

impl Default for ChatLayout {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl ChatLayout {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            active_peer: None,
            sidebar_visible: !viewport.is_narrow(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn active_peer(&self) -> Option<&str> {
        self.active_peer.as_deref()
    }

    /// Crossing the breakpoint resets the sidebar to the viewport default.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            self.viewport = viewport;
            self.sidebar_visible = !viewport.is_narrow();
        }
    }

    pub fn select_peer(&mut self, peer_id: impl Into<String>) {
        self.active_peer = Some(peer_id.into());
        if self.viewport.is_narrow() {
            self.sidebar_visible = false;
        }
    }

    pub fn clear_peer(&mut self) {
        self.active_peer = None;
        if self.viewport.is_narrow() {
            self.sidebar_visible = true;
        }
    }

    /// Narrow-viewport "back to chats" action.
    pub fn show_list(&mut self) {
        self.sidebar_visible = true;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
    }

    /// Whether the peer list panel is rendered.
    pub fn sidebar_shown(&self) -> bool {
        !self.viewport.is_narrow() || self.sidebar_visible
    }

    /// Whether the thread/empty-state panel is rendered.
    pub fn detail_shown(&self) -> bool {
        !self.viewport.is_narrow() || !self.sidebar_visible
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageLoadState {
    #[default]
    Loading,
    Loaded,
    /// Broken link: show the fallback icon
    Failed,
}

/// Loading/error flags for one image element, reset when its source changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLoad {
    source: String,
    loading: bool,
    error: bool,
}

impl ImageLoad {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            loading: true,
            error: false,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn set_source(&mut self, source: &str) {
        if source != self.source {
            *self = Self::new(source);
        }
    }

    pub fn on_load(&mut self) {
        self.loading = false;
    }

    pub fn on_error(&mut self) {
        self.loading = false;
        self.error = true;
    }

    pub fn state(&self) -> ImageLoadState {
        if self.error {
            ImageLoadState::Failed
        } else if self.loading {
            ImageLoadState::Loading
        } else {
            ImageLoadState::Loaded
        }
    }
}

/// Fires once per new thread data revision, not on every render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollTrigger {
    last: Option<(u64, usize)>,
}

impl ScrollTrigger {
    /// `revision` identifies the data; `len` catches same-revision growth.
    pub fn should_scroll(&mut self, revision: u64, len: usize) -> bool {
        let current = Some((revision, len));
        if self.last == current {
            false
        } else {
            self.last = current;
            true
        }
    }

    /// Like [`ScrollTrigger::should_scroll`], but data that arrives before
    /// the scroll target is mounted stays pending until it is.
    pub fn should_scroll_mounted(&mut self, mounted: bool, revision: u64, len: usize) -> bool {
        mounted && self.should_scroll(revision, len)
    }
}
