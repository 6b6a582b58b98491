//! Open/Closed state machine for modal overlays.
//!
//! The storefront has two modal-style overlays: the account-registration
//! form and the help panel. Each overlay kind has exactly one instance whose
//! lifecycle is tracked explicitly rather than inferred from rendered
//! markup. Valid transitions:
//!
//! ```text
//! Closed --open--> Open      (user action)
//! Open --close--> Closed     (close button, outside click, or
//!                             successful-submission timeout for Account)
//! ```
//!
//! Opening an already-open overlay is a no-op; the controller reports it so
//! the renderer never produces a second instance.

/// The overlay kinds the storefront knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// Account-registration form.
    Account,
    /// Help / store-information panel.
    Help,
}

/// Lifecycle state of an overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayState {
    /// Not displayed. Initial state.
    #[default]
    Closed,
    /// Displayed; at most one instance exists.
    Open,
}

/// Result of an open or close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTransition {
    /// The overlay moved from Closed to Open.
    Opened,
    /// The overlay was already open; nothing to render.
    AlreadyOpen,
    /// The overlay moved from Open to Closed.
    Closed,
    /// The overlay was already closed.
    AlreadyClosed,
}

/// Controller owning the state of a single overlay instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    kind: OverlayKind,
    state: OverlayState,
}

impl Overlay {
    /// Create a closed overlay of the given kind.
    #[must_use]
    pub const fn new(kind: OverlayKind) -> Self {
        Self {
            kind,
            state: OverlayState::Closed,
        }
    }

    /// The overlay kind this controller owns.
    #[must_use]
    pub const fn kind(&self) -> OverlayKind {
        self.kind
    }

    /// Whether the overlay is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open)
    }

    /// Request the overlay be shown.
    pub const fn open(&mut self) -> OverlayTransition {
        match self.state {
            OverlayState::Closed => {
                self.state = OverlayState::Open;
                OverlayTransition::Opened
            }
            OverlayState::Open => OverlayTransition::AlreadyOpen,
        }
    }

    /// Request the overlay be dismissed.
    pub const fn close(&mut self) -> OverlayTransition {
        match self.state {
            OverlayState::Open => {
                self.state = OverlayState::Closed;
                OverlayTransition::Closed
            }
            OverlayState::Closed => OverlayTransition::AlreadyClosed,
        }
    }
}
