//! Arrow visibility state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Visible -> Hidden    (auto-hide timer fires, or tap)
//! Hidden  -> Visible   (tap, navigation, or pinch gesture ends)
//! ```
//!
//! While a pinch gesture is running the arrows are suppressed regardless of the
//! stored visibility; see [`ArrowState::effective_visible`].

/// Stored visibility of the navigation arrows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArrowVisibility {
    #[default]
    Visible,
    Hidden,
}

/// Arrow visibility plus the pinch gesture flag that suppresses it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArrowState {
    visibility: ArrowVisibility,
    gesture_active: bool,
}

impl ArrowState {
    pub fn new(gesture_active: bool) -> Self {
        Self {
            visibility: ArrowVisibility::Visible,
            gesture_active,
        }
    }

    pub fn visibility(&self) -> ArrowVisibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == ArrowVisibility::Visible
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture_active
    }

    /// What the renderer should actually draw
    pub fn effective_visible(&self) -> bool {
        self.is_visible() && !self.gesture_active
    }

    pub fn show(&mut self) {
        self.visibility = ArrowVisibility::Visible;
    }

    pub fn hide(&mut self) {
        self.visibility = ArrowVisibility::Hidden;
    }

    /// Record the gesture flag. Returns true when a gesture just ended with the
    /// arrows hidden, meaning the caller should reveal them.
    pub fn set_gesture_active(&mut self, active: bool) -> bool {
        let was_active = self.gesture_active;
        self.gesture_active = active;
        was_active && !active && !self.is_visible()
    }
}
