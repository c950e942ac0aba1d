//! The carousel navigation controller.
//!
//! Owns the current page, the active source and the arrow state, and turns
//! interaction events (swipe, tap, pinch, back/forward) into state transitions
//! plus host side effects. All mutation goes through `&mut self`, so a single
//! owner serializes every transition.

use super::arrows::ArrowState;
use super::paging::DisplayOrder;
use crate::auth_url::resolve_source_url;
use crate::error::CarouselError;
use crate::host::CarouselHost;
use crate::scheduler::{Scheduler, TimerToken};
use crate::settings::CarouselSettings;
use crate::types::{AttachmentItem, CarouselView, ContainerDimensions, PagerItem};
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Paged attachment navigation with auto-hiding arrows.
pub struct CarouselController<H: CarouselHost, S: Scheduler> {
    items: DisplayOrder<AttachmentItem>,
    current_index: usize,
    active_source: String,
    arrows: ArrowState,
    /// The one live auto-hide timer, if any
    auto_hide: Option<TimerToken>,
    hide_delay: Duration,
    auth_token: Option<String>,
    torn_down: bool,
    host: H,
    scheduler: S,
}

impl<H: CarouselHost, S: Scheduler> CarouselController<H, S> {
    /// Mount a controller over `items`, given in logical order.
    ///
    /// `initial_index` is a logical index; it is mapped into display order and
    /// clamped. The auto-hide timer is armed immediately.
    pub fn new(
        items: &[AttachmentItem],
        initial_index: usize,
        initial_active_source: impl Into<String>,
        host: H,
        scheduler: S,
        settings: &CarouselSettings,
    ) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::NoAttachments);
        }

        let items = DisplayOrder::from_logical(items);
        let current_index = items.to_display(isize::try_from(initial_index).unwrap_or(isize::MAX));
        let active_source = initial_active_source.into();

        if items
            .get(current_index)
            .is_some_and(|item| item.source != active_source)
        {
            warn!(
                initial_index,
                active_source = %active_source,
                "Initial active source does not match the initial page"
            );
        }

        let mut controller = Self {
            items,
            current_index,
            active_source,
            arrows: ArrowState::new(settings.initial_gesture_active),
            auto_hide: None,
            hide_delay: settings.arrow_hide_delay(),
            auth_token: settings.auth_token.clone(),
            torn_down: false,
            host,
            scheduler,
        };
        debug!(
            count = controller.items.len(),
            page = current_index,
            "Carousel mounted"
        );
        controller.arm_auto_hide();
        Ok(controller)
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Commit a page change to `display_index`, clamped into range.
    pub fn go_to_page(&mut self, display_index: isize) {
        if self.is_inactive("go_to_page") {
            return;
        }

        let index = self.items.clamp(display_index);
        if index as isize != display_index {
            warn!(requested = display_index, clamped = index, "Page request out of range");
        }

        self.host.dismiss_keyboard();
        self.show_arrows();

        let Some(item) = self.items.get(index) else {
            return;
        };
        debug!(from = self.current_index, to = index, source = %item.source, "Navigate");
        self.current_index = index;
        self.active_source.clone_from(&item.source);
        self.host.on_navigate(item);
    }

    /// Move by `delta` pages and tell the pager to follow. Used by the back/forward controls.
    pub fn step(&mut self, delta: isize) {
        if self.is_inactive("step") {
            return;
        }

        let next = (self.current_index as isize).saturating_add(delta);
        self.go_to_page(next);
        self.host.set_pager_page(self.current_index);
        self.arm_auto_hide();
    }

    /// Pass-through for the swipe-down gesture.
    pub fn swipe_down(&mut self) {
        if self.is_inactive("swipe_down") {
            return;
        }
        self.host.on_close();
    }

    // ========================================================================
    // Arrows
    // ========================================================================

    /// Record the pinch gesture state; ending a gesture reveals hidden arrows.
    pub fn set_gesture_active(&mut self, active: bool) {
        if self.is_inactive("set_gesture_active") {
            return;
        }
        if self.arrows.set_gesture_active(active) {
            self.show_arrows();
        }
    }

    /// Toggle the arrows. Hiding by tap cancels the pending auto-hide.
    pub fn handle_tap(&mut self) {
        if self.is_inactive("handle_tap") {
            return;
        }
        if self.arrows.is_visible() {
            self.arrows.hide();
            self.cancel_auto_hide();
        } else {
            self.show_arrows();
        }
    }

    pub fn show_arrows(&mut self) {
        if self.is_inactive("show_arrows") {
            return;
        }
        self.arrows.show();
        self.arm_auto_hide();
    }

    /// Cancel any pending auto-hide and schedule a fresh one.
    pub fn arm_auto_hide(&mut self) {
        if self.is_inactive("arm_auto_hide") {
            return;
        }
        self.cancel_auto_hide();
        let token = self.scheduler.schedule(self.hide_delay);
        trace!(token = token.id(), delay_ms = self.hide_delay.as_millis() as u64, "Auto-hide armed");
        self.auto_hide = Some(token);
    }

    pub fn cancel_auto_hide(&mut self) {
        if let Some(token) = self.auto_hide.take() {
            trace!(token = token.id(), "Auto-hide cancelled");
            self.scheduler.cancel(token);
        }
    }

    /// Deliver a fired timer. Returns true if it hid the arrows.
    ///
    /// Tokens other than the live auto-hide timer are ignored.
    pub fn handle_timer(&mut self, token: TimerToken) -> bool {
        if self.torn_down || self.auto_hide != Some(token) {
            trace!(token = token.id(), "Ignoring stale timer");
            return false;
        }
        self.auto_hide = None;
        self.arrows.hide();
        debug!("Arrows auto-hidden");
        true
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Pick up a new hide delay and auth token. The delay applies from the next arm.
    pub fn apply_settings(&mut self, settings: &CarouselSettings) {
        self.hide_delay = settings.arrow_hide_delay();
        self.auth_token = settings.auth_token.clone();
    }

    /// Cancel pending timers and stop reacting to events. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.cancel_auto_hide();
        self.torn_down = true;
        debug!("Carousel torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn is_inactive(&self, operation: &'static str) -> bool {
        if self.torn_down {
            debug!(operation, "Ignoring event after teardown");
        }
        self.torn_down
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Current page in display order
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Current page in the caller's order, as shown by the arrow buttons
    pub fn logical_index(&self) -> usize {
        self.items.to_logical(self.current_index)
    }

    pub fn active_source(&self) -> &str {
        &self.active_source
    }

    pub fn active_item(&self) -> Option<&AttachmentItem> {
        self.items.get(self.current_index)
    }

    /// Whether the item renderer should treat `source` as focused
    pub fn is_active(&self, source: &str) -> bool {
        self.active_source == source
    }

    pub fn can_go_back(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current_index + 1 < self.items.len()
    }

    /// Stored arrow visibility, ignoring gesture suppression
    pub fn arrows_visible(&self) -> bool {
        self.arrows.is_visible()
    }

    pub fn is_gesture_active(&self) -> bool {
        self.arrows.is_gesture_active()
    }

    pub fn effective_arrows_visible(&self) -> bool {
        self.arrows.effective_visible()
    }

    pub fn arrow_state(&self) -> ArrowState {
        self.arrows
    }

    pub fn auto_hide_token(&self) -> Option<TimerToken> {
        self.auto_hide
    }

    /// Items in display order
    pub fn items(&self) -> &[AttachmentItem] {
        self.items.as_slice()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Snapshot for the renderer.
    pub fn view(&self, container: ContainerDimensions) -> CarouselView {
        let token = self.auth_token.as_deref();
        let items = self
            .items
            .iter()
            .map(|item| PagerItem {
                key: item.source.clone(),
                url: resolve_source_url(&item.source, item.is_auth_token_required, token),
                is_focused: self.is_active(&item.source),
            })
            .collect();

        CarouselView {
            current_index: self.current_index,
            logical_index: self.logical_index(),
            arrows_visible: self.effective_arrows_visible(),
            can_go_back: self.can_go_back(),
            can_go_forward: self.can_go_forward(),
            show_pager: container.is_measured(),
            items,
        }
    }
}

impl<H: CarouselHost, S: Scheduler> Drop for CarouselController<H, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
