//! Collaborator interface the controller calls into.

use crate::types::AttachmentItem;

/// Side effects a carousel controller asks its host to perform.
///
/// All methods are called synchronously from within a controller transition.
pub trait CarouselHost {
    /// A page change was committed and `item` is now the active attachment
    fn on_navigate(&mut self, item: &AttachmentItem);

    /// The user swiped down to dismiss the carousel
    fn on_close(&mut self) {}

    /// Drop focus from any on-screen text input
    fn dismiss_keyboard(&mut self) {}

    /// Move the paging view to `display_index` without user interaction
    fn set_pager_page(&mut self, _display_index: usize) {}
}

