//! Carousel navigation.
//!
//! - `paging` - Display order (reversed copy of the caller's items) and index mapping
//! - `arrows` - Arrow visibility state machine with gesture suppression
//! - `controller` - The controller tying both to a scheduler and a host

mod arrows;
mod controller;
mod paging;

pub use arrows::{ArrowState, ArrowVisibility};
pub use controller::CarouselController;
pub use paging::{DisplayOrder, reverse_index};
