//! Attachment carousel: a headless navigation controller for paged attachment viewers.
//!
//! The crate owns the state a carousel screen needs (current page, active source,
//! arrow visibility with auto-hide, pinch-gesture suppression) and reports side effects
//! to a host through the [`host::CarouselHost`] trait. Rendering is left to the host.
//!
//! ## Modules
//!
//! - `carousel` - Controller, arrow state machine and display-order paging
//! - `scheduler` - Injectable timers (fake clock for tests, thread-backed for real use)
//! - `host` - Collaborator interface the controller calls into
//! - `picker` - Attachment picker capability object
//! - `auth_url` - Authenticated source URL decoration
//! - `settings` / `settings_watcher` - Configuration and hot-reload
//! - `types` - Attachment items and render snapshots

pub mod auth_url;
pub mod carousel;
pub mod constants;
pub mod error;
pub mod host;
pub mod picker;
pub mod scheduler;
pub mod settings;
pub mod settings_watcher;
pub mod types;

pub use carousel::{ArrowState, ArrowVisibility, CarouselController, DisplayOrder, reverse_index};
pub use error::{CarouselError, PickerError, SettingsError};
pub use host::CarouselHost;
pub use scheduler::{ManualScheduler, Scheduler, ThreadScheduler, TimerToken};
pub use settings::CarouselSettings;
pub use types::{AttachmentItem, CarouselView, ContainerDimensions, PagerItem};
