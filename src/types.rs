//! Core types shared between the controller and its host.

use serde::{Deserialize, Serialize};

/// A single attachment shown in the carousel.
///
/// Identified by its `source`, which is stable for the lifetime of a carousel session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentItem {
    /// Source URL or key; doubles as the item identifier
    pub source: String,
    /// Whether fetching the source needs the encrypted auth token appended
    #[serde(default)]
    pub is_auth_token_required: bool,
    /// Original file name, if known
    #[serde(default)]
    pub file_name: Option<String>,
}

impl AttachmentItem {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            is_auth_token_required: false,
            file_name: None,
        }
    }

    /// Mark this item as requiring an authenticated URL
    pub fn with_auth_token_required(mut self, required: bool) -> Self {
        self.is_auth_token_required = required;
        self
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }
}

/// Size of the area the pager is laid out in
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerDimensions {
    pub width: f32,
    pub height: f32,
}

impl ContainerDimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The pager is only mounted once the container has been measured
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// An item as handed to the pager, in display order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagerItem {
    /// Raw source, used as the list key
    pub key: String,
    /// URL to load, decorated with the auth token when required
    pub url: String,
    /// True for the item whose source is currently active
    pub is_focused: bool,
}

/// Everything a renderer needs to draw the carousel for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselView {
    /// Current page in display order
    pub current_index: usize,
    /// Current page in the caller's original order
    pub logical_index: usize,
    /// Arrows are visible and no pinch gesture is running
    pub arrows_visible: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    /// Whether the pager should be mounted at all
    pub show_pager: bool,
    pub items: Vec<PagerItem>,
}
