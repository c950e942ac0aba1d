//! Attachment picker capability.
//!
//! Instead of handing UI code a render callback, [`create_picker`] returns an
//! object with `open` / `cancel` / `resolve`. The platform dialog (out of scope here)
//! calls `resolve` with the chosen file or `cancel` when dismissed.

use crate::error::PickerError;
use serde::{Deserialize, Serialize};

/// Which files the picker accepts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickerType {
    #[default]
    File,
    Image,
}

impl PickerType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Image => "image",
        }
    }

    pub fn accepts(&self, file: &FileObject) -> bool {
        match self {
            Self::File => true,
            Self::Image => file
                .mime_type
                .as_deref()
                .is_some_and(|mime| mime.starts_with("image/")),
        }
    }
}

/// A file chosen by the user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileObject {
    pub name: String,
    pub uri: String,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

impl FileObject {
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            mime_type: None,
            size: None,
        }
    }

    pub fn with_mime_type(mut self, mime: impl Into<String>) -> Self {
        self.mime_type = Some(mime.into());
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }
}

/// Callbacks for one picker request
pub struct PickerOptions {
    pub on_picked: Box<dyn FnOnce(FileObject)>,
    pub on_canceled: Option<Box<dyn FnOnce()>>,
}

impl PickerOptions {
    pub fn new(on_picked: impl FnOnce(FileObject) + 'static) -> Self {
        Self {
            on_picked: Box::new(on_picked),
            on_canceled: None,
        }
    }

    pub fn on_canceled(mut self, on_canceled: impl FnOnce() + 'static) -> Self {
        self.on_canceled = Some(Box::new(on_canceled));
        self
    }
}

/// Picker with at most one outstanding request.
pub struct AttachmentPicker {
    picker_type: PickerType,
    pending: Option<PickerOptions>,
}

/// Create a picker for `picker_type`.
pub fn create_picker(picker_type: PickerType) -> AttachmentPicker {
    AttachmentPicker {
        picker_type,
        pending: None,
    }
}

impl AttachmentPicker {
    pub fn picker_type(&self) -> PickerType {
        self.picker_type
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a request. An already open request is canceled first.
    pub fn open(&mut self, options: PickerOptions) {
        if self.pending.is_some() {
            tracing::debug!("Picker reopened, canceling previous request");
            self.cancel();
        }
        tracing::debug!(picker = self.picker_type.name(), "Picker opened");
        self.pending = Some(options);
    }

    /// Dismiss the open request without a file. No-op when nothing is open.
    pub fn cancel(&mut self) {
        if let Some(options) = self.pending.take() {
            if let Some(on_canceled) = options.on_canceled {
                on_canceled();
            }
        }
    }

    /// Complete the open request with `file`.
    ///
    /// A file the picker type does not accept is rejected and the request stays open.
    pub fn resolve(&mut self, file: FileObject) -> Result<(), PickerError> {
        if self.pending.is_none() {
            return Err(PickerError::NotOpen);
        }
        if !self.picker_type.accepts(&file) {
            return Err(PickerError::UnsupportedType {
                picker: self.picker_type.name(),
                mime: file.mime_type.unwrap_or_default(),
            });
        }
        if let Some(options) = self.pending.take() {
            tracing::debug!(name = %file.name, "Picker resolved");
            (options.on_picked)(file);
        }
        Ok(())
    }
}
