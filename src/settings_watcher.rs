//! Settings file watcher for hot-reload.
//!
//! Wraps a `notify` watcher on the settings file's parent directory and filters
//! events down to the settings file itself. The owner polls between frames.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

pub use crate::settings::settings_path as default_settings_path;

/// Something happened to the settings file
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsEvent {
    Created,
    Modified,
    Deleted,
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    pub fn new(path: PathBuf) -> notify::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx)?;

        let watch_dir = path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| path.clone());
        watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching settings at {}", path.display());

        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Next relevant event, if any. Never blocks.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        while let Ok(result) = self.rx.try_recv() {
            match result {
                Ok(event) => {
                    if !event.paths.iter().any(|p| p.file_name() == self.path.file_name()) {
                        continue;
                    }
                    match event.kind {
                        EventKind::Create(_) => return Some(SettingsEvent::Created),
                        EventKind::Modify(_) => return Some(SettingsEvent::Modified),
                        EventKind::Remove(_) => return Some(SettingsEvent::Deleted),
                        _ => continue,
                    }
                }
                Err(e) => return Some(SettingsEvent::Error(e.to_string())),
            }
        }
        None
    }
}
