//! User preferences
//!
//! Persisted separately from templates, in LocalStorage on the web and as a
//! JSON file for native builds.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CHECKPOINT_DEPTH, DEFAULT_SIDE_COUNT, MAX_SIDE_COUNT, MIN_SIDE_COUNT};
use crate::editor::TemplateEditor;
use crate::template::{BitTemplate, SideArray};

/// Editor preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Side count for new templates
    pub default_side_count: usize,
    /// Undo checkpoints kept per editor
    pub checkpoint_depth: usize,
    /// Re-run the decoder whenever the solver produces new amounts
    pub auto_decode: bool,
    /// Wrap input rows right-to-left
    pub right_to_left: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_side_count: DEFAULT_SIDE_COUNT,
            checkpoint_depth: DEFAULT_CHECKPOINT_DEPTH,
            auto_decode: true,
            right_to_left: false,
        }
    }
}

impl Settings {
    /// Clamp values a hand-edited file may have pushed out of range
    pub fn sanitized(mut self) -> Self {
        self.default_side_count = self.default_side_count.clamp(MIN_SIDE_COUNT, MAX_SIDE_COUNT);
        self.checkpoint_depth = self.checkpoint_depth.max(1);
        self
    }

    /// Fresh template using the preferred side count
    pub fn new_template(&self) -> BitTemplate {
        let mut template = BitTemplate::new();
        if let Err(e) = template.set_side_count(self.default_side_count) {
            log::warn!("Ignoring default side count: {}", e);
        }
        template
    }

    /// Editor over `template` with the preferred undo depth
    pub fn editor<S: SideArray>(&self, template: S) -> TemplateEditor<S> {
        TemplateEditor::with_depth(template, self.checkpoint_depth)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bit_template_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str::<Settings>(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings.sanitized();
                    }
                    Err(e) => log::warn!("Discarding unreadable settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings.sanitized()
                }
                Err(e) => {
                    log::warn!("Discarding unreadable settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), crate::persistence::StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
