//! Save/load of templates
//!
//! Features:
//! - Versioned JSON envelope
//! - Import validation on load (side counts, value lengths, multiplier)
//! - File storage on native, LocalStorage on the web

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::template::{BitTemplate, BitTemplateConfig, MultiplierConfig, MultiplierTemplate, TemplateError};

/// Envelope version written by this build
pub const ENVELOPE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported save version {0}")]
    UnsupportedVersion(u32),

    #[error("invalid template: {0}")]
    Template(#[from] TemplateError),
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    template: BitTemplateConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    multiplier: Option<MultiplierConfig>,
}

/// Everything the calculator persists between sessions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SavedTemplates {
    pub template: BitTemplate,
    pub multiplier: Option<MultiplierTemplate>,
}

impl SavedTemplates {
    pub fn to_json(&self) -> Result<String, StoreError> {
        let envelope = Envelope {
            version: ENVELOPE_VERSION,
            template: self.template.to_export_form(),
            multiplier: self.multiplier.as_ref().map(MultiplierTemplate::to_export_form),
        };
        Ok(serde_json::to_string_pretty(&envelope)?)
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let envelope: Envelope = serde_json::from_str(json)?;
        if envelope.version != ENVELOPE_VERSION {
            return Err(StoreError::UnsupportedVersion(envelope.version));
        }
        Ok(Self {
            template: BitTemplate::from_import_form(envelope.template)?,
            multiplier: envelope.multiplier.map(MultiplierTemplate::from_import_form).transpose()?,
        })
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bit_template_config";

    /// Load from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let json = storage.get_item(Self::STORAGE_KEY).ok()??;
        match Self::from_json(&json) {
            Ok(saved) => {
                log::info!("Loaded template ({} sides)", saved.template.side_values().len());
                Some(saved)
            }
            Err(e) => {
                log::warn!("Discarding saved template: {}", e);
                None
            }
        }
    }

    /// Save to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        if let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        {
            match self.to_json() {
                Ok(json) => {
                    let _ = storage.set_item(Self::STORAGE_KEY, &json);
                    log::info!("Template saved");
                }
                Err(e) => log::warn!("Template not saved: {}", e),
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path)?;
        let saved = Self::from_json(&json)?;
        log::info!("Loaded template from {}", path.display());
        Ok(saved)
    }

    /// Write via a temporary file, then rename over `path`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), StoreError> {
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, self.to_json()?)?;
        std::fs::rename(&tmp, path)?;
        log::info!("Template saved to {}", path.display());
        Ok(())
    }
}
