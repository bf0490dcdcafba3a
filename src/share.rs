//! Share codes
//!
//! A share code is a single line of text carrying the cannon's general
//! configuration record along with its templates, so a setup can be copied
//! through the clipboard. The general record belongs to the trajectory
//! solver and is carried through untouched.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::template::{BitTemplate, BitTemplateConfig, MultiplierConfig, MultiplierTemplate, TemplateError};

/// Prefix identifying the code format
pub const SHARE_CODE_PREFIX: &str = "PCB1.";

#[derive(Debug, Error)]
pub enum ShareCodeError {
    #[error("not a share code")]
    MissingPrefix,

    #[error("share code is corrupted: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("share code payload is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("share code template is invalid: {0}")]
    Template(#[from] TemplateError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedConfig {
    /// Cannon geometry and solver settings, opaque to this crate
    pub general: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit_template: Option<BitTemplateConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<MultiplierConfig>,
}

impl SharedConfig {
    pub fn new(general: serde_json::Value) -> Self {
        Self {
            general,
            bit_template: None,
            multiplier: None,
        }
    }

    pub fn with_template(mut self, template: &BitTemplate) -> Self {
        self.bit_template = Some(template.to_export_form());
        self
    }

    pub fn with_multiplier(mut self, multiplier: &MultiplierTemplate) -> Self {
        self.multiplier = Some(multiplier.to_export_form());
        self
    }

    pub fn template(&self) -> Result<Option<BitTemplate>, TemplateError> {
        self.bit_template.clone().map(BitTemplate::from_import_form).transpose()
    }

    pub fn multiplier_template(&self) -> Result<Option<MultiplierTemplate>, TemplateError> {
        self.multiplier.clone().map(MultiplierTemplate::from_import_form).transpose()
    }
}

pub fn encode_share_code(config: &SharedConfig) -> Result<String, ShareCodeError> {
    let json = serde_json::to_vec(config)?;
    Ok(format!("{SHARE_CODE_PREFIX}{}", URL_SAFE_NO_PAD.encode(json)))
}

/// Parse a share code. Embedded templates are validated before returning.
pub fn decode_share_code(code: &str) -> Result<SharedConfig, ShareCodeError> {
    let payload = code
        .trim()
        .strip_prefix(SHARE_CODE_PREFIX)
        .ok_or(ShareCodeError::MissingPrefix)?;
    let json = URL_SAFE_NO_PAD.decode(payload)?;
    let config: SharedConfig = serde_json::from_slice(&json)?;
    config.template()?;
    config.multiplier_template()?;
    log::debug!("Decoded share code ({} bytes)", json.len());
    Ok(config)
}
