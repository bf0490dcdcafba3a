//! Multiplier template: a second side array scaled by a fixed multiplier

use serde::{Deserialize, Serialize};

use super::export::MultiplierConfig;
use super::{SideArray, SideValues, TemplateError, TemplateIssue};
use crate::consts::DEFAULT_MULTIPLIER;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MultiplierConfig", into = "MultiplierConfig")]
pub struct MultiplierTemplate {
    sides: SideValues,
    /// Always > 0
    multiplier: u32,
    is_swapped: bool,
}

impl Default for MultiplierTemplate {
    fn default() -> Self {
        Self {
            sides: SideValues::default(),
            multiplier: DEFAULT_MULTIPLIER,
            is_swapped: false,
        }
    }
}

impl MultiplierTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(sides: SideValues, multiplier: u32, is_swapped: bool) -> Result<Self, TemplateError> {
        if multiplier == 0 {
            return Err(TemplateError::InvalidMultiplier(multiplier.to_string()));
        }
        Ok(Self {
            sides,
            multiplier,
            is_swapped,
        })
    }

    pub fn side_values(&self) -> &[Option<u32>] {
        self.sides.as_slice()
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// Accepts a positive integer; anything else keeps the current multiplier
    pub fn set_multiplier(&mut self, raw: &str) -> Result<(), TemplateError> {
        match raw.trim().parse::<u32>() {
            Ok(value) if value > 0 => {
                self.multiplier = value;
                Ok(())
            }
            _ => Err(TemplateError::InvalidMultiplier(raw.to_string())),
        }
    }

    pub fn validate_complete(&self) -> Result<(), TemplateIssue> {
        if self.sides.is_complete() {
            Ok(())
        } else {
            Err(TemplateIssue::MultiplierValuesIncomplete)
        }
    }

    pub fn to_export_form(&self) -> MultiplierConfig {
        MultiplierConfig::from(self.clone())
    }

    pub fn from_import_form(config: MultiplierConfig) -> Result<Self, TemplateError> {
        Self::try_from(config)
    }
}

impl SideArray for MultiplierTemplate {
    fn sides(&self) -> &SideValues {
        &self.sides
    }

    fn sides_mut(&mut self) -> &mut SideValues {
        &mut self.sides
    }

    fn is_swapped(&self) -> bool {
        self.is_swapped
    }

    fn toggle_swap(&mut self) {
        self.is_swapped = !self.is_swapped;
    }
}
