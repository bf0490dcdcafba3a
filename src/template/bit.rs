//! The main bit template: side weights plus direction masks

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::export::BitTemplateConfig;
use super::{SideArray, SideValues, TemplateError, TemplateIssue};
use crate::direction::{Direction, MaskCode};

/// Canonical bit template state.
///
/// Serializes through [`BitTemplateConfig`], so anything deserialized has
/// already passed import validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "BitTemplateConfig", into = "BitTemplateConfig")]
pub struct BitTemplate {
    sides: SideValues,
    direction_masks: BTreeMap<MaskCode, Direction>,
    /// Red/blue display roles exchanged. Never affects decoding.
    is_swapped: bool,
}

impl BitTemplate {
    /// Default template: 13 unset sides, no masks
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_side_count(count: usize) -> Result<Self, TemplateError> {
        Ok(Self {
            sides: SideValues::with_count(count)?,
            ..Self::default()
        })
    }

    pub(crate) fn from_parts(
        sides: SideValues,
        direction_masks: BTreeMap<MaskCode, Direction>,
        is_swapped: bool,
    ) -> Self {
        Self {
            sides,
            direction_masks,
            is_swapped,
        }
    }

    pub fn side_values(&self) -> &[Option<u32>] {
        self.sides.as_slice()
    }

    pub fn direction_masks(&self) -> &BTreeMap<MaskCode, Direction> {
        &self.direction_masks
    }

    pub fn direction_mask(&self, code: MaskCode) -> Option<Direction> {
        self.direction_masks.get(&code).copied()
    }

    /// Assign `direction` to `code`, replacing any previous assignment
    pub fn set_direction_mask(&mut self, code: MaskCode, direction: Direction) {
        self.direction_masks.insert(code, direction);
    }

    /// Parse a textual code ("00".."11") and assign it
    pub fn set_direction_mask_str(&mut self, code: &str, direction: Direction) -> Result<(), TemplateError> {
        let code = code.parse::<MaskCode>()?;
        self.set_direction_mask(code, direction);
        Ok(())
    }

    pub fn clear_direction_mask(&mut self, code: MaskCode) {
        self.direction_masks.remove(&code);
    }

    /// Lowest code mapped to `direction`, if any
    pub fn code_for(&self, direction: Direction) -> Option<MaskCode> {
        // BTreeMap iterates in code order, so the first hit is the lowest code
        self.direction_masks
            .iter()
            .find(|(_, d)| **d == direction)
            .map(|(code, _)| *code)
    }

    /// Check the template is fully filled in, values first, then masks
    pub fn validate_complete(&self) -> Result<(), TemplateIssue> {
        if !self.sides.is_complete() {
            return Err(TemplateIssue::ValuesIncomplete);
        }
        if MaskCode::ALL.iter().any(|c| !self.direction_masks.contains_key(c)) {
            return Err(TemplateIssue::MasksIncomplete);
        }
        Ok(())
    }

    pub fn to_export_form(&self) -> BitTemplateConfig {
        BitTemplateConfig::from(self.clone())
    }

    pub fn from_import_form(config: BitTemplateConfig) -> Result<Self, TemplateError> {
        Self::try_from(config)
    }
}

impl SideArray for BitTemplate {
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
