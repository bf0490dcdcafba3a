//! Cross-boundary (export/import) shapes of the templates
//!
//! These are the records written to config files, share codes and the wasm
//! bridge. Side values are stored in reverse of the UI order with unset
//! sides written as 0.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{BitTemplate, MultiplierTemplate, SideArray, SideValues, TemplateError};
use crate::consts::{MAX_SIDE_COUNT, MIN_SIDE_COUNT};
use crate::direction::{Direction, MaskCode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BitTemplateConfig {
    pub side_mode: usize,
    #[serde(default)]
    pub direction_masks: BTreeMap<MaskCode, Direction>,
    pub red_values: Vec<u32>,
    pub is_red_arrow_center: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultiplierConfig {
    pub multiplier_side_mode: usize,
    pub multiplier_values: Vec<u32>,
    pub multiplier: u32,
    pub multiplier_is_swapped: bool,
}

fn import_sides(side_mode: usize, values: &[u32]) -> Result<SideValues, TemplateError> {
    if !(MIN_SIDE_COUNT..=MAX_SIDE_COUNT).contains(&side_mode) {
        return Err(TemplateError::InvalidSideCount(side_mode));
    }
    if values.len() != side_mode {
        return Err(TemplateError::ValueCountMismatch {
            expected: side_mode,
            actual: values.len(),
        });
    }
    SideValues::from_reversed_export(values)
}

impl From<BitTemplate> for BitTemplateConfig {
    fn from(template: BitTemplate) -> Self {
        Self {
            side_mode: template.side_count(),
            direction_masks: template.direction_masks().clone(),
            red_values: template.sides().to_reversed_export(),
            is_red_arrow_center: template.is_swapped(),
        }
    }
}

impl TryFrom<BitTemplateConfig> for BitTemplate {
    type Error = TemplateError;

    fn try_from(config: BitTemplateConfig) -> Result<Self, Self::Error> {
        let sides = import_sides(config.side_mode, &config.red_values)?;
        Ok(BitTemplate::from_parts(
            sides,
            config.direction_masks,
            config.is_red_arrow_center,
        ))
    }
}

impl From<MultiplierTemplate> for MultiplierConfig {
    fn from(template: MultiplierTemplate) -> Self {
        Self {
            multiplier_side_mode: template.side_count(),
            multiplier_values: template.sides().to_reversed_export(),
            multiplier: template.multiplier(),
            multiplier_is_swapped: template.is_swapped(),
        }
    }
}

impl TryFrom<MultiplierConfig> for MultiplierTemplate {
    type Error = TemplateError;

    fn try_from(config: MultiplierConfig) -> Result<Self, Self::Error> {
        let sides = import_sides(config.multiplier_side_mode, &config.multiplier_values)?;
        MultiplierTemplate::from_parts(sides, config.multiplier, config.multiplier_is_swapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "SideMode": 4,
        "DirectionMasks": { "00": "North", "01": "East", "11": "North" },
        "RedValues": [8, 0, 2, 1],
        "IsRedArrowCenter": true
    }"#;

    #[test]
    fn test_import_reverses_values() {
        let config: BitTemplateConfig = serde_json::from_str(SAMPLE).unwrap();
        let template = BitTemplate::from_import_form(config).unwrap();
        assert_eq!(template.side_values(), &[Some(1), Some(2), None, Some(8)]);
        assert!(template.is_swapped());
        assert_eq!(template.direction_mask(MaskCode::B10), None);
        assert_eq!(template.direction_mask(MaskCode::B11), Some(Direction::North));
    }

    #[test]
    fn test_export_import_roundtrip() {
        let config: BitTemplateConfig = serde_json::from_str(SAMPLE).unwrap();
        let template = BitTemplate::from_import_form(config.clone()).unwrap();
        assert_eq!(template.to_export_form(), config);
    }

    #[test]
    fn test_export_json_field_names() {
        let mut template = BitTemplate::with_side_count(2).unwrap();
        template.set_side_value(0, "3").unwrap();
        template.set_direction_mask(MaskCode::B10, Direction::West);
        let json = serde_json::to_value(template.to_export_form()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "SideMode": 2,
                "DirectionMasks": { "10": "West" },
                "RedValues": [0, 3],
                "IsRedArrowCenter": false
            })
        );
    }

    #[test]
    fn test_import_rejects_bad_shapes() {
        let mut config: BitTemplateConfig = serde_json::from_str(SAMPLE).unwrap();
        config.red_values.pop();
        assert_eq!(
            BitTemplate::from_import_form(config.clone()),
            Err(TemplateError::ValueCountMismatch { expected: 4, actual: 3 })
        );

        config.side_mode = 0;
        config.red_values.clear();
        assert_eq!(
            BitTemplate::from_import_form(config),
            Err(TemplateError::InvalidSideCount(0))
        );
    }

    #[test]
    fn test_template_deserializes_through_export_form() {
        let template: BitTemplate = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(template.side_count(), 4);

        let bad = r#"{"SideMode": 2, "RedValues": [1], "IsRedArrowCenter": false}"#;
        assert!(serde_json::from_str::<BitTemplate>(bad).is_err());
    }

    #[test]
    fn test_multiplier_roundtrip() {
        let config = MultiplierConfig {
            multiplier_side_mode: 3,
            multiplier_values: vec![4, 0, 1],
            multiplier: 200,
            multiplier_is_swapped: false,
        };
        let template = MultiplierTemplate::from_import_form(config.clone()).unwrap();
        assert_eq!(template.side_values(), &[Some(1), None, Some(4)]);
        assert_eq!(template.to_export_form(), config);
    }

    #[test]
    fn test_multiplier_import_rejects_zero_multiplier() {
        let config = MultiplierConfig {
            multiplier_side_mode: 1,
            multiplier_values: vec![1],
            multiplier: 0,
            multiplier_is_swapped: false,
        };
        assert!(matches!(
            MultiplierTemplate::from_import_form(config),
            Err(TemplateError::InvalidMultiplier(_))
        ));
    }
}
