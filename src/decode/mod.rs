//! Bit template decoding
//!
//! Turns the blue/red TNT amounts produced by the trajectory solver, plus
//! the chosen firing direction, into the set of sides to switch on for each
//! channel and the 2-bit direction code. Decoding is pure: the same inputs
//! always give the same output.

mod greedy;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::direction::Direction;
use crate::template::{BitTemplate, SideArray};

pub use greedy::greedy_subset;

/// Which TNT channel an amount belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Blue,
    Red,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Blue => "blue",
            Channel::Red => "red",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful decode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BitDecodeResult {
    /// Side indices to activate for the blue amount, ascending
    pub blue: Vec<usize>,
    /// Side indices to activate for the red amount, ascending
    pub red: Vec<usize>,
    /// Direction code bits, high bit first
    pub direction: [bool; 2],
}

impl BitDecodeResult {
    /// Active indices for one channel
    pub fn active(&self, channel: Channel) -> &[usize] {
        match channel {
            Channel::Blue => &self.blue,
            Channel::Red => &self.red,
        }
    }
}

/// Recoverable decode failure caused by a gap in the user's template.
///
/// Carries a translation key and parameters so the host can show inline
/// guidance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("no mask code is assigned to {direction}")]
    MissingDirectionMapping { direction: Direction },

    #[error("the bit template has no side values")]
    EmptyTemplate,

    #[error("{channel} amount {amount} cannot be built from the side values ({remainder} left over)")]
    UnreachableAmount {
        channel: Channel,
        amount: u32,
        remainder: u32,
    },
}

impl DecodeError {
    pub fn error_key(&self) -> &'static str {
        match self {
            DecodeError::MissingDirectionMapping { .. } => "error.calculator.bit_direction_missing",
            DecodeError::EmptyTemplate => "error.calculator.bit_template_empty",
            DecodeError::UnreachableAmount { .. } => "error.calculator.bit_amount_unreachable",
        }
    }

    pub fn error_params(&self) -> BTreeMap<&'static str, String> {
        let mut params = BTreeMap::new();
        match self {
            DecodeError::MissingDirectionMapping { direction } => {
                params.insert("direction", direction.to_string());
            }
            DecodeError::EmptyTemplate => {}
            DecodeError::UnreachableAmount {
                channel,
                amount,
                remainder,
            } => {
                params.insert("side", channel.to_string());
                params.insert("amount", amount.to_string());
                params.insert("remainder", remainder.to_string());
            }
        }
        params
    }

    /// Serializable `{ errorKey, errorParams }` form for the UI
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            error_key: self.error_key(),
            error_params: self.error_params(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub error_key: &'static str,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub error_params: BTreeMap<&'static str, String>,
}

/// Decode both amounts and the direction against `template`.
///
/// Failures are checked in a fixed order and only the first is reported:
/// direction mapping, empty template, blue amount, red amount.
pub fn decode(
    template: &BitTemplate,
    blue: u32,
    red: u32,
    direction: Direction,
) -> Result<BitDecodeResult, DecodeError> {
    let code = template
        .code_for(direction)
        .ok_or(DecodeError::MissingDirectionMapping { direction })?;

    let sides = template.sides();
    if !sides.has_values() {
        return Err(DecodeError::EmptyTemplate);
    }

    let resolve = |channel: Channel, amount: u32| {
        greedy_subset(sides, amount).map_err(|remainder| DecodeError::UnreachableAmount {
            channel,
            amount,
            remainder,
        })
    };
    let blue_sides = resolve(Channel::Blue, blue)?;
    let red_sides = resolve(Channel::Red, red)?;

    log::debug!(
        "Decoded blue={} red={} {} -> code {} ({} blue, {} red sides)",
        blue,
        red,
        direction,
        code,
        blue_sides.len(),
        red_sides.len()
    );

    Ok(BitDecodeResult {
        blue: blue_sides,
        red: red_sides,
        direction: code.bits(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::MaskCode;
    use proptest::prelude::*;

    fn template(values: &[u32]) -> BitTemplate {
        let mut t = BitTemplate::with_side_count(values.len()).unwrap();
        for (i, v) in values.iter().enumerate() {
            t.set_side_value(i, &v.to_string()).unwrap();
        }
        t.set_direction_mask(MaskCode::B00, Direction::North);
        t.set_direction_mask(MaskCode::B01, Direction::East);
        t.set_direction_mask(MaskCode::B10, Direction::West);
        t.set_direction_mask(MaskCode::B11, Direction::South);
        t
    }

    fn powers_of_two(n: u32) -> Vec<u32> {
        (0..n).map(|i| 1 << i).collect()
    }

    #[test]
    fn test_decode_binary_weights() {
        let t = template(&powers_of_two(8));
        let result = decode(&t, 5, 130, Direction::West).unwrap();
        assert_eq!(result.blue, vec![0, 2]);
        assert_eq!(result.red, vec![1, 7]);
        assert_eq!(result.direction, [true, false]);
    }

    #[test]
    fn test_decode_zero_amounts() {
        let t = template(&[1, 2, 4]);
        let result = decode(&t, 0, 0, Direction::North).unwrap();
        assert!(result.blue.is_empty());
        assert!(result.red.is_empty());
        assert_eq!(result.direction, [false, false]);
    }

    #[test]
    fn test_decode_unreachable_amount() {
        let t = template(&[3, 5]);
        let err = decode(&t, 4, 0, Direction::North).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnreachableAmount {
                channel: Channel::Blue,
                amount: 4,
                remainder: 1
            }
        );
        assert_eq!(err.error_key(), "error.calculator.bit_amount_unreachable");
        assert_eq!(err.error_params()["side"], "blue");
    }

    #[test]
    fn test_decode_red_unreachable_after_blue_ok() {
        let t = template(&[3, 5]);
        let err = decode(&t, 8, 4, Direction::North).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnreachableAmount {
                channel: Channel::Red,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_greedy_does_not_backtrack() {
        // 4 + 5 = 9 exists, but the high-to-low pass takes 6 first
        let t = template(&[4, 5, 6]);
        assert!(decode(&t, 9, 0, Direction::North).is_err());
        assert_eq!(decode(&t, 11, 0, Direction::North).unwrap().blue, vec![1, 2]);
    }

    #[test]
    fn test_decode_overlap_is_allowed() {
        let t = template(&[1, 2, 4]);
        let result = decode(&t, 6, 4, Direction::South).unwrap();
        assert_eq!(result.blue, vec![1, 2]);
        assert_eq!(result.red, vec![2]);
    }

    #[test]
    fn test_decode_error_order() {
        let mut empty = BitTemplate::with_side_count(3).unwrap();
        assert!(matches!(
            decode(&empty, 1, 1, Direction::East),
            Err(DecodeError::MissingDirectionMapping {
                direction: Direction::East
            })
        ));

        empty.set_direction_mask(MaskCode::B11, Direction::East);
        assert_eq!(decode(&empty, 1, 1, Direction::East), Err(DecodeError::EmptyTemplate));
    }

    #[test]
    fn test_decode_skips_unset_sides() {
        let mut t = BitTemplate::with_side_count(3).unwrap();
        t.set_direction_mask(MaskCode::B00, Direction::North);
        t.set_side_value(1, "2").unwrap();
        // Side 2 would show placeholder "3" but has no weight
        assert!(decode(&t, 3, 0, Direction::North).is_err());
        assert_eq!(decode(&t, 2, 0, Direction::North).unwrap().blue, vec![1]);
    }

    #[test]
    fn test_decode_lowest_code_wins() {
        let mut t = template(&[1]);
        t.set_direction_mask(MaskCode::B11, Direction::East);
        t.set_direction_mask(MaskCode::B10, Direction::East);
        assert_eq!(decode(&t, 1, 1, Direction::East).unwrap().direction, [false, true]);
    }

    #[test]
    fn test_decode_ignores_swap() {
        let mut t = template(&powers_of_two(4));
        let plain = decode(&t, 9, 6, Direction::North).unwrap();
        t.toggle_swap();
        assert_eq!(decode(&t, 9, 6, Direction::North).unwrap(), plain);
    }

    #[test]
    fn test_error_report_json() {
        let report = DecodeError::EmptyTemplate.report();
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({ "errorKey": "error.calculator.bit_template_empty" })
        );
    }

    proptest! {
        #[test]
        fn prop_decoded_sides_sum_to_amount(
            weights in proptest::collection::vec(0u32..500, 1..20),
            blue in 0u32..3000,
            red in 0u32..3000,
        ) {
            let t = template(&weights);
            if let Ok(result) = decode(&t, blue, red, Direction::South) {
                let sum = |idx: &[usize]| idx.iter().map(|&i| weights[i]).sum::<u32>();
                prop_assert_eq!(sum(&result.blue), blue);
                prop_assert_eq!(sum(&result.red), red);
                prop_assert_eq!(result.direction, [true, true]);
            }
        }

        #[test]
        fn prop_binary_template_reaches_every_amount(amount in 0u32..(1 << 13)) {
            let t = template(&powers_of_two(13));
            let result = decode(&t, amount, amount, Direction::North).unwrap();
            let decoded: u32 = result.blue.iter().map(|&i| 1u32 << i).sum();
            prop_assert_eq!(decoded, amount);
        }

        #[test]
        fn prop_decode_is_deterministic(
            weights in proptest::collection::vec(1u32..100, 1..16),
            blue in 0u32..500,
            red in 0u32..500,
        ) {
            let t = template(&weights);
            prop_assert_eq!(
                decode(&t, blue, red, Direction::East),
                decode(&t, blue, red, Direction::East)
            );
        }
    }
}
