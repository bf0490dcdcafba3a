//! Side/mask configuration model
//!
//! A template is an ordered array of side weights plus, for the main bit
//! template, a table assigning compass directions to 2-bit mask codes.
//! Templates are edited in place and cross process boundaries in their
//! export form (see [`export`]).

pub mod bit;
pub mod export;
pub mod multiplier;
pub mod sides;

pub use bit::BitTemplate;
pub use export::{BitTemplateConfig, MultiplierConfig};
pub use multiplier::MultiplierTemplate;
pub use sides::{SideValues, coerce_side_value};

use thiserror::Error;

/// Rejected configuration edit. The template is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("side count {0} is outside 1..=64")]
    InvalidSideCount(usize),

    #[error("side value {0:?} is not a non-negative integer")]
    InvalidSideValue(String),

    #[error("multiplier {0:?} is not a positive integer")]
    InvalidMultiplier(String),

    #[error("unknown mask code {0:?}")]
    UnknownMaskCode(String),

    #[error("unknown direction {0:?}")]
    UnknownDirection(String),

    #[error("expected {expected} side values, found {actual}")]
    ValueCountMismatch { expected: usize, actual: usize },
}

/// Gap found when checking that a template is ready to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TemplateIssue {
    #[error("every side needs a value")]
    ValuesIncomplete,
    #[error("every mask code needs a direction")]
    MasksIncomplete,
    #[error("every multiplier side needs a value")]
    MultiplierValuesIncomplete,
}

impl TemplateIssue {
    /// Form field key the UI highlights for this issue
    pub fn field_key(&self) -> &'static str {
        match self {
            TemplateIssue::ValuesIncomplete => "bit_values_incomplete",
            TemplateIssue::MasksIncomplete => "bit_masks_incomplete",
            TemplateIssue::MultiplierValuesIncomplete => "multiplier_values_incomplete",
        }
    }
}

/// A template whose sides can be edited, pasted into and swapped.
///
/// Implemented by both [`BitTemplate`] and [`MultiplierTemplate`] so the
/// editor can drive either one.
pub trait SideArray: Clone {
    fn sides(&self) -> &SideValues;
    fn sides_mut(&mut self) -> &mut SideValues;
    fn is_swapped(&self) -> bool;
    fn toggle_swap(&mut self);

    fn side_count(&self) -> usize {
        self.sides().count()
    }

    /// Resize the side array. Out-of-range counts are rejected.
    fn set_side_count(&mut self, count: usize) -> Result<(), TemplateError> {
        self.sides_mut().resize(count)
    }

    /// Coerce `raw` and store it at `index`.
    ///
    /// # Panics
    /// If `index` is not below the side count.
    fn set_side_value(&mut self, index: usize, raw: &str) -> Result<(), TemplateError> {
        self.sides_mut().set_raw(index, raw)
    }
}
