//! The ordered side-weight array shared by every template kind

use super::TemplateError;
use crate::consts::{DEFAULT_SIDE_COUNT, MAX_SIDE_COUNT, MIN_SIDE_COUNT};

/// Parse user input for a side weight.
///
/// Blank input means "unset". Otherwise the trimmed text must be a decimal
/// integer (an optional leading `+` is allowed) that fits in a `u32`.
pub fn coerce_side_value(raw: &str) -> Result<Option<u32>, TemplateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TemplateError::InvalidSideValue(raw.to_string()));
    }
    digits
        .parse::<u32>()
        .map(Some)
        .map_err(|_| TemplateError::InvalidSideValue(raw.to_string()))
}

/// Side weights indexed from the array end nearest the blue arrow.
///
/// `None` is an unset side. The length always stays within
/// `MIN_SIDE_COUNT..=MAX_SIDE_COUNT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideValues {
    values: Vec<Option<u32>>,
}

impl Default for SideValues {
    fn default() -> Self {
        Self {
            values: vec![None; DEFAULT_SIDE_COUNT],
        }
    }
}

impl SideValues {
    /// All-unset array of `count` sides
    pub fn with_count(count: usize) -> Result<Self, TemplateError> {
        check_count(count)?;
        Ok(Self {
            values: vec![None; count],
        })
    }

    /// Build from explicit values (index order)
    pub fn from_values(values: Vec<Option<u32>>) -> Result<Self, TemplateError> {
        check_count(values.len())?;
        Ok(Self { values })
    }

    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn as_slice(&self) -> &[Option<u32>] {
        &self.values
    }

    /// Value at `index` (`None` when unset).
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.values[index]
    }

    /// Grow with unset sides or truncate from the end
    pub fn resize(&mut self, count: usize) -> Result<(), TemplateError> {
        check_count(count)?;
        self.values.resize(count, None);
        Ok(())
    }

    /// # Panics
    /// If `index` is out of range.
    pub fn set(&mut self, index: usize, value: Option<u32>) {
        assert!(
            index < self.values.len(),
            "side index {index} out of range for {} sides",
            self.values.len()
        );
        self.values[index] = value;
    }

    /// Coerce `raw` and store it. Invalid input leaves the previous value.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn set_raw(&mut self, index: usize, raw: &str) -> Result<(), TemplateError> {
        let value = coerce_side_value(raw)?;
        self.set(index, value);
        Ok(())
    }

    /// `(index, weight)` for every side that has a value
    pub fn weights(&self) -> impl DoubleEndedIterator<Item = (usize, u32)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|w| (i, w)))
    }

    /// True when at least one side has a value
    pub fn has_values(&self) -> bool {
        self.values.iter().any(Option::is_some)
    }

    /// True when every side has a value
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Display text for a side: its weight, or the 1-based position when unset
    pub fn label(&self, index: usize) -> String {
        match self.get(index) {
            Some(v) => v.to_string(),
            None => placeholder(index),
        }
    }

    /// Values in reverse index order with unset stored as 0
    pub(crate) fn to_reversed_export(&self) -> Vec<u32> {
        self.values.iter().rev().map(|v| v.unwrap_or(0)).collect()
    }

    /// Inverse of [`to_reversed_export`](Self::to_reversed_export). 0 reads back as unset.
    pub(crate) fn from_reversed_export(values: &[u32]) -> Result<Self, TemplateError> {
        Self::from_values(
            values
                .iter()
                .rev()
                .map(|&v| if v == 0 { None } else { Some(v) })
                .collect(),
        )
    }
}

/// Placeholder text shown for an unset side
pub fn placeholder(index: usize) -> String {
    (index + 1).to_string()
}

fn check_count(count: usize) -> Result<(), TemplateError> {
    if (MIN_SIDE_COUNT..=MAX_SIDE_COUNT).contains(&count) {
        Ok(())
    } else {
        Err(TemplateError::InvalidSideCount(count))
    }
}
