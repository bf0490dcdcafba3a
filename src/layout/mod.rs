//! Responsive cell layout
//!
//! Decides how a linear run of side cells wraps across display rows for a
//! given container width. Wrapped rows are staggered by the host, so each
//! row after the first loses `STAGGER_OFFSET` px of usable width.

pub mod view;

pub use view::{DisplayCell, ResultView, Theme};

use serde::Serialize;

use crate::consts::*;

/// A cell value together with its position in the unwrapped sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutCell<T> {
    pub value: T,
    pub index: usize,
}

/// Minimum width for the mirrored single-line layout: both cell rows with
/// their arrows, plus the direction indicator in the middle.
pub fn required_width(side_count: usize) -> f32 {
    (side_count as f32 * CELL_WIDTH + ARROW_WIDTH) * 2.0 + DIRECTION_WIDTH + LAYOUT_PADDING
}

/// Cells that fit in row `row` of a staggered layout (always at least 1)
fn row_capacity(container_width: f32, row: usize) -> usize {
    let usable = container_width - CONTAINER_PADDING - row as f32 * STAGGER_OFFSET - SAFETY_BUFFER;
    (usable / ITEM_WIDTH).floor().max(1.0) as usize
}

/// Split `values` into display rows.
///
/// A width of 0 means the container has not been measured yet; everything
/// goes in one row so the host doesn't flash a collapsed layout. When
/// `right_to_left` is set the sequence is chunked from its far end and the
/// rows are returned bottom-up, keeping the order inside each row.
pub fn chunk_rows<T: Clone>(values: &[T], container_width: f32, right_to_left: bool) -> Vec<Vec<LayoutCell<T>>> {
    let mut cells: Vec<LayoutCell<T>> = values
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, value)| LayoutCell { value, index })
        .collect();

    if cells.is_empty() {
        return Vec::new();
    }
    if container_width <= 0.0 {
        return vec![cells];
    }
    if right_to_left {
        cells.reverse();
    }

    let first_row = (container_width - CONTAINER_PADDING - SAFETY_BUFFER) / ITEM_WIDTH;
    let mut rows = if cells.len() as f32 <= first_row.floor() {
        vec![cells]
    } else {
        let mut rows = Vec::new();
        let mut remaining = cells.into_iter().peekable();
        while remaining.peek().is_some() {
            let capacity = row_capacity(container_width, rows.len());
            rows.push(remaining.by_ref().take(capacity).collect::<Vec<_>>());
        }
        rows
    };

    if right_to_left {
        rows.reverse();
    }
    rows
}

/// True when the mirrored single-line layout fits in `container_width`
pub fn fits_horizontal(container_width: f32, side_count: usize) -> bool {
    container_width >= required_width(side_count)
}
