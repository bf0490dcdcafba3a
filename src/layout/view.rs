//! Mirrored two-row display of a decoded template
//!
//! The top row lists sides in index order and points right; the bottom row
//! lists the same sides in reverse and points left. With the template
//! swapped, the red channel is drawn on top instead of blue.

use serde::Serialize;

use super::{LayoutCell, chunk_rows, fits_horizontal};
use crate::decode::{BitDecodeResult, Channel};
use crate::template::SideArray;

/// Colour theme of a display row, matching its TNT channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Blue,
    Red,
}

impl Theme {
    pub fn channel(&self) -> Channel {
        match self {
            Theme::Blue => Channel::Blue,
            Theme::Red => Channel::Red,
        }
    }
}

/// Which end of a row carries its arrow glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowSide {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayCell {
    /// Configured weight, or the 1-based position when unset
    pub label: String,
    /// Side index in the template
    pub side: usize,
    pub placeholder: bool,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub theme: Theme,
    pub arrow: ArrowSide,
    pub cells: Vec<DisplayCell>,
}

impl DisplayRow {
    /// Wrap this row for `container_width`. Left-pointing rows are chunked
    /// right-to-left (see [`chunk_rows`]).
    pub fn wrapped(&self, container_width: f32) -> Vec<Vec<LayoutCell<DisplayCell>>> {
        chunk_rows(&self.cells, container_width, self.arrow == ArrowSide::Left)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub side_count: usize,
    pub top: DisplayRow,
    pub bottom: DisplayRow,
    /// Direction code bits, when a decode result is shown
    pub direction: Option<[bool; 2]>,
}

impl ResultView {
    pub fn new<S: SideArray>(template: &S, result: Option<&BitDecodeResult>) -> Self {
        let sides = template.sides();
        let count = sides.count();
        let (top_theme, bottom_theme) = if template.is_swapped() {
            (Theme::Red, Theme::Blue)
        } else {
            (Theme::Blue, Theme::Red)
        };

        let cell = |side: usize, theme: Theme| DisplayCell {
            label: sides.label(side),
            side,
            placeholder: sides.get(side).is_none(),
            active: result.is_some_and(|r| r.active(theme.channel()).contains(&side)),
        };

        Self {
            side_count: count,
            top: DisplayRow {
                theme: top_theme,
                arrow: ArrowSide::Right,
                cells: (0..count).map(|i| cell(i, top_theme)).collect(),
            },
            bottom: DisplayRow {
                theme: bottom_theme,
                arrow: ArrowSide::Left,
                cells: (0..count).rev().map(|i| cell(i, bottom_theme)).collect(),
            },
            direction: result.map(|r| r.direction),
        }
    }

    /// Both rows and the direction indicator fit on one line
    pub fn use_horizontal_layout(&self, container_width: f32) -> bool {
        fits_horizontal(container_width, self.side_count)
    }
}
