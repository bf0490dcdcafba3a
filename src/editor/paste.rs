//! Bulk paste of side values

use std::sync::OnceLock;

use regex::Regex;

use crate::template::SideArray;

static SPACE_SEPARATED: OnceLock<Regex> = OnceLock::new();
static COMMA_SEPARATED: OnceLock<Regex> = OnceLock::new();

fn space_separated() -> &'static Regex {
    SPACE_SEPARATED.get_or_init(|| Regex::new(r"^(?:[0-9]+\s+)+[0-9]+$").expect("space paste regex"))
}

fn comma_separated() -> &'static Regex {
    COMMA_SEPARATED.get_or_init(|| Regex::new(r"^(?:[0-9]+\s*,\s*)+[0-9]+$").expect("comma paste regex"))
}

/// Which display row the paste cursor sits in.
///
/// Both rows show the same sides; the blue row counts up from index 0 and
/// the red row counts down from the last side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteAnchor {
    Blue,
    Red,
}

impl PasteAnchor {
    /// Side index under display position `cursor`
    pub fn side_index(&self, cursor: usize, side_count: usize) -> usize {
        match self {
            PasteAnchor::Blue => cursor,
            PasteAnchor::Red => side_count - 1 - cursor,
        }
    }

    fn step(&self) -> isize {
        match self {
            PasteAnchor::Blue => 1,
            PasteAnchor::Red => -1,
        }
    }
}

/// Recognize pasted text as a list of at least two integers.
///
/// Accepts `"1 2 3"` (any whitespace) or `"1, 2, 3"`. Anything else, including
/// a number too large for a side value, returns `None` so the host can fall
/// back to its normal paste.
pub fn parse_pasted_values(text: &str) -> Option<Vec<u32>> {
    let trimmed = text.trim();
    let parts: Vec<&str> = if space_separated().is_match(trimmed) {
        trimmed.split_whitespace().collect()
    } else if comma_separated().is_match(trimmed) {
        trimmed.split(',').map(str::trim).collect()
    } else {
        return None;
    };
    parts.into_iter().map(|p| p.parse::<u32>().ok()).collect()
}

/// Write `values` into `target` starting under the cursor.
///
/// Values that would land outside the side array are dropped. Returns the
/// number of sides written.
///
/// # Panics
/// If `cursor` is not below the side count.
pub fn apply_paste<S: SideArray>(target: &mut S, anchor: PasteAnchor, cursor: usize, values: &[u32]) -> usize {
    let count = target.side_count();
    assert!(cursor < count, "paste cursor {cursor} out of range for {count} sides");

    let start = anchor.side_index(cursor, count) as isize;
    let sides = target.sides_mut();
    let mut written = 0;
    for (i, &value) in values.iter().enumerate() {
        let index = start + i as isize * anchor.step();
        if (0..count as isize).contains(&index) {
            sides.set(index as usize, Some(value));
            written += 1;
        }
    }
    written
}
