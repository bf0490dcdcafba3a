//! Bit Template - configuration and decoding for bit-template TNT cannons
//!
//! Core modules:
//! - `template`: Side weights, direction masks and their export form
//! - `decode`: Turns blue/red TNT amounts and a direction into switch patterns
//! - `layout`: Wraps side cells across display rows
//! - `editor`: Bulk paste and undo checkpoints for template edits
//! - `settings` / `persistence` / `share`: Preferences, saved templates, share codes

pub mod decode;
pub mod direction;
pub mod editor;
pub mod layout;
pub mod persistence;
pub mod settings;
pub mod share;
pub mod template;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use decode::{BitDecodeResult, Channel, DecodeError, decode};
pub use direction::{Direction, MaskCode};
pub use editor::{CheckpointStack, PasteAnchor, TemplateEditor, parse_pasted_values};
pub use layout::{LayoutCell, ResultView, chunk_rows, required_width};
pub use settings::Settings;
pub use share::{SharedConfig, decode_share_code, encode_share_code};
pub use template::{BitTemplate, BitTemplateConfig, MultiplierConfig, MultiplierTemplate, SideArray, TemplateError};

/// Template and layout constants
pub mod consts {
    /// Smallest configurable side count
    pub const MIN_SIDE_COUNT: usize = 1;
    /// Largest configurable side count
    pub const MAX_SIDE_COUNT: usize = 64;
    /// Side count of a freshly created template
    pub const DEFAULT_SIDE_COUNT: usize = 13;
    /// Multiplier of a freshly created multiplier template
    pub const DEFAULT_MULTIPLIER: u32 = 200;
    /// Undo checkpoints kept before the oldest is evicted
    pub const DEFAULT_CHECKPOINT_DEPTH: usize = 50;

    /// Layout metrics (px). These must match the host's cell grid exactly.
    /// Input cell (48) plus gap (6)
    pub const ITEM_WIDTH: f32 = 54.0;
    /// Horizontal container padding (16 per side)
    pub const CONTAINER_PADDING: f32 = 32.0;
    pub const SAFETY_BUFFER: f32 = 40.0;
    /// Extra indent per wrapped row
    pub const STAGGER_OFFSET: f32 = 32.0;

    /// Mirrored horizontal layout pieces
    pub const CELL_WIDTH: f32 = 48.0 + 6.0;
    pub const ARROW_WIDTH: f32 = 16.0 + 8.0;
    pub const DIRECTION_WIDTH: f32 = 160.0;
    pub const LAYOUT_PADDING: f32 = 40.0;
}
