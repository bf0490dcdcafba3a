//! Interactive template editing: paste, swap and undo
//!
//! The editor owns one template and a checkpoint stack. Destructive bulk
//! edits (paste, swap) save the previous state first; single-cell edits and
//! resizes do not. Decoding is left to the caller.

pub mod checkpoint;
pub mod paste;

pub use checkpoint::CheckpointStack;
pub use paste::{PasteAnchor, apply_paste, parse_pasted_values};

use crate::template::{BitTemplate, SideArray, TemplateError};

#[derive(Debug, Clone)]
pub struct TemplateEditor<S = BitTemplate> {
    template: S,
    checkpoints: CheckpointStack<S>,
}

impl<S: SideArray + Default> Default for TemplateEditor<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: SideArray> TemplateEditor<S> {
    pub fn new(template: S) -> Self {
        Self {
            template,
            checkpoints: CheckpointStack::default(),
        }
    }

    /// Editor with a custom undo depth
    pub fn with_depth(template: S, max_depth: usize) -> Self {
        Self {
            template,
            checkpoints: CheckpointStack::new(max_depth),
        }
    }

    pub fn template(&self) -> &S {
        &self.template
    }

    /// Direct access for non-destructive edits (masks, multiplier, ...)
    pub fn template_mut(&mut self) -> &mut S {
        &mut self.template
    }

    pub fn into_template(self) -> S {
        self.template
    }

    pub fn undo_depth(&self) -> usize {
        self.checkpoints.len()
    }

    /// Snapshot the current template onto the undo stack
    pub fn save_checkpoint(&mut self) {
        self.checkpoints.push(self.template.clone());
        log::debug!("Checkpoint saved ({} on stack)", self.checkpoints.len());
    }

    /// Restore the most recent checkpoint. Returns false when there was none.
    pub fn undo(&mut self) -> bool {
        match self.checkpoints.pop() {
            Some(previous) => {
                self.template = previous;
                log::debug!("Undo ({} left on stack)", self.checkpoints.len());
                true
            }
            None => false,
        }
    }

    /// Edit the cell under a display-row cursor
    ///
    /// # Panics
    /// If `cursor` is not below the side count.
    pub fn set_display_value(&mut self, anchor: PasteAnchor, cursor: usize, raw: &str) -> Result<(), TemplateError> {
        let index = anchor.side_index(cursor, self.template.side_count());
        self.template.set_side_value(index, raw)
    }

    pub fn set_side_count(&mut self, count: usize) -> Result<(), TemplateError> {
        self.template.set_side_count(count).inspect_err(|e| log::warn!("Side count rejected: {}", e))
    }

    /// Paste `text` under the cursor.
    ///
    /// Returns false, without touching the template or the undo stack, when
    /// the text is not a recognized list of numbers.
    ///
    /// # Panics
    /// If `cursor` is not below the side count.
    pub fn paste(&mut self, anchor: PasteAnchor, cursor: usize, text: &str) -> bool {
        let Some(values) = parse_pasted_values(text) else {
            return false;
        };
        self.save_checkpoint();
        let written = apply_paste(&mut self.template, anchor, cursor, &values);
        log::debug!(
            "Pasted {} of {} values at {:?} cursor {}",
            written,
            values.len(),
            anchor,
            cursor
        );
        true
    }

    /// Exchange the blue/red display roles
    pub fn swap(&mut self) {
        self.save_checkpoint();
        self.template.toggle_swap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::{Direction, MaskCode};
    use crate::template::MultiplierTemplate;

    fn editor() -> TemplateEditor {
        let mut t = BitTemplate::with_side_count(5).unwrap();
        t.set_side_value(0, "1").unwrap();
        t.set_direction_mask(MaskCode::B00, Direction::North);
        TemplateEditor::new(t)
    }

    #[test]
    fn test_rejected_paste_leaves_no_checkpoint() {
        let mut ed = editor();
        let before = ed.template().clone();
        assert!(!ed.paste(PasteAnchor::Blue, 0, "1-2-3"));
        assert_eq!(ed.template(), &before);
        assert_eq!(ed.undo_depth(), 0);
    }

    #[test]
    fn test_paste_then_undo_restores_exactly() {
        let mut ed = editor();
        let before = ed.template().clone();
        assert!(ed.paste(PasteAnchor::Blue, 1, "2 4 8"));
        assert_eq!(ed.template().side_values(), &[Some(1), Some(2), Some(4), Some(8), None]);
        assert_eq!(ed.undo_depth(), 1);

        assert!(ed.undo());
        assert_eq!(ed.template(), &before);
    }

    #[test]
    fn test_swap_is_undoable() {
        let mut ed = editor();
        ed.swap();
        assert!(ed.template().is_swapped());
        ed.undo();
        assert!(!ed.template().is_swapped());
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut ed = editor();
        let before = ed.template().clone();
        assert!(!ed.undo());
        assert_eq!(ed.template(), &before);
    }

    #[test]
    fn test_manual_checkpoint_roundtrip() {
        let mut ed = editor();
        let before = ed.template().clone();
        ed.save_checkpoint();
        ed.set_display_value(PasteAnchor::Red, 0, "32").unwrap();
        ed.template_mut().set_direction_mask(MaskCode::B11, Direction::South);
        assert_eq!(ed.template().side_values()[4], Some(32));
        ed.undo();
        assert_eq!(ed.template(), &before);
    }

    #[test]
    fn test_single_edits_do_not_checkpoint() {
        let mut ed = editor();
        ed.set_display_value(PasteAnchor::Blue, 2, "9").unwrap();
        assert!(ed.set_display_value(PasteAnchor::Blue, 2, "nine").is_err());
        ed.set_side_count(8).unwrap();
        assert!(ed.set_side_count(0).is_err());
        assert_eq!(ed.undo_depth(), 0);
        assert_eq!(ed.template().side_count(), 8);
        assert_eq!(ed.template().side_values()[2], Some(9));
    }

    #[test]
    fn test_depth_is_bounded() {
        let mut ed = TemplateEditor::with_depth(BitTemplate::new(), 3);
        for _ in 0..10 {
            ed.swap();
        }
        assert_eq!(ed.undo_depth(), 3);
    }

    #[test]
    fn test_multiplier_editor() {
        let mut ed: TemplateEditor<MultiplierTemplate> = TemplateEditor::default();
        assert!(ed.paste(PasteAnchor::Red, 0, "5, 6"));
        assert_eq!(ed.template().side_values()[12], Some(5));
        assert_eq!(ed.template().side_values()[11], Some(6));
        ed.template_mut().set_multiplier("50").unwrap();
        ed.undo();
        // Undo restores the pre-paste snapshot, multiplier included
        assert_eq!(ed.template().multiplier(), 200);
        assert!(ed.template().side_values().iter().all(Option::is_none));
    }
}
