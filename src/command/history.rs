use crate::element::{Drawable, Element};
use crate::error::HistoryError;
use crate::id_generator::DrawableId;

/// Result type for history operations
pub type HistoryResult = Result<(), HistoryError>;

/// The undo/redo-capable record of committed drawables.
///
/// A drawable lives in exactly one of the two stacks. Undo and redo move the
/// tail element across by value, so relative order is kept on both sides.
#[derive(Debug, Default, Clone)]
pub struct CommandLog {
    /// Drawables currently on the canvas, oldest first
    committed: Vec<Drawable>,
    /// Undone drawables; the tail is the next one to redo
    redo_stack: Vec<Drawable>,
}

impl CommandLog {
    /// Creates a new empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly created drawable. Invalidates redo history.
    pub fn commit(&mut self, drawable: Drawable) {
        self.committed.push(drawable);
        self.redo_stack.clear();
    }

    /// Move the most recent drawable to the redo stack
    pub fn undo(&mut self) -> HistoryResult {
        let drawable = self.committed.pop().ok_or(HistoryError::NothingToUndo)?;
        self.redo_stack.push(drawable);
        Ok(())
    }

    /// Move the most recently undone drawable back onto the canvas
    pub fn redo(&mut self) -> HistoryResult {
        let drawable = self.redo_stack.pop().ok_or(HistoryError::NothingToRedo)?;
        self.committed.push(drawable);
        Ok(())
    }

    /// Empty the canvas. The redo stack is left as it is.
    pub fn clear(&mut self) {
        self.committed.clear();
    }

    pub fn committed(&self) -> &[Drawable] {
        &self.committed
    }

    pub fn redo_stack(&self) -> &[Drawable] {
        &self.redo_stack
    }

    /// Returns true if there are drawables that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are drawables that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// A committed drawable by id
    pub fn get(&self, id: DrawableId) -> Option<&Drawable> {
        self.committed.iter().rev().find(|d| d.id() == id)
    }

    /// Mutable access to a committed drawable. Undone drawables are not
    /// reachable.
    pub fn get_mut(&mut self, id: DrawableId) -> Option<&mut Drawable> {
        // The open drawable is almost always the newest one
        self.committed.iter_mut().rev().find(|d| d.id() == id)
    }

    /// Total recorded points across committed drawables
    pub fn point_count(&self) -> usize {
        self.committed.iter().map(Drawable::point_count).sum()
    }
}
