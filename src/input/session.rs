use egui::Pos2;

use crate::command::CommandLog;
use crate::element::{Drawable, Element};
use crate::id_generator::DrawableId;
use crate::tool::ToolState;

/// Whether a drawable is currently being drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    /// The log owns the open drawable; the session only remembers its id
    Drawing { id: DrawableId },
}

/// Turns one pointer gesture into command log mutations
#[derive(Debug, Default)]
pub struct InputSession {
    state: SessionState,
}

impl InputSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, SessionState::Drawing { .. })
    }

    /// Open a drawable at `point` and commit it right away so it shows while
    /// being drawn. Committing clears the redo stack.
    pub fn begin(
        &mut self,
        point: Pos2,
        tool: &ToolState,
        log: &mut CommandLog,
        sticker_size: f32,
    ) -> DrawableId {
        if let SessionState::Drawing { id } = self.state {
            log::debug!("Closing drawable {id} left open by a missed pointer-up");
        }
        let drawable = Drawable::begin(point, tool, sticker_size);
        let id = drawable.id();
        log::trace!("Begin {} {id} at {point:?}", drawable.element_type());
        log.commit(drawable);
        self.state = SessionState::Drawing { id };
        id
    }

    /// Feed a pointer position to the open drawable.
    ///
    /// Returns false when nothing was extended: no drawable is open, or the
    /// open one has since left the canvas through undo or clear.
    pub fn extend(&mut self, point: Pos2, log: &mut CommandLog) -> bool {
        let SessionState::Drawing { id } = self.state else {
            return false;
        };
        match log.get_mut(id) {
            Some(drawable) => {
                drawable.extend(point);
                true
            }
            None => false,
        }
    }

    /// Close the open drawable. Returns whether one was open.
    pub fn end(&mut self) -> bool {
        let was_drawing = self.is_drawing();
        self.state = SessionState::Idle;
        was_drawing
    }
}
