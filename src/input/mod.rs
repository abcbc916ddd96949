use egui::{Context, Pos2, Rect};

mod session;

pub use session::{InputSession, SessionState};

/// Pointer events in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved onto the canvas
    PointerEnter(Pos2),
    /// Pointer left the canvas
    PointerLeave,
    /// Primary button pressed over the canvas
    PointerDown(Pos2),
    /// Pointer moved while over the canvas
    PointerMove(Pos2),
    /// Primary button released, wherever the pointer is
    PointerUp,
}

/// Converts raw egui pointer state into [`InputEvent`]s for one canvas
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    inside: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process this frame's egui input for the canvas at `canvas_rect`
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        let (hover, pressed, released) = ctx.input(|input| {
            (
                input.pointer.hover_pos(),
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
            )
        });
        self.process_pointer(canvas_rect, hover, pressed, released)
    }

    /// Frame events are ordered enter/leave, down, move, up
    pub fn process_pointer(
        &mut self,
        canvas_rect: Rect,
        hover: Option<Pos2>,
        pressed: bool,
        released: bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let inside = hover.filter(|pos| canvas_rect.contains(*pos));
        let to_canvas = |pos: Pos2| {
            let local = pos - canvas_rect.min;
            Pos2::new(
                local.x.clamp(0.0, canvas_rect.width()),
                local.y.clamp(0.0, canvas_rect.height()),
            )
        };

        match (self.inside, inside) {
            (false, Some(pos)) => events.push(InputEvent::PointerEnter(to_canvas(pos))),
            (true, None) => events.push(InputEvent::PointerLeave),
            _ => {}
        }
        self.inside = inside.is_some();

        if let Some(pos) = inside {
            if pressed {
                events.push(InputEvent::PointerDown(to_canvas(pos)));
            } else if self.last_pointer_pos != Some(pos) {
                events.push(InputEvent::PointerMove(to_canvas(pos)));
            }
        }
        self.last_pointer_pos = hover;

        if released {
            events.push(InputEvent::PointerUp);
        }

        events
    }
}
