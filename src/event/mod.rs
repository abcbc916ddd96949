mod bus;
mod events;

pub use bus::EventBus;
pub use events::SketchEvent;

pub trait EventHandler {
    fn handle_event(&mut self, event: &SketchEvent);
}
