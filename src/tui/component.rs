use ratatui::Frame;
use ratatui::layout::Rect;

/// A renderable piece of the UI.
///
/// Data flows in through struct fields ("props"); rendering writes into
/// the frame for a given area. Components never reach into global state,
/// so each one can be driven against a `TestBackend` in isolation.
///
/// `render` takes `&mut self` rather than `&self` so stateful components
/// (scroll offsets, cached layout) can update themselves during the
/// render pass, matching ratatui's `StatefulWidget` shape.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
///
/// Low-level `TuiEvent`s go in; the component's own high-level event
/// type comes out when something the parent cares about happened (a
/// submit, a selection). Returning `None` means the event was either
/// absorbed or irrelevant.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
