use std::sync::Mutex;
use winit::event_loop::EventLoopProxy;

use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::input::gui::events::GuiEvent;

/// Hands render events from the worker thread to the UI thread.
///
/// Only the newest event is kept; the event loop is woken to collect it.
pub struct PixelsAdapter {
    render_event: Mutex<Option<RenderEvent>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl InteractiveControllerPresenterPort for PixelsAdapter {
    fn present(&self, event: RenderEvent) {
        *self.render_event.lock().unwrap() = Some(event);

        if self.event_loop_proxy.send_event(GuiEvent::Wake).is_err() {
            log::debug!("event loop closed, dropping render event");
        }
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            render_event: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn render_event(&self) -> Option<RenderEvent> {
        self.render_event.lock().unwrap().take()
    }
}
