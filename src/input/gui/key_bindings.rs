use crate::core::navigation::InputEvent;
use winit::keyboard::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiAction {
    Navigate(InputEvent),
    SaveFrame,
}

/// Keyboard layout: arrows pan, `+`/`=` and `-` zoom, `R` resets, `S` saves the
/// current frame, `Esc` or `Q` quits.
#[must_use]
pub fn action_for_key(key: KeyCode) -> Option<GuiAction> {
    let event = match key {
        KeyCode::ArrowLeft => InputEvent::PanLeft,
        KeyCode::ArrowRight => InputEvent::PanRight,
        KeyCode::ArrowUp => InputEvent::PanUp,
        KeyCode::ArrowDown => InputEvent::PanDown,
        KeyCode::Equal | KeyCode::NumpadAdd => InputEvent::ZoomIn,
        KeyCode::Minus | KeyCode::NumpadSubtract => InputEvent::ZoomOut,
        KeyCode::KeyR => InputEvent::Reset,
        KeyCode::Escape | KeyCode::KeyQ => InputEvent::Quit,
        KeyCode::KeyS => return Some(GuiAction::SaveFrame),
        _ => return None,
    };

    Some(GuiAction::Navigate(event))
}
