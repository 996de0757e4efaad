use crate::core::data::point::Point;

/// Shell input, already translated from whatever window system produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    PrimaryClick(Point),
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    ZoomIn,
    ZoomOut,
    Reset,
}
