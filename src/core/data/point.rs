/// Integer pixel position. Signed so positions left of or above a surface can be
/// represented and rejected rather than wrapped.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
