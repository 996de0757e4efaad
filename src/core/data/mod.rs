pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod escape_field;
pub mod pixel_buffer;
pub mod point;
pub mod viewport;
