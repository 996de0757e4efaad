//! Input adapters for the Mandelbrot explorer.
//!
//! Receive input from a window system and translate it into navigation events and
//! render requests.

#[cfg(feature = "gui")]
pub mod gui;
