//! GUI input adapter for interactive exploration.
//!
//! winit owns the window and event loop. The HUD is drawn with egui on top of the
//! pixels framebuffer.

pub mod app;
pub mod commands;
pub mod events;
pub mod key_bindings;
