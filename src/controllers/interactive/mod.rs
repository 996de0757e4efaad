//! Interactive controller for real-time Mandelbrot rendering.
//!
//! A single background worker renders the newest [`RenderRequest`] and hands the
//! result to an [`InteractiveControllerPresenterPort`]. Submitting a request bumps
//! the generation counter, which cancels whatever frame is still in progress.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use errors::render::RenderError;
pub use events::render::RenderEvent;
pub use ports::presenter::InteractiveControllerPresenterPort;
