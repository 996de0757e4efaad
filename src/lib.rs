pub mod adapters;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use controllers::cli::render_to_file::CliRenderController;
pub use controllers::config::{ConfigError, ExplorerConfig};
pub use crate::core::fractals::mandelbrot::field::{
    FieldError, FieldExecution, colour_of, compute_field, compute_field_with, render_frame,
    render_frame_with,
};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
