use std::path::Path;
use std::time::Instant;

use crate::controllers::config::ExplorerConfig;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::field::{FieldExecution, render_frame_with};

/// Renders the configured home view once and hands it to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    config: ExplorerConfig,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, config: ExplorerConfig) -> Self {
        Self {
            presenter,
            config,
            buffer: None,
        }
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.config.validate()?;

        let viewport = self.config.home_viewport()?;
        let params = self.config.mandelbrot.params()?;

        log::info!("Rendering Mandelbrot set...");
        log::info!("Image size: {}x{}", viewport.width(), viewport.height());
        log::info!("Max iterations: {}", params.max_iterations());
        log::info!("Colour map: {}", self.config.mandelbrot.colour_map_kind);

        let start = Instant::now();
        let buffer = render_frame_with(
            &viewport,
            params,
            self.config.mandelbrot.colour_map_kind,
            FieldExecution::Parallel,
        )?;

        log::info!("Duration: {:?}", start.elapsed());
        self.buffer = Some(buffer);

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, &filepath)?;
            log::info!("Saved to {}", filepath.as_ref().display());
        } else {
            log::warn!("nothing rendered yet, skipping write");
        }

        Ok(())
    }
}
