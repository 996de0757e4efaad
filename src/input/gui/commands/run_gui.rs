use std::marker::PhantomData;
use std::path::PathBuf;

use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

use crate::controllers::config::ExplorerConfig;
use crate::controllers::interactive::InteractiveController;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ExplorerConfig,
    save_dir: PathBuf,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ExplorerConfig, save_dir: impl Into<PathBuf>) -> Self {
        Self {
            presenter_factory,
            config,
            save_dir: save_dir.into(),
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let ui_state = GuiAppState::new(&self.config)?;
        let (width, height) = (self.config.surface_width, self.config.surface_height);

        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Explorer")
                .with_inner_size(PhysicalSize::new(width, height))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        log::info!("opening {}x{} window", width, height);

        let presenter: P = self
            .presenter_factory
            .build(window, (width, height), event_loop_proxy)?;
        let controller = InteractiveController::new(presenter.share_adapter());
        let app = GuiApp::new(
            window,
            &event_loop,
            presenter,
            controller,
            ui_state,
            self.save_dir.clone(),
        );

        app.run(event_loop)?;

        Ok(())
    }
}
