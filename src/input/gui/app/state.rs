use crate::controllers::config::{ConfigError, ExplorerConfig};
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::navigation::{InputEvent, NavigationOutcome, NavigationWarning, Navigator};

/// Smoothing used when the HUD toggle is switched on without a configured value.
pub const DEFAULT_SMOOTHING: f64 = 0.25;

pub struct GuiAppState {
    pub mandelbrot: MandelbrotConfig,
    navigator: Navigator,
    smoothing: f64,
    last_submitted_request: Option<RenderRequest>,
    pub latest_submitted_generation: u64,
    pub last_warning: Option<NavigationWarning>,
}

impl GuiAppState {
    pub fn new(config: &ExplorerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            mandelbrot: config.mandelbrot,
            navigator: config.navigator()?,
            smoothing: config.navigation.smoothing.unwrap_or(DEFAULT_SMOOTHING),
            last_submitted_request: None,
            latest_submitted_generation: 0,
            last_warning: None,
        })
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn smoothing_enabled(&self) -> bool {
        self.navigator.config().smoothing.is_some()
    }

    pub fn set_smoothing_enabled(&mut self, enabled: bool) {
        let smoothing = enabled.then_some(self.smoothing);

        if let Err(err) = self.navigator.set_smoothing(smoothing) {
            log::warn!("cannot change smoothing: {}", err);
        }
    }

    /// Feeds one input event to the navigator. Invalid input is logged and ignored.
    pub fn apply(&mut self, event: InputEvent) -> NavigationOutcome {
        match self.navigator.handle(event) {
            Ok(outcome) => {
                self.last_warning = match outcome {
                    NavigationOutcome::Refused(warning) => Some(warning),
                    _ => None,
                };
                outcome
            }
            Err(err) => {
                log::warn!("ignoring {:?}: {}", event, err);
                NavigationOutcome::Unchanged
            }
        }
    }

    /// Advances smoothed navigation. Returns `true` while the displayed view is moving.
    pub fn tick(&mut self) -> bool {
        match self.navigator.tick() {
            Ok(outcome) => outcome.needs_redraw(),
            Err(err) => {
                log::error!("navigation tick failed: {}", err);
                false
            }
        }
    }

    #[must_use]
    pub fn build_render_request(&self) -> RenderRequest {
        RenderRequest::from_config(self.navigator.current(), &self.mandelbrot)
    }

    #[must_use]
    pub fn should_submit(&self, request: &RenderRequest) -> bool {
        self.last_submitted_request
            .as_ref()
            .is_none_or(|last| last != request)
    }

    pub fn record_submission(&mut self, request: RenderRequest, generation: u64) {
        self.last_submitted_request = Some(request);
        self.latest_submitted_generation = generation;
    }

    /// Current magnification relative to the home view.
    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.navigator.home().region().width() / self.navigator.current().region().width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

    fn state() -> GuiAppState {
        GuiAppState::new(&ExplorerConfig::default()).unwrap()
    }

    #[test]
    fn unchanged_state_does_not_resubmit() {
        let mut ui_state = state();

        let request = ui_state.build_render_request();
        assert!(ui_state.should_submit(&request));
        ui_state.record_submission(request, 1);

        assert!(!ui_state.should_submit(&ui_state.build_render_request()));
        assert_eq!(ui_state.latest_submitted_generation, 1);
    }

    #[test]
    fn colour_map_and_iteration_changes_trigger_submit() {
        let mut ui_state = state();
        ui_state.record_submission(ui_state.build_render_request(), 1);

        ui_state.mandelbrot.colour_map_kind = MandelbrotColourMapKinds::Greyscale;
        assert!(ui_state.should_submit(&ui_state.build_render_request()));

        ui_state.record_submission(ui_state.build_render_request(), 2);
        ui_state.mandelbrot.max_iterations = 500;
        assert!(ui_state.should_submit(&ui_state.build_render_request()));
    }

    #[test]
    fn navigation_changes_the_requested_viewport() {
        let mut ui_state = state();
        ui_state.record_submission(ui_state.build_render_request(), 1);

        let outcome = ui_state.apply(InputEvent::PrimaryClick(Point { x: 400, y: 300 }));

        assert_eq!(outcome, NavigationOutcome::Redraw);
        assert!(ui_state.should_submit(&ui_state.build_render_request()));
        assert!((ui_state.zoom_level() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn invalid_click_is_ignored() {
        let mut ui_state = state();

        assert_eq!(
            ui_state.apply(InputEvent::PrimaryClick(Point { x: -1, y: 0 })),
            NavigationOutcome::Unchanged
        );
        assert_eq!(ui_state.zoom_level(), 1.0);
    }

    #[test]
    fn smoothing_toggle_animates_navigation() {
        let mut ui_state = state();
        assert!(!ui_state.smoothing_enabled());

        ui_state.set_smoothing_enabled(true);
        assert!(ui_state.smoothing_enabled());

        assert_eq!(ui_state.apply(InputEvent::ZoomIn), NavigationOutcome::Animating);
        assert!(ui_state.tick());

        ui_state.set_smoothing_enabled(false);
        assert!(!ui_state.navigator().is_animating());
        assert!(!ui_state.tick());
    }
}
