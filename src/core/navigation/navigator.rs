use crate::core::data::viewport::Viewport;
use crate::core::navigation::config::{NavigationConfig, validate_smoothing};
use crate::core::navigation::errors::NavigationError;
use crate::core::navigation::events::InputEvent;
use crate::core::navigation::status::NavigationOutcome;

/// Turns shell input into viewport transforms.
///
/// Holds the displayed (`current`) viewport and the one being moved towards (`target`).
/// Without smoothing both are always equal. With smoothing, events move the target and
/// [`Navigator::tick`] eases the current viewport after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    home: Viewport,
    current: Viewport,
    target: Viewport,
    config: NavigationConfig,
}

impl Navigator {
    pub fn new(home: Viewport, config: NavigationConfig) -> Result<Self, NavigationError> {
        config.validate()?;

        Ok(Self {
            home,
            current: home,
            target: home,
            config,
        })
    }

    #[must_use]
    pub fn current(&self) -> Viewport {
        self.current
    }

    #[must_use]
    pub fn target(&self) -> Viewport {
        self.target
    }

    #[must_use]
    pub fn home(&self) -> Viewport {
        self.home
    }

    #[must_use]
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.current != self.target
    }

    pub fn set_smoothing(&mut self, smoothing: Option<f64>) -> Result<(), NavigationError> {
        validate_smoothing(smoothing)?;
        self.config.smoothing = smoothing;

        if smoothing.is_none() {
            self.current = self.target;
        }

        Ok(())
    }

    /// Applies one input event.
    ///
    /// Clicks are resolved against the displayed viewport; keyboard pan and zoom build
    /// on the target so repeated presses accumulate while an animation is running.
    pub fn handle(&mut self, event: InputEvent) -> Result<NavigationOutcome, NavigationError> {
        let pan = self.config.pan_fraction;

        let candidate = match event {
            InputEvent::Quit => return Ok(NavigationOutcome::Quit),
            InputEvent::PrimaryClick(pixel) => self
                .current
                .recenter_and_zoom(pixel, self.config.click_zoom_factor)?,
            InputEvent::PanLeft => self.target.pan(-pan, 0.0)?,
            InputEvent::PanRight => self.target.pan(pan, 0.0)?,
            InputEvent::PanUp => self.target.pan(0.0, -pan)?,
            InputEvent::PanDown => self.target.pan(0.0, pan)?,
            InputEvent::ZoomIn => self.target.zoom_about_center(self.config.key_zoom_factor)?,
            InputEvent::ZoomOut => self
                .target
                .zoom_about_center(self.config.key_zoom_factor.recip())?,
            InputEvent::Reset => self.home,
        };

        if let Err(warning) = self.config.limits.check(&candidate.region()) {
            log::warn!("ignoring {:?}: {}", event, warning);
            return Ok(NavigationOutcome::Refused(warning));
        }

        Ok(self.move_to(candidate))
    }

    /// Advances a smoothed transition by one step.
    ///
    /// Returns `Redraw` while the displayed viewport keeps moving and `Unchanged` once it
    /// has settled on the target.
    pub fn tick(&mut self) -> Result<NavigationOutcome, NavigationError> {
        if !self.is_animating() {
            return Ok(NavigationOutcome::Unchanged);
        }

        let smoothing = self.config.smoothing.unwrap_or(1.0);
        let next = self.current.interpolate_towards(&self.target, smoothing)?;

        if next == self.current {
            // within the settle tolerance: snap without a visible change
            self.current = self.target;
            log::debug!("navigation settled on {:?}", self.target.region());
            return Ok(NavigationOutcome::Unchanged);
        }

        self.current = next;
        Ok(NavigationOutcome::Redraw)
    }

    fn move_to(&mut self, candidate: Viewport) -> NavigationOutcome {
        if candidate == self.target && !self.is_animating() {
            return NavigationOutcome::Unchanged;
        }

        self.target = candidate;
        log::debug!("navigation target {:?}", candidate.region());

        if self.config.smoothing.is_some() {
            NavigationOutcome::Animating
        } else {
            self.current = candidate;
            NavigationOutcome::Redraw
        }
    }
}
