use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::navigation::{NavigationConfig, NavigationError, Navigator};
use std::error::Error;
use std::fmt;

pub const DEFAULT_SURFACE_WIDTH: u32 = 800;
pub const DEFAULT_SURFACE_HEIGHT: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    Mandelbrot(MandelbrotError),
    Navigation(NavigationError),
    Viewport(ViewportError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mandelbrot(err) => write!(f, "invalid mandelbrot settings: {}", err),
            Self::Navigation(err) => write!(f, "invalid navigation settings: {}", err),
            Self::Viewport(err) => write!(f, "invalid initial view: {}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Mandelbrot(err) => Some(err),
            Self::Navigation(err) => Some(err),
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for ConfigError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

impl From<NavigationError> for ConfigError {
    fn from(err: NavigationError) -> Self {
        Self::Navigation(err)
    }
}

impl From<ViewportError> for ConfigError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

/// Every tunable of the explorer in one place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub mandelbrot: MandelbrotConfig,
    pub navigation: NavigationConfig,
    pub surface_width: u32,
    pub surface_height: u32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            mandelbrot: MandelbrotConfig::default(),
            navigation: NavigationConfig::default(),
            surface_width: DEFAULT_SURFACE_WIDTH,
            surface_height: DEFAULT_SURFACE_HEIGHT,
        }
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.mandelbrot.params()?;
        self.navigation.validate()?;
        self.home_viewport()?;

        Ok(())
    }

    pub fn home_viewport(&self) -> Result<Viewport, ConfigError> {
        Ok(self
            .mandelbrot
            .viewport(self.surface_width, self.surface_height)?)
    }

    pub fn navigator(&self) -> Result<Navigator, ConfigError> {
        Ok(Navigator::new(self.home_viewport()?, self.navigation)?)
    }
}
