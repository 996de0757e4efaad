pub mod config;
pub mod errors;
pub mod events;
pub mod limits;
pub mod navigator;
pub mod status;

pub use config::NavigationConfig;
pub use errors::NavigationError;
pub use events::InputEvent;
pub use limits::NavigationLimits;
pub use navigator::Navigator;
pub use status::{NavigationOutcome, NavigationWarning};
