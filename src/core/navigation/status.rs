use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationWarning {
    ExtentAtMinimum,
    ExtentAtMaximum,
}

impl fmt::Display for NavigationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtentAtMinimum => write!(f, "zoom limit reached: double precision floor"),
            Self::ExtentAtMaximum => write!(f, "zoom limit reached: maximum extent"),
        }
    }
}

/// What the shell should do after the navigator has processed an event or a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Quit,
    /// The displayed viewport changed and needs a new frame.
    Redraw,
    /// A new target was set; call [`Navigator::tick`](super::Navigator::tick) until it
    /// stops returning `Redraw`.
    Animating,
    Unchanged,
    Refused(NavigationWarning),
}

impl NavigationOutcome {
    #[must_use]
    pub fn needs_redraw(self) -> bool {
        matches!(self, Self::Redraw)
    }
}
