#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotColourMapKinds {
    #[default]
    Polynomial,
    Greyscale,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::Polynomial, Self::Greyscale];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Polynomial => "Polynomial",
            Self::Greyscale => "Greyscale",
        }
    }
}

impl std::fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
