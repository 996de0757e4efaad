pub mod greyscale;
pub mod polynomial;
