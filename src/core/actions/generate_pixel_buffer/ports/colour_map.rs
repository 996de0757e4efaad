use crate::core::data::colour::Colour;
use std::error::Error;

pub trait ColourMap<T>: Send + Sync {
    type Failure: Error + Send + 'static;

    fn map(&self, value: T) -> Result<Colour, Self::Failure>;

    fn display_name(&self) -> &str;
}
