//! Domain core: complex-plane geometry, escape-time evaluation, colouring and
//! navigation. Nothing in here knows about windows or files.

pub mod actions;
pub mod data;
pub mod fractals;
pub mod navigation;
pub mod util;
