pub mod cli;
pub mod config;
pub mod interactive;
pub mod ports;
