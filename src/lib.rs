pub mod cli;
pub mod config;
pub mod logging;
pub mod tmdb;
pub mod ui;
