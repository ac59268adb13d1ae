pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod select2;
pub mod state;
pub mod utils;
pub mod web;
