pub mod browser;
pub mod config;
pub mod errors;
pub mod form;
pub mod resolver;
pub mod utils;
