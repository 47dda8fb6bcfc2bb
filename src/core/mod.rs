pub mod commands;
pub mod config;
pub mod env;
pub mod fs;
pub mod interrupt;
pub mod session;
pub mod state;
