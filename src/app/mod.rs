pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod lock;

pub use context::AppContext;
