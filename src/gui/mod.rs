//! GUI module - the two egui windows and their shared components

pub mod components;
mod constants;
pub mod keys;
pub mod login;
pub mod manager;

pub use login::run_login;
pub use manager::run_manager;
