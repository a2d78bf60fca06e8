//! Reusable pieces of the main window

pub mod confirm_remove;
pub mod credential_table;
pub mod details_dialog;
