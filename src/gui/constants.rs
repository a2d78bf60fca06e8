//! Layout constants shared by both windows

/// Spacing between stacked widgets (GTK box spacing)
pub const ITEM_SPACING: f32 = 6.0;

/// Outer border of the main window
pub const MANAGER_BORDER: f32 = 6.0;

/// Outer margin of the login window
pub const LOGIN_MARGIN: f32 = 24.0;

/// Extra space above the password entry
pub const LOGIN_ENTRY_TOP: f32 = 24.0;

pub const BUTTON_HEIGHT: f32 = 24.0;

/// Width of the Show/Hide toggle next to the password entry
pub const PEEK_BUTTON_WIDTH: f32 = 48.0;

pub const DIALOG_MIN_WIDTH: f32 = 220.0;
