//! Keyboard shortcuts of the main window

use eframe::egui::{Key, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Next,
    Previous,
    Activate,
    Toggle,
    Remove,
    Confirm,
    Deny,
    Cancel,
    Quit,
}

/// Map a key press to a command.
///
/// | key              | command  |
/// |------------------|----------|
/// | Down, j          | Next     |
/// | Up, k            | Previous |
/// | Enter, e         | Activate |
/// | Space            | Toggle   |
/// | d, Delete        | Remove   |
/// | y                | Confirm  |
/// | n                | Deny     |
/// | Escape           | Cancel   |
/// | q, Ctrl-C        | Quit     |
pub fn key_command(key: Key, modifiers: Modifiers) -> Option<KeyCommand> {
    if modifiers.ctrl {
        return (key == Key::C).then_some(KeyCommand::Quit);
    }
    if modifiers.alt || modifiers.command {
        return None;
    }

    let command = match key {
        Key::ArrowDown | Key::J => KeyCommand::Next,
        Key::ArrowUp | Key::K => KeyCommand::Previous,
        Key::Enter | Key::E => KeyCommand::Activate,
        Key::Space => KeyCommand::Toggle,
        Key::D | Key::Delete => KeyCommand::Remove,
        Key::Y => KeyCommand::Confirm,
        Key::N => KeyCommand::Deny,
        Key::Escape => KeyCommand::Cancel,
        Key::Q => KeyCommand::Quit,
        _ => return None,
    };
    Some(command)
}
