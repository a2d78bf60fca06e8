//! Scrollable credential table: site name column and checkbox column

use eframe::egui;

use crate::credentials::CredentialTable;
use crate::gui::constants::*;

/// What the user did to the table during one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    Select(usize),
    Toggle(usize),
    Activate(usize),
    Rename(usize, String),
}

/// In-progress inline edit of a site name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEdit {
    pub index: usize,
    pub buffer: String,
    focus_pending: bool,
}

impl RowEdit {
    pub fn new(index: usize, current: &str) -> Self {
        Self {
            index,
            buffer: current.to_string(),
            focus_pending: true,
        }
    }
}

/// UI state of the table that is not part of the rows themselves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    pub editing: Option<RowEdit>,
    /// Row highlighted for keyboard navigation
    pub cursor: Option<usize>,
    scroll_to_cursor: bool,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, index: usize) {
        self.cursor = Some(index);
        self.scroll_to_cursor = true;
    }

    /// Move the cursor down, wrapping to the first row
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.cursor = None;
            return;
        }
        let next = match self.cursor {
            Some(index) => (index + 1) % len,
            None => 0,
        };
        self.select(next);
    }

    /// Move the cursor up, wrapping to the last row
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.cursor = None;
            return;
        }
        let previous = match self.cursor {
            Some(index) if index > 0 && index < len => index - 1,
            _ => len - 1,
        };
        self.select(previous);
    }

    /// Keep the cursor on a valid row after rows were removed
    pub fn clamp(&mut self, len: usize) {
        self.cursor = match self.cursor {
            _ if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => None,
        };
    }
}

/// Id of the clickable area of a row's site name cell
pub fn row_id(index: usize) -> egui::Id {
    egui::Id::new(("credential_row", index))
}

/// Renders the table and returns the actions to apply.
/// The table itself is only read here.
pub fn ui(ui: &mut egui::Ui, table: &CredentialTable, state: &mut TableState) -> Vec<TableAction> {
    let mut actions = Vec::new();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("credential_table")
                .num_columns(2)
                .striped(true)
                .spacing([ITEM_SPACING * 2.0, ITEM_SPACING])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Site name").strong());
                    ui.label(egui::RichText::new("Selected").strong());
                    ui.end_row();

                    for (index, row) in table.iter().enumerate() {
                        site_name_cell(ui, index, &row.site_name, state, &mut actions);

                        let mut checked = row.selected;
                        if ui.checkbox(&mut checked, "").changed() {
                            actions.push(TableAction::Toggle(index));
                        }
                        ui.end_row();
                    }
                });
        });

    state.scroll_to_cursor = false;
    actions
}

fn site_name_cell(
    ui: &mut egui::Ui,
    index: usize,
    site_name: &str,
    state: &mut TableState,
    actions: &mut Vec<TableAction>,
) {
    if let Some(edit) = state.editing.as_mut().filter(|edit| edit.index == index) {
        // Escape is checked before the field so a surrendered focus is not mistaken for a commit
        let cancelled = ui.input(|i| i.key_pressed(egui::Key::Escape));
        let response = ui.text_edit_singleline(&mut edit.buffer);
        if edit.focus_pending {
            response.request_focus();
            edit.focus_pending = false;
        }
        if cancelled {
            state.editing = None;
        } else if response.lost_focus() {
            actions.push(TableAction::Rename(index, edit.buffer.clone()));
            state.editing = None;
        }
        return;
    }

    let is_cursor = state.cursor == Some(index);
    let mut text = egui::RichText::new(site_name);
    if is_cursor {
        text = text.background_color(ui.visuals().selection.bg_fill);
    }
    let label = ui.label(text);
    let response = ui
        .interact(label.rect, row_id(index), egui::Sense::click())
        .on_hover_text("Double-click to show details");

    if is_cursor && state.scroll_to_cursor {
        response.scroll_to_me(None);
    }

    if response.double_clicked() {
        actions.push(TableAction::Activate(index));
    } else if response.clicked() {
        actions.push(TableAction::Select(index));
    }

    response.context_menu(|ui| {
        if ui.button("Show details").clicked() {
            actions.push(TableAction::Activate(index));
            ui.close_menu();
        }
        if ui.button("Rename").clicked() {
            state.editing = Some(RowEdit::new(index, site_name));
            ui.close_menu();
        }
    });
}
