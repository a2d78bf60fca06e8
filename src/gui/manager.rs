//! Main window - credential table with add, remove and details actions

use anyhow::Result;
use eframe::egui;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::constants::WINDOW_TITLE;
use crate::credentials::CredentialTable;
use crate::gui::components::confirm_remove;
use crate::gui::components::credential_table::{self, TableAction, TableState};
use crate::gui::components::details_dialog::{self, DetailsDialog, DialogResponse, SiteLink};
use crate::gui::constants::*;
use crate::gui::keys::{KeyCommand, key_command};

pub struct ManagerWindow {
    table: CredentialTable,
    table_state: TableState,
    details: Option<DetailsDialog>,
    /// Number of rows awaiting a yes/no before removal
    pending_remove: Option<usize>,
    confirm_remove: bool,
    close_requested: bool,
    link: SiteLink,
}

impl ManagerWindow {
    pub fn new(table: CredentialTable, link: SiteLink) -> Self {
        Self {
            table,
            table_state: TableState::new(),
            details: None,
            pending_remove: None,
            confirm_remove: false,
            close_requested: false,
            link,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let mut window = Self::new(
            CredentialTable::seeded(config.seed_rows),
            SiteLink::new(&config.link_text, &config.link_url),
        );
        window.confirm_remove = config.confirm_remove;
        window
    }

    pub fn table(&self) -> &CredentialTable {
        &self.table
    }

    pub fn details(&self) -> Option<&DetailsDialog> {
        self.details.as_ref()
    }

    pub fn details_mut(&mut self) -> Option<&mut DetailsDialog> {
        self.details.as_mut()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.table_state.cursor
    }

    pub fn pending_remove(&self) -> Option<usize> {
        self.pending_remove
    }

    pub fn should_close(&self) -> bool {
        self.close_requested
    }

    /// Dialog or prompt on top of the table
    fn overlay_open(&self) -> bool {
        self.details.is_some() || self.pending_remove.is_some()
    }

    pub fn add_clicked(&mut self) {
        self.table.add_placeholder();
    }

    /// Remove checked rows, or ask first when confirmation is enabled
    pub fn remove_clicked(&mut self) {
        let checked = self.table.checked_count();
        if checked == 0 {
            debug!("Remove clicked with no rows checked");
            return;
        }
        if self.confirm_remove {
            info!(checked, "Asking before removing checked rows");
            self.pending_remove = Some(checked);
        } else {
            self.remove_checked();
        }
    }

    pub fn confirm_pending_remove(&mut self) {
        if self.pending_remove.take().is_some() {
            self.remove_checked();
        }
    }

    pub fn cancel_pending_remove(&mut self) {
        if self.pending_remove.take().is_some() {
            debug!("Removal cancelled");
        }
    }

    fn remove_checked(&mut self) {
        self.table.remove_checked();
        // Indices shifted, an open inline edit would point at the wrong row
        self.table_state.editing = None;
        self.table_state.clamp(self.table.len());
    }

    pub fn toggle(&mut self, index: usize) {
        if self.table.toggle(index).is_none() {
            warn!(index, "Toggle for missing row ignored");
        }
    }

    /// Open the details dialog for a row
    pub fn activate_row(&mut self, index: usize) {
        match self.table.get(index) {
            Some(row) => {
                info!(index, "Showing details for row");
                self.details = Some(DetailsDialog::for_row(index, row));
                self.table_state.editing = None;
                self.table_state.select(index);
            }
            None => warn!(index, "Activation of missing row ignored"),
        }
    }

    /// Write the dialog's edits back to its row and close it
    pub fn save_details(&mut self) {
        let Some(dialog) = self.details.take() else {
            return;
        };
        let DetailsDialog { index, site_name, password } = dialog;
        if self.table.rename(index, site_name) && self.table.set_password(index, password) {
            info!(index, "Saved row details");
        } else {
            warn!(index, "Details for missing row discarded");
        }
    }

    /// Close the details dialog, dropping unsaved edits
    pub fn close_details(&mut self) {
        self.details = None;
    }

    pub fn apply(&mut self, action: TableAction) {
        match action {
            TableAction::Select(index) => self.table_state.select(index),
            TableAction::Toggle(index) => self.toggle(index),
            TableAction::Activate(index) => self.activate_row(index),
            TableAction::Rename(index, name) => {
                if !self.table.rename(index, name) {
                    warn!(index, "Rename of missing row ignored");
                }
            }
        }
    }

    /// Keyboard handling. A prompt or dialog takes the keys before the table does.
    pub fn handle_command(&mut self, command: KeyCommand) {
        if self.pending_remove.is_some() {
            match command {
                KeyCommand::Confirm => self.confirm_pending_remove(),
                KeyCommand::Deny | KeyCommand::Cancel => self.cancel_pending_remove(),
                _ => {}
            }
            return;
        }

        if self.details.is_some() {
            if command == KeyCommand::Cancel {
                self.close_details();
            }
            return;
        }

        let len = self.table.len();
        match command {
            KeyCommand::Next => self.table_state.select_next(len),
            KeyCommand::Previous => self.table_state.select_previous(len),
            KeyCommand::Activate => {
                if let Some(index) = self.table_state.cursor {
                    self.activate_row(index);
                }
            }
            KeyCommand::Toggle => {
                if let Some(index) = self.table_state.cursor {
                    self.toggle(index);
                }
            }
            KeyCommand::Remove => self.remove_clicked(),
            KeyCommand::Cancel | KeyCommand::Quit => {
                info!("Quit requested from keyboard");
                self.close_requested = true;
            }
            KeyCommand::Confirm | KeyCommand::Deny => {}
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let commands: Vec<KeyCommand> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key { key, pressed: true, modifiers, .. } => key_command(*key, *modifiers),
                    // The windowing backend reports Ctrl-C as a copy request
                    egui::Event::Copy => Some(KeyCommand::Quit),
                    _ => None,
                })
                .collect()
        });

        // Typing into a text field keeps its keys, except Escape out of an overlay
        let typing = ctx.wants_keyboard_input() || self.table_state.editing.is_some();
        for command in commands {
            if typing && !(command == KeyCommand::Cancel && self.overlay_open()) {
                continue;
            }
            self.handle_command(command);
        }
    }

    fn full_width_button(ui: &mut egui::Ui, label: &str) -> bool {
        ui.add_sized([ui.available_width(), BUTTON_HEIGHT], egui::Button::new(label))
            .clicked()
    }
}

impl eframe::App for ManagerWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        let overlay_open = self.overlay_open();

        egui::TopBottomPanel::bottom("manager_buttons")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(MANAGER_BORDER))
            .show(ctx, |ui| {
                ui.spacing_mut().item_spacing.y = ITEM_SPACING;
                ui.add_enabled_ui(!overlay_open, |ui| {
                    if Self::full_width_button(ui, "Add") {
                        self.add_clicked();
                    }
                    if Self::full_width_button(ui, "Remove") {
                        self.remove_clicked();
                    }
                });
            });

        let mut actions = Vec::new();
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(MANAGER_BORDER))
            .show(ctx, |ui| {
                ui.add_enabled_ui(!overlay_open, |ui| {
                    actions = credential_table::ui(ui, &self.table, &mut self.table_state);
                });
            });
        for action in actions {
            self.apply(action);
        }

        if let Some(dialog) = self.details.as_mut() {
            match details_dialog::show(ctx, dialog, &self.link) {
                DialogResponse::Open => {}
                DialogResponse::Save => self.save_details(),
                DialogResponse::Cancel => self.close_details(),
            }
        }

        if let Some(count) = self.pending_remove {
            match confirm_remove::show(ctx, count) {
                Some(true) => self.confirm_pending_remove(),
                Some(false) => self.cancel_pending_remove(),
                None => {}
            }
        }

        if self.close_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

pub fn run_manager(config: &AppConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.manager_window.as_array())
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    let app = ManagerWindow::from_config(config);
    info!(rows = app.table().len(), "Opening main window");

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run main window: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{NEW_PASSWORD, NEW_SITE_NAME};
    use crate::gui::components::credential_table::RowEdit;

    fn window(rows: usize) -> ManagerWindow {
        ManagerWindow::new(
            CredentialTable::seeded(rows),
            SiteLink::new("www.baidu.com", "http://www.baidu.com"),
        )
    }

    fn names(window: &ManagerWindow) -> Vec<String> {
        window.table().iter().map(|r| r.site_name.clone()).collect()
    }

    #[test]
    fn test_from_config_seeds_rows() {
        let config = AppConfig {
            seed_rows: 12,
            link_text: "example.org".to_string(),
            confirm_remove: true,
            ..AppConfig::default()
        };
        let window = ManagerWindow::from_config(&config);
        assert_eq!(window.table().len(), 12);
        assert_eq!(window.link.text, "example.org");
        assert!(window.confirm_remove);
        assert!(window.details().is_none());
    }

    #[test]
    fn test_add_clicked_appends_placeholder() {
        let mut window = window(50);
        window.add_clicked();

        assert_eq!(window.table().len(), 51);
        let row = window.table().get(50).unwrap();
        assert_eq!(row.site_name, NEW_SITE_NAME);
        assert_eq!(row.password, NEW_PASSWORD);
        assert!(!row.selected);
    }

    #[test]
    fn test_remove_clicked_deletes_only_checked_rows() {
        let mut window = window(5);
        window.apply(TableAction::Toggle(1));
        window.apply(TableAction::Toggle(4));

        window.remove_clicked();

        assert_eq!(names(&window), vec!["Site 0", "Site 2", "Site 3"]);
    }

    #[test]
    fn test_toggle_twice_unchecks() {
        let mut window = window(3);
        window.toggle(2);
        window.toggle(2);
        window.remove_clicked();
        assert_eq!(window.table().len(), 3);
    }

    #[test]
    fn test_activate_row_opens_matching_dialog() {
        let mut window = window(10);
        window.apply(TableAction::Activate(3));

        let dialog = window.details().unwrap();
        assert_eq!(dialog.site_name, "Site 3");
        assert_eq!(dialog.password, "Password 3");
        assert_eq!(dialog.body_lines()[0], "Username: Site 3");
        assert_eq!(dialog.body_lines()[1], "Password: Password 3");

        window.close_details();
        assert!(window.details().is_none());
    }

    #[test]
    fn test_activate_missing_row_is_ignored() {
        let mut window = window(2);
        window.activate_row(2);
        assert!(window.details().is_none());
    }

    #[test]
    fn test_activate_added_row() {
        let mut window = window(0);
        window.add_clicked();
        window.activate_row(0);
        let dialog = window.details().unwrap();
        assert_eq!(dialog.site_name, NEW_SITE_NAME);
        assert_eq!(dialog.password, NEW_PASSWORD);
    }

    #[test]
    fn test_password_edited_in_dialog_is_saved() {
        let mut window = window(4);
        window.activate_row(2);
        let dialog = window.details_mut().unwrap();
        dialog.password = "correct horse".to_string();
        dialog.site_name = "mail.example.org".to_string();

        window.save_details();

        assert!(window.details().is_none());
        let row = window.table().get(2).unwrap();
        assert_eq!(row.password, "correct horse");
        assert_eq!(row.site_name, "mail.example.org");
        assert_eq!(window.table().get(1).unwrap().password, "Password 1");
    }

    #[test]
    fn test_escape_dismisses_dialog_without_saving() {
        let mut window = window(4);
        window.activate_row(1);
        window.details_mut().unwrap().password = "never stored".to_string();

        window.handle_command(KeyCommand::Cancel);

        assert!(window.details().is_none());
        assert!(!window.should_close());
        assert_eq!(window.table().get(1).unwrap().password, "Password 1");
    }

    #[test]
    fn test_dialog_ignores_list_keys() {
        let mut window = window(4);
        window.activate_row(1);
        window.handle_command(KeyCommand::Next);
        window.handle_command(KeyCommand::Quit);
        assert!(window.details().is_some());
        assert!(!window.should_close());
        assert_eq!(window.cursor(), Some(1));
    }

    #[test]
    fn test_rename_action_updates_row() {
        let mut window = window(2);
        window.apply(TableAction::Rename(0, "mail.example.org".to_string()));
        assert_eq!(window.table().get(0).unwrap().site_name, "mail.example.org");

        window.activate_row(0);
        assert_eq!(window.details().unwrap().site_name, "mail.example.org");
    }

    #[test]
    fn test_remove_cancels_inline_edit() {
        let mut window = window(3);
        window.table_state.editing = Some(RowEdit::new(2, "Site 2"));
        window.toggle(0);
        window.remove_clicked();
        assert!(window.table_state.editing.is_none());
    }

    #[test]
    fn test_keyboard_navigation_wraps_and_activates() {
        let mut window = window(3);
        window.handle_command(KeyCommand::Previous);
        assert_eq!(window.cursor(), Some(2));
        window.handle_command(KeyCommand::Next);
        assert_eq!(window.cursor(), Some(0));

        window.handle_command(KeyCommand::Toggle);
        assert!(window.table().get(0).unwrap().selected);

        window.handle_command(KeyCommand::Activate);
        assert_eq!(window.details().unwrap().site_name, "Site 0");
    }

    #[test]
    fn test_cursor_clamped_after_remove() {
        let mut window = window(3);
        window.apply(TableAction::Select(2));
        window.toggle(2);
        window.handle_command(KeyCommand::Remove);
        assert_eq!(window.table().len(), 2);
        assert_eq!(window.cursor(), Some(1));
    }

    #[test]
    fn test_remove_waits_for_confirmation() {
        let mut window = window(4);
        window.confirm_remove = true;
        window.toggle(0);
        window.toggle(3);

        window.remove_clicked();
        assert_eq!(window.pending_remove(), Some(2));
        assert_eq!(window.table().len(), 4);

        window.handle_command(KeyCommand::Confirm);
        assert_eq!(window.pending_remove(), None);
        assert_eq!(names(&window), vec!["Site 1", "Site 2"]);
    }

    #[test]
    fn test_declined_remove_keeps_rows() {
        let mut window = window(3);
        window.confirm_remove = true;
        window.toggle(1);

        window.remove_clicked();
        window.handle_command(KeyCommand::Deny);
        assert_eq!(window.pending_remove(), None);
        assert_eq!(window.table().len(), 3);

        window.remove_clicked();
        window.handle_command(KeyCommand::Cancel);
        assert_eq!(window.table().len(), 3);
        assert!(!window.should_close());
    }

    #[test]
    fn test_no_prompt_when_nothing_checked() {
        let mut window = window(3);
        window.confirm_remove = true;
        window.remove_clicked();
        assert_eq!(window.pending_remove(), None);
    }

    #[test]
    fn test_quit_keys_close_window() {
        let mut quit = window(1);
        quit.handle_command(KeyCommand::Quit);
        assert!(quit.should_close());

        let mut escaped = window(1);
        escaped.handle_command(KeyCommand::Cancel);
        assert!(escaped.should_close());
    }
}
