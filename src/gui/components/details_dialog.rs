//! Dialog opened by activating a table row
//!
//! Shows the site link and lets the user edit the row's site name and password.

use eframe::egui;

use crate::credentials::CredentialRow;
use crate::gui::constants::*;

/// Static hyperlink shown above the row details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLink {
    pub text: String,
    pub url: String,
}

impl SiteLink {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn label(&self) -> String {
        format!("URL: {}", self.text)
    }
}

/// Edit buffers for the activated row.
/// Nothing reaches the table until the dialog is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsDialog {
    pub index: usize,
    pub site_name: String,
    pub password: String,
}

/// How the dialog left the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResponse {
    Open,
    Save,
    Cancel,
}

impl DetailsDialog {
    pub fn for_row(index: usize, row: &CredentialRow) -> Self {
        Self {
            index,
            site_name: row.site_name.clone(),
            password: row.password.clone(),
        }
    }

    /// Current username and password lines
    pub fn body_lines(&self) -> [String; 2] {
        [
            format!("Username: {}", self.site_name),
            format!("Password: {}", self.password),
        ]
    }
}

/// Renders the dialog centered over the window
pub fn show(ctx: &egui::Context, dialog: &mut DetailsDialog, link: &SiteLink) -> DialogResponse {
    let mut open = true;
    let mut result = DialogResponse::Open;

    egui::Window::new("Site")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(DIALOG_MIN_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.hyperlink_to(
                egui::RichText::new(link.label()).color(egui::Color32::LIGHT_BLUE).underline(),
                &link.url,
            );
            ui.add_space(ITEM_SPACING);

            egui::Grid::new("details_fields")
                .num_columns(2)
                .spacing([ITEM_SPACING, ITEM_SPACING])
                .show(ui, |ui| {
                    ui.label("Username:");
                    ui.text_edit_singleline(&mut dialog.site_name);
                    ui.end_row();

                    ui.label("Password:");
                    ui.text_edit_singleline(&mut dialog.password);
                    ui.end_row();
                });

            ui.add_space(ITEM_SPACING);
            ui.separator();
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if ui.button("OK").clicked() {
                    result = DialogResponse::Save;
                }
                if ui.button("Cancel").clicked() {
                    result = DialogResponse::Cancel;
                }
            });
        });

    if !open {
        DialogResponse::Cancel
    } else {
        result
    }
}
