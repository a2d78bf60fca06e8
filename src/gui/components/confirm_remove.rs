//! Yes/No prompt shown before checked rows are removed

use eframe::egui;

use crate::gui::constants::*;

pub fn prompt(count: usize) -> String {
    match count {
        1 => "Remove 1 checked row?".to_string(),
        n => format!("Remove {n} checked rows?"),
    }
}

/// Renders the prompt. Some(true) = confirmed, Some(false) = declined, None = still open.
pub fn show(ctx: &egui::Context, count: usize) -> Option<bool> {
    let mut answer = None;

    egui::Window::new("Remove")
        .collapsible(false)
        .resizable(false)
        .min_width(DIALOG_MIN_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(prompt(count));
            ui.label(egui::RichText::new("y / n").small().weak());
            ui.add_space(ITEM_SPACING);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if ui.button("Yes").clicked() {
                    answer = Some(true);
                }
                if ui.button("No").clicked() {
                    answer = Some(false);
                }
            });
        });

    answer
}
