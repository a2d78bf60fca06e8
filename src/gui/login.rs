//! Login window - password entry and a login button
//!
//! There is no credential check: pressing Login just closes the window.

use anyhow::Result;
use eframe::egui;
use tracing::info;

use crate::config::AppConfig;
use crate::constants::WINDOW_TITLE;
use crate::gui::constants::*;

/// Line printed to stdout when the login button is pressed
pub const LOGIN_MESSAGE: &str = "login application";

#[derive(Debug, Default)]
pub struct LoginWindow {
    password: String,
    /// Show the password in clear text
    reveal: bool,
    close_requested: bool,
}

impl LoginWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn is_revealed(&self) -> bool {
        self.reveal
    }

    pub fn toggle_reveal(&mut self) {
        self.reveal = !self.reveal;
    }

    /// Login button handler. The password is not validated or logged.
    pub fn submit(&mut self) {
        if self.close_requested {
            return;
        }
        println!("{LOGIN_MESSAGE}");
        info!("Login requested, closing window");
        self.close_requested = true;
    }

    pub fn should_close(&self) -> bool {
        self.close_requested
    }
}

impl eframe::App for LoginWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(LOGIN_MARGIN))
            .show(ctx, |ui| {
                ui.spacing_mut().item_spacing.y = ITEM_SPACING;
                ui.add_space(LOGIN_ENTRY_TOP);

                ui.horizontal(|ui| {
                    let peek_label = if self.reveal { "Hide" } else { "Show" };
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.password)
                            .password(!self.reveal)
                            .hint_text("Password Entry")
                            .desired_width(ui.available_width() - PEEK_BUTTON_WIDTH - ITEM_SPACING),
                    );
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        self.submit();
                    }
                    if ui
                        .add_sized([PEEK_BUTTON_WIDTH, BUTTON_HEIGHT], egui::Button::new(peek_label))
                        .clicked()
                    {
                        self.toggle_reveal();
                    }
                });

                if ui
                    .add_sized([ui.available_width(), BUTTON_HEIGHT], egui::Button::new("Login"))
                    .clicked()
                {
                    self.submit();
                }
            });

        if self.close_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

pub fn run_login(config: &AppConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.login_window.as_array())
            .with_min_inner_size(config.login_window.as_array())
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    info!("Opening login window");
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(LoginWindow::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run login window: {}", e))?;

    Ok(())
}
