use eframe::egui;

use crate::gui::theme::Theme;

pub struct ErrorModal {
    open: bool,
    title: String,
    message: String,
    details: Option<String>,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self { open: false, title: String::new(), message: String::new(), details: None }
    }

    pub fn show_error(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        details: Option<impl Into<String>>,
    ) {
        self.title = title.into();
        self.message = message.into();
        self.details = details.map(|d| d.into());
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        if !self.open {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
            ui.set_width(400.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(22.0).color(theme.red()));
                ui.label(egui::RichText::new(&self.title).size(17.0).strong());
            });

            ui.add_space(8.0);
            ui.label(&self.message);

            if let Some(details) = &self.details {
                ui.add_space(8.0);
                ui.collapsing("Details", |ui| {
                    ui.label(details);
                });
            }

            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
            self.details = None;
        }
    }
}

impl Default for ErrorModal {
    fn default() -> Self {
        Self::new()
    }
}
