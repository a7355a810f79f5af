use eframe::egui;

use crate::{
    core::Session,
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        theme::Theme,
    },
};

const THUMBNAIL_SIZE: egui::Vec2 = egui::Vec2::new(150.0, 100.0);

/// "Cats Seen" panel: one thumbnail per accepted cat, newest last. Clicking
/// a thumbnail brings that cat back to the main view.
pub struct HistoryPanel;

impl HistoryPanel {
    pub fn show(ctx: &egui::Context, theme: &Theme, session: &Session, queue: &mut ActionQueue) {
        egui::SidePanel::left("cats_seen").default_width(190.0).show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(theme.heading("Cats Seen"));
            ui.label(format!("{} accepted this session", session.cats().len()));
            ui.add_space(4.0);

            if ui.button("Clear List").clicked() {
                queue.push(UiAction::ClearHistory);
            }

            ui.separator();

            let current_id = session.current_or_latest().map(|cat| cat.id.as_str());

            egui::ScrollArea::vertical().show(ui, |ui| {
                for cat in session.cats() {
                    let image =
                        egui::Image::from_uri(&cat.image_url).fit_to_exact_size(THUMBNAIL_SIZE);
                    let selected = current_id == Some(cat.id.as_str());

                    if ui.add(egui::ImageButton::new(image).selected(selected)).clicked() {
                        queue.push(UiAction::SelectCat(cat.id.clone()));
                    }

                    ui.add_space(4.0);
                }
            });
        });
    }
}
