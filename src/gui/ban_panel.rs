use eframe::egui;

use crate::{
    core::BanList,
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        theme::Theme,
    },
};

/// Ban list panel, insertion order top to bottom. Clicking an entry unbans
/// it.
pub struct BanPanel;

impl BanPanel {
    pub fn show(ctx: &egui::Context, theme: &Theme, bans: &BanList, queue: &mut ActionQueue) {
        egui::SidePanel::right("ban_list").default_width(210.0).show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(theme.heading("Ban List"));
            ui.label("Click a value to unban it.");
            ui.separator();

            if bans.is_empty() {
                ui.label("Nothing banned yet.");
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for value in bans.values() {
                    if ui.button(format!("{} ✕", value)).clicked() {
                        queue.push(UiAction::Unban(value.clone()));
                    }
                }
            });
        });
    }
}
