use eframe::egui;

use crate::{
    core::{
        attributes,
        AttributeKind,
        BanList,
        Session,
    },
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        theme::Theme,
    },
};

const IMAGE_MAX_SIZE: egui::Vec2 = egui::Vec2::new(480.0, 360.0);

/// Central view: the fetch button, the current cat's image, and one
/// ban-toggle button per checkable attribute.
pub struct CatView;

impl CatView {
    pub fn show(
        ctx: &egui::Context,
        theme: &Theme,
        session: &Session,
        bans: &BanList,
        status: Option<&str>,
        queue: &mut ActionQueue,
    ) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(theme.heading("Cat Finder"));
                ui.add_space(8.0);

                let fetching = session.is_fetching();
                let label = if fetching { "Loading..." } else { "Get Cat Image" };

                if ui.add_enabled(!fetching, egui::Button::new(label)).clicked() {
                    queue.push(UiAction::RequestCat);
                }

                if fetching {
                    ui.add_space(4.0);
                    ui.add(egui::Spinner::new());
                }

                if let Some(status) = status {
                    ui.add_space(4.0);
                    ui.colored_label(theme.orange(), status);
                }

                let Some(cat) = session.current_or_latest() else {
                    ui.add_space(16.0);
                    ui.label("No cats fetched yet.");
                    return;
                };

                ui.add_space(12.0);
                ui.add(egui::Image::from_uri(&cat.image_url).max_size(IMAGE_MAX_SIZE));

                ui.add_space(8.0);
                ui.horizontal_wrapped(|ui| {
                    for kind in AttributeKind::CHECKABLE {
                        let value = attributes::extract(cat, kind);
                        let text = format!("{}: {}", kind.label(), value);

                        // Banned values stay visible, highlighted; another
                        // click unbans them.
                        let label = if bans.is_banned(&value) {
                            theme.bold(&text)
                        } else {
                            egui::RichText::new(text)
                        };

                        if ui.button(label).on_hover_text("Click to ban or unban").clicked() {
                            queue.push(UiAction::ToggleBan(value));
                        }
                    }
                });

                ui.add_space(4.0);
                ui.label(format!(
                    "Description: {}",
                    attributes::extract(cat, AttributeKind::Description)
                ));
            });
        });
    }
}
