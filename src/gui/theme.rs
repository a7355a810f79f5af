use eframe::egui::{
    self,
    Color32,
    RichText,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    pub fn dracula() -> Self {
        Theme { dark: ThemeDetails::dracula(), light: ThemeDetails::dracula_light() }
    }

    pub fn heading(&self, content: &str) -> RichText {
        RichText::new(content).color(self.dark.purple)
    }

    pub fn bold(&self, content: &str) -> RichText {
        RichText::new(content).color(self.dark.orange)
    }

    pub fn red(&self) -> Color32 {
        self.dark.red
    }

    pub fn orange(&self) -> Color32 {
        self.dark.orange
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    panel: Color32,
    foreground: Color32,
    selection: Color32,
    red: Color32,
    orange: Color32,
    purple: Color32,
    cyan: Color32,
}

impl ThemeDetails {
    // Dracula palette, https://draculatheme.com/contribute
    fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            panel: Color32::from_rgb(33, 35, 53),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(139, 233, 253),
        }
    }

    fn dracula_light() -> Self {
        Self {
            background: Color32::from_rgb(248, 248, 242),
            panel: Color32::from_rgb(235, 235, 230),
            foreground: Color32::from_rgb(40, 42, 54),
            selection: Color32::from_rgb(200, 200, 220),
            red: Color32::from_rgb(200, 80, 80),
            orange: Color32::from_rgb(220, 150, 90),
            purple: Color32::from_rgb(150, 120, 220),
            cyan: Color32::from_rgb(80, 190, 230),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, details: &ThemeDetails, is_dark: bool) {
    let (mut visuals, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    visuals.window_fill = details.background;
    visuals.panel_fill = details.panel;
    visuals.selection.bg_fill = details.selection;
    visuals.hyperlink_color = details.cyan;
    visuals.error_fg_color = details.red;
    visuals.warn_fg_color = details.orange;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, details.foreground);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, details.foreground);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, details.cyan);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, details.cyan);

    ctx.set_visuals_of(variant, visuals);
}
