use eframe::egui::{Color32, Context, RichText, Ui, Visuals};

use crate::models::TrendDirection;
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::{ICON_TREND_DOWN, ICON_TREND_FLAT, ICON_TREND_UP};

pub trait DirectionColor {
    fn color(&self) -> Color32;
    fn icon(&self) -> &'static str;
}

impl DirectionColor for TrendDirection {
    fn color(&self) -> Color32 {
        match self {
            Self::Up => UI_CONFIG.colors.success,
            Self::Down => UI_CONFIG.colors.danger,
            Self::Neutral => UI_CONFIG.colors.neutral,
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::Up => ICON_TREND_UP,
            Self::Down => ICON_TREND_DOWN,
            Self::Neutral => ICON_TREND_FLAT,
        }
    }
}

pub fn apply_opacity(color: Color32, factor: f32) -> Color32 {
    color.linear_multiply(factor)
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn label_heading(&mut self, text: impl Into<String>);
    fn section_heading(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.muted));
    }

    fn label_heading(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
    }

    fn section_heading(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .size(UI_CONFIG.heading_size)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
    }
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.page;
    visuals.panel_fill = UI_CONFIG.colors.panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.hyperlink_color = UI_CONFIG.colors.accent;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
