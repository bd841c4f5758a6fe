use eframe::egui::{
    Align, Button, ComboBox, CornerRadius, Frame, Layout, Margin, RichText, Stroke, TextEdit, Ui,
};
use serde::{Deserialize, Serialize};

use crate::config::constants::form;
use crate::models::TickerSubscription;
use crate::ui::navigation::NavigationTarget;
use crate::ui::styles::{UiStyleExt, apply_opacity};
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::{FEATURES, GITHUB_URL, STEPS, UI_TEXT};

pub fn render_hero(ui: &mut Ui) -> Option<NavigationTarget> {
    let mut target = None;

    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(
            RichText::new(UI_TEXT.hero_title)
                .size(UI_CONFIG.hero_title_size)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.add_space(8.0);
        ui.label(RichText::new(UI_TEXT.hero_tagline).color(UI_CONFIG.colors.muted));
        ui.add_space(20.0);

        ui.horizontal(|ui| {
            // Center the action row by padding half the leftover width
            let actions_width = 260.0;
            ui.add_space((ui.available_width() - actions_width).max(0.0) / 2.0);

            let cta = Button::new(
                RichText::new(UI_TEXT.btn_get_started)
                    .size(16.0)
                    .color(UI_CONFIG.colors.heading),
            )
            .fill(UI_CONFIG.colors.accent)
            .corner_radius(CornerRadius::same(6));
            if ui.add(cta).clicked() {
                target = Some(NavigationTarget::GetStarted);
            }
            ui.add_space(8.0);
            ui.hyperlink_to(UI_TEXT.link_view_github, GITHUB_URL);
        });
        ui.add_space(48.0);
    });

    target
}

pub fn render_features(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.section_heading(UI_TEXT.features_heading);
    });
    ui.add_space(20.0);

    let tile_width =
        (ui.available_width() / FEATURES.len() as f32 - 12.0).clamp(160.0, 260.0);
    ui.horizontal_wrapped(|ui| {
        for feature in FEATURES {
            Frame {
                fill: UI_CONFIG.colors.card,
                stroke: Stroke::new(1.0, UI_CONFIG.colors.card_border),
                corner_radius: CornerRadius::same(8),
                inner_margin: Margin::same(14),
                ..Default::default()
            }
            .show(ui, |ui| {
                ui.set_width(tile_width);
                ui.vertical_centered(|ui| {
                    ui.label_heading(feature.title);
                    ui.add_space(4.0);
                    ui.label_subdued(feature.desc);
                });
            });
        }
    });
}

/// The add-ticker form inside the get-started section. The notice surfaces
/// duplicate-subscription rejections inline.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AddTickerForm {
    pub ticker: String,
    pub period: String,
    pub interval: String,
    #[serde(skip)]
    pub notice: Option<String>,
}

impl Default for AddTickerForm {
    fn default() -> Self {
        Self {
            ticker: String::new(),
            period: form::DEFAULT_PERIOD.to_string(),
            interval: form::DEFAULT_INTERVAL.to_string(),
            notice: None,
        }
    }
}

impl AddTickerForm {
    fn subscription(&self) -> TickerSubscription {
        TickerSubscription::new(self.ticker.clone(), self.period.clone(), self.interval.clone())
    }
}

/// Numbered steps plus the form. Returns a candidate subscription when the
/// user submits; the caller owns the duplicate check.
pub fn render_get_started(ui: &mut Ui, form_state: &mut AddTickerForm) -> Option<TickerSubscription> {
    let mut submitted = None;

    ui.vertical_centered(|ui| {
        ui.section_heading(UI_TEXT.steps_heading);
    });
    ui.add_space(20.0);

    ui.horizontal_wrapped(|ui| {
        for (number, step) in STEPS.iter().enumerate() {
            Frame {
                fill: UI_CONFIG.colors.accent,
                corner_radius: CornerRadius::same(14),
                inner_margin: Margin::symmetric(10, 4),
                ..Default::default()
            }
            .show(ui, |ui| {
                ui.label(
                    RichText::new(format!("{}", number + 1))
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
            });
            ui.vertical(|ui| {
                ui.set_max_width(200.0);
                ui.label_heading(step.title);
                ui.label_subdued(step.desc);
            });
            ui.add_space(16.0);
        }
    });

    ui.add_space(24.0);
    ui.horizontal(|ui| {
        let ticker_edit = TextEdit::singleline(&mut form_state.ticker)
            .hint_text(UI_TEXT.form_ticker_hint)
            .char_limit(form::MAX_TICKER_LEN)
            .desired_width(120.0);
        ui.add(ticker_edit);

        ui.label_subdued(UI_TEXT.form_period_label);
        ComboBox::from_id_salt("period_select")
            .selected_text(form_state.period.clone())
            .show_ui(ui, |ui| {
                for option in form::PERIOD_OPTIONS {
                    ui.selectable_value(&mut form_state.period, option.to_string(), *option);
                }
            });

        ui.label_subdued(UI_TEXT.form_interval_label);
        ComboBox::from_id_salt("interval_select")
            .selected_text(form_state.interval.clone())
            .show_ui(ui, |ui| {
                for option in form::INTERVAL_OPTIONS {
                    ui.selectable_value(&mut form_state.interval, option.to_string(), *option);
                }
            });

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let can_submit = !form_state.ticker.trim().is_empty();
            let submit = Button::new(
                RichText::new(UI_TEXT.btn_start_tracking).color(UI_CONFIG.colors.heading),
            )
            .fill(if can_submit {
                UI_CONFIG.colors.accent
            } else {
                apply_opacity(UI_CONFIG.colors.accent, 0.4)
            });
            if ui.add_enabled(can_submit, submit).clicked() {
                submitted = Some(form_state.subscription());
            }
        });
    });

    if let Some(notice) = &form_state.notice {
        ui.add_space(6.0);
        ui.label(RichText::new(notice).small().color(UI_CONFIG.colors.danger));
    }

    submitted
}
