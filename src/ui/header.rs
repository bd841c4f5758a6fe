use eframe::egui::{Align, Button, Context, Layout, RichText, TopBottomPanel};

use crate::ui::navigation::NavigationTarget;
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::{GITHUB_URL, UI_TEXT};

/// Sticky header: brand, section nav, GitHub link, and the Add Ticker call
/// to action. Returns the scroll intent the user dispatched, if any.
pub fn render_header(ctx: &Context) -> Option<NavigationTarget> {
    let mut target = None;

    TopBottomPanel::top("header")
        .frame(UI_CONFIG.header_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(UI_TEXT.brand)
                        .size(20.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.add_space(24.0);

                for (label, nav) in [
                    (UI_TEXT.nav_home, NavigationTarget::Home),
                    (UI_TEXT.nav_features, NavigationTarget::Features),
                    (UI_TEXT.nav_get_started, NavigationTarget::GetStarted),
                    (UI_TEXT.nav_faq, NavigationTarget::Faq),
                ] {
                    if ui.link(RichText::new(label).color(UI_CONFIG.colors.label)).clicked() {
                        target = Some(nav);
                    }
                }
                ui.hyperlink_to(UI_TEXT.nav_github, GITHUB_URL);

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let add = Button::new(
                        RichText::new(UI_TEXT.btn_add_ticker).color(UI_CONFIG.colors.heading),
                    )
                    .fill(UI_CONFIG.colors.accent);
                    if ui.add(add).clicked() {
                        target = Some(NavigationTarget::GetStarted);
                    }
                });
            });
        });

    target
}
