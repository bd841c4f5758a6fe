use eframe::egui::{RichText, Ui};

use crate::ui::navigation::NavigationTarget;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::{GITHUB_URL, UI_TEXT};

/// Footer strip at the end of the scrolling page. Quick links dispatch the
/// same scroll intents as the header nav.
pub fn render_footer(ui: &mut Ui) -> Option<NavigationTarget> {
    let mut target = None;

    UI_CONFIG.footer_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_wrapped(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(UI_TEXT.brand)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.label_subdued(UI_TEXT.footer_blurb);
            });

            ui.add_space(48.0);
            ui.vertical(|ui| {
                ui.label_heading(UI_TEXT.footer_quick_links);
                for (label, nav) in [
                    (UI_TEXT.nav_home, NavigationTarget::Home),
                    (UI_TEXT.nav_features, NavigationTarget::Features),
                    (UI_TEXT.nav_get_started, NavigationTarget::GetStarted),
                    (UI_TEXT.nav_faq, NavigationTarget::Faq),
                ] {
                    if ui.link(RichText::new(label).small().color(UI_CONFIG.colors.muted)).clicked() {
                        target = Some(nav);
                    }
                }
                ui.hyperlink_to(RichText::new(UI_TEXT.nav_github).small(), GITHUB_URL);
            });
        });

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.label_subdued(UI_TEXT.footer_copyright);
            ui.label_subdued(UI_TEXT.footer_disclaimer);
        });
    });

    target
}
