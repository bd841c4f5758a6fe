use eframe::egui::{Align, Layout, RichText, Sense, Ui, UiBuilder};

use crate::ui::styles::UiStyleExt;
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::{FAQS, ICON_CHEVRON_CLOSED, ICON_CHEVRON_OPEN, UI_TEXT};

/// Single-select accordion: at most one entry is open at a time.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqState {
    open: Option<usize>,
}

impl FaqState {
    /// Activating the open entry closes it; activating a different entry
    /// closes the previous one and opens the new one.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

pub fn render_faq(ui: &mut Ui, state: &mut FaqState) {
    ui.vertical_centered(|ui| {
        ui.section_heading(UI_TEXT.faq_heading);
    });
    ui.add_space(16.0);

    for (index, entry) in FAQS.iter().enumerate() {
        let open = state.is_open(index);
        let chevron = if open { ICON_CHEVRON_OPEN } else { ICON_CHEVRON_CLOSED };

        let row = ui
            .scope_builder(UiBuilder::new().sense(Sense::click()), |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(entry.question)
                            .strong()
                            .color(UI_CONFIG.colors.label),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(RichText::new(chevron).color(UI_CONFIG.colors.muted));
                    });
                });
            })
            .response;

        if row.clicked() {
            state.toggle(index);
        }

        // Collapsed entries lay out nothing: zero height, no placeholder.
        if state.is_open(index) {
            ui.add_space(4.0);
            ui.label_subdued(entry.answer);
        }
        ui.add_space(6.0);
        ui.separator();
        ui.add_space(6.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_fully_collapsed() {
        let state = FaqState::default();
        for index in 0..FAQS.len() {
            assert!(!state.is_open(index));
        }
    }

    #[test]
    fn toggling_the_open_entry_closes_it() {
        let mut state = FaqState::default();
        state.toggle(2);
        assert!(state.is_open(2));
        state.toggle(2);
        assert!(!state.is_open(2));
    }

    #[test]
    fn at_most_one_entry_is_open() {
        let mut state = FaqState::default();
        state.toggle(0);
        state.toggle(3);
        assert!(!state.is_open(0));
        assert!(state.is_open(3));
    }
}
