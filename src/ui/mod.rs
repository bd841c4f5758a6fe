mod faq;
mod footer;
mod header;
mod navigation;
mod sections;
mod sparkline;
mod styles;
mod ticker_card;
mod ui_config;
mod ui_text;

pub(crate) use faq::{FaqState, render_faq};
pub(crate) use footer::render_footer;
pub(crate) use header::render_header;
pub(crate) use navigation::NavigationTarget;
pub(crate) use sections::{AddTickerForm, render_features, render_get_started, render_hero};
pub(crate) use styles::setup_custom_visuals;
pub(crate) use ticker_card::{CardAction, TickerCard};
pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_text::UI_TEXT;
