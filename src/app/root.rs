use {
    eframe::{
        Frame, Storage,
        egui::{Align, CentralPanel, Context, Response, ScrollArea, Ui},
    },
    serde::{Deserialize, Serialize},
};

use crate::{
    Cli,
    config::{API, DF, constants::layout},
    data::HttpPredictionClient,
    models::TickerSubscription,
    ui::{
        AddTickerForm, CardAction, FaqState, NavigationTarget, TickerCard, UI_TEXT, render_faq,
        render_features, render_footer, render_get_started, render_header, render_hero,
        setup_custom_visuals,
    },
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    /// Source of truth for which cards exist; persists across sessions.
    watchlist: Vec<TickerSubscription>,
    add_form: AddTickerForm,
    #[serde(skip)]
    cards: Vec<TickerCard>,
    #[serde(skip)]
    faq: FaqState,
    #[serde(skip)]
    scroll_target: Option<NavigationTarget>,
    #[serde(skip)]
    client: Option<HttpPredictionClient>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            watchlist: Vec::new(),
            add_form: AddTickerForm::default(),
            cards: Vec::new(),
            faq: FaqState::default(),
            scroll_target: None,
            client: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        let base_url = args.api_url.as_deref().unwrap_or(API.base_url);
        log::info!("prediction API at {base_url}");
        app.client = Some(HttpPredictionClient::new(base_url, API.predict_path));
        app
    }

    fn dispatch_nav(&mut self, target: Option<NavigationTarget>) {
        if let Some(target) = target {
            if DF.log_navigation {
                log::info!("scroll intent: {target:?}");
            }
            self.scroll_target = Some(target);
        }
    }

    /// Reconciles live cards against the watchlist. The subscription key is
    /// the sole trigger for a card's lifecycle restart; everything else is
    /// append/remove.
    fn sync_cards(&mut self, ctx: &Context) {
        let Some(client) = &self.client else { return };

        for (index, sub) in self.watchlist.iter().enumerate() {
            match self.cards.get_mut(index) {
                Some(card) => card.sync_subscription(sub, client, ctx),
                None => self.cards.push(TickerCard::new(sub.clone(), client, ctx)),
            }
        }
        self.cards.truncate(self.watchlist.len());
    }

    fn add_subscription(&mut self, candidate: TickerSubscription) {
        if candidate.ticker.is_empty() {
            return;
        }
        if self.watchlist.contains(&candidate) {
            self.add_form.notice = Some(UI_TEXT.form_duplicate_notice.to_string());
            return;
        }
        if DF.log_watchlist {
            log::info!("tracking {candidate}");
        }
        self.add_form.notice = None;
        self.add_form.ticker.clear();
        self.watchlist.push(candidate);
    }

    fn apply_card_action(&mut self, action: CardAction) {
        match action {
            CardAction::Remove(sub) => {
                if DF.log_watchlist {
                    log::info!("untracking {sub}");
                }
                // Same index leaves the watchlist and the card list, so the
                // positional reconcile in sync_cards never restarts survivors.
                self.watchlist.retain(|s| s != &sub);
                self.cards.retain(|c| c.subscription() != &sub);
            }
        }
    }

    fn render_page(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.set_max_width(layout::CONTENT_MAX_WIDTH);

            let hero = ui.scope(|ui| render_hero(ui));
            self.dispatch_nav(hero.inner);
            self.scroll_if_targeted(NavigationTarget::Home, &hero.response);
            ui.add_space(layout::SECTION_SPACING);

            let features = ui.scope(|ui| render_features(ui));
            self.scroll_if_targeted(NavigationTarget::Features, &features.response);
            ui.add_space(layout::SECTION_SPACING);

            let get_started = ui.scope(|ui| {
                let submitted = render_get_started(ui, &mut self.add_form);
                ui.add_space(24.0);
                let action = self.render_watchlist(ui);
                (submitted, action)
            });
            self.scroll_if_targeted(NavigationTarget::GetStarted, &get_started.response);
            let (submitted, action) = get_started.inner;
            if let Some(candidate) = submitted {
                self.add_subscription(candidate);
            }
            if let Some(action) = action {
                self.apply_card_action(action);
            }
            ui.add_space(layout::SECTION_SPACING);

            let faq = ui.scope(|ui| render_faq(ui, &mut self.faq));
            self.scroll_if_targeted(NavigationTarget::Faq, &faq.response);
            ui.add_space(layout::SECTION_SPACING);
        });

        let footer_nav = render_footer(ui);
        self.dispatch_nav(footer_nav);
    }

    fn render_watchlist(&mut self, ui: &mut Ui) -> Option<CardAction> {
        use crate::ui::UI_CONFIG;
        use eframe::egui::RichText;

        ui.label(
            RichText::new(UI_TEXT.watchlist_heading)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.add_space(8.0);

        if self.cards.is_empty() {
            ui.label(RichText::new(UI_TEXT.watchlist_empty).color(UI_CONFIG.colors.muted));
            return None;
        }

        let mut action = None;
        ui.horizontal_wrapped(|ui| {
            for card in &mut self.cards {
                if let Some(card_action) = card.render(ui) {
                    action = Some(card_action);
                }
                ui.add_space(8.0);
            }
        });
        action
    }

    fn scroll_if_targeted(&mut self, target: NavigationTarget, response: &Response) {
        if self.scroll_target == Some(target) {
            response.scroll_to_me(Some(Align::Min));
            self.scroll_target = None;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        let header_nav = render_header(ctx);
        self.dispatch_nav(header_nav);
        self.sync_cards(ctx);

        CentralPanel::default()
            .frame(crate::ui::UI_CONFIG.page_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink(false)
                    .show(ui, |ui| self.render_page(ui));
            });
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::CardAction;

    fn sub(ticker: &str, period: &str, interval: &str) -> TickerSubscription {
        TickerSubscription::new(ticker, period, interval)
    }

    #[test]
    fn duplicate_triples_are_rejected_with_a_notice() {
        let mut app = App::default();
        app.add_subscription(sub("AAPL", "1mo", "1d"));
        app.add_subscription(sub("AAPL", "1mo", "1d"));

        assert_eq!(app.watchlist.len(), 1);
        assert!(app.add_form.notice.is_some());
    }

    #[test]
    fn same_ticker_with_a_different_key_is_not_a_duplicate() {
        let mut app = App::default();
        app.add_subscription(sub("AAPL", "1mo", "1d"));
        app.add_subscription(sub("AAPL", "1mo", "1wk"));

        assert_eq!(app.watchlist.len(), 2);
        assert!(app.add_form.notice.is_none());
    }

    #[test]
    fn successful_add_clears_a_stale_notice_and_the_input() {
        let mut app = App::default();
        app.add_subscription(sub("AAPL", "1mo", "1d"));
        app.add_subscription(sub("AAPL", "1mo", "1d"));
        assert!(app.add_form.notice.is_some());

        app.add_form.ticker = "TSLA".to_string();
        app.add_subscription(sub("TSLA", "6mo", "1d"));
        assert!(app.add_form.notice.is_none());
        assert!(app.add_form.ticker.is_empty());
    }

    #[test]
    fn empty_ticker_is_ignored() {
        let mut app = App::default();
        app.add_subscription(sub("", "1mo", "1d"));
        assert!(app.watchlist.is_empty());
    }

    #[test]
    fn removal_drops_only_the_matching_triple() {
        let mut app = App::default();
        app.add_subscription(sub("TSLA", "6mo", "1d"));
        app.add_subscription(sub("AAPL", "1mo", "1d"));

        app.apply_card_action(CardAction::Remove(sub("TSLA", "6mo", "1d")));
        assert_eq!(app.watchlist, vec![sub("AAPL", "1mo", "1d")]);
    }

    #[test]
    fn sync_cards_tracks_the_watchlist() {
        let mut app = App::default();
        app.client = Some(HttpPredictionClient::new("http://127.0.0.1:9", "/predict"));
        let ctx = Context::default();

        app.add_subscription(sub("AAPL", "1mo", "1d"));
        app.add_subscription(sub("TSLA", "6mo", "1d"));
        app.sync_cards(&ctx);
        assert_eq!(app.cards.len(), 2);

        app.apply_card_action(CardAction::Remove(sub("AAPL", "1mo", "1d")));
        app.sync_cards(&ctx);
        assert_eq!(app.cards.len(), 1);
        assert_eq!(app.cards[0].subscription(), &sub("TSLA", "6mo", "1d"));
    }
}
