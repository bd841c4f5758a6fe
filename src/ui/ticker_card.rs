use std::sync::mpsc::{self, Receiver, Sender};

use chrono::{DateTime, Local};
use eframe::egui::{Align, Context, CornerRadius, Layout, RichText, Ui};

use crate::config::DF;
use crate::data::{CardData, HttpPredictionClient, RequestError, load_card_data};
use crate::models::{HistoricalPoint, PredictionRecord, TickerSubscription};
use crate::ui::sparkline::render_sparkline;
use crate::ui::styles::{DirectionColor, UiStyleExt, apply_opacity};
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::{ICON_ACTIVITY, ICON_CLOSE, ICON_WARNING, UI_TEXT};

/// Exactly one variant is active per card at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum CardViewState {
    Loading,
    Error(String),
    Success {
        prediction: PredictionRecord,
        history: Vec<HistoricalPoint>,
    },
}

/// Upward notification raised by a card; fire-and-forget, the card never
/// waits for an acknowledgement.
#[derive(Debug, Clone, PartialEq)]
pub enum CardAction {
    Remove(TickerSubscription),
}

struct FetchOutcome {
    generation: u64,
    result: Result<CardData, RequestError>,
}

/// One ticker subscription's fetch lifecycle and its card view.
///
/// The subscription triple is the sole trigger for a lifecycle restart:
/// `sync_subscription` compares the previous key against the current one
/// explicitly. Every fetch is tagged with a generation number; outcomes from
/// an abandoned generation are discarded so a late response can never
/// overwrite a newer fetch's state.
pub struct TickerCard {
    subscription: TickerSubscription,
    state: CardViewState,
    generation: u64,
    outcome_tx: Sender<FetchOutcome>,
    outcome_rx: Receiver<FetchOutcome>,
    last_updated: Option<DateTime<Local>>,
}

impl TickerCard {
    pub fn new(subscription: TickerSubscription, client: &HttpPredictionClient, ctx: &Context) -> Self {
        let mut card = Self::idle(subscription);
        card.spawn_current_fetch(client, ctx);
        card
    }

    /// A card that has entered `Loading` but not yet spawned its fetch.
    fn idle(subscription: TickerSubscription) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel();
        let mut card = Self {
            subscription,
            state: CardViewState::Loading,
            generation: 0,
            outcome_tx,
            outcome_rx,
            last_updated: None,
        };
        card.enter_loading();
        card
    }

    pub fn subscription(&self) -> &TickerSubscription {
        &self.subscription
    }

    pub fn state(&self) -> &CardViewState {
        &self.state
    }

    /// Restart the lifecycle iff the key actually changed.
    pub fn sync_subscription(
        &mut self,
        current: &TickerSubscription,
        client: &HttpPredictionClient,
        ctx: &Context,
    ) {
        if &self.subscription == current {
            return;
        }
        self.subscription = current.clone();
        self.enter_loading();
        self.spawn_current_fetch(client, ctx);
    }

    /// Clears any previously displayed error or prediction/history so a stale
    /// success view never lingers behind the spinner, and invalidates all
    /// in-flight fetches by bumping the generation.
    fn enter_loading(&mut self) {
        self.generation += 1;
        self.state = CardViewState::Loading;
        self.last_updated = None;
    }

    fn spawn_current_fetch(&self, client: &HttpPredictionClient, ctx: &Context) {
        spawn_fetch(
            client.clone(),
            self.subscription.clone(),
            self.generation,
            self.outcome_tx.clone(),
            ctx.clone(),
        );
    }

    /// Drain delivered outcomes; this is the single completion path, so the
    /// loading state cannot be left stuck once an outcome arrives.
    pub fn poll_fetch(&mut self) {
        loop {
            let outcome = match self.outcome_rx.try_recv() {
                Ok(outcome) => outcome,
                Err(_) => break,
            };

            if outcome.generation != self.generation {
                if DF.log_stale_drops {
                    log::debug!(
                        "{}: dropping stale fetch outcome (generation {} != {})",
                        self.subscription,
                        outcome.generation,
                        self.generation
                    );
                }
                continue;
            }

            self.state = match outcome.result {
                Ok(data) => {
                    if DF.log_fetch {
                        log::info!("{}: prediction loaded", self.subscription);
                    }
                    self.last_updated = Some(Local::now());
                    CardViewState::Success {
                        prediction: data.prediction,
                        history: data.history,
                    }
                }
                Err(err) => {
                    log::warn!("{}: prediction failed: {}", self.subscription, err);
                    CardViewState::Error(err.message().to_string())
                }
            };
        }
    }

    fn removal_action(&self) -> CardAction {
        CardAction::Remove(self.subscription.clone())
    }

    pub fn render(&mut self, ui: &mut Ui) -> Option<CardAction> {
        self.poll_fetch();

        let mut action = None;
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.set_width(crate::config::constants::layout::CARD_WIDTH);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&self.subscription.ticker)
                            .size(20.0)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.label_subdued(format!(
                        "{} • {}",
                        self.subscription.period, self.subscription.interval
                    ));
                });
                ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                    if ui
                        .button(RichText::new(ICON_CLOSE).color(UI_CONFIG.colors.muted))
                        .on_hover_text("Remove ticker")
                        .clicked()
                    {
                        action = Some(self.removal_action());
                    }
                });
            });
            ui.add_space(8.0);

            match self.state() {
                CardViewState::Loading => render_loading(ui),
                CardViewState::Error(message) => render_error(ui, message),
                CardViewState::Success { prediction, history } => {
                    render_success(ui, prediction, history, self.last_updated);
                }
            }
        });
        action
    }
}

fn render_loading(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.spinner();
        ui.add_space(6.0);
        ui.label_subdued(UI_TEXT.card_loading);
        ui.add_space(24.0);
    });
}

fn render_error(ui: &mut Ui, message: &str) {
    UI_CONFIG.error_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(ICON_WARNING).color(UI_CONFIG.colors.danger));
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(UI_TEXT.card_error_headline)
                        .strong()
                        .color(UI_CONFIG.colors.danger),
                );
                // The captured message, verbatim
                ui.label(
                    RichText::new(message)
                        .small()
                        .color(apply_opacity(UI_CONFIG.colors.danger, 0.8)),
                );
            });
        });
    });
}

fn render_success(
    ui: &mut Ui,
    prediction: &PredictionRecord,
    history: &[HistoricalPoint],
    last_updated: Option<DateTime<Local>>,
) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label_subdued(UI_TEXT.card_predicted_price);
            ui.label(
                RichText::new(prediction.price_label())
                    .size(UI_CONFIG.price_size)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
        });
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            trend_pill(ui, prediction);
        });
    });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label_subdued(format!("{ICON_ACTIVITY} {}", UI_TEXT.card_market_analysis));
    });
    render_sparkline(ui, history);

    ui.add_space(8.0);
    ui.separator();
    ui.horizontal(|ui| {
        if let Some(stamp) = last_updated {
            ui.label_subdued(format!(
                "{}: {}",
                UI_TEXT.card_last_updated,
                stamp.format("%H:%M:%S")
            ));
        }
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label_subdued(UI_TEXT.card_confidence);
        });
    });
}

fn trend_pill(ui: &mut Ui, prediction: &PredictionRecord) {
    let direction = prediction.direction();
    eframe::egui::Frame {
        fill: apply_opacity(direction.color(), 0.2),
        corner_radius: CornerRadius::same(12),
        inner_margin: eframe::egui::Margin::symmetric(10, 4),
        ..Default::default()
    }
    .show(ui, |ui| {
        ui.label(
            RichText::new(format!("{} {}", direction.icon(), prediction.trend_label()))
                .small()
                .strong()
                .color(direction.color()),
        );
    });
}

/// Runs the load sequence off the UI thread and posts the tagged outcome
/// back over the card's channel. Native spawns a worker thread with its own
/// current-thread runtime; wasm rides the browser microtask queue.
fn spawn_fetch(
    client: HttpPredictionClient,
    subscription: TickerSubscription,
    generation: u64,
    tx: Sender<FetchOutcome>,
    ctx: Context,
) {
    if DF.log_fetch {
        log::info!("{subscription}: spawning fetch #{generation}");
    }

    #[cfg(not(target_arch = "wasm32"))]
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("failed to create fetch runtime");
        rt.block_on(async move {
            let result = load_card_data(&client, &subscription).await;
            let _ = tx.send(FetchOutcome { generation, result });
            ctx.request_repaint();
        });
    });

    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(async move {
        let result = load_card_data(&client, &subscription).await;
        let _ = tx.send(FetchOutcome { generation, result });
        ctx.request_repaint();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::HISTORY_POINTS;
    use crate::data::generate_history;

    fn sub(ticker: &str, period: &str, interval: &str) -> TickerSubscription {
        TickerSubscription::new(ticker, period, interval)
    }

    fn success_outcome(generation: u64) -> FetchOutcome {
        FetchOutcome {
            generation,
            result: Ok(CardData {
                prediction: PredictionRecord {
                    ticker: Some("AAPL".to_string()),
                    predicted_price: Some(150.25),
                    trend: Some("up".to_string()),
                },
                history: generate_history("AAPL", HISTORY_POINTS),
            }),
        }
    }

    #[test]
    fn mounts_in_loading_state() {
        let card = TickerCard::idle(sub("AAPL", "1mo", "1d"));
        assert_eq!(*card.state(), CardViewState::Loading);
    }

    #[test]
    fn successful_outcome_transitions_to_success() {
        let mut card = TickerCard::idle(sub("AAPL", "1mo", "1d"));
        card.outcome_tx.send(success_outcome(card.generation)).unwrap();
        card.poll_fetch();

        match card.state() {
            CardViewState::Success { prediction, history } => {
                assert_eq!(prediction.price_label(), "$150.25");
                assert_eq!(prediction.direction(), crate::models::TrendDirection::Up);
                assert_eq!(history.len(), HISTORY_POINTS);
            }
            other => panic!("expected Success, got {other:?}"),
        }
        assert!(card.last_updated.is_some());
    }

    #[test]
    fn failed_outcome_carries_the_message_verbatim() {
        let mut card = TickerCard::idle(sub("AAPL", "1mo", "1d"));
        card.outcome_tx
            .send(FetchOutcome {
                generation: card.generation,
                result: Err(RequestError::new("network timeout")),
            })
            .unwrap();
        card.poll_fetch();

        assert_eq!(
            *card.state(),
            CardViewState::Error("network timeout".to_string())
        );
    }

    #[test]
    fn key_change_clears_state_and_reenters_loading() {
        let mut card = TickerCard::idle(sub("AAPL", "1mo", "1d"));
        card.outcome_tx.send(success_outcome(card.generation)).unwrap();
        card.poll_fetch();
        assert!(matches!(card.state(), CardViewState::Success { .. }));

        let client = HttpPredictionClient::new("http://127.0.0.1:9", "/predict");
        let ctx = Context::default();
        card.sync_subscription(&sub("AAPL", "1mo", "1wk"), &client, &ctx);

        // Cleared before the new fetch resolves
        assert_eq!(*card.state(), CardViewState::Loading);
        assert_eq!(card.subscription().interval, "1wk");
        assert!(card.last_updated.is_none());
    }

    #[test]
    fn unchanged_key_does_not_restart_the_lifecycle() {
        let mut card = TickerCard::idle(sub("AAPL", "1mo", "1d"));
        card.outcome_tx.send(success_outcome(card.generation)).unwrap();
        card.poll_fetch();
        let generation_before = card.generation;

        let client = HttpPredictionClient::new("http://127.0.0.1:9", "/predict");
        let ctx = Context::default();
        card.sync_subscription(&sub("AAPL", "1mo", "1d"), &client, &ctx);

        assert_eq!(card.generation, generation_before);
        assert!(matches!(card.state(), CardViewState::Success { .. }));
    }

    #[test]
    fn stale_generation_outcomes_are_discarded() {
        let mut card = TickerCard::idle(sub("AAPL", "1mo", "1d"));
        let old_generation = card.generation;
        card.enter_loading(); // simulates a key change while the old fetch is in flight

        card.outcome_tx.send(success_outcome(old_generation)).unwrap();
        card.poll_fetch();
        assert_eq!(*card.state(), CardViewState::Loading);

        // The live generation still lands
        card.outcome_tx.send(success_outcome(card.generation)).unwrap();
        card.poll_fetch();
        assert!(matches!(card.state(), CardViewState::Success { .. }));
    }

    #[test]
    fn late_stale_outcome_cannot_overwrite_a_resolved_fetch() {
        let mut card = TickerCard::idle(sub("AAPL", "1mo", "1d"));
        let old_generation = card.generation;
        card.enter_loading();

        card.outcome_tx
            .send(FetchOutcome {
                generation: card.generation,
                result: Err(RequestError::new("network timeout")),
            })
            .unwrap();
        card.outcome_tx.send(success_outcome(old_generation)).unwrap();
        card.poll_fetch();

        assert_eq!(
            *card.state(),
            CardViewState::Error("network timeout".to_string())
        );
    }

    #[test]
    fn removal_action_carries_the_exact_triple() {
        let card = TickerCard::idle(sub("TSLA", "6mo", "1d"));
        assert_eq!(
            card.removal_action(),
            CardAction::Remove(sub("TSLA", "6mo", "1d"))
        );
    }
}
