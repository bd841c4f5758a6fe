use async_trait::async_trait;
use serde::Deserialize;

use crate::config::constants::HISTORY_POINTS;
use crate::data::generate_history;
use crate::models::{HistoricalPoint, PredictionRecord, TickerSubscription};

#[cfg(not(target_arch = "wasm32"))]
use {crate::config::API, std::time::Duration};

/// Any failure of the prediction fetch: network, server-side, or a malformed
/// response. The message is rendered verbatim in the card's error view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    message: String,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Abstract interface to the external prediction collaborator.
///
/// `?Send` so one trait covers both executors: the wasm single-thread
/// spawner and the native block-on worker thread.
#[async_trait(?Send)]
pub trait PredictionApi {
    /// Fetch a prediction for one subscription key.
    async fn fetch_prediction(
        &self,
        ticker: &str,
        period: &str,
        interval: &str,
    ) -> Result<PredictionRecord, RequestError>;

    /// Synthetic history for the sparkline. Never fails.
    fn generate_history(&self, ticker: &str, count: usize) -> Vec<HistoricalPoint>;
}

/// Everything one card needs to enter its success view.
#[derive(Debug, Clone, PartialEq)]
pub struct CardData {
    pub prediction: PredictionRecord,
    pub history: Vec<HistoricalPoint>,
}

/// The card's load sequence: prediction first, then the 20-point history.
/// History is only generated after the prediction resolves, so a failed
/// prediction never produces a history series.
pub async fn load_card_data<C: PredictionApi>(
    client: &C,
    sub: &TickerSubscription,
) -> Result<CardData, RequestError> {
    let prediction = client
        .fetch_prediction(&sub.ticker, &sub.period, &sub.interval)
        .await?;
    let history = client.generate_history(&sub.ticker, HISTORY_POINTS);
    Ok(CardData { prediction, history })
}

/// Flask error contract: non-2xx bodies carry `{"error": "..."}`.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
}

#[derive(Clone)]
pub struct HttpPredictionClient {
    http: reqwest::Client,
    predict_url: String,
}

impl HttpPredictionClient {
    pub fn new(base_url: &str, predict_path: &str) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(API.client.timeout_ms))
            .build()
            .expect("failed to build HTTP client");

        // reqwest's wasm backend has no timeout builder; the browser owns it.
        #[cfg(target_arch = "wasm32")]
        let http = reqwest::Client::new();

        Self {
            http,
            predict_url: format!("{}{}", base_url.trim_end_matches('/'), predict_path),
        }
    }
}

#[async_trait(?Send)]
impl PredictionApi for HttpPredictionClient {
    async fn fetch_prediction(
        &self,
        ticker: &str,
        period: &str,
        interval: &str,
    ) -> Result<PredictionRecord, RequestError> {
        let response = self
            .http
            .get(&self.predict_url)
            .query(&[("ticker", ticker), ("period", period), ("interval", interval)])
            .send()
            .await
            .map_err(|e| RequestError::new(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("server returned {status}"));
            return Err(RequestError::new(message));
        }

        response
            .json::<PredictionRecord>()
            .await
            .map_err(|e| RequestError::new(e.to_string()))
    }

    fn generate_history(&self, ticker: &str, count: usize) -> Vec<HistoricalPoint> {
        generate_history(ticker, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every call so the prediction-then-history ordering is
    /// observable; `RefCell` is fine under the `?Send` trait.
    struct MockClient {
        fail_with: Option<String>,
        calls: RefCell<Vec<String>>,
    }

    impl MockClient {
        fn ok() -> Self {
            Self { fail_with: None, calls: RefCell::new(Vec::new()) }
        }

        fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl PredictionApi for MockClient {
        async fn fetch_prediction(
            &self,
            ticker: &str,
            period: &str,
            interval: &str,
        ) -> Result<PredictionRecord, RequestError> {
            self.calls
                .borrow_mut()
                .push(format!("prediction:{ticker}/{period}/{interval}"));
            match &self.fail_with {
                Some(message) => Err(RequestError::new(message.clone())),
                None => Ok(PredictionRecord {
                    ticker: Some(ticker.to_string()),
                    predicted_price: Some(150.25),
                    trend: Some("up".to_string()),
                }),
            }
        }

        fn generate_history(&self, ticker: &str, count: usize) -> Vec<HistoricalPoint> {
            self.calls.borrow_mut().push(format!("history:{ticker}/{count}"));
            generate_history(ticker, count)
        }
    }

    #[tokio::test]
    async fn success_fetches_prediction_then_20_point_history() {
        let client = MockClient::ok();
        let sub = TickerSubscription::new("AAPL", "1mo", "1d");

        let data = load_card_data(&client, &sub).await.unwrap();
        assert_eq!(data.prediction.predicted_price, Some(150.25));
        assert_eq!(data.history.len(), HISTORY_POINTS);
        assert_eq!(
            *client.calls.borrow(),
            vec!["prediction:AAPL/1mo/1d", "history:AAPL/20"]
        );
    }

    #[tokio::test]
    async fn failed_prediction_skips_the_history_fetch() {
        let client = MockClient::failing("network timeout");
        let sub = TickerSubscription::new("AAPL", "1mo", "1d");

        let err = load_card_data(&client, &sub).await.unwrap_err();
        assert_eq!(err.message(), "network timeout");
        assert_eq!(*client.calls.borrow(), vec!["prediction:AAPL/1mo/1d"]);
    }
}
