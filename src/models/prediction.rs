use serde::{Deserialize, Serialize};

/// Snapshot returned by the prediction API. Fields are optional because the
/// server omits them when the model produced nothing usable; the card renders
/// "N/A" / "Neutral" fallbacks instead of failing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub predicted_price: Option<f64>,
    #[serde(default)]
    pub trend: Option<String>,
}

impl PredictionRecord {
    pub fn direction(&self) -> TrendDirection {
        TrendDirection::from_label(self.trend.as_deref())
    }

    /// Pill text: the raw label when present, literal "Neutral" otherwise.
    pub fn trend_label(&self) -> &str {
        match self.trend.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => "Neutral",
        }
    }

    pub fn price_label(&self) -> String {
        match self.predicted_price {
            Some(price) => format!("${price:.2}"),
            None => "N/A".to_string(),
        }
    }
}

/// One close price; ordered sequences are most-recent-last and render-only.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub close: f64,
}

/// Visual category of a trend label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    #[default]
    Neutral,
}

impl TrendDirection {
    /// Case-insensitive mapping; anything outside {"up", "down"} (including
    /// a missing label) is Neutral.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_ascii_lowercase()).as_deref() {
            Some("up") => Self::Up,
            Some("down") => Self::Down,
            _ => Self::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_mapping_is_case_insensitive() {
        assert_eq!(TrendDirection::from_label(Some("UP")), TrendDirection::Up);
        assert_eq!(TrendDirection::from_label(Some("up")), TrendDirection::Up);
        assert_eq!(TrendDirection::from_label(Some("Down")), TrendDirection::Down);
        assert_eq!(TrendDirection::from_label(Some("dOwN")), TrendDirection::Down);
    }

    #[test]
    fn unknown_or_absent_labels_are_neutral() {
        assert_eq!(TrendDirection::from_label(Some("sideways")), TrendDirection::Neutral);
        assert_eq!(TrendDirection::from_label(Some("")), TrendDirection::Neutral);
        assert_eq!(TrendDirection::from_label(None), TrendDirection::Neutral);
    }

    #[test]
    fn pill_label_falls_back_to_neutral() {
        let rec = PredictionRecord::default();
        assert_eq!(rec.trend_label(), "Neutral");

        let rec = PredictionRecord {
            trend: Some("Up".to_string()),
            ..Default::default()
        };
        assert_eq!(rec.trend_label(), "Up");
    }

    #[test]
    fn deserializes_the_api_payload_with_and_without_fields() {
        let full: PredictionRecord = serde_json::from_str(
            r#"{"ticker":"AAPL","predicted_price":150.25,"trend":"up"}"#,
        )
        .unwrap();
        assert_eq!(full.predicted_price, Some(150.25));
        assert_eq!(full.direction(), TrendDirection::Up);

        // Server may omit fields entirely
        let sparse: PredictionRecord = serde_json::from_str(r#"{"ticker":"AAPL"}"#).unwrap();
        assert_eq!(sparse.predicted_price, None);
        assert_eq!(sparse.direction(), TrendDirection::Neutral);
    }

    #[test]
    fn price_label_formats_two_decimals_or_na() {
        let rec = PredictionRecord {
            predicted_price: Some(150.25),
            ..Default::default()
        };
        assert_eq!(rec.price_label(), "$150.25");
        assert_eq!(PredictionRecord::default().price_label(), "N/A");
    }
}
