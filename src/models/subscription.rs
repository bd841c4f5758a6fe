use serde::{Deserialize, Serialize};
use std::fmt;

/// One tracked query: the `(ticker, period, interval)` triple is the identity
/// used both as the fetch key and as the removal key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickerSubscription {
    pub ticker: String,
    pub period: String,
    pub interval: String,
}

impl TickerSubscription {
    pub fn new(ticker: impl Into<String>, period: impl Into<String>, interval: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into().trim().to_uppercase(),
            period: period.into(),
            interval: interval.into(),
        }
    }
}

impl fmt::Display for TickerSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} / {})", self.ticker, self.period, self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_ticker_symbol() {
        let sub = TickerSubscription::new("  aapl ", "1mo", "1d");
        assert_eq!(sub.ticker, "AAPL");
    }

    #[test]
    fn identity_is_the_full_triple() {
        let a = TickerSubscription::new("TSLA", "6mo", "1d");
        let b = TickerSubscription::new("TSLA", "6mo", "1d");
        let c = TickerSubscription::new("TSLA", "6mo", "1wk");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
