use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::models::HistoricalPoint;

/// Synthetic price series for the sparkline, most-recent-last.
///
/// The walk is seeded from the ticker symbol so a card always redraws the
/// same shape for the same symbol. Non-throwing by contract: there is no
/// error path here and callers rely on that.
pub fn generate_history(ticker: &str, count: usize) -> Vec<HistoricalPoint> {
    let mut rng = StdRng::seed_from_u64(ticker_seed(ticker));

    // Base price anywhere in a plausible retail-stock range, then drift.
    let mut close: f64 = rng.gen_range(20.0..500.0);
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let drift: f64 = rng.gen_range(-0.03..0.03);
        close = (close * (1.0 + drift)).max(0.01);
        points.push(HistoricalPoint { close });
    }
    points
}

fn ticker_seed(ticker: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    ticker.trim().to_uppercase().hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_exactly_count_points() {
        assert_eq!(generate_history("AAPL", 20).len(), 20);
        assert_eq!(generate_history("AAPL", 0).len(), 0);
    }

    #[test]
    fn is_deterministic_per_ticker() {
        assert_eq!(generate_history("MSFT", 20), generate_history("MSFT", 20));
        // Symbol normalization feeds the seed too
        assert_eq!(generate_history("msft ", 20), generate_history("MSFT", 20));
    }

    #[test]
    fn different_tickers_produce_different_walks() {
        assert_ne!(generate_history("AAPL", 20), generate_history("TSLA", 20));
    }

    #[test]
    fn prices_stay_positive() {
        for point in generate_history("GME", 500) {
            assert!(point.close > 0.0);
        }
    }
}
