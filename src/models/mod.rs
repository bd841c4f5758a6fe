mod prediction;
mod subscription;

pub use prediction::{HistoricalPoint, PredictionRecord, TrendDirection};
pub use subscription::TickerSubscription;
