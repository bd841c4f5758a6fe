// Top Level Constants

/// Number of synthetic history points generated per card.
pub const HISTORY_POINTS: usize = 20;

/// The sparkline only ever shows the tail of the history.
pub const SPARKLINE_BARS: usize = 10;

pub mod sparkline {
    /// Shortest bar, in pixels.
    pub const BAR_MIN: f32 = 10.0;
    /// Extra height the highest close gets on top of BAR_MIN.
    pub const BAR_SPAN: f32 = 60.0;
    /// Height used for every bar of a flat (max == min) series.
    pub const BAR_FLAT: f32 = 35.0;
    /// Total height of the chart strip, bars sit on its baseline.
    pub const STRIP_HEIGHT: f32 = 80.0;
    pub const BAR_GAP: f32 = 3.0;
    pub const CORNER_RADIUS: u8 = 2;
}

pub mod form {
    /// Query windows the prediction API accepts.
    pub const PERIOD_OPTIONS: &[&str] = &["1mo", "3mo", "6mo", "1y", "2y", "5y"];
    /// Sampling granularity options.
    pub const INTERVAL_OPTIONS: &[&str] = &["1d", "1wk", "1mo"];

    pub const DEFAULT_PERIOD: &str = "1y";
    pub const DEFAULT_INTERVAL: &str = "1d";
    pub const MAX_TICKER_LEN: usize = 10;
}

pub mod layout {
    /// Max content width for the page body, mirrors the reference layout.
    pub const CONTENT_MAX_WIDTH: f32 = 900.0;
    pub const SECTION_SPACING: f32 = 48.0;
    pub const CARD_WIDTH: f32 = 320.0;
}
