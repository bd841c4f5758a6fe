// Icons come from egui's built-in emoji/icon fonts so no font bundling is needed.
pub const ICON_TREND_UP: &str = "⬆";
pub const ICON_TREND_DOWN: &str = "⬇";
pub const ICON_TREND_FLAT: &str = "➖";
pub const ICON_CLOSE: &str = "✖";
pub const ICON_WARNING: &str = "⚠";
pub const ICON_CHEVRON_OPEN: &str = "⏶";
pub const ICON_CHEVRON_CLOSED: &str = "⏷";
pub const ICON_ACTIVITY: &str = "📈";

pub struct UiText {
    pub brand: &'static str,

    // --- Header / navigation ---
    pub nav_home: &'static str,
    pub nav_features: &'static str,
    pub nav_get_started: &'static str,
    pub nav_faq: &'static str,
    pub nav_github: &'static str,
    pub btn_add_ticker: &'static str,

    // --- Hero ---
    pub hero_title: &'static str,
    pub hero_tagline: &'static str,
    pub btn_get_started: &'static str,
    pub link_view_github: &'static str,

    // --- Sections ---
    pub features_heading: &'static str,
    pub steps_heading: &'static str,
    pub btn_start_tracking: &'static str,
    pub faq_heading: &'static str,
    pub watchlist_heading: &'static str,
    pub watchlist_empty: &'static str,

    // --- Add-ticker form ---
    pub form_ticker_hint: &'static str,
    pub form_period_label: &'static str,
    pub form_interval_label: &'static str,
    pub form_duplicate_notice: &'static str,

    // --- Ticker card ---
    pub card_loading: &'static str,
    pub card_error_headline: &'static str,
    pub card_predicted_price: &'static str,
    pub card_market_analysis: &'static str,
    pub card_last_updated: &'static str,
    pub card_confidence: &'static str,
    pub card_trend_fallback: &'static str,

    // --- Footer ---
    pub footer_blurb: &'static str,
    pub footer_quick_links: &'static str,
    pub footer_copyright: &'static str,
    pub footer_disclaimer: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    brand: "StockSight",

    nav_home: "Home",
    nav_features: "Features",
    nav_get_started: "Get Started",
    nav_faq: "FAQ",
    nav_github: "GitHub",
    btn_add_ticker: "Add Ticker",

    hero_title: "Predict Tomorrow's Stock Moves, Today",
    hero_tagline: "AI-powered buy/hold/sell signals — no jargon, just clear guidance.",
    btn_get_started: "Get Started",
    link_view_github: "View on GitHub",

    features_heading: "Why StockSight?",
    steps_heading: "How to Get Started",
    btn_start_tracking: "Start Tracking Stocks",
    faq_heading: "Frequently Asked Questions",
    watchlist_heading: "Your Watchlist",
    watchlist_empty: "No tickers yet. Add one above to see a live prediction card.",

    form_ticker_hint: "e.g. AAPL",
    form_period_label: "Period",
    form_interval_label: "Interval",
    form_duplicate_notice: "That ticker / period / interval combination is already tracked.",

    card_loading: "Analyzing market trends...",
    card_error_headline: "Prediction Failed",
    card_predicted_price: "Predicted Price",
    card_market_analysis: "Market Analysis",
    card_last_updated: "Last updated",
    card_confidence: "AI Confidence: High",
    card_trend_fallback: "Neutral",

    footer_blurb: "Making stock predictions accessible and understandable for everyone.",
    footer_quick_links: "Quick Links",
    footer_copyright: "© 2025 StockSight. All rights reserved.",
    footer_disclaimer: "Disclaimer: StockSight is an educational tool, not financial advice. All trading decisions are your own responsibility.",
};

pub const GITHUB_URL: &str = "https://github.com/your-username/stock-sight-api";

pub struct Feature {
    pub title: &'static str,
    pub desc: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Real-Time Quotes",
        desc: "Daily closing prices & volumes pulled straight from public finance APIs.",
    },
    Feature {
        title: "AI-Driven Predictions",
        desc: "Our ML model analyzes the last 20 days of data to forecast tomorrow's close.",
    },
    Feature {
        title: "Simple Signals",
        desc: "Green = Buy, Gray = Hold, Red = Sell — decision-making made easy.",
    },
    Feature {
        title: "Zero Setup",
        desc: "No signup, no fees. Just add tickers and start tracking instantly.",
    },
];

pub struct Step {
    pub title: &'static str,
    pub desc: &'static str,
}

pub const STEPS: &[Step] = &[
    Step {
        title: "Add Your Ticker",
        desc: "Enter your stock symbol and pick a period & interval.",
    },
    Step {
        title: "View Predictions",
        desc: "See today's close price alongside our next-day forecast and trend indicator.",
    },
    Step {
        title: "Act Confidently",
        desc: "Use the Buy/Hold/Sell signal to guide your trading decisions.",
    },
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Is StockSight really free?",
        answer: "Yes — StockSight is 100% free. No sign-up, no hidden fees.",
    },
    FaqEntry {
        question: "Where does the data come from?",
        answer: "We pull daily prices & volumes from public APIs (yfinance / Alpha Vantage).",
    },
    FaqEntry {
        question: "How does the prediction work?",
        answer: "A Random Forest / Regression model is trained on the last 20 days of data to forecast tomorrow's closing price.",
    },
    FaqEntry {
        question: "How often is data updated?",
        answer: "Data and model retraining happen once every 24 hours to keep signals fresh.",
    },
    FaqEntry {
        question: "Is this investment advice?",
        answer: "No — this is an educational tool. Always conduct your own research before trading.",
    },
];
