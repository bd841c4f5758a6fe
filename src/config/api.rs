pub struct ClientDefaults {
    pub timeout_ms: u64,
}

/// Prediction API endpoint settings. The base URL can be overridden at
/// startup with `--api-url` (native) without touching this file.
pub struct ApiConfig {
    pub base_url: &'static str,
    pub predict_path: &'static str,
    pub client: ClientDefaults,
}

pub const API: ApiConfig = ApiConfig {
    base_url: "http://127.0.0.1:5000",
    predict_path: "/predict",
    client: ClientDefaults { timeout_ms: 15_000 },
};
