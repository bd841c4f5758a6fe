#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod models;
pub mod ui;

// Re-export commonly used types outside of crate
pub use app::App;
pub use data::{HttpPredictionClient, PredictionApi, RequestError};
pub use models::{PredictionRecord, TickerSubscription, TrendDirection};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Override the prediction API base URL
    #[arg(long)]
    pub api_url: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
