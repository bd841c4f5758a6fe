mod client;
mod history;

pub use client::{CardData, HttpPredictionClient, PredictionApi, RequestError, load_card_data};
pub use history::generate_history;
