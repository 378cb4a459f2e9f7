mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;
mod util;

use dioxus_logger::tracing;

use crate::{config::Config, error::AppError, state::BotState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging()?;

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Database ready, starting bot");

    bot::start::start_bot(&config, BotState::new(db, &config)).await
}
