use aircraft_maintenance_extractor::{
    run_batch, AircraftDataExtractor, ExtractorError, OpenRouterClient,
};
use dotenv::dotenv;
use log::info;
use std::path::Path;

const INPUT_FILE: &str = "aircraft_listings.csv";
const OUTPUT_FILE: &str = "aircraft_output.csv";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let api_key =
        std::env::var("OPENROUTER_API_KEY").map_err(|_| ExtractorError::MissingApiKey)?;

    let extractor = AircraftDataExtractor::new(OpenRouterClient::new(api_key));

    let rows_written = run_batch(
        &extractor,
        Path::new(INPUT_FILE),
        Path::new(OUTPUT_FILE),
    )
    .await?;

    info!(
        "{} rows successfully written to '{}'",
        rows_written, OUTPUT_FILE
    );
    Ok(())
}
