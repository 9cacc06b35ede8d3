//! # Aircraft Maintenance Extractor
//!
//! Pulls structured maintenance fields out of free-text aircraft listing
//! descriptions using an LLM, derives overhaul-planning metrics from them,
//! and writes one flat CSV row per listing.
//!
//! ## Pipeline
//!
//! - **Prompt**: a fixed extraction instruction wrapped around the listing
//!   text ([`llm::prompts`])
//! - **Model call**: a single deterministic (temperature 0) chat completion
//!   against OpenRouter ([`llm::client`])
//! - **Parse**: tolerant three-stage recovery of the model's JSON output
//!   ([`llm::parser`])
//! - **Derive**: overhaul basis, time remaining, years left, on-condition
//!   flag ([`calculator`])
//! - **Emit**: one row per non-blank input description ([`batch`])
//!
//! Every per-listing failure (API error, unparseable output, missing
//! fields) degrades to nulls in that listing's row; only a missing API key
//! or output I/O failure aborts a run.
//!
//! ## Example
//!
//! ```rust,ignore
//! use aircraft_maintenance_extractor::{
//!     batch::run_batch, extractor::AircraftDataExtractor, llm::client::OpenRouterClient,
//! };
//! use std::path::Path;
//!
//! # async fn run(api_key: String) -> anyhow::Result<()> {
//! let extractor = AircraftDataExtractor::new(OpenRouterClient::new(api_key));
//! let rows = run_batch(
//!     &extractor,
//!     Path::new("aircraft_listings.csv"),
//!     Path::new("aircraft_output.csv"),
//! )
//! .await?;
//! println!("wrote {} rows", rows);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod calculator;
pub mod error;
pub mod extractor;
pub mod llm;
pub mod record;

pub use batch::{read_descriptions, record_to_row, run_batch};
pub use calculator::calculate;
pub use error::{ExtractorError, Result};
pub use extractor::AircraftDataExtractor;
pub use llm::client::OpenRouterClient;
pub use llm::parser::parse_model_response;
pub use llm::prompts::build_extraction_prompt;
pub use record::{EnrichedRecord, ExtractedFields, OverhaulBasis, OUTPUT_COLUMNS};
