//! Sequential batch driver: input CSV in, one output row per listing.

use crate::error::{ExtractorError, Result};
use crate::extractor::AircraftDataExtractor;
use crate::record::{EnrichedRecord, OUTPUT_COLUMNS};
use log::info;
use serde_json::Value;
use std::path::Path;

const DESCRIPTION_COLUMN: &str = "Description";

/// Reads the input table and returns `(row_number, description)` pairs,
/// skipping rows whose description is empty or blank. Row numbers are
/// 1-based positions in the input, kept for progress logging.
pub fn read_descriptions(input_path: &Path) -> Result<Vec<(usize, String)>> {
    let mut reader = csv::Reader::from_path(input_path)?;

    let description_idx = reader
        .headers()?
        .iter()
        .position(|h| h == DESCRIPTION_COLUMN)
        .ok_or_else(|| ExtractorError::MissingColumn(DESCRIPTION_COLUMN.to_string()))?;

    let mut descriptions = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row?;
        let description = row.get(description_idx).unwrap_or("");
        if description.trim().is_empty() {
            continue;
        }
        descriptions.push((idx + 1, description.to_string()));
    }
    Ok(descriptions)
}

/// Renders a record as output cells in [`OUTPUT_COLUMNS`] order. Nulls and
/// missing keys become empty cells, which also makes an empty record (a
/// failed extraction) an all-blank row rather than a dropped one.
pub fn record_to_row(record: &EnrichedRecord) -> Vec<String> {
    OUTPUT_COLUMNS
        .iter()
        .map(|&column| match record.get(column) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => other.to_string(),
        })
        .collect()
}

/// Processes every non-blank description in `input_path`, writing one row
/// per description to `output_path`. Returns the number of rows written.
///
/// Descriptions are handled strictly in input order, one at a time; a
/// failure on one row never aborts the run, only I/O on the output does.
pub async fn run_batch(
    extractor: &AircraftDataExtractor,
    input_path: &Path,
    output_path: &Path,
) -> Result<usize> {
    let descriptions = read_descriptions(input_path)?;

    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record(OUTPUT_COLUMNS)?;

    let mut written = 0;
    for (row_number, description) in descriptions {
        info!("processing description {}", row_number);
        let record = extractor.extract(&description).await;
        writer.write_record(record_to_row(&record))?;
        written += 1;
    }
    writer.flush()?;

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};
    use std::fs;
    use std::path::PathBuf;

    fn temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_descriptions_skips_blank_rows() {
        let path = temp_csv(
            "extractor_batch_read_test.csv",
            "Id,Description\n1,First listing\n2,\n3,   \n4,Fourth listing\n",
        );
        let descriptions = read_descriptions(&path).unwrap();
        assert_eq!(
            descriptions,
            vec![
                (1, "First listing".to_string()),
                (4, "Fourth listing".to_string()),
            ]
        );
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_read_descriptions_requires_description_column() {
        let path = temp_csv(
            "extractor_batch_missing_column_test.csv",
            "Id,Text\n1,something\n",
        );
        let err = read_descriptions(&path).unwrap_err();
        assert!(matches!(err, ExtractorError::MissingColumn(_)));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_record_to_row_cell_rendering() {
        let mut record = Map::new();
        record.insert("TSN".to_string(), json!("6000"));
        record.insert("Time Remaining before Overhaul".to_string(), json!(2000));
        record.insert("years left for operation".to_string(), json!(1.5));
        record.insert("On Condition Repair".to_string(), json!(false));
        record.insert("CSN".to_string(), Value::Null);

        let row = record_to_row(&record);
        assert_eq!(row.len(), OUTPUT_COLUMNS.len());

        let cell = |column: &str| {
            let idx = OUTPUT_COLUMNS.iter().position(|&c| c == column).unwrap();
            row[idx].clone()
        };
        assert_eq!(cell("TSN"), "6000");
        assert_eq!(cell("Time Remaining before Overhaul"), "2000");
        assert_eq!(cell("years left for operation"), "1.5");
        assert_eq!(cell("On Condition Repair"), "false");
        assert_eq!(cell("CSN"), "");
        assert_eq!(cell("TTAF"), "");
    }

    #[test]
    fn test_empty_record_renders_all_blank_row() {
        let row = record_to_row(&Map::new());
        assert!(row.iter().all(String::is_empty));
        assert_eq!(row.len(), OUTPUT_COLUMNS.len());
    }
}
