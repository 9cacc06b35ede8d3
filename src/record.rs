//! Field names and record types shared across the extraction pipeline.
//!
//! The model is prompted with a fixed set of 14 field keys; the calculator
//! adds five derived columns and normalizes three awkward key names, giving
//! the 19-column output table.

use serde_json::{Map, Value};

/// Raw key/value mapping as returned by the model, taken as provided.
pub type ExtractedFields = Map<String, Value>;

/// Extracted fields plus derived metrics, projected onto [`OUTPUT_COLUMNS`].
/// Empty when extraction failed for a listing.
pub type EnrichedRecord = Map<String, Value>;

pub const DATE_AD_POSTED: &str = "Date advertisement was posted";
pub const MANUFACTURE_YEAR: &str = "Manufacture Year of plane";
pub const REGISTRATION_NUMBER: &str = "Registration number of plane";
pub const TTAF: &str = "TTAF";
pub const ENGINE_POSITION: &str = "Position of engine";
pub const TSN: &str = "TSN";
pub const CSN: &str = "CSN";
pub const TSOH: &str = "Total Time Since Overhaul (TSOH)";
pub const EARLY_TBO: &str = "Time Before Overhaul provided in the information (Early TBO)";
pub const HSI_HOURS: &str = "Hours since HSI (Hot Service Inspection)";
pub const DATE_LAST_HSI: &str = "Date of Last HSI (Hot Service Inspection)";
pub const DATE_LAST_OVERHAUL: &str = "Date of Last Overhaul";
pub const DATE_OVERHAUL_DUE: &str = "Date of Overhaul Due";

/// Key the model is prompted with for the insurance program; renamed on output.
pub const RAW_ENGINE_PROGRAM: &str = "Insurance Maintenance Program the engine is enrolled in";
/// Short-form keys the model sometimes emits; renamed on output.
pub const RAW_DATE_LAST_HSI: &str = "Date of Last HSI";
pub const RAW_HSI_HOURS: &str = "Hours since HSI";

pub const ENGINE_PROGRAM: &str = "Engine Maintenance Insurance Program Name";
pub const TIME_REMAINING: &str = "Time Remaining before Overhaul";
pub const BASIS_OF_CALCULATION: &str = "Basis of Calculation";
pub const YEARS_LEFT: &str = "years left for operation";
pub const AVG_HOURS_LEFT: &str =
    "Average Hours left for operation according to 450 hours annual usage";
pub const ON_CONDITION_REPAIR: &str = "On Condition Repair";

/// The 14 keys the model is asked to extract, in prompt order.
pub const EXTRACTION_FIELDS: [&str; 14] = [
    DATE_AD_POSTED,
    MANUFACTURE_YEAR,
    REGISTRATION_NUMBER,
    TTAF,
    ENGINE_POSITION,
    TSN,
    CSN,
    TSOH,
    EARLY_TBO,
    HSI_HOURS,
    DATE_LAST_HSI,
    RAW_ENGINE_PROGRAM,
    DATE_LAST_OVERHAUL,
    DATE_OVERHAUL_DUE,
];

/// Output column headers, in the fixed order the CSV table is written.
pub const OUTPUT_COLUMNS: [&str; 19] = [
    DATE_AD_POSTED,
    MANUFACTURE_YEAR,
    REGISTRATION_NUMBER,
    TTAF,
    ENGINE_POSITION,
    TSN,
    CSN,
    TSOH,
    EARLY_TBO,
    HSI_HOURS,
    DATE_LAST_HSI,
    ENGINE_PROGRAM,
    DATE_OVERHAUL_DUE,
    DATE_LAST_OVERHAUL,
    TIME_REMAINING,
    BASIS_OF_CALCULATION,
    YEARS_LEFT,
    AVG_HOURS_LEFT,
    ON_CONDITION_REPAIR,
];

/// Which rule produced the time-remaining figure for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverhaulBasis {
    InsuranceProgram,
    Midlife,
    TimeSinceNew,
    ConditionBased,
}

impl OverhaulBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverhaulBasis::InsuranceProgram => "Insurance Maintenance Program",
            OverhaulBasis::Midlife => "Midlife Calculation",
            OverhaulBasis::TimeSinceNew => "time since new",
            OverhaulBasis::ConditionBased => "condition based",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_fields_are_a_subset_of_output_columns_after_rename() {
        for field in EXTRACTION_FIELDS {
            let output_name = if field == RAW_ENGINE_PROGRAM {
                ENGINE_PROGRAM
            } else {
                field
            };
            assert!(
                OUTPUT_COLUMNS.contains(&output_name),
                "no output column for extraction field '{}'",
                field
            );
        }
    }

    #[test]
    fn test_basis_labels() {
        assert_eq!(
            OverhaulBasis::InsuranceProgram.as_str(),
            "Insurance Maintenance Program"
        );
        assert_eq!(OverhaulBasis::Midlife.as_str(), "Midlife Calculation");
        assert_eq!(OverhaulBasis::TimeSinceNew.as_str(), "time since new");
        assert_eq!(OverhaulBasis::ConditionBased.as_str(), "condition based");
    }
}
