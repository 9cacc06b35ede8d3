//! Derives maintenance-planning metrics from the raw extracted fields.
//!
//! Everything here is pure: the calculator takes the mapping the parser
//! produced and returns a fresh record, never touching I/O or global state.
//! Unparseable values coerce to `None` rather than surfacing errors, since
//! the model's output is best-effort to begin with.

use crate::record::{
    EnrichedRecord, ExtractedFields, OverhaulBasis, AVG_HOURS_LEFT, BASIS_OF_CALCULATION,
    DATE_AD_POSTED, DATE_LAST_OVERHAUL, DATE_OVERHAUL_DUE, ENGINE_PROGRAM, HSI_HOURS,
    ON_CONDITION_REPAIR, OUTPUT_COLUMNS, RAW_DATE_LAST_HSI, RAW_ENGINE_PROGRAM, RAW_HSI_HOURS,
    TIME_REMAINING, TSN, TSOH, YEARS_LEFT,
};
use chrono::NaiveDate;
use serde_json::{Map, Value};

/// Hours assumed available for engines enrolled in an insurance program.
pub const PROGRAM_OVERHAUL_HOURS: i64 = 8000;
/// Hours from a midlife event (HSI or overhaul) to the next overhaul.
pub const MIDLIFE_INTERVAL_HOURS: i64 = 4000;
/// Assumed annual flight-hour usage rate.
pub const ANNUAL_USAGE_HOURS: f64 = 450.0;

/// Coerces a field to an integer. Accepts JSON integers and strings that
/// parse as base-10 integers; anything else is `None`.
fn int_field(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Coerces a field to a date. Only trimmed `YYYY-MM-DD` strings qualify.
fn date_field(value: Option<&Value>) -> Option<NaiveDate> {
    match value? {
        Value::String(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok(),
        _ => None,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn years_between(from: NaiveDate, to: NaiveDate) -> f64 {
    round2((to - from).num_days() as f64 / 365.0)
}

/// Renames the keys the model returns under awkward names, building a new
/// map rather than mutating in place. Absent keys are a no-op.
fn normalize_keys(data: ExtractedFields) -> ExtractedFields {
    const RENAMES: [(&str, &str); 3] = [
        (RAW_ENGINE_PROGRAM, ENGINE_PROGRAM),
        (RAW_DATE_LAST_HSI, crate::record::DATE_LAST_HSI),
        (RAW_HSI_HOURS, HSI_HOURS),
    ];

    let mut normalized = Map::new();
    for (key, value) in data {
        let key = RENAMES
            .iter()
            .find(|(old, _)| *old == key)
            .map(|(_, new)| (*new).to_string())
            .unwrap_or(key);
        normalized.insert(key, value);
    }
    normalized
}

/// Derives the five planning fields and projects the record onto the fixed
/// output columns. A missing extracted value becomes JSON null, so every
/// non-empty record carries the full column set.
pub fn calculate(data: ExtractedFields) -> EnrichedRecord {
    let tsn = int_field(data.get(TSN));
    let tsoh = int_field(data.get(TSOH));
    let hsi_hours = int_field(data.get(HSI_HOURS));
    let engine_program = data
        .get(RAW_ENGINE_PROGRAM)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty());

    // First matching rule wins.
    let (time_remaining, basis) = if engine_program.is_some() {
        (
            Some(PROGRAM_OVERHAUL_HOURS),
            Some(OverhaulBasis::InsuranceProgram),
        )
    } else if let Some(hours) = hsi_hours {
        (
            Some((MIDLIFE_INTERVAL_HOURS - hours).max(0)),
            Some(OverhaulBasis::Midlife),
        )
    } else if let Some(hours) = tsoh {
        (
            Some((MIDLIFE_INTERVAL_HOURS - hours).max(0)),
            Some(OverhaulBasis::Midlife),
        )
    } else if let Some(hours) = tsn {
        if hours < PROGRAM_OVERHAUL_HOURS {
            (
                Some(PROGRAM_OVERHAUL_HOURS - hours),
                Some(OverhaulBasis::TimeSinceNew),
            )
        } else {
            (Some(0), Some(OverhaulBasis::ConditionBased))
        }
    } else {
        (None, None)
    };

    let ad_posted = date_field(data.get(DATE_AD_POSTED));
    let last_overhaul = date_field(data.get(DATE_LAST_OVERHAUL));
    let overhaul_due = date_field(data.get(DATE_OVERHAUL_DUE));

    // Forward-looking when a due date is known, otherwise time elapsed since
    // the last overhaul. Negative values are meaningful (overdue) and kept.
    let years_left = match (overhaul_due, last_overhaul, ad_posted) {
        (Some(due), _, Some(posted)) => Some(years_between(posted, due)),
        (None, Some(last), Some(posted)) => Some(years_between(last, posted)),
        _ => None,
    };

    let avg_hours_left = years_left.map(|years| round2(years * ANNUAL_USAGE_HOURS));

    let on_condition_repair = matches!(tsn, Some(hours) if hours > PROGRAM_OVERHAUL_HOURS)
        && tsoh.is_none()
        && hsi_hours.is_none()
        && matches!(data.get(RAW_DATE_LAST_HSI), None | Some(Value::Null))
        && last_overhaul.is_none();

    let mut record = normalize_keys(data);
    record.insert(
        TIME_REMAINING.to_string(),
        time_remaining.map_or(Value::Null, Value::from),
    );
    record.insert(
        BASIS_OF_CALCULATION.to_string(),
        basis.map_or(Value::Null, |b| Value::from(b.as_str())),
    );
    record.insert(
        YEARS_LEFT.to_string(),
        years_left.map_or(Value::Null, Value::from),
    );
    record.insert(
        AVG_HOURS_LEFT.to_string(),
        avg_hours_left.map_or(Value::Null, Value::from),
    );
    record.insert(ON_CONDITION_REPAIR.to_string(), Value::from(on_condition_repair));

    // Project onto the known columns; anything extra the model invented is dropped.
    OUTPUT_COLUMNS
        .iter()
        .map(|&column| {
            (
                column.to_string(),
                record.get(column).cloned().unwrap_or(Value::Null),
            )
        })
        .collect()
}
