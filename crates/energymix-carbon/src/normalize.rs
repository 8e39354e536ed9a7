// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of EnergyMix.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! Conversion of raw `/generation` records into canonical intervals.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;
use tracing::{debug, warn};

use energymix_types::Interval;

const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";
const OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M%#z";

/// Extract the sorted interval series from a `/generation` response body.
///
/// A body without a `data` array yields an empty series. Records that cannot
/// be turned into an interval are skipped.
pub fn intervals_from_response(root: &Value) -> Vec<Interval> {
    let Some(records) = root.get("data").and_then(Value::as_array) else {
        debug!("Generation response has no data array");
        return Vec::new();
    };

    let mut intervals: Vec<Interval> = records.iter().filter_map(parse_record).collect();
    intervals.sort_by_key(|interval| interval.start);
    intervals
}

/// Convert one `{from, to, generationmix}` record
pub fn parse_record(record: &Value) -> Option<Interval> {
    let start = record
        .get("from")
        .and_then(Value::as_str)
        .and_then(parse_timestamp);
    let end = record
        .get("to")
        .and_then(Value::as_str)
        .and_then(parse_timestamp);

    let (Some(start), Some(end)) = (start, end) else {
        warn!(%record, "Skipping generation record with missing or invalid timestamps");
        return None;
    };

    if start >= end {
        warn!(%start, %end, "Skipping generation record that does not move forward in time");
        return None;
    }

    let mix: BTreeMap<String, f64> = record
        .get("generationmix")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(parse_fuel_share).collect())
        .unwrap_or_default();

    Some(Interval::new(start, end, mix))
}

fn parse_fuel_share(item: &Value) -> Option<(String, f64)> {
    let Some(fuel) = item.get("fuel").and_then(Value::as_str) else {
        warn!(%item, "Skipping generation mix entry without a fuel name");
        return None;
    };
    let percent = item.get("perc").map_or(0.0, percent_value);
    Some((fuel.to_lowercase(), percent))
}

/// Numeric value of a `perc` field; anything unreadable counts as zero
fn percent_value(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|percent| percent.is_finite()).unwrap_or(0.0)
}

/// Parse an API timestamp such as `2025-01-01T00:30Z`.
///
/// Numeric offsets (`+01:00`, `+0100`) and full RFC 3339 timestamps are also
/// accepted; the result is always UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Some(local) = raw.strip_suffix('Z')
        && let Ok(naive) = NaiveDateTime::parse_from_str(local, MINUTE_FORMAT)
    {
        return Some(naive.and_utc());
    }

    DateTime::parse_from_str(raw, OFFSET_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}
