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

//! Contiguity inspection for interval series.
//!
//! The window optimizer slides over positions and trusts the series to be
//! gap-free. These checks let the producer of a series report irregularities
//! before handing it over.

use chrono::{DateTime, Duration, Utc};

use energymix_types::Interval;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Irregularity {
    /// Time between the end of one interval and the start of the next
    Gap {
        previous_end: DateTime<Utc>,
        next_start: DateTime<Utc>,
    },
    /// Next interval starts before the previous one ends
    Overlap {
        previous_end: DateTime<Utc>,
        next_start: DateTime<Utc>,
    },
    /// Interval length differs from the expected granularity
    UnexpectedDuration {
        start: DateTime<Utc>,
        duration: Duration,
    },
}

/// List every irregularity of `intervals` against `granularity`, in series order.
pub fn find_irregularities(intervals: &[Interval], granularity: Duration) -> Vec<Irregularity> {
    let mut found = Vec::new();

    for (i, interval) in intervals.iter().enumerate() {
        if let Some(previous) = i.checked_sub(1).and_then(|p| intervals.get(p)) {
            if interval.start > previous.end {
                found.push(Irregularity::Gap {
                    previous_end: previous.end,
                    next_start: interval.start,
                });
            } else if interval.start < previous.end {
                found.push(Irregularity::Overlap {
                    previous_end: previous.end,
                    next_start: interval.start,
                });
            }
        }

        if interval.duration() != granularity {
            found.push(Irregularity::UnexpectedDuration {
                start: interval.start,
                duration: interval.duration(),
            });
        }
    }

    found
}

pub fn is_contiguous(intervals: &[Interval], granularity: Duration) -> bool {
    find_irregularities(intervals, granularity).is_empty()
}
