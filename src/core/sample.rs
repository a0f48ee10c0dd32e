use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// One immutable point of the raw series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: DateTime<Utc>,
    pub value: f64,
}

impl Sample {
    pub fn new(time: DateTime<Utc>, value: f64) -> ChartResult<Self> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(
                "sample value must be finite".to_owned(),
            ));
        }
        Ok(Self { time, value })
    }

    /// Converts strongly-typed decimal input into a validated sample.
    pub fn from_decimal(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        let value = value.to_f64().ok_or_else(|| {
            ChartError::InvalidData("sample value cannot be represented as f64".to_owned())
        })?;
        Self::new(time, value)
    }
}

/// Canonicalizes a raw series for chart use.
///
/// Drops samples with non-finite values, sorts ascending by timestamp, and
/// removes duplicate timestamps. The sort is stable, so for equal timestamps
/// the first sample in input order wins.
#[must_use]
pub fn canonicalize_samples(mut samples: Vec<Sample>) -> Vec<Sample> {
    let original_len = samples.len();
    samples.retain(|sample| sample.value.is_finite());
    samples.sort_by(|a, b| a.time.cmp(&b.time));

    let mut deduped: Vec<Sample> = Vec::with_capacity(samples.len());
    let mut duplicate_count = 0_usize;
    for sample in samples {
        if let Some(last) = deduped.last() {
            if sample.time.cmp(&last.time) == Ordering::Equal {
                duplicate_count += 1;
                continue;
            }
        }
        deduped.push(sample);
    }

    if deduped.len() != original_len {
        debug!(
            original_len,
            canonical_len = deduped.len(),
            duplicate_count,
            "canonicalized sample series"
        );
    }

    deduped
}
