use chrono::{DateTime, Utc};

#[cfg(feature = "parallel-decimation")]
use rayon::prelude::*;

use crate::core::Sample;

/// Per-bucket extrema accumulator.
#[derive(Debug, Clone, Copy)]
struct BucketExtrema {
    min: Sample,
    max: Sample,
}

impl BucketExtrema {
    fn seed(sample: Sample) -> Self {
        Self {
            min: sample,
            max: sample,
        }
    }

    /// Strict comparisons keep the earlier-seen sample on value ties.
    fn absorb(&mut self, sample: Sample) {
        if sample.value < self.min.value {
            self.min = sample;
        }
        if sample.value > self.max.value {
            self.max = sample;
        }
    }

    #[cfg(feature = "parallel-decimation")]
    fn merge(mut self, other: Self) -> Self {
        self.absorb(other.min);
        self.absorb(other.max);
        self
    }
}

/// Reduces the samples inside `[from, to]` (inclusive) to at most
/// `point_budget` points while preserving local extrema.
///
/// The candidate range is split into `point_budget / 2` equal-width time
/// buckets and the min-value and max-value sample of each bucket are kept, so
/// transient spikes survive no matter how aggressive the reduction is. The
/// output is strictly ascending by timestamp with unique timestamps, for any
/// input order; on duplicate timestamps the first-seen sample wins.
///
/// An empty candidate range yields an empty vector, which callers treat as a
/// valid "nothing to draw" state.
#[must_use]
pub fn decimate(
    samples: &[Sample],
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    point_budget: usize,
) -> Vec<Sample> {
    if point_budget == 0 || from > to {
        return Vec::new();
    }

    let in_range: Vec<Sample> = samples
        .iter()
        .copied()
        .filter(|sample| sample.time >= from && sample.time <= to)
        .collect();

    if in_range.is_empty() {
        return Vec::new();
    }

    // Duplicate timestamps are resolved before bucketing, so the first-seen
    // rule holds on every path and buckets only ever see unique instants.
    let in_range = sort_unique(in_range);

    if in_range.len() <= point_budget {
        return in_range;
    }

    // More candidates than budget and unique timestamps, so the span is > 0.
    let start = in_range[0].time;
    let end = in_range[in_range.len() - 1].time;

    let bucket_count = (point_budget / 2).max(1);
    let span_ms = (end - start).num_milliseconds();

    let buckets = fill_buckets(&in_range, start, span_ms, bucket_count);

    let mut out = Vec::with_capacity(bucket_count * 2);
    for extrema in buckets.into_iter().flatten() {
        let (first, second) = if extrema.min.time <= extrema.max.time {
            (extrema.min, extrema.max)
        } else {
            (extrema.max, extrema.min)
        };
        out.push(first);
        if second.time != first.time {
            out.push(second);
        }
    }
    // A budget of 1 still gets one bucket emitting up to two extrema.
    out.truncate(point_budget);
    out
}

fn bucket_index(
    sample: Sample,
    start: DateTime<Utc>,
    span_ms: i64,
    bucket_count: usize,
) -> usize {
    let offset_ms = (sample.time - start).num_milliseconds();
    let ratio = offset_ms as f64 / span_ms as f64;
    ((ratio * bucket_count as f64) as usize).min(bucket_count - 1)
}

#[cfg(not(feature = "parallel-decimation"))]
fn fill_buckets(
    in_range: &[Sample],
    start: DateTime<Utc>,
    span_ms: i64,
    bucket_count: usize,
) -> Vec<Option<BucketExtrema>> {
    let mut buckets: Vec<Option<BucketExtrema>> = vec![None; bucket_count];
    for &sample in in_range {
        let index = bucket_index(sample, start, span_ms, bucket_count);
        if let Some(extrema) = buckets[index].as_mut() {
            extrema.absorb(sample);
        } else {
            buckets[index] = Some(BucketExtrema::seed(sample));
        }
    }
    buckets
}

// For large series, optional parallel bucket accumulation keeps output
// identical to the sequential path: fold runs over contiguous chunks and the
// ordered reduce prefers the left (earlier) accumulator on value ties.
#[cfg(feature = "parallel-decimation")]
fn fill_buckets(
    in_range: &[Sample],
    start: DateTime<Utc>,
    span_ms: i64,
    bucket_count: usize,
) -> Vec<Option<BucketExtrema>> {
    in_range
        .par_iter()
        .fold(
            || vec![None; bucket_count],
            |mut buckets: Vec<Option<BucketExtrema>>, &sample| {
                let index = bucket_index(sample, start, span_ms, bucket_count);
                if let Some(extrema) = buckets[index].as_mut() {
                    extrema.absorb(sample);
                } else {
                    buckets[index] = Some(BucketExtrema::seed(sample));
                }
                buckets
            },
        )
        .reduce(
            || vec![None; bucket_count],
            |left, right| {
                left.into_iter()
                    .zip(right)
                    .map(|pair| match pair {
                        (Some(a), Some(b)) => Some(a.merge(b)),
                        (Some(a), None) => Some(a),
                        (None, b) => b,
                    })
                    .collect()
            },
        )
}

/// Sorts ascending by timestamp and drops duplicate timestamps, keeping the
/// first-seen sample of each duplicate run.
fn sort_unique(mut samples: Vec<Sample>) -> Vec<Sample> {
    samples.sort_by(|a, b| a.time.cmp(&b.time));
    let mut out: Vec<Sample> = Vec::with_capacity(samples.len());
    for sample in samples {
        if out.last().is_none_or(|last| last.time != sample.time) {
            out.push(sample);
        }
    }
    out
}
