//! Equal-width histogram summary of a score column.

/// One histogram bucket over [lower, upper).
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Binned distribution plus the median, for the companion chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bins: Vec<Bin>,
    pub median: Option<f64>,
}

/// Bin the values into `bin_count` equal-width buckets.
///
/// The domain runs from min(0, smallest value) to the largest value, so
/// the usual all-non-negative access scores are binned from zero the way
/// the companion chart draws them. Non-finite values are skipped. Empty
/// input yields an empty histogram, not an error.
pub fn summarize(values: impl IntoIterator<Item = f64>, bin_count: usize) -> Histogram {
    let mut samples: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
    samples.sort_by(|a, b| a.total_cmp(b));

    if samples.is_empty() || bin_count == 0 {
        return Histogram { bins: Vec::new(), median: None };
    }

    let median = quantile(&samples, 0.5);
    let lower = samples[0].min(0.0);
    let upper = samples[samples.len() - 1];

    // Constant-valued input: a single bucket holding everything.
    if upper <= lower {
        return Histogram {
            bins: vec![Bin { lower, upper, count: samples.len() }],
            median,
        };
    }

    let width = (upper - lower) / bin_count as f64;
    let mut bins: Vec<Bin> = (0..bin_count)
        .map(|i| Bin {
            lower: lower + width * i as f64,
            upper: lower + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for &v in &samples {
        let i = (((v - lower) / width) as usize).min(bin_count - 1);
        bins[i].count += 1;
    }

    Histogram { bins, median }
}

/// Linear-interpolated quantile of sorted samples, p in [0, 1].
fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let h = (sorted.len() - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * (h - h.floor()))
}
