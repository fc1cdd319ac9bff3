// ---------------------------------------------------------------------------
// Equal-width histogram binning
// ---------------------------------------------------------------------------

/// A frequency histogram with equal-width bins.
///
/// Bins are half-open `[lo, hi)` except the last, which also includes the
/// upper edge so the maximum value is always counted.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `counts.len() + 1` ascending bin edges.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width buckets spanning `[min, max]`.
    ///
    /// When all values are equal the range is widened to
    /// `[v - 0.5, v + 0.5]`. Non-finite values are skipped. Returns `None`
    /// for `bins == 0` or when there is no finite value.
    pub fn from_values(values: &[f64], bins: usize) -> Option<Self> {
        if bins == 0 {
            return None;
        }
        let finite = || values.iter().copied().filter(|v| v.is_finite());
        let min = finite().min_by(f64::total_cmp)?;
        let max = finite().max_by(f64::total_cmp)?;

        let (lo, hi) = if min == max {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };
        let width = (hi - lo) / bins as f64;

        let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();
        let mut counts = vec![0usize; bins];
        for v in finite() {
            let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Some(Histogram { edges, counts })
    }

    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    pub fn bin_width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    /// Centre of each bin, paired with its count.
    pub fn bars(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(self.counts.iter())
            .map(|(w, &c)| ((w[0] + w[1]) / 2.0, c))
    }
}
