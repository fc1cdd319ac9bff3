use std::fmt;

use super::model::{FeatureColumn, IrisDataset};

// ---------------------------------------------------------------------------
// Descriptive statistics (pandas `describe()` layout)
// ---------------------------------------------------------------------------

/// The rows of the summary table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Count,
    Mean,
    Std,
    Min,
    Q25,
    Median,
    Q75,
    Max,
}

impl Statistic {
    pub const ALL: [Statistic; 8] = [
        Statistic::Count,
        Statistic::Mean,
        Statistic::Std,
        Statistic::Min,
        Statistic::Q25,
        Statistic::Median,
        Statistic::Q75,
        Statistic::Max,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Statistic::Count => "count",
            Statistic::Mean => "mean",
            Statistic::Std => "std",
            Statistic::Min => "min",
            Statistic::Q25 => "25%",
            Statistic::Median => "50%",
            Statistic::Q75 => "75%",
            Statistic::Max => "max",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Summary of a single numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator). NaN for n < 2.
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Summarise a slice of values. Returns `None` for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let std = if n < 2 {
            f64::NAN
        } else {
            let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (n - 1) as f64).sqrt()
        };

        Some(ColumnSummary {
            count: n,
            mean,
            std,
            min: sorted[0],
            q25: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q75: quantile_sorted(&sorted, 0.75),
            max: sorted[n - 1],
        })
    }

    pub fn get(&self, stat: Statistic) -> f64 {
        match stat {
            Statistic::Count => self.count as f64,
            Statistic::Mean => self.mean,
            Statistic::Std => self.std,
            Statistic::Min => self.min,
            Statistic::Q25 => self.q25,
            Statistic::Median => self.median,
            Statistic::Q75 => self.q75,
            Statistic::Max => self.max,
        }
    }
}

/// Linear interpolation between closest ranks on pre-sorted, non-empty data.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Statistics table: one [`ColumnSummary`] per feature column.
#[derive(Debug, Clone)]
pub struct SummaryTable {
    columns: Vec<(FeatureColumn, ColumnSummary)>,
}

impl SummaryTable {
    /// Describe every feature column of the dataset.
    pub fn describe(dataset: &IrisDataset) -> Self {
        let columns = FeatureColumn::ALL
            .into_iter()
            .filter_map(|c| ColumnSummary::from_values(&dataset.column(c)).map(|s| (c, s)))
            .collect();
        SummaryTable { columns }
    }

    pub fn columns(&self) -> impl Iterator<Item = FeatureColumn> + '_ {
        self.columns.iter().map(|(c, _)| *c)
    }

    /// Table rows: one per statistic, one value per column.
    pub fn rows(&self) -> Vec<(Statistic, Vec<f64>)> {
        Statistic::ALL
            .into_iter()
            .map(|stat| (stat, self.columns.iter().map(|(_, s)| s.get(stat)).collect()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_bundled;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_quantile_interpolates() {
        let s = ColumnSummary::from_values(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 4.0);
        assert!(close(s.q25, 1.75));
        assert!(close(s.median, 2.5));
        assert!(close(s.q75, 3.25));
        assert!(close(s.mean, 2.5));
        assert!(close(s.std, 1.2909944));
    }

    #[test]
    fn test_single_value_has_nan_std() {
        let s = ColumnSummary::from_values(&[3.0]).unwrap();
        assert_eq!(s.count, 1);
        assert!(s.std.is_nan());
        assert_eq!(s.median, 3.0);
        assert!(ColumnSummary::from_values(&[]).is_none());
    }

    #[test]
    fn test_table_shape() {
        let ds = load_bundled().unwrap();
        let table = SummaryTable::describe(&ds);
        let rows = table.rows();
        assert_eq!(rows.len(), 8);
        let labels: Vec<&str> = rows.iter().map(|(s, _)| s.label()).collect();
        assert_eq!(
            labels,
            ["count", "mean", "std", "min", "25%", "50%", "75%", "max"]
        );
        for (_, values) in &rows {
            assert_eq!(values.len(), 4);
        }
        assert_eq!(table.columns().collect::<Vec<_>>(), FeatureColumn::ALL.to_vec());
    }

    #[test]
    fn test_iris_statistics() {
        let ds = load_bundled().unwrap();
        let table = SummaryTable::describe(&ds);

        // (mean, std, min, 25%, 50%, 75%, max) per column.
        let expected = [
            (FeatureColumn::SepalLength, [5.843333, 0.828066, 4.3, 5.1, 5.8, 6.4, 7.9]),
            (FeatureColumn::SepalWidth, [3.057333, 0.435866, 2.0, 2.8, 3.0, 3.3, 4.4]),
            (FeatureColumn::PetalLength, [3.758, 1.765298, 1.0, 1.6, 4.35, 5.1, 6.9]),
            (FeatureColumn::PetalWidth, [1.199333, 0.762238, 0.1, 0.3, 1.3, 1.8, 2.5]),
        ];

        let rows = table.rows();
        for (i, (column, want)) in expected.into_iter().enumerate() {
            // Row 0 is the count; the rest follow `want`'s order.
            assert_eq!(rows[0].1[i], 150.0);
            for ((stat, values), w) in rows[1..].iter().zip(want.iter()) {
                let g = values[i];
                assert!((g - w).abs() < 1e-5, "{column} {stat}: got {g}, want {w}");
            }
        }
    }
}
