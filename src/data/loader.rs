use std::io::Read;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::model::{IrisDataset, IrisRecord, Species};

/// The Iris table, compiled into the binary.
const BUNDLED_IRIS_CSV: &str = include_str!("../../assets/iris.csv");

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the bundled Iris dataset.
///
/// There is no fallback source: a failure here means the binary was built
/// with a broken asset and the application cannot start.
pub fn load_bundled() -> Result<IrisDataset> {
    load_csv(BUNDLED_IRIS_CSV.as_bytes()).context("loading bundled Iris dataset")
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// One CSV row as stored on disk. The species is kept as its integer class
/// target and derived into [`Species`] while converting.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "sepal length (cm)")]
    sepal_length: f64,
    #[serde(rename = "sepal width (cm)")]
    sepal_width: f64,
    #[serde(rename = "petal length (cm)")]
    petal_length: f64,
    #[serde(rename = "petal width (cm)")]
    petal_width: f64,
    target: u8,
}

/// CSV layout: header row naming the four feature columns and `target`.
///
/// ```text
/// sepal length (cm),sepal width (cm),petal length (cm),petal width (cm),target
/// 5.1,3.5,1.4,0.2,0
/// ```
pub fn load_csv<R: Read>(input: R) -> Result<IrisDataset> {
    let mut reader = csv::Reader::from_reader(input);

    let mut records = Vec::with_capacity(IrisDataset::EXPECTED_RECORDS);
    for (row_no, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let species =
            Species::from_target(row.target).with_context(|| format!("CSV row {row_no}"))?;

        records.push(IrisRecord {
            sepal_length: row.sepal_length,
            sepal_width: row.sepal_width,
            petal_length: row.petal_length,
            petal_width: row.petal_width,
            species,
        });
    }

    let dataset = IrisDataset::from_records(records).context("validating dataset shape")?;
    log::debug!("parsed {} Iris records", dataset.len());
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::FeatureColumn;

    const HEADER: &str =
        "sepal length (cm),sepal width (cm),petal length (cm),petal width (cm),target\n";

    #[test]
    fn test_bundled_dataset_shape() {
        let ds = load_bundled().unwrap();
        assert_eq!(ds.len(), 150);
        assert_eq!(ds.column_count(), 5);
        assert_eq!(ds.species().len(), 3);
        for species in Species::ALL {
            let n = ds.records().iter().filter(|r| r.species == species).count();
            assert_eq!(n, 50, "{species}");
        }
    }

    #[test]
    fn test_bundled_first_row() {
        let ds = load_bundled().unwrap();
        let first = &ds.records()[0];
        assert_eq!(first.value(FeatureColumn::SepalLength), 5.1);
        assert_eq!(first.value(FeatureColumn::SepalWidth), 3.5);
        assert_eq!(first.value(FeatureColumn::PetalLength), 1.4);
        assert_eq!(first.value(FeatureColumn::PetalWidth), 0.2);
        assert_eq!(first.species, Species::Setosa);
        assert_eq!(ds.records()[149].species, Species::Virginica);
    }

    #[test]
    fn test_unknown_target_is_error() {
        let csv = format!("{HEADER}5.1,3.5,1.4,0.2,7\n");
        let err = load_csv(csv.as_bytes()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("CSV row 0"), "{msg}");
        assert!(msg.contains("unknown species target 7"), "{msg}");
    }

    #[test]
    fn test_non_numeric_cell_is_error() {
        let csv = format!("{HEADER}5.1,abc,1.4,0.2,0\n");
        let err = load_csv(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("CSV row 0"));
    }

    #[test]
    fn test_truncated_table_is_error() {
        let csv = format!("{HEADER}5.1,3.5,1.4,0.2,0\n4.9,3.0,1.4,0.2,0\n");
        let err = load_csv(csv.as_bytes()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("expected 150 records, found 2"), "{msg}");
    }
}
