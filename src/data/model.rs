use std::fmt;

// ---------------------------------------------------------------------------
// FeatureColumn – one of the four numeric measurements
// ---------------------------------------------------------------------------

/// The numeric feature columns of the Iris dataset, in dataset order.
///
/// The schema is fixed, so columns are a closed enum rather than
/// string-keyed lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeatureColumn {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl FeatureColumn {
    /// All feature columns in dataset order.
    pub const ALL: [FeatureColumn; 4] = [
        FeatureColumn::SepalLength,
        FeatureColumn::SepalWidth,
        FeatureColumn::PetalLength,
        FeatureColumn::PetalWidth,
    ];

    /// Column header as it appears in the bundled CSV and in the UI.
    pub fn label(self) -> &'static str {
        match self {
            FeatureColumn::SepalLength => "sepal length (cm)",
            FeatureColumn::SepalWidth => "sepal width (cm)",
            FeatureColumn::PetalLength => "petal length (cm)",
            FeatureColumn::PetalWidth => "petal width (cm)",
        }
    }
}

impl fmt::Display for FeatureColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Species – the derived categorical label
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    /// Derive the species from the integer class target (0, 1, 2).
    pub fn from_target(target: u8) -> Result<Self, DatasetError> {
        match target {
            0 => Ok(Species::Setosa),
            1 => Ok(Species::Versicolor),
            2 => Ok(Species::Virginica),
            other => Err(DatasetError::UnknownTarget(other)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("unknown species target {0} (expected 0, 1 or 2)")]
    UnknownTarget(u8),

    #[error("expected {expected} records, found {found}")]
    RecordCount { expected: usize, found: usize },

    #[error("species {species} has {found} records, expected {expected}")]
    SpeciesCount {
        species: Species,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: {column} is not a finite number")]
    NonFinite { row: usize, column: FeatureColumn },
}

// ---------------------------------------------------------------------------
// IrisRecord – one row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct IrisRecord {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
    pub species: Species,
}

impl IrisRecord {
    /// Value of the given feature column.
    pub fn value(&self, column: FeatureColumn) -> f64 {
        match column {
            FeatureColumn::SepalLength => self.sepal_length,
            FeatureColumn::SepalWidth => self.sepal_width,
            FeatureColumn::PetalLength => self.petal_length,
            FeatureColumn::PetalWidth => self.petal_width,
        }
    }
}

// ---------------------------------------------------------------------------
// IrisDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full, validated dataset. Read-only after construction.
#[derive(Debug, Clone)]
pub struct IrisDataset {
    records: Vec<IrisRecord>,
}

impl IrisDataset {
    pub const EXPECTED_RECORDS: usize = 150;
    pub const RECORDS_PER_SPECIES: usize = 50;
    /// Four features plus the species label.
    pub const COLUMN_COUNT: usize = FeatureColumn::ALL.len() + 1;

    /// Validate the shape of the table and wrap it.
    pub fn from_records(records: Vec<IrisRecord>) -> Result<Self, DatasetError> {
        if records.len() != Self::EXPECTED_RECORDS {
            return Err(DatasetError::RecordCount {
                expected: Self::EXPECTED_RECORDS,
                found: records.len(),
            });
        }

        for (row, rec) in records.iter().enumerate() {
            if let Some(column) = FeatureColumn::ALL
                .into_iter()
                .find(|&c| !rec.value(c).is_finite())
            {
                return Err(DatasetError::NonFinite { row, column });
            }
        }

        for species in Species::ALL {
            let found = records.iter().filter(|r| r.species == species).count();
            if found != Self::RECORDS_PER_SPECIES {
                return Err(DatasetError::SpeciesCount {
                    species,
                    expected: Self::RECORDS_PER_SPECIES,
                    found,
                });
            }
        }

        Ok(IrisDataset { records })
    }

    pub fn records(&self) -> &[IrisRecord] {
        &self.records
    }

    /// First `n` records (fewer if the table is shorter).
    pub fn head(&self, n: usize) -> &[IrisRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// All values of one feature column, in record order.
    pub fn column(&self, column: FeatureColumn) -> Vec<f64> {
        self.records.iter().map(|r| r.value(column)).collect()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Number of logical columns (features + species).
    pub fn column_count(&self) -> usize {
        Self::COLUMN_COUNT
    }

    /// Distinct species present, in label order.
    pub fn species(&self) -> Vec<Species> {
        Species::ALL
            .into_iter()
            .filter(|s| self.records.iter().any(|r| r.species == *s))
            .collect()
    }
}
