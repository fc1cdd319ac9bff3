/// Data layer: core types, loading, statistics and selection.
///
/// Architecture:
/// ```text
///  assets/iris.csv (compiled in)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV, derive species → IrisDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ IrisDataset  │  150 validated records, read-only
///   └─────────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌───────────┐
///   │  stats    │   │ histogram  │  describe() table, 20-bin counts
///   └──────────┘   └───────────┘
///
///   ┌───────────┐
///   │ selection  │  chosen columns + histogram / X / Y choices
///   └───────────┘
/// ```

pub mod histogram;
pub mod loader;
pub mod model;
pub mod selection;
pub mod stats;
