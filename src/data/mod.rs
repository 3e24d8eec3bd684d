/// Data layer: table type and loading.
///
/// Architecture:
/// ```text
///  .csv / .tsv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse delimited file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  headers + column-major f64 values
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
