/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet  (local or http)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │   Dataset     │  Vec<Record>, FacetCatalog
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  Selection → Subset (row positions)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  mean / max / mode / group means / bins
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  KPIs + per-chart data, None = no data
///   └──────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
