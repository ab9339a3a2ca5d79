/// Data layer: core types, loading, extraction, normalization, and output.
///
/// Architecture:
/// ```text
///  vendor export (.csv)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → RawTable (untyped X, Y)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ extract   │  cut XYDATA … Extended Information → Spectrum
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  Y / max(Y) → Spectrum
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  name_normalized.csv
///   └──────────┘
/// ```

pub mod extract;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod writer;
