/// Data layer: table model, loading, and transforms.
///
/// Architecture:
/// ```text
///  errors_*.txt / rk4_vanderpol*.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse text → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  row-major f64 matrix, column access
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ transform │  element-wise ln for log-log plots
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod transform;
