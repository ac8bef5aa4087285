pub mod templates;
pub mod benchmarks;

pub use templates::{Fragment, Tag, TemplateCatalog, HASHTAG_MAX};
pub use benchmarks::{BenchmarkRow, BenchmarkTable, MetricBand};
