pub mod domain;
pub mod infrastructure;

pub use domain::errors::{ConfigError, ReportError};
pub use domain::metric::MetricValue;
pub use infrastructure::cloudwatch::CloudWatchReporter;
