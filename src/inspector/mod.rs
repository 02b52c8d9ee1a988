mod options;
mod report;

pub use options::{InspectorConfig, InspectorConfigBuilder, InspectorConfigError, ReportViews};
pub use report::{PatternReport, inspect_pattern};
