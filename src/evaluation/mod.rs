pub mod metrics;
pub mod reporter;
pub mod roc_chart;

pub use metrics::{accuracy, mean_absolute_error_int, roc_auc_score, roc_curve, RocCurve, RocPoint};
pub use reporter::{LogSink, MemorySink, Metric, MetricEvent, MetricSink, MetricsReporter, Split};
pub use roc_chart::{plot_roc_comparison, plot_roc_comparison_to, ModelEntry, ROC_CHART_PATH};
