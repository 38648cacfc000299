//! Vyhodnocovanie natrénovaných klasifikačných modelov: metriky
//! (accuracy, MAE, AUC) a kombinovaný ROC graf pre porovnanie modelov.

mod error;

pub mod evaluation;
pub mod models;

pub use error::{EvalError, Result};

pub use evaluation::metrics::{
    accuracy, mean_absolute_error_int, roc_auc_score, roc_curve, RocCurve, RocPoint,
};
pub use evaluation::reporter::{
    LogSink, MemorySink, Metric, MetricEvent, MetricSink, MetricsReporter, Split,
};
pub use evaluation::roc_chart::{
    plot_roc_comparison, plot_roc_comparison_to, ModelEntry, ROC_CHART_PATH,
};
pub use models::{
    BaselineStrategy, BaselineWrapper, ClassifierModel, LogRegWrapper, ModelFactory,
    RandomForestWrapper, TreeWrapper,
};
