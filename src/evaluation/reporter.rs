use serde::Serialize;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::Result;
use crate::evaluation::metrics::{mean_absolute_error_int, roc_auc_score};
use crate::models::ClassifierModel;

/// Dátový split, ku ktorému metrika patrí.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Split {
    Train,
    Test,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Metric {
    Accuracy,
    MeanAbsoluteError,
    RocAuc,
}

/// Jedna nameraná hodnota metriky.
#[derive(Debug, Clone, Serialize)]
pub struct MetricEvent {
    pub split: Split,
    pub metric: Metric,
    pub value: f64,
}

/// Odberateľ metrík. Reporter cez toto rozhranie emituje záznamy,
/// testy si ich vedia odchytiť bez parsovania logov.
pub trait MetricSink {
    fn record(&mut self, event: MetricEvent);
}

/// Posiela metriky do log fasády volajúceho.
#[derive(Debug, Default)]
pub struct LogSink;

impl MetricSink for LogSink {
    fn record(&mut self, event: MetricEvent) {
        match (event.split, event.metric) {
            (Split::Train, Metric::Accuracy) => log::info!("Training Accuracy {}", event.value),
            (Split::Test, Metric::Accuracy) => log::info!("Test Accuracy {}", event.value),
            (Split::Train, Metric::MeanAbsoluteError) => log::info!("MAE train {}", event.value),
            (Split::Test, Metric::MeanAbsoluteError) => log::info!("MAE test {}", event.value),
            (Split::Train, Metric::RocAuc) => log::info!("AUC train {}", event.value),
            (Split::Test, Metric::RocAuc) => log::info!("AUC test {}", event.value),
        }
    }
}

/// Zbiera eventy do pamäte.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub events: Vec<MetricEvent>,
}

impl MetricSink for MemorySink {
    fn record(&mut self, event: MetricEvent) {
        self.events.push(event);
    }
}

pub struct MetricsReporter;

impl MetricsReporter {
    /// Vyhodnotí natrénovaný model na train/test splite a emituje
    /// šesť záznamov: accuracy (%), MAE a AUC pre oba splity.
    ///
    /// AUC sa počíta z tvrdých predikovaných labelov, nie z
    /// pravdepodobností. Historická konvencia reportu, nemeniť.
    pub fn report(
        model: &dyn ClassifierModel,
        x_train: &DenseMatrix<f64>,
        x_test: &DenseMatrix<f64>,
        y_train: &[f64],
        y_test: &[f64],
        sink: &mut dyn MetricSink,
    ) -> Result<()> {
        let y_pred_test = model.predict(x_test)?;
        let y_pred_train = model.predict(x_train)?;

        sink.record(MetricEvent {
            split: Split::Train,
            metric: Metric::Accuracy,
            value: model.score(x_train, y_train)? * 100.0,
        });
        sink.record(MetricEvent {
            split: Split::Test,
            metric: Metric::Accuracy,
            value: model.score(x_test, y_test)? * 100.0,
        });
        sink.record(MetricEvent {
            split: Split::Train,
            metric: Metric::MeanAbsoluteError,
            value: mean_absolute_error_int(y_train, &y_pred_train)?,
        });
        sink.record(MetricEvent {
            split: Split::Test,
            metric: Metric::MeanAbsoluteError,
            value: mean_absolute_error_int(y_test, &y_pred_test)?,
        });
        sink.record(MetricEvent {
            split: Split::Train,
            metric: Metric::RocAuc,
            value: roc_auc_score(y_train, &y_pred_train)?,
        });
        sink.record(MetricEvent {
            split: Split::Test,
            metric: Metric::RocAuc,
            value: roc_auc_score(y_test, &y_pred_test)?,
        });
        Ok(())
    }

    /// Skratka: report cez log fasádu.
    pub fn report_to_log(
        model: &dyn ClassifierModel,
        x_train: &DenseMatrix<f64>,
        x_test: &DenseMatrix<f64>,
        y_train: &[f64],
        y_test: &[f64],
    ) -> Result<()> {
        let mut sink = LogSink;
        Self::report(model, x_train, x_test, y_train, y_test, &mut sink)
    }
}
